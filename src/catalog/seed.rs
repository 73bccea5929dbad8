use crate::models::{Food, Product};

const PLACEHOLDER_FOOD_IMAGE: &str = "/placeholder.svg?height=100&width=100";
const PLACEHOLDER_PRODUCT_IMAGE: &str = "/placeholder.svg?height=300&width=300";

fn food(id: &str, name: &str, macros: [f64; 4], category: &str) -> Food {
    let [calories, protein, carbs, fat] = macros;
    Food {
        id: id.to_string(),
        name: name.to_string(),
        calories,
        protein,
        carbs,
        fat,
        portion: 100.0,
        category: category.to_string(),
        image: Some(PLACEHOLDER_FOOD_IMAGE.to_string()),
    }
}

fn product(id: &str, name: &str, description: &str, price: f64, category: &str, stock: u32) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        price,
        image: PLACEHOLDER_PRODUCT_IMAGE.to_string(),
        category: category.to_string(),
        stock,
    }
}

/// Demo food catalog used when nothing else is configured.
///
/// Macros are per 100 g: [calories, protein, carbs, fat].
pub fn demo_foods() -> Vec<Food> {
    vec![
        food("food_001", "Pechuga de pollo", [165.0, 31.0, 0.0, 3.6], "proteínas"),
        food("food_002", "Arroz blanco", [130.0, 2.7, 28.0, 0.3], "carbohidratos"),
        food("food_003", "Huevo entero", [155.0, 13.0, 1.1, 11.0], "proteínas"),
        food("food_004", "Atún en conserva", [116.0, 25.5, 0.0, 1.0], "proteínas"),
        food("food_005", "Patata", [77.0, 2.0, 17.0, 0.1], "carbohidratos"),
    ]
}

/// Demo storefront products.
pub fn demo_products() -> Vec<Product> {
    vec![
        product(
            "prod_001",
            "Proteína Whey Premium",
            "Proteína de suero de alta calidad con 24g de proteína por porción. Sabor chocolate.",
            29.99,
            "suplementos",
            50,
        ),
        product(
            "prod_002",
            "Creatina Monohidrato",
            "Creatina pura para aumentar la fuerza y el rendimiento muscular. 500g.",
            19.99,
            "suplementos",
            35,
        ),
        product(
            "prod_003",
            "Mancuernas Ajustables 20kg",
            "Par de mancuernas ajustables de 2 a 20kg cada una. Perfectas para entrenamiento en casa.",
            149.99,
            "equipamiento",
            10,
        ),
        product(
            "prod_004",
            "Barras Proteicas (12 uds)",
            "Barras de proteína con 20g de proteína y bajo contenido en azúcar. Varios sabores.",
            24.99,
            "suplementos",
            40,
        ),
        product(
            "prod_005",
            "Esterilla de Yoga Premium",
            "Esterilla antideslizante de 6mm de grosor. Perfecta para yoga y pilates.",
            34.99,
            "equipamiento",
            25,
        ),
    ]
}
