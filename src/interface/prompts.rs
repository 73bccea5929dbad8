use dialoguer::{Confirm, Input, Select};
use strsim::jaro_winkler;

use crate::cli::{AddressArgs, ContactArgs};
use crate::error::{FitError, Result};
use crate::models::{
    Address, Consultation, ConsultationService, ConsultationStatus, Food, MealTime, SavedAddress,
};
use crate::planner::{DEFAULT_ADD_GRAMS, MealComposer, validate_date};

/// Minimum Jaro-Winkler similarity for a fuzzy food match.
const FUZZY_THRESHOLD: f64 = 0.7;

/// Find foods by exact id/name first, then by fuzzy name similarity.
///
/// Fuzzy candidates are sorted best first.
pub fn match_foods<'a>(catalog: &'a [Food], input: &str) -> Vec<&'a Food> {
    let needle = input.trim().to_lowercase();

    if let Some(food) = catalog
        .iter()
        .find(|f| f.id.to_lowercase() == needle || f.name.to_lowercase() == needle)
    {
        return vec![food];
    }

    let mut candidates: Vec<(&Food, f64)> = catalog
        .iter()
        .map(|f| (f, jaro_winkler(&f.name.to_lowercase(), &needle)))
        .filter(|(_, score)| *score > FUZZY_THRESHOLD)
        .collect();

    candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    candidates.into_iter().map(|(f, _)| f).collect()
}

/// Prompt for a food name and resolve it against the catalog.
///
/// Returns None when the user enters nothing or declines every match.
pub fn prompt_food<'a>(catalog: &'a [Food]) -> Result<Option<&'a Food>> {
    loop {
        let input: String = Input::new()
            .with_prompt("Add a food (or press Enter to finish)")
            .allow_empty(true)
            .interact_text()?;

        let input = input.trim();
        if input.is_empty() {
            return Ok(None);
        }

        let candidates = match_foods(catalog, input);

        match candidates.as_slice() {
            [] => {
                println!("No matching food found for '{}'", input);
            }
            [food] => {
                if food.name.to_lowercase() == input.to_lowercase() || food.id == input {
                    return Ok(Some(*food));
                }
                let confirm = Confirm::new()
                    .with_prompt(format!("Did you mean '{}'?", food.name))
                    .default(true)
                    .interact()?;
                if confirm {
                    return Ok(Some(*food));
                }
            }
            _ => {
                let shown: Vec<&Food> = candidates.iter().take(5).copied().collect();
                let mut options: Vec<String> = shown.iter().map(|f| f.name.clone()).collect();
                options.push("None of these".to_string());

                let selection = Select::new()
                    .with_prompt("Which did you mean?")
                    .items(&options)
                    .default(0)
                    .interact()?;

                if selection < shown.len() {
                    return Ok(Some(shown[selection]));
                }
            }
        }
    }
}

/// Parse a gram amount: a finite number, zero or more.
pub fn parse_grams(input: &str) -> Result<f64> {
    let grams: f64 = input
        .trim()
        .parse()
        .map_err(|_| FitError::InvalidInput(format!("Invalid number: {}", input.trim())))?;
    if !grams.is_finite() || grams < 0.0 {
        return Err(FitError::InvalidInput(format!(
            "Grams must be a finite amount of zero or more: {}",
            input.trim()
        )));
    }
    Ok(grams)
}

/// Prompt for a gram amount, asking again until it parses.
pub fn prompt_grams(food_name: &str, default: f64) -> Result<f64> {
    let input: String = Input::new()
        .with_prompt(format!("Grams of {}", food_name))
        .default(format!("{}", default))
        .validate_with(|value: &String| parse_grams(value).map(|_| ()).map_err(|e| e.to_string()))
        .interact_text()?;

    parse_grams(&input)
}

/// Prompt for a free-text value. Blank input is only accepted when a default is given.
pub fn prompt_text(prompt: &str, default: Option<&str>) -> Result<String> {
    let mut input = Input::<String>::new().with_prompt(prompt);
    if let Some(default) = default {
        input = input.default(default.to_string());
    }
    Ok(input.interact_text()?.trim().to_string())
}

/// Prompt for a `YYYY-MM-DD` date.
pub fn prompt_date() -> Result<String> {
    let date: String = Input::new()
        .with_prompt("Date (YYYY-MM-DD)")
        .validate_with(|value: &String| validate_date(value.trim()).map_err(|e| e.to_string()))
        .interact_text()?;
    Ok(date.trim().to_string())
}

/// Prompt for the meal time, defaulting to lunch.
pub fn prompt_meal_time() -> Result<MealTime> {
    let options: Vec<&str> = MealTime::ALL.iter().map(|t| t.as_str()).collect();
    let selection = Select::new()
        .with_prompt("Meal time")
        .items(&options)
        .default(1)
        .interact()?;
    Ok(MealTime::ALL[selection])
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// A change to one food's portion in a meal being composed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PortionEdit {
    /// Add grams on top of what is there.
    Add(f64),
    /// Replace the amount; zero removes the portion.
    Set(f64),
}

/// Apply an edit and describe what happened.
pub fn apply_portion_edit(composer: &mut MealComposer, food: &Food, edit: PortionEdit) -> String {
    match edit {
        PortionEdit::Add(grams) if grams > 0.0 => {
            composer.add_food(food, grams);
            format!("Added {}g of {}", grams, food.name)
        }
        PortionEdit::Add(_) => format!("Nothing added for {}", food.name),
        PortionEdit::Set(grams) => {
            let present = composer.set_grams(&food.id, grams);
            match (present, grams > 0.0) {
                (true, true) => format!("{} set to {}g", food.name, grams),
                (true, false) => format!("Removed: {}", food.name),
                (false, _) => format!("{} is not in the meal", food.name),
            }
        }
    }
}

/// Ask how to change a food that is already in the meal.
fn prompt_existing_portion(food: &Food, current: f64) -> Result<PortionEdit> {
    let options = ["Add more", "Set grams", "Remove"];
    let selection = Select::new()
        .with_prompt(format!("{} is already in the meal ({}g)", food.name, current))
        .items(&options)
        .default(0)
        .interact()?;

    Ok(match selection {
        0 => PortionEdit::Add(prompt_grams(&food.name, DEFAULT_ADD_GRAMS)?),
        1 => PortionEdit::Set(prompt_grams(&food.name, current)?),
        _ => PortionEdit::Set(0.0),
    })
}

/// Interactively add and adjust portions until the user is done.
///
/// Picking a food already in the meal offers to add more, set an exact
/// amount or remove it.
pub fn compose_meal(catalog: &[Food], composer: &mut MealComposer) -> Result<()> {
    while let Some(food) = prompt_food(catalog)? {
        let current = composer
            .portions()
            .iter()
            .find(|p| p.food.id == food.id)
            .map(|p| p.grams);

        let edit = match current {
            Some(current) => prompt_existing_portion(food, current)?,
            None => PortionEdit::Add(prompt_grams(&food.name, DEFAULT_ADD_GRAMS)?),
        };
        println!("{}", apply_portion_edit(composer, food, edit));

        let totals = composer.totals();
        println!(
            "  Running totals: {} kcal | P {}g | C {}g | F {}g",
            totals.calories, totals.protein, totals.carbs, totals.fat
        );
    }
    Ok(())
}

/// Fill in address fields not given on the command line.
pub fn collect_address(args: AddressArgs) -> Result<Address> {
    let field = |value: Option<String>, prompt: &str| -> Result<String> {
        match value {
            Some(v) if !v.trim().is_empty() => Ok(v.trim().to_string()),
            _ => prompt_text(prompt, None),
        }
    };

    Ok(Address {
        full_name: field(args.full_name, "Full name")?,
        street: field(args.street, "Street")?,
        city: field(args.city, "City")?,
        postal_code: field(args.postal_code, "Postal code")?,
        country: field(args.country, "Country")?,
        phone: match args.phone {
            Some(phone) => phone.trim().to_string(),
            None => prompt_text("Phone (optional)", Some(""))?,
        },
    })
}

/// Let the user pick a saved address or choose to enter a new one.
///
/// Returns None for "new address".
pub fn prompt_saved_address(saved: &[SavedAddress]) -> Result<Option<Address>> {
    let mut options: Vec<String> = saved
        .iter()
        .map(|a| {
            format!(
                "{}{}, {}, {} {}",
                if a.is_default { "* " } else { "" },
                a.address.full_name,
                a.address.street,
                a.address.postal_code,
                a.address.city
            )
        })
        .collect();
    options.push("Enter a new address".to_string());

    let selection = Select::new()
        .with_prompt("Ship to")
        .items(&options)
        .default(0)
        .interact()?;

    Ok(saved.get(selection).map(|a| a.address.clone()))
}

/// Prompt for the consultation service.
pub fn prompt_service() -> Result<ConsultationService> {
    let options: Vec<&str> = ConsultationService::ALL.iter().map(|c| c.label()).collect();
    let selection = Select::new()
        .with_prompt("Service")
        .items(&options)
        .default(0)
        .interact()?;
    Ok(ConsultationService::ALL[selection])
}

/// Fill in contact form fields not given on the command line.
pub fn collect_consultation(args: ContactArgs, id: String, created_at: u64) -> Result<Consultation> {
    let field = |value: Option<String>, prompt: &str| -> Result<String> {
        match value {
            Some(v) if !v.trim().is_empty() => Ok(v.trim().to_string()),
            _ => prompt_text(prompt, None),
        }
    };

    let name = field(args.name, "Name")?;
    let email = field(args.email, "Email")?;
    let phone = match args.phone {
        Some(phone) => phone.trim().to_string(),
        None => prompt_text("Phone (optional)", Some(""))?,
    };
    let service = match args.service {
        Some(service) => service.parse()?,
        None => prompt_service()?,
    };
    let message = field(args.message, "Message")?;

    Ok(Consultation {
        id,
        name,
        email,
        phone,
        service,
        message,
        status: ConsultationStatus::Pending,
        created_at,
    })
}
