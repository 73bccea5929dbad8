use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FitError;
use crate::models::Address;

/// Kind of coaching a consultation asks about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConsultationService {
    Nutrition,
    Training,
    Both,
    Other,
}

impl ConsultationService {
    pub const ALL: [ConsultationService; 4] = [
        ConsultationService::Nutrition,
        ConsultationService::Training,
        ConsultationService::Both,
        ConsultationService::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ConsultationService::Nutrition => "nutrition",
            ConsultationService::Training => "training",
            ConsultationService::Both => "both",
            ConsultationService::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ConsultationService::Nutrition => "Asesoría Nutricional",
            ConsultationService::Training => "Asesoría de Entrenamiento",
            ConsultationService::Both => "Nutrición + Entrenamiento",
            ConsultationService::Other => "Otro",
        }
    }
}

impl fmt::Display for ConsultationService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConsultationService {
    type Err = FitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ConsultationService::ALL
            .into_iter()
            .find(|c| c.as_str() == s.trim().to_lowercase())
            .ok_or_else(|| FitError::InvalidInput(format!("Unknown service: {}", s)))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConsultationStatus {
    Pending,
    Answered,
}

impl fmt::Display for ConsultationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConsultationStatus::Pending => f.write_str("pending"),
            ConsultationStatus::Answered => f.write_str("answered"),
        }
    }
}

/// A message sent through the contact form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Consultation {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    pub service: ConsultationService,
    pub message: String,
    pub status: ConsultationStatus,
    /// Unix timestamp in seconds.
    pub created_at: u64,
}

impl Consultation {
    /// Names of required fields that are blank or malformed. Phone is optional.
    pub fn problems(&self) -> Vec<&'static str> {
        let mut problems = Vec::new();
        if self.name.trim().is_empty() {
            problems.push("name");
        }
        let email = self.email.trim();
        if email.is_empty() || !email.contains('@') {
            problems.push("email");
        }
        if self.message.trim().is_empty() {
            problems.push("message");
        }
        problems
    }
}

/// An address kept in a user's address book.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedAddress {
    pub id: String,
    pub user_id: String,
    #[serde(flatten)]
    pub address: Address,
    #[serde(default)]
    pub is_default: bool,
    pub created_at: u64,
}
