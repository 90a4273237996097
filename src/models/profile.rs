use serde::{Deserialize, Serialize};

use crate::error::{DietError, Result};

/// Biological gender, as used by the Harris-Benedict formula.
///
/// The legacy data used Portuguese labels on the wire; unknown strings fall
/// back to `Male`, matching the old collaborator's default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    #[serde(rename = "Masculino")]
    Male,
    #[serde(rename = "Feminino")]
    Female,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    pub fn label(&self) -> &'static str {
        match self {
            Gender::Male => "Masculino",
            Gender::Female => "Feminino",
        }
    }

    /// Parse a legacy label. Anything unrecognized is `Male`.
    pub fn from_label(s: &str) -> Self {
        match s.trim() {
            "Feminino" => Gender::Female,
            _ => Gender::Male,
        }
    }
}

/// Declared activity level, mapped to a fixed BMR multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivityLevel {
    #[serde(rename = "Sedentário")]
    Sedentary,
    #[serde(rename = "Levemente ativo")]
    LightlyActive,
    #[serde(rename = "Moderadamente ativo")]
    ModeratelyActive,
    #[serde(rename = "Muito ativo")]
    VeryActive,
    #[serde(rename = "Extremamente ativo")]
    ExtremelyActive,
}

impl ActivityLevel {
    pub const ALL: [ActivityLevel; 5] = [
        ActivityLevel::Sedentary,
        ActivityLevel::LightlyActive,
        ActivityLevel::ModeratelyActive,
        ActivityLevel::VeryActive,
        ActivityLevel::ExtremelyActive,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Sedentário",
            ActivityLevel::LightlyActive => "Levemente ativo",
            ActivityLevel::ModeratelyActive => "Moderadamente ativo",
            ActivityLevel::VeryActive => "Muito ativo",
            ActivityLevel::ExtremelyActive => "Extremamente ativo",
        }
    }

    /// Parse a legacy label. Unknown strings are `Sedentary` (multiplier 1.2).
    pub fn from_label(s: &str) -> Self {
        match s.trim() {
            "Levemente ativo" => ActivityLevel::LightlyActive,
            "Moderadamente ativo" => ActivityLevel::ModeratelyActive,
            "Muito ativo" => ActivityLevel::VeryActive,
            "Extremamente ativo" => ActivityLevel::ExtremelyActive,
            _ => ActivityLevel::Sedentary,
        }
    }
}

/// Training goal. Drives the calorie adjustment and the macro split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Goal {
    #[serde(rename = "Perda de peso")]
    WeightLoss,
    #[serde(rename = "Hipertrofia")]
    Hypertrophy,
    #[serde(rename = "Condicionamento")]
    Conditioning,
    #[serde(rename = "Definição")]
    Definition,
    #[serde(rename = "Reabilitação")]
    Rehabilitation,
    #[serde(rename = "Manutenção")]
    Maintenance,
}

impl Goal {
    pub const ALL: [Goal; 6] = [
        Goal::WeightLoss,
        Goal::Hypertrophy,
        Goal::Conditioning,
        Goal::Definition,
        Goal::Rehabilitation,
        Goal::Maintenance,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Goal::WeightLoss => "Perda de peso",
            Goal::Hypertrophy => "Hipertrofia",
            Goal::Conditioning => "Condicionamento",
            Goal::Definition => "Definição",
            Goal::Rehabilitation => "Reabilitação",
            Goal::Maintenance => "Manutenção",
        }
    }

    /// Parse a legacy label. Unknown strings are `Maintenance`.
    pub fn from_label(s: &str) -> Self {
        match s.trim() {
            "Perda de peso" => Goal::WeightLoss,
            "Hipertrofia" => Goal::Hypertrophy,
            "Condicionamento" => Goal::Conditioning,
            "Definição" => Goal::Definition,
            "Reabilitação" => Goal::Rehabilitation,
            _ => Goal::Maintenance,
        }
    }
}

/// A user's biometric profile and declared goal.
///
/// Weight is in kilograms, height in meters. The calculator treats this as a
/// read-only, already-validated snapshot; run `validate` at the shell before
/// feeding it in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub gender: Gender,

    #[serde(rename = "weight")]
    pub weight_kg: f64,

    #[serde(rename = "height")]
    pub height_m: f64,

    #[serde(rename = "age")]
    pub age_years: u32,

    pub goal: Goal,
}

impl Profile {
    /// Fail fast on a malformed profile instead of producing NaN downstream.
    pub fn validate(&self) -> Result<()> {
        if !(self.weight_kg > 0.0) || !self.weight_kg.is_finite() {
            return Err(DietError::InvalidProfile(format!(
                "weight must be positive, got {}",
                self.weight_kg
            )));
        }
        if !(self.height_m > 0.0) || !self.height_m.is_finite() {
            return Err(DietError::InvalidProfile(format!(
                "height must be positive, got {}",
                self.height_m
            )));
        }
        if self.age_years == 0 {
            return Err(DietError::InvalidProfile(
                "age must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// Kind of dietary restriction. Informational only; filtering uses the
/// free-text description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RestrictionType {
    #[serde(rename = "Alergia")]
    Allergy,
    #[serde(rename = "Intolerância")]
    Intolerance,
    #[serde(rename = "Preferência")]
    Preference,
    #[serde(rename = "Dieta")]
    Diet,
}

impl RestrictionType {
    pub const ALL: [RestrictionType; 4] = [
        RestrictionType::Allergy,
        RestrictionType::Intolerance,
        RestrictionType::Preference,
        RestrictionType::Diet,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            RestrictionType::Allergy => "Alergia",
            RestrictionType::Intolerance => "Intolerância",
            RestrictionType::Preference => "Preferência",
            RestrictionType::Diet => "Dieta",
        }
    }
}

/// A user-declared food exclusion.
///
/// The description is matched as a case-insensitive substring against food
/// names, nothing smarter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Restriction {
    pub restriction_type: RestrictionType,
    pub description: String,
}
