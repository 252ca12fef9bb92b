//! CalcPro Health - BMI and ideal weight
//!
//! Body mass index with the standard WHO category bands, and the Hamwi
//! ideal-weight estimate (computed in pounds over a 60-inch base, returned
//! in kilograms).

use calcpro_core::{round1, CalcError};
use serde::{Deserialize, Serialize};

const KG_PER_LB: f64 = 0.453592;
const CM_PER_INCH: f64 = 2.54;
const HAMWI_BASE_INCHES: f64 = 60.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    Underweight,
    NormalWeight,
    Overweight,
    Obese,
}

impl BmiCategory {
    /// Category bands at 18.5 / 25 / 30.
    pub fn for_bmi(bmi: f64) -> Self {
        if bmi < 18.5 {
            BmiCategory::Underweight
        } else if bmi < 25.0 {
            BmiCategory::NormalWeight
        } else if bmi < 30.0 {
            BmiCategory::Overweight
        } else {
            BmiCategory::Obese
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::NormalWeight => "Normal weight",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }
}

/// Body mass index: weight in kilograms over squared height in meters,
/// rounded to one decimal.
pub fn bmi(weight_kg: f64, height_cm: f64) -> Result<f64, CalcError> {
    if height_cm == 0.0 {
        return Err(CalcError::DivisionByZero);
    }
    let height_m = height_cm / 100.0;
    Ok(round1(weight_kg / (height_m * height_m)))
}

/// Hamwi ideal-weight estimate in kilograms.
///
/// 48 lb (male) or 45.5 lb (female) at five feet, plus 2.7 / 2.2 lb per
/// inch above, converted to kilograms and rounded to one decimal.
pub fn ideal_weight_kg(gender: Gender, height_cm: f64) -> f64 {
    let height_inches = height_cm / CM_PER_INCH;
    let over_base = height_inches - HAMWI_BASE_INCHES;

    let pounds = match gender {
        Gender::Male => 48.0 + 2.7 * over_base,
        Gender::Female => 45.5 + 2.2 * over_base,
    };

    round1(pounds * KG_PER_LB)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bmi() {
        // 70 kg at 175 cm -> 22.9
        assert_eq!(bmi(70.0, 175.0).unwrap(), 22.9);
    }

    #[test]
    fn test_bmi_zero_height() {
        assert_eq!(bmi(70.0, 0.0), Err(CalcError::DivisionByZero));
    }

    #[test]
    fn test_bmi_categories() {
        assert_eq!(BmiCategory::for_bmi(17.0), BmiCategory::Underweight);
        assert_eq!(BmiCategory::for_bmi(18.5), BmiCategory::NormalWeight);
        assert_eq!(BmiCategory::for_bmi(24.9), BmiCategory::NormalWeight);
        assert_eq!(BmiCategory::for_bmi(25.0), BmiCategory::Overweight);
        assert_eq!(BmiCategory::for_bmi(30.0), BmiCategory::Obese);
    }

    #[test]
    fn test_ideal_weight_at_base_height() {
        // exactly five feet: base pounds straight to kg
        assert_eq!(
            ideal_weight_kg(Gender::Male, 60.0 * CM_PER_INCH),
            round1(48.0 * KG_PER_LB)
        );
        assert_eq!(
            ideal_weight_kg(Gender::Female, 60.0 * CM_PER_INCH),
            round1(45.5 * KG_PER_LB)
        );
    }

    #[test]
    fn test_ideal_weight_taller_male_heavier() {
        let at_170 = ideal_weight_kg(Gender::Male, 170.0);
        let at_180 = ideal_weight_kg(Gender::Male, 180.0);
        assert!(at_180 > at_170);
    }
}
