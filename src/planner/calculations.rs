use crate::error::{DietError, Result};
use crate::models::{ActivityLevel, BmiReading, BmiStatus, BodyFat, Gender, Goal};
use crate::planner::constants::{CM_TO_IN, MAX_BODY_FAT_PCT, MIN_BODY_FAT_PCT};

/// Round to one decimal place, the display precision for body metrics.
fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Body-mass index: weight / (height in meters)^2, rounded to one decimal.
pub fn bmi(weight_kg: f64, height_cm: f64) -> Result<BmiReading> {
    if weight_kg <= 0.0 || height_cm <= 0.0 {
        return Err(DietError::InvalidMeasurement(format!(
            "weight {weight_kg} kg / height {height_cm} cm must both be positive"
        )));
    }

    let meters = height_cm / 100.0;
    let value = round1(weight_kg / (meters * meters));
    Ok(BmiReading {
        value,
        status: BmiStatus::from_value(value),
    })
}

/// US Navy circumference body-fat estimate.
///
/// Inputs are centimeters; the formula works in inches. The female variant
/// scales the waist by 1.1 before subtracting the neck. Results clamp to
/// [5, 50] percent; a non-positive log argument (e.g. neck >= waist) is an
/// invalid measurement, not a NaN.
pub fn navy_body_fat(
    gender: Gender,
    height_cm: f64,
    neck_cm: f64,
    waist_cm: f64,
) -> Result<BodyFat> {
    let h_in = height_cm * CM_TO_IN;
    let n_in = neck_cm * CM_TO_IN;
    let w_in = waist_cm * CM_TO_IN;

    let (girth, raw) = match gender {
        Gender::Male => {
            let girth = w_in - n_in;
            (girth, 86.010 * girth.log10() - 70.041 * h_in.log10() + 36.76)
        }
        Gender::Female => {
            let girth = w_in * 1.1 - n_in;
            (
                girth,
                163.205 * girth.log10() - 97.684 * h_in.log10() - 78.387,
            )
        }
    };

    if h_in <= 0.0 || girth <= 0.0 {
        return Err(DietError::InvalidMeasurement(format!(
            "height {height_cm} cm, neck {neck_cm} cm, waist {waist_cm} cm do not yield a \
             positive circumference difference"
        )));
    }

    let percent = round1(raw.clamp(MIN_BODY_FAT_PCT, MAX_BODY_FAT_PCT));
    Ok(BodyFat {
        percent,
        method: "US Navy",
    })
}

/// Harris-Benedict basal metabolic rate in kcal/day.
pub fn basal_metabolic_rate(age: f64, gender: Gender, weight_kg: f64, height_cm: f64) -> f64 {
    match gender {
        Gender::Male => 88.362 + 13.397 * weight_kg + 4.799 * height_cm - 5.677 * age,
        Gender::Female => 447.593 + 9.247 * weight_kg + 3.098 * height_cm - 4.330 * age,
    }
}

/// Goal-adjusted daily calorie target.
///
/// TDEE = BMR x activity multiplier, then the goal transform. The loss and
/// gain branches end in fixed plateaus: any loss target that lands above
/// 2000 collapses to exactly 1900, and any gain target below 2500 is forced
/// up to exactly 2600.
pub fn daily_calories(
    age: f64,
    gender: Gender,
    weight_kg: f64,
    height_cm: f64,
    activity: ActivityLevel,
    goal: Goal,
) -> u32 {
    let bmr = basal_metabolic_rate(age, gender, weight_kg, height_cm);
    let tdee = bmr * activity.multiplier();

    let calories: i64 = match goal {
        Goal::WeightLoss => {
            let calories = ((tdee * 0.75) as i64).max(1200);
            if calories > 2000 { 1900 } else { calories }
        }
        Goal::WeightGain => {
            let calories = ((tdee * 1.25) as i64).min(3500);
            if calories < 2500 { 2600 } else { calories }
        }
        Goal::Maintenance => (tdee as i64).clamp(2000, 2500),
    };

    calories as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_float_eq::assert_float_absolute_eq;

    #[test]
    fn test_bmi_formula_and_rounding() {
        let reading = bmi(70.0, 175.0).unwrap();
        // 70 / 1.75^2 = 22.857... -> 22.9
        assert_float_absolute_eq!(reading.value, 22.9, 1e-9);
        assert_eq!(reading.status, BmiStatus::Normal);
    }

    #[test]
    fn test_bmi_band_boundaries() {
        assert_eq!(BmiStatus::from_value(18.4), BmiStatus::Underweight);
        assert_eq!(BmiStatus::from_value(18.5), BmiStatus::Normal);
        assert_eq!(BmiStatus::from_value(24.999), BmiStatus::Normal);
        assert_eq!(BmiStatus::from_value(25.0), BmiStatus::Overweight);
        assert_eq!(BmiStatus::from_value(29.999), BmiStatus::Overweight);
        assert_eq!(BmiStatus::from_value(30.0), BmiStatus::Obese);
    }

    #[test]
    fn test_bmi_rejects_nonpositive_measurements() {
        assert!(bmi(0.0, 175.0).is_err());
        assert!(bmi(70.0, 0.0).is_err());
        assert!(bmi(-5.0, 175.0).is_err());
    }

    #[test]
    fn test_body_fat_within_clamp_for_extreme_inputs() {
        // Very large waist pushes the raw estimate far above 50
        let high = navy_body_fat(Gender::Male, 175.0, 35.0, 200.0).unwrap();
        assert!(high.percent <= 50.0);

        // Waist barely above neck pushes the raw estimate below 5
        let low = navy_body_fat(Gender::Male, 175.0, 38.0, 39.0).unwrap();
        assert!(low.percent >= 5.0);
        assert_eq!(low.method, "US Navy");
    }

    #[test]
    fn test_body_fat_rejects_neck_at_least_waist() {
        assert!(navy_body_fat(Gender::Male, 175.0, 40.0, 40.0).is_err());
        assert!(navy_body_fat(Gender::Male, 175.0, 45.0, 40.0).is_err());
    }

    #[test]
    fn test_body_fat_female_uses_scaled_waist() {
        // waist*1.1 - neck differs from waist - neck, so the two genders
        // must disagree on identical measurements
        let male = navy_body_fat(Gender::Male, 165.0, 33.0, 75.0).unwrap();
        let female = navy_body_fat(Gender::Female, 165.0, 33.0, 75.0).unwrap();
        assert!((male.percent - female.percent).abs() > 0.1);
    }

    #[test]
    fn test_bmr_reference_values() {
        // 88.362 + 13.397*70 + 4.799*175 - 5.677*30 = 1695.667
        let male = basal_metabolic_rate(30.0, Gender::Male, 70.0, 175.0);
        assert_float_absolute_eq!(male, 1695.667, 1e-3);

        // 447.593 + 9.247*60 + 3.098*165 - 4.330*25 = 1405.333
        let female = basal_metabolic_rate(25.0, Gender::Female, 60.0, 165.0);
        assert_float_absolute_eq!(female, 1405.333, 1e-3);
    }

    #[test]
    fn test_weight_loss_plateau() {
        // tdee = 1695.542 * 1.55 = 2628.09, raw = 1971 -> stays
        let calories = daily_calories(
            30.0,
            Gender::Male,
            70.0,
            175.0,
            ActivityLevel::Moderate,
            Goal::WeightLoss,
        );
        assert_eq!(calories, 1971);

        // Heavier profile: raw > 2000 must collapse to exactly 1900, not 2000
        let calories = daily_calories(
            30.0,
            Gender::Male,
            110.0,
            190.0,
            ActivityLevel::VeryActive,
            Goal::WeightLoss,
        );
        assert_eq!(calories, 1900);
    }

    #[test]
    fn test_weight_loss_floor() {
        // Tiny profile: raw 0.75*tdee below 1200 is floored at 1200
        let calories = daily_calories(
            80.0,
            Gender::Female,
            40.0,
            150.0,
            ActivityLevel::Sedentary,
            Goal::WeightLoss,
        );
        assert_eq!(calories, 1200);
    }

    #[test]
    fn test_weight_gain_plateau() {
        // Small profile: raw 1.25*tdee < 2500 must be forced to exactly 2600
        let calories = daily_calories(
            70.0,
            Gender::Female,
            45.0,
            150.0,
            ActivityLevel::Sedentary,
            Goal::WeightGain,
        );
        assert_eq!(calories, 2600);

        // Large profile: capped at 3500
        let calories = daily_calories(
            20.0,
            Gender::Male,
            120.0,
            195.0,
            ActivityLevel::VeryActive,
            Goal::WeightGain,
        );
        assert_eq!(calories, 3500);
    }

    #[test]
    fn test_maintenance_clamp() {
        let low = daily_calories(
            80.0,
            Gender::Female,
            40.0,
            150.0,
            ActivityLevel::Sedentary,
            Goal::Maintenance,
        );
        assert_eq!(low, 2000);

        let high = daily_calories(
            20.0,
            Gender::Male,
            120.0,
            195.0,
            ActivityLevel::VeryActive,
            Goal::Maintenance,
        );
        assert_eq!(high, 2500);
    }
}
