use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Anthropometric inputs taken during an assessment. Every field is
/// optional; scoring rules whose inputs are missing simply do not fire.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BodyMeasurement {
    pub height_cm: Option<f64>,
    pub weight_kg: Option<f64>,
    pub shoulder_width_cm: Option<f64>,
    pub waist_circumference_cm: Option<f64>,
    pub hip_circumference_cm: Option<f64>,
    pub chest_circumference_cm: Option<f64>,
    pub body_fat_percentage: Option<f64>,
    pub muscle_mass_kg: Option<f64>,
}

impl BodyMeasurement {
    /// Unrounded body-mass index, used by the scoring rules.
    pub fn raw_bmi(&self) -> Option<f64> {
        let height = self.height_cm.filter(|h| *h > 0.0)?;
        let weight = self.weight_kg?;
        let meters = height / 100.0;
        Some(weight / (meters * meters))
    }

    /// Body-mass index rounded to one decimal place, for display.
    pub fn bmi(&self) -> Option<f64> {
        self.raw_bmi().map(|bmi| (bmi * 10.0).round() / 10.0)
    }

    pub fn bmi_category(&self) -> Option<BmiCategory> {
        self.bmi().map(BmiCategory::from_bmi)
    }

    pub fn shoulder_to_waist(&self) -> Option<f64> {
        ratio(self.shoulder_width_cm, self.waist_circumference_cm)
    }

    pub fn waist_to_hip(&self) -> Option<f64> {
        ratio(self.waist_circumference_cm, self.hip_circumference_cm)
    }
}

/// Asian-Pacific BMI brackets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    ObeseClass1,
    ObeseClass2,
    ObeseClass3,
}

impl BmiCategory {
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < 18.5 {
            BmiCategory::Underweight
        } else if bmi < 23.0 {
            BmiCategory::Normal
        } else if bmi < 25.0 {
            BmiCategory::Overweight
        } else if bmi < 30.0 {
            BmiCategory::ObeseClass1
        } else if bmi < 35.0 {
            BmiCategory::ObeseClass2
        } else {
            BmiCategory::ObeseClass3
        }
    }
}

/// Manually measured facial proportions. Units are irrelevant as long as
/// they are consistent, since only ratios are used.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FaceMeasurement {
    pub face_length: Option<f64>,
    pub face_width: Option<f64>,
    pub forehead_width: Option<f64>,
    pub cheekbone_width: Option<f64>,
    pub jaw_width: Option<f64>,
}

impl FaceMeasurement {
    pub fn length_to_width(&self) -> Option<f64> {
        ratio(self.face_length, self.face_width)
    }

    pub fn upper_to_lower(&self) -> Option<f64> {
        ratio(self.forehead_width, self.jaw_width)
    }

    pub fn cheekbone_to_width(&self) -> Option<f64> {
        ratio(self.cheekbone_width, self.face_width)
    }

    pub fn is_empty(&self) -> bool {
        self.fields().iter().all(|(_, v)| v.is_none())
    }

    pub fn fields(&self) -> [(&'static str, Option<f64>); 5] {
        [
            ("face_length", self.face_length),
            ("face_width", self.face_width),
            ("forehead_width", self.forehead_width),
            ("cheekbone_width", self.cheekbone_width),
            ("jaw_width", self.jaw_width),
        ]
    }
}

fn ratio(numerator: Option<f64>, denominator: Option<f64>) -> Option<f64> {
    match (numerator, denominator) {
        (Some(n), Some(d)) if d > 0.0 => Some(n / d),
        _ => None,
    }
}
