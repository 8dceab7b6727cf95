//! Survey record sent to the prediction service, plus the age field helpers.

use serde::{Deserialize, Serialize};

/// Upper bound enforced on the age input.
pub const AGE_MAX: i64 = 120;
/// Lower bound enforced on the age input.
pub const AGE_MIN: i64 = 0;

/// Page ids of the 18 survey inputs, in payload order. Ids equal the JSON field names.
pub const FIELD_IDS: [&str; 18] = [
    "age",
    "gender",
    "chest_pain",
    "shortness_of_breath",
    "fatigue",
    "palpitations",
    "dizziness",
    "swelling",
    "radiating_pain",
    "cold_sweat",
    "blood_pressure_history",
    "cholesterol_level",
    "diabetes_history",
    "smoking_history",
    "obesity",
    "lifestyle",
    "family_history",
    "chronic_stress",
];

/// One submission worth of survey answers.
///
/// `age` is `None` when the field is blank or not numeric; it is still sent
/// (as JSON `null`) and the service decides what to do with it.
/// Categorical answers are passed through verbatim: `male`/`female` for
/// `gender`, `Yes`/`No` for the rest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurveyInput {
    pub age: Option<i64>,
    pub gender: String,
    pub chest_pain: String,
    pub shortness_of_breath: String,
    pub fatigue: String,
    pub palpitations: String,
    pub dizziness: String,
    pub swelling: String,
    pub radiating_pain: String,
    pub cold_sweat: String,
    pub blood_pressure_history: String,
    pub cholesterol_level: String,
    pub diabetes_history: String,
    pub smoking_history: String,
    pub obesity: String,
    pub lifestyle: String,
    pub family_history: String,
    pub chronic_stress: String,
}

impl SurveyInput {
    /// Build from raw field values in `FIELD_IDS` order.
    pub fn from_values(values: [String; 18]) -> Self {
        let [age, gender, chest_pain, shortness_of_breath, fatigue, palpitations, dizziness, swelling, radiating_pain, cold_sweat, blood_pressure_history, cholesterol_level, diabetes_history, smoking_history, obesity, lifestyle, family_history, chronic_stress] =
            values;
        Self {
            age: parse_age(&age),
            gender,
            chest_pain,
            shortness_of_breath,
            fatigue,
            palpitations,
            dizziness,
            swelling,
            radiating_pain,
            cold_sweat,
            blood_pressure_history,
            cholesterol_level,
            diabetes_history,
            smoking_history,
            obesity,
            lifestyle,
            family_history,
            chronic_stress,
        }
    }

    /// Raw field values in `FIELD_IDS` order, as they would sit in the form.
    pub fn to_values(&self) -> [String; 18] {
        [
            self.age.map(|a| a.to_string()).unwrap_or_default(),
            self.gender.clone(),
            self.chest_pain.clone(),
            self.shortness_of_breath.clone(),
            self.fatigue.clone(),
            self.palpitations.clone(),
            self.dizziness.clone(),
            self.swelling.clone(),
            self.radiating_pain.clone(),
            self.cold_sweat.clone(),
            self.blood_pressure_history.clone(),
            self.cholesterol_level.clone(),
            self.diabetes_history.clone(),
            self.smoking_history.clone(),
            self.obesity.clone(),
            self.lifestyle.clone(),
            self.family_history.clone(),
            self.chronic_stress.clone(),
        ]
    }
}

/// Lenient integer parse: optional whitespace and sign, then the leading
/// run of digits. `"42"`, `" 42 "`, `"42.9"` and `"42abc"` all give 42;
/// blank or non-numeric input gives `None`.
pub fn parse_age(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let digits_end = rest
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(rest.len());
    if digits_end == 0 {
        return None;
    }
    let value: i64 = rest[..digits_end].parse().ok()?;
    Some(if negative { -value } else { value })
}

/// Replacement text for the age field, or `None` when it is already in range.
/// Non-numeric text is left alone.
pub fn clamp_age_value(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    let value: f64 = trimmed.parse().ok()?;
    if value > AGE_MAX as f64 {
        Some(AGE_MAX.to_string())
    } else if value < AGE_MIN as f64 {
        Some(AGE_MIN.to_string())
    } else {
        None
    }
}
