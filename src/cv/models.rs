use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

/// Skill categories shown in the skills panel, in display order:
/// (JSON key, Arabic label, English label).
pub const SKILL_CATEGORIES: [(&str, &str, &str); 9] = [
    ("cleaning", "التنظيف", "Cleaning"),
    ("cooking", "الطبخ", "Cooking"),
    ("arabicCooking", "الطبخ العربي", "Arabic Cooking"),
    ("washing", "الغسيل", "Washing"),
    ("ironing", "الكي", "Ironing"),
    ("babysitting", "رعاية الأطفال", "Babysitting"),
    ("childrenCare", "العناية بالأطفال", "Children Care"),
    ("tutoring", "التدريس", "Tutoring"),
    ("disabledCare", "رعاية ذوي الاحتياجات", "Disabled Care"),
];

/// Biodata submitted with a CV request.
///
/// Every field is optional and parsed leniently: scalars may arrive as strings,
/// numbers or booleans, and anything of the wrong shape is treated as absent.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct CandidateRecord {
    #[serde(deserialize_with = "lenient_string")]
    pub full_name: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub full_name_ar: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub date_of_birth: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub age: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub gender: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub nationality: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub religion: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub marital_status: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub number_of_children: Option<String>,

    #[serde(deserialize_with = "lenient_string")]
    pub mobile_number: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub current_residence: Option<String>,

    #[serde(deserialize_with = "lenient_string")]
    pub profession: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub monthly_salary: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub contract_period: Option<String>,

    #[serde(deserialize_with = "lenient_string")]
    pub passport_number: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub passport_issue_date: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub passport_expiry_date: Option<String>,

    #[serde(deserialize_with = "lenient_string")]
    pub education_level: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub english_level: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub arabic_level: Option<String>,

    #[serde(deserialize_with = "lenient_skills")]
    #[schema(value_type = Object)]
    pub skills: Vec<(String, String)>,

    #[serde(deserialize_with = "lenient_experience")]
    pub experience_abroad: Vec<ExperienceEntry>,

    #[serde(deserialize_with = "lenient_string")]
    pub height_cm: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub weight_kg: Option<String>,
    #[serde(deserialize_with = "lenient_medical")]
    #[schema(value_type = Option<String>)]
    pub medical_fit: MedicalFitness,

    #[serde(deserialize_with = "lenient_string")]
    pub agency_name: Option<String>,
}

impl CandidateRecord {
    /// Raw level for a skill key. Missing or blank skills are reported as `Poor`.
    pub fn skill(&self, key: &str) -> &str {
        self.skills
            .iter()
            .find(|(k, level)| k == key && !level.trim().is_empty())
            .map(|(_, level)| level.as_str())
            .unwrap_or("Poor")
    }
}

/// One prior-employment entry.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize, ToSchema)]
#[serde(default)]
pub struct ExperienceEntry {
    #[serde(deserialize_with = "lenient_string")]
    pub country: Option<String>,
    #[serde(alias = "duration", deserialize_with = "lenient_string")]
    pub period: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub position: Option<String>,
}

/// Four-step rating used by the skills panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkillLevel {
    Poor,
    Good,
    VeryGood,
    Excellent,
    Unrecognized(String),
}

impl SkillLevel {
    pub fn parse(value: &str) -> Self {
        match value {
            "Poor" => Self::Poor,
            "Good" => Self::Good,
            "Very Good" => Self::VeryGood,
            "Excellent" => Self::Excellent,
            other => Self::Unrecognized(other.to_string()),
        }
    }

    /// Number of filled bar segments.
    pub fn ordinal(&self) -> usize {
        match self {
            Self::Poor => 1,
            Self::Good => 2,
            Self::VeryGood => 3,
            Self::Excellent => 4,
            Self::Unrecognized(_) => 0,
        }
    }
}

/// Result of the medical check.
///
/// `Unfit` means checked and failed; `Pending` means no usable answer was given.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum MedicalFitness {
    Fit,
    Unfit,
    #[default]
    Pending,
}

impl MedicalFitness {
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Bool(true) => Self::Fit,
            Value::Bool(false) => Self::Unfit,
            Value::String(s) => match s.trim().to_lowercase().as_str() {
                "true" | "yes" | "fit" => Self::Fit,
                "false" | "no" | "unfit" | "not fit" => Self::Unfit,
                _ => Self::Pending,
            },
            _ => Self::Pending,
        }
    }
}

fn scalar_to_string(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(scalar_to_string))
}

fn lenient_skills<'de, D>(deserializer: D) -> Result<Vec<(String, String)>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    let Some(Value::Object(map)) = value else {
        return Ok(Vec::new());
    };
    Ok(map
        .into_iter()
        .filter_map(|(key, level)| scalar_to_string(level).map(|level| (key, level)))
        .collect())
}

fn lenient_experience<'de, D>(deserializer: D) -> Result<Vec<ExperienceEntry>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    let Some(Value::Array(items)) = value else {
        return Ok(Vec::new());
    };
    Ok(items
        .into_iter()
        .filter(Value::is_object)
        .filter_map(|item| serde_json::from_value(item).ok())
        .collect())
}

fn lenient_medical<'de, D>(deserializer: D) -> Result<MedicalFitness, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value
        .map(|v| MedicalFitness::from_value(&v))
        .unwrap_or_default())
}
