use std::fmt::{self, Display, Formatter};

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Other(String), // label the restaurant used that isn't one of the above
}

impl MealType {
    pub fn label(&self) -> &str {
        match self {
            Self::Breakfast => "Desjejum",
            Self::Lunch => "Almoço",
            Self::Dinner => "Jantar",
            Self::Other(label) => label,
        }
    }
}

impl From<&str> for MealType {
    fn from(label: &str) -> Self {
        match label.trim() {
            "Desjejum" => Self::Breakfast,
            "Almoço" => Self::Lunch,
            "Jantar" => Self::Dinner,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for MealType {
    fn from(label: String) -> Self {
        Self::from(label.as_str())
    }
}

impl From<MealType> for String {
    fn from(meal_type: MealType) -> Self {
        meal_type.label().to_string()
    }
}

impl Display for MealType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meal {
    #[serde(rename = "type")]
    pub meal_type: MealType,
    pub start_time: DateTime<FixedOffset>,
    pub end_time: DateTime<FixedOffset>,
    pub sets: Vec<MealSet>,
}

impl Meal {
    pub const fn new(
        meal_type: MealType,
        start_time: DateTime<FixedOffset>,
        end_time: DateTime<FixedOffset>,
    ) -> Self {
        Self {
            meal_type,
            start_time,
            end_time,
            sets: Vec::new(),
        }
    }
}

/// A named menu category within a meal, e.g. "Prato principal".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealSet {
    pub name: String,
    pub items: Vec<MealItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealItem {
    pub name: String,
    pub notes: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meal_type_from_label() {
        assert_eq!(MealType::from("Desjejum"), MealType::Breakfast);
        assert_eq!(MealType::from(" Almoço "), MealType::Lunch);
        assert_eq!(MealType::from("Jantar"), MealType::Dinner);
        assert_eq!(
            MealType::from("Lanche"),
            MealType::Other("Lanche".to_string())
        );
    }

    #[test]
    fn test_meal_type_serde() {
        let serialized = serde_json::to_string(&MealType::Lunch).unwrap();
        assert_eq!(serialized, "\"Almoço\"");
        let other: MealType = serde_json::from_str("\"Ceia\"").unwrap();
        assert_eq!(other, MealType::Other("Ceia".to_string()));
    }
}
