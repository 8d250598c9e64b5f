use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};

use super::meal::Meal;

/// One calendar day the restaurant serves meals, as published on the menu page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationDay {
    // local midnight of the day, in the restaurant's timezone
    pub date: DateTime<FixedOffset>,
    pub meals: Vec<Meal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl OperationDay {
    pub fn calendar_date(&self) -> NaiveDate {
        self.date.date_naive()
    }
}
