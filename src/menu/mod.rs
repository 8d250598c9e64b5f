mod meal;
mod operation_day;

pub use meal::{Meal, MealItem, MealSet, MealType};
pub use operation_day::OperationDay;
