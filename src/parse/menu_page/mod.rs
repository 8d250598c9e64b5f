mod meal_item;
mod operation_day;
mod page;

pub use page::{scrape_menu_page, ScrapedPage};
