mod datetime;
mod error;
mod menu_page;
mod remove_excess_whitespace;
mod static_selector;
mod tree;

pub use error::Error;
pub use menu_page::{scrape_menu_page, ScrapedPage};
pub use remove_excess_whitespace::remove_excess_whitespace;
