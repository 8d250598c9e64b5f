use std::collections::{hash_map::Entry, HashMap, HashSet};

use chrono_tz::Tz;
use scraper::{ElementRef, Html};

use crate::config::tagged;
use crate::menu::OperationDay;
use crate::parse::tree::element_text;
use crate::parse::Error;
use crate::static_selector;

/// The days found on one fetch of the menu page.
#[derive(Debug, Default)]
pub struct ScrapedPage {
    pub days: Vec<OperationDay>,
    /// sections that could not be turned into a day
    pub skipped: usize,
}

/// Scrapes every day section of the menu page, in page order.
///
/// A section that fails to parse is logged and skipped; the others are still returned.
pub fn scrape_menu_page(html: &str, year: i32, tz: Tz) -> ScrapedPage {
    let document = Html::parse_document(html);
    scrape_document(document.root_element(), year, tz)
}

fn scrape_document(root: ElementRef<'_>, year: i32, tz: Tz) -> ScrapedPage {
    static_selector!(SECTION_SELECTOR <- "section.tabs__content");
    static_selector!(TAB_SELECTOR <- r#"span[role="tab"]"#);

    let tab_titles = tab_titles(root.select(&TAB_SELECTOR));

    let mut page = ScrapedPage::default();
    let mut seen_dates = HashSet::new();
    for (position, section) in root.select(&SECTION_SELECTOR).enumerate() {
        let day = section_title(section, &tab_titles)
            .and_then(|title| OperationDay::from_section(title, section, year, tz));
        match day {
            Ok(day) if !seen_dates.insert(day.calendar_date()) => {
                log::warn!(
                    "{}",
                    tagged(format_args!(
                        "Section {position} repeats {}, keeping the first one",
                        day.calendar_date()
                    ))
                );
                page.skipped += 1;
            }
            Ok(day) => {
                log::info!(
                    "{}",
                    tagged(format_args!(
                        "Scraped {} ({} meals)",
                        day.calendar_date(),
                        day.meals.len()
                    ))
                );
                page.days.push(day);
            }
            Err(e) => {
                log::warn!("{}", tagged(format_args!("Skipping section {position}: {e}")));
                page.skipped += 1;
            }
        }
    }
    page
}

/// Tab id -> title. The first tab for an id wins.
fn tab_titles<'a>(tabs: impl Iterator<Item = ElementRef<'a>>) -> HashMap<&'a str, String> {
    let mut titles = HashMap::new();
    for tab in tabs {
        let Some(id) = tab.value().attr("aria-controls") else {
            continue;
        };
        let title = element_text(tab);
        match titles.entry(id) {
            Entry::Vacant(slot) => {
                slot.insert(title);
            }
            Entry::Occupied(kept) => log::warn!(
                "{}",
                tagged(format_args!(
                    "Tab {title:?} also controls section {id:?}, keeping {:?}",
                    kept.get()
                ))
            ),
        }
    }
    titles
}

fn section_title<'t>(
    section: ElementRef<'_>,
    tab_titles: &'t HashMap<&str, String>,
) -> Result<&'t str, Error> {
    let id = section
        .value()
        .attr("id")
        .ok_or_else(|| Error::unexpected_markup_error("day section has no id"))?;
    tab_titles.get(id).map(String::as_str).ok_or_else(|| {
        Error::unexpected_markup_error(&format!("no tab title for section {id:?}"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::MealType;
    use chrono::{NaiveDate, TimeZone};
    use chrono_tz::America::Recife;
    use std::fs;

    fn example_page() -> ScrapedPage {
        let html = fs::read_to_string("./src/parse/html_examples/menu_page.html").unwrap();
        scrape_menu_page(&html, 2024, Recife)
    }

    #[test]
    fn test_scrape_example_page() {
        let page = example_page();
        let dates: Vec<NaiveDate> = page.days.iter().map(OperationDay::calendar_date).collect();
        assert_eq!(
            dates,
            vec![
                NaiveDate::from_ymd_opt(2024, 5, 20).unwrap(),
                NaiveDate::from_ymd_opt(2024, 5, 21).unwrap(),
                NaiveDate::from_ymd_opt(2024, 5, 23).unwrap(),
            ]
        );
        // the wednesday header has no "-" between meal and time range
        assert_eq!(page.skipped, 1);
    }

    #[test]
    fn test_example_monday() {
        let page = example_page();
        let monday = &page.days[0];
        assert_eq!(monday.note, None);

        let types: Vec<&MealType> = monday.meals.iter().map(|m| &m.meal_type).collect();
        assert_eq!(types, vec![&MealType::Breakfast, &MealType::Lunch]);
        assert_eq!(
            monday.meals[0].start_time,
            Recife.with_ymd_and_hms(2024, 5, 20, 6, 30, 0).unwrap()
        );

        let lunch = &monday.meals[1];
        assert_eq!(lunch.sets.len(), 2);
        let main_dish = &lunch.sets[0];
        assert_eq!(main_dish.name, "Prato principal");
        let names: Vec<&str> = main_dish.items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Arroz", "Macarrão", "Frango assado"]);
        assert_eq!(main_dish.items[2].notes, vec!["contém glúten", "lactose"]);
        assert_eq!(lunch.sets[1].name, "Sobremesa");
    }

    #[test]
    fn test_example_holiday() {
        let page = example_page();
        let tuesday = &page.days[1];
        assert_eq!(tuesday.note.as_deref(), Some("Feriado"));
        assert!(tuesday.meals.is_empty());
    }

    #[test]
    fn test_duplicate_and_untitled_sections() {
        let html = r#"<html><body>
            <span role="tab" aria-controls="a">Segunda 20/05</span>
            <span role="tab" aria-controls="b">Segunda 20/05</span>
            <section class="tabs__content" id="a"></section>
            <section class="tabs__content" id="b"></section>
            <section class="tabs__content" id="c"></section>
            <section class="tabs__content"></section>
        </body></html>"#;
        let page = scrape_menu_page(html, 2024, Recife);
        assert_eq!(page.days.len(), 1);
        assert_eq!(page.skipped, 3);
    }

    #[test]
    fn test_first_tab_title_wins() {
        let html = r#"<html><body>
            <span role="tab" aria-controls="a">Segunda 20/05 - Feriado</span>
            <span role="tab" aria-controls="a">Terça 21/05</span>
            <section class="tabs__content" id="a"></section>
        </body></html>"#;
        let page = scrape_menu_page(html, 2024, Recife);
        assert_eq!(page.skipped, 0);
        assert_eq!(page.days.len(), 1);
        assert_eq!(
            page.days[0].calendar_date(),
            NaiveDate::from_ymd_opt(2024, 5, 20).unwrap()
        );
        assert_eq!(page.days[0].note.as_deref(), Some("Feriado"));
    }

    #[test]
    fn test_page_without_sections() {
        let page = scrape_menu_page("<html><body><p>Em manutenção</p></body></html>", 2024, Recife);
        assert!(page.days.is_empty());
        assert_eq!(page.skipped, 0);
    }
}
