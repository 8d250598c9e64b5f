use chrono::{DateTime, FixedOffset};
use chrono_tz::Tz;

use crate::menu::{Meal, MealItem, MealSet, MealType, OperationDay};
use crate::parse::datetime::{parse_day_label, parse_meal_time};
use crate::parse::tree::{MenuNode, Pattern};
use crate::parse::Error;

const TITLE_SEPARATOR: char = '-';
const TIME_RANGE_SEPARATOR: &str = "às";

impl OperationDay {
    /// Builds one day from its tab title ("Segunda 20/05 - Feriado") and section subtree.
    ///
    /// The first table row carrying header cells names the meals; every row after it is
    /// a meal set, with one cell per meal in header order.
    pub fn from_section<N: MenuNode>(
        title: &str,
        section: N,
        year: i32,
        tz: Tz,
    ) -> Result<Self, Error> {
        let (day_label, note) = split_title(title);
        let date = parse_day_label(day_label, year, tz)?;

        let mut meals: Option<Vec<Meal>> = None;
        for row in section.find(Pattern::TableRow) {
            match meals.as_mut() {
                Some(meals) => add_sets_from_row(meals, row),
                None => {
                    let headers = row.find(Pattern::HeaderCell);
                    if !headers.is_empty() {
                        meals = Some(
                            headers
                                .into_iter()
                                .map(|header| meal_from_header(&header.trimmed_text(), date))
                                .collect::<Result<_, _>>()?,
                        );
                    }
                }
            }
        }

        let meals = meals.unwrap_or_else(|| {
            log::warn!("{title:?} has no header row, no meals recorded for it");
            Vec::new()
        });

        Ok(Self {
            date,
            meals: meals.into_iter().filter(|meal| !meal.sets.is_empty()).collect(),
            note,
        })
    }
}

fn split_title(title: &str) -> (&str, Option<String>) {
    match title.split_once(TITLE_SEPARATOR) {
        Some((day_label, note)) => {
            let note = note.trim();
            (day_label.trim(), (!note.is_empty()).then(|| note.to_string()))
        }
        None => (title.trim(), None),
    }
}

/// "Almoço - 10h30 às 14h"
fn meal_from_header(header: &str, day_start: DateTime<FixedOffset>) -> Result<Meal, Error> {
    let (label, time_range) = header.split_once(TITLE_SEPARATOR).ok_or_else(|| {
        Error::time_parsing_error(&format!("meal header {header:?} has no time range"))
    })?;
    let (start, end) = time_range
        .split_once(TIME_RANGE_SEPARATOR)
        .ok_or_else(|| {
            Error::time_parsing_error(&format!(
                "time range {:?} is not of the form \"<start> às <end>\"",
                time_range.trim()
            ))
        })?;

    Ok(Meal::new(
        MealType::from(label),
        parse_meal_time(start, day_start)?,
        parse_meal_time(end, day_start)?,
    ))
}

fn add_sets_from_row<N: MenuNode>(meals: &mut [Meal], row: N) {
    let cells = row.find(Pattern::DataCell);
    let Some((name_cell, cells)) = cells.split_first() else {
        return;
    };
    let name = name_cell.trimmed_text();
    if name.is_empty() || cells.is_empty() {
        return;
    }

    for (meal, cell) in meals.iter_mut().zip(cells) {
        if cell.trimmed_text().is_empty() {
            continue;
        }
        let items: Vec<MealItem> = cell
            .find(Pattern::ListItem)
            .into_iter()
            .flat_map(|item| MealItem::from_menu_text(&item.trimmed_text()))
            .collect();
        if items.is_empty() {
            log::debug!("{name:?} cell for {} has text but no list items", meal.meal_type);
            continue;
        }
        meal.sets.push(MealSet {
            name: name.clone(),
            items,
        });
    }
}
