use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

use crate::menu::MealItem;
use crate::parse::remove_excess_whitespace;

const ALTERNATIVE_SEPARATOR: &str = " ou ";

impl MealItem {
    /// Turns one published menu line into the items it offers.
    ///
    /// "Arroz (integral) ou macarrão" offers two alternatives, so it yields two items;
    /// parenthesized text becomes the item's notes.
    pub fn from_menu_text(raw: &str) -> Vec<Self> {
        // matching happens on the decomposed form so accents can't hide a separator
        let decomposed = raw.trim().nfkd().collect::<String>();
        decomposed
            .split(ALTERNATIVE_SEPARATOR)
            .map(Self::from_alternative)
            .collect()
    }

    fn from_alternative(text: &str) -> Self {
        static NOTE_RE: LazyLock<Regex> =
            LazyLock::new(|| Regex::new(r"\(([^)]+)\)").expect("regex should be valid"));

        let notes = NOTE_RE
            .captures_iter(text)
            .map(|caps| recompose(caps[1].trim()))
            .collect();
        let name = NOTE_RE.replace_all(text, "");
        let name = recompose(&remove_excess_whitespace(&name));

        Self {
            name: capitalize_first_letter(&name),
            notes,
        }
    }
}

fn recompose(s: &str) -> String {
    s.nfc().collect()
}

fn capitalize_first_letter(s: &str) -> String {
    let mut chars = s.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, notes: &[&str]) -> MealItem {
        MealItem {
            name: name.to_string(),
            notes: notes.iter().map(ToString::to_string).collect(),
        }
    }

    #[test]
    fn test_alternatives_and_notes() {
        assert_eq!(
            MealItem::from_menu_text("Arroz (integral) ou Macarrão"),
            vec![item("Arroz", &["integral"]), item("Macarrão", &[])]
        );
    }

    #[test]
    fn test_capitalizes_each_alternative() {
        assert_eq!(
            MealItem::from_menu_text("  feijão preto ou ómega  "),
            vec![item("Feijão preto", &[]), item("Ómega", &[])]
        );
    }

    #[test]
    fn test_multiple_notes_in_order() {
        assert_eq!(
            MealItem::from_menu_text("Frango assado ( contém glúten ) ao molho (lactose)"),
            vec![item("Frango assado ao molho", &["contém glúten", "lactose"])]
        );
    }

    #[test]
    fn test_empty_name_is_kept() {
        assert_eq!(
            MealItem::from_menu_text("(vegano)"),
            vec![item("", &["vegano"])]
        );
        assert_eq!(MealItem::from_menu_text(""), vec![item("", &[])]);
    }

    #[test]
    fn test_no_split_inside_words() {
        assert_eq!(
            MealItem::from_menu_text("Suco de goiaba ou"),
            vec![item("Suco de goiaba ou", &[])]
        );
    }
}
