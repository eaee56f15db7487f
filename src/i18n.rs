//! Translation lookup for the field's user-facing strings.
//!
//! Keys are scoped by plugin id (`advanced-color-picker.<id>`). Locale files
//! are flat JSON objects of unprefixed keys; a locale that cannot be loaded
//! contributes an empty table and every lookup falls back to English.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::TranslationError;

pub const PLUGIN_ID: &str = "advanced-color-picker";

/// Accessible label of the toggle button.
pub const TOGGLE_LABEL: (&str, &str) = ("color-picker.toggle.aria-label", "Color picker toggle");
/// Accessible label of the manual text input.
pub const INPUT_LABEL: (&str, &str) = ("color-picker.input.aria-label", "Color picker input");

/// Scope a translation id to this plugin.
pub fn get_trad(id: &str) -> String {
    format!("{PLUGIN_ID}.{id}")
}

/// Resolves a message id, falling back to `default` when unknown.
pub trait Translator {
    fn format_message(&self, id: &str, default: &str) -> String;
}

/// Always answers with the English default.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishDefaults;

impl Translator for EnglishDefaults {
    fn format_message(&self, _id: &str, default: &str) -> String {
        default.to_string()
    }
}

/// A flat id → message table for one locale.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Translations {
    messages: HashMap<String, String>,
}

impl Translations {
    pub fn new(messages: HashMap<String, String>) -> Self {
        Self { messages }
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl Translator for Translations {
    fn format_message(&self, id: &str, default: &str) -> String {
        self.messages
            .get(id)
            .cloned()
            .unwrap_or_else(|| default.to_string())
    }
}

/// Prefix every key with `plugin_id.`.
pub fn prefix_plugin_translations(
    messages: HashMap<String, String>,
    plugin_id: &str,
) -> HashMap<String, String> {
    messages
        .into_iter()
        .map(|(key, value)| (format!("{plugin_id}.{key}"), value))
        .collect()
}

/// Read `<dir>/<locale>.json` and prefix its keys.
pub fn load_locale(dir: &Path, locale: &str) -> Result<Translations, TranslationError> {
    let raw = fs::read_to_string(dir.join(format!("{locale}.json")))?;
    let messages: HashMap<String, String> = serde_json::from_str(&raw)?;
    Ok(Translations::new(prefix_plugin_translations(
        messages, PLUGIN_ID,
    )))
}

/// Load every requested locale. Failures yield an empty table for that
/// locale rather than an error.
pub fn register_trads(dir: &Path, locales: &[&str]) -> Vec<(String, Translations)> {
    locales
        .iter()
        .map(|&locale| {
            let table = load_locale(dir, locale).unwrap_or_else(|e| {
                log::warn!("no translations for locale {locale}: {e}");
                Translations::default()
            });
            (locale.to_string(), table)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trad_ids_are_plugin_scoped() {
        assert_eq!(
            get_trad(TOGGLE_LABEL.0),
            "advanced-color-picker.color-picker.toggle.aria-label"
        );
    }

    #[test]
    fn falls_back_to_default() {
        let t = Translations::default();
        assert_eq!(
            t.format_message(&get_trad(INPUT_LABEL.0), INPUT_LABEL.1),
            "Color picker input"
        );
        assert_eq!(EnglishDefaults.format_message("x", "y"), "y");
    }

    #[test]
    fn loads_and_prefixes_locale_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("fr.json"),
            r#"{"color-picker.toggle.aria-label": "Afficher le sélecteur"}"#,
        )
        .unwrap();
        fs::write(dir.path().join("de.json"), "not json").unwrap();

        let loaded = register_trads(dir.path(), &["fr", "de", "es"]);
        assert_eq!(loaded.len(), 3);

        let (locale, fr) = &loaded[0];
        assert_eq!(locale, "fr");
        assert_eq!(
            fr.format_message(&get_trad(TOGGLE_LABEL.0), TOGGLE_LABEL.1),
            "Afficher le sélecteur"
        );
        assert!(loaded[1].1.is_empty());
        assert!(loaded[2].1.is_empty());
    }

    #[test]
    fn load_errors_are_typed() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            load_locale(dir.path(), "xx"),
            Err(TranslationError::Io(_))
        ));
    }
}
