//! Field options and the custom-field registration record.
//!
//! These are declarative: the host stores the options per content-type
//! attribute and reads the registration record to list the field. The
//! normalizer never consults them.

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{FieldError, FieldResult};
use crate::i18n::{get_trad, PLUGIN_ID};

/// Default pattern: 6 or 3 digit hex with a leading `#`.
pub const DEFAULT_REGEX: &str = "^#([A-Fa-f0-9]{6}|[A-Fa-f0-9]{3})$";

/// Registered field type name.
pub const FIELD_NAME: &str = "advanced-color-picker";

/// Per-attribute options configured in the host's content-type builder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldOptions {
    pub regex: String,
    pub required: bool,
}

impl Default for FieldOptions {
    fn default() -> Self {
        Self {
            regex: DEFAULT_REGEX.to_string(),
            required: false,
        }
    }
}

impl FieldOptions {
    /// Check a stored value the way the host's form validation does.
    ///
    /// An empty value is only an error when `required`; the pattern is
    /// checked against non-empty values. An empty pattern accepts anything.
    pub fn validate(&self, value: &str) -> FieldResult<()> {
        if value.is_empty() {
            return if self.required {
                Err(FieldError::Required)
            } else {
                Ok(())
            };
        }
        if self.regex.is_empty() {
            return Ok(());
        }
        let re = Regex::new(&self.regex).map_err(|e| {
            log::warn!("color field pattern {:?} does not compile: {e}", self.regex);
            FieldError::InvalidPattern {
                pattern: self.regex.clone(),
                reason: e.to_string(),
            }
        })?;
        if re.is_match(value) {
            Ok(())
        } else {
            Err(FieldError::PatternMismatch {
                value: value.to_string(),
                pattern: self.regex.clone(),
            })
        }
    }
}

/// A translatable string: lookup id plus English fallback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntlMessage {
    pub id: String,
    pub default_message: String,
}

impl IntlMessage {
    pub fn new(id: impl Into<String>, default_message: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            default_message: default_message.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionType {
    Text,
    Checkbox,
}

/// One configurable option in the advanced tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionItem {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: OptionType,
    pub intl_label: IntlMessage,
    pub description: IntlMessage,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<serde_json::Value>,
}

/// Either a bare option or a titled group of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionEntry {
    Item(OptionItem),
    #[serde(rename_all = "camelCase")]
    Section {
        section_title: IntlMessage,
        items: Vec<OptionItem>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionsSchema {
    pub advanced: Vec<OptionEntry>,
}

/// The record a host registers to make the field available.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomFieldDefinition {
    pub name: String,
    pub plugin_id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub intl_label: IntlMessage,
    pub intl_description: IntlMessage,
    pub options: OptionsSchema,
}

impl CustomFieldDefinition {
    pub fn advanced_color_picker() -> Self {
        let regex = OptionItem {
            name: "regex".to_string(),
            kind: OptionType::Text,
            intl_label: IntlMessage::new(
                get_trad("color-picker.options.advanced.regex"),
                "RegExp pattern",
            ),
            description: IntlMessage::new(
                get_trad("color-picker.options.advanced.regex.description"),
                "The text of the regular expression",
            ),
            default_value: Some(serde_json::Value::String(DEFAULT_REGEX.to_string())),
        };
        let required = OptionItem {
            name: "required".to_string(),
            kind: OptionType::Checkbox,
            intl_label: IntlMessage::new(
                get_trad("color-picker.options.advanced.requiredField"),
                "Required field",
            ),
            description: IntlMessage::new(
                get_trad("color-picker.options.advanced.requiredField.description"),
                "You won't be able to create an entry if this field is empty",
            ),
            default_value: None,
        };

        Self {
            name: FIELD_NAME.to_string(),
            plugin_id: PLUGIN_ID.to_string(),
            kind: "string".to_string(),
            intl_label: IntlMessage::new("color-picker.label", "Color Picker"),
            intl_description: IntlMessage::new(
                "color-picker.description",
                "Pick your color both the solid and gradient",
            ),
            options: OptionsSchema {
                advanced: vec![
                    OptionEntry::Item(regex),
                    OptionEntry::Section {
                        section_title: IntlMessage::new("global.settings", "Settings"),
                        items: vec![required],
                    },
                ],
            },
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options_accept_short_and_long_hex() {
        let opts = FieldOptions::default();
        assert_eq!(opts.validate("#abc"), Ok(()));
        assert_eq!(opts.validate("#A1B2C3"), Ok(()));
        assert_eq!(opts.validate(""), Ok(()));
    }

    #[test]
    fn default_options_reject_alpha_and_gradients() {
        let opts = FieldOptions::default();
        assert!(matches!(
            opts.validate("#0080ff80"),
            Err(FieldError::PatternMismatch { .. })
        ));
        assert!(opts.validate("linear-gradient(#000, #fff)").is_err());
    }

    #[test]
    fn required_rejects_empty() {
        let opts = FieldOptions {
            required: true,
            ..Default::default()
        };
        assert_eq!(opts.validate(""), Err(FieldError::Required));
    }

    #[test]
    fn bad_pattern_is_reported() {
        let opts = FieldOptions {
            regex: "([".to_string(),
            required: false,
        };
        assert!(matches!(
            opts.validate("#fff"),
            Err(FieldError::InvalidPattern { .. })
        ));
    }

    #[test]
    fn options_deserialize_with_defaults() {
        let opts: FieldOptions = serde_json::from_str(r#"{"required": true}"#).unwrap();
        assert!(opts.required);
        assert_eq!(opts.regex, DEFAULT_REGEX);
    }

    #[test]
    fn registration_record_shape() {
        let def = CustomFieldDefinition::advanced_color_picker();
        let json: serde_json::Value = serde_json::from_str(&def.to_json().unwrap()).unwrap();
        assert_eq!(json["name"], "advanced-color-picker");
        assert_eq!(json["pluginId"], "advanced-color-picker");
        assert_eq!(json["type"], "string");
        assert_eq!(json["intlLabel"]["defaultMessage"], "Color Picker");

        let advanced = &json["options"]["advanced"];
        assert_eq!(advanced[0]["name"], "regex");
        assert_eq!(advanced[0]["type"], "text");
        assert_eq!(advanced[0]["defaultValue"], DEFAULT_REGEX);
        assert_eq!(
            advanced[0]["intlLabel"]["id"],
            "advanced-color-picker.color-picker.options.advanced.regex"
        );
        assert_eq!(advanced[1]["sectionTitle"]["id"], "global.settings");
        assert_eq!(advanced[1]["items"][0]["name"], "required");
        assert_eq!(advanced[1]["items"][0]["type"], "checkbox");
    }
}
