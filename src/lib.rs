//! # floem-color-field
//!
//! A color form field for [Floem](https://github.com/lapce/floem).
//!
//! The field shows a swatch and the current value, opens a popover with a
//! solid/gradient picker and a manual input, and stores every edit in a
//! canonical form: `rgb()`/`rgba()` text becomes hex, everything else passes
//! through. The normalization functions are usable on their own.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use floem::prelude::*;
//! use floem_color_field::{color_field, ColorFieldProps};
//!
//! let value = RwSignal::new(Some("#3b82f6".to_string()));
//! // Use `color_field(value, ColorFieldProps::new("accent"))` in your view tree.
//! ```

mod checkerboard;
mod color;
mod constants;
mod error;
mod field;
mod gradient;
mod i18n;
mod inputs;
mod math;
mod normalize;
mod options;
mod picker;
mod state;
mod swatch;

pub use color::SolidColor;
pub use error::{FieldError, FieldResult, TranslationError};
pub use field::{ColorFieldProps, FieldChange};
pub use gradient::{is_gradient, ColorKind, Gradient, GradientKind, GradientStop};
pub use i18n::{
    get_trad, load_locale, prefix_plugin_translations, register_trads, EnglishDefaults,
    Translations, Translator, INPUT_LABEL, PLUGIN_ID, TOGGLE_LABEL,
};
pub use normalize::{
    clean_value, contains_rgb_function, handle_color_change, is_plain_rgb,
    replace_rgb_functions, rgba_to_hex, DEFAULT_COLOR,
};
pub use options::{
    CustomFieldDefinition, FieldOptions, IntlMessage, OptionEntry, OptionItem, OptionType,
    OptionsSchema, DEFAULT_REGEX, FIELD_NAME,
};
pub use state::FieldState;

use std::sync::Once;

use floem::prelude::*;
use floem::reactive::RwSignal;
use floem::text::FONT_SYSTEM;

static LOAD_LUCIDE_FONT: Once = Once::new();

/// Creates the color field view.
///
/// `value` is the host-owned stored value. It seeds the field (an absent
/// value mounts as `#000000`), later external changes are mirrored, and user
/// edits are written back in canonical form.
pub fn color_field(value: RwSignal<Option<String>>, props: ColorFieldProps) -> impl IntoView {
    LOAD_LUCIDE_FONT.call_once(|| {
        FONT_SYSTEM
            .lock()
            .db_mut()
            .load_font_data(lucide_icons::LUCIDE_FONT_BYTES.to_vec());
    });
    field::color_field(value, props)
}
