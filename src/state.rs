//! Field state: the canonical value plus the popover flag.
//!
//! Kept free of Floem so the value rules can be driven directly; the view in
//! `field.rs` wraps one of these in a signal.

use crate::gradient::ColorKind;
use crate::normalize::{self, DEFAULT_COLOR};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldState {
    value: String,
    open: bool,
}

impl FieldState {
    /// Mount with the externally supplied value, or `#000000` when it is
    /// absent or empty.
    pub fn new(initial: Option<&str>) -> Self {
        Self {
            value: normalize::clean_value(initial_or_default(initial)),
            open: false,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn kind(&self) -> ColorKind {
        ColorKind::of(&self.value)
    }

    /// Placeholder for the manual input, following the current kind.
    pub fn placeholder(&self) -> &'static str {
        self.kind().placeholder()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// A value reported by the picker. Returns the canonical value to emit.
    pub fn handle_color_change(&mut self, raw: &str) -> String {
        self.commit(normalize::handle_color_change(raw))
    }

    /// A value typed into the manual input. Only cleaned, never converted:
    /// typed `rgb()`/`rgba()` text is stored as typed (minus `;` and outer
    /// whitespace) and only becomes hex once the picker reports a change.
    pub fn handle_input_change(&mut self, raw: &str) -> String {
        self.commit(normalize::clean_value(raw))
    }

    /// The host changed the field's value. Updates local state only; returns
    /// whether anything changed. An empty value means `#000000`, except when
    /// it echoes a cleared input.
    pub fn sync_initial(&mut self, initial: Option<&str>) -> bool {
        if initial == Some(self.value.as_str()) {
            return false;
        }
        let cleaned = normalize::clean_value(initial_or_default(initial));
        if cleaned == self.value {
            return false;
        }
        self.value = cleaned;
        true
    }

    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    pub fn dismiss(&mut self) {
        self.open = false;
    }

    fn commit(&mut self, canonical: String) -> String {
        log::debug!("color field value -> {canonical}");
        self.value.clone_from(&canonical);
        canonical
    }
}

fn initial_or_default(initial: Option<&str>) -> &str {
    initial.filter(|v| !v.is_empty()).unwrap_or(DEFAULT_COLOR)
}

impl Default for FieldState {
    fn default() -> Self {
        Self::new(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mounts_with_default_black() {
        let state = FieldState::new(None);
        assert_eq!(state.value(), "#000000");
        assert!(!state.is_open());
        assert_eq!(state.kind(), ColorKind::Solid);
    }

    #[test]
    fn mount_cleans_initial_value() {
        assert_eq!(FieldState::new(Some(" #abcdef; ")).value(), "#abcdef");
    }

    #[test]
    fn empty_initial_value_means_black() {
        assert_eq!(FieldState::new(Some("")).value(), "#000000");

        let mut state = FieldState::new(Some("#ff0000"));
        assert!(state.sync_initial(Some("")));
        assert_eq!(state.value(), "#000000");
    }

    #[test]
    fn cleared_input_is_not_reset_by_its_echo() {
        let mut state = FieldState::new(Some("#ff0000"));
        assert_eq!(state.handle_input_change(""), "");
        assert!(!state.sync_initial(Some("")));
        assert_eq!(state.value(), "");
    }

    #[test]
    fn picker_changes_are_normalized() {
        let mut state = FieldState::default();
        assert_eq!(state.handle_color_change("rgba(0, 128, 255, 0.5)"), "#0080ff80");
        assert_eq!(state.value(), "#0080ff80");

        let emitted =
            state.handle_color_change("linear-gradient(90deg, rgba(255, 0, 0, 1) 0%, #fff 100%)");
        assert_eq!(emitted, "linear-gradient(90deg, #ff0000 0%, #fff 100%)");
        assert_eq!(state.kind(), ColorKind::Gradient);
    }

    #[test]
    fn placeholder_follows_kind() {
        let mut state = FieldState::default();
        assert_eq!(state.placeholder(), "#000000");
        state.handle_color_change("linear-gradient(90deg, #000 0%, #fff 100%)");
        assert_eq!(state.placeholder(), "linear-gradient(...)");
        state.handle_color_change("rgb(1, 2, 3)");
        assert_eq!(state.placeholder(), "#000000");
    }

    #[test]
    fn manual_input_is_cleaned_not_converted() {
        let mut state = FieldState::default();
        assert_eq!(state.handle_input_change(" rgb(1, 2, 3); "), "rgb(1, 2, 3)");
        assert_eq!(state.value(), "rgb(1, 2, 3)");
    }

    #[test]
    fn unchanged_edits_still_emit() {
        let mut state = FieldState::new(Some("#ff0000"));
        assert_eq!(state.handle_color_change("#ff0000"), "#ff0000");
    }

    #[test]
    fn external_value_sync() {
        let mut state = FieldState::new(Some("#ff0000"));
        assert!(!state.sync_initial(Some("#ff0000")));
        assert!(!state.sync_initial(Some("#ff0000;")));
        assert!(state.sync_initial(Some(" #00ff00 ")));
        assert_eq!(state.value(), "#00ff00");
        assert!(state.sync_initial(None));
        assert_eq!(state.value(), "#000000");
    }

    #[test]
    fn popover_flag() {
        let mut state = FieldState::default();
        assert!(state.toggle());
        assert!(state.is_open());
        state.dismiss();
        assert!(!state.is_open());
        assert!(state.toggle());
        assert!(!state.toggle());
    }
}
