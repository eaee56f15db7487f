//! Text inputs and small buttons used inside the picker popover.

use std::rc::Rc;

use floem::event::{Event, EventListener, EventPropagation};
use floem::keyboard::{Key, NamedKey};
use floem::prelude::*;
use floem::reactive::{create_effect, untrack, RwSignal, SignalGet, SignalUpdate};

use crate::constants;

fn is_enter(e: &Event) -> bool {
    matches!(e, Event::KeyDown(ke) if ke.key.logical_key == Key::Named(NamedKey::Enter))
}

/// The manual value input.
///
/// Keystrokes that differ from the current `value` go to `on_input`;
/// external changes to `value` are mirrored into the text. The placeholder
/// is drawn underneath the input and follows `placeholder` while the text
/// is empty.
pub(crate) fn value_input(
    value: impl Fn() -> String + 'static,
    on_input: impl Fn(String) + 'static,
    placeholder: impl Fn() -> &'static str + 'static,
    tip: String,
) -> impl IntoView {
    let value = Rc::new(value);
    let text = RwSignal::new(untrack(|| value()));

    let read = value.clone();
    create_effect(move |_| {
        let v = read();
        if text.get_untracked() != v {
            text.set(v);
        }
    });

    create_effect(move |prev: Option<()>| {
        let raw = text.get();
        if prev.is_some() && untrack(|| value()) != raw {
            on_input(raw);
        }
    });

    tooltip(
        stack((
            label(placeholder).style(move |s| {
                s.absolute()
                    .inset_left(9.0)
                    .inset_top(8.0)
                    .font_size(constants::INPUT_FONT)
                    .color(Color::rgb8(142, 142, 169))
                    .apply_if(!text.get().is_empty(), |s| s.hide())
            }),
            text_input(text).style(|s| {
                s.width_full()
                    .padding(8.0)
                    .font_size(constants::INPUT_FONT)
                    .border(0.0)
                    .background(Color::TRANSPARENT)
            }),
        ))
        .style(|s| {
            s.width(constants::VALUE_INPUT_WIDTH)
                .background(Color::WHITE)
                .border(1.0)
                .border_color(Color::rgb8(220, 220, 228))
                .border_radius(constants::RADIUS)
        }),
        move || {
            let tip = tip.clone();
            label(move || tip.clone())
        },
    )
}

/// Gradient angle in whole degrees, committed on Enter or focus loss and
/// wrapped into 0–359.
pub(crate) fn angle_input(angle: RwSignal<f64>) -> impl IntoView {
    let text = RwSignal::new(format_angle(angle.get_untracked()));

    create_effect(move |_| {
        let display = format_angle(angle.get());
        if text.get_untracked() != display {
            text.set(display);
        }
    });

    let on_commit = move || {
        let raw = text.get_untracked();
        match parse_angle(&raw) {
            Some(deg) if (deg - angle.get_untracked()).abs() > f64::EPSILON => angle.set(deg),
            Some(_) => {}
            None => text.set(format_angle(angle.get_untracked())),
        }
    };

    h_stack((
        text_input(text)
            .style(|s| {
                s.width(constants::ANGLE_INPUT_WIDTH)
                    .padding(2.0)
                    .font_size(constants::INPUT_FONT)
                    .font_family("monospace".to_string())
                    .background(Color::WHITE)
                    .border(1.0)
                    .border_color(Color::rgb8(200, 200, 200))
                    .border_radius(3.0)
            })
            .on_event_stop(EventListener::FocusLost, move |_| on_commit())
            .on_event(EventListener::KeyDown, move |e| {
                if is_enter(e) {
                    on_commit();
                    return EventPropagation::Stop;
                }
                EventPropagation::Continue
            }),
        label(|| "°").style(|s| {
            s.font_size(constants::LABEL_FONT)
                .color(Color::rgb8(120, 120, 120))
        }),
    ))
    .style(|s| s.items_center().gap(2.0))
}

fn format_angle(deg: f64) -> String {
    format!("{}", deg.round() as i64)
}

fn parse_angle(raw: &str) -> Option<f64> {
    let deg: f64 = raw.trim().trim_end_matches('°').parse().ok()?;
    deg.is_finite().then(|| deg.round().rem_euclid(360.0))
}

/// A segmented-control style button; highlighted while `active` is true.
pub(crate) fn toggle_button(
    text: &'static str,
    active: impl Fn() -> bool + 'static,
    on_press: impl Fn() + 'static,
) -> impl IntoView {
    label(move || text)
        .style(move |s| {
            let base = s
                .padding_horiz(8.0)
                .padding_vert(4.0)
                .margin_right(8.0)
                .font_size(constants::LABEL_FONT)
                .border(1.0)
                .border_radius(constants::RADIUS)
                .cursor(floem::style::CursorStyle::Pointer);
            if active() {
                base.background(Color::rgb8(73, 69, 255))
                    .border_color(Color::rgb8(73, 69, 255))
                    .color(Color::WHITE)
            } else {
                base.background(Color::rgb8(240, 240, 240))
                    .border_color(Color::rgb8(221, 221, 221))
            }
        })
        .on_click_stop(move |_| on_press())
}

/// A small icon button rendered with the lucide font.
pub(crate) fn icon_button(icon: lucide_icons::Icon, on_press: impl Fn() + 'static) -> impl IntoView {
    let pressed = RwSignal::new(false);
    let glyph = icon.unicode().to_string();
    container(
        label(move || glyph.clone()).style(move |s| {
            let c = if pressed.get() {
                Color::rgb8(80, 80, 80)
            } else {
                Color::rgb8(120, 120, 120)
            };
            s.font_size(14.0).font_family("lucide".to_string()).color(c)
        }),
    )
    .style(|s| {
        s.size(20.0, 20.0)
            .items_center()
            .justify_center()
            .border_radius(3.0)
            .cursor(floem::style::CursorStyle::Pointer)
            .hover(|s| s.background(Color::rgb8(230, 230, 230)))
    })
    .on_event_stop(EventListener::PointerDown, move |_| pressed.set(true))
    .on_event_stop(EventListener::PointerUp, move |_| {
        pressed.set(false);
        on_press();
    })
}

/// Copies the result of `get_text` to the clipboard.
pub(crate) fn copy_button(get_text: impl Fn() -> String + 'static) -> impl IntoView {
    icon_button(lucide_icons::Icon::Copy, move || copy_to_clipboard(&get_text()))
}

fn copy_to_clipboard(text: &str) {
    match arboard::Clipboard::new().and_then(|mut cb| cb.set_text(text)) {
        Ok(()) => log::debug!("copied {text} to clipboard"),
        Err(e) => log::warn!("clipboard unavailable: {e}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn angles_wrap_and_round() {
        assert_eq!(parse_angle("90"), Some(90.0));
        assert_eq!(parse_angle(" 45.6° "), Some(46.0));
        assert_eq!(parse_angle("-90"), Some(270.0));
        assert_eq!(parse_angle("720"), Some(0.0));
        assert_eq!(parse_angle("abc"), None);
        assert_eq!(parse_angle("inf"), None);
    }

    #[test]
    fn angle_display() {
        assert_eq!(format_angle(89.6), "90");
        assert_eq!(format_angle(0.0), "0");
    }
}
