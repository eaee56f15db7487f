//! The form field: label, toggle button with preview, popover with the
//! picker and manual input, hint and error lines.

use std::rc::Rc;

use floem::event::{Event, EventListener};
use floem::keyboard::{Key, NamedKey};
use floem::prelude::*;
use floem::reactive::{create_effect, create_memo, RwSignal, SignalGet, SignalUpdate, SignalWith};

use crate::constants;
use crate::gradient::ColorKind;
use crate::i18n::{self, EnglishDefaults, Translator};
use crate::inputs::{copy_button, icon_button, value_input};
use crate::picker::picker_panel;
use crate::state::FieldState;
use crate::swatch::swatch;

/// Emitted whenever the user edits the value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldChange {
    pub name: String,
    pub value: String,
}

/// Everything about the field that is not its value.
pub struct ColorFieldProps {
    name: String,
    label: String,
    hint: Option<String>,
    required: bool,
    disabled: bool,
    error: Option<Rc<dyn Fn() -> Option<String>>>,
    on_change: Option<Rc<dyn Fn(&FieldChange)>>,
    translator: Rc<dyn Translator>,
}

impl ColorFieldProps {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: String::new(),
            hint: None,
            required: false,
            disabled: false,
            error: None,
            on_change: None,
            translator: Rc::new(EnglishDefaults),
        }
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Error text supplied by the host's validation, read reactively.
    pub fn error(mut self, error: impl Fn() -> Option<String> + 'static) -> Self {
        self.error = Some(Rc::new(error));
        self
    }

    pub fn on_change(mut self, f: impl Fn(&FieldChange) + 'static) -> Self {
        self.on_change = Some(Rc::new(f));
        self
    }

    pub fn translator(mut self, translator: impl Translator + 'static) -> Self {
        self.translator = Rc::new(translator);
        self
    }
}

/// Creates the color field.
///
/// `value` is owned by the host. The field mounts from it (or `#000000`),
/// follows external changes to it, and writes every canonical edit back to
/// it before calling `on_change`.
pub fn color_field(value: RwSignal<Option<String>>, props: ColorFieldProps) -> impl IntoView {
    let ColorFieldProps {
        name,
        label: label_text,
        hint,
        required,
        disabled,
        error,
        on_change,
        translator,
    } = props;

    let state = RwSignal::new(FieldState::new(value.get_untracked().as_deref()));

    create_effect(move |_| {
        let external = value.get();
        let next = state.with_untracked(|s| {
            let mut next = s.clone();
            next.sync_initial(external.as_deref()).then_some(next)
        });
        if let Some(next) = next {
            state.set(next);
        }
    });

    let commit: Rc<dyn Fn(String)> = Rc::new(move |canonical: String| {
        value.set(Some(canonical.clone()));
        if let Some(cb) = &on_change {
            cb(&FieldChange {
                name: name.clone(),
                value: canonical,
            });
        }
    });

    let current = move || state.with(|s| s.value().to_string());
    let kind = move || state.with(|s| s.kind());
    let open = create_memo(move |_| state.with(|s| s.is_open()));

    let toggle_tip = translator.format_message(
        &i18n::get_trad(i18n::TOGGLE_LABEL.0),
        i18n::TOGGLE_LABEL.1,
    );
    let input_tip =
        translator.format_message(&i18n::get_trad(i18n::INPUT_LABEL.0), i18n::INPUT_LABEL.1);

    let field_label = h_stack((
        label(move || label_text.clone()).style(|s| {
            s.font_size(constants::LABEL_FONT)
                .font_bold()
                .color(Color::rgb8(50, 50, 77))
        }),
        label(|| "*").style(move |s| {
            s.margin_left(2.0)
                .color(Color::rgb8(208, 43, 32))
                .apply_if(!required, |s| s.hide())
        }),
    ));

    let caret = lucide_icons::Icon::ChevronDown.unicode().to_string();
    let toggle = tooltip(
        h_stack((
            swatch(current),
            label(move || current().to_lowercase()).style(move |s| {
                s.font_size(constants::INPUT_FONT)
                    .flex_grow(1.0)
                    .min_width(0.0)
                    .text_ellipsis()
                    .apply_if(current().is_empty(), |s| {
                        s.color(Color::rgb8(102, 102, 135))
                    })
            }),
            label(move || caret.clone()).style(|s| {
                s.font_family("lucide".to_string())
                    .font_size(12.0)
                    .margin_left(10.0)
                    .color(Color::rgb8(142, 142, 169))
            }),
        ))
        .style(|s| {
            s.items_center()
                .width_full()
                .padding(4.0)
                .padding_right(10.0)
                .border(1.0)
                .border_radius(constants::RADIUS)
                .border_color(Color::rgb8(220, 220, 228))
                .background(Color::WHITE)
                .cursor(floem::style::CursorStyle::Pointer)
                .disabled(|s| {
                    s.background(Color::rgb8(234, 234, 239))
                        .cursor(floem::style::CursorStyle::Default)
                })
        })
        .disabled(move || disabled)
        .on_click_stop(move |_| {
            if disabled {
                return;
            }
            let now_open = state.try_update(|s| s.toggle()).unwrap_or(false);
            log::debug!("color picker {}", if now_open { "opened" } else { "closed" });
        }),
        move || {
            let tip = toggle_tip.clone();
            label(move || tip.clone())
        },
    );

    let popover = {
        let commit = commit.clone();
        dyn_container(
            move || open.get(),
            move |is_open| {
                if !is_open {
                    return empty().into_any();
                }
                popover_panel(state, commit.clone(), input_tip.clone(), kind).into_any()
            },
        )
    };

    let no_hint = hint.is_none();
    let hint_line = label(move || hint.clone().unwrap_or_default()).style(move |s| {
        s.font_size(constants::HINT_FONT)
            .color(Color::rgb8(102, 102, 135))
            .apply_if(no_hint, |s| s.hide())
    });

    let error_text = move || error.as_ref().and_then(|e| e());
    let error_shown = error_text.clone();
    let error_line = label(move || error_shown().unwrap_or_default()).style(move |s| {
        s.font_size(constants::HINT_FONT)
            .color(Color::rgb8(208, 43, 32))
            .apply_if(error_text().is_none(), |s| s.hide())
    });

    v_stack((field_label, toggle, popover, hint_line, error_line))
        .style(|s| s.gap(4.0).width_full())
}

fn popover_panel(
    state: RwSignal<FieldState>,
    commit: Rc<dyn Fn(String)>,
    input_tip: String,
    kind: impl Fn() -> ColorKind + Copy + 'static,
) -> impl IntoView {
    let current = move || state.with(|s| s.value().to_string());

    let on_pick = {
        let commit = commit.clone();
        move |raw: String| {
            if let Some(canonical) = state.try_update(|s| s.handle_color_change(&raw)) {
                commit(canonical);
            }
        }
    };
    let on_input = move |raw: String| {
        if let Some(canonical) = state.try_update(|s| s.handle_input_change(&raw)) {
            commit(canonical);
        }
    };

    v_stack((
        h_stack((
            empty().style(|s| s.flex_grow(1.0)),
            icon_button(lucide_icons::Icon::X, move || state.update(|s| s.dismiss())),
        ))
        .style(|s| s.width_full()),
        picker_panel(current, on_pick),
        h_stack((
            label(move || kind().label()).style(|s| {
                s.font_size(12.0)
                    .font_bold()
                    .color(Color::rgb8(102, 102, 135))
                    .padding_right(8.0)
            }),
            value_input(
                current,
                on_input,
                move || state.with(|s| s.placeholder()),
                input_tip,
            ),
            copy_button(current),
        ))
        .style(|s| s.items_center().gap(4.0).padding_top(12.0)),
    ))
    .style(move |s| {
        let min_height = match kind() {
            ColorKind::Gradient => constants::POPOVER_MIN_HEIGHT_GRADIENT,
            ColorKind::Solid => constants::POPOVER_MIN_HEIGHT_SOLID,
        };
        s.padding(constants::PADDING)
            .min_height(min_height)
            .margin_top(4.0)
            .background(Color::WHITE)
            .border(1.0)
            .border_color(Color::rgb8(220, 220, 228))
            .border_radius(constants::RADIUS)
            .box_shadow_blur(8.0)
            .box_shadow_color(Color::rgba8(33, 33, 52, 26))
    })
    .on_event_stop(EventListener::KeyDown, move |e| {
        if matches!(e, Event::KeyDown(ke) if ke.key.logical_key == Key::Named(NamedKey::Escape)) {
            state.update(|s| s.dismiss());
        }
    })
}
