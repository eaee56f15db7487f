//! The picker panel shown inside the field's popover.
//!
//! It edits either a single color or a gradient (stop bar plus type and
//! angle controls) with a saturation/brightness area, a hue slider and an
//! alpha slider. Edits are reported as raw `rgba()`/gradient text; the field
//! normalizes them before storing.

#[cfg(feature = "alpha")]
mod alpha_slider;
mod gradient_bar;
mod hue_slider;
mod sv_area;
mod track;

use std::cell::Cell;
use std::rc::Rc;

use floem::prelude::*;
use floem::reactive::{create_effect, RwSignal, SignalGet, SignalUpdate, SignalWith};

use crate::color::SolidColor;
use crate::constants;
use crate::gradient::{ColorKind, Gradient, GradientKind};
use crate::inputs::{angle_input, icon_button, toggle_button};

#[cfg(feature = "alpha")]
use alpha_slider::alpha_slider;
use gradient_bar::gradient_bar;
use hue_slider::hue_slider;
use sv_area::sv_area;

/// Signals behind the panel plus the two guards that keep programmatic
/// updates from echoing back out as edits.
#[derive(Clone)]
struct PickerModel {
    mode: RwSignal<ColorKind>,
    gradient: RwSignal<Gradient>,
    selected: RwSignal<usize>,
    angle: RwSignal<f64>,
    h: RwSignal<f64>,
    s: RwSignal<f64>,
    b: RwSignal<f64>,
    a: RwSignal<f64>,
    /// Set while the model loads a value; edits are not reported.
    syncing: Rc<Cell<bool>>,
    /// Set while a report is in flight; the echoed value is not reloaded.
    emitting: Rc<Cell<bool>>,
    on_change: Rc<dyn Fn(String)>,
}

impl PickerModel {
    fn new(on_change: impl Fn(String) + 'static) -> Self {
        Self {
            mode: RwSignal::new(ColorKind::Solid),
            gradient: RwSignal::new(Gradient::from_color(SolidColor::BLACK)),
            selected: RwSignal::new(0),
            angle: RwSignal::new(90.0),
            h: RwSignal::new(0.0),
            s: RwSignal::new(0.0),
            b: RwSignal::new(0.0),
            a: RwSignal::new(1.0),
            syncing: Rc::new(Cell::new(false)),
            emitting: Rc::new(Cell::new(false)),
            on_change: Rc::new(on_change),
        }
    }

    fn color(&self) -> SolidColor {
        SolidColor::from_hsb(
            self.h.get_untracked(),
            self.s.get_untracked(),
            self.b.get_untracked(),
            self.a.get_untracked(),
        )
    }

    fn quietly(&self, f: impl FnOnce()) {
        let was = self.syncing.replace(true);
        f();
        self.syncing.set(was);
    }

    fn load_color(&self, c: SolidColor) {
        self.quietly(|| {
            let (ch, cs, cb) = c.to_hsb();
            // Gray and black carry no hue; keep the slider where it was.
            if cs > 0.001 && cb > 0.001 {
                self.h.set(ch);
            }
            self.s.set(cs);
            self.b.set(cb);
            self.a.set(c.a());
        });
    }

    fn load_gradient(&self, g: Gradient) {
        let index = self.selected.get_untracked().min(g.stops().len().saturating_sub(1));
        let first = g.stops().get(index).map(|s| s.color);
        self.quietly(|| {
            if let GradientKind::Linear { angle } = g.kind {
                self.angle.set(angle);
            }
            self.mode.set(ColorKind::Gradient);
            self.gradient.set(g);
            self.selected.set(index);
        });
        if let Some(c) = first {
            self.load_color(c);
        }
    }

    /// Mirror an externally stored value. Unreadable values leave the
    /// controls where they are.
    fn load_value(&self, value: &str) {
        if self.emitting.get() {
            return;
        }
        if let Some(g) = Gradient::parse(value) {
            self.load_gradient(g);
        } else if let Some(c) = SolidColor::parse(value) {
            self.quietly(|| self.mode.set(ColorKind::Solid));
            self.load_color(c);
        }
    }

    fn emit(&self, raw: String) {
        if self.syncing.get() {
            return;
        }
        log::trace!("picker reported {raw}");
        let was = self.emitting.replace(true);
        (self.on_change)(raw);
        self.emitting.set(was);
    }

    fn emit_gradient(&self) {
        let css = self.gradient.with_untracked(|g| g.to_css());
        self.emit(css);
    }

    /// HSB/alpha moved: recolor the solid value or the selected stop.
    fn color_edited(&self) {
        let color = self.color();
        match self.mode.get_untracked() {
            ColorKind::Solid => self.emit(color.to_css()),
            ColorKind::Gradient => {
                let index = self.selected.get_untracked();
                self.gradient.update(|g| g.set_stop_color(index, color));
                self.emit_gradient();
            }
        }
    }

    fn set_mode(&self, kind: ColorKind) {
        if self.mode.get_untracked() == kind {
            return;
        }
        match kind {
            ColorKind::Solid => {
                let index = self.selected.get_untracked();
                let color = self
                    .gradient
                    .with_untracked(|g| g.stops().get(index).map(|s| s.color))
                    .unwrap_or_else(|| self.color());
                self.quietly(|| self.mode.set(ColorKind::Solid));
                self.load_color(color);
                self.emit(color.to_css());
            }
            ColorKind::Gradient => {
                let mut g = Gradient::from_color(self.color());
                g.kind = GradientKind::Linear {
                    angle: self.angle.get_untracked(),
                };
                self.load_gradient(g);
                self.emit_gradient();
            }
        }
    }

    fn set_gradient_kind(&self, radial: bool) {
        let kind = if radial {
            GradientKind::Radial
        } else {
            GradientKind::Linear {
                angle: self.angle.get_untracked(),
            }
        };
        self.gradient.update(|g| g.kind = kind);
        self.emit_gradient();
    }

    fn angle_edited(&self) {
        let angle = self.angle.get_untracked();
        let changed = self.gradient.try_update(|g| match g.kind {
            GradientKind::Linear { .. } => {
                g.kind = GradientKind::Linear { angle };
                true
            }
            GradientKind::Radial => false,
        });
        if changed == Some(true) {
            self.emit_gradient();
        }
    }

    fn remove_selected(&self) {
        let index = self.selected.get_untracked();
        let removed = self.gradient.try_update(|g| g.remove_stop(index));
        if removed != Some(true) {
            return;
        }
        let last = self.gradient.with_untracked(|g| g.stops().len() - 1);
        self.selected.set(index.min(last));
        self.emit_gradient();
    }

    fn is_radial(&self) -> bool {
        self.gradient.with(|g| g.kind == GradientKind::Radial)
    }
}

/// Builds the picker. `value` is the stored field value, read reactively;
/// `on_change` receives every edit as raw CSS text.
pub(crate) fn picker_panel(
    value: impl Fn() -> String + 'static,
    on_change: impl Fn(String) + 'static,
) -> impl IntoView {
    let model = PickerModel::new(on_change);

    // Stored value -> controls
    {
        let model = model.clone();
        create_effect(move |_| {
            let v = value();
            model.load_value(&v);
        });
    }

    // Controls -> reported value
    {
        let model = model.clone();
        let (h, s, b, a) = (model.h, model.s, model.b, model.a);
        create_effect(move |prev: Option<()>| {
            let _ = (h.get(), s.get(), b.get(), a.get());
            if prev.is_some() && !model.syncing.get() {
                model.color_edited();
            }
        });
    }

    // Selecting a stop puts its color under the sliders
    {
        let model = model.clone();
        let selected = model.selected;
        create_effect(move |_| {
            let index = selected.get();
            if model.mode.get_untracked() != ColorKind::Gradient {
                return;
            }
            let color = model
                .gradient
                .with_untracked(|g| g.stops().get(index).map(|s| s.color));
            if let Some(c) = color {
                model.load_color(c);
            }
        });
    }

    {
        let model = model.clone();
        let angle = model.angle;
        create_effect(move |prev: Option<()>| {
            let _ = angle.get();
            if prev.is_some() && !model.syncing.get() {
                model.angle_edited();
            }
        });
    }

    let mode = model.mode;
    let is_gradient = move || mode.get() == ColorKind::Gradient;

    let mode_row = {
        let (m1, m2) = (model.clone(), model.clone());
        h_stack((
            toggle_button("Solid", move || mode.get() == ColorKind::Solid, move || {
                m1.set_mode(ColorKind::Solid)
            }),
            toggle_button("Gradient", is_gradient, move || {
                m2.set_mode(ColorKind::Gradient)
            }),
        ))
        .style(|s| s.items_center())
    };

    let gradient_row = {
        let (m1, m2, m3, m4, m5) = (
            model.clone(),
            model.clone(),
            model.clone(),
            model.clone(),
            model.clone(),
        );
        h_stack((
            toggle_button("Linear", move || !m1.is_radial(), move || {
                m2.set_gradient_kind(false)
            }),
            toggle_button("Radial", move || m3.is_radial(), move || {
                m4.set_gradient_kind(true)
            }),
            {
                let m = model.clone();
                angle_input(model.angle)
                    .style(move |s| s.apply_if(m.is_radial(), |s| s.hide()))
            },
            empty().style(|s| s.flex_grow(1.0)),
            icon_button(lucide_icons::Icon::Trash, move || m5.remove_selected()),
        ))
        .style(move |s| {
            s.items_center()
                .width_full()
                .apply_if(!is_gradient(), |s| s.hide())
        })
    };

    let stop_bar = {
        let m = model.clone();
        gradient_bar(model.gradient, model.selected, move || m.emit_gradient())
            .style(move |s| s.apply_if(!is_gradient(), |s| s.hide()))
    };

    let (h, s, b) = (model.h, model.s, model.b);

    v_stack((
        mode_row,
        gradient_row,
        stop_bar,
        sv_area(h, s, b),
        hue_slider(h),
        #[cfg(feature = "alpha")]
        alpha_slider(model.a, move || {
            SolidColor::from_hsb(h.get(), s.get(), b.get(), 1.0)
        }),
    ))
    .style(|st| st.width(constants::PICKER_WIDTH).gap(constants::GAP))
}
