//! Gradient stop bar.
//!
//! Shows the gradient left to right with a handle per stop. Pressing a
//! handle selects it and starts a drag; pressing elsewhere inserts a stop.

use floem::kurbo::{Point, Rect, Shape, Stroke};
use floem::peniko::{self, Color};
use floem::reactive::{create_effect, RwSignal, SignalGet, SignalUpdate};
use floem::views::Decorators;
use floem::{
    View, ViewId,
    context::{ComputeLayoutCx, EventCx, PaintCx, UpdateCx},
    event::{Event, EventPropagation},
};
use floem_renderer::Renderer;

use crate::checkerboard;
use crate::constants;
use crate::gradient::Gradient;
use crate::picker::track;
use crate::swatch;

enum BarUpdate {
    Gradient(Gradient),
    Selected(usize),
}

pub(crate) struct GradientBar {
    id: ViewId,
    dragging: bool,
    gradient: Gradient,
    selected: usize,
    size: floem::taffy::prelude::Size<f32>,
    gradient_signal: RwSignal<Gradient>,
    selected_signal: RwSignal<usize>,
    on_edit: Box<dyn Fn()>,
}

/// `on_edit` fires after the bar changes the gradient itself.
pub(crate) fn gradient_bar(
    gradient: RwSignal<Gradient>,
    selected: RwSignal<usize>,
    on_edit: impl Fn() + 'static,
) -> GradientBar {
    let id = ViewId::new();

    create_effect(move |_| {
        id.update_state(BarUpdate::Gradient(gradient.get()));
    });
    create_effect(move |_| {
        id.update_state(BarUpdate::Selected(selected.get()));
    });

    GradientBar {
        id,
        dragging: false,
        gradient: gradient.get_untracked(),
        selected: selected.get_untracked(),
        size: Default::default(),
        gradient_signal: gradient,
        selected_signal: selected,
        on_edit: Box::new(on_edit),
    }
    .style(|s| {
        s.width_full()
            .height(constants::STOP_BAR_HEIGHT)
            .cursor(floem::style::CursorStyle::Pointer)
    })
}

impl GradientBar {
    fn width(&self) -> f64 {
        self.size.width as f64
    }

    fn stop_at(&self, x: f64) -> Option<usize> {
        let w = self.width();
        self.gradient
            .stops()
            .iter()
            .enumerate()
            .map(|(i, s)| (i, (track::thumb_x(s.offset, w) - x).abs()))
            .filter(|(_, d)| *d <= constants::THUMB_RADIUS)
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(i, _)| i)
    }

    fn select(&mut self, index: usize) {
        self.selected = index;
        self.selected_signal.set(index);
    }

    fn press(&mut self, x: f64) {
        if let Some(index) = self.stop_at(x) {
            self.select(index);
        } else if let Some(f) = track::fraction_at(x, self.width()) {
            let index = self.gradient.add_stop(f);
            self.gradient_signal.set(self.gradient.clone());
            self.select(index);
            (self.on_edit)();
        }
        self.dragging = true;
    }

    fn drag(&mut self, x: f64) {
        let Some(f) = track::fraction_at(x, self.width()) else {
            return;
        };
        let index = self.gradient.move_stop(self.selected, f);
        self.gradient_signal.set(self.gradient.clone());
        if index != self.selected {
            self.select(index);
        }
        (self.on_edit)();
    }
}

impl View for GradientBar {
    fn id(&self) -> ViewId {
        self.id
    }

    fn update(&mut self, _cx: &mut UpdateCx, state: Box<dyn std::any::Any>) {
        if let Ok(update) = state.downcast::<BarUpdate>() {
            match *update {
                BarUpdate::Gradient(g) => self.gradient = g,
                BarUpdate::Selected(i) => self.selected = i,
            }
            self.id.request_layout();
        }
    }

    fn event_before_children(&mut self, cx: &mut EventCx, event: &Event) -> EventPropagation {
        match event {
            Event::PointerDown(e) => {
                cx.update_active(self.id());
                self.press(e.pos.x);
                self.id.request_layout();
                EventPropagation::Stop
            }
            Event::PointerMove(e) if self.dragging => {
                self.drag(e.pos.x);
                self.id.request_layout();
                EventPropagation::Stop
            }
            Event::PointerUp(_) | Event::FocusLost => {
                self.dragging = false;
                EventPropagation::Continue
            }
            _ => EventPropagation::Continue,
        }
    }

    fn compute_layout(&mut self, _cx: &mut ComputeLayoutCx) -> Option<Rect> {
        self.size = self.id.get_layout().unwrap_or_default().size;
        None
    }

    fn paint(&mut self, cx: &mut PaintCx) {
        let w = self.width();
        let h = self.size.height as f64;
        if w == 0.0 || h == 0.0 {
            return;
        }
        let r = constants::THUMB_RADIUS;
        let rect = Rect::new(r, 0.0, w - r, h);
        let rrect = rect.to_rounded_rect(constants::RADIUS as f64);

        checkerboard::paint_checkerboard(cx, rect, &rrect, constants::CHECKER_CELL);
        let stops = swatch::color_stops(self.gradient.stops());
        let ramp = peniko::Gradient::new_linear((rect.x0, h / 2.0), (rect.x1, h / 2.0))
            .with_stops(stops.as_slice());
        cx.save();
        cx.clip(&rrect);
        cx.fill(&rect.to_path(0.1), &ramp, 0.0);
        cx.restore();
        cx.stroke(&rrect, Color::rgba8(0, 0, 0, 40), &Stroke::new(1.0));

        for (i, stop) in self.gradient.stops().iter().enumerate() {
            let center = Point::new(track::thumb_x(stop.offset, w), h / 2.0);
            let radius = if i == self.selected { r + 1.0 } else { r - 1.0 };
            track::paint_ring(cx, center, radius, Some(stop.color.with_alpha(1.0).to_peniko()));
        }
    }
}

