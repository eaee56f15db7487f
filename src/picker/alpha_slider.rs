//! Alpha slider: checkerboard under a transparent-to-opaque ramp of the
//! current color. Transparent on the left, opaque on the right.

use floem::kurbo::{Point, Rect, Shape, Stroke};
use floem::peniko::{Color, Gradient};
use floem::reactive::{create_effect, RwSignal, SignalGet, SignalUpdate};
use floem::views::Decorators;
use floem::{
    View, ViewId,
    context::{ComputeLayoutCx, EventCx, PaintCx, UpdateCx},
    event::{Event, EventPropagation},
};
use floem_renderer::Renderer;

use crate::checkerboard;
use crate::color::SolidColor;
use crate::constants;
use crate::picker::track;

enum AlphaUpdate {
    Alpha(f64),
    Base(SolidColor),
}

pub(crate) struct AlphaSlider {
    id: ViewId,
    held: bool,
    alpha: f64,
    base: SolidColor,
    size: floem::taffy::prelude::Size<f32>,
    on_change: Box<dyn Fn(f64)>,
}

/// `base` supplies the color being edited; only its RGB is used.
pub(crate) fn alpha_slider(
    alpha: RwSignal<f64>,
    base: impl Fn() -> SolidColor + 'static,
) -> AlphaSlider {
    let id = ViewId::new();

    create_effect(move |_| {
        id.update_state(AlphaUpdate::Alpha(alpha.get()));
    });
    create_effect(move |_| {
        id.update_state(AlphaUpdate::Base(base()));
    });

    AlphaSlider {
        id,
        held: false,
        alpha: alpha.get_untracked(),
        base: SolidColor::default(),
        size: Default::default(),
        on_change: Box::new(move |a| alpha.set(a)),
    }
    .style(|s| {
        s.width_full()
            .height(constants::SLIDER_HEIGHT)
            .cursor(floem::style::CursorStyle::Pointer)
    })
}

impl AlphaSlider {
    fn update_from_pointer(&mut self, x: f64) {
        if let Some(f) = track::fraction_at(x, self.size.width as f64) {
            self.alpha = f;
            (self.on_change)(f);
            self.id.request_layout();
        }
    }
}

impl View for AlphaSlider {
    fn id(&self) -> ViewId {
        self.id
    }

    fn update(&mut self, _cx: &mut UpdateCx, state: Box<dyn std::any::Any>) {
        if let Ok(update) = state.downcast::<AlphaUpdate>() {
            match *update {
                AlphaUpdate::Alpha(a) => self.alpha = a,
                AlphaUpdate::Base(c) => self.base = c,
            }
            self.id.request_layout();
        }
    }

    fn event_before_children(&mut self, cx: &mut EventCx, event: &Event) -> EventPropagation {
        match event {
            Event::PointerDown(e) => {
                cx.update_active(self.id());
                self.held = true;
                self.update_from_pointer(e.pos.x);
                EventPropagation::Stop
            }
            Event::PointerMove(e) if self.held => {
                self.update_from_pointer(e.pos.x);
                EventPropagation::Stop
            }
            Event::PointerUp(_) | Event::FocusLost => {
                self.held = false;
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
        let w = self.size.width as f64;
        let h = self.size.height as f64;
        if w == 0.0 || h == 0.0 {
            return;
        }
        let rect = Rect::new(0.0, 0.0, w, h);
        let rrect = rect.to_rounded_rect(h / 2.0);

        checkerboard::paint_checkerboard(cx, rect, &rrect, constants::CHECKER_CELL);

        let clear = self.base.with_alpha(0.0).to_peniko();
        let opaque = self.base.with_alpha(1.0).to_peniko();
        let ramp = Gradient::new_linear((0.0, h / 2.0), (w, h / 2.0)).with_stops([clear, opaque]);
        cx.save();
        cx.clip(&rrect);
        // The vello rect fast-path only takes solid brushes.
        cx.fill(&rect.to_path(0.1), &ramp, 0.0);
        cx.restore();
        cx.stroke(&rrect, Color::rgba8(0, 0, 0, 40), &Stroke::new(1.0));

        let center = Point::new(track::thumb_x(self.alpha, w), h / 2.0);
        track::paint_ring(cx, center, constants::THUMB_RADIUS, None);
    }
}
