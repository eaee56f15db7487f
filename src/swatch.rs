//! Preview swatch: paints the current value, solid or gradient, over a
//! checkerboard. Values it cannot read paint as the checkerboard alone.

use floem::kurbo::{Point, Rect, Shape, Stroke};
use floem::peniko::{self, Color, ColorStop};
use floem::reactive::create_effect;
use floem::views::Decorators;
use floem::{
    View, ViewId,
    context::{ComputeLayoutCx, PaintCx, UpdateCx},
};
use floem_renderer::Renderer;

use crate::checkerboard;
use crate::color::SolidColor;
use crate::constants;
use crate::gradient::{Gradient, GradientKind, GradientStop};

/// What the swatch can draw for a given value.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Fill {
    Solid(SolidColor),
    Gradient(Gradient),
    Unknown,
}

impl Fill {
    pub(crate) fn of(value: &str) -> Self {
        if let Some(g) = Gradient::parse(value) {
            Fill::Gradient(g)
        } else if let Some(c) = SolidColor::parse(value) {
            Fill::Solid(c)
        } else {
            Fill::Unknown
        }
    }
}

/// Peniko stops for a gradient's stop list.
pub(crate) fn color_stops(stops: &[GradientStop]) -> Vec<ColorStop> {
    stops
        .iter()
        .map(|s| ColorStop {
            offset: s.offset as f32,
            color: s.color.to_peniko(),
        })
        .collect()
}

/// Start and end points of a CSS linear gradient at `angle` degrees across
/// `rect`, so that the corners land on the first and last stop.
pub(crate) fn linear_endpoints(rect: Rect, angle: f64) -> (Point, Point) {
    let rad = angle.to_radians();
    let (dx, dy) = (rad.sin(), -rad.cos());
    let half = (rect.width() / 2.0 * dx).abs() + (rect.height() / 2.0 * dy).abs();
    let c = rect.center();
    (
        Point::new(c.x - dx * half, c.y - dy * half),
        Point::new(c.x + dx * half, c.y + dy * half),
    )
}

fn brush(gradient: &Gradient, rect: Rect) -> peniko::Gradient {
    let stops = color_stops(gradient.stops());
    match gradient.kind {
        GradientKind::Linear { angle } => {
            let (start, end) = linear_endpoints(rect, angle);
            peniko::Gradient::new_linear(start, end).with_stops(stops.as_slice())
        }
        GradientKind::Radial => {
            let c = rect.center();
            let radius = (rect.width().powi(2) + rect.height().powi(2)).sqrt() / 2.0;
            peniko::Gradient::new_radial(c, radius as f32).with_stops(stops.as_slice())
        }
    }
}

pub(crate) struct Swatch {
    id: ViewId,
    fill: Fill,
    size: floem::taffy::prelude::Size<f32>,
}

/// A swatch that follows `value`.
pub(crate) fn swatch(value: impl Fn() -> String + 'static) -> Swatch {
    let id = ViewId::new();
    create_effect(move |_| {
        id.update_state(Fill::of(&value()));
    });
    Swatch {
        id,
        fill: Fill::Unknown,
        size: Default::default(),
    }
    .style(|s| {
        s.width(constants::SWATCH_WIDTH)
            .height(constants::SWATCH_HEIGHT)
            .flex_shrink(0.0)
            .margin_right(10.0)
    })
}

impl View for Swatch {
    fn id(&self) -> ViewId {
        self.id
    }

    fn update(&mut self, _cx: &mut UpdateCx, state: Box<dyn std::any::Any>) {
        if let Ok(fill) = state.downcast::<Fill>() {
            self.fill = *fill;
            self.id.request_paint();
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
        let rrect = rect.to_rounded_rect(5.0);

        checkerboard::paint_checkerboard(cx, rect, &rrect, constants::CHECKER_CELL);
        match &self.fill {
            Fill::Solid(c) => cx.fill(&rrect, c.to_peniko(), 0.0),
            Fill::Gradient(g) => {
                cx.save();
                cx.clip(&rrect);
                cx.fill(&rect.to_path(0.1), &brush(g, rect), 0.0);
                cx.restore();
            }
            Fill::Unknown => {}
        }
        cx.stroke(&rrect, Color::rgba8(0, 0, 0, 26), &Stroke::new(1.0));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_classification() {
        assert!(matches!(Fill::of("#ff0000"), Fill::Solid(_)));
        assert!(matches!(
            Fill::of("linear-gradient(90deg, #000 0%, #fff 100%)"),
            Fill::Gradient(_)
        ));
        assert_eq!(Fill::of("tomato"), Fill::Unknown);
    }

    #[test]
    fn linear_endpoints_follow_css_angles() {
        let rect = Rect::new(0.0, 0.0, 100.0, 50.0);
        let (s, e) = linear_endpoints(rect, 90.0);
        assert!((s.x - 0.0).abs() < 1e-9 && (e.x - 100.0).abs() < 1e-9);
        assert!((s.y - 25.0).abs() < 1e-9 && (e.y - 25.0).abs() < 1e-9);

        let (s, e) = linear_endpoints(rect, 180.0);
        assert!((s.y - 0.0).abs() < 1e-9 && (e.y - 50.0).abs() < 1e-9);
    }
}
