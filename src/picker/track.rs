//! Pieces shared by the horizontal tracks: pointer mapping and ring thumbs.

use floem::context::PaintCx;
use floem::kurbo::{Circle, Point, Stroke};
use floem::peniko::Color;
use floem_renderer::Renderer;

use crate::constants;

/// Map a pointer x to 0.0–1.0 across a track of `width`, keeping the thumb
/// fully inside the track.
pub(crate) fn fraction_at(x: f64, width: f64) -> Option<f64> {
    let r = constants::THUMB_RADIUS;
    let usable = width - 2.0 * r;
    (usable > 0.0).then(|| ((x - r) / usable).clamp(0.0, 1.0))
}

/// Thumb center x for a 0.0–1.0 position.
pub(crate) fn thumb_x(fraction: f64, width: f64) -> f64 {
    let r = constants::THUMB_RADIUS;
    r + fraction * (width - 2.0 * r)
}

/// White ring with a faint dark outline on both sides.
pub(crate) fn paint_ring(cx: &mut PaintCx, center: Point, radius: f64, fill: Option<Color>) {
    if let Some(fill) = fill {
        cx.fill(&Circle::new(center, radius - 1.5), fill, 0.0);
    }
    let shadow = Color::rgba8(0, 0, 0, 80);
    cx.stroke(&Circle::new(center, radius), shadow, &Stroke::new(1.0));
    cx.stroke(&Circle::new(center, radius - 1.5), Color::WHITE, &Stroke::new(2.0));
    cx.stroke(&Circle::new(center, radius - 3.0), shadow, &Stroke::new(1.0));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fraction_is_clamped_to_track() {
        let w = 100.0 + 2.0 * constants::THUMB_RADIUS;
        assert_eq!(fraction_at(0.0, w), Some(0.0));
        assert_eq!(fraction_at(w, w), Some(1.0));
        assert_eq!(fraction_at(constants::THUMB_RADIUS + 25.0, w), Some(0.25));
        assert_eq!(fraction_at(5.0, 10.0), None);
    }

    #[test]
    fn thumb_position_inverts_fraction() {
        let w = 200.0;
        let x = thumb_x(0.4, w);
        assert!((fraction_at(x, w).unwrap() - 0.4).abs() < 1e-12);
    }
}
