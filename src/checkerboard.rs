//! Checkerboard backdrop drawn behind anything that can be translucent.

use floem::context::PaintCx;
use floem::kurbo::{Rect, Shape};
use floem::peniko::Color;
use floem_renderer::Renderer;

const LIGHT: Color = Color::rgb8(255, 255, 255);
const DARK: Color = Color::rgb8(204, 204, 204);

/// Fill `rect` with alternating cells of `cell` size, clipped to `clip`.
pub(crate) fn paint_checkerboard(cx: &mut PaintCx, rect: Rect, clip: &impl Shape, cell: f64) {
    cx.save();
    cx.clip(clip);
    cx.fill(&rect, LIGHT, 0.0);
    let cols = (rect.width() / cell).ceil() as usize;
    let rows = (rect.height() / cell).ceil() as usize;
    for (row, col) in (0..rows).flat_map(|r| (0..cols).map(move |c| (r, c))) {
        if (row + col) % 2 == 0 {
            continue;
        }
        let x = rect.x0 + col as f64 * cell;
        let y = rect.y0 + row as f64 * cell;
        let dark = Rect::new(x, y, (x + cell).min(rect.x1), (y + cell).min(rect.y1));
        cx.fill(&dark, DARK, 0.0);
    }
    cx.restore();
}
