//! Saturation/brightness area.
//!
//! Saturation runs left to right, brightness bottom to top, for the current
//! hue. The area is rasterized to a small RGBA8 buffer per hue and scaled to
//! the widget by the renderer.

use std::sync::Arc;

use floem::kurbo::{Point, Rect, Stroke};
use floem::peniko::{self, Blob, Color};
use floem::reactive::{create_effect, RwSignal, SignalGet, SignalUpdate};
use floem::views::Decorators;
use floem::{
    View, ViewId,
    context::{ComputeLayoutCx, EventCx, PaintCx, UpdateCx},
    event::{Event, EventPropagation},
};
use floem_renderer::Renderer;

use crate::constants;
use crate::math;
use crate::picker::track;

/// Raster resolution; colors vary smoothly so this scales up cleanly.
const RASTER_SIZE: u32 = 64;

fn rasterize_area(hue: f64) -> Vec<u8> {
    let n = RASTER_SIZE;
    let mut buf = Vec::with_capacity((n * n * 4) as usize);
    for py in 0..n {
        let v = 1.0 - py as f64 / (n - 1) as f64;
        for px in 0..n {
            let s = px as f64 / (n - 1) as f64;
            let (r, g, b) = math::hsb_to_rgb(hue, s, v);
            buf.extend_from_slice(&[
                (r * 255.0).round() as u8,
                (g * 255.0).round() as u8,
                (b * 255.0).round() as u8,
                255,
            ]);
        }
    }
    buf
}

enum AreaUpdate {
    Hue(f64),
    Point(f64, f64),
}

pub(crate) struct SvArea {
    id: ViewId,
    held: bool,
    hue: f64,
    saturation: f64,
    brightness: f64,
    size: floem::taffy::prelude::Size<f32>,
    on_change: Box<dyn Fn(f64, f64)>,
    img: Option<peniko::Image>,
    img_hash: Vec<u8>,
    img_hue: Option<u16>,
}

/// Creates the 2D area. Reads `hue`, reads and writes `saturation` and
/// `brightness`.
pub(crate) fn sv_area(
    hue: RwSignal<f64>,
    saturation: RwSignal<f64>,
    brightness: RwSignal<f64>,
) -> SvArea {
    let id = ViewId::new();

    create_effect(move |_| {
        id.update_state(AreaUpdate::Hue(hue.get()));
    });
    create_effect(move |_| {
        id.update_state(AreaUpdate::Point(saturation.get(), brightness.get()));
    });

    SvArea {
        id,
        held: false,
        hue: hue.get_untracked(),
        saturation: saturation.get_untracked(),
        brightness: brightness.get_untracked(),
        size: Default::default(),
        on_change: Box::new(move |s, b| {
            saturation.set(s);
            brightness.set(b);
        }),
        img: None,
        img_hash: Vec::new(),
        img_hue: None,
    }
    .style(|s| {
        s.width_full()
            .height(constants::AREA_HEIGHT)
            .border_radius(constants::RADIUS)
            .cursor(floem::style::CursorStyle::Pointer)
    })
}

impl SvArea {
    fn update_from_pointer(&mut self, pos: Point) {
        let w = self.size.width as f64;
        let h = self.size.height as f64;
        if w <= 0.0 || h <= 0.0 {
            return;
        }
        self.saturation = (pos.x / w).clamp(0.0, 1.0);
        self.brightness = 1.0 - (pos.y / h).clamp(0.0, 1.0);
        (self.on_change)(self.saturation, self.brightness);
        self.id.request_layout();
    }

    fn ensure_image(&mut self) {
        // Re-raster only when the hue moves by a visible step.
        let key = (self.hue.rem_euclid(1.0) * 720.0).round() as u16;
        if self.img_hue == Some(key) {
            return;
        }
        let pixels = rasterize_area(self.hue);
        let blob = Blob::new(Arc::new(pixels));
        self.img_hash = blob.id().to_le_bytes().to_vec();
        self.img = Some(peniko::Image::new(
            blob,
            peniko::Format::Rgba8,
            RASTER_SIZE,
            RASTER_SIZE,
        ));
        self.img_hue = Some(key);
    }
}

impl View for SvArea {
    fn id(&self) -> ViewId {
        self.id
    }

    fn update(&mut self, _cx: &mut UpdateCx, state: Box<dyn std::any::Any>) {
        if let Ok(update) = state.downcast::<AreaUpdate>() {
            match *update {
                AreaUpdate::Hue(h) => self.hue = h,
                AreaUpdate::Point(s, b) => {
                    self.saturation = s;
                    self.brightness = b;
                }
            }
            self.id.request_layout();
        }
    }

    fn event_before_children(&mut self, cx: &mut EventCx, event: &Event) -> EventPropagation {
        match event {
            Event::PointerDown(e) => {
                cx.update_active(self.id());
                self.held = true;
                self.update_from_pointer(e.pos);
                EventPropagation::Stop
            }
            Event::PointerMove(e) if self.held => {
                self.update_from_pointer(e.pos);
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
        let rrect = rect.to_rounded_rect(constants::RADIUS as f64);

        cx.save();
        cx.clip(&rrect);
        self.ensure_image();
        if let Some(ref img) = self.img {
            cx.draw_img(
                floem_renderer::Img {
                    img: img.clone(),
                    hash: &self.img_hash,
                },
                rect,
            );
        }
        cx.restore();
        cx.stroke(&rrect, Color::rgba8(0, 0, 0, 40), &Stroke::new(1.0));

        let center = Point::new(self.saturation * w, (1.0 - self.brightness) * h);
        track::paint_ring(cx, center, constants::CURSOR_RADIUS, None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raster_corners() {
        let buf = rasterize_area(0.0);
        let n = RASTER_SIZE as usize;
        let px = |x: usize, y: usize| &buf[(y * n + x) * 4..(y * n + x) * 4 + 4];
        assert_eq!(px(0, 0), &[255, 255, 255, 255]);
        assert_eq!(px(n - 1, 0), &[255, 0, 0, 255]);
        assert_eq!(px(0, n - 1), &[0, 0, 0, 255]);
        assert_eq!(px(n - 1, n - 1), &[0, 0, 0, 255]);
    }
}
