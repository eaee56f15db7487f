//! Hue slider (0.0–1.0), red at both ends.
//!
//! The spectrum never changes, so it is rasterized once at a fixed width
//! and scaled to the track.

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

fn rasterize_spectrum(width: u32) -> Vec<u8> {
    (0..width)
        .flat_map(|px| {
            let hue = px as f64 / (width - 1).max(1) as f64;
            let (r, g, b) = math::hsb_to_rgb(hue, 1.0, 1.0);
            [
                (r * 255.0).round() as u8,
                (g * 255.0).round() as u8,
                (b * 255.0).round() as u8,
                255,
            ]
        })
        .collect()
}

pub(crate) struct HueSlider {
    id: ViewId,
    held: bool,
    hue: f64,
    size: floem::taffy::prelude::Size<f32>,
    on_change: Box<dyn Fn(f64)>,
    img: Option<peniko::Image>,
    img_hash: Vec<u8>,
}

pub(crate) fn hue_slider(hue: RwSignal<f64>) -> HueSlider {
    let id = ViewId::new();
    create_effect(move |_| {
        id.update_state(hue.get());
    });

    HueSlider {
        id,
        held: false,
        hue: hue.get_untracked(),
        size: Default::default(),
        on_change: Box::new(move |h| hue.set(h)),
        img: None,
        img_hash: Vec::new(),
    }
    .style(|s| {
        s.width_full()
            .height(constants::SLIDER_HEIGHT)
            .cursor(floem::style::CursorStyle::Pointer)
    })
}

impl HueSlider {
    fn update_from_pointer(&mut self, x: f64) {
        if let Some(f) = track::fraction_at(x, self.size.width as f64) {
            self.hue = f;
            (self.on_change)(f);
            self.id.request_layout();
        }
    }

    fn ensure_image(&mut self) {
        if self.img.is_some() {
            return;
        }
        let width = constants::HUE_RASTER_WIDTH;
        let blob = Blob::new(Arc::new(rasterize_spectrum(width)));
        self.img_hash = b"hue-spectrum".to_vec();
        self.img = Some(peniko::Image::new(blob, peniko::Format::Rgba8, width, 1));
    }
}

impl View for HueSlider {
    fn id(&self) -> ViewId {
        self.id
    }

    fn update(&mut self, _cx: &mut UpdateCx, state: Box<dyn std::any::Any>) {
        if let Ok(h) = state.downcast::<f64>() {
            self.hue = *h;
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

        let center = Point::new(track::thumb_x(self.hue, w), h / 2.0);
        track::paint_ring(cx, center, constants::THUMB_RADIUS, None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spectrum_wraps_to_red() {
        let buf = rasterize_spectrum(7);
        assert_eq!(buf.len(), 7 * 4);
        assert_eq!(&buf[0..4], &[255, 0, 0, 255]);
        assert_eq!(&buf[24..28], &[255, 0, 0, 255]);
        // hue 1/3
        assert_eq!(&buf[8..12], &[0, 255, 0, 255]);
    }
}
