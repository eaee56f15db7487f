//! CSS gradient values: detection, a best-effort parser, and the stop model
//! edited by the picker's gradient bar.
//!
//! The normalizer treats gradients as opaque strings. This module only reads
//! them to drive the preview swatch and the picker; the value that gets
//! stored is whatever `to_css` emits, after normalization.

use crate::color::SolidColor;
use crate::normalize;

/// How a value is presented: a single color or a gradient.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorKind {
    Solid,
    Gradient,
}

impl ColorKind {
    /// Anything that is not a gradient, readable or not, shows as solid.
    pub fn of(value: &str) -> Self {
        if is_gradient(value) {
            ColorKind::Gradient
        } else {
            ColorKind::Solid
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ColorKind::Solid => "Solid",
            ColorKind::Gradient => "Gradient",
        }
    }

    /// Placeholder for the manual text input.
    pub fn placeholder(self) -> &'static str {
        match self {
            ColorKind::Solid => normalize::DEFAULT_COLOR,
            ColorKind::Gradient => "linear-gradient(...)",
        }
    }
}

/// True when the value is any CSS gradient function.
pub fn is_gradient(value: &str) -> bool {
    value.contains("gradient")
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GradientKind {
    /// Angle in degrees, CSS convention (0 = to top, 90 = to right).
    Linear { angle: f64 },
    Radial,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStop {
    /// Position along the gradient, 0.0–1.0.
    pub offset: f64,
    pub color: SolidColor,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Gradient {
    pub kind: GradientKind,
    stops: Vec<GradientStop>,
}

impl Gradient {
    /// Two-stop linear gradient fading `color` into white, left to right.
    pub fn from_color(color: SolidColor) -> Self {
        Self {
            kind: GradientKind::Linear { angle: 90.0 },
            stops: vec![
                GradientStop { offset: 0.0, color },
                GradientStop {
                    offset: 1.0,
                    color: SolidColor::WHITE,
                },
            ],
        }
    }

    /// Parse `linear-gradient(...)` or `radial-gradient(...)`.
    ///
    /// Stops may be hex or rgb/rgba colors with optional `%` offsets;
    /// missing offsets are spread evenly. Returns `None` for anything with
    /// fewer than two readable stops.
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        let (kind, body) = if let Some(rest) = value.strip_prefix("linear-gradient(") {
            (GradientKind::Linear { angle: 180.0 }, rest)
        } else if let Some(rest) = value.strip_prefix("radial-gradient(") {
            (GradientKind::Radial, rest)
        } else {
            return None;
        };
        let body = body.strip_suffix(')')?;

        let mut parts = split_top_level(body);
        let mut kind = kind;
        if let Some(first) = parts.first() {
            match kind {
                GradientKind::Linear { .. } => {
                    if let Some(angle) = parse_direction(first) {
                        kind = GradientKind::Linear { angle };
                        parts.remove(0);
                    }
                }
                GradientKind::Radial => {
                    if parse_stop(first).is_none() {
                        parts.remove(0);
                    }
                }
            }
        }

        let parsed: Vec<(SolidColor, Option<f64>)> =
            parts.iter().map(|p| parse_stop(p)).collect::<Option<_>>()?;
        if parsed.len() < 2 {
            return None;
        }
        let last = (parsed.len() - 1) as f64;
        let stops = parsed
            .into_iter()
            .enumerate()
            .map(|(i, (color, offset))| GradientStop {
                offset: offset.unwrap_or(i as f64 / last),
                color,
            })
            .collect();
        Some(Self { kind, stops })
    }

    pub fn stops(&self) -> &[GradientStop] {
        &self.stops
    }

    pub fn set_stop_color(&mut self, index: usize, color: SolidColor) {
        if let Some(stop) = self.stops.get_mut(index) {
            stop.color = color;
        }
    }

    /// Move a stop and keep stops ordered. Returns the stop's new index.
    pub fn move_stop(&mut self, index: usize, offset: f64) -> usize {
        let Some(stop) = self.stops.get_mut(index) else {
            return index;
        };
        stop.offset = offset.clamp(0.0, 1.0);
        let moved = *stop;
        self.stops.sort_by(|a, b| a.offset.total_cmp(&b.offset));
        self.stops
            .iter()
            .position(|s| *s == moved)
            .unwrap_or(index)
    }

    /// Insert a stop at `offset` using the color already showing there.
    /// Returns the new stop's index.
    pub fn add_stop(&mut self, offset: f64) -> usize {
        let offset = offset.clamp(0.0, 1.0);
        let color = self.sample(offset);
        let index = self
            .stops
            .iter()
            .position(|s| s.offset > offset)
            .unwrap_or(self.stops.len());
        self.stops.insert(index, GradientStop { offset, color });
        index
    }

    /// Remove a stop. A gradient always keeps at least two.
    pub fn remove_stop(&mut self, index: usize) -> bool {
        if self.stops.len() <= 2 || index >= self.stops.len() {
            return false;
        }
        self.stops.remove(index);
        true
    }

    /// Color at `offset`, linearly interpolated between neighbouring stops.
    pub fn sample(&self, offset: f64) -> SolidColor {
        let (Some(first), Some(last)) = (self.stops.first(), self.stops.last()) else {
            return SolidColor::default();
        };
        if offset <= first.offset {
            return first.color;
        }
        if offset >= last.offset {
            return last.color;
        }
        for pair in self.stops.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if offset >= a.offset && offset <= b.offset {
                let span = b.offset - a.offset;
                let t = if span <= f64::EPSILON {
                    0.0
                } else {
                    (offset - a.offset) / span
                };
                let lerp = |x: f64, y: f64| x + (y - x) * t;
                return SolidColor::from_rgba(
                    lerp(a.color.r(), b.color.r()),
                    lerp(a.color.g(), b.color.g()),
                    lerp(a.color.b(), b.color.b()),
                    lerp(a.color.a(), b.color.a()),
                );
            }
        }
        last.color
    }

    /// CSS text with `rgba()` stops, as the picker reports it.
    pub fn to_css(&self) -> String {
        let stops = self
            .stops
            .iter()
            .map(|s| format!("{} {}%", s.color.to_css(), (s.offset * 100.0).round()))
            .collect::<Vec<_>>()
            .join(", ");
        match self.kind {
            GradientKind::Linear { angle } => {
                format!("linear-gradient({}deg, {stops})", angle.round())
            }
            GradientKind::Radial => format!("radial-gradient(circle, {stops})"),
        }
    }
}

/// Split on commas that are not inside parentheses.
fn split_top_level(body: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (i, c) in body.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                parts.push(body[start..i].trim());
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(body[start..].trim());
    parts.retain(|p| !p.is_empty());
    parts
}

fn parse_direction(part: &str) -> Option<f64> {
    if let Some(deg) = part.strip_suffix("deg") {
        return deg.trim().parse().ok();
    }
    match part {
        "to top" => Some(0.0),
        "to right" => Some(90.0),
        "to bottom" => Some(180.0),
        "to left" => Some(270.0),
        _ => None,
    }
}

/// `<color> [<n>%]`, where the color may itself contain spaces (`rgba()`).
fn parse_stop(part: &str) -> Option<(SolidColor, Option<f64>)> {
    let (color, offset) = match part.rsplit_once(char::is_whitespace) {
        Some((color, pct)) if pct.ends_with('%') => {
            let pct: f64 = pct.trim_end_matches('%').parse().ok()?;
            (color.trim(), Some((pct / 100.0).clamp(0.0, 1.0)))
        }
        _ => (part, None),
    };
    Some((SolidColor::parse(color)?, offset))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_detection() {
        assert_eq!(ColorKind::of("#ff0000"), ColorKind::Solid);
        assert_eq!(ColorKind::of("rgb(1, 2, 3)"), ColorKind::Solid);
        assert_eq!(
            ColorKind::of("linear-gradient(90deg, #000 0%, #fff 100%)"),
            ColorKind::Gradient
        );
        assert_eq!(ColorKind::Gradient.placeholder(), "linear-gradient(...)");
        assert_eq!(ColorKind::Solid.placeholder(), "#000000");
    }

    #[test]
    fn kind_only_looks_for_gradients() {
        assert_eq!(ColorKind::of("RGB(1,2,3)"), ColorKind::Solid);
        assert_eq!(ColorKind::of("rgba(1, 2, 3, 0.5)"), ColorKind::Solid);
        assert_eq!(ColorKind::of("tomato"), ColorKind::Solid);
        assert_eq!(ColorKind::of(""), ColorKind::Solid);
        assert_eq!(
            ColorKind::of("radial-gradient(circle, rgb(1, 2, 3) 0%, #fff 100%)"),
            ColorKind::Gradient
        );
    }

    #[test]
    fn parses_linear_with_rgba_stops() {
        let g = Gradient::parse(
            "linear-gradient(90deg, rgba(2,0,36,1) 0%, rgba(9, 9, 121, 0.5) 35%, #00d4ff 100%)",
        )
        .unwrap();
        assert_eq!(g.kind, GradientKind::Linear { angle: 90.0 });
        let offsets: Vec<f64> = g.stops().iter().map(|s| s.offset).collect();
        assert_eq!(offsets, vec![0.0, 0.35, 1.0]);
        assert_eq!(g.stops()[2].color.to_rgb8(), (0, 212, 255));
    }

    #[test]
    fn parses_radial_and_keywords() {
        let g = Gradient::parse("radial-gradient(circle, #fff, #000)").unwrap();
        assert_eq!(g.kind, GradientKind::Radial);
        assert_eq!(g.stops()[1].offset, 1.0);

        let g = Gradient::parse("linear-gradient(to left, #fff, #888, #000)").unwrap();
        assert_eq!(g.kind, GradientKind::Linear { angle: 270.0 });
        assert_eq!(g.stops()[1].offset, 0.5);

        let g = Gradient::parse("linear-gradient(#fff, #000)").unwrap();
        assert_eq!(g.kind, GradientKind::Linear { angle: 180.0 });
    }

    #[test]
    fn rejects_unreadable_gradients() {
        assert!(Gradient::parse("#ffffff").is_none());
        assert!(Gradient::parse("linear-gradient(90deg, #fff 0%)").is_none());
        assert!(Gradient::parse("linear-gradient(90deg, tomato, #fff)").is_none());
    }

    #[test]
    fn css_output_normalizes_to_hex_stops() {
        let g = Gradient::from_color(SolidColor::from_rgba8(255, 0, 0, 255));
        assert_eq!(
            g.to_css(),
            "linear-gradient(90deg, rgba(255, 0, 0, 1) 0%, rgba(255, 255, 255, 1) 100%)"
        );
        assert_eq!(
            normalize::handle_color_change(&g.to_css()),
            "linear-gradient(90deg, #ff0000 0%, #ffffff 100%)"
        );
    }

    #[test]
    fn stop_editing() {
        let mut g = Gradient::from_color(SolidColor::BLACK);
        let mid = g.add_stop(0.5);
        assert_eq!(mid, 1);
        assert_eq!(g.stops()[1].color.to_rgb8(), (128, 128, 128));

        let moved = g.move_stop(0, 0.75);
        assert_eq!(moved, 1);
        assert_eq!(g.stops()[0].offset, 0.5);
        assert_eq!(g.stops()[1].color, SolidColor::BLACK);

        assert!(g.remove_stop(0));
        assert!(!g.remove_stop(0));
        assert_eq!(g.stops().len(), 2);
    }
}
