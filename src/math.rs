//! HSB/RGB conversions on normalized f64 (0.0–1.0) components.

/// HSB → RGB. Hue wraps, so 1.0 is red again.
pub(crate) fn hsb_to_rgb(h: f64, s: f64, v: f64) -> (f64, f64, f64) {
    let chroma = v * s;
    let sector = h.rem_euclid(1.0) * 6.0;
    let x = chroma * (1.0 - (sector % 2.0 - 1.0).abs());
    let (r, g, b) = match sector as u32 {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };
    let m = v - chroma;
    (r + m, g + m, b + m)
}

/// RGB → HSB. Returns hue 0.0 for grays.
pub(crate) fn rgb_to_hsb(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let max = r.max(g).max(b);
    let chroma = max - r.min(g).min(b);

    let hue = if chroma == 0.0 {
        0.0
    } else if max == r {
        ((g - b) / chroma).rem_euclid(6.0) / 6.0
    } else if max == g {
        ((b - r) / chroma + 2.0) / 6.0
    } else {
        ((r - g) / chroma + 4.0) / 6.0
    };
    let sat = if max == 0.0 { 0.0 } else { chroma / max };

    (hue, sat, max)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: (f64, f64, f64), b: (f64, f64, f64)) -> bool {
        (a.0 - b.0).abs() < 1e-9 && (a.1 - b.1).abs() < 1e-9 && (a.2 - b.2).abs() < 1e-9
    }

    #[test]
    fn primaries() {
        assert!(close(hsb_to_rgb(0.0, 1.0, 1.0), (1.0, 0.0, 0.0)));
        assert!(close(hsb_to_rgb(1.0 / 3.0, 1.0, 1.0), (0.0, 1.0, 0.0)));
        assert!(close(hsb_to_rgb(2.0 / 3.0, 1.0, 1.0), (0.0, 0.0, 1.0)));
        assert!(close(hsb_to_rgb(1.0, 1.0, 1.0), (1.0, 0.0, 0.0)));
    }

    #[test]
    fn gray_has_no_saturation() {
        let (h, s, v) = rgb_to_hsb(0.5, 0.5, 0.5);
        assert_eq!((h, s), (0.0, 0.0));
        assert!((v - 0.5).abs() < 1e-9);
    }

    #[test]
    fn rgb_hsb_rgb() {
        let rgb = (0.2, 0.6, 0.9);
        let (h, s, v) = rgb_to_hsb(rgb.0, rgb.1, rgb.2);
        assert!(close(hsb_to_rgb(h, s, v), rgb));
    }
}
