const SATURATION: f64 = 0.7;
const LIGHTNESS: f64 = 0.5;

/// stroke color for the `index`-th (1-based) of `total` trips.
///
/// Hues are spread evenly around the color wheel in whole degrees, saturation
/// and lightness are fixed.
pub fn color_for(index: usize, total: usize) -> String {
    let hue = if total == 0 {
        0
    } else {
        (index * 360 / total) % 360
    };
    let (r, g, b) = hsl_to_rgb(hue as f64 / 360.0, SATURATION, LIGHTNESS);
    format!("#{:02x}{:02x}{:02x}", r, g, b)
}

/// all components in [0, 1]
pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> (u8, u8, u8) {
    if s == 0.0 {
        let v = channel(l);
        return (v, v, v);
    }
    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;
    (
        channel(hue_to_rgb(p, q, h + 1.0 / 3.0)),
        channel(hue_to_rgb(p, q, h)),
        channel(hue_to_rgb(p, q, h - 1.0 / 3.0)),
    )
}

fn hue_to_rgb(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

fn channel(v: f64) -> u8 {
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}
