/// A fixed three-color cover palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub bg: &'static str,
    pub fg: &'static str,
    pub accent: &'static str,
}

/// Cover palettes indexed by `floor(draw * PALETTES.len())`.
///
/// The order is part of the reproducibility contract.
pub const PALETTES: [Palette; 6] = [
    Palette {
        bg: "#3498db",
        fg: "#2980b9",
        accent: "#1abc9c",
    },
    Palette {
        bg: "#e74c3c",
        fg: "#c0392b",
        accent: "#d35400",
    },
    Palette {
        bg: "#9b59b6",
        fg: "#8e44ad",
        accent: "#6c3483",
    },
    Palette {
        bg: "#2ecc71",
        fg: "#27ae60",
        accent: "#16a085",
    },
    Palette {
        bg: "#f1c40f",
        fg: "#f39c12",
        accent: "#e67e22",
    },
    Palette {
        bg: "#34495e",
        fg: "#2c3e50",
        accent: "#7f8c8d",
    },
];

/// Number of cover layout variants.
pub const LAYOUT_TYPES: u8 = 3;

const BRIGHTNESS_THRESHOLD: f64 = 125.0;

/// Perceptual brightness of a `#rrggbb` color on the 0-255 scale.
///
/// Malformed input is treated as black.
pub fn brightness(hex: &str) -> f64 {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    let channel = |range: std::ops::Range<usize>| {
        digits
            .get(range)
            .and_then(|value| u8::from_str_radix(value, 16).ok())
            .map(f64::from)
    };
    match (channel(0..2), channel(2..4), channel(4..6)) {
        (Some(r), Some(g), Some(b)) => (r * 299.0 + g * 587.0 + b * 114.0) / 1000.0,
        _ => 0.0,
    }
}

/// Black text on bright backgrounds, white text otherwise.
pub fn contrast_color(background: &str) -> &'static str {
    if brightness(background) > BRIGHTNESS_THRESHOLD {
        "#000000"
    } else {
        "#FFFFFF"
    }
}
