//! Color science — sRGB luminance and WCAG contrast ratios
//!
//! Pure functions, no dependencies. These are the only floating-point
//! sensitive computations in the compiler; everything is plain IEEE-754
//! `f64` so results are reproducible across runs and platforms.
//!
//! Invalid colors are sentinels, not errors: `parse_hex` returns `None`
//! and `relative_luminance` maps an unparseable color to `0.0` so the
//! contrast math never has to handle a failure branch. The validator is
//! responsible for reporting bad hex values separately.

/// An sRGB color with 8-bit channels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Parse a 3- or 6-digit hex color, with or without a leading `#`.
///
/// Shorthand digits are doubled (`#fa0` → `#ffaa00`). Any other length or
/// non-hex content returns `None`.
pub fn parse_hex(input: &str) -> Option<Rgb> {
    let digits = input.strip_prefix('#').unwrap_or(input);
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let bytes = digits.as_bytes();
    match bytes.len() {
        3 => Some(Rgb {
            r: hex_pair(bytes[0], bytes[0]),
            g: hex_pair(bytes[1], bytes[1]),
            b: hex_pair(bytes[2], bytes[2]),
        }),
        6 => Some(Rgb {
            r: hex_pair(bytes[0], bytes[1]),
            g: hex_pair(bytes[2], bytes[3]),
            b: hex_pair(bytes[4], bytes[5]),
        }),
        _ => None,
    }
}

/// Check hex color syntax: `^#?([0-9A-Fa-f]{3}|[0-9A-Fa-f]{6})$`.
///
/// No alpha channel, no named colors, no `rgb()` notation.
pub fn is_valid_hex(input: &str) -> bool {
    let digits = input.strip_prefix('#').unwrap_or(input);
    (digits.len() == 3 || digits.len() == 6) && digits.chars().all(|c| c.is_ascii_hexdigit())
}

/// Relative luminance of a hex color per WCAG 2.x.
///
/// Each channel is normalized to [0, 1], run through the sRGB piecewise
/// gamma curve, then combined with the ITU-R BT.709 coefficients.
/// Invalid colors yield `0.0` rather than propagating a failure.
pub fn relative_luminance(hex: &str) -> f64 {
    let Some(rgb) = parse_hex(hex) else {
        return 0.0;
    };
    let r = gamma_expand(rgb.r as f64 / 255.0);
    let g = gamma_expand(rgb.g as f64 / 255.0);
    let b = gamma_expand(rgb.b as f64 / 255.0);
    0.2126 * r + 0.7152 * g + 0.0722 * b
}

/// WCAG contrast ratio between two hex colors, in [1, 21].
///
/// Symmetric in its arguments by construction.
pub fn contrast_ratio(hex_a: &str, hex_b: &str) -> f64 {
    let la = relative_luminance(hex_a);
    let lb = relative_luminance(hex_b);
    let lighter = la.max(lb);
    let darker = la.min(lb);
    (lighter + 0.05) / (darker + 0.05)
}

// ── Helpers ───────────────────────────────────────────────

fn gamma_expand(c: f64) -> f64 {
    if c <= 0.03928 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

fn hex_pair(hi: u8, lo: u8) -> u8 {
    hex_digit(hi) * 16 + hex_digit(lo)
}

fn hex_digit(b: u8) -> u8 {
    match b {
        b'0'..=b'9' => b - b'0',
        b'a'..=b'f' => b - b'a' + 10,
        b'A'..=b'F' => b - b'A' + 10,
        _ => unreachable!("caller checked is_ascii_hexdigit"),
    }
}
