use std::fmt;
use std::str::FromStr;

use crate::motion::error::MappingError;

/// A value that can be blended linearly between two samples.
pub trait Lerp: Clone + fmt::Display {
    /// Blend towards `to`; `t` is the fraction in [0, 1].
    fn lerp(&self, to: &Self, t: f64) -> Self;

    /// Whether `other` can be blended with `self`. Numbers and colours always can,
    /// templated strings only when their non-numeric text lines up.
    fn same_shape(&self, _other: &Self) -> bool {
        true
    }
}

impl Lerp for f64 {
    fn lerp(&self, to: &Self, t: f64) -> Self {
        self + (to - self) * t
    }
}

/// Formats a number the way it should appear inside a style attribute:
/// at most four decimals, no trailing zeros, never `-0`.
pub fn format_number(value: f64) -> String {
    let rounded = (value * 10_000.0).round() / 10_000.0;
    if rounded == 0.0 {
        return "0".to_string();
    }
    let text = format!("{:.4}", rounded);
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorFormat {
    Hex,
    Rgb,
    Rgba,
}

/// An RGBA colour. Channels are 0-255, alpha is 0-1. The format it was parsed
/// from is kept so that interpolated colours serialise the same way.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
    pub format: ColorFormat,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::hex(255.0, 255.0, 255.0);
    pub const BLACK: Rgba = Rgba::hex(0.0, 0.0, 0.0);

    pub const fn hex(r: f64, g: f64, b: f64) -> Self {
        Self {
            r,
            g,
            b,
            a: 1.0,
            format: ColorFormat::Hex,
        }
    }


    fn parse_hex(digits: &str) -> Option<Self> {
        let expanded: String = match digits.len() {
            3 | 4 => digits.chars().flat_map(|c| [c, c]).collect(),
            6 | 8 => digits.to_string(),
            _ => return None,
        };
        let channel = |i: usize| {
            expanded
                .get(i..i + 2)
                .and_then(|pair| u8::from_str_radix(pair, 16).ok())
                .map(f64::from)
        };
        let alpha = if expanded.len() == 8 {
            channel(6)? / 255.0
        } else {
            1.0
        };
        Some(Self {
            r: channel(0)?,
            g: channel(2)?,
            b: channel(4)?,
            a: alpha,
            format: ColorFormat::Hex,
        })
    }

    fn parse_functional(args: &str, format: ColorFormat) -> Option<Self> {
        let parts: Vec<f64> = args
            .split(',')
            .map(|p| p.trim().parse::<f64>())
            .collect::<Result<_, _>>()
            .ok()?;
        let (r, g, b, a) = match (format, parts.as_slice()) {
            (ColorFormat::Rgb, [r, g, b]) => (*r, *g, *b, 1.0),
            (ColorFormat::Rgba, [r, g, b, a]) => (*r, *g, *b, *a),
            _ => return None,
        };
        Some(Self { r, g, b, a, format })
    }
}

impl FromStr for Rgba {
    type Err = MappingError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let text = raw.trim();
        let parsed = if let Some(digits) = text.strip_prefix('#') {
            Self::parse_hex(digits)
        } else if let Some(args) = text.strip_prefix("rgba(").and_then(|s| s.strip_suffix(')')) {
            Self::parse_functional(args, ColorFormat::Rgba)
        } else if let Some(args) = text.strip_prefix("rgb(").and_then(|s| s.strip_suffix(')')) {
            Self::parse_functional(args, ColorFormat::Rgb)
        } else {
            None
        };
        parsed.ok_or_else(|| MappingError::InvalidColor(raw.to_string()))
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let byte = |v: f64| v.round().clamp(0.0, 255.0) as u8;
        let alpha = self.a.clamp(0.0, 1.0);
        match self.format {
            ColorFormat::Hex if alpha >= 1.0 => {
                write!(f, "#{:02x}{:02x}{:02x}", byte(self.r), byte(self.g), byte(self.b))
            }
            ColorFormat::Hex => write!(
                f,
                "#{:02x}{:02x}{:02x}{:02x}",
                byte(self.r),
                byte(self.g),
                byte(self.b),
                byte(alpha * 255.0)
            ),
            ColorFormat::Rgb if alpha >= 1.0 => {
                write!(f, "rgb({}, {}, {})", byte(self.r), byte(self.g), byte(self.b))
            }
            ColorFormat::Rgb | ColorFormat::Rgba => write!(
                f,
                "rgba({}, {}, {}, {})",
                byte(self.r),
                byte(self.g),
                byte(self.b),
                format_number(alpha)
            ),
        }
    }
}

impl Lerp for Rgba {
    fn lerp(&self, to: &Self, t: f64) -> Self {
        Self {
            r: self.r.lerp(&to.r, t),
            g: self.g.lerp(&to.g, t),
            b: self.b.lerp(&to.b, t),
            a: self.a.lerp(&to.a, t),
            format: self.format,
        }
    }
}

/// A style string with its numeric components pulled out, e.g. `blur(4px)` is
/// `["blur(", "px)"]` around `[4.0]`. Only the numbers are interpolated; the text
/// between them is kept verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleValue {
    segments: Vec<String>,
    numbers: Vec<f64>,
}

impl StyleValue {
    #[cfg(test)]
    pub fn numbers(&self) -> &[f64] {
        &self.numbers
    }
}

/// End index of a number starting at `start`, if one starts there. Digits glued to
/// an identifier (`translate3d`, `#0a0`) are not numbers.
fn number_end(bytes: &[u8], start: usize) -> Option<usize> {
    if start > 0 {
        let prev = bytes[start - 1];
        if prev.is_ascii_alphanumeric() || matches!(prev, b'_' | b'.' | b'#' | b'-' | b'+') {
            return None;
        }
    }

    let mut i = start;
    if matches!(bytes[i], b'-' | b'+') {
        i += 1;
    }
    let int_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let mut seen_digit = i > int_start;

    if i < bytes.len() && bytes[i] == b'.' {
        let mut j = i + 1;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > i + 1 {
            seen_digit = true;
            i = j;
        }
    }

    seen_digit.then_some(i)
}

impl From<&str> for StyleValue {
    fn from(raw: &str) -> Self {
        let bytes = raw.as_bytes();
        let mut segments = Vec::new();
        let mut numbers = Vec::new();
        let mut segment_start = 0;
        let mut i = 0;

        while i < bytes.len() {
            if let Some(end) = number_end(bytes, i) {
                if let Ok(value) = raw[i..end].parse::<f64>() {
                    segments.push(raw[segment_start..i].to_string());
                    numbers.push(value);
                    segment_start = end;
                    i = end;
                    continue;
                }
            }
            i += 1;
        }
        segments.push(raw[segment_start..].to_string());

        Self { segments, numbers }
    }
}

impl fmt::Display for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            f.write_str(segment)?;
            if let Some(number) = self.numbers.get(i) {
                f.write_str(&format_number(*number))?;
            }
        }
        Ok(())
    }
}

impl Lerp for StyleValue {
    fn lerp(&self, to: &Self, t: f64) -> Self {
        Self {
            segments: self.segments.clone(),
            numbers: self
                .numbers
                .iter()
                .zip(&to.numbers)
                .map(|(a, b)| a.lerp(b, t))
                .collect(),
        }
    }

    fn same_shape(&self, other: &Self) -> bool {
        self.numbers.len() == other.numbers.len() && self.segments == other.segments
    }
}
