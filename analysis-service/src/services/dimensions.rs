//! Dimension parsing over OCR output.
//!
//! OCR text is normalized first (curly quotes, unicode multiplication sign),
//! then measurement tokens are extracted with feet/inch conversion. A
//! `width x length` pair is taken from the first explicit pair expression,
//! falling back to a lone pair of extracted measurements.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// Values above this are treated as OCR noise, not deck measurements.
const MAX_REASONABLE_FT: f64 = 500.0;

static PAIR_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(\d+(?:\.\d+)?)\s*(?:ft\b|')?\s*x\s*(\d+(?:\.\d+)?)\s*(?:ft\b|')?")
        .expect("invalid pair regex")
});

static TOKEN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?ix)
        (\d+(?:\.\d+)?)\s*'\s*(\d+(?:\.\d+)?)\s*"   # feet and inches
      | (\d+(?:\.\d+)?)\s*(?:ft\b|')                # feet
      | (\d+(?:\.\d+)?)\s*(?:in\b|")                # inches
      | (\d+(?:\.\d+)?)                             # bare number
    "#,
    )
    .expect("invalid token regex")
});

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Dimensions {
    pub width_ft: Option<f64>,
    pub length_ft: Option<f64>,
    pub measurements_ft: Vec<f64>,
}

/// Standardize OCR artifacts before matching.
fn normalize(text: &str) -> String {
    text.replace('\u{2019}', "'")
        .replace('\u{2033}', "\"")
        .replace('\u{00d7}', "x")
}

fn reasonable(value: f64) -> bool {
    value > 0.0 && value <= MAX_REASONABLE_FT
}

/// Extract all measurement tokens as feet.
pub fn extract_measurements(text: &str) -> Vec<f64> {
    let normalized = normalize(text);

    TOKEN_RE
        .captures_iter(&normalized)
        .filter_map(|caps| {
            if let (Some(ft), Some(inches)) = (caps.get(1), caps.get(2)) {
                let ft: f64 = ft.as_str().parse().ok()?;
                let inches: f64 = inches.as_str().parse().ok()?;
                Some(ft + inches / 12.0)
            } else if let Some(ft) = caps.get(3) {
                ft.as_str().parse().ok()
            } else if let Some(inches) = caps.get(4) {
                inches.as_str().parse::<f64>().ok().map(|v| v / 12.0)
            } else {
                caps.get(5)?.as_str().parse().ok()
            }
        })
        .filter(|v| reasonable(*v))
        .collect()
}

/// Parse a `width x length` pair plus all standalone measurements.
pub fn parse_dimensions(text: &str) -> Dimensions {
    let normalized = normalize(text);
    let measurements = extract_measurements(text);

    let (width_ft, length_ft) = match PAIR_RE.captures(&normalized) {
        Some(caps) => {
            let width: Option<f64> = caps[1].parse().ok();
            let length: Option<f64> = caps[2].parse().ok();
            (
                width.filter(|v| reasonable(*v)),
                length.filter(|v| reasonable(*v)),
            )
        }
        // No explicit pair: exactly two measurements disambiguate themselves
        None if measurements.len() == 2 => (Some(measurements[0]), Some(measurements[1])),
        None => (None, None),
    };

    Dimensions {
        width_ft,
        length_ft,
        measurements_ft: measurements,
    }
}

/// Area in square feet, rounded to two decimals.
pub fn square_footage(width_ft: f64, length_ft: f64) -> f64 {
    (width_ft * length_ft * 100.0).round() / 100.0
}
