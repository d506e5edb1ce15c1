//! Horsepower parsing and extraction from free-text product names
//!
//! Catalog descriptions are authored by humans, so the HP notation varies:
//! integers ("10 HP"), decimals ("7.5 HP"), simple fractions ("1/4 HP"), and
//! mixed numbers ("7 1/2 HP"). [`parse_hp`] handles an already-isolated
//! token; [`extract_hp`] locates the token inside a full description. The
//! supported shapes are pinned by the tests below - if catalog conventions
//! change, this module is the only place to update.

use thiserror::Error;

/// A horsepower token that does not match any supported shape.
#[derive(Debug, Error, PartialEq)]
pub enum HpParseError {
    #[error("unrecognized horsepower token: {0:?}")]
    Malformed(String),

    #[error("zero denominator in horsepower fraction: {0:?}")]
    ZeroDenominator(String),
}

/// Parse an isolated horsepower token into a numeric value.
///
/// The token is lowercased and stripped of "hp"/"motor" markers and
/// whitespace, then matched against: mixed number ("7 1/2"), simple fraction
/// ("1/4"), plain integer or decimal. Callers must treat failure as "no HP
/// information", never as fatal.
pub fn parse_hp(text: &str) -> Result<f64, HpParseError> {
    let stripped = text.to_lowercase().replace("hp", "").replace("motor", "");
    let parts: Vec<&str> = stripped.split_whitespace().collect();

    match parts.as_slice() {
        [token] => {
            if token.contains('/') {
                parse_fraction(token, text)
            } else {
                token
                    .parse()
                    .map_err(|_| HpParseError::Malformed(text.to_string()))
            }
        }
        [whole, fraction] => {
            let whole: f64 = whole
                .parse()
                .map_err(|_| HpParseError::Malformed(text.to_string()))?;
            Ok(whole + parse_fraction(fraction, text)?)
        }
        _ => Err(HpParseError::Malformed(text.to_string())),
    }
}

fn parse_fraction(token: &str, original: &str) -> Result<f64, HpParseError> {
    let (numerator, denominator) = token
        .split_once('/')
        .ok_or_else(|| HpParseError::Malformed(original.to_string()))?;
    let numerator: f64 = numerator
        .parse()
        .map_err(|_| HpParseError::Malformed(original.to_string()))?;
    let denominator: f64 = denominator
        .parse()
        .map_err(|_| HpParseError::Malformed(original.to_string()))?;

    if denominator == 0.0 {
        return Err(HpParseError::ZeroDenominator(original.to_string()));
    }
    Ok(numerator / denominator)
}

/// Extract the horsepower value from a full product description.
///
/// Scans for the first number-like token (mixed number, fraction, decimal,
/// or integer) immediately followed by the "HP" marker, case-insensitive,
/// with optional whitespace in between. Returns 0.0 when no token matches or
/// the matched token fails to parse - real catalog HPs are always > 0, so
/// 0.0 is a safe sentinel that never collides with a valid lookup key.
pub fn extract_hp(product: &str) -> f64 {
    let bytes = product.as_bytes();

    for start in 0..bytes.len() {
        if !bytes[start].is_ascii_digit() {
            continue;
        }
        // Candidate shapes at this position, most specific first
        let candidates = [
            mixed_number_end(bytes, start),
            fraction_end(bytes, start),
            decimal_end(bytes, start),
            Some(digits_end(bytes, start)),
        ];
        for end in candidates.into_iter().flatten() {
            if unit_marker_follows(bytes, end) {
                return parse_hp(&product[start..end]).unwrap_or(0.0);
            }
        }
    }
    0.0
}

/// Render an HP value the way catalog text does: no trailing zeros.
pub fn format_hp(hp: f64) -> String {
    if hp.fract() == 0.0 {
        format!("{}", hp as i64)
    } else {
        format!("{}", hp)
    }
}

fn digits_end(bytes: &[u8], start: usize) -> usize {
    let mut i = start;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    i
}

fn fraction_end(bytes: &[u8], start: usize) -> Option<usize> {
    let slash = digits_end(bytes, start);
    if slash < bytes.len() && bytes[slash] == b'/' {
        let denominator = slash + 1;
        if denominator < bytes.len() && bytes[denominator].is_ascii_digit() {
            return Some(digits_end(bytes, denominator));
        }
    }
    None
}

fn decimal_end(bytes: &[u8], start: usize) -> Option<usize> {
    let dot = digits_end(bytes, start);
    if dot < bytes.len() && bytes[dot] == b'.' {
        let fractional = dot + 1;
        if fractional < bytes.len() && bytes[fractional].is_ascii_digit() {
            return Some(digits_end(bytes, fractional));
        }
    }
    None
}

fn mixed_number_end(bytes: &[u8], start: usize) -> Option<usize> {
    let whole_end = digits_end(bytes, start);
    let mut i = whole_end;
    while i < bytes.len() && bytes[i].is_ascii_whitespace() {
        i += 1;
    }
    if i == whole_end || i >= bytes.len() || !bytes[i].is_ascii_digit() {
        return None;
    }
    fraction_end(bytes, i)
}

fn unit_marker_follows(bytes: &[u8], from: usize) -> bool {
    let mut i = from;
    while i < bytes.len() && bytes[i].is_ascii_whitespace() {
        i += 1;
    }
    i + 1 < bytes.len() && bytes[i].eq_ignore_ascii_case(&b'h') && bytes[i + 1].eq_ignore_ascii_case(&b'p')
}
