//! Numeric formatting helpers for the PHITS wire format.
//!
//! PHITS decks are whitespace-separated text. Geometry fields print
//! integral values as `1.0`, while element quantities keep their integer
//! look (`H 2 O 1`).

/// Format a geometry field value. Integral values keep a `.0` suffix
/// (`0.0`, `1.0`), fractional values print their shortest representation.
pub fn num(x: f64) -> String {
    if x.is_finite() && x == x.trunc() && x.abs() < 1e15 {
        format!("{:.1}", x)
    } else {
        format!("{}", x)
    }
}

/// Format an element quantity. Integral values print without a decimal
/// point (`2`, not `2.0`); fractional values print shortest.
pub fn quantity(x: f64) -> String {
    if x.is_finite() && x == x.trunc() && x.abs() < 1e15 {
        format!("{}", x as i64)
    } else {
        format!("{}", x)
    }
}

/// Format a coordinate for an on-screen label: three decimals, trailing
/// zeros (and a bare decimal point) trimmed.
pub fn notation(x: f64) -> String {
    let s = format!("{:.3}", x);
    let trimmed = s.trim_end_matches('0').trim_end_matches('.');
    if trimmed.is_empty() || trimmed == "-" || trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn num_keeps_decimal_on_integers() {
        assert_eq!(num(0.0), "0.0");
        assert_eq!(num(1.0), "1.0");
        assert_eq!(num(-3.0), "-3.0");
        assert_eq!(num(2.5), "2.5");
    }

    #[test]
    fn quantity_drops_decimal_on_integers() {
        assert_eq!(quantity(2.0), "2");
        assert_eq!(quantity(1.0), "1");
        assert_eq!(quantity(0.755268), "0.755268");
    }

    #[test]
    fn notation_trims_trailing_zeros() {
        assert_eq!(notation(1.0), "1");
        assert_eq!(notation(1.25), "1.25");
        assert_eq!(notation(0.0), "0");
        assert_eq!(notation(-0.0004), "0");
    }
}
