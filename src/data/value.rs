use super::model::Cell;

// ---------------------------------------------------------------------------
// Value normalization: raw cell → Option<f64>
// ---------------------------------------------------------------------------

/// Placeholder strings the stat sheets use for "no value".
const SENTINELS: [&str; 4] = ["-", "—", "NaN", "nan"];

/// Normalize a cell to a finite number.
///
/// Total over all inputs: blanks and sentinels are `None`, thousands commas
/// are stripped, a trailing `%` scales by 1/100, and anything left that is
/// not numeric is `None`. Never panics, never returns a non-finite value.
pub fn parse_number(cell: &Cell) -> Option<f64> {
    match cell {
        Cell::Number(n) if n.is_finite() => Some(*n),
        Cell::Number(_) => None,
        Cell::Empty => None,
        Cell::Text(s) => parse_numeric_str(s),
    }
}

/// String half of [`parse_number`], usable on raw csv fields.
pub fn parse_numeric_str(raw: &str) -> Option<f64> {
    let s = raw.trim();
    if s.is_empty() || SENTINELS.contains(&s) {
        return None;
    }

    let s = s.replace(',', "");
    let (digits, percent) = match s.strip_suffix('%') {
        Some(rest) => (rest.trim(), true),
        None => (s.as_str(), false),
    };

    let value: f64 = digits.parse().ok()?;
    // "inf" parses in Rust; keep the contract of finite-or-absent.
    if !value.is_finite() {
        return None;
    }
    Some(if percent { value / 100.0 } else { value })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_numbers() {
        assert_eq!(parse_numeric_str("0.305"), Some(0.305));
        assert_eq!(parse_numeric_str(" 45 "), Some(45.0));
        assert_eq!(parse_numeric_str("-3"), Some(-3.0));
    }

    #[test]
    fn thousands_separator_is_stripped() {
        assert_eq!(parse_numeric_str("1,234"), Some(1234.0));
        assert_eq!(parse_numeric_str("12,345.6"), Some(12345.6));
    }

    #[test]
    fn percent_scales_by_one_hundred() {
        assert_eq!(parse_numeric_str("85%"), Some(0.85));
        assert_eq!(parse_numeric_str("12.5 %"), Some(0.125));
        assert_eq!(parse_numeric_str("1,050%"), Some(10.5));
    }

    #[test]
    fn sentinels_and_blanks_are_absent() {
        for raw in ["", "   ", "-", "—", "NaN", "nan"] {
            assert_eq!(parse_numeric_str(raw), None, "raw = {raw:?}");
        }
    }

    #[test]
    fn garbage_is_absent_not_an_error() {
        assert_eq!(parse_numeric_str("타율"), None);
        assert_eq!(parse_numeric_str("3승 2패"), None);
        assert_eq!(parse_numeric_str("inf"), None);
    }

    #[test]
    fn cells_pass_through() {
        assert_eq!(parse_number(&Cell::Number(0.305)), Some(0.305));
        assert_eq!(parse_number(&Cell::Number(f64::NAN)), None);
        assert_eq!(parse_number(&Cell::Empty), None);
        assert_eq!(parse_number(&Cell::Text("85%".into())), Some(0.85));
    }

    #[test]
    fn idempotent_on_plain_numeric_input() {
        for raw in ["0.305", "45", "-3.5"] {
            let once = parse_numeric_str(raw).unwrap();
            let twice = parse_numeric_str(&once.to_string()).unwrap();
            assert_eq!(once, twice);
        }
    }
}
