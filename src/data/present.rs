use super::aggregate::{StatRecord, StatValue};
use super::catalog::Position;
use super::columns::StatKind;

// ---------------------------------------------------------------------------
// Chart-ready and table-ready shapes
// ---------------------------------------------------------------------------

/// One labeled bar/point, in declared statistic order.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    pub label: &'static str,
    pub value: f64,
}

/// Counting statistics as bar-chart input. Absent values render as zero;
/// distinguishing "not found" from zero is the caller's job, upstream.
pub fn counting_series(record: &StatRecord) -> Vec<ChartPoint> {
    series_of_kind(record, StatKind::Counting)
}

/// Rate statistics as bar-chart input, same conventions.
pub fn rate_series(record: &StatRecord) -> Vec<ChartPoint> {
    series_of_kind(record, StatKind::Rate)
}

fn series_of_kind(record: &StatRecord, kind: StatKind) -> Vec<ChartPoint> {
    record
        .values
        .iter()
        .filter(|v| v.kind == kind)
        .map(|v| ChartPoint {
            label: v.label,
            value: v.value.unwrap_or(0.0),
        })
        .collect()
}

/// The single flattened table row: counting statistics as integers, rates to
/// three decimals, `0` / `0.000` for absent values.
pub fn table_row(record: &StatRecord) -> Vec<(&'static str, String)> {
    record
        .values
        .iter()
        .map(|v| (v.label, format_value(v)))
        .collect()
}

fn format_value(value: &StatValue) -> String {
    let v = value.value.unwrap_or(0.0);
    match value.kind {
        StatKind::Counting => format!("{}", v.round() as i64),
        StatKind::Rate => format!("{v:.3}"),
    }
}

/// Fixed upper bound of the rate bar chart. Hitter rates top out around an
/// OPS of 2; pitcher rates are dominated by the ERA scale.
pub fn rate_display_bound(position: Position) -> f64 {
    match position {
        Position::Hitter => 2.0,
        Position::Pitcher => 10.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::aggregate::StatValue;

    fn record() -> StatRecord {
        StatRecord {
            player: "구자욱".into(),
            values: vec![
                StatValue {
                    label: "안타",
                    kind: StatKind::Counting,
                    value: Some(152.0),
                },
                StatValue {
                    label: "볼넷",
                    kind: StatKind::Counting,
                    value: None,
                },
                StatValue {
                    label: "타율",
                    kind: StatKind::Rate,
                    value: Some(0.305),
                },
                StatValue {
                    label: "출루율",
                    kind: StatKind::Rate,
                    value: None,
                },
            ],
        }
    }

    #[test]
    fn series_split_by_kind_in_declared_order() {
        let r = record();
        let counting = counting_series(&r);
        assert_eq!(counting.len(), 2);
        assert_eq!(counting[0].label, "안타");
        assert_eq!(counting[1].value, 0.0);
        let rate = rate_series(&r);
        assert_eq!(rate[0].value, 0.305);
        assert_eq!(rate[1].value, 0.0);
    }

    #[test]
    fn table_row_formats_by_kind() {
        let row = table_row(&record());
        assert_eq!(row[0], ("안타", "152".to_string()));
        assert_eq!(row[1], ("볼넷", "0".to_string()));
        assert_eq!(row[2], ("타율", "0.305".to_string()));
        assert_eq!(row[3], ("출루율", "0.000".to_string()));
    }
}
