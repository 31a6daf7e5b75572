use super::catalog::{Catalog, Position, Split, MONTHS};
use super::columns::{resolve_column, stats_for, trend_stat, StatKind, StatSpec};
use super::loader::load_table;
use super::model::{Cell, DataTable};
use super::value::parse_number;

// ---------------------------------------------------------------------------
// Aggregated statistics for one (player, split) query
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct StatValue {
    pub label: &'static str,
    pub kind: StatKind,
    /// `None` means the statistic resolved in no sheet of the split,
    /// distinct from a genuine zero.
    pub value: Option<f64>,
}

/// One player's statistics for one split, in declared statistic order.
/// Produced fresh per query, never persisted.
#[derive(Debug, Clone)]
pub struct StatRecord {
    pub player: String,
    pub values: Vec<StatValue>,
}

/// One point of the monthly trend line.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendPoint {
    pub label: &'static str,
    pub value: f64,
}

// ---------------------------------------------------------------------------
// Aggregation
// ---------------------------------------------------------------------------

/// Aggregate a player's statistics for one split.
///
/// The split's sheets are consulted in declared priority order; a later
/// sheet serves as fallback for any statistic an earlier one lacks (missing
/// column, unparseable value, or missing player row). Returns `None` when
/// the player appears in no sheet of the split, which callers must keep
/// distinct from a record of zeros.
pub fn aggregate(
    player: &str,
    position: Position,
    split: Split,
    catalog: &Catalog,
) -> Option<StatRecord> {
    let name = player.trim();
    let tables = load_split_tables(position, split, catalog);

    let rows: Vec<(&DataTable, &[Cell])> = tables
        .iter()
        .filter_map(|table| table.find_row(name).map(|row| (table, row)))
        .collect();
    if rows.is_empty() {
        return None;
    }

    let values = stats_for(position)
        .iter()
        .map(|spec| StatValue {
            label: spec.label,
            kind: spec.kind,
            value: resolve_stat(spec, &rows),
        })
        .collect();

    Some(StatRecord {
        player: name.to_string(),
        values,
    })
}

/// Load every resolved sheet of the split, keeping priority order. Load
/// failures degrade to "sheet absent" with a warning, as in the index build.
fn load_split_tables(position: Position, split: Split, catalog: &Catalog) -> Vec<DataTable> {
    catalog
        .split_datasets(position, split)
        .into_iter()
        .filter_map(|ds| {
            let path = ds.resolved.as_ref()?;
            match load_table(path) {
                Ok(table) => Some(table),
                Err(err) => {
                    log::warn!("skipping {}: {err}", path.display());
                    None
                }
            }
        })
        .collect()
}

/// First sheet (in priority order) that both has the column and yields a
/// parseable value for this row.
fn lookup(rows: &[(&DataTable, &[Cell])], candidates: &[&str]) -> Option<f64> {
    for (table, row) in rows {
        if let Some(col) = resolve_column(&table.headers, candidates) {
            if let Some(value) = row.get(col).and_then(parse_number) {
                return Some(value);
            }
        }
    }
    None
}

/// Resolve one statistic, applying the declared combination: components are
/// summed onto the base value and default to zero when absent, so the sum is
/// defined whenever the base itself resolves. Missing components are logged
/// so partial data stays visible instead of silently reading as zero.
fn resolve_stat(spec: &StatSpec, rows: &[(&DataTable, &[Cell])]) -> Option<f64> {
    let mut total = lookup(rows, spec.candidates)?;
    for component in spec.components {
        match lookup(rows, component) {
            Some(value) => total += value,
            None => log::warn!(
                "{}: component {:?} not found, treated as zero",
                spec.label,
                component
            ),
        }
    }
    Some(total)
}

// ---------------------------------------------------------------------------
// Monthly trend
// ---------------------------------------------------------------------------

/// The player's headline rate stat across the fixed month list, in
/// chronological order. Months whose sheet is unresolved, unloadable, or
/// lacks the player are skipped, never zero-filled.
pub fn monthly_trend(player: &str, position: Position, catalog: &Catalog) -> Vec<TrendPoint> {
    let name = player.trim();
    let spec = trend_stat(position);

    MONTHS
        .iter()
        .filter_map(|month| {
            let path = catalog
                .dataset_for_part(position, month.part)?
                .resolved
                .as_ref()?;
            let table = match load_table(path) {
                Ok(table) => table,
                Err(err) => {
                    log::warn!("skipping {}: {err}", path.display());
                    return None;
                }
            };
            let row = table.find_row(name)?;
            let col = resolve_column(&table.headers, spec.candidates)?;
            let value = row.get(col).and_then(parse_number)?;
            Some(TrendPoint {
                label: month.ui,
                value,
            })
        })
        .collect()
}

impl StatRecord {
    pub fn get(&self, label: &str) -> Option<&StatValue> {
        self.values.iter().find(|v| v.label == label)
    }
}
