use std::collections::HashMap;
use std::path::PathBuf;

use crate::data::aggregate::{aggregate, monthly_trend, TrendPoint};
use crate::data::catalog::{Catalog, Detail, Position, Split};
use crate::data::index::{build_index, search, NameIndex};
use crate::data::present::{counting_series, rate_series, table_row, ChartPoint};

// ---------------------------------------------------------------------------
// Session context – catalog plus the one caching boundary
// ---------------------------------------------------------------------------

/// Owns the resolved catalog and the memoized name indexes. The cache is
/// keyed by the exact resolved path sequence, written once per key, and
/// invalidated only by restart.
pub struct SessionContext {
    pub catalog: Catalog,
    index_cache: HashMap<Vec<PathBuf>, NameIndex>,
}

impl SessionContext {
    pub fn new(catalog: Catalog) -> Self {
        SessionContext {
            catalog,
            index_cache: HashMap::new(),
        }
    }

    /// The player directory for a position, built on first use.
    pub fn name_index(&mut self, position: Position) -> &NameIndex {
        let paths = self.catalog.resolved_paths(position);
        self.index_cache
            .entry(paths)
            .or_insert_with_key(|key| build_index(key))
    }
}

// ---------------------------------------------------------------------------
// Per-player view, rebuilt on every interaction
// ---------------------------------------------------------------------------

/// Everything the central panel renders for the current selection.
/// `found == false` marks "no data located", which must stay visually
/// distinct from all-zero statistics.
#[derive(Debug, Clone)]
pub struct PlayerView {
    pub player: String,
    pub found: bool,
    pub counting: Vec<ChartPoint>,
    pub rate: Vec<ChartPoint>,
    pub table: Vec<(&'static str, String)>,
    pub trend: Vec<TrendPoint>,
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    pub session: SessionContext,

    /// Set when not a single stat sheet resolved; the app renders a
    /// remediation screen and no controls.
    pub fatal: Option<String>,

    pub position: Position,
    pub detail: Detail,
    /// Index into [`crate::data::catalog::MONTHS`], used when `detail` is `ByMonth`.
    pub month_idx: usize,
    /// Index into [`crate::data::catalog::INNINGS`], used when `detail` is `ByInning`.
    pub inning_idx: usize,

    pub query: String,
    pub matched: Vec<String>,
    pub selected: Option<String>,

    /// Rebuilt by [`AppState::refresh`] whenever a control changes.
    pub view: Option<PlayerView>,
}

impl AppState {
    pub fn new() -> Self {
        Self::with_catalog(Catalog::resolve(Catalog::default_search_dirs()))
    }

    pub fn with_catalog(catalog: Catalog) -> Self {
        log::info!(
            "resolved {} pitcher and {} hitter sheets",
            catalog.resolved_paths(Position::Pitcher).len(),
            catalog.resolved_paths(Position::Hitter).len()
        );

        let fatal = catalog.is_empty().then(|| {
            let searched: Vec<String> = catalog
                .search_dirs
                .iter()
                .map(|d| d.display().to_string())
                .collect();
            format!(
                "스탯 시트를 하나도 찾을 수 없습니다.\n\n검색한 위치:\n{}\n\n\
                 2025 시즌 시트(.xlsx/.csv)를 위 폴더에 넣거나,\n\
                 `cargo run --bin generate_sample`로 샘플 데이터를 생성한 뒤 다시 실행하세요.",
                searched.join("\n")
            )
        });

        AppState {
            session: SessionContext::new(catalog),
            fatal,
            position: Position::Pitcher,
            detail: Detail::None,
            month_idx: 0,
            inning_idx: 0,
            query: String::new(),
            matched: Vec::new(),
            selected: None,
            view: None,
        }
    }

    /// The split implied by the current detail selection.
    pub fn split(&self) -> Split {
        match self.detail {
            Detail::None => Split::Overall,
            Detail::RunnersOn => Split::RunnersOn,
            Detail::RunnersOff => Split::RunnersOff,
            Detail::ByInning => Split::Inning(self.inning_idx),
            Detail::ByMonth => Split::Month(self.month_idx),
        }
    }

    /// Recompute search matches, selection, and the rendered view. Called
    /// once per control change; a superseded view is simply replaced.
    pub fn refresh(&mut self) {
        if self.fatal.is_some() {
            return;
        }

        let index = self.session.name_index(self.position);
        self.matched = search(&index.names, &self.query);

        // Keep the current pick while it still matches; otherwise fall back
        // to the first match, as the original's result picker did.
        self.selected = match self.selected.take() {
            Some(sel) if self.matched.contains(&sel) => Some(sel),
            _ => self.matched.first().cloned(),
        };

        self.view = self
            .selected
            .clone()
            .map(|player| self.build_view(&player));
    }

    fn build_view(&self, player: &str) -> PlayerView {
        let catalog = &self.session.catalog;
        let trend = if self.detail == Detail::None {
            monthly_trend(player, self.position, catalog)
        } else {
            Vec::new()
        };

        match aggregate(player, self.position, self.split(), catalog) {
            Some(record) => PlayerView {
                player: record.player.clone(),
                found: true,
                counting: counting_series(&record),
                rate: rate_series(&record),
                table: table_row(&record),
                trend,
            },
            None => PlayerView {
                player: player.to_string(),
                found: false,
                counting: Vec::new(),
                rate: Vec::new(),
                table: Vec::new(),
                trend,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn seeded_state() -> AppState {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("2025_타자_최종성적1.csv"),
            "선수명,경기,타율\n구자욱,120,0.305\n구창모,88,0.271\n",
        )
        .unwrap();
        let catalog = Catalog::resolve(vec![dir.path().to_path_buf()]);
        let mut state = AppState::with_catalog(catalog);
        state.position = Position::Hitter;
        // keep the fixture directory alive for the lifetime of the test state
        std::mem::forget(dir);
        state
    }

    #[test]
    fn empty_catalog_is_fatal() {
        let catalog = Catalog::resolve(vec![PathBuf::from("/nonexistent")]);
        let state = AppState::with_catalog(catalog);
        assert!(state.fatal.is_some());
    }

    #[test]
    fn refresh_matches_and_selects_first() {
        let mut state = seeded_state();
        state.query = "구".into();
        state.refresh();
        assert_eq!(state.matched, vec!["구자욱", "구창모"]);
        assert_eq!(state.selected.as_deref(), Some("구자욱"));
        assert!(state.view.as_ref().is_some_and(|v| v.found));
    }

    #[test]
    fn narrowing_the_query_keeps_a_still_matching_pick() {
        let mut state = seeded_state();
        state.query = "구".into();
        state.refresh();
        state.selected = Some("구창모".into());
        state.query = "구창".into();
        state.refresh();
        assert_eq!(state.selected.as_deref(), Some("구창모"));
    }

    #[test]
    fn empty_query_clears_selection_and_view() {
        let mut state = seeded_state();
        state.query = "구".into();
        state.refresh();
        state.query.clear();
        state.refresh();
        assert!(state.matched.is_empty());
        assert!(state.selected.is_none());
        assert!(state.view.is_none());
    }
}
