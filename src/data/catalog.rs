use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Positions, splits, slice labels
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Position {
    Pitcher,
    Hitter,
}

impl Position {
    pub const ALL: [Position; 2] = [Position::Pitcher, Position::Hitter];

    /// Korean label, also the component used in sheet file names.
    pub fn korean(self) -> &'static str {
        match self {
            Position::Pitcher => "투수",
            Position::Hitter => "타자",
        }
    }
}

/// The five mutually exclusive detail choices offered in the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Detail {
    None,
    RunnersOn,
    RunnersOff,
    ByInning,
    ByMonth,
}

impl Detail {
    pub const ALL: [Detail; 5] = [
        Detail::None,
        Detail::RunnersOn,
        Detail::RunnersOff,
        Detail::ByInning,
        Detail::ByMonth,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Detail::None => "세부사항 없음",
            Detail::RunnersOn => "주자 있음",
            Detail::RunnersOff => "주자 없음",
            Detail::ByInning => "이닝별",
            Detail::ByMonth => "월별",
        }
    }
}

/// A sub-selection label paired with the sheet file-name component backing it.
#[derive(Debug, Clone, Copy)]
pub struct SliceLabel {
    pub ui: &'static str,
    pub part: &'static str,
}

/// Month slices in chronological order. The trailing slice keeps the
/// original's shortened UI label.
pub const MONTHS: [SliceLabel; 6] = [
    SliceLabel { ui: "3~4월", part: "3~4월" },
    SliceLabel { ui: "5월", part: "5월" },
    SliceLabel { ui: "6월", part: "6월" },
    SliceLabel { ui: "7월", part: "7월" },
    SliceLabel { ui: "8월", part: "8월" },
    SliceLabel { ui: "9이후", part: "9월이후" },
];

/// Inning-range slices, early to late.
pub const INNINGS: [SliceLabel; 3] = [
    SliceLabel { ui: "1~3이닝", part: "1~3회" },
    SliceLabel { ui: "4~6이닝", part: "4~6회" },
    SliceLabel { ui: "7이후", part: "7회이후" },
];

/// A fully resolved situational slice: which sheets the aggregator consults,
/// in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Split {
    Overall,
    RunnersOn,
    RunnersOff,
    /// Index into [`INNINGS`].
    Inning(usize),
    /// Index into [`MONTHS`].
    Month(usize),
}

// ---------------------------------------------------------------------------
// Dataset declarations
// ---------------------------------------------------------------------------

const SEASON: &str = "2025";

/// Final-total sheets, in fallback priority order. The season totals are
/// published across several sheets per position; earlier sheets carry the
/// core columns, later ones the remainder.
const HITTER_FINALS: &[&str] = &["최종성적1", "최종성적2"];
const PITCHER_FINALS: &[&str] = &["최종성적1", "최종성적2", "최종성적3", "최종성적4"];

/// Every declared slice for one position, in the original publication order.
/// 주자득점권 feeds the name index only; no detail choice selects it.
fn slice_parts(position: Position) -> Vec<&'static str> {
    let mut parts = vec![
        "1~3회", "3~4월", "4~6회", "5월", "6월", "7월", "7회이후", "8월",
        "9월이후", "주자득점권", "주자없음", "주자있음",
    ];
    match position {
        Position::Hitter => parts.extend_from_slice(HITTER_FINALS),
        Position::Pitcher => parts.extend_from_slice(PITCHER_FINALS),
    }
    parts
}

/// One logical stat sheet: a declared slice plus where (if anywhere) it was
/// found on disk. Declared at startup, resolved once, immutable thereafter.
#[derive(Debug, Clone)]
pub struct Dataset {
    /// File-name component identifying the slice (e.g. `주자있음`).
    pub part: &'static str,
    /// Logical name, also the expected file stem (e.g. `2025_타자_주자있음`).
    pub logical: String,
    /// Candidate file names, tried in order in every search directory.
    pub candidates: Vec<String>,
    pub resolved: Option<PathBuf>,
}

impl Dataset {
    fn declare(position: Position, part: &'static str, search_dirs: &[PathBuf]) -> Self {
        let logical = format!("{SEASON}_{}_{}", position.korean(), part);
        let candidates = vec![format!("{logical}.xlsx"), format!("{logical}.csv")];
        let resolved = resolve_first(&candidates, search_dirs);
        Dataset {
            part,
            logical,
            candidates,
            resolved,
        }
    }
}

/// Try every candidate file name against every search directory, in priority
/// order. Absence is reported as `None`, never as an error.
fn resolve_first(candidates: &[String], search_dirs: &[PathBuf]) -> Option<PathBuf> {
    for name in candidates {
        for dir in search_dirs {
            let path = dir.join(name);
            if path.exists() {
                return Some(path);
            }
        }
    }
    None
}

/// Order-preserving dedup of a path list. The same file name can resolve from
/// both the root and the data directory.
pub fn dedup_paths(paths: Vec<PathBuf>) -> Vec<PathBuf> {
    let mut seen: BTreeSet<PathBuf> = BTreeSet::new();
    paths
        .into_iter()
        .filter(|p| seen.insert(p.clone()))
        .collect()
}

// ---------------------------------------------------------------------------
// Catalog – the resolved slice set for both positions
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct Catalog {
    pub search_dirs: Vec<PathBuf>,
    pitcher: Vec<Dataset>,
    hitter: Vec<Dataset>,
}

impl Catalog {
    /// Declare and resolve every slice against the given directories.
    pub fn resolve(search_dirs: Vec<PathBuf>) -> Self {
        let pitcher = slice_parts(Position::Pitcher)
            .into_iter()
            .map(|part| Dataset::declare(Position::Pitcher, part, &search_dirs))
            .collect();
        let hitter = slice_parts(Position::Hitter)
            .into_iter()
            .map(|part| Dataset::declare(Position::Hitter, part, &search_dirs))
            .collect();
        Catalog {
            search_dirs,
            pitcher,
            hitter,
        }
    }

    /// Repository root first, then its `data/` subdirectory.
    pub fn default_search_dirs() -> Vec<PathBuf> {
        let base = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        vec![base.clone(), base.join("data")]
    }

    pub fn datasets(&self, position: Position) -> &[Dataset] {
        match position {
            Position::Pitcher => &self.pitcher,
            Position::Hitter => &self.hitter,
        }
    }

    pub fn dataset_for_part(&self, position: Position, part: &str) -> Option<&Dataset> {
        self.datasets(position).iter().find(|ds| ds.part == part)
    }

    /// All resolved paths for a position, deduplicated and order-stable.
    /// This sequence is the name-index cache key.
    pub fn resolved_paths(&self, position: Position) -> Vec<PathBuf> {
        dedup_paths(
            self.datasets(position)
                .iter()
                .filter_map(|ds| ds.resolved.clone())
                .collect(),
        )
    }

    /// Logical names of slices that could not be found on disk.
    pub fn unresolved(&self, position: Position) -> Vec<&str> {
        self.datasets(position)
            .iter()
            .filter(|ds| ds.resolved.is_none())
            .map(|ds| ds.logical.as_str())
            .collect()
    }

    /// The sheets consulted for one split, in fallback priority order.
    /// Unresolved slices are included so callers can report them; slices the
    /// catalog does not declare yield an empty list.
    pub fn split_datasets(&self, position: Position, split: Split) -> Vec<&Dataset> {
        let parts: Vec<&str> = match split {
            Split::Overall => match position {
                Position::Hitter => HITTER_FINALS.to_vec(),
                Position::Pitcher => PITCHER_FINALS.to_vec(),
            },
            Split::RunnersOn => vec!["주자있음"],
            Split::RunnersOff => vec!["주자없음"],
            Split::Inning(i) => INNINGS.get(i).map(|s| s.part).into_iter().collect(),
            Split::Month(m) => MONTHS.get(m).map(|s| s.part).into_iter().collect(),
        };
        parts
            .into_iter()
            .filter_map(|part| self.dataset_for_part(position, part))
            .collect()
    }

    /// Fatal startup condition: nothing resolved for either position.
    pub fn is_empty(&self) -> bool {
        Position::ALL
            .iter()
            .all(|&p| self.resolved_paths(p).is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn dedup_preserves_first_occurrence_order() {
        let paths = vec![
            PathBuf::from("b.csv"),
            PathBuf::from("a.csv"),
            PathBuf::from("b.csv"),
        ];
        assert_eq!(
            dedup_paths(paths),
            vec![PathBuf::from("b.csv"), PathBuf::from("a.csv")]
        );
    }

    #[test]
    fn root_directory_wins_over_data_directory() {
        let dir = tempfile::tempdir().unwrap();
        let data = dir.path().join("data");
        fs::create_dir(&data).unwrap();
        fs::write(dir.path().join("2025_타자_5월.csv"), "선수명\n구자욱\n").unwrap();
        fs::write(data.join("2025_타자_5월.csv"), "선수명\n김현수\n").unwrap();
        fs::write(data.join("2025_타자_6월.csv"), "선수명\n김현수\n").unwrap();

        let catalog = Catalog::resolve(vec![dir.path().to_path_buf(), data.clone()]);
        let may = catalog.dataset_for_part(Position::Hitter, "5월").unwrap();
        assert_eq!(may.resolved.as_deref(), Some(dir.path().join("2025_타자_5월.csv").as_path()));
        let june = catalog.dataset_for_part(Position::Hitter, "6월").unwrap();
        assert_eq!(june.resolved.as_deref(), Some(data.join("2025_타자_6월.csv").as_path()));
    }

    #[test]
    fn missing_slices_resolve_to_none_and_are_listed() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = Catalog::resolve(vec![dir.path().to_path_buf()]);
        assert!(catalog.is_empty());
        assert_eq!(
            catalog.unresolved(Position::Hitter).len(),
            catalog.datasets(Position::Hitter).len()
        );
    }

    #[test]
    fn overall_split_consults_finals_in_priority_order() {
        let catalog = Catalog::resolve(vec![PathBuf::from("/nonexistent")]);
        let finals: Vec<&str> = catalog
            .split_datasets(Position::Pitcher, Split::Overall)
            .iter()
            .map(|ds| ds.part)
            .collect();
        assert_eq!(finals, vec!["최종성적1", "최종성적2", "최종성적3", "최종성적4"]);
    }

    #[test]
    fn xlsx_is_preferred_over_csv_for_the_same_slice() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("2025_투수_5월.csv"), "선수명\n").unwrap();
        fs::write(dir.path().join("2025_투수_5월.xlsx"), "stub").unwrap();
        let catalog = Catalog::resolve(vec![dir.path().to_path_buf()]);
        let ds = catalog.dataset_for_part(Position::Pitcher, "5월").unwrap();
        assert!(ds.resolved.as_ref().unwrap().extension().unwrap() == "xlsx");
    }
}
