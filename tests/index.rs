use std::path::PathBuf;

use dugout::data::catalog::{Catalog, Position};
use dugout::data::index::{build_index, search};

fn fixture_dir() -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path
}

#[test]
fn index_unions_names_across_all_sheets() {
    let catalog = Catalog::resolve(vec![fixture_dir()]);
    let index = build_index(&catalog.resolved_paths(Position::Hitter));

    assert!(index.names.contains(&"홍길동".to_string()));
    // 이대호 appears only in the runners-on sheet
    assert!(index.names.contains(&"이대호".to_string()));

    let occurrences = index.names.iter().filter(|n| *n == "홍길동").count();
    assert_eq!(occurrences, 1);

    let mut sorted = index.names.clone();
    sorted.sort();
    assert_eq!(index.names, sorted);
}

#[test]
fn unreadable_sheet_is_recorded_not_fatal() {
    let catalog = Catalog::resolve(vec![fixture_dir()]);
    let index = build_index(&catalog.resolved_paths(Position::Hitter));

    assert!(index.failed.contains(&"2025_타자_주자없음".to_string()));
    assert!(!index.names.is_empty());
}

#[test]
fn identical_paths_in_any_order_build_the_same_directory() {
    let catalog = Catalog::resolve(vec![fixture_dir()]);
    let mut paths = catalog.resolved_paths(Position::Hitter);

    let forward = build_index(&paths);
    paths.reverse();
    let reversed = build_index(&paths);

    assert_eq!(forward.names, reversed.names);
}

#[test]
fn search_narrows_the_directory() {
    let catalog = Catalog::resolve(vec![fixture_dir()]);
    let index = build_index(&catalog.resolved_paths(Position::Hitter));

    assert_eq!(search(&index.names, "홍"), vec!["홍길동"]);
    assert!(search(&index.names, "").is_empty());
    assert!(search(&index.names, "없는선수").is_empty());
}
