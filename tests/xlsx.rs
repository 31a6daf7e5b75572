use dugout::data::aggregate::aggregate;
use dugout::data::catalog::{Catalog, Position, Split};
use rust_xlsxwriter::Workbook;

const HEADERS: [&str; 14] = [
    "선수명", "경기", "승", "패", "세이브", "홀드", "탈삼진", "볼넷", "고의4구",
    "몸에맞는볼", "자책점", "평균자책점", "WHIP", "피안타율",
];

#[test]
fn xlsx_sheet_loads_and_aggregates() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("2025_투수_5월.xlsx");

    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    for (col, header) in HEADERS.iter().enumerate() {
        sheet
            .write_string(0, col as u16, *header)
            .expect("write header");
    }
    sheet.write_string(1, 0, "구창모").expect("write name");
    let values = [
        5.0, 2.0, 1.0, 0.0, 0.0, 31.0, 9.0, 1.0, 2.0, 11.0, 3.27, 1.18, 0.242,
    ];
    for (i, v) in values.iter().enumerate() {
        sheet
            .write_number(1, (i + 1) as u16, *v)
            .expect("write value");
    }
    workbook.save(&path).expect("save workbook");

    let catalog = Catalog::resolve(vec![dir.path().to_path_buf()]);
    let record = aggregate("구창모", Position::Pitcher, Split::Month(1), &catalog)
        .expect("player should aggregate");

    assert_eq!(record.get("탈삼진").and_then(|v| v.value), Some(31.0));
    // 9 walks + 1 intentional + 2 hit-by-pitch
    assert_eq!(record.get("볼넷").and_then(|v| v.value), Some(12.0));
    assert_eq!(record.get("평균자책점").and_then(|v| v.value), Some(3.27));
    assert_eq!(record.get("피안타율").and_then(|v| v.value), Some(0.242));
}

#[test]
fn xlsx_outranks_a_csv_for_the_same_slice() {
    let dir = tempfile::tempdir().expect("tempdir");

    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.write_string(0, 0, "선수명").expect("write header");
    sheet.write_string(0, 1, "타율").expect("write header");
    sheet.write_string(1, 0, "홍길동").expect("write name");
    sheet.write_number(1, 1, 0.320).expect("write value");
    workbook
        .save(dir.path().join("2025_타자_주자있음.xlsx"))
        .expect("save workbook");

    std::fs::write(
        dir.path().join("2025_타자_주자있음.csv"),
        "선수명,타율\n홍길동,0.100\n",
    )
    .expect("write csv");

    let catalog = Catalog::resolve(vec![dir.path().to_path_buf()]);
    let record = aggregate("홍길동", Position::Hitter, Split::RunnersOn, &catalog)
        .expect("player should aggregate");
    assert_eq!(record.get("타율").and_then(|v| v.value), Some(0.320));
}
