use std::path::Path;

use anyhow::{Context, Result};

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

const SEASON: &str = "2025";

const HITTERS: &[&str] = &[
    "홍길동", "구자욱", "김현수", "이정후", "박병호", "최형우", "나성범", "양의지",
    "손아섭", "강백호", "김하성", "문보경",
];

const PITCHERS: &[&str] = &[
    "구창모", "류현진", "김광현", "양현종", "원태인", "안우진", "고영표", "박세웅",
    "곽빈", "이의리", "최원태", "문동주",
];

/// Situational slices and the rough share of a season each one covers.
const SLICES: &[(&str, f64)] = &[
    ("3~4월", 0.18),
    ("5월", 0.17),
    ("6월", 0.17),
    ("7월", 0.16),
    ("8월", 0.17),
    ("9월이후", 0.15),
    ("1~3회", 0.34),
    ("4~6회", 0.34),
    ("7회이후", 0.32),
    ("주자있음", 0.45),
    ("주자없음", 0.55),
    ("주자득점권", 0.25),
];

// ---------------------------------------------------------------------------
// Hitter generation
// ---------------------------------------------------------------------------

const HITTER_HEADERS: &[&str] = &[
    "선수명", "경기", "타수", "안타", "홈런", "타점", "득점", "도루", "삼진",
    "볼넷", "고의4구", "몸에맞는볼", "타율", "출루율", "장타율", "OPS(출+장)",
];

struct HitterSeason {
    name: &'static str,
    games: f64,
    at_bats: f64,
    hits: f64,
    homers: f64,
    rbi: f64,
    runs: f64,
    steals: f64,
    strikeouts: f64,
    walks: f64,
    intentional: f64,
    hbp: f64,
}

impl HitterSeason {
    fn generate(name: &'static str, rng: &mut SimpleRng) -> Self {
        let games = 100.0 + rng.next_f64() * 44.0;
        let at_bats = games * (3.4 + rng.next_f64() * 0.8);
        let avg = (0.280 + rng.gauss(0.0, 0.025)).clamp(0.220, 0.360);
        let homers = 5.0 + rng.next_f64() * 30.0;
        HitterSeason {
            name,
            games,
            at_bats,
            hits: at_bats * avg,
            homers,
            rbi: homers * 2.0 + at_bats * 0.08,
            runs: at_bats * (0.12 + rng.next_f64() * 0.05),
            steals: rng.next_f64() * 25.0,
            strikeouts: at_bats * (0.15 + rng.next_f64() * 0.10),
            walks: at_bats * (0.08 + rng.next_f64() * 0.04),
            intentional: rng.next_f64() * 6.0,
            hbp: rng.next_f64() * 10.0,
        }
    }

    fn avg(&self) -> f64 {
        self.hits / self.at_bats
    }

    fn obp(&self) -> f64 {
        let reached = self.hits + self.walks + self.intentional + self.hbp;
        let chances = self.at_bats + self.walks + self.intentional + self.hbp;
        reached / chances
    }

    fn slg(&self) -> f64 {
        self.avg() + self.homers * 2.5 / self.at_bats
    }

    fn ops(&self) -> f64 {
        self.obp() + self.slg()
    }

    fn slice_row(&self, weight: f64, rng: &mut SimpleRng) -> Vec<String> {
        let scale = |v: f64, rng: &mut SimpleRng| v * weight * (1.0 + rng.gauss(0.0, 0.08));
        let jitter = |v: f64, rng: &mut SimpleRng| (v + rng.gauss(0.0, 0.015)).max(0.0);
        let avg = jitter(self.avg(), rng);
        let obp = jitter(self.obp(), rng);
        let slg = jitter(self.slg(), rng);
        vec![
            self.name.to_string(),
            counting(scale(self.games, rng)),
            counting(scale(self.at_bats, rng)),
            counting(scale(self.hits, rng)),
            counting(scale(self.homers, rng)),
            counting(scale(self.rbi, rng)),
            counting(scale(self.runs, rng)),
            counting(scale(self.steals, rng)),
            counting(scale(self.strikeouts, rng)),
            counting(scale(self.walks, rng)),
            counting(scale(self.intentional, rng)),
            counting(scale(self.hbp, rng)),
            rate(avg),
            rate(obp),
            rate(slg),
            rate(obp + slg),
        ]
    }
}

fn write_hitter_sheets(out_dir: &Path, rng: &mut SimpleRng) -> Result<usize> {
    let seasons: Vec<HitterSeason> = HITTERS
        .iter()
        .map(|&name| HitterSeason::generate(name, rng))
        .collect();

    let mut written = 0;
    for &(part, weight) in SLICES {
        let rows: Vec<Vec<String>> = seasons
            .iter()
            .map(|s| s.slice_row(weight, rng))
            .collect();
        write_sheet(&sheet_path(out_dir, "타자", part), HITTER_HEADERS, &rows)?;
        written += 1;
    }

    // Season totals are split across two sheets: the core line first, the
    // remaining rate stats (with percent-formatted OBP) in the second.
    let final1: Vec<Vec<String>> = seasons
        .iter()
        .map(|s| {
            vec![
                s.name.to_string(),
                counting(s.games),
                counting(s.at_bats),
                counting(s.hits),
                counting(s.homers),
                counting(s.rbi),
                counting(s.runs),
                counting(s.steals),
                counting(s.strikeouts),
                counting(s.walks),
                counting(s.intentional),
                counting(s.hbp),
                rate(s.avg()),
            ]
        })
        .collect();
    write_sheet(
        &sheet_path(out_dir, "타자", "최종성적1"),
        &[
            "선수명", "경기", "타수", "안타", "홈런", "타점", "득점", "도루", "삼진",
            "볼넷", "고의4구", "몸에맞는볼", "타율",
        ],
        &final1,
    )?;
    written += 1;

    let final2: Vec<Vec<String>> = seasons
        .iter()
        .map(|s| {
            vec![
                s.name.to_string(),
                format!("{:.1}%", s.obp() * 100.0),
                rate(s.slg()),
                rate(s.ops()),
            ]
        })
        .collect();
    write_sheet(
        &sheet_path(out_dir, "타자", "최종성적2"),
        &["선수명", "출루율", "장타율", "OPS(출+장)"],
        &final2,
    )?;
    written += 1;

    Ok(written)
}

// ---------------------------------------------------------------------------
// Pitcher generation
// ---------------------------------------------------------------------------

const PITCHER_HEADERS: &[&str] = &[
    "선수명", "경기", "승", "패", "세이브", "홀드", "탈삼진", "볼넷", "고의4구",
    "몸에맞는볼", "자책점", "평균자책점", "WHIP", "피안타율",
];

struct PitcherSeason {
    name: &'static str,
    starter: bool,
    games: f64,
    wins: f64,
    losses: f64,
    saves: f64,
    holds: f64,
    strikeouts: f64,
    walks: f64,
    intentional: f64,
    hbp: f64,
    earned_runs: f64,
    era: f64,
    whip: f64,
    baa: f64,
}

impl PitcherSeason {
    fn generate(name: &'static str, rng: &mut SimpleRng) -> Self {
        let starter = rng.next_f64() < 0.6;
        let games = if starter {
            24.0 + rng.next_f64() * 8.0
        } else {
            45.0 + rng.next_f64() * 25.0
        };
        let innings = if starter { games * 5.8 } else { games * 1.1 };
        let era = (3.60 + rng.gauss(0.0, 0.90)).clamp(1.80, 6.50);
        PitcherSeason {
            name,
            starter,
            games,
            wins: if starter { 6.0 + rng.next_f64() * 12.0 } else { rng.next_f64() * 6.0 },
            losses: 2.0 + rng.next_f64() * 10.0,
            saves: if starter { 0.0 } else { rng.next_f64() * 30.0 },
            holds: if starter { 0.0 } else { rng.next_f64() * 20.0 },
            strikeouts: innings * (0.7 + rng.next_f64() * 0.4),
            walks: innings * (0.25 + rng.next_f64() * 0.15),
            intentional: rng.next_f64() * 4.0,
            hbp: rng.next_f64() * 8.0,
            earned_runs: era * innings / 9.0,
            era,
            whip: (1.20 + rng.gauss(0.0, 0.15)).clamp(0.85, 1.80),
            baa: (0.260 + rng.gauss(0.0, 0.030)).clamp(0.180, 0.340),
        }
    }

    /// Relief-only columns are published as the `-` placeholder for starters,
    /// as the real sheets do.
    fn saves_cell(&self, value: f64) -> String {
        if self.starter {
            "-".to_string()
        } else {
            counting(value)
        }
    }

    fn slice_row(&self, weight: f64, rng: &mut SimpleRng) -> Vec<String> {
        let scale = |v: f64, rng: &mut SimpleRng| v * weight * (1.0 + rng.gauss(0.0, 0.08));
        vec![
            self.name.to_string(),
            counting(scale(self.games, rng)),
            counting(scale(self.wins, rng)),
            counting(scale(self.losses, rng)),
            self.saves_cell(scale(self.saves, rng)),
            self.saves_cell(scale(self.holds, rng)),
            counting(scale(self.strikeouts, rng)),
            counting(scale(self.walks, rng)),
            counting(scale(self.intentional, rng)),
            counting(scale(self.hbp, rng)),
            counting(scale(self.earned_runs, rng)),
            format!("{:.2}", (self.era + rng.gauss(0.0, 0.40)).max(0.0)),
            format!("{:.2}", (self.whip + rng.gauss(0.0, 0.08)).max(0.0)),
            rate((self.baa + rng.gauss(0.0, 0.020)).max(0.0)),
        ]
    }
}

fn write_pitcher_sheets(out_dir: &Path, rng: &mut SimpleRng) -> Result<usize> {
    let seasons: Vec<PitcherSeason> = PITCHERS
        .iter()
        .map(|&name| PitcherSeason::generate(name, rng))
        .collect();

    let mut written = 0;
    for &(part, weight) in SLICES {
        let rows: Vec<Vec<String>> = seasons
            .iter()
            .map(|s| s.slice_row(weight, rng))
            .collect();
        write_sheet(&sheet_path(out_dir, "투수", part), PITCHER_HEADERS, &rows)?;
        written += 1;
    }

    // Season totals are split across four sheets.
    let finals: [(&str, &[&str], fn(&PitcherSeason) -> Vec<String>); 4] = [
        (
            "최종성적1",
            &["선수명", "경기", "승", "패", "세이브", "홀드"],
            |s| {
                vec![
                    s.name.to_string(),
                    counting(s.games),
                    counting(s.wins),
                    counting(s.losses),
                    s.saves_cell(s.saves),
                    s.saves_cell(s.holds),
                ]
            },
        ),
        (
            "최종성적2",
            &["선수명", "탈삼진", "볼넷", "고의4구", "몸에맞는볼", "자책점"],
            |s| {
                vec![
                    s.name.to_string(),
                    counting(s.strikeouts),
                    counting(s.walks),
                    counting(s.intentional),
                    counting(s.hbp),
                    counting(s.earned_runs),
                ]
            },
        ),
        (
            "최종성적3",
            &["선수명", "평균자책점", "WHIP"],
            |s| {
                vec![
                    s.name.to_string(),
                    format!("{:.2}", s.era),
                    format!("{:.2}", s.whip),
                ]
            },
        ),
        ("최종성적4", &["선수명", "피안타율"], |s| {
            vec![s.name.to_string(), rate(s.baa)]
        }),
    ];

    for (part, headers, row_fn) in finals {
        let rows: Vec<Vec<String>> = seasons.iter().map(row_fn).collect();
        write_sheet(&sheet_path(out_dir, "투수", part), headers, &rows)?;
        written += 1;
    }

    Ok(written)
}

// ---------------------------------------------------------------------------
// CSV output
// ---------------------------------------------------------------------------

fn counting(v: f64) -> String {
    format!("{}", v.round().max(0.0) as i64)
}

fn rate(v: f64) -> String {
    format!("{:.3}", v.max(0.0))
}

fn sheet_path(out_dir: &Path, position: &str, part: &str) -> std::path::PathBuf {
    out_dir.join(format!("{SEASON}_{position}_{part}.csv"))
}

fn write_sheet(path: &Path, headers: &[&str], rows: &[Vec<String>]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("creating {}", path.display()))?;
    writer.write_record(headers)?;
    for row in rows {
        writer.write_record(row)?;
    }
    writer.flush()?;
    Ok(())
}

fn main() -> Result<()> {
    let out_dir = Path::new("data");
    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("creating {}", out_dir.display()))?;

    let mut rng = SimpleRng::new(42);
    let hitter_sheets = write_hitter_sheets(out_dir, &mut rng)?;
    let pitcher_sheets = write_pitcher_sheets(out_dir, &mut rng)?;

    println!(
        "Wrote {} hitter and {} pitcher sheets ({} players each) to {}",
        hitter_sheets,
        pitcher_sheets,
        HITTERS.len(),
        out_dir.display()
    );
    Ok(())
}
