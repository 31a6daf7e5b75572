use std::fs;
use std::sync::Arc;

use eframe::egui::{self, FontData, FontDefinitions, FontFamily};

// ---------------------------------------------------------------------------
// Korean font installation
// ---------------------------------------------------------------------------

/// Well-known system locations of fonts with Hangul coverage, in preference
/// order. The first readable file wins.
const FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/nanum/NanumGothic.ttf",
    "/usr/share/fonts/truetype/nanum/NanumBarunGothic.ttf",
    "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
    "/System/Library/Fonts/AppleSDGothicNeo.ttc",
    "C:\\Windows\\Fonts\\malgun.ttf",
];

/// Install the first available Korean-capable font as a fallback for both
/// font families. The default egui fonts have no Hangul glyphs, so without
/// this every label renders as tofu boxes.
pub fn install_cjk_font(ctx: &egui::Context) {
    let Some((path, bytes)) = FONT_CANDIDATES
        .iter()
        .find_map(|path| fs::read(path).ok().map(|bytes| (*path, bytes)))
    else {
        log::warn!(
            "no Korean font found in known system locations; Hangul text will not render"
        );
        return;
    };

    let mut fonts = FontDefinitions::default();
    fonts
        .font_data
        .insert("cjk".to_owned(), Arc::new(FontData::from_owned(bytes)));
    for family in [FontFamily::Proportional, FontFamily::Monospace] {
        fonts.families.entry(family).or_default().push("cjk".to_owned());
    }
    ctx.set_fonts(fonts);
    log::info!("installed Korean font from {path}");
}
