use dugout::app::DugoutApp;
use dugout::fonts;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([700.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Dugout – 2025 시즌 스탯",
        options,
        Box::new(|cc| {
            // Korean labels render as tofu without a CJK-capable fallback font.
            fonts::install_cjk_font(&cc.egui_ctx);
            Ok(Box::new(DugoutApp::new()))
        }),
    )
}
