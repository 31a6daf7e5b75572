use eframe::egui::{self, Ui};

use crate::data::catalog::{Detail, INNINGS, MONTHS};
use crate::state::AppState;
use crate::ui::{charts, panels, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct DugoutApp {
    pub state: AppState,
}

impl DugoutApp {
    pub fn new() -> Self {
        Self {
            state: AppState::new(),
        }
    }
}

impl Default for DugoutApp {
    fn default() -> Self {
        Self::new()
    }
}

impl eframe::App for DugoutApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // A fatal catalog takes over the whole window; no controls render.
        if let Some(message) = self.state.fatal.clone() {
            egui::CentralPanel::default().show(ctx, |ui| {
                panels::fatal_screen(ui, &message);
            });
            return;
        }

        // ---- Top panel: title and sheet summary ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &self.state);
        });

        // ---- Left side panel: controls ----
        egui::SidePanel::left("control_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: charts and table ----
        egui::CentralPanel::default().show(ctx, |ui| {
            central_panel(ui, &self.state);
        });
    }
}

fn central_panel(ui: &mut Ui, state: &AppState) {
    let Some(view) = &state.view else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("왼쪽에서 선수를 검색해 선택하세요.");
        });
        return;
    };

    if !view.found {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading(format!(
                "'{}' 선수의 {} 데이터를 찾을 수 없습니다.",
                view.player,
                split_title(state)
            ));
        });
        return;
    }

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.heading(format!("{} – {}", view.player, split_title(state)));
            ui.add_space(8.0);

            ui.strong("누적 기록");
            charts::counting_chart(ui, &view.counting);
            ui.add_space(8.0);

            ui.strong("비율 기록");
            charts::rate_chart(ui, &view.rate, state.position);
            ui.add_space(8.0);

            ui.strong("전체 기록");
            table::stat_table(ui, &view.table);

            if !view.trend.is_empty() {
                ui.add_space(8.0);
                ui.strong("월별 추이");
                charts::trend_chart(ui, &view.trend);
            }
        });
}

fn split_title(state: &AppState) -> String {
    match state.detail {
        Detail::None => "시즌 전체".to_string(),
        Detail::ByMonth => format!("월별 · {}", MONTHS[state.month_idx].ui),
        Detail::ByInning => format!("이닝별 · {}", INNINGS[state.inning_idx].ui),
        other => other.label().to_string(),
    }
}
