use eframe::egui::{self, Color32, RichText, ScrollArea, TextEdit, Ui};

use crate::data::catalog::{Detail, Position, INNINGS, MONTHS};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – controls
// ---------------------------------------------------------------------------

/// Render the control panel. Every widget sets `changed`; the view is
/// recomputed exactly once at the end of the pass.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("설정");
    ui.separator();

    let mut changed = false;

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            // ---- Position ----
            ui.strong("포지션");
            for pos in Position::ALL {
                changed |= ui
                    .radio_value(&mut state.position, pos, pos.korean())
                    .changed();
            }
            ui.separator();

            // ---- Detail split ----
            ui.strong("세부사항");
            for detail in Detail::ALL {
                changed |= ui
                    .radio_value(&mut state.detail, detail, detail.label())
                    .changed();
            }

            match state.detail {
                Detail::ByMonth => {
                    egui::ComboBox::from_id_salt("month_pick")
                        .selected_text(MONTHS[state.month_idx].ui)
                        .show_ui(ui, |ui: &mut Ui| {
                            for (i, month) in MONTHS.iter().enumerate() {
                                changed |= ui
                                    .selectable_value(&mut state.month_idx, i, month.ui)
                                    .changed();
                            }
                        });
                }
                Detail::ByInning => {
                    egui::ComboBox::from_id_salt("inning_pick")
                        .selected_text(INNINGS[state.inning_idx].ui)
                        .show_ui(ui, |ui: &mut Ui| {
                            for (i, inning) in INNINGS.iter().enumerate() {
                                changed |= ui
                                    .selectable_value(&mut state.inning_idx, i, inning.ui)
                                    .changed();
                            }
                        });
                }
                _ => {}
            }
            ui.separator();

            // ---- Player search ----
            ui.strong("선수 검색");
            changed |= ui
                .add(TextEdit::singleline(&mut state.query).hint_text("예: 구, 구자, 구자욱"))
                .changed();

            if !state.query.trim().is_empty() && state.matched.is_empty() {
                ui.label(
                    RichText::new("검색 결과가 없습니다. 다른 검색어를 입력해 보세요.")
                        .color(Color32::YELLOW),
                );
            }

            if !state.matched.is_empty() {
                let current = state.selected.clone().unwrap_or_default();
                egui::ComboBox::from_id_salt("player_pick")
                    .selected_text(&current)
                    .show_ui(ui, |ui: &mut Ui| {
                        for name in state.matched.clone() {
                            if ui.selectable_label(current == name, &name).clicked() {
                                state.selected = Some(name);
                                changed = true;
                            }
                        }
                    });
            }

            ui.separator();
            diagnostics(ui, state);
        });

    if changed {
        state.refresh();
    }
}

/// Collapsible diagnostics: sheet resolution status and the current search
/// state, for figuring out why a player or statistic is missing.
fn diagnostics(ui: &mut Ui, state: &mut AppState) {
    egui::CollapsingHeader::new(RichText::new("진단 정보").strong())
        .id_salt("diagnostics")
        .default_open(false)
        .show(ui, |ui: &mut Ui| {
            let failed = state.session.name_index(state.position).failed.clone();
            let catalog = &state.session.catalog;

            for pos in Position::ALL {
                ui.label(format!(
                    "{}: 시트 {} / {} 발견",
                    pos.korean(),
                    catalog.resolved_paths(pos).len(),
                    catalog.datasets(pos).len()
                ));
            }

            let unresolved = catalog.unresolved(state.position);
            if !unresolved.is_empty() {
                egui::CollapsingHeader::new(format!("미발견 시트 ({})", unresolved.len()))
                    .id_salt("unresolved_sheets")
                    .show(ui, |ui: &mut Ui| {
                        for logical in &unresolved {
                            ui.label(*logical);
                        }
                    });
            }

            if !failed.is_empty() {
                for stem in &failed {
                    ui.label(
                        RichText::new(format!("읽기 실패: {stem}")).color(Color32::YELLOW),
                    );
                }
            }

            ui.separator();
            ui.label(format!("검색어: {:?}", state.query));
            ui.label(format!("일치: {}명", state.matched.len()));
            ui.label(format!(
                "선택: {}",
                state.selected.as_deref().unwrap_or("없음")
            ));
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top toolbar: title plus a one-line sheet summary.
pub fn top_bar(ui: &mut Ui, state: &AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.strong("2025 시즌 스탯");
        ui.separator();

        let catalog = &state.session.catalog;
        for pos in Position::ALL {
            ui.label(format!(
                "{} 시트 {}개",
                pos.korean(),
                catalog.resolved_paths(pos).len()
            ));
        }
    });
}

// ---------------------------------------------------------------------------
// Fatal screen
// ---------------------------------------------------------------------------

/// Full-window remediation message shown when no stat sheet resolved at all.
pub fn fatal_screen(ui: &mut Ui, message: &str) {
    ui.centered_and_justified(|ui: &mut Ui| {
        ui.label(RichText::new(message).color(Color32::RED).size(16.0));
    });
}
