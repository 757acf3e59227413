use eframe::egui;

use crate::state::AppState;
use crate::ui::{list, panels};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct JomatoApp {
    pub state: AppState,
}

impl JomatoApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for JomatoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: filters ----
        egui::SidePanel::left("filter_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: restaurant cards ----
        egui::CentralPanel::default().show(ctx, |ui| {
            list::restaurant_list(ui, &self.state);
        });
    }
}
