use eframe::egui::{ScrollArea, Ui};

use super::card::restaurant_card;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Restaurant list (central panel)
// ---------------------------------------------------------------------------

/// Render the matching restaurants as a wrapped grid of cards.
pub fn restaurant_list(ui: &mut Ui, state: &AppState) {
    let Some(dataset) = &state.dataset else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open a dataset to browse restaurants  (File → Open…)");
        });
        return;
    };

    if dataset.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.label("This dataset has no restaurants.");
        });
        return;
    }

    if state.visible_indices.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.label("No restaurants match the current filters.");
        });
        return;
    }

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.horizontal_wrapped(|ui: &mut Ui| {
                ui.spacing_mut().item_spacing = [16.0, 16.0].into();
                for restaurant in state.visible_restaurants() {
                    restaurant_card(ui, restaurant, &state.cuisine_colors);
                }
            });
        });
}
