use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::data::filter::RATING_STEPS;
use crate::state::AppState;

const CONTROL_WIDTH: f32 = 200.0;

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

fn rating_label(step: f64) -> String {
    if step == 0.0 {
        "Any rating".to_string()
    } else {
        format!("{step:.1}+")
    }
}

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Jomato");
    ui.label(RichText::new("Find yummy places to eat from our big list.").color(Color32::GRAY));
    ui.separator();

    let Some(dataset) = &state.dataset else {
        ui.label("No dataset loaded.");
        return;
    };

    // Clone the option sets so state can be mutated inside the widgets.
    let cuisines = dataset.cuisines.clone();
    let areas = dataset.areas.clone();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.strong("Name");
            let mut search = state.criteria.search_text.clone();
            let response = ui.add(
                egui::TextEdit::singleline(&mut search)
                    .hint_text("Search by name")
                    .desired_width(CONTROL_WIDTH),
            );
            if response.changed() {
                state.set_search_text(&search);
            }
            ui.add_space(6.0);

            ui.strong("Cuisine");
            let current = state.criteria.cuisine.clone();
            egui::ComboBox::from_id_salt("cuisine")
                .width(CONTROL_WIDTH)
                .selected_text(current.as_deref().unwrap_or("All cuisines"))
                .show_ui(ui, |ui: &mut Ui| {
                    if ui.selectable_label(current.is_none(), "All cuisines").clicked() {
                        state.set_cuisine(None);
                    }
                    for c in &cuisines {
                        let active = current.as_deref() == Some(c.as_str());
                        let text = RichText::new(c).color(state.cuisine_colors.color_for(c));
                        if ui.selectable_label(active, text).clicked() {
                            state.set_cuisine(Some(c.clone()));
                        }
                    }
                });
            ui.add_space(6.0);

            ui.strong("Area");
            let current = state.criteria.area.clone();
            egui::ComboBox::from_id_salt("area")
                .width(CONTROL_WIDTH)
                .selected_text(current.as_deref().unwrap_or("All areas"))
                .show_ui(ui, |ui: &mut Ui| {
                    if ui.selectable_label(current.is_none(), "All areas").clicked() {
                        state.set_area(None);
                    }
                    for a in &areas {
                        let active = current.as_deref() == Some(a.as_str());
                        if ui.selectable_label(active, a).clicked() {
                            state.set_area(Some(a.clone()));
                        }
                    }
                });
            ui.add_space(6.0);

            ui.strong("Rating");
            let current = state.criteria.min_rating;
            egui::ComboBox::from_id_salt("min_rating")
                .width(CONTROL_WIDTH)
                .selected_text(rating_label(current))
                .show_ui(ui, |ui: &mut Ui| {
                    for step in RATING_STEPS {
                        if ui
                            .selectable_label(current == step, rating_label(step))
                            .clicked()
                        {
                            state.set_min_rating(step);
                        }
                    }
                });
            ui.add_space(6.0);

            ui.strong("Delivery time");
            let mut delivery = state.delivery_input.clone();
            let response = ui.add(
                egui::TextEdit::singleline(&mut delivery)
                    .hint_text("Max delivery time (mins)")
                    .desired_width(CONTROL_WIDTH),
            );
            if response.changed() {
                state.set_max_delivery_input(&delivery);
            }
            ui.add_space(6.0);

            ui.strong("Cost");
            let mut cost = state.cost_input.clone();
            let response = ui.add(
                egui::TextEdit::singleline(&mut cost)
                    .hint_text("Max average cost")
                    .desired_width(CONTROL_WIDTH),
            );
            if response.changed() {
                state.set_max_cost_input(&cost);
            }

            ui.separator();
            if ui
                .add_enabled(!state.criteria.is_empty(), egui::Button::new("Clear filters"))
                .clicked()
            {
                state.reset_filters();
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(ds) = &state.dataset {
            ui.label(format!(
                "{} restaurants loaded, {} visible",
                ds.len(),
                state.visible_indices.len()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open restaurant dataset")
        .add_filter("Supported files", &["json", "csv"])
        .add_filter("JSON", &["json"])
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        match crate::data::loader::load_file(&path) {
            Ok(dataset) => state.set_dataset(dataset),
            Err(e) => {
                log::error!("Failed to load {}: {e:#}", path.display());
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_labels_match_selector_steps() {
        let labels: Vec<_> = RATING_STEPS.iter().map(|&s| rating_label(s)).collect();
        assert_eq!(labels, vec!["Any rating", "3.0+", "3.5+", "4.0+"]);
    }
}
