use eframe::egui::{self, Color32, RichText, Ui};

use crate::color::ColorMap;
use crate::data::model::Restaurant;

pub const CARD_WIDTH: f32 = 260.0;

const MUTED: Color32 = Color32::from_rgb(0xc0, 0xc0, 0xd8);
const FAINT: Color32 = Color32::from_rgb(0xa0, 0xa0, 0xc0);
const CARD_FILL: Color32 = Color32::from_rgb(0x16, 0x16, 0x22);
const CARD_STROKE: Color32 = Color32::from_rgb(0x26, 0x26, 0x3a);

// ---------------------------------------------------------------------------
// Card text
// ---------------------------------------------------------------------------

/// Whole numbers print without a fractional part.
fn number(v: f64) -> String {
    if v.fract() == 0.0 && v.abs() < 1e15 {
        format!("{}", v as i64)
    } else {
        format!("{v}")
    }
}

fn opt_number(v: Option<f64>) -> String {
    v.map(number).unwrap_or_default()
}

/// "Casual Dining • Downtown"
pub fn subtitle(r: &Restaurant) -> String {
    format!(
        "{} • {}",
        r.kind.as_deref().unwrap_or_default(),
        r.area.as_deref().unwrap_or_default()
    )
}

/// "⭐ 4.2 (310 reviews)"; an absent or zero rating shows as N/A.
pub fn rating_line(r: &Restaurant) -> String {
    let rating = match r.rating {
        Some(v) if v != 0.0 => number(v),
        _ => "N/A".to_string(),
    };
    format!("⭐ {rating} ({} reviews)", r.rating_count.unwrap_or(0))
}

pub fn cost_line(r: &Restaurant) -> String {
    format!("Avg cost: ₹{} for two", opt_number(r.average_cost))
}

pub fn booking_line(r: &Restaurant) -> String {
    format!(
        "Online order: {} • Table booking: {}",
        r.online_order.as_deref().unwrap_or_default(),
        r.table_booking.as_deref().unwrap_or_default()
    )
}

pub fn eta_line(r: &Restaurant) -> String {
    format!("ETA: {} mins", opt_number(r.delivery_time))
}

// ---------------------------------------------------------------------------
// Card widget
// ---------------------------------------------------------------------------

/// Render a single restaurant card.
pub fn restaurant_card(ui: &mut Ui, r: &Restaurant, colors: &ColorMap) {
    egui::Frame::new()
        .fill(CARD_FILL)
        .stroke(egui::Stroke::new(1.0, CARD_STROKE))
        .corner_radius(10.0)
        .inner_margin(12.0)
        .show(ui, |ui: &mut Ui| {
            ui.set_width(CARD_WIDTH);
            ui.label(RichText::new(&r.name).size(17.0).strong());
            ui.label(RichText::new(subtitle(r)).color(MUTED));

            ui.horizontal_wrapped(|ui: &mut Ui| {
                for cuisine in &r.cuisines {
                    ui.label(RichText::new(cuisine).color(colors.color_for(cuisine)));
                }
            });

            ui.add_space(4.0);
            ui.label(RichText::new(rating_line(r)).strong());
            ui.label(RichText::new(cost_line(r)).color(MUTED));
            ui.label(RichText::new(booking_line(r)).color(FAINT));
            ui.label(RichText::new(eta_line(r)).color(MUTED));
        });
}
