//! Seitenpanel: Targets anlegen/entfernen, Geometrie-Labels, zweite Ansicht.

use eframe::egui;

use crate::app::{AppIntent, AppState};

/// Zeigt das Target-Panel und sammelt die ausgelösten Intents.
pub fn show_target_panel(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut intents = Vec::new();

    egui::SidePanel::right("target_panel")
        .default_width(state.options.panel_width_px)
        .show(ctx, |ui| {
            ui.heading("Targets");

            ui.horizontal(|ui| {
                if ui.button("+ Kreis").clicked() {
                    intents.push(AppIntent::AddCircle);
                }
                if ui.button("+ Quadrat").clicked() {
                    intents.push(AppIntent::AddSquare);
                }
                if ui.button("+ Rechteck").clicked() {
                    intents.push(AppIntent::AddRectangle);
                }
            });

            let second_label = if state.secondary_surface.is_some() {
                "Zweite Ansicht schließen"
            } else {
                "Zweite Ansicht öffnen"
            };
            if ui.button(second_label).clicked() {
                intents.push(AppIntent::ToggleSecondView);
            }

            ui.separator();

            for entry in &state.panel {
                ui.group(|ui| {
                    ui.label(egui::RichText::new(&entry.name).strong());
                    ui.monospace(entry.label.text());
                    if ui.button("Entfernen").clicked() {
                        intents.push(AppIntent::RemoveTarget(entry.target_id));
                    }
                });
            }

            ui.separator();
            if ui.button("Optionen speichern").clicked() {
                intents.push(AppIntent::SaveOptions);
            }
        });

    intents
}
