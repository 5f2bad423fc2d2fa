use crate::QuizApp;
use crate::ui::helpers::big_list_button;
use crate::view_models::SelectionEntry;
use egui::{Align, Button, CentralPanel, Context, RichText, ScrollArea};

pub fn ui_selection(app: &mut QuizApp, ctx: &Context) {
    CentralPanel::default().show(ctx, |ui| {
        let max_width = 420.0;
        let content_width = ui.available_width().min(max_width);
        let button_h = 36.0;

        let entries: Vec<SelectionEntry> = app.selection_entries();

        // Centrar verticalmente
        let estimated_h = 140.0 + (button_h + 6.0) * (entries.len() as f32 + 1.0);
        let vs = ((ui.available_height() - estimated_h) / 2.0).max(0.0);
        ui.add_space(vs / 2.0);

        ui.with_layout(egui::Layout::top_down(Align::Center), |ui| {
            egui::Frame::default()
                .fill(ui.visuals().window_fill())
                .inner_margin(egui::Margin::symmetric(24, 16))
                .show(ui, |ui| {
                    ui.set_width(content_width);
                    ui.heading(app.window_title());
                    ui.add_space(8.0);
                    ui.label("Choose a quiz");
                    ui.add_space(16.0);

                    let mut chosen: Option<String> = None;

                    ScrollArea::vertical().max_height(420.0).show(ui, |ui| {
                        for entry in &entries {
                            let label = entry.button_label();
                            if big_list_button(ui, label, content_width, button_h, true) {
                                chosen = Some(entry.key.clone());
                            }
                            ui.add_space(6.0);
                        }
                    });

                    // Repetir la última selección guardada
                    if app.has_last_selection() {
                        ui.add_space(10.0);
                        let repeat = Button::new("▶ Repeat last quiz");
                        if ui.add_sized([content_width, button_h], repeat).clicked() {
                            app.repeat_last_quiz();
                            return;
                        }
                    }

                    if let Some(key) = chosen {
                        app.start_quiz(&key);
                    }

                    if !app.message.is_empty() {
                        ui.add_space(10.0);
                        ui.label(RichText::new(&app.message).color(egui::Color32::YELLOW));
                    }
                });
        });

        ui.add_space(vs / 2.0);
    });
}
