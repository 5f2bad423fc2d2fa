use crate::QuizApp;
use crate::ui::helpers::option_button;
use crate::ui::layout::two_button_row;
use crate::view_models::QuestionView;
use egui::{Align, Button, CentralPanel, Context, RichText, ScrollArea};

pub fn ui_quiz(app: &mut QuizApp, ctx: &Context) {
    // La vista se recalcula en cada frame a partir de la sesión
    let Some(view) = app.question_view() else {
        return;
    };

    CentralPanel::default().show(ctx, |ui| {
        let max_width = 650.0;
        let panel_width = (ui.available_width() * 0.97).min(max_width);
        let option_h = 40.0;
        let total_height = 150.0 + (option_h + 6.0) * view.options.len() as f32 + 48.0 * 2.0;
        let extra_space = (ui.available_height() - total_height).max(0.0) / 2.0;
        ui.add_space(extra_space / 2.0);

        egui::Frame::default()
            .fill(ui.visuals().window_fill())
            .inner_margin(egui::Margin::symmetric(24, 20))
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.set_width(panel_width);
                    header(ui, &view);
                    ui.add_space(10.0);

                    // Enunciado con scroll fijo
                    ui.allocate_ui_with_layout(
                        egui::vec2(panel_width, 0.0),
                        egui::Layout::top_down(Align::Min),
                        |ui| {
                            ScrollArea::vertical().max_height(150.0).show(ui, |ui| {
                                ui.label(RichText::new(&view.prompt).size(18.0));
                            });
                        },
                    );
                    ui.add_space(12.0);

                    // Opciones
                    for option in &view.options {
                        if option_button(ui, option, panel_width, option_h, !view.answered) {
                            app.select_option(option.idx);
                        }
                        ui.add_space(6.0);
                    }

                    ui.add_space(10.0);
                    let (prev, next) = two_button_row(
                        ui,
                        panel_width,
                        ("⬅ Previous", view.prev_enabled),
                        ("Next ➡", view.next_enabled),
                    );
                    if prev {
                        app.prev_question();
                    }
                    if next {
                        app.next_question();
                    }

                    if view.submit_visible {
                        ui.add_space(8.0);
                        if ui
                            .add_sized([panel_width / 2.0, 36.0], Button::new("✔ Submit"))
                            .clicked()
                        {
                            app.submit();
                        }
                    }
                });
            });

        ui.add_space(extra_space);
    });
}

fn header(ui: &mut egui::Ui, view: &QuestionView) {
    ui.horizontal(|ui| {
        ui.label(&view.position);
        ui.with_layout(egui::Layout::right_to_left(Align::Center), |ui| {
            ui.label(RichText::new(&view.score).strong());
        });
    });
}
