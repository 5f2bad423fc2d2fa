use crate::QuizApp;
use crate::ui::layout::centered_panel;
use egui::{Button, Context, RichText};

pub fn ui_empty(app: &mut QuizApp, ctx: &Context) {
    let mut restart = false;

    centered_panel(ctx, 220.0, 420.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(30.0);
            ui.heading(app.window_title());
            ui.add_space(16.0);
            ui.label(
                RichText::new(&app.message)
                    .heading()
                    .color(egui::Color32::YELLOW),
            );
            ui.add_space(20.0);
            restart = ui
                .add_sized([200.0, 36.0], Button::new("🔙 Choose another quiz"))
                .clicked();
        });
    });

    if restart {
        app.restart();
    }
}
