use crate::QuizApp;
use egui::{Align2, Button, Context, RichText};

pub fn ui_results(app: &mut QuizApp, ctx: &Context) {
    let Some(view) = app.results_view() else {
        app.close_results();
        return;
    };

    let mut open = true;
    let mut restart = false;

    egui::Window::new("Quiz Results")
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
        .open(&mut open)
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(8.0);
                ui.label(RichText::new(&view.final_score).heading());
                ui.add_space(6.0);
                ui.label(
                    RichText::new(&view.percentage)
                        .size(32.0)
                        .strong()
                        .color(egui::Color32::YELLOW),
                );
                ui.add_space(12.0);
                if ui.add_sized([160.0, 36.0], Button::new("🔄 Restart")).clicked() {
                    restart = true;
                }
            });
        });

    // Cerrar la ventana vuelve al quiz; reiniciar vuelve a la selección
    if restart {
        app.restart();
    } else if !open {
        app.close_results();
    }
}
