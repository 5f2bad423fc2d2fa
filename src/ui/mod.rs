mod helpers;
pub mod layout;
pub mod views;

use crate::app::{QuizApp, SELECTION_KEY};
use crate::model::AppState;
use eframe::{App, Frame, set_value};
use egui::Context;
use layout::{bottom_panel, top_panel};

impl App for QuizApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        // BARRA SUPERIOR: título y reinicio (solo fuera de la pantalla de selección)
        if matches!(self.state, AppState::Quiz | AppState::Empty) {
            top_panel(self, ctx);
        }

        // PANEL INFERIOR TEMA OSCURO O CLARO
        bottom_panel(ctx);

        // Dispatch por estado
        match self.state {
            AppState::Selection => views::selection::ui_selection(self, ctx),
            AppState::Quiz => views::quiz::ui_quiz(self, ctx),
            AppState::Empty => views::empty::ui_empty(self, ctx),
        }

        if self.show_results {
            views::results::ui_results(self, ctx);
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        if let Some(selection) = &self.selection {
            set_value(storage, SELECTION_KEY, selection);
        }
    }
}
