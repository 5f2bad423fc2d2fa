use crate::config::QuizConfig;
use crate::data::QuestionBank;
use crate::model::AppState;
use crate::session::Session;

// Submódulos
pub mod actions;
pub mod navigation;
pub mod queries;
pub mod resets;
pub mod view_models;

// Re-export de view models
pub use crate::view_models::{OptionMark, OptionView, QuestionView, ResultsView, SelectionEntry};

/// Clave del almacenamiento de eframe donde se guarda la selección.
pub const SELECTION_KEY: &str = "selected_quiz";

pub struct QuizApp {
    pub config: QuizConfig,
    pub bank: QuestionBank,
    /// Último valor elegido en la pantalla de selección (se persiste).
    pub selection: Option<String>,
    pub state: AppState,
    pub session: Option<Session>,
    pub show_results: bool,
    pub message: String,
}

impl QuizApp {
    pub fn new(config: QuizConfig, bank: QuestionBank) -> Self {
        Self {
            config,
            bank,
            selection: None,
            state: AppState::Selection,
            session: None,
            show_results: false,
            message: String::new(),
        }
    }

    /// Recupera la selección guardada en una ejecución anterior.
    pub fn with_last_selection(mut self, selection: Option<String>) -> Self {
        self.selection = selection.filter(|s| !s.trim().is_empty());
        self
    }
}
