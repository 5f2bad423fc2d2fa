use super::*;
use crate::model::{Direction, Selector};

impl QuizApp {
    /// Guarda la selección y arranca el quiz a partir de ella.
    pub fn start_quiz(&mut self, raw_selector: &str) {
        let raw = raw_selector.trim();
        self.selection = (!raw.is_empty()).then(|| raw.to_string());
        self.load_selected_quiz();
    }

    /// Vuelve a lanzar la última selección guardada.
    pub fn repeat_last_quiz(&mut self) {
        if self.selection.is_some() {
            self.load_selected_quiz();
        }
    }

    /// Lee la clave de selección una vez y crea la sesión.
    /// Si no se puede, pasa al estado vacío con el motivo en `message`.
    fn load_selected_quiz(&mut self) {
        self.session = None;
        self.show_results = false;
        self.message.clear();

        let selector = match self.selection.as_deref().and_then(Selector::parse) {
            Some(s) => s,
            None => {
                log::warn!("no hay quiz seleccionado");
                self.message = "No quiz selected.".to_owned();
                self.state = AppState::Empty;
                return;
            }
        };

        match Session::initialize(&self.bank, &selector, self.config.random_size) {
            Ok(session) => {
                self.session = Some(session);
                self.state = AppState::Quiz;
            }
            Err(e) => {
                log::warn!("no se pudo iniciar el quiz `{}`: {e}", selector.as_key());
                self.message = format!("No questions available: {e}.");
                self.state = AppState::Empty;
            }
        }
    }

    pub fn next_question(&mut self) -> bool {
        self.session
            .as_mut()
            .map(|s| s.advance(Direction::Next))
            .unwrap_or(false)
    }

    pub fn prev_question(&mut self) -> bool {
        self.session
            .as_mut()
            .map(|s| s.advance(Direction::Previous))
            .unwrap_or(false)
    }

    /// Muestra la ventana de resultados.
    pub fn submit(&mut self) {
        if let Some(session) = &self.session {
            let result = session.finalize();
            log::info!(
                "quiz enviado: {}/{} ({}%)",
                result.score,
                result.total,
                result.percentage
            );
            self.show_results = true;
        }
    }

    pub fn close_results(&mut self) {
        self.show_results = false;
    }
}
