use super::*;

impl QuizApp {
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Título de la ventana según el estado actual.
    pub fn window_title(&self) -> String {
        match &self.session {
            Some(s) => s.title().to_string(),
            None if self.bank.subject().is_empty() => "Quiz".to_string(),
            None => self.bank.subject().to_string(),
        }
    }

    pub fn has_last_selection(&self) -> bool {
        self.selection.is_some()
    }
}
