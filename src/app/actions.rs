use super::*;
use crate::session::SelectOutcome;

impl QuizApp {
    /// Responde la pregunta actual con la opción pulsada.
    /// Devuelve `None` si no hay sesión en curso.
    pub fn select_option(&mut self, option_idx: usize) -> Option<SelectOutcome> {
        let session = self.session.as_mut()?;
        let outcome = session.select_option(option_idx);
        if outcome == SelectOutcome::OutOfRange {
            log::warn!("opción {option_idx} fuera de rango, se ignora");
        }
        Some(outcome)
    }
}
