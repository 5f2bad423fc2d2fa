use super::*;

impl QuizApp {
    /// Descarta la sesión y vuelve a la pantalla de selección.
    /// Solo se conserva la clave de selección.
    pub fn restart(&mut self) {
        if self.session.take().is_some() {
            log::info!("sesión descartada, volviendo a la selección");
        }
        self.show_results = false;
        self.message.clear();
        self.state = AppState::Selection;
    }
}
