use super::*;
use crate::model::RANDOM_MARKER;

impl QuizApp {
    pub fn question_view(&self) -> Option<QuestionView> {
        self.session.as_ref().map(QuestionView::from_session)
    }

    pub fn results_view(&self) -> Option<ResultsView> {
        self.session
            .as_ref()
            .map(|s| ResultsView::from(s.finalize()))
    }

    /// Botones de la pantalla de selección: un quiz por id y la mezcla aleatoria.
    pub fn selection_entries(&self) -> Vec<SelectionEntry> {
        let last = self.selection.as_deref();
        self.bank
            .quiz_ids()
            .map(|id| SelectionEntry {
                key: id.to_string(),
                label: format!("Quiz {id}"),
                last_used: last == Some(id.as_str()),
            })
            .chain(std::iter::once(SelectionEntry {
                key: RANDOM_MARKER.to_string(),
                label: "Random Mixed Quiz".to_string(),
                last_used: last == Some(RANDOM_MARKER),
            }))
            .collect()
    }
}
