// src/view_models.rs

use crate::session::{QuizResult, Session};

/// Marca de corrección de una opción ya respondida.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionMark {
    Correct,
    Incorrect,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionView {
    pub idx: usize,
    pub label: String,
    pub selected: bool,
    pub mark: Option<OptionMark>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionView {
    pub title: String,
    pub prompt: String,
    pub position: String, // "Question i of N"
    pub score: String,
    pub options: Vec<OptionView>,
    pub prev_enabled: bool,
    pub next_enabled: bool,
    pub submit_visible: bool,
    pub answered: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultsView {
    pub final_score: String,
    pub percentage: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectionEntry {
    pub key: String,
    pub label: String,
    pub last_used: bool,
}

impl OptionView {
    /// Estado visual de cada opción según la respuesta guardada.
    pub fn for_question(session: &Session) -> Vec<OptionView> {
        let question = session.current_question();
        let answer = session.current_answer();

        question
            .options
            .iter()
            .enumerate()
            .map(|(idx, label)| {
                let mark = match answer {
                    None => None,
                    Some(_) if question.is_correct(idx) => Some(OptionMark::Correct),
                    Some(chosen) if chosen == idx => Some(OptionMark::Incorrect),
                    Some(_) => None,
                };
                OptionView {
                    idx,
                    label: label.clone(),
                    selected: answer == Some(idx),
                    mark,
                }
            })
            .collect()
    }

    pub fn label(&self) -> String {
        match self.mark {
            Some(OptionMark::Correct) => format!("✅ {}", self.label),
            Some(OptionMark::Incorrect) => format!("❌ {}", self.label),
            None => self.label.clone(),
        }
    }
}

impl QuestionView {
    pub fn from_session(session: &Session) -> Self {
        let n = session.len();
        let idx = session.current_index();
        QuestionView {
            title: session.title().to_string(),
            prompt: session.current_question().prompt.clone(),
            position: format!("Question {} of {}", idx + 1, n),
            score: format!("Score: {}", session.score()),
            options: OptionView::for_question(session),
            prev_enabled: !session.is_first(),
            next_enabled: !session.is_last(),
            submit_visible: session.is_last(),
            answered: session.current_answer().is_some(),
        }
    }
}

impl From<QuizResult> for ResultsView {
    fn from(result: QuizResult) -> Self {
        ResultsView {
            final_score: format!("Your score: {}/{}", result.score, result.total),
            percentage: format!("{}%", result.percentage),
        }
    }
}

impl SelectionEntry {
    pub fn button_label(&self) -> String {
        if self.last_used {
            format!("{} ⭐", self.label)
        } else {
            self.label.clone()
        }
    }
}
