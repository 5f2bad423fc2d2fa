// src/data.rs

use crate::error::BankError;
use crate::model::{Question, QuizId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct QuizDefinition {
    pub id: QuizId,
    pub questions: Vec<Question>,
}

/// Banco de preguntas de solo lectura, indexado por id de quiz.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct QuestionBank {
    #[serde(default)]
    subject: String,
    quizzes: Vec<QuizDefinition>,
}

impl QuestionBank {
    /// Carga el banco de preguntas desde el YAML embebido
    pub fn embedded() -> Result<Self, BankError> {
        let file_content = include_str!("data/quiz_questions.yaml");
        Self::from_yaml_str(file_content)
    }

    pub fn from_path(path: &Path) -> Result<Self, BankError> {
        let file_content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&file_content)
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self, BankError> {
        let bank: QuestionBank = serde_yaml::from_str(yaml)?;
        bank.validate()?;
        log::debug!(
            "banco cargado: {} quizzes, {} preguntas",
            bank.quizzes.len(),
            bank.total_questions()
        );
        Ok(bank)
    }

    fn validate(&self) -> Result<(), BankError> {
        if self.quizzes.is_empty() {
            return Err(BankError::NoQuizzes);
        }

        let mut seen = HashSet::new();
        for quiz in &self.quizzes {
            if quiz.id.as_str().trim().is_empty() {
                return Err(BankError::EmptyId);
            }
            if !seen.insert(&quiz.id) {
                return Err(BankError::DuplicateQuiz(quiz.id.clone()));
            }
            if quiz.questions.is_empty() {
                return Err(BankError::EmptyQuiz(quiz.id.clone()));
            }

            for (i, q) in quiz.questions.iter().enumerate() {
                // Numeración humana (1, 2, 3…) en los mensajes
                let number = i + 1;
                if q.options.len() < 2 {
                    return Err(BankError::TooFewOptions {
                        quiz: quiz.id.clone(),
                        number,
                    });
                }
                if q.correct >= q.options.len() {
                    return Err(BankError::CorrectOutOfRange {
                        quiz: quiz.id.clone(),
                        number,
                        correct: q.correct,
                    });
                }
            }
        }
        Ok(())
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// Preguntas de un quiz concreto, en su orden original.
    pub fn quiz(&self, id: &QuizId) -> Option<&[Question]> {
        self.quizzes
            .iter()
            .find(|q| &q.id == id)
            .map(|q| q.questions.as_slice())
    }

    pub fn quiz_ids(&self) -> impl Iterator<Item = &QuizId> {
        self.quizzes.iter().map(|q| &q.id)
    }

    // Aplana todas las preguntas (pool del modo aleatorio)
    pub fn all_questions(&self) -> Vec<&Question> {
        self.quizzes.iter().flat_map(|q| q.questions.iter()).collect()
    }

    pub fn total_questions(&self) -> usize {
        self.quizzes.iter().map(|q| q.questions.len()).sum()
    }

    pub fn len(&self) -> usize {
        self.quizzes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quizzes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL: &str = r#"
subject: Test
quizzes:
  - id: "a"
    questions:
      - question: "Q1"
        options: ["x", "y"]
        correct_answer: 0
  - id: "b"
    questions:
      - question: "Q2"
        options: ["x", "y", "z"]
        correct_answer: 2
      - question: "Q3"
        options: ["x", "y"]
        correct_answer: 1
"#;

    #[test]
    fn embedded_bank_loads() {
        let bank = QuestionBank::embedded().unwrap();
        assert_eq!(bank.subject(), "Conservation Economics");
        assert!(bank.len() >= 2);
        assert!(bank.total_questions() >= 10);
    }

    #[test]
    fn quiz_lookup_keeps_order() {
        let bank = QuestionBank::from_yaml_str(SMALL).unwrap();
        let b = bank.quiz(&QuizId::new("b")).unwrap();
        assert_eq!(b.len(), 2);
        assert_eq!(b[0].prompt, "Q2");
        assert_eq!(b[1].prompt, "Q3");
        assert!(bank.quiz(&QuizId::new("zzz")).is_none());
    }

    #[test]
    fn all_questions_in_bank_order() {
        let bank = QuestionBank::from_yaml_str(SMALL).unwrap();
        let prompts: Vec<&str> = bank.all_questions().iter().map(|q| q.prompt.as_str()).collect();
        assert_eq!(prompts, vec!["Q1", "Q2", "Q3"]);
        let ids: Vec<&str> = bank.quiz_ids().map(|id| id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn rejects_empty_quiz() {
        let yaml = "quizzes:\n  - id: \"1\"\n    questions: []\n";
        let err = QuestionBank::from_yaml_str(yaml).unwrap_err();
        assert!(matches!(err, BankError::EmptyQuiz(id) if id.as_str() == "1"));
    }

    #[test]
    fn rejects_no_quizzes() {
        let err = QuestionBank::from_yaml_str("quizzes: []\n").unwrap_err();
        assert!(matches!(err, BankError::NoQuizzes));
    }

    #[test]
    fn rejects_duplicate_ids() {
        let yaml = r#"
quizzes:
  - id: "1"
    questions:
      - question: "Q"
        options: ["x", "y"]
        correct_answer: 0
  - id: "1"
    questions:
      - question: "Q"
        options: ["x", "y"]
        correct_answer: 0
"#;
        let err = QuestionBank::from_yaml_str(yaml).unwrap_err();
        assert!(matches!(err, BankError::DuplicateQuiz(_)));
    }

    #[test]
    fn rejects_correct_out_of_range() {
        let yaml = r#"
quizzes:
  - id: "1"
    questions:
      - question: "Q"
        options: ["x", "y"]
        correct_answer: 2
"#;
        let err = QuestionBank::from_yaml_str(yaml).unwrap_err();
        assert!(matches!(
            err,
            BankError::CorrectOutOfRange { number: 1, correct: 2, .. }
        ));
    }

    #[test]
    fn rejects_single_option() {
        let yaml = r#"
quizzes:
  - id: "1"
    questions:
      - question: "Q"
        options: ["x"]
        correct_answer: 0
"#;
        let err = QuestionBank::from_yaml_str(yaml).unwrap_err();
        assert!(matches!(err, BankError::TooFewOptions { number: 1, .. }));
    }

    #[test]
    fn malformed_yaml_is_an_error() {
        let err = QuestionBank::from_yaml_str("quizzes: [").unwrap_err();
        assert!(matches!(err, BankError::Yaml(_)));
    }
}
