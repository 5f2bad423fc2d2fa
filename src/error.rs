//! Tipos de error del crate.

use thiserror::Error;

use crate::model::QuizId;

/// Errores al cargar o validar el banco de preguntas.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BankError {
    #[error("could not parse question bank: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("could not read question bank: {0}")]
    Io(#[from] std::io::Error),
    #[error("question bank has no quizzes")]
    NoQuizzes,
    #[error("quiz id must not be empty")]
    EmptyId,
    #[error("quiz `{0}` appears more than once")]
    DuplicateQuiz(QuizId),
    #[error("quiz `{0}` has no questions")]
    EmptyQuiz(QuizId),
    #[error("quiz `{quiz}` question {number} needs at least two options")]
    TooFewOptions { quiz: QuizId, number: usize },
    #[error("quiz `{quiz}` question {number}: correct answer {correct} is out of range")]
    CorrectOutOfRange {
        quiz: QuizId,
        number: usize,
        correct: usize,
    },
}

/// Errores al crear una sesión a partir de un selector.
#[derive(Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("quiz `{0}` does not exist")]
    UnknownQuiz(QuizId),
    #[error("no questions available")]
    NoQuestions,
}

/// Errores al leer la configuración del entorno.
#[derive(Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("{var} must be a positive integer, got `{value}`")]
    InvalidNumber { var: &'static str, value: String },
}
