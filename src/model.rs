use serde::{Deserialize, Serialize};
use std::fmt;

/// Marcador literal del modo aleatorio en la clave de selección.
pub const RANDOM_MARKER: &str = "random";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Question {
    #[serde(rename = "question")]
    pub prompt: String,       // Enunciado
    pub options: Vec<String>, // Opciones en orden
    #[serde(rename = "correct_answer")]
    pub correct: usize, // Índice de la opción correcta
}

impl Question {
    pub fn is_correct(&self, option_idx: usize) -> bool {
        self.correct == option_idx
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash, Ord, PartialOrd)]
#[serde(transparent)]
pub struct QuizId(pub String);

impl QuizId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for QuizId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Qué quiz arrancar: uno concreto o la mezcla aleatoria.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    Specific(QuizId),
    Random,
}

impl Selector {
    /// Interpreta el valor guardado por la pantalla de selección.
    /// Devuelve `None` si está vacío.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            None
        } else if raw == RANDOM_MARKER {
            Some(Selector::Random)
        } else {
            Some(Selector::Specific(QuizId::new(raw)))
        }
    }

    /// Valor que se guarda en la clave de selección.
    pub fn as_key(&self) -> &str {
        match self {
            Selector::Specific(id) => id.as_str(),
            Selector::Random => RANDOM_MARKER,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Next,
    Previous,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Selection,
    Quiz,
    Empty, // selección sin preguntas: se muestra estado vacío
}

impl Default for AppState {
    fn default() -> Self {
        AppState::Selection
    }
}
