//! Estado de una partida de quiz y las transiciones que se le aplican.
//!
//! Todo aquí es puro: no dibuja nada. La vista se calcula aparte a partir
//! de la sesión (ver `view_models`).

use crate::data::QuestionBank;
use crate::error::SessionError;
use crate::model::{Direction, Question, Selector};
use rand::Rng;

/// Resultado de `Session::select_option`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectOutcome {
    Recorded { correct: bool },
    AlreadyAnswered,
    OutOfRange,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QuizResult {
    pub score: usize,
    pub total: usize,
    pub percentage: u32,
}

impl QuizResult {
    pub fn new(score: usize, total: usize) -> Self {
        // round(100 * score / total), redondeando .5 hacia arriba
        let percentage = if total == 0 {
            0
        } else {
            ((200 * score + total) / (2 * total)) as u32
        };
        Self {
            score,
            total,
            percentage,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Session {
    title: String,
    questions: Vec<Question>,
    current: usize,
    answers: Vec<Option<usize>>,
    score: usize,
}

impl Session {
    /// Crea una sesión con una lista ya resuelta. Falla si está vacía.
    pub fn new(title: impl Into<String>, questions: Vec<Question>) -> Result<Self, SessionError> {
        if questions.is_empty() {
            return Err(SessionError::NoQuestions);
        }
        let answers = vec![None; questions.len()];
        Ok(Self {
            title: title.into(),
            questions,
            current: 0,
            answers,
            score: 0,
        })
    }

    pub fn initialize(
        bank: &QuestionBank,
        selector: &Selector,
        random_size: usize,
    ) -> Result<Self, SessionError> {
        Self::initialize_with_rng(bank, selector, random_size, &mut rand::rng())
    }

    pub fn initialize_with_rng<R: Rng>(
        bank: &QuestionBank,
        selector: &Selector,
        random_size: usize,
        rng: &mut R,
    ) -> Result<Self, SessionError> {
        let title = session_title(bank.subject(), selector);

        let questions = match selector {
            Selector::Specific(id) => bank
                .quiz(id)
                .ok_or_else(|| SessionError::UnknownQuiz(id.clone()))?
                .to_vec(),
            Selector::Random => {
                let mut pool: Vec<Question> = bank.all_questions().into_iter().cloned().collect();
                if random_size > pool.len() {
                    log::warn!(
                        "mezcla aleatoria de {} preguntas, pero el banco solo tiene {}",
                        random_size,
                        pool.len()
                    );
                }
                shuffle(&mut pool, rng);
                pool.truncate(random_size);
                pool
            }
        };

        let session = Self::new(title, questions)?;
        log::info!(
            "sesión iniciada: {} ({} preguntas)",
            session.title,
            session.len()
        );
        Ok(session)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_question(&self) -> &Question {
        &self.questions[self.current]
    }

    pub fn current_answer(&self) -> Option<usize> {
        self.answers[self.current]
    }

    pub fn answers(&self) -> &[Option<usize>] {
        &self.answers
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn is_first(&self) -> bool {
        self.current == 0
    }

    pub fn is_last(&self) -> bool {
        self.current + 1 == self.questions.len()
    }

    /// Registra la respuesta a la pregunta actual. La primera respuesta es definitiva.
    pub fn select_option(&mut self, option_idx: usize) -> SelectOutcome {
        if self.answers[self.current].is_some() {
            return SelectOutcome::AlreadyAnswered;
        }
        let question = &self.questions[self.current];
        if option_idx >= question.options.len() {
            return SelectOutcome::OutOfRange;
        }

        let correct = question.is_correct(option_idx);
        self.answers[self.current] = Some(option_idx);
        if correct {
            self.score += 1;
        }
        log::debug!(
            "pregunta {}: opción {} ({})",
            self.current + 1,
            option_idx,
            if correct { "correcta" } else { "incorrecta" }
        );
        SelectOutcome::Recorded { correct }
    }

    /// Avanza o retrocede una posición. Devuelve `false` si ya estaba en el borde.
    pub fn advance(&mut self, direction: Direction) -> bool {
        let moved = match direction {
            Direction::Next if !self.is_last() => {
                self.current += 1;
                true
            }
            Direction::Previous if !self.is_first() => {
                self.current -= 1;
                true
            }
            _ => false,
        };
        if moved {
            log::debug!("pregunta {} de {}", self.current + 1, self.len());
        }
        moved
    }

    pub fn finalize(&self) -> QuizResult {
        QuizResult::new(self.score, self.questions.len())
    }
}

pub fn session_title(subject: &str, selector: &Selector) -> String {
    let quiz_type = match selector {
        Selector::Random => "Random Mixed Quiz".to_string(),
        Selector::Specific(id) => format!("Quiz {id}"),
    };
    if subject.is_empty() {
        quiz_type
    } else {
        format!("{quiz_type} - {subject}")
    }
}

/// Fisher–Yates: de la última posición a la 1, intercambia con un índice <= i.
pub fn shuffle<T, R: Rng>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::QuizId;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    fn q(prompt: &str, correct: usize) -> Question {
        Question {
            prompt: prompt.to_string(),
            options: vec!["a".into(), "b".into(), "c".into(), "d".into()],
            correct,
        }
    }

    fn bank() -> QuestionBank {
        QuestionBank::embedded().unwrap()
    }

    fn recount(s: &Session) -> usize {
        s.answers()
            .iter()
            .zip(s.questions())
            .filter(|(a, q)| **a == Some(q.correct))
            .count()
    }

    #[test]
    fn specific_quiz_is_verbatim() {
        let bank = bank();
        let id = QuizId::new("2");
        let s = Session::initialize(&bank, &Selector::Specific(id.clone()), 10).unwrap();
        assert_eq!(s.questions(), bank.quiz(&id).unwrap());
        assert_eq!(s.current_index(), 0);
        assert_eq!(s.score(), 0);
        assert!(s.answers().iter().all(Option::is_none));
        assert_eq!(s.title(), "Quiz 2 - Conservation Economics");
    }

    #[test]
    fn unknown_quiz_is_an_error() {
        let err = Session::initialize(&bank(), &Selector::Specific(QuizId::new("999")), 10)
            .unwrap_err();
        assert_eq!(err, SessionError::UnknownQuiz(QuizId::new("999")));
    }

    #[test]
    fn empty_list_is_rejected() {
        assert_eq!(
            Session::new("x", Vec::new()).unwrap_err(),
            SessionError::NoQuestions
        );
    }

    #[test]
    fn random_mix_has_configured_size_from_pool() {
        let bank = bank();
        let mut rng = StdRng::seed_from_u64(7);
        let s = Session::initialize_with_rng(&bank, &Selector::Random, 10, &mut rng).unwrap();
        assert_eq!(s.len(), 10);
        assert_eq!(s.title(), "Random Mixed Quiz - Conservation Economics");

        let pool = bank.all_questions();
        for picked in s.questions() {
            let in_pool = pool.iter().filter(|p| p.prompt == picked.prompt).count();
            let in_session = s
                .questions()
                .iter()
                .filter(|p| p.prompt == picked.prompt)
                .count();
            assert!(in_pool >= 1);
            assert!(in_session <= in_pool);
        }
    }

    #[test]
    fn random_mix_clamps_to_pool() {
        let bank = bank();
        let mut rng = StdRng::seed_from_u64(1);
        let s = Session::initialize_with_rng(&bank, &Selector::Random, 10_000, &mut rng).unwrap();
        assert_eq!(s.len(), bank.total_questions());
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let mut rng = StdRng::seed_from_u64(42);
        let original: Vec<u32> = (0..50).collect();
        let mut items = original.clone();
        shuffle(&mut items, &mut rng);
        let mut sorted = items.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, original);
    }

    #[test]
    fn shuffle_changes_order() {
        let mut rng = StdRng::seed_from_u64(42);
        let original: Vec<u32> = (0..50).collect();
        let mut items = original.clone();
        shuffle(&mut items, &mut rng);
        assert_ne!(items, original);
    }

    #[test]
    fn random_mix_is_not_the_bank_prefix() {
        let bank = bank();
        let prefix: Vec<String> = bank
            .all_questions()
            .iter()
            .take(10)
            .map(|q| q.prompt.clone())
            .collect();

        let mut firsts = HashSet::new();
        let mut same_as_prefix = 0;
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let s = Session::initialize_with_rng(&bank, &Selector::Random, 10, &mut rng).unwrap();
            let prompts: Vec<String> = s.questions().iter().map(|q| q.prompt.clone()).collect();
            if prompts == prefix {
                same_as_prefix += 1;
            }
            firsts.insert(prompts[0].clone());
        }
        assert!(firsts.len() > 1, "la primera pregunta nunca cambia");
        assert!(same_as_prefix < 20);
    }

    #[test]
    fn shuffle_handles_tiny_slices() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut empty: Vec<u8> = vec![];
        shuffle(&mut empty, &mut rng);
        let mut one = vec![9];
        shuffle(&mut one, &mut rng);
        assert_eq!(one, vec![9]);
    }

    #[test]
    fn first_answer_is_final() {
        let mut s = Session::new("t", vec![q("Q1", 1), q("Q2", 0)]).unwrap();
        assert_eq!(s.select_option(3), SelectOutcome::Recorded { correct: false });
        assert_eq!(s.select_option(1), SelectOutcome::AlreadyAnswered);
        assert_eq!(s.current_answer(), Some(3));
        assert_eq!(s.score(), 0);
    }

    #[test]
    fn out_of_range_option_is_ignored() {
        let mut s = Session::new("t", vec![q("Q1", 1)]).unwrap();
        assert_eq!(s.select_option(4), SelectOutcome::OutOfRange);
        assert_eq!(s.current_answer(), None);
        assert_eq!(s.select_option(1), SelectOutcome::Recorded { correct: true });
        assert_eq!(s.score(), 1);
    }

    #[test]
    fn advance_is_clamped() {
        let mut s = Session::new("t", vec![q("Q1", 0), q("Q2", 0), q("Q3", 0)]).unwrap();
        assert!(!s.advance(Direction::Previous));
        assert_eq!(s.current_index(), 0);
        assert!(s.advance(Direction::Next));
        assert!(s.advance(Direction::Next));
        assert!(s.is_last());
        assert!(!s.advance(Direction::Next));
        assert_eq!(s.current_index(), 2);
        assert!(s.advance(Direction::Previous));
        assert_eq!(s.current_index(), 1);
    }

    #[test]
    fn score_matches_answers_throughout() {
        let mut s = Session::new(
            "t",
            vec![q("Q1", 0), q("Q2", 1), q("Q3", 2), q("Q4", 3)],
        )
        .unwrap();
        let picks = [0, 3, 2, 1];
        for (i, pick) in picks.iter().enumerate() {
            s.select_option(*pick);
            s.select_option(s.current_question().correct);
            assert_eq!(s.score(), recount(&s), "tras la pregunta {}", i + 1);
            s.advance(Direction::Next);
        }
        // Volver atrás y reintentar no cambia nada
        s.advance(Direction::Previous);
        s.select_option(3);
        assert_eq!(s.score(), 2);
        assert_eq!(s.score(), recount(&s));
    }

    #[test]
    fn two_question_scenario() {
        let bank = QuestionBank::from_yaml_str(
            r#"
subject: Demo
quizzes:
  - id: "1"
    questions:
      - question: "Q1"
        options: ["a", "b"]
        correct_answer: 0
      - question: "Q2"
        options: ["a", "b"]
        correct_answer: 1
"#,
        )
        .unwrap();
        let mut s = Session::initialize(&bank, &Selector::Specific(QuizId::new("1")), 10).unwrap();
        s.select_option(0);
        assert_eq!(s.score(), 1);
        s.advance(Direction::Next);
        s.select_option(0);
        assert_eq!(s.score(), 1);
        assert_eq!(
            s.finalize(),
            QuizResult {
                score: 1,
                total: 2,
                percentage: 50
            }
        );
    }

    #[test]
    fn finalize_does_not_mutate() {
        let mut s = Session::new("t", vec![q("Q1", 0), q("Q2", 0)]).unwrap();
        s.select_option(0);
        let before = s.answers().to_vec();
        let _ = s.finalize();
        let _ = s.finalize();
        assert_eq!(s.answers(), before.as_slice());
        assert_eq!(s.current_index(), 0);
    }

    #[test]
    fn percentage_rounding() {
        assert_eq!(QuizResult::new(7, 10).percentage, 70);
        assert_eq!(QuizResult::new(1, 3).percentage, 33);
        assert_eq!(QuizResult::new(2, 3).percentage, 67);
        assert_eq!(QuizResult::new(1, 8).percentage, 13); // 12.5 -> 13
        assert_eq!(QuizResult::new(0, 5).percentage, 0);
        assert_eq!(QuizResult::new(5, 5).percentage, 100);
    }
}
