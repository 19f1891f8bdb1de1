//! Result view model and the render target abstraction.
//!
//! The request-render handler never touches terminal widgets directly. It
//! writes `ResultBlock`s and toggles flags through `RenderTarget`, which the
//! application `State` implements.

use crate::backend::{Exercise, GenerateResponse};

pub const TYPE_FALLBACK: &str = "N/A";
pub const QUESTION_FALLBACK: &str = "Pregunta no encontrada.";
pub const ANSWER_FALLBACK: &str = "N/A";
pub const NO_EXERCISES_PLACEHOLDER: &str = "(No se generaron ejercicios.)";
pub const ERROR_PREFIX: &str = "Error al generar ejercicios: ";

/// Display data for one exercise.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExerciseCard {
    pub label: String,
    pub question: String,
    pub options: Vec<String>,
    pub answer_line: String,
}

impl ExerciseCard {
    /// Build the card for the exercise at zero-based `index`.
    ///
    pub fn new(index: usize, exercise: &Exercise) -> Self {
        let options = if exercise.is_multiple_choice() {
            exercise.options.clone().unwrap_or_default()
        } else {
            vec![]
        };
        ExerciseCard {
            label: format!(
                "Ejercicio {} ({}):",
                index + 1,
                or_fallback(&exercise.kind, TYPE_FALLBACK)
            ),
            question: or_fallback(&exercise.question, QUESTION_FALLBACK).to_owned(),
            options,
            answer_line: format!(
                "Respuesta: {}",
                or_fallback(&exercise.answer, ANSWER_FALLBACK)
            ),
        }
    }
}

/// One renderable unit in the results container.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResultBlock {
    Heading(String),
    Card(ExerciseCard),
    Placeholder(String),
}

impl ResultBlock {
    /// Plain text lines for this block, used by print mode.
    ///
    pub fn lines(&self) -> Vec<String> {
        match self {
            ResultBlock::Heading(text) | ResultBlock::Placeholder(text) => vec![text.clone()],
            ResultBlock::Card(card) => {
                let mut lines = vec![card.label.clone(), card.question.clone()];
                lines.extend(card.options.iter().map(|option| format!("  • {}", option)));
                lines.push(card.answer_line.clone());
                lines
            }
        }
    }
}

/// Collaborators the request-render handler writes to: the results
/// container, the error container, the loading indicator and the trigger.
///
pub trait RenderTarget {
    fn clear_results(&mut self);
    fn clear_error(&mut self);
    fn set_loading(&mut self, loading: bool);
    fn set_trigger_enabled(&mut self, enabled: bool);
    fn append_result(&mut self, block: ResultBlock);
    fn show_error(&mut self, message: String);
}

/// Convert a successful response into the blocks to render, in order.
///
pub fn result_blocks(response: &GenerateResponse) -> Vec<ResultBlock> {
    let mut blocks = vec![];
    if let Some(message) = response.message.as_ref().filter(|m| !m.is_empty()) {
        blocks.push(ResultBlock::Heading(message.clone()));
    }
    match response.exercises.as_deref() {
        Some(exercises) if !exercises.is_empty() => {
            blocks.extend(
                exercises
                    .iter()
                    .enumerate()
                    .map(|(index, exercise)| ResultBlock::Card(ExerciseCard::new(index, exercise))),
            );
        }
        _ => blocks.push(ResultBlock::Placeholder(NO_EXERCISES_PLACEHOLDER.to_owned())),
    }
    blocks
}

fn or_fallback<'a>(value: &'a Option<String>, fallback: &'a str) -> &'a str {
    match value.as_deref() {
        Some(value) if !value.is_empty() => value,
        _ => fallback,
    }
}
