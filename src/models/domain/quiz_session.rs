use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    errors::{AppError, AppResult},
    models::domain::{axis::AxisDefinition, likert::LikertScale},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum QuizState {
    NotStarted,
    InProgress {
        axis_index: usize,
        question_index: usize,
    },
    Complete,
}

/// Per-user quiz progress. `current_axis_index` is `None` until the quiz is
/// started; a value equal to the number of axes means the quiz is complete.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuizSession {
    pub id: String,
    pub current_axis_index: Option<usize>,
    pub current_question_index: usize,
    pub questions: HashMap<String, Vec<String>>,
    pub answers: HashMap<String, BTreeMap<usize, String>>,
    pub created_at: DateTime<Utc>,
    pub last_activity_at: DateTime<Utc>,
}

impl QuizSession {
    pub fn new(id: &str) -> Self {
        let now = Utc::now();
        QuizSession {
            id: id.to_string(),
            current_axis_index: None,
            current_question_index: 0,
            questions: HashMap::new(),
            answers: HashMap::new(),
            created_at: now,
            last_activity_at: now,
        }
    }

    pub fn start(&mut self) {
        self.current_axis_index = Some(0);
        self.current_question_index = 0;
        self.questions.clear();
        self.answers.clear();
        self.touch();
    }

    pub fn touch(&mut self) {
        self.last_activity_at = Utc::now();
    }

    pub fn state(&self, axes: &[AxisDefinition]) -> QuizState {
        match self.current_axis_index {
            None => QuizState::NotStarted,
            Some(axis_index) if axis_index >= axes.len() => QuizState::Complete,
            Some(axis_index) => QuizState::InProgress {
                axis_index,
                question_index: self.current_question_index,
            },
        }
    }

    /// Axis and in-axis index of the question to show next.
    pub fn current_position<'a>(
        &self,
        axes: &'a [AxisDefinition],
    ) -> AppResult<(&'a AxisDefinition, usize)> {
        match self.state(axes) {
            QuizState::NotStarted => Err(AppError::SessionNotStarted(format!(
                "session '{}' has not started the quiz",
                self.id
            ))),
            QuizState::Complete => Err(AppError::BadRequest(
                "Quiz is already complete".to_string(),
            )),
            QuizState::InProgress {
                axis_index,
                question_index,
            } => Ok((&axes[axis_index], question_index)),
        }
    }

    pub fn has_questions_for(&self, axis_name: &str) -> bool {
        self.questions.contains_key(axis_name)
    }

    /// Stores the generated questions for an axis unless some are already
    /// stored. Returns `false` if the axis was already populated.
    pub fn store_questions(&mut self, axis_name: &str, questions: Vec<String>) -> bool {
        if self.has_questions_for(axis_name) {
            return false;
        }
        self.questions.insert(axis_name.to_string(), questions);
        self.answers.entry(axis_name.to_string()).or_default();
        true
    }

    pub fn question_at(&self, axis_name: &str, index: usize) -> Option<&str> {
        self.questions
            .get(axis_name)
            .and_then(|questions| questions.get(index))
            .map(String::as_str)
    }

    /// 1-based position of the current question across all axes.
    pub fn progress_number(&self, axes: &[AxisDefinition]) -> Option<usize> {
        match self.state(axes) {
            QuizState::InProgress {
                axis_index,
                question_index,
            } => {
                let previous: usize = axes[..axis_index]
                    .iter()
                    .map(AxisDefinition::question_count)
                    .sum();
                Some(previous + question_index + 1)
            }
            _ => None,
        }
    }

    pub fn has_answers(&self) -> bool {
        self.answers.values().any(|answers| !answers.is_empty())
    }

    /// Records `label` for the current question and advances. Input that is
    /// missing or not on the scale, or an answer to an axis whose questions
    /// were never generated, is rejected without touching any state.
    pub fn submit_answer(
        &mut self,
        label: Option<&str>,
        axes: &[AxisDefinition],
        scale: &LikertScale,
    ) -> AppResult<QuizState> {
        let label = label.map(str::trim).unwrap_or_default();
        if label.is_empty() {
            return Err(AppError::ValidationError(
                "An answer must be selected".to_string(),
            ));
        }
        if !scale.contains(label) {
            return Err(AppError::ValidationError(format!(
                "'{}' is not an option on the answer scale",
                label
            )));
        }

        let (axis, question_index) = self.current_position(axes)?;
        if !self.has_questions_for(&axis.name) {
            return Err(AppError::BadRequest(format!(
                "questions for axis '{}' have not been shown yet",
                axis.name
            )));
        }
        let axis_name = axis.name.clone();
        let question_count = axis.question_count();

        self.answers
            .entry(axis_name.clone())
            .or_default()
            .insert(question_index, label.to_string());
        log::debug!(
            "Stored answer for {}[{}]: {}",
            axis_name,
            question_index,
            label
        );

        let mut next_question_index = question_index + 1;
        let mut next_axis_index = self.current_axis_index.unwrap_or_default();
        if next_question_index >= question_count {
            next_question_index = 0;
            next_axis_index += 1;
        }
        self.current_axis_index = Some(next_axis_index);
        self.current_question_index = next_question_index;
        self.touch();

        Ok(self.state(axes))
    }
}
