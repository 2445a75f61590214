use serde::Serialize;

use crate::models::domain::{AxisDefinition, AxisScore, QuizState};

#[derive(Debug, Clone, Serialize)]
pub struct StartQuizResponse {
    pub session_id: String,
    pub total_questions: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct CurrentQuestion {
    pub axis_name: String,
    pub question_text: String,
    pub likert_scale: Vec<String>,
    pub current_question_number: usize,
    pub total_questions: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnswerOutcome {
    pub complete: bool,
    pub state: QuizState,
    /// Progress number of the next question, absent once complete.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_question_number: Option<usize>,
    pub total_questions: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuizResults {
    pub axes: Vec<AxisScore>,
    pub summary: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct AxisOverview {
    pub name: String,
    pub pole_left: String,
    pub pole_right: String,
    pub question_count: usize,
}

impl From<&AxisDefinition> for AxisOverview {
    fn from(axis: &AxisDefinition) -> Self {
        AxisOverview {
            name: axis.name.clone(),
            pole_left: axis.pole_left.clone(),
            pole_right: axis.pole_right.clone(),
            question_count: axis.question_count(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AxesOverview {
    pub axes: Vec<AxisOverview>,
    pub likert_scale: Vec<String>,
    pub total_questions: usize,
}
