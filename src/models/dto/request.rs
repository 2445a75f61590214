use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct SubmitAnswerRequest {
    /// Selected Likert label; absent when the user submitted without choosing.
    #[validate(length(min = 1, max = 200, message = "An answer must be selected"))]
    pub answer: Option<String>,
}
