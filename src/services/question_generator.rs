use std::sync::Arc;

use once_cell::sync::Lazy;

use crate::{
    constants::prompts::{
        QUESTION_PROMPT_FOOTER, QUESTION_PROMPT_HEADER, QUESTION_PROMPT_ONLY_GENERAL,
        QUESTION_PROMPT_REMAINING_GENERAL, QUESTION_PROMPT_SUB_TOPICS,
    },
    models::domain::{AxisDefinition, LikertScale},
    services::completion_service::CompletionService,
};

/// Marks a question produced because the completion call failed.
pub const API_ERROR_MARKER: &str = "API Error";

/// Marks a question padded in because the model returned too few lines.
pub const GENERATION_ERROR_MARKER: &str = "Placeholder - Generation Error";

static BULLET_PREFIX: Lazy<regex::Regex> = Lazy::new(|| {
    regex::Regex::new(r"^(?:[-*•]\s*)+").expect("BULLET_PREFIX is a valid regex pattern")
});

pub fn is_api_error_placeholder(question: &str) -> bool {
    question.contains(API_ERROR_MARKER)
}

pub fn is_generation_placeholder(question: &str) -> bool {
    question.starts_with(GENERATION_ERROR_MARKER)
}

fn generation_placeholder(number: usize, axis_name: &str) -> String {
    format!("{} {} for {}", GENERATION_ERROR_MARKER, number, axis_name)
}

fn api_error_placeholder(number: usize, axis_name: &str) -> String {
    format!("{} - question {} ({})", API_ERROR_MARKER, number, axis_name)
}

pub struct QuestionGenerator {
    completion: Arc<dyn CompletionService>,
    scale: LikertScale,
}

impl QuestionGenerator {
    pub fn new(completion: Arc<dyn CompletionService>, scale: LikertScale) -> Self {
        Self { completion, scale }
    }

    pub fn build_prompt(&self, axis: &AxisDefinition) -> String {
        let total = axis.question_count().to_string();
        let sub_topic_count = axis.sub_topics.len();
        let general_count = axis.num_general_questions;

        let mut prompt = QUESTION_PROMPT_HEADER
            .replace("{axis_name}", &axis.name)
            .replace("{pole_left}", &axis.pole_left)
            .replace("{pole_right}", &axis.pole_right)
            .replace("{total}", &total)
            .replace("{max_label}", self.scale.max_label())
            .replace("{min_label}", self.scale.min_label());

        if sub_topic_count > 0 {
            let sub_topics = axis
                .sub_topics
                .iter()
                .map(|topic| format!("- {}", topic))
                .collect::<Vec<_>>()
                .join("\n");
            prompt.push('\n');
            prompt.push_str(
                &QUESTION_PROMPT_SUB_TOPICS
                    .replace("{count}", &sub_topic_count.to_string())
                    .replace("{sub_topics}", &sub_topics),
            );
        }

        if general_count > 0 {
            let template = if sub_topic_count > 0 {
                QUESTION_PROMPT_REMAINING_GENERAL
            } else {
                QUESTION_PROMPT_ONLY_GENERAL
            };
            prompt.push('\n');
            prompt.push_str(
                &template
                    .replace("{count}", &general_count.to_string())
                    .replace("{axis_name}", &axis.name),
            );
        }

        prompt.push('\n');
        prompt.push_str(&QUESTION_PROMPT_FOOTER.replace("{total}", &total));
        prompt
    }

    /// Always returns exactly `axis.question_count()` questions. A failed
    /// completion call yields API-error placeholders the caller must detect.
    pub async fn generate_questions(&self, axis: &AxisDefinition) -> Vec<String> {
        let expected = axis.question_count();
        if expected == 0 {
            return Vec::new();
        }

        log::info!(
            "Generating {} questions for axis: {}",
            expected,
            axis.name
        );

        let prompt = self.build_prompt(axis);
        match self.completion.complete(&prompt).await {
            Ok(response) => {
                let questions = fit_to_count(parse_questions(&response), expected, &axis.name);
                log::info!("Generated {} questions for {}", questions.len(), axis.name);
                questions
            }
            Err(e) => {
                log::error!("Error generating questions for {}: {}", axis.name, e);
                (1..=expected)
                    .map(|number| api_error_placeholder(number, &axis.name))
                    .collect()
            }
        }
    }
}

/// One statement per non-empty line, with surrounding whitespace and leading
/// bullet markers removed.
pub fn parse_questions(response: &str) -> Vec<String> {
    response
        .lines()
        .map(|line| BULLET_PREFIX.replace(line.trim(), "").trim().to_string())
        .filter(|line| !line.is_empty())
        .collect()
}

fn fit_to_count(mut questions: Vec<String>, expected: usize, axis_name: &str) -> Vec<String> {
    if questions.len() != expected {
        log::warn!(
            "Model returned {} questions instead of {} for {}",
            questions.len(),
            expected,
            axis_name
        );
        questions.truncate(expected);
        while questions.len() < expected {
            let number = questions.len() + 1;
            questions.push(generation_placeholder(number, axis_name));
        }
    }
    questions
}
