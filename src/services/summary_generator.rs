use std::{
    collections::{BTreeMap, HashMap},
    fmt::Write as _,
    sync::Arc,
};

use crate::{
    constants::prompts::{
        SUMMARY_ERROR_PREFIX, SUMMARY_FALLBACK_MESSAGE, SUMMARY_PREAMBLES, SUMMARY_PROMPT,
    },
    models::domain::{AxisDefinition, LikertScale},
    services::completion_service::CompletionService,
};

pub const MIN_SUMMARY_CHARS: usize = 30;
const QUESTION_EXCERPT_CHARS: usize = 50;

pub struct SummaryGenerator {
    completion: Arc<dyn CompletionService>,
    scale: LikertScale,
}

impl SummaryGenerator {
    pub fn new(completion: Arc<dyn CompletionService>, scale: LikertScale) -> Self {
        Self { completion, scale }
    }

    /// Answers grouped by axis, each line carrying the numeric value, the raw
    /// label and a shortened question text.
    pub fn format_answers(
        &self,
        answers: &HashMap<String, BTreeMap<usize, String>>,
        questions: &HashMap<String, Vec<String>>,
        axes: &[AxisDefinition],
    ) -> String {
        let mut transcript = String::new();

        for axis in axes {
            let Some(axis_answers) = answers.get(&axis.name).filter(|a| !a.is_empty()) else {
                continue;
            };
            let axis_questions = questions.get(&axis.name);

            let _ = writeln!(transcript, "Oś: {}", axis.name);
            for (index, label) in axis_answers {
                let value = match self.scale.value_of(label) {
                    Some(value) => value.to_string(),
                    None => {
                        log::warn!("Invalid answer '{}' at {}[{}]", label, axis.name, index);
                        "?".to_string()
                    }
                };
                let question = axis_questions
                    .and_then(|q| q.get(*index))
                    .map(|q| q.chars().take(QUESTION_EXCERPT_CHARS).collect::<String>())
                    .unwrap_or_else(|| format!("(Pytanie {})", index + 1));

                let _ = writeln!(
                    transcript,
                    "  Pytanie {}: Odpowiedź {} ({}) - {}...",
                    index + 1,
                    value,
                    label,
                    question
                );
            }
            transcript.push('\n');
        }

        transcript
    }

    pub fn build_prompt(
        &self,
        answers: &HashMap<String, BTreeMap<usize, String>>,
        questions: &HashMap<String, Vec<String>>,
        axes: &[AxisDefinition],
    ) -> String {
        SUMMARY_PROMPT.replace("{answers}", &self.format_answers(answers, questions, axes))
    }

    /// Never fails: a completion error is folded into the returned text.
    pub async fn generate_summary(
        &self,
        answers: &HashMap<String, BTreeMap<usize, String>>,
        questions: &HashMap<String, Vec<String>>,
        axes: &[AxisDefinition],
    ) -> String {
        log::info!("Generating summary");
        let prompt = self.build_prompt(answers, questions, axes);

        match self.completion.complete(&prompt).await {
            Ok(response) => clean_summary(&response, axes),
            Err(e) => {
                log::error!("Error generating summary: {}", e);
                format!("{}: {}", SUMMARY_ERROR_PREFIX, e)
            }
        }
    }
}

pub fn clean_summary(response: &str, axes: &[AxisDefinition]) -> String {
    let mut summary = response.trim().to_string();

    let lowered = summary.to_lowercase();
    if SUMMARY_PREAMBLES.iter().any(|p| lowered.starts_with(p)) {
        log::warn!("Summary starts with a preamble");
        let lines: Vec<&str> = summary.lines().collect();
        if lines.len() > 1 {
            summary = lines[1..].join("\n").trim().to_string();
        }
    }

    if summary.chars().count() < MIN_SUMMARY_CHARS {
        log::warn!("Summary is too short or empty");
        return SUMMARY_FALLBACK_MESSAGE.to_string();
    }

    if axes.iter().any(|axis| summary.contains(&axis.name)) {
        log::warn!("Summary mentions axis names despite instructions");
    }

    summary
}
