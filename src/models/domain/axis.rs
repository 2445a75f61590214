use serde::{Deserialize, Serialize};

/// One ideological dimension with its two poles and the sub-topics its
/// questions must cover.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct AxisDefinition {
    pub name: String,
    pub pole_left: String,  // disagreement (scale value 1)
    pub pole_right: String, // agreement (scale value 5)
    pub sub_topics: Vec<String>,
    pub num_general_questions: usize,
}

impl AxisDefinition {
    pub fn new(
        name: &str,
        pole_left: &str,
        pole_right: &str,
        sub_topics: &[&str],
        num_general_questions: usize,
    ) -> Self {
        AxisDefinition {
            name: name.to_string(),
            pole_left: pole_left.to_string(),
            pole_right: pole_right.to_string(),
            sub_topics: sub_topics.iter().map(|s| s.to_string()).collect(),
            num_general_questions,
        }
    }

    pub fn question_count(&self) -> usize {
        self.sub_topics.len() + self.num_general_questions
    }
}

/// Sum of question counts over every axis.
pub fn total_question_count(axes: &[AxisDefinition]) -> usize {
    axes.iter().map(AxisDefinition::question_count).sum()
}

/// Axis position derived from recorded answers. Never stored.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AxisScore {
    pub axis_name: String,
    pub pole_left: String,
    pub pole_right: String,
    pub value_percent: f64,
}
