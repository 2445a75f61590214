use serde::Serialize;

use crate::constants::axes::LIKERT_LABELS;

pub const LIKERT_POINTS: usize = 5;

/// Fixed five-point agreement scale. Position `i` carries value `i + 1`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LikertScale {
    labels: [&'static str; LIKERT_POINTS],
}

impl Default for LikertScale {
    fn default() -> Self {
        Self {
            labels: LIKERT_LABELS,
        }
    }
}

impl LikertScale {
    pub fn labels(&self) -> &[&'static str; LIKERT_POINTS] {
        &self.labels
    }

    pub fn label(&self, position: usize) -> Option<&'static str> {
        self.labels.get(position).copied()
    }

    pub fn min_label(&self) -> &'static str {
        self.labels[0]
    }

    pub fn max_label(&self) -> &'static str {
        self.labels[LIKERT_POINTS - 1]
    }

    /// Maps a label to its 1-5 value; `None` for anything not on the scale.
    pub fn value_of(&self, label: &str) -> Option<u8> {
        self.labels
            .iter()
            .position(|l| *l == label)
            .map(|position| position as u8 + 1)
    }

    pub fn contains(&self, label: &str) -> bool {
        self.value_of(label).is_some()
    }
}
