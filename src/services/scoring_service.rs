use std::collections::{BTreeMap, HashMap};

use crate::models::domain::{AxisDefinition, AxisScore, LikertScale};

pub const NEUTRAL_PERCENT: f64 = 50.0;

pub struct ScoringService;

impl ScoringService {
    /// One score per axis, in definition order. Unanswered axes score neutral.
    pub fn score_axes(
        answers: &HashMap<String, BTreeMap<usize, String>>,
        axes: &[AxisDefinition],
        scale: &LikertScale,
    ) -> Vec<AxisScore> {
        axes.iter()
            .map(|axis| AxisScore {
                axis_name: axis.name.clone(),
                pole_left: axis.pole_left.clone(),
                pole_right: axis.pole_right.clone(),
                value_percent: Self::axis_percent(&axis.name, answers.get(&axis.name), scale),
            })
            .collect()
    }

    fn axis_percent(
        axis_name: &str,
        answers: Option<&BTreeMap<usize, String>>,
        scale: &LikertScale,
    ) -> f64 {
        let Some(answers) = answers.filter(|a| !a.is_empty()) else {
            log::warn!("No answers found for axis {}", axis_name);
            return NEUTRAL_PERCENT;
        };

        let values: Vec<u8> = answers
            .iter()
            .filter_map(|(index, label)| {
                let value = scale.value_of(label);
                if value.is_none() {
                    log::warn!(
                        "Invalid answer '{}' at {}[{}], skipping",
                        label,
                        axis_name,
                        index
                    );
                }
                value
            })
            .collect();

        if values.is_empty() {
            log::warn!("No valid answers for axis {}", axis_name);
            return NEUTRAL_PERCENT;
        }

        let mean = values.iter().map(|v| f64::from(*v)).sum::<f64>() / values.len() as f64;
        let percent = (((mean - 1.0) / 4.0) * 100.0).clamp(0.0, 100.0);
        let rounded = (percent * 10.0).round_ties_even() / 10.0;
        log::info!(
            "Axis: {}, Avg Score: {:.2}, Percent: {:.1}%",
            axis_name,
            mean,
            rounded
        );
        rounded
    }
}
