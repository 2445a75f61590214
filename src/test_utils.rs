#[cfg(test)]
pub mod fixtures {
    use crate::models::domain::AxisDefinition;

    /// Two axes with two and one questions.
    pub fn two_axes() -> Vec<AxisDefinition> {
        vec![
            AxisDefinition::new("Economy", "Equality", "Market", &["Taxes"], 1),
            AxisDefinition::new("Order", "Liberty", "Security", &[], 1),
        ]
    }

    pub fn numbered_questions(count: usize) -> String {
        (1..=count)
            .map(|n| format!("- Statement number {}", n))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
pub mod test_helpers {
    use actix_web::http::StatusCode;

    /// Asserts that a status code represents an error (4xx or 5xx)
    pub fn assert_error_status(status: StatusCode) {
        assert!(
            status.is_client_error() || status.is_server_error(),
            "Expected error status, got: {}",
            status
        );
    }

    /// Asserts that a status code represents success (2xx)
    pub fn assert_success_status(status: StatusCode) {
        assert!(
            status.is_success(),
            "Expected success status, got: {}",
            status
        );
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use crate::services::question_generator::parse_questions;

    #[test]
    fn test_fixtures_two_axes() {
        let axes = two_axes();
        assert_eq!(axes.len(), 2);
        assert_eq!(axes[0].question_count(), 2);
        assert_eq!(axes[1].question_count(), 1);
    }

    #[test]
    fn test_fixtures_numbered_questions_parse_cleanly() {
        let parsed = parse_questions(&numbered_questions(3));
        assert_eq!(parsed.len(), 3);
        assert_eq!(parsed[2], "Statement number 3");
    }
}
