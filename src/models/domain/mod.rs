pub mod axis;
pub mod likert;
pub mod quiz_session;
pub use axis::{AxisDefinition, AxisScore};
pub use likert::LikertScale;
pub use quiz_session::{QuizSession, QuizState};
