pub mod axes;
pub mod prompts;
