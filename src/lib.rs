pub mod api;
pub mod config;
pub mod error;
pub mod materialize;
pub mod parser;
pub mod question;
pub mod rules;

pub use api::{analyze_in_background, FormDraft};
pub use error::FormError;
pub use materialize::{FieldOption, FieldRecord};
pub use question::{ClassifiedQuestion, FieldType};

/// Classifies every non-blank line of `raw_text`, in order.
pub fn parse(raw_text: &str) -> Vec<ClassifiedQuestion> {
    parser::QuestionParser::parse(raw_text)
}

/// Turns classified questions into field records numbered from `existing_count`.
pub fn materialize(questions: &[ClassifiedQuestion], existing_count: usize) -> Vec<FieldRecord> {
    materialize::FieldMaterializer::materialize(questions, existing_count)
}
