use crate::question::{ClassifiedQuestion, FieldType};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const MAX_NAME_LEN: usize = 50;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FieldOption {
    pub value: String,
    pub label: String,
}

impl FieldOption {
    pub fn from_label(label: &str) -> Self {
        Self {
            value: slugify_option(label),
            label: label.to_string(),
        }
    }
}

/// A persistable form field, handed to the form editor and runtime.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FieldRecord {
    pub id: String,
    pub name: String,
    pub label: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub help_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<FieldOption>>,
    pub order: usize,
}

impl FieldRecord {
    /// An empty single-line text field at position `order`.
    pub fn blank(order: usize) -> Self {
        Self {
            id: new_field_id(),
            name: String::new(),
            label: String::new(),
            field_type: FieldType::Text,
            required: false,
            placeholder: None,
            help_text: None,
            options: None,
            order,
        }
    }
}

pub fn new_field_id() -> String {
    format!("field_{}", Uuid::new_v4().simple())
}

/// Machine name for a label: lowercase ASCII letters, digits and `_`, at most
/// [`MAX_NAME_LEN`] characters.
pub fn slugify_name(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut in_space = false;
    for ch in text.to_lowercase().chars() {
        if ch.is_whitespace() {
            in_space = true;
        } else if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            if in_space {
                slug.push('_');
                in_space = false;
            }
            slug.push(ch);
        }
    }
    if in_space {
        slug.push('_');
    }
    slug.truncate(MAX_NAME_LEN);
    slug
}

/// Option values only fold case and whitespace; punctuation is kept.
pub fn slugify_option(label: &str) -> String {
    label
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
}

pub struct FieldMaterializer;

impl FieldMaterializer {
    /// Materializes `questions` in order, numbering them from `existing_count`.
    pub fn materialize(
        questions: &[ClassifiedQuestion],
        existing_count: usize,
    ) -> Vec<FieldRecord> {
        questions
            .iter()
            .enumerate()
            .map(|(index, question)| Self::field_from_question(question, existing_count + index))
            .collect()
    }

    fn field_from_question(question: &ClassifiedQuestion, order: usize) -> FieldRecord {
        let options = question
            .options
            .as_ref()
            .filter(|_| question.field_type.is_choice())
            .map(|labels| labels.iter().map(|label| FieldOption::from_label(label)).collect());

        FieldRecord {
            id: new_field_id(),
            name: slugify_name(&question.text),
            label: question.text.clone(),
            field_type: question.field_type,
            required: question.required,
            placeholder: None,
            help_text: None,
            options,
            order,
        }
    }
}
