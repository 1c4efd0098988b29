use crate::question::FieldType;
use tracing::trace;

pub const BASE_CONFIDENCE: f32 = 0.5;
pub const REQUIRED_BONUS: f32 = 0.1;
pub const OPTIONS_BONUS: f32 = 0.2;

/// Outcome of running the keyword rules over one line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classification {
    pub field_type: FieldType,
    pub required: bool,
    pub confidence: f32,
}

pub struct RuleEngine;

impl RuleEngine {
    /// Classifies a trimmed, non-empty line.
    ///
    /// Every type rule runs; a later match overwrites the field type of an
    /// earlier one. The type score only ever rises to the highest matched
    /// rule, and the required bonus is added on top.
    pub fn classify(line: &str) -> Classification {
        let lower = line.to_lowercase();
        let mut field_type = FieldType::Text;
        let mut score = BASE_CONFIDENCE;
        let mut bonus = 0.0f32;

        let mut apply = |ty: FieldType, rule_score: f32| {
            field_type = ty;
            score = score.max(rule_score);
        };

        // Rule 1: Required marker
        let required = line.contains('*') || lower.contains("required");
        if required {
            bonus += REQUIRED_BONUS;
        }

        // Rule 2: Choice keywords; the first matching flavour wins
        if contains_any(&lower, &["choose", "select", "pick"]) {
            if contains_any(&lower, &["one", "single"]) {
                apply(FieldType::Radio, 0.8);
            } else if contains_any(&lower, &["multiple", "many"]) {
                apply(FieldType::Checkbox, 0.8);
            } else {
                apply(FieldType::Select, 0.7);
            }
        }

        // Rule 3: Yes/no
        if lower.contains("yes") && lower.contains("no") {
            apply(FieldType::Yesno, 0.9);
        }

        // Rule 4: Email
        if contains_any(&lower, &["email", "e-mail"]) {
            apply(FieldType::Email, 0.9);
        }

        // Rule 5: Phone
        if contains_any(&lower, &["phone", "mobile", "cell"]) {
            apply(FieldType::Phone, 0.8);
        }

        // Rule 6: Date
        if contains_any(&lower, &["date", "when"]) {
            apply(FieldType::Date, 0.8);
        }

        // Rule 7: Number
        if contains_any(&lower, &["how many", "number", "age"]) {
            apply(FieldType::Number, 0.7);
        }

        // Rule 8: Long text
        if contains_any(&lower, &["describe", "explain", "comment"]) {
            apply(FieldType::Textarea, 0.7);
        }

        let classification = Classification {
            field_type,
            required,
            confidence: score + bonus,
        };
        trace!(
            field_type = %classification.field_type,
            required,
            confidence = classification.confidence,
            "classified line"
        );
        classification
    }
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}
