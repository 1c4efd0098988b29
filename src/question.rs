use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Input control a form runtime renders for a field.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Text,
    Textarea,
    Number,
    Email,
    Phone,
    Date,
    Select,
    Radio,
    Checkbox,
    Yesno,
}

impl FieldType {
    pub const ALL: [FieldType; 10] = [
        FieldType::Text,
        FieldType::Textarea,
        FieldType::Number,
        FieldType::Email,
        FieldType::Phone,
        FieldType::Date,
        FieldType::Select,
        FieldType::Radio,
        FieldType::Checkbox,
        FieldType::Yesno,
    ];

    /// Choice types are the only ones that carry an option list.
    pub fn is_choice(self) -> bool {
        matches!(self, FieldType::Select | FieldType::Radio | FieldType::Checkbox)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FieldType::Text => "text",
            FieldType::Textarea => "textarea",
            FieldType::Number => "number",
            FieldType::Email => "email",
            FieldType::Phone => "phone",
            FieldType::Date => "date",
            FieldType::Select => "select",
            FieldType::Radio => "radio",
            FieldType::Checkbox => "checkbox",
            FieldType::Yesno => "yesno",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for FieldType {
    type Err = crate::error::FormError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let wanted = value.trim().to_ascii_lowercase();
        FieldType::ALL
            .into_iter()
            .find(|ty| ty.as_str() == wanted)
            .ok_or_else(|| crate::error::FormError::UnknownFieldType(value.to_string()))
    }
}

/// One inferred question, produced by the parser for a single input line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClassifiedQuestion {
    pub text: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    /// Raw evidence score. Not clamped; may exceed 1.0 when every bonus applies.
    pub confidence: f32,
}

impl ClassifiedQuestion {
    /// Confidence as a whole percentage, clamped to 0..=100 for display.
    pub fn confidence_percent(&self) -> u8 {
        (self.confidence.clamp(0.0, 1.0) * 100.0).round() as u8
    }

    pub fn options(&self) -> &[String] {
        self.options.as_deref().unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_type_names_round_trip() {
        for ty in FieldType::ALL {
            assert_eq!(ty.to_string().parse::<FieldType>().unwrap(), ty);
            assert_eq!(serde_json::to_value(ty).unwrap(), ty.as_str());
        }
        assert_eq!(" YesNo ".parse::<FieldType>().unwrap(), FieldType::Yesno);
        assert!("signature".parse::<FieldType>().is_err());
    }

    #[test]
    fn percent_is_clamped_for_display() {
        let question = ClassifiedQuestion {
            text: "Pick one (A, B) *".into(),
            field_type: FieldType::Radio,
            required: true,
            options: Some(vec!["A".into(), "B".into()]),
            confidence: 1.1,
        };
        assert_eq!(question.confidence_percent(), 100);
    }
}
