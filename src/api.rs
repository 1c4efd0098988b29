use crate::error::FormError;
use crate::materialize::{FieldMaterializer, FieldOption, FieldRecord};
use crate::parser::QuestionParser;
use crate::question::ClassifiedQuestion;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Caller-owned state of one form being built: the questions from the last
/// analysis, waiting to be generated, and the fields generated so far.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FormDraft {
    pending: Vec<ClassifiedQuestion>,
    fields: Vec<FieldRecord>,
}

impl FormDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fields(fields: Vec<FieldRecord>) -> Self {
        Self {
            pending: Vec::new(),
            fields,
        }
    }

    pub fn pending(&self) -> &[ClassifiedQuestion] {
        &self.pending
    }

    pub fn fields(&self) -> &[FieldRecord] {
        &self.fields
    }

    /// Replaces the pending questions with the analysis of `text`.
    /// Blank input leaves the draft untouched.
    pub fn analyze(&mut self, text: &str) -> &[ClassifiedQuestion] {
        if text.trim().is_empty() {
            return &self.pending;
        }
        self.pending = QuestionParser::parse(text);
        &self.pending
    }

    /// Moves every pending question into the field list. Returns how many
    /// fields were added.
    pub fn generate(&mut self) -> usize {
        let new_fields = FieldMaterializer::materialize(&self.pending, self.fields.len());
        let added = new_fields.len();
        self.fields.extend(new_fields);
        self.pending.clear();
        info!(added, total = self.fields.len(), "generated form fields");
        added
    }

    pub fn add_blank_field(&mut self) -> &FieldRecord {
        let order = self.fields.len();
        self.fields.push(FieldRecord::blank(order));
        &self.fields[order]
    }

    /// Replaces the field with the same id. Its position is kept; use
    /// [`FormDraft::move_field`] to reorder.
    pub fn update_field(&mut self, mut field: FieldRecord) -> Result<(), FormError> {
        let slot = self.field_mut(&field.id)?;
        field.order = slot.order;
        *slot = field;
        Ok(())
    }

    /// Sets a field's options from one label per non-blank line.
    pub fn set_options_from_lines(&mut self, id: &str, text: &str) -> Result<(), FormError> {
        let options: Vec<FieldOption> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(FieldOption::from_label)
            .collect();
        self.field_mut(id)?.options = Some(options);
        Ok(())
    }

    pub fn delete_field(&mut self, id: &str) -> Result<FieldRecord, FormError> {
        let index = self.position(id)?;
        let removed = self.fields.remove(index);
        self.renumber();
        debug!(id, "deleted field");
        Ok(removed)
    }

    /// Moves a field to `index`, clamped to the last slot.
    pub fn move_field(&mut self, id: &str, index: usize) -> Result<(), FormError> {
        let from = self.position(id)?;
        let field = self.fields.remove(from);
        let to = index.min(self.fields.len());
        self.fields.insert(to, field);
        self.renumber();
        Ok(())
    }

    /// Checks the field list before it is handed to storage. Options left on
    /// non-choice fields are dropped.
    pub fn finalize(&self) -> Result<Vec<FieldRecord>, FormError> {
        let mut seen: HashMap<&str, usize> = HashMap::new();
        for (position, field) in self.fields.iter().enumerate() {
            if field.name.is_empty() {
                warn!(position, label = %field.label, "rejecting field with empty name");
                return Err(FormError::EmptyFieldName {
                    order: position,
                    label: field.label.clone(),
                });
            }
            if let Some(first) = seen.insert(field.name.as_str(), position) {
                warn!(name = %field.name, "rejecting duplicate field name");
                return Err(FormError::DuplicateFieldName {
                    name: field.name.clone(),
                    first,
                    second: position,
                });
            }
        }
        let fields = self
            .fields
            .iter()
            .cloned()
            .map(|mut field| {
                if !field.field_type.is_choice() {
                    field.options = None;
                }
                field
            })
            .collect();
        info!(fields = self.fields.len(), "finalized form");
        Ok(fields)
    }

    pub fn to_json(&self) -> Result<String, FormError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, FormError> {
        Ok(serde_json::from_str(json)?)
    }

    fn position(&self, id: &str) -> Result<usize, FormError> {
        self.fields
            .iter()
            .position(|field| field.id == id)
            .ok_or_else(|| FormError::UnknownField { id: id.to_string() })
    }

    fn field_mut(&mut self, id: &str) -> Result<&mut FieldRecord, FormError> {
        let index = self.position(id)?;
        Ok(&mut self.fields[index])
    }

    fn renumber(&mut self) {
        for (order, field) in self.fields.iter_mut().enumerate() {
            field.order = order;
        }
    }
}

/// Runs the parser on a blocking worker after an optional pause. Dropping the
/// returned future discards the result.
pub async fn analyze_in_background(
    text: String,
    delay: Duration,
) -> Result<Vec<ClassifiedQuestion>, FormError> {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
    let questions = tokio::task::spawn_blocking(move || QuestionParser::parse(&text)).await?;
    Ok(questions)
}
