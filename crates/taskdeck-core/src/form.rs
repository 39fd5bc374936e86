use std::collections::BTreeMap;
use std::fmt;

use taskdeck_model::{NewTask, TaskDraft};

/// A form field of the add/edit dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Field {
    Title,
    Description,
    DueDate,
    Status,
}

impl Field {
    pub const ALL: [Field; 4] = [
        Field::Title,
        Field::Description,
        Field::DueDate,
        Field::Status,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Field::Title => "Title",
            Field::Description => "Description",
            Field::DueDate => "Due Date",
            Field::Status => "Status",
        }
    }

    /// The fixed inline message shown when the field is missing.
    pub fn required_message(&self) -> &'static str {
        match self {
            Field::Title => "Title is required",
            Field::Description => "Description is required",
            Field::DueDate => "Due Date is required",
            Field::Status => "Status is required",
        }
    }
}

/// Per-field validation messages, ordered by field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    entries: BTreeMap<Field, String>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.entries.get(&field).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.entries.iter().map(|(field, msg)| (*field, msg.as_str()))
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }

    fn require(&mut self, field: Field) {
        self.entries.insert(field, field.required_message().to_string());
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (_, msg) in self.entries.iter() {
            if !first {
                f.write_str("; ")?;
            }
            f.write_str(msg)?;
            first = false;
        }
        Ok(())
    }
}

/// Presence check over all four required fields.
///
/// Runs at submit time only; empty means the draft may commit.
pub fn validate(draft: &TaskDraft) -> FieldErrors {
    let mut errors = FieldErrors::default();
    if draft.title.is_empty() {
        errors.require(Field::Title);
    }
    if draft.description.is_empty() {
        errors.require(Field::Description);
    }
    if draft.due_date.is_empty() {
        errors.require(Field::DueDate);
    }
    if draft.status.is_none() {
        errors.require(Field::Status);
    }
    errors
}

/// The submit gate: turn a draft into a committable payload or report what
/// is missing.
pub fn accept(draft: TaskDraft) -> Result<NewTask, FieldErrors> {
    let errors = validate(&draft);
    if let (true, Some(status)) = (errors.is_empty(), draft.status) {
        Ok(NewTask {
            title: draft.title,
            description: draft.description,
            due_date: draft.due_date,
            status,
        })
    } else {
        Err(errors)
    }
}
