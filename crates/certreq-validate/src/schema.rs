//! Declarative field schemas for the bulk-import record shapes.

/// Shape constraint applied to a present, non-empty value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Any non-empty text.
    Text,
    /// A plausible `local@domain` address.
    Email,
    /// A calendar date in `YYYY-MM-DD` form.
    Date,
    /// A file reference with an accepted extension.
    FileRef,
}

/// One field's validation rule.
#[derive(Debug, Clone)]
pub struct FieldRule {
    pub name: String,
    pub kind: FieldKind,
    pub required: bool,
}

/// Ordered set of field rules for one record shape.
#[derive(Debug, Clone, Default)]
pub struct RecordSchema {
    fields: Vec<FieldRule>,
}

impl RecordSchema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a required field.
    pub fn field(mut self, name: &str, kind: FieldKind) -> Self {
        self.fields.push(FieldRule {
            name: name.to_string(),
            kind,
            required: true,
        });
        self
    }

    /// Add an optional field; its shape is still checked when a value is present.
    pub fn optional(mut self, name: &str, kind: FieldKind) -> Self {
        self.fields.push(FieldRule {
            name: name.to_string(),
            kind,
            required: false,
        });
        self
    }

    pub fn fields(&self) -> &[FieldRule] {
        &self.fields
    }
}

/// Schema for account bulk-create rows.
pub fn account_schema() -> RecordSchema {
    RecordSchema::new()
        .field("name", FieldKind::Text)
        .field("email", FieldKind::Email)
        .field("password", FieldKind::Text)
        .field("employee_id", FieldKind::Text)
}

/// Schema for subject bulk-create rows.
pub fn subject_schema() -> RecordSchema {
    RecordSchema::new()
        .field("name", FieldKind::Text)
        .field("subject_code", FieldKind::Text)
        .field("teacher_id", FieldKind::Text)
}

/// Schema for enrollment rows.
pub fn enrollment_schema() -> RecordSchema {
    RecordSchema::new()
        .field("email", FieldKind::Email)
        .field("course_code", FieldKind::Text)
}

/// Schema for the single-request form (subject code/name, due date, roster file).
pub fn request_form_schema() -> RecordSchema {
    RecordSchema::new()
        .field("subject_code", FieldKind::Text)
        .field("name", FieldKind::Text)
        .field("due_date", FieldKind::Date)
        .field("file", FieldKind::FileRef)
}
