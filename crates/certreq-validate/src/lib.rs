mod schema;
mod validator;

pub use schema::{
    FieldKind, FieldRule, RecordSchema, account_schema, enrollment_schema, request_form_schema,
    subject_schema,
};
pub use validator::{
    ACCEPTED_FILE_EXTENSIONS, BatchValidation, FieldErrors, validate_batch, validate_record,
};
