use serde::Serialize;
use std::fmt;

/// One failed field constraint, reported back in 400 bodies.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct ValidationIssue {
    pub field: String,
    pub message: String,
}

impl ValidationIssue {
    pub fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

#[derive(Debug)]
pub enum AppError {
    /// Payload failed schema validation. Never reaches the store.
    Validation(Vec<ValidationIssue>),
    /// Any fault from the persistence layer.
    Database(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Validation(issues) => {
                let fields: Vec<&str> = issues.iter().map(|i| i.field.as_str()).collect();
                write!(f, "Validation error: {}", fields.join(", "))
            }
            AppError::Database(msg) => write!(f, "Database error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<mongodb::error::Error> for AppError {
    fn from(err: mongodb::error::Error) -> Self {
        AppError::Database(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_display_lists_fields() {
        let err = AppError::Validation(vec![
            ValidationIssue::new("firstname", "firstname is a required field"),
            ValidationIssue::new("age", "age must be a positive number"),
        ]);
        assert_eq!(err.to_string(), "Validation error: firstname, age");
    }

    #[test]
    fn test_issue_serializes_field_and_message() {
        let issue = ValidationIssue::new("age", "age must be an integer");
        let json = serde_json::to_value(&issue).unwrap();
        assert_eq!(json["field"], "age");
        assert_eq!(json["message"], "age must be an integer");
    }
}
