use crate::utils::ValidationIssue;
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Document in the "users" collection.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub firstname: String,
    pub lastname: String,
    pub age: i64,
    pub gender: String,
    pub country: String,
}

/// Candidate User record as received over HTTP. All fields optional at the
/// type level so that a missing or mistyped field surfaces as a validation
/// issue instead of a bare deserialization failure. `age` is accepted as
/// any JSON number and checked for integrality during validation.
#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct UserPayload {
    pub firstname: Option<String>,
    pub lastname: Option<String>,
    pub age: Option<f64>,
    pub gender: Option<String>,
    pub country: Option<String>,
}

impl UserPayload {
    /// Check every field constraint: presence, non-empty strings, and a
    /// strictly positive whole-number age. Runs before create and before
    /// update; nothing reaches the store when this fails.
    pub fn validate(&self) -> Result<(), Vec<ValidationIssue>> {
        let mut issues = Vec::new();

        check_string("firstname", &self.firstname, &mut issues);
        check_string("lastname", &self.lastname, &mut issues);

        match self.age {
            None => issues.push(ValidationIssue::new("age", "age is a required field")),
            Some(age) if age.fract() != 0.0 => {
                issues.push(ValidationIssue::new("age", "age must be an integer"))
            }
            Some(age) if age <= 0.0 => {
                issues.push(ValidationIssue::new("age", "age must be a positive number"))
            }
            // Anything at or beyond i64::MAX cannot be stored as supplied
            Some(age) if age >= i64::MAX as f64 => {
                issues.push(ValidationIssue::new("age", "age is out of range"))
            }
            Some(_) => {}
        }

        check_string("gender", &self.gender, &mut issues);
        check_string("country", &self.country, &mut issues);

        if issues.is_empty() {
            Ok(())
        } else {
            Err(issues)
        }
    }

    /// Build the document to persist. Only call after `validate` succeeded;
    /// the store assigns `_id` on insert.
    pub fn into_user(self) -> User {
        User {
            id: None,
            firstname: self.firstname.unwrap_or_default(),
            lastname: self.lastname.unwrap_or_default(),
            age: self.age.unwrap_or_default() as i64,
            gender: self.gender.unwrap_or_default(),
            country: self.country.unwrap_or_default(),
        }
    }
}

fn check_string(field: &str, value: &Option<String>, issues: &mut Vec<ValidationIssue>) {
    match value {
        None => issues.push(ValidationIssue::new(
            field,
            format!("{} is a required field", field),
        )),
        Some(s) if s.trim().is_empty() => issues.push(ValidationIssue::new(
            field,
            format!("{} must not be empty", field),
        )),
        Some(_) => {}
    }
}

/// Wire shape returned to clients - `_id` exposed as a hex string `id`.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct UserResponse {
    pub id: String,
    pub firstname: String,
    pub lastname: String,
    pub age: i64,
    pub gender: String,
    pub country: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.map(|oid| oid.to_hex()).unwrap_or_default(),
            firstname: user.firstname,
            lastname: user.lastname,
            age: user.age,
            gender: user.gender,
            country: user.country,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(age: Option<f64>) -> UserPayload {
        UserPayload {
            firstname: Some("Ann".to_string()),
            lastname: Some("Lee".to_string()),
            age,
            gender: Some("F".to_string()),
            country: Some("US".to_string()),
        }
    }

    #[test]
    fn test_valid_payload_passes() {
        assert!(payload(Some(30.0)).validate().is_ok());
    }

    #[test]
    fn test_missing_field_rejected() {
        let mut p = payload(Some(30.0));
        p.firstname = None;
        let issues = p.validate().unwrap_err();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].field, "firstname");
    }

    #[test]
    fn test_empty_string_rejected() {
        let mut p = payload(Some(30.0));
        p.country = Some("  ".to_string());
        let issues = p.validate().unwrap_err();
        assert_eq!(issues[0].field, "country");
    }

    #[test]
    fn test_negative_and_zero_age_rejected() {
        assert!(payload(Some(-1.0)).validate().is_err());
        assert!(payload(Some(0.0)).validate().is_err());
    }

    #[test]
    fn test_huge_age_rejected() {
        let issues = payload(Some(1e300)).validate().unwrap_err();
        assert_eq!(issues[0].field, "age");
        assert_eq!(issues[0].message, "age is out of range");
        assert!(payload(Some(i64::MAX as f64)).validate().is_err());
    }

    #[test]
    fn test_fractional_age_rejected() {
        let issues = payload(Some(30.5)).validate().unwrap_err();
        assert_eq!(issues[0].field, "age");
        assert_eq!(issues[0].message, "age must be an integer");
    }

    #[test]
    fn test_every_issue_collected() {
        let p = UserPayload {
            firstname: None,
            lastname: None,
            age: None,
            gender: None,
            country: None,
        };
        assert_eq!(p.validate().unwrap_err().len(), 5);
    }

    #[test]
    fn test_into_user_carries_fields() {
        let user = payload(Some(30.0)).into_user();
        assert!(user.id.is_none());
        assert_eq!(user.firstname, "Ann");
        assert_eq!(user.age, 30);
    }

    #[test]
    fn test_response_exposes_hex_id() {
        let oid = ObjectId::new();
        let user = User {
            id: Some(oid),
            firstname: "Ann".to_string(),
            lastname: "Lee".to_string(),
            age: 30,
            gender: "F".to_string(),
            country: "US".to_string(),
        };
        let resp = UserResponse::from(user);
        assert_eq!(resp.id, oid.to_hex());
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["age"], 30);
        assert!(json.get("_id").is_none());
    }

    #[test]
    fn test_payload_tolerates_missing_json_fields() {
        let p: UserPayload = serde_json::from_str(r#"{"firstname":"Ann"}"#).unwrap();
        assert!(p.validate().is_err());
    }
}
