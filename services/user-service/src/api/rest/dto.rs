use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::domain::model::{NewUser, User, UserUpdate};

/// REST representation of a user.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub age: i32,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

/// Body of `POST /api/users` and `PUT /api/users/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct UserReq {
    #[validate(length(min = 2))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    /// Defaults to 0 when omitted.
    #[serde(default)]
    #[validate(range(min = 0, max = 120))]
    #[schema(minimum = 0, maximum = 120, default = 0)]
    pub age: i32,
}

impl From<User> for UserDto {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            name: u.name,
            email: u.email,
            age: u.age,
            created_at: u.created_at,
            updated_at: u.updated_at,
        }
    }
}

impl From<UserReq> for NewUser {
    fn from(req: UserReq) -> Self {
        Self {
            name: req.name,
            email: req.email,
            age: req.age,
        }
    }
}

impl From<UserReq> for UserUpdate {
    fn from(req: UserReq) -> Self {
        Self {
            name: req.name,
            email: req.email,
            age: req.age,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn age_defaults_to_zero() {
        let req: UserReq =
            serde_json::from_str(r#"{"name":"Bo","email":"bo@example.com"}"#).unwrap();
        assert_eq!(req.age, 0);
        assert!(req.validate().is_ok());
    }

    #[test]
    fn rejects_bad_email_and_age() {
        let req = UserReq {
            name: "Bo".to_owned(),
            email: "not-an-email".to_owned(),
            age: 121,
        };
        let errs = req.validate().unwrap_err();
        let fields = errs.field_errors();
        assert!(fields.contains_key("email"));
        assert!(fields.contains_key("age"));
        assert!(!fields.contains_key("name"));
    }

    #[test]
    fn one_letter_name_is_too_short() {
        let req = UserReq {
            name: "B".to_owned(),
            email: "b@example.com".to_owned(),
            age: 120,
        };
        assert!(req.validate().unwrap_err().field_errors().contains_key("name"));
    }
}
