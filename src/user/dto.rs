use serde::{Deserialize, Serialize};
use time::Date;

use super::codes::{AccessLevel, Gender};
use super::record::UserRecord;
use super::validation::{normalize, validate, ValidationRules};
use super::wire::lenient_i32;
use crate::error::{UserError, ValidationError};

time::serde::format_description!(iso_date, Date, "[year]-[month]-[day]");

/// Public part of the user, safe to hand to other components.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicUser {
    pub id: i32,
    pub forename: String,
    pub surname: String,
    pub full_name: String,
    pub gender: Option<Gender>,
    #[serde(with = "iso_date::option")]
    pub birth_date: Option<Date>,
    pub place_of_birth: String,
    pub email: String,
    pub access_level: Option<AccessLevel>,
}

impl From<&UserRecord> for PublicUser {
    fn from(u: &UserRecord) -> Self {
        Self {
            id: u.id,
            forename: u.forename.clone(),
            surname: u.surname.clone(),
            full_name: u.full_name(),
            gender: u.gender(),
            birth_date: u.birth_date(),
            place_of_birth: u.place_of_birth.clone(),
            email: u.email.clone(),
            access_level: u.access_level(),
        }
    }
}

impl UserRecord {
    pub fn public_view(&self) -> PublicUser {
        PublicUser::from(self)
    }
}

/// Input of the self-registration form.
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterRequest {
    pub forename: String,
    pub surname: String,
    #[serde(default, deserialize_with = "lenient_i32")]
    pub gender_id: i32,
    #[serde(rename = "dateOfBirth_dayOfMonth", deserialize_with = "lenient_i32")]
    pub birth_day: i32,
    #[serde(rename = "dateOfBirth_month", deserialize_with = "lenient_i32")]
    pub birth_month: i32,
    #[serde(rename = "dateOfBirth_year", deserialize_with = "lenient_i32")]
    pub birth_year: i32,
    #[serde(default, rename = "placeOfBirth")]
    pub place_of_birth: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegisterRequest {
    /// Builds a normalized, validated record. Self-registered users never
    /// get elevated access and have no id until the server assigns one.
    pub fn into_record(self, rules: &ValidationRules, today: Date) -> Result<UserRecord, UserError> {
        if self.password != self.confirm_password {
            return Err(ValidationError::PasswordMismatch.into());
        }

        let mut user = UserRecord::new(
            0,
            self.forename,
            self.surname,
            self.gender_id,
            self.birth_day,
            self.birth_month,
            self.birth_year,
            self.place_of_birth,
            self.email,
            self.password,
            AccessLevel::User.code(),
        );
        normalize(&mut user);
        validate(&user, rules, today)?;
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    fn request() -> RegisterRequest {
        RegisterRequest {
            forename: "  mary-jane ".into(),
            surname: "o'neil".into(),
            gender_id: 1,
            birth_day: 14,
            birth_month: 2,
            birth_year: 1985,
            place_of_birth: " new york ".into(),
            email: " Mary@Example.COM ".into(),
            password: "s3cret".into(),
            confirm_password: "s3cret".into(),
        }
    }

    #[test]
    fn public_view_drops_password() {
        let user = UserRecord::new(3, "Jane", "Doe", 1, 5, 6, 1990, "London", "jane@x.com", "hunter2", 2);
        let view = user.public_view();
        assert_eq!(view.full_name, "Jane Doe");
        assert_eq!(view.gender, Some(Gender::Female));
        assert_eq!(view.access_level, Some(AccessLevel::Admin));

        let json = serde_json::to_string(&view).unwrap();
        assert!(json.contains("\"birth_date\":\"1990-06-05\""));
        assert!(json.contains("jane@x.com"));
        assert!(!json.contains("hunter2"));
        assert!(!json.contains("password"));
    }

    #[test]
    fn public_view_of_unset_record_has_nulls() {
        let mut user = UserRecord::default();
        user.gender_id = 9;
        user.is_admin = 9;
        let json = serde_json::to_value(user.public_view()).unwrap();
        assert!(json["birth_date"].is_null());
        assert!(json["gender"].is_null());
        assert!(json["access_level"].is_null());
    }

    #[test]
    fn register_builds_normalized_record() {
        let user = request()
            .into_record(&ValidationRules::default(), date!(2024 - 01 - 01))
            .expect("valid registration");
        assert_eq!(user.id, 0);
        assert_eq!(user.is_admin, 0);
        assert_eq!(user.forename, "Mary-Jane");
        assert_eq!(user.surname, "O'neil");
        assert_eq!(user.place_of_birth, "New York");
        assert_eq!(user.email, "mary@example.com");
        assert_eq!(user.password, "s3cret");
        assert_eq!(user.birth_date(), Some(date!(1985 - 02 - 14)));
    }

    #[test]
    fn register_rejects_mismatched_confirmation() {
        let mut req = request();
        req.confirm_password = "other".into();
        let err = req
            .into_record(&ValidationRules::default(), date!(2024 - 01 - 01))
            .unwrap_err();
        assert!(matches!(err, UserError::Invalid(ValidationError::PasswordMismatch)));
    }

    #[test]
    fn register_surfaces_validation_errors() {
        let mut req = request();
        req.email = "nope".into();
        let err = req
            .into_record(&ValidationRules::default(), date!(2024 - 01 - 01))
            .unwrap_err();
        assert!(matches!(err, UserError::Invalid(ValidationError::InvalidEmail)));
    }

    #[test]
    fn register_request_decodes_form_keys() {
        let req: RegisterRequest = serde_json::from_str(
            r#"{"forename":"A","surname":"B","dateOfBirth_dayOfMonth":"1",
                "dateOfBirth_month":1,"dateOfBirth_year":"1970","email":"a@b.co",
                "password":"x","confirm_password":"x"}"#,
        )
        .unwrap();
        assert_eq!(req.gender_id, 0);
        assert_eq!(req.place_of_birth, "");
        assert_eq!((req.birth_day, req.birth_month, req.birth_year), (1, 1, 1970));

        let req: RegisterRequest = serde_json::from_str(
            r#"{"forename":"A","surname":"B","gender_id":"1","placeOfBirth":"Oslo",
                "dateOfBirth_dayOfMonth":2,"dateOfBirth_month":3,"dateOfBirth_year":1971,
                "email":"a@b.co","password":"x","confirm_password":"x"}"#,
        )
        .unwrap();
        assert_eq!(req.gender_id, 1);
        assert_eq!(req.place_of_birth, "Oslo");
    }
}
