use lazy_static::lazy_static;
use regex::Regex;
use time::Date;
use tracing::debug;

use super::codes::{AccessLevel, Gender};
use super::record::UserRecord;
use crate::error::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationRules {
    pub min_password_len: usize,
}

impl Default for ValidationRules {
    fn default() -> Self {
        Self { min_password_len: 1 }
    }
}

pub fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

/// Capitalizes the first letter after each delimiter. The rest of each word is
/// left as typed so names like "McDonald" survive.
fn title_case(s: &str, delimiters: &[char]) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;
    for c in s.chars() {
        if at_word_start {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        at_word_start = delimiters.contains(&c);
    }
    out
}

/// Tidies free-text input the way the registration form does before saving.
/// The password is never touched.
pub fn normalize(user: &mut UserRecord) {
    user.forename = title_case(user.forename.trim(), &[' ', '-']);
    user.surname = title_case(user.surname.trim(), &[' ', '-']);
    user.place_of_birth = title_case(user.place_of_birth.trim(), &[' ']);
    user.email = user.email.trim().to_lowercase();
}

/// Checks a record before it is trusted, returning the first failure.
///
/// `today` bounds the birth date; pass the caller's current date.
pub fn validate(user: &UserRecord, rules: &ValidationRules, today: Date) -> Result<(), ValidationError> {
    if user.forename.trim().is_empty() || user.surname.trim().is_empty() {
        return Err(ValidationError::BlankName);
    }

    if user.birth_day == 0 && user.birth_month == 0 && user.birth_year == 0 {
        return Err(ValidationError::MissingBirthDate);
    }
    let born = user.birth_date().ok_or(ValidationError::InvalidBirthDate {
        year: user.birth_year,
        month: user.birth_month,
        day: user.birth_day,
    })?;
    if born > today {
        return Err(ValidationError::BirthDateInFuture);
    }

    Gender::try_from(user.gender_id).map_err(ValidationError::UnknownGender)?;

    if !is_valid_email(&user.email) {
        return Err(ValidationError::InvalidEmail);
    }

    if user.password.chars().count() < rules.min_password_len {
        return Err(ValidationError::PasswordTooShort {
            min: rules.min_password_len,
        });
    }

    AccessLevel::try_from(user.is_admin).map_err(ValidationError::UnknownAccessLevel)?;

    debug!(user_id = user.id, "user record valid");
    Ok(())
}
