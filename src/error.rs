use thiserror::Error;

/// An integer code with no matching variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unknown {kind} code: {code}")]
pub struct UnknownCode {
    pub kind: &'static str,
    pub code: i32,
}

/// Reasons a record is rejected by the validator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("forename and surname cannot be blank")]
    BlankName,
    #[error("date of birth is missing")]
    MissingBirthDate,
    #[error("date of birth {year:04}-{month:02}-{day:02} is not a calendar date")]
    InvalidBirthDate { year: i32, month: i32, day: i32 },
    #[error("date of birth cannot be in the future")]
    BirthDateInFuture,
    #[error(transparent)]
    UnknownGender(UnknownCode),
    #[error("invalid email")]
    InvalidEmail,
    #[error("password must be at least {min} characters")]
    PasswordTooShort { min: usize },
    #[error("passwords do not match")]
    PasswordMismatch,
    #[error(transparent)]
    UnknownAccessLevel(UnknownCode),
}

#[derive(Debug, Error)]
pub enum UserError {
    #[error("user json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid user: {0}")]
    Invalid(#[from] ValidationError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_problem() {
        let err = ValidationError::UnknownGender(UnknownCode { kind: "gender", code: 7 });
        assert_eq!(err.to_string(), "unknown gender code: 7");

        let err = ValidationError::InvalidBirthDate { year: 1990, month: 2, day: 30 };
        assert_eq!(err.to_string(), "date of birth 1990-02-30 is not a calendar date");

        let err = UserError::from(ValidationError::PasswordMismatch);
        assert_eq!(err.to_string(), "invalid user: passwords do not match");
    }
}
