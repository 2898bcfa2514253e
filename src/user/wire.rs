use serde::{de::Error as _, Deserialize, Deserializer};

use super::record::UserRecord;
use crate::error::UserError;

/// Accepts a JSON integer, a whole-number float such as `1990.0`, or a string
/// holding a base-10 integer, the way the backend's PHP responses mix them.
pub(crate) fn lenient_i32<'de, D>(de: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum LenientInt {
        Int(i64),
        Float(f64),
        Str(String),
    }

    match LenientInt::deserialize(de)? {
        LenientInt::Int(n) => {
            i32::try_from(n).map_err(|_| D::Error::custom(format!("integer {n} out of range")))
        }
        LenientInt::Float(f) => {
            if f.fract() == 0.0 && f >= f64::from(i32::MIN) && f <= f64::from(i32::MAX) {
                Ok(f as i32)
            } else {
                Err(D::Error::custom(format!("expected whole integer, got {f}")))
            }
        }
        LenientInt::Str(s) => s
            .trim()
            .parse::<i32>()
            .map_err(|_| D::Error::custom(format!("expected integer, got {s:?}"))),
    }
}

impl UserRecord {
    pub fn from_json(raw: &str) -> Result<Self, UserError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn to_json(&self) -> Result<String, UserError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parameters posted when registering a user. `id` is left out; the
    /// server assigns it.
    pub fn to_form_params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("forename", self.forename.clone()),
            ("surname", self.surname.clone()),
            ("gender_id", self.gender_id.to_string()),
            ("dateOfBirth_dayOfMonth", self.birth_day.to_string()),
            ("dateOfBirth_month", self.birth_month.to_string()),
            ("dateOfBirth_year", self.birth_year.to_string()),
            ("placeOfBirth", self.place_of_birth.clone()),
            ("email", self.email.clone()),
            ("password", self.password.clone()),
            ("isAdmin", self.is_admin.to_string()),
        ]
    }
}
