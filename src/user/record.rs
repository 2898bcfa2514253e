use std::fmt;

use serde::{Deserialize, Serialize};
use time::{Date, Month};

use super::codes::{AccessLevel, Gender};
use super::wire::lenient_i32;

/// One user / family member account.
///
/// Fields are plain storage and hold whatever they are given; range and
/// format checks live in [`crate::user::validation`]. Serde keys follow the
/// backend's column names.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    #[serde(deserialize_with = "lenient_i32")]
    pub id: i32,
    pub forename: String,
    pub surname: String,
    #[serde(deserialize_with = "lenient_i32")]
    pub gender_id: i32,
    #[serde(rename = "dateOfBirth_dayOfMonth", deserialize_with = "lenient_i32")]
    pub birth_day: i32,
    #[serde(rename = "dateOfBirth_month", deserialize_with = "lenient_i32")]
    pub birth_month: i32,
    #[serde(rename = "dateOfBirth_year", deserialize_with = "lenient_i32")]
    pub birth_year: i32,
    #[serde(rename = "placeOfBirth")]
    pub place_of_birth: String,
    pub email: String,
    /// Stored as given, unhashed. Never logged; see the `Debug` impl.
    pub password: String,
    #[serde(rename = "isAdmin", deserialize_with = "lenient_i32")]
    pub is_admin: i32,
}

impl UserRecord {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: i32,
        forename: impl Into<String>,
        surname: impl Into<String>,
        gender_id: i32,
        birth_day: i32,
        birth_month: i32,
        birth_year: i32,
        place_of_birth: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        is_admin: i32,
    ) -> Self {
        Self {
            id,
            forename: forename.into(),
            surname: surname.into(),
            gender_id,
            birth_day,
            birth_month,
            birth_year,
            place_of_birth: place_of_birth.into(),
            email: email.into(),
            password: password.into(),
            is_admin,
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.forename, self.surname)
    }

    /// `None` when `gender_id` is not a known code.
    pub fn gender(&self) -> Option<Gender> {
        Gender::try_from(self.gender_id).ok()
    }

    pub fn set_gender(&mut self, gender: Gender) {
        self.gender_id = gender.id();
    }

    pub fn access_level(&self) -> Option<AccessLevel> {
        AccessLevel::try_from(self.is_admin).ok()
    }

    pub fn set_access_level(&mut self, level: AccessLevel) {
        self.is_admin = level.code();
    }

    pub fn has_admin_flag(&self) -> bool {
        self.is_admin != 0
    }

    pub fn set_admin_flag(&mut self, admin: bool) {
        self.is_admin = i32::from(admin);
    }

    /// The birth date, if the three components form a real calendar date.
    pub fn birth_date(&self) -> Option<Date> {
        let month = u8::try_from(self.birth_month)
            .ok()
            .and_then(|m| Month::try_from(m).ok())?;
        let day = u8::try_from(self.birth_day).ok()?;
        Date::from_calendar_date(self.birth_year, month, day).ok()
    }

    pub fn set_birth_date(&mut self, date: Date) {
        self.birth_day = i32::from(date.day());
        self.birth_month = i32::from(u8::from(date.month()));
        self.birth_year = date.year();
    }
}

impl fmt::Debug for UserRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserRecord")
            .field("id", &self.id)
            .field("forename", &self.forename)
            .field("surname", &self.surname)
            .field("gender_id", &self.gender_id)
            .field("birth_day", &self.birth_day)
            .field("birth_month", &self.birth_month)
            .field("birth_year", &self.birth_year)
            .field("place_of_birth", &self.place_of_birth)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("is_admin", &self.is_admin)
            .finish()
    }
}
