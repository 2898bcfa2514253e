use serde::{Deserialize, Serialize};

use crate::error::UnknownCode;

/// Gender classification referenced by `UserRecord::gender_id`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn id(self) -> i32 {
        match self {
            Gender::Male => 0,
            Gender::Female => 1,
        }
    }
}

impl TryFrom<i32> for Gender {
    type Error = UnknownCode;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Gender::Male),
            1 => Ok(Gender::Female),
            _ => Err(UnknownCode { kind: "gender", code }),
        }
    }
}

/// Privilege tier stored in `UserRecord::is_admin`.
///
/// Any non-zero value also reads as the plain admin flag.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum AccessLevel {
    User,
    SubAdmin,
    Admin,
}

impl AccessLevel {
    pub fn code(self) -> i32 {
        match self {
            AccessLevel::User => 0,
            AccessLevel::SubAdmin => 1,
            AccessLevel::Admin => 2,
        }
    }
}

impl TryFrom<i32> for AccessLevel {
    type Error = UnknownCode;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(AccessLevel::User),
            1 => Ok(AccessLevel::SubAdmin),
            2 => Ok(AccessLevel::Admin),
            _ => Err(UnknownCode { kind: "access level", code }),
        }
    }
}
