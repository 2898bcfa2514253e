pub mod config;
pub mod error;
pub mod telemetry;
pub mod user;

pub use error::{UnknownCode, UserError, ValidationError};
pub use user::{AccessLevel, Gender, PublicUser, RegisterRequest, UserRecord, ValidationRules};
