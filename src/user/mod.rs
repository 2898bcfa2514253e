mod codes;
mod dto;
mod record;
pub mod validation;
mod wire;

pub use codes::{AccessLevel, Gender};
pub use dto::{PublicUser, RegisterRequest};
pub use record::UserRecord;
pub use validation::ValidationRules;
