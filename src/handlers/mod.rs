//! HTTP handlers: validate path/query/body, call repository operations, shape the keyed envelope.

pub mod articles;
pub mod comments;
pub mod endpoints;
pub mod topics;
pub mod users;
pub use articles::*;
pub use comments::*;
pub use endpoints::*;
pub use topics::*;
pub use users::*;

use crate::error::AppError;

/// Numeric path identifiers; anything else is `MalformedInput`.
pub(crate) fn parse_id(id_str: &str) -> Result<i32, AppError> {
    id_str.parse().map_err(|_| AppError::MalformedInput)
}
