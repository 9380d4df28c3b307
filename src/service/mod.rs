//! Repository operations and payload validation.

mod repository;
mod validation;
pub use repository::NewsRepository;
pub use validation::{NewComment, PayloadValidator, VotePatch};
