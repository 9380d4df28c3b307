//! Safe SQL builder: identifiers from a fixed whitelist only, values as parameters.

mod builder;
pub use builder::*;
