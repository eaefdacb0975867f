//! Conversion of SKG exchange graphs into Glasgow solver input.

pub mod error;
pub mod glasgow;
pub mod skg;
pub mod types;

pub(crate) mod tools;

pub use error::{Err, Result};
pub use tools::IdMap;
