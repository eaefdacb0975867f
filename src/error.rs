//! Error management.

use crate::types::VId;
use derive_more::{Display, From};
use std::path::PathBuf;

#[derive(Debug, Display, From)]
pub enum Err {
    #[display(fmt = "could not find input file {:?}", _0)]
    #[from(ignore)]
    InputNotFound(PathBuf),
    #[display(fmt = "{}", _0)]
    Io(std::io::Error),
    #[display(fmt = "line {}: expected two integers, got {:?}", line, content)]
    #[from(ignore)]
    ParseError { line: usize, content: String },
    #[display(fmt = "edge {} -> {} targets an altruist", source, target)]
    #[from(ignore)]
    InvariantViolation { source: VId, target: VId },
}

impl std::error::Error for Err {}

pub type Result<T> = std::result::Result<T, Err>;
