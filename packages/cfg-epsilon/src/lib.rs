pub mod error;
pub mod grammar;
pub mod grammars;
pub mod language;
pub mod trace;

pub use error::{Error, Result};
