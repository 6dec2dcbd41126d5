//! funcslice - compact function context around a source line
//!
//! Finds the function enclosing a line, then either returns it whole or
//! compresses it to the statements the line depends on through a bounded
//! backward identifier slice.

pub mod cli;
pub mod core;
pub mod extract;
pub mod lang;
pub mod output;
pub mod parse;
pub mod server;
pub mod slice;
pub mod source;

pub use core::config::Config;
pub use core::error::{Error, Result};
pub use extract::{extract_function, ExtractMeta, ExtractResult};
pub use lang::LanguageId;
pub use slice::{slice_function, SliceMeta, SliceOptions, SliceOutcome, SliceResult};
