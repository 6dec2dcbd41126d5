//! Function Slicing
//!
//! Locates the function enclosing a line and compresses it to the lines
//! the target statement depends on.
//!
//! Pipeline:
//! 1. `locate` - enclosing function and target statement
//! 2. `identifiers` - read/write split of the seed
//! 3. `backward` - bounded identifier propagation and control promotion
//! 4. `comments` - comment-only lines and inline comment masking
//! 5. `assemble` - blocks, markers, header, closing line, dedent
//!
//! @module slice

pub mod assemble;
pub mod backward;
pub mod comments;
pub mod engine;
pub mod identifiers;
pub mod locate;
pub mod types;

pub use engine::slice_function;
pub use types::{
    Block, IdentifierSets, LineRange, RelevantLines, SliceMeta, SliceOptions, SliceOutcome, SliceResult,
};
