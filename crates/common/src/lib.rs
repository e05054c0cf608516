//! Shared building blocks for the zoo records workspace: logging setup and
//! the small JSON payloads every handler speaks.

pub mod types;
pub mod utils;
