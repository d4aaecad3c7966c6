//! Output path templating.
//!
//! This module provides:
//!
//! - **Tokens**: the fail-open `{name}` scanner
//! - **Context**: token values for one config snapshot and timestamp
//! - **Build path**: base directory + expanded `buildPath` template
//!
//! # Template Syntax
//!
//! ```text
//! {platform}/{yyyy}{MM}{dd}/{configName}-{shortRevision}
//! ```
//!
//! Unknown tokens are kept as written; see [`OutputContext`] for the
//! vocabulary.

mod build_path;
mod context;
mod tokens;

pub use build_path::build_path;
pub use context::{BUILD_PATH_KEY, OutputContext};
pub use tokens::substitute;
