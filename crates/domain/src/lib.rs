//! # Domain
//!
//! Pure session rules with no I/O:
//!
//! - [`glob`]: shell-style wildcard matching used by batch transfers
//! - [`remote_path`] / [`local_path`]: directory resolution on both sides
//! - [`tokenizer`]: command-line splitting
//! - [`attribute_change`]: `sattr` flag parsing
//! - [`session`]: the mutable per-session state

#![allow(clippy::multiple_crate_versions)]

pub mod attribute_change;
pub mod glob;
pub mod local_path;
pub mod remote_path;
pub mod session;
pub mod tokenizer;

pub use attribute_change::AttributeChange;
pub use glob::{GlobPattern, matches};
pub use local_path::LocalDir;
pub use remote_path::RemotePath;
pub use session::RemoteSessionState;
pub use tokenizer::{MAX_TOKENS, Tokens, tokenize};
