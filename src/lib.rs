//! # strjoin_rs
//!
//! A streaming string joiner: parts are written one at a time, a step
//! (delimiter) is inserted between consecutive parts, and the result is
//! wrapped in an optional prefix and suffix.
//!
//! The step goes between writes, never before the first one or after the
//! last, so the output always equals `prefix + parts.join(step) + suffix`.
//!
//! ## Example
//!
//! ```rust
//! use strjoin_rs::{join, with_prefix, with_step, with_suffix, Joiner, JoinerOptions};
//!
//! let mut joiner = Joiner::new([with_prefix("["), with_step(", "), with_suffix("]")]);
//! joiner.write_str("alpha");
//! joiner.write_str("beta");
//! assert_eq!(joiner.to_string(), "[alpha, beta]");
//! assert_eq!(joiner.len(), "[alpha, beta]".len());
//!
//! // One-shot joining with a configuration loaded from JSON
//! let options = JoinerOptions::from_json(r#"{"step": "|"}"#).unwrap();
//! assert_eq!(join(["a", "b", "c"], &options), "a|b|c");
//! ```

mod error;
mod joiner;
mod options;

// Re-export public API
pub use error::JoinError;
pub use joiner::{join, Joiner};
pub use options::{with_joiner, with_prefix, with_step, with_suffix, JoinerOption, JoinerOptions};
