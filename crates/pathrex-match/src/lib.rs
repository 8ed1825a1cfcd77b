//! Path templates compiled into matchers.
//!
//! A template describes a family of paths. `:name` captures one path
//! component, `*name` captures everything up to the end (separators
//! included), `(regex)` after a named parameter constrains what it accepts,
//! and `{...}` makes a part of the template optional.
//!
//! # Example
//!
//! ```
//! use pathrex_match::{compile_matcher, CaseSensitivity};
//!
//! let matcher = compile_matcher("/users/:id(\\d+){/posts/:post}", CaseSensitivity::Sensitive).unwrap();
//!
//! let result = matcher.matches("/users/42/posts/hello%20world");
//! assert!(result.matched);
//! assert_eq!(result.get("id"), Some("42"));
//! assert_eq!(result.get("post"), Some("hello world"));
//!
//! // optional parts that are missing come back empty
//! assert_eq!(matcher.matches("/users/42/").get("post"), Some(""));
//!
//! // constraints are enforced
//! assert!(!matcher.is_match("/users/alice"));
//! ```
//!
//! Both templates and paths are percent-encoded before matching and captured
//! values are decoded afterwards, so an encoded separator such as `%2F`
//! inside a value never splits it.

pub mod codec;
pub mod compile;
mod error;
mod matcher;
mod separator;

pub use error::{Error, Result};
pub use matcher::{compile_matcher, CaseSensitivity, MatchResult, Matcher};
pub use separator::Separator;
