pub mod cli;
pub mod error;
pub mod input;
pub mod output;
pub mod runner;

pub use pathrex_match::{compile_matcher, CaseSensitivity, MatchResult, Matcher};
