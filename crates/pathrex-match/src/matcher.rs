//! Compiled path matchers.

use crate::codec;
use crate::compile::{compile_template, CompiledTemplate};
use crate::error::{Error, Result};
use regex::{Regex, RegexBuilder};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CaseSensitivity {
    #[default]
    Sensitive,
    Insensitive,
}

/// Outcome of matching one path.
///
/// `params` is empty whenever `matched` is false.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchResult {
    pub matched: bool,
    pub params: HashMap<String, String>,
}

impl MatchResult {
    pub fn no_match() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }
}

/// A template compiled into an anchored regex.
///
/// Matchers are immutable and can be shared between threads.
///
/// # Example
///
/// ```
/// use pathrex_match::{CaseSensitivity, Matcher};
///
/// let matcher = Matcher::new("/api/v1/download/:file{.:ext}", CaseSensitivity::Sensitive).unwrap();
///
/// let result = matcher.matches("/api/v1/download/archive.zip");
/// assert!(result.matched);
/// assert_eq!(result.get("file"), Some("archive"));
/// assert_eq!(result.get("ext"), Some("zip"));
///
/// assert!(!matcher.is_match("/api/v2/download/archive.zip"));
/// ```
#[derive(Debug, Clone)]
pub struct Matcher {
    template: String,
    regex: Regex,
    keys: Vec<String>,
    sensitivity: CaseSensitivity,
}

impl Matcher {
    pub fn new(template: &str, sensitivity: CaseSensitivity) -> Result<Self> {
        Self::from_compiled(template, compile_template(template), sensitivity)
    }

    /// Builds a matcher from an already translated template.
    pub fn from_compiled(
        template: &str,
        compiled: CompiledTemplate,
        sensitivity: CaseSensitivity,
    ) -> Result<Self> {
        let regex = RegexBuilder::new(&compiled.regex)
            .case_insensitive(sensitivity == CaseSensitivity::Insensitive)
            .build()
            .map_err(|source| Error::InvalidPattern {
                template: template.to_string(),
                regex: compiled.regex.clone(),
                source,
            })?;

        // group 0 is the whole match
        let groups = regex.captures_len() - 1;
        if groups != compiled.keys.len() {
            return Err(Error::CaptureCountMismatch {
                template: template.to_string(),
                keys: compiled.keys.len(),
                groups,
            });
        }

        Ok(Self {
            template: template.to_string(),
            regex,
            keys: compiled.keys,
            sensitivity,
        })
    }

    /// Matches the whole of `path`, extracting decoded parameter values.
    ///
    /// Parameters inside an optional group that did not take part in the
    /// match are reported as empty strings. When a key repeats, the value
    /// captured last wins.
    pub fn matches(&self, path: &str) -> MatchResult {
        let encoded = codec::encode(path);

        let Some(caps) = self.regex.captures(&encoded) else {
            return MatchResult::no_match();
        };

        let mut params = HashMap::with_capacity(self.keys.len());
        for (idx, key) in self.keys.iter().enumerate() {
            let text = caps.get(idx + 1).map_or("", |m| m.as_str());
            params.insert(key.clone(), codec::decode(text));
        }

        MatchResult {
            matched: true,
            params,
        }
    }

    pub fn is_match(&self, path: &str) -> bool {
        self.regex.is_match(&codec::encode(path))
    }

    /// The template this matcher was built from.
    pub fn template(&self) -> &str {
        &self.template
    }

    /// The generated regex source.
    pub fn regex(&self) -> &str {
        self.regex.as_str()
    }

    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    pub fn case_sensitivity(&self) -> CaseSensitivity {
        self.sensitivity
    }
}

/// Compiles `template` into a [`Matcher`].
///
/// ```
/// use pathrex_match::{compile_matcher, CaseSensitivity};
///
/// let matcher = compile_matcher("/files/*path", CaseSensitivity::Sensitive).unwrap();
/// assert_eq!(matcher.matches("/files/a/b.txt").get("path"), Some("a/b.txt"));
/// ```
pub fn compile_matcher(template: &str, sensitivity: CaseSensitivity) -> Result<Matcher> {
    Matcher::new(template, sensitivity)
}
