use thiserror::Error;

/// Failures raised while turning a template into a [`Matcher`](crate::Matcher).
///
/// Matching itself never fails; a path that does not fit is reported through
/// [`MatchResult::matched`](crate::MatchResult::matched).
#[derive(Error, Debug)]
pub enum Error {
    #[error("template '{template}' produced an invalid regex '{regex}'")]
    InvalidPattern {
        template: String,
        regex: String,
        #[source]
        source: regex::Error,
    },

    #[error(
        "template '{template}' declares {keys} parameter(s) but its regex has {groups} capture group(s)"
    )]
    CaptureCountMismatch {
        template: String,
        keys: usize,
        groups: usize,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
