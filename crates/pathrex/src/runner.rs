use pathrex_match::{MatchResult, Matcher};
use rayon::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub struct PathOutcome {
    pub path: String,
    pub result: MatchResult,
}

impl PathOutcome {
    /// Parameters sorted by key, for stable output.
    pub fn sorted_params(&self) -> Vec<(&str, &str)> {
        let mut params: Vec<_> = self
            .result
            .params
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        params.sort_unstable();
        params
    }
}

/// Matches every path, keeping the input order in the returned outcomes.
pub fn match_paths(matcher: &Matcher, paths: &[String], sequential: bool) -> Vec<PathOutcome> {
    let outcome = |path: &String| PathOutcome {
        path: path.clone(),
        result: matcher.matches(path),
    };

    if sequential || paths.len() <= 1 {
        paths.iter().map(outcome).collect()
    } else {
        paths.par_iter().map(outcome).collect()
    }
}

pub fn all_matched(outcomes: &[PathOutcome]) -> bool {
    outcomes.iter().all(|o| o.result.matched)
}
