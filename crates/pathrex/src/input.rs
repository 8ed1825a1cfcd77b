use crate::error::{Error, Result};
use std::io::Read;
use std::path::Path;

/// Reads candidate paths from `source`, where `-` means stdin.
pub fn read_paths(source: &Path) -> Result<Vec<String>> {
    let content = if source == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| Error::ReadPaths {
                path: source.to_path_buf(),
                source: e,
            })?;
        buf
    } else {
        std::fs::read_to_string(source).map_err(|e| Error::ReadPaths {
            path: source.to_path_buf(),
            source: e,
        })?
    };

    Ok(parse_paths(&content))
}

/// One path per line. Blank lines are skipped and CRLF endings are accepted.
pub fn parse_paths(content: &str) -> Vec<String> {
    content
        .lines()
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
