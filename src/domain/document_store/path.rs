//! Document paths addressed in the remote store

use std::fmt;

use crate::domain::DomainError;

/// Characters the realtime database refuses inside a path segment
const FORBIDDEN_CHARS: [char; 5] = ['.', '#', '$', '[', ']'];

/// A validated, slash-delimited document location such as `userconfig/42`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DocumentPath {
    segments: Vec<String>,
    joined: String,
}

impl DocumentPath {
    /// Build the path of `key` under `namespace`.
    ///
    /// The namespace may itself be nested (`tenants/a/userconfig`); the key
    /// must be a single segment. Invalid paths are reported as store failures,
    /// the same way the database client rejects them.
    pub fn new(namespace: &str, key: &str) -> Result<Self, DomainError> {
        let joined = format!("{}/{}", namespace.trim_matches('/'), key);

        let mut segments: Vec<String> = namespace
            .trim_matches('/')
            .split('/')
            .map(String::from)
            .collect();
        segments.push(key.to_string());

        let valid = segments
            .iter()
            .all(|s| !s.is_empty() && !s.contains(FORBIDDEN_CHARS))
            && !key.contains('/');

        if !valid {
            return Err(DomainError::storage(format!(
                "child failed: path argument was an invalid path = \"{}\". \
                 Paths must be non-empty strings and can't contain \".\", \"#\", \"$\", \"[\", or \"]\"",
                joined
            )));
        }

        Ok(Self { segments, joined })
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn as_str(&self) -> &str {
        &self.joined
    }
}

impl fmt::Display for DocumentPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.joined)
    }
}
