//! User pattern to index-capturing match rule
//!
//! Two pattern forms are accepted:
//! * glob, e.g. `lesson*.mp4`: the first `*` captures the index as digits,
//!   further `*` match anything and `?` matches one character. The whole
//!   filename must match.
//! * regex, e.g. `lesson(\d+)\.mp4`: used as written, anchored at the start
//!   of the filename. Capture group 1 holds the index.
//!
//! A pattern that has a `(` but does not compile as a regex falls back to the
//! glob form when it contains a `*`, e.g. `Video (*).mp4`.

use std::fmt;

use regex::Regex;

use crate::error::ConfigError;

/// How the user pattern was interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternKind {
    Glob,
    Regex,
}

impl fmt::Display for PatternKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatternKind::Glob => write!(f, "glob"),
            PatternKind::Regex => write!(f, "regex"),
        }
    }
}

/// Compiled pattern that pulls the content index out of a filename
#[derive(Debug, Clone)]
pub struct MatchRule {
    pattern: String,
    kind: PatternKind,
    regex: Regex,
}

impl MatchRule {
    /// Compile a user pattern.
    ///
    /// A `(` selects the regex form, otherwise a `*` selects the glob form.
    /// A pattern with neither has nowhere to capture the index from. A
    /// pattern with a `(` that is not a valid regex but has a `*` is read as
    /// a glob, so literal parentheses work: `Video (*).mp4`.
    pub fn from_pattern(pattern: &str) -> Result<Self, ConfigError> {
        let (kind, source) = if pattern.contains('(') {
            // Validate the pattern as typed so error positions make sense
            match Regex::new(pattern) {
                Ok(_) => (PatternKind::Regex, format!("^(?:{})", pattern)),
                Err(_) if pattern.contains('*') => (PatternKind::Glob, glob_to_regex(pattern)),
                Err(source) => {
                    return Err(ConfigError::InvalidPattern {
                        pattern: pattern.to_string(),
                        source,
                    })
                }
            }
        } else if pattern.contains('*') {
            (PatternKind::Glob, glob_to_regex(pattern))
        } else {
            return Err(ConfigError::MissingWildcard(pattern.to_string()));
        };

        let regex = Regex::new(&source).map_err(|source| ConfigError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;

        if regex.captures_len() < 2 {
            return Err(ConfigError::MissingCaptureGroup {
                pattern: pattern.to_string(),
            });
        }

        Ok(Self {
            pattern: pattern.to_string(),
            kind,
            regex,
        })
    }

    /// The pattern as the user typed it
    pub fn as_str(&self) -> &str {
        &self.pattern
    }

    pub fn kind(&self) -> PatternKind {
        self.kind
    }

    /// The regular expression actually used for matching
    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    pub fn is_match(&self, file_name: &str) -> bool {
        self.regex.is_match(file_name)
    }

    /// Index captured by group 1, if the name matches and the capture is a
    /// non-negative integer that fits in `u32`
    pub fn extract_index(&self, file_name: &str) -> Option<u32> {
        let captures = self.regex.captures(file_name)?;
        captures.get(1)?.as_str().parse().ok()
    }
}

/// Translate a glob into an anchored regex with the index in group 1
pub fn glob_to_regex(glob: &str) -> String {
    let mut out = String::with_capacity(glob.len() + 16);
    let mut captured = false;
    let mut buf = [0u8; 4];

    out.push('^');
    for c in glob.chars() {
        match c {
            '*' if !captured => {
                out.push_str(r"(\d+)");
                captured = true;
            }
            '*' => out.push_str(".*"),
            '?' => out.push('.'),
            _ => out.push_str(&regex::escape(c.encode_utf8(&mut buf))),
        }
    }
    out.push('$');

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glob_translation() {
        assert_eq!(glob_to_regex("lesson*.mp4"), r"^lesson(\d+)\.mp4$");
        assert_eq!(glob_to_regex("ep*_*.mp4"), r"^ep(\d+)_.*\.mp4$");
        assert_eq!(glob_to_regex("part?*.mp4"), r"^part.(\d+)\.mp4$");
    }

    #[test]
    fn test_glob_escapes_metacharacters() {
        let rule = MatchRule::from_pattern("clip[*].mp4").unwrap();
        assert_eq!(rule.kind(), PatternKind::Glob);
        assert_eq!(rule.extract_index("clip[4].mp4"), Some(4));
        assert_eq!(rule.extract_index("clip4.mp4"), None);
    }

    #[test]
    fn test_regex_is_anchored_at_start_only() {
        let rule = MatchRule::from_pattern(r"lesson(\d+)").unwrap();
        assert_eq!(rule.kind(), PatternKind::Regex);
        assert_eq!(rule.extract_index("lesson12.mp4"), Some(12));
        assert_eq!(rule.extract_index("old-lesson12.mp4"), None);
    }

    #[test]
    fn test_regex_alternation_stays_anchored() {
        let rule = MatchRule::from_pattern(r"a(\d+)|b(\d+)").unwrap();
        assert_eq!(rule.extract_index("a1.mp4"), Some(1));
        assert!(!rule.is_match("xb2.mp4"));
    }

    #[test]
    fn test_non_numeric_capture_is_no_index() {
        let rule = MatchRule::from_pattern(r"lesson(\w+)\.mp4").unwrap();
        assert_eq!(rule.extract_index("lessonABC.mp4"), None);
        assert_eq!(rule.extract_index("lesson5.mp4"), Some(5));
    }
}
