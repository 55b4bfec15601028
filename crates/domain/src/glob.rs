// crates/domain/src/glob.rs
//! `fnmatch`-style wildcard matching.
//!
//! Supported syntax: literals (case-sensitive), `?`, `*`, `[set]`, `[^set]`
//! with `lo-hi` ranges, and `\c` to match `c` literally. There is no `**`
//! and no brace expansion. A pattern only matches when the whole candidate
//! is consumed.

use std::fmt;

/// Returns `true` when `candidate` matches `pattern` in full.
pub fn matches(candidate: &str, pattern: &str) -> bool {
    let candidate: Vec<char> = candidate.chars().collect();
    let pattern: Vec<char> = pattern.chars().collect();
    match_here(&candidate, &pattern)
}

fn match_here(mut s: &[char], mut p: &[char]) -> bool {
    while let Some((&token, rest)) = p.split_first() {
        match token {
            '*' => {
                // trailing star swallows the rest
                return rest.is_empty() || match_star(s, rest);
            }
            '?' => {
                let Some((_, tail)) = s.split_first() else {
                    return false;
                };
                s = tail;
                p = rest;
            }
            '[' => {
                let Some((&c, tail)) = s.split_first() else {
                    return false;
                };
                match match_class(c, rest) {
                    Some((true, after)) => {
                        s = tail;
                        p = after;
                    }
                    _ => return false,
                }
            }
            _ => {
                // `\c` matches `c`; a lone trailing backslash matches itself
                let (literal, after) = match (token, rest.split_first()) {
                    ('\\', Some((&escaped, after))) => (escaped, after),
                    _ => (token, rest),
                };
                match s.split_first() {
                    Some((&c, tail)) if c == literal => {
                        s = tail;
                        p = after;
                    }
                    _ => return false,
                }
            }
        }
    }
    s.is_empty()
}

/// Tries the remainder of the pattern at every suffix of the candidate.
fn match_star(s: &[char], p: &[char]) -> bool {
    (0..=s.len()).any(|offset| match_here(&s[offset..], p))
}

/// Matches `c` against the set that follows a `[`.
///
/// Returns whether the set accepted `c` and the pattern after the closing
/// `]`, or `None` when the set is never closed.
fn match_class(c: char, p: &[char]) -> Option<(bool, &[char])> {
    let (negated, mut p) = match p.split_first() {
        Some((&'^', rest)) => (true, rest),
        _ => (false, p),
    };
    let mut last = '\0';
    let mut matched = false;
    loop {
        let (&token, rest) = p.split_first()?;
        match token {
            ']' => return Some((matched != negated, rest)),
            '-' => match rest.split_first() {
                Some((&high, tail)) if high != ']' => {
                    if last <= c && c <= high {
                        matched = true;
                    }
                    last = high;
                    p = tail;
                    continue;
                }
                _ => matched |= c == '-',
            },
            _ => matched |= c == token,
        }
        last = token;
        p = rest;
    }
}

/// A wildcard pattern as typed by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlobPattern(String);

impl GlobPattern {
    pub fn new(pattern: impl Into<String>) -> Self {
        Self(pattern.into())
    }

    pub fn matches(&self, candidate: &str) -> bool {
        matches(candidate, &self.0)
    }

    pub fn pattern(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GlobPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
