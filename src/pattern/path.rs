//! Ant-style path templates.
//!
//! # Matching Rules
//! - Template and path are split on `/`; empty segments are ignored
//! - Both must agree on a leading `/`
//! - `**` matches zero or more whole segments
//! - Within one segment: `*` matches any run of characters, `?` matches
//!   exactly one character, `{name}` matches any run of characters
//! - Everything else is literal and case-sensitive
//! - Both must agree on a trailing `/`, unless the template ends in `**`
//!
//! # Design Decisions
//! - Templates are compiled once into segments at construction
//! - Matching is a single-backtrack wildcard scan, O(template x path)
//! - No regex: `{name:regex}` is treated like `{name}`
//! - Malformed templates never fail, they just match literally

use std::fmt;
use std::hash::{Hash, Hasher};

const SEPARATOR: char = '/';

/// A compiled path template.
#[derive(Debug, Clone)]
pub struct PathTemplate {
    raw: String,
    segments: Vec<Segment>,
    leading_slash: bool,
    trailing_slash: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    /// `**`
    AnyDepth,
    Literal(String),
    Glob(Vec<GlobToken>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum GlobToken {
    Char(char),
    /// `*` or `{name}`
    AnyRun,
    /// `?`
    AnyChar,
}

impl PathTemplate {
    pub fn new(template: impl Into<String>) -> Self {
        let raw = template.into();
        let mut segments: Vec<Segment> = Vec::new();

        for part in raw.split(SEPARATOR).filter(|s| !s.is_empty()) {
            let segment = compile_segment(part);
            // Consecutive `**` are equivalent to one.
            if segment == Segment::AnyDepth && segments.last() == Some(&Segment::AnyDepth) {
                continue;
            }
            segments.push(segment);
        }

        Self {
            leading_slash: raw.starts_with(SEPARATOR),
            trailing_slash: raw.ends_with(SEPARATOR),
            raw,
            segments,
        }
    }

    /// The template exactly as written.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Returns true if `path` satisfies this template.
    pub fn matches(&self, path: &str) -> bool {
        if path.starts_with(SEPARATOR) != self.leading_slash {
            return false;
        }

        let ends_in_any_depth = self.segments.last() == Some(&Segment::AnyDepth);
        if !ends_in_any_depth && path.ends_with(SEPARATOR) != self.trailing_slash {
            // "/" is both leading and trailing; it only needs the leading check.
            if !(self.segments.is_empty() && path.trim_matches(SEPARATOR).is_empty()) {
                return false;
            }
        }

        let parts: Vec<&str> = path.split(SEPARATOR).filter(|s| !s.is_empty()).collect();
        match_segments(&self.segments, &parts)
    }
}

impl PartialEq for PathTemplate {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl Eq for PathTemplate {}

impl Hash for PathTemplate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.raw.hash(state);
    }
}

impl fmt::Display for PathTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl From<&str> for PathTemplate {
    fn from(template: &str) -> Self {
        Self::new(template)
    }
}

impl From<String> for PathTemplate {
    fn from(template: String) -> Self {
        Self::new(template)
    }
}

fn compile_segment(part: &str) -> Segment {
    if part == "**" {
        return Segment::AnyDepth;
    }
    if !part.contains(['*', '?', '{']) {
        return Segment::Literal(part.to_string());
    }

    let mut tokens = Vec::new();
    let mut chars = part.chars();

    while let Some(c) = chars.next() {
        let token = match c {
            '*' => GlobToken::AnyRun,
            '?' => GlobToken::AnyChar,
            '{' if part.contains('}') => {
                // Skip to the matching close brace; the name is not captured.
                let mut depth = 1;
                for inner in chars.by_ref() {
                    match inner {
                        '{' => depth += 1,
                        '}' => {
                            depth -= 1;
                            if depth == 0 {
                                break;
                            }
                        }
                        _ => {}
                    }
                }
                GlobToken::AnyRun
            }
            _ => GlobToken::Char(c),
        };
        if token == GlobToken::AnyRun && tokens.last() == Some(&GlobToken::AnyRun) {
            continue;
        }
        tokens.push(token);
    }

    Segment::Glob(tokens)
}

fn match_segments(segments: &[Segment], parts: &[&str]) -> bool {
    wildcard_match(
        segments,
        parts,
        |segment: &Segment| *segment == Segment::AnyDepth,
        |segment: &Segment, part: &&str| segment_matches(segment, part),
    )
}

fn segment_matches(segment: &Segment, part: &str) -> bool {
    match segment {
        Segment::AnyDepth => true,
        Segment::Literal(literal) => literal == part,
        Segment::Glob(tokens) => {
            let chars: Vec<char> = part.chars().collect();
            wildcard_match(
                tokens,
                &chars,
                |token: &GlobToken| *token == GlobToken::AnyRun,
                |token: &GlobToken, c: &char| match token {
                    GlobToken::Char(expected) => expected == c,
                    GlobToken::AnyChar => true,
                    GlobToken::AnyRun => false,
                },
            )
        }
    }
}

/// Matches `input` against `pattern`, where star elements match any run of
/// units and every other element matches exactly one unit.
///
/// Only the most recent star is ever retried, so the scan is bounded by
/// `pattern.len() * input.len()` unit comparisons.
fn wildcard_match<P, I>(
    pattern: &[P],
    input: &[I],
    is_star: impl Fn(&P) -> bool,
    unit_matches: impl Fn(&P, &I) -> bool,
) -> bool {
    let (mut p, mut i) = (0, 0);
    // (pattern index of the star, input index it currently resumes from)
    let mut backtrack: Option<(usize, usize)> = None;

    while i < input.len() {
        if p < pattern.len() && is_star(&pattern[p]) {
            backtrack = Some((p, i));
            p += 1;
        } else if p < pattern.len() && unit_matches(&pattern[p], &input[i]) {
            p += 1;
            i += 1;
        } else if let Some((star, resume)) = backtrack {
            backtrack = Some((star, resume + 1));
            p = star + 1;
            i = resume + 1;
        } else {
            return false;
        }
    }

    pattern[p..].iter().all(is_star)
}
