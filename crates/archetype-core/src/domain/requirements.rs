//! Pinned requirement lists (`requirements.txt`) and version-aware merging.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use super::DomainError;

/// A dotted version string compared segment by segment.
///
/// Each segment splits into a leading number and a trailing suffix
/// (`0b2` is `0` then `b2`). Numbers compare numerically, then suffixes
/// lexically, and a segment without a leading number sorts before any
/// segment with one. Missing trailing segments count as `0`, so `1.0` and
/// `1.0.0` are equal.
#[derive(Debug, Clone)]
pub struct PackageVersion(String);

impl PackageVersion {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn segment_key(segment: &str) -> (Option<u64>, &str) {
    let digits = segment
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(segment.len());
    match segment[..digits].parse::<u64>() {
        Ok(number) => (Some(number), &segment[digits..]),
        Err(_) => (None, segment),
    }
}

fn compare_segment(a: &str, b: &str) -> Ordering {
    segment_key(a).cmp(&segment_key(b))
}

impl Ord for PackageVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        let mut left = self.0.split('.');
        let mut right = other.0.split('.');
        loop {
            match (left.next(), right.next()) {
                (None, None) => return Ordering::Equal,
                (l, r) => {
                    let ord = compare_segment(l.unwrap_or("0"), r.unwrap_or("0"));
                    if ord != Ordering::Equal {
                        return ord;
                    }
                }
            }
        }
    }
}

impl PartialOrd for PackageVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for PackageVersion {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for PackageVersion {}

impl fmt::Display for PackageVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One `name==version` line. Unpinned names have no version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Requirement {
    pub name: String,
    pub version: Option<PackageVersion>,
}

impl Requirement {
    fn key(&self) -> String {
        self.name.to_ascii_lowercase()
    }

    /// `true` when `other` should replace this requirement's version.
    fn is_superseded_by(&self, other: &Requirement) -> bool {
        match (&self.version, &other.version) {
            (_, None) => false,
            (None, Some(_)) => true,
            (Some(ours), Some(theirs)) => theirs > ours,
        }
    }
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.version {
            Some(v) => write!(f, "{}=={}", self.name, v),
            None => f.write_str(&self.name),
        }
    }
}

/// What [`Requirements::merge`] changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeSummary {
    pub added: usize,
    pub upgraded: usize,
}

impl MergeSummary {
    pub fn is_noop(&self) -> bool {
        self.added == 0 && self.upgraded == 0
    }
}

/// One line of a requirements file.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Line {
    /// Comment, blank line or repeated pin, kept as written.
    Verbatim(String),
    /// First occurrence of a package. `text` is what gets written back.
    Pin { requirement: Requirement, text: String },
}

impl Line {
    fn pin(requirement: Requirement) -> Self {
        let text = requirement.to_string();
        Self::Pin { requirement, text }
    }
}

/// An ordered requirement list that remembers the file it was read from.
///
/// Comments, blank lines and the spelling of untouched pins survive a
/// [`merge`](Self::merge) followed by [`render`](Self::render). A pin that
/// gets a new version is rewritten as `name==version`, keeping any trailing
/// comment. Later pins of a package already listed are kept verbatim and do
/// not take part in merging.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Requirements {
    lines: Vec<Line>,
}

impl Requirements {
    /// Pinned packages in file order, one per name.
    pub fn entries(&self) -> impl Iterator<Item = &Requirement> {
        self.lines.iter().filter_map(|line| match line {
            Line::Pin { requirement, .. } => Some(requirement),
            Line::Verbatim(_) => None,
        })
    }

    pub fn get(&self, name: &str) -> Option<&Requirement> {
        let key = name.to_ascii_lowercase();
        self.entries().find(|r| r.key() == key)
    }

    pub fn len(&self) -> usize {
        self.entries().count()
    }

    pub fn is_empty(&self) -> bool {
        self.entries().next().is_none()
    }

    /// Fold `incoming` into `self`, keeping the higher version per package.
    ///
    /// Existing lines keep their place; new packages are appended in
    /// `incoming` order.
    pub fn merge(&mut self, incoming: &Requirements) -> MergeSummary {
        let mut summary = MergeSummary::default();

        for req in incoming.entries() {
            let key = req.key();
            let existing = self.lines.iter_mut().find_map(|line| match line {
                Line::Pin { requirement, text } if requirement.key() == key => {
                    Some((requirement, text))
                }
                _ => None,
            });

            match existing {
                Some((requirement, text)) => {
                    if requirement.is_superseded_by(req) {
                        requirement.version = req.version.clone();
                        *text = format!("{requirement}{}", trailing_comment(text));
                        summary.upgraded += 1;
                    }
                }
                None => {
                    self.lines.push(Line::pin(req.clone()));
                    summary.added += 1;
                }
            }
        }

        summary
    }

    /// The file contents, one line per entry, trailing newline included.
    pub fn render(&self) -> String {
        self.lines
            .iter()
            .map(|line| match line {
                Line::Verbatim(text) | Line::Pin { text, .. } => format!("{text}\n"),
            })
            .collect()
    }
}

/// The `#` comment at the end of a line, with the whitespace before it.
fn trailing_comment(text: &str) -> &str {
    match text.find('#') {
        Some(idx) => &text[text[..idx].trim_end().len()..],
        None => "",
    }
}

impl FromStr for Requirements {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parsed = Self::default();

        for (idx, raw) in s.lines().enumerate() {
            let line_no = idx + 1;
            let body = raw.split('#').next().unwrap_or("").trim();
            if body.is_empty() {
                parsed.lines.push(Line::Verbatim(raw.to_owned()));
                continue;
            }

            let requirement = parse_line(line_no, body)?;
            if parsed.get(&requirement.name).is_some() {
                parsed.lines.push(Line::Verbatim(raw.to_owned()));
            } else {
                parsed.lines.push(Line::Pin {
                    requirement,
                    text: raw.to_owned(),
                });
            }
        }

        Ok(parsed)
    }
}

fn parse_line(line: usize, text: &str) -> Result<Requirement, DomainError> {
    let (name, version) = match text.split_once("==") {
        Some((name, version)) => {
            let version = version.trim();
            if version.is_empty() {
                return Err(DomainError::InvalidRequirement {
                    line,
                    reason: format!("missing version after '==' in '{text}'"),
                });
            }
            (name.trim(), Some(PackageVersion::new(version)))
        }
        None => (text, None),
    };

    if name.is_empty() {
        return Err(DomainError::InvalidRequirement {
            line,
            reason: "missing package name".into(),
        });
    }
    if name.contains(['<', '>', '~', '!', '=', ' ']) {
        return Err(DomainError::InvalidRequirement {
            line,
            reason: format!("only exact '==' pins are supported, got '{text}'"),
        });
    }

    Ok(Requirement {
        name: name.to_owned(),
        version,
    })
}
