//! Template ability parsing
//!
//! A template is an ability containing `{name}` placeholders, e.g.
//! `metabase:dashboard:5?districtId={districtId}`. A placeholder is `{`,
//! one or more characters other than `}`, then `}`; `{}` is plain text.

use once_cell::sync::Lazy;
use regex::Regex;

static PLACEHOLDER: Lazy<Regex> = Lazy::new(|| {
    // Literal pattern, always valid
    Regex::new(r"\{([^}]+)\}").expect("placeholder pattern is valid")
});

/// A piece of a parsed template
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Text copied to the output as is
    Literal(&'a str),
    /// Placeholder name (without braces)
    Placeholder(&'a str),
}

/// An ability split into literal text and placeholders
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template<'a> {
    segments: Vec<Segment<'a>>,
    names: Vec<&'a str>,
}

impl<'a> Template<'a> {
    /// Parse an ability into a template
    ///
    /// Returns `None` when the ability has no placeholders.
    pub fn parse(ability: &'a str) -> Option<Self> {
        let mut segments = Vec::new();
        let mut names: Vec<&'a str> = Vec::new();
        let mut last = 0;

        for captures in PLACEHOLDER.captures_iter(ability) {
            let (Some(whole), Some(name)) = (captures.get(0), captures.get(1)) else {
                continue;
            };
            if whole.start() > last {
                segments.push(Segment::Literal(&ability[last..whole.start()]));
            }
            let name = name.as_str();
            segments.push(Segment::Placeholder(name));
            if !names.contains(&name) {
                names.push(name);
            }
            last = whole.end();
        }

        if names.is_empty() {
            return None;
        }
        if last < ability.len() {
            segments.push(Segment::Literal(&ability[last..]));
        }

        Some(Self { segments, names })
    }

    /// Distinct placeholder names, in first-occurrence order
    pub fn names(&self) -> &[&'a str] {
        &self.names
    }

    /// Parsed segments in order
    pub fn segments(&self) -> &[Segment<'a>] {
        &self.segments
    }

    /// Render the template with one value per placeholder name
    ///
    /// `values[i]` is substituted for every occurrence of `names()[i]`.
    /// Values are inserted literally and never re-parsed.
    pub fn render(&self, values: &[&str]) -> String {
        let mut rendered = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => rendered.push_str(text),
                Segment::Placeholder(name) => {
                    if let Some(index) = self.names.iter().position(|n| n == name) {
                        if let Some(value) = values.get(index) {
                            rendered.push_str(value);
                        }
                    }
                }
            }
        }
        rendered
    }
}
