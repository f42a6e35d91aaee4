//! Grammar descriptor parsing and L-System string rewriting.
//!
//! A descriptor is a small text format: three leading numbers (iteration
//! count, default coefficient, thickness percentage), `#`-comment lines,
//! `key=replacement` rule lines and a single axiom line (no `=`), terminated
//! by a line starting with `@` or end of input. [`parse_descriptor`] turns it
//! into a [`Descriptor`]; [`reproduce`] expands the axiom through repeated
//! substitution.

use crate::error::ParseError;
use serde::{Deserialize, Serialize};

/// Ordered rule mapping from symbol keys to replacement strings.
///
/// Iteration order is insertion order; inserting a duplicate key overwrites
/// the replacement in place. Order matters: [`produce`] applies rules one at
/// a time, each over the previous rule's output.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RuleSet {
    rules: Vec<(String, String)>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a rule. A duplicate key keeps its original position and takes
    /// the new replacement.
    pub fn insert(&mut self, key: impl Into<String>, replacement: impl Into<String>) {
        let key = key.into();
        let replacement = replacement.into();
        match self.rules.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = replacement,
            None => self.rules.push((key, replacement)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.rules
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, r)| r.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.rules.iter().map(|(k, r)| (k.as_str(), r.as_str()))
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// A parsed grammar descriptor.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Descriptor {
    /// Number of rewriting generations. Callers may override this (e.g. via
    /// [`GrowthConfig::iterations_override`](crate::generator::GrowthConfig)).
    pub iterations: usize,

    /// Default coefficient substituted for the implicit unit parameter of a
    /// command symbol.
    pub coefficient: f32,

    /// Starting branch thickness. The descriptor carries a percentage; this
    /// field already holds it divided by 100.
    pub thickness: f32,

    /// The start string before any rewriting.
    pub axiom: String,

    /// Rewriting rules in insertion order.
    pub rules: RuleSet,
}

/// Parses a descriptor from text.
///
/// The first three whitespace-separated numeric tokens are the iteration
/// count, default coefficient and thickness percentage. Lines whose first
/// non-space character is `#` are skipped anywhere. After the header, a line
/// containing `=` is split at the first occurrence into a rule; a line
/// without `=` is the axiom (a later axiom line overwrites an earlier one).
/// A line starting with `@` terminates the descriptor.
///
/// Rule keys and replacements are taken verbatim past the line's leading
/// whitespace; replacements may contain spaces and further `=` characters.
pub fn parse_descriptor(text: &str) -> Result<Descriptor, ParseError> {
    let mut numbers = [0.0f32; 3];
    let mut numbers_read = 0;
    let mut axiom: Option<String> = None;
    let mut rules = RuleSet::new();

    for raw in text.lines() {
        let mut line = raw.trim_end_matches('\r').trim_start();
        if line.starts_with('#') {
            continue;
        }
        while numbers_read < 3 && !line.is_empty() {
            let token_end = line.find(char::is_whitespace).unwrap_or(line.len());
            let token = &line[..token_end];
            numbers[numbers_read] = token.parse().map_err(|_| ParseError::InvalidNumber {
                token: token.to_owned(),
            })?;
            numbers_read += 1;
            line = line[token_end..].trim_start();
        }
        if numbers_read < 3 || line.is_empty() {
            continue;
        }
        if line.starts_with('@') {
            break;
        }
        match line.split_once('=') {
            Some((key, replacement)) => rules.insert(key, replacement),
            None => axiom = Some(line.to_owned()),
        }
    }

    if numbers_read < 3 {
        return Err(ParseError::MissingHeader {
            found: numbers_read,
        });
    }
    let axiom = axiom.ok_or(ParseError::MissingAxiom)?;
    Ok(Descriptor {
        iterations: numbers[0] as usize,
        coefficient: numbers[1],
        thickness: numbers[2] / 100.0,
        axiom,
        rules,
    })
}

/// A single rewriting pass.
///
/// Rules apply one at a time in mapping order, each over the previous rule's
/// output, so a symbol introduced by an earlier rule can be matched by a
/// later rule within the same generation. Within one rule the scan is left to
/// right over non-overlapping occurrences and resumes after each inserted
/// replacement; a replacement that contains its own key does not recurse.
/// Empty keys are skipped.
pub fn produce(axiom: &str, rules: &RuleSet) -> String {
    let mut expanded = axiom.to_owned();
    for (key, replacement) in rules.iter() {
        if key.is_empty() {
            continue;
        }
        // str::replace scans left to right and never revisits replaced text,
        // which is exactly the resume-after-replacement behavior needed here.
        expanded = expanded.replace(key, replacement);
    }
    expanded
}

/// Applies [`produce`] exactly `iterations` times; zero returns the axiom
/// unchanged.
///
/// The loop is iterative, so generation count is not bounded by stack depth.
/// String length can grow multiplicatively per generation; callers are
/// expected to bound `iterations` and the resulting length (the pipeline in
/// [`grow`](crate::generator::grow) enforces a symbol ceiling).
pub fn reproduce(axiom: &str, rules: &RuleSet, iterations: usize) -> String {
    let mut expanded = axiom.to_owned();
    for _ in 0..iterations {
        expanded = produce(&expanded, rules);
    }
    expanded
}
