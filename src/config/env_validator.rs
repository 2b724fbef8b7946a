//! Environment variable values checked against a closed set
//!
//! An invalid value is reported with the accepted values and, when one is
//! close enough, a typo suggestion. The caller's fallback is kept.

use std::io::Write;

/// Largest edit distance still offered as a suggestion.
const MAX_SUGGESTION_DISTANCE: usize = 2;

pub struct EnvVarValidator<'a> {
    var_name: &'a str,
    valid_values: &'a [&'a str],
}

impl<'a> EnvVarValidator<'a> {
    pub fn new(var_name: &'a str, valid_values: &'a [&'a str]) -> Self {
        Self {
            var_name,
            valid_values,
        }
    }

    /// Parses `value`, or warns on `writer` and returns `fallback`.
    pub fn resolve<T, F, W>(&self, value: &str, parser: F, fallback: T, writer: &mut W) -> T
    where
        F: Fn(&str) -> Option<T>,
        W: Write,
    {
        if let Some(parsed) = parser(value) {
            return parsed;
        }

        let hint = closest(value, self.valid_values)
            .map(|s| format!(". Did you mean '{s}'?"))
            .unwrap_or_default();
        let _ = writeln!(
            writer,
            "Warning: Invalid {} value '{value}'{hint}",
            self.var_name
        );
        let _ = writeln!(writer, "Valid values: {}", self.valid_values.join(", "));
        fallback
    }
}

/// Nearest candidate within a couple of edits, ignoring case.
///
/// Ties go to the earliest candidate. An identical candidate is not a
/// suggestion.
pub fn closest<'c>(input: &str, candidates: &[&'c str]) -> Option<&'c str> {
    let needle = input.to_lowercase();
    candidates
        .iter()
        .filter(|c| **c != input)
        .map(|c| (*c, levenshtein(&needle, &c.to_lowercase())))
        .filter(|(_, dist)| *dist <= MAX_SUGGESTION_DISTANCE)
        .min_by_key(|(_, dist)| *dist)
        .map(|(c, _)| c)
}

/// Edit distance over chars, one row at a time.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    let mut row: Vec<usize> = (0..=b.len()).collect();

    for (i, ca) in a.chars().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let above = row[j + 1];
            row[j + 1] = if ca == *cb {
                diagonal
            } else {
                1 + diagonal.min(above).min(row[j])
            };
            diagonal = above;
        }
    }

    row[b.len()]
}
