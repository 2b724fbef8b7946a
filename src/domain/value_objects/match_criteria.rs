//! Match criteria used to decide whether a fetched object is a sweep target.

use serde::Serialize;

/// Identifier list plus the comparison rules applied to it.
///
/// The list is scanned in order and the first satisfying entry wins.
/// Duplicates are allowed.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct MatchCriteria {
    pub identifiers: Vec<String>,
    /// Prefix match instead of exact equality
    pub starts_with: bool,
    /// Absent means case-insensitive
    #[serde(skip_serializing_if = "Option::is_none")]
    pub case_sensitive: Option<bool>,
}

impl MatchCriteria {
    pub fn exact<I, S>(identifiers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            identifiers: identifiers.into_iter().map(Into::into).collect(),
            starts_with: false,
            case_sensitive: None,
        }
    }

    pub fn prefix<I, S>(identifiers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            starts_with: true,
            ..Self::exact(identifiers)
        }
    }

    pub fn with_case_sensitive(mut self, case_sensitive: Option<bool>) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    pub fn is_case_sensitive(&self) -> bool {
        self.case_sensitive == Some(true)
    }

    pub fn is_empty(&self) -> bool {
        self.identifiers.is_empty()
    }

    /// Returns the first list entry that `candidate` satisfies.
    pub fn first_match(&self, candidate: &str) -> Option<&str> {
        self.identifiers
            .iter()
            .map(String::as_str)
            .find(|target| self.satisfies(candidate, target))
    }

    fn satisfies(&self, candidate: &str, target: &str) -> bool {
        if self.is_case_sensitive() {
            if self.starts_with {
                candidate.starts_with(target)
            } else {
                candidate == target
            }
        } else {
            let candidate = candidate.to_lowercase();
            let target = target.to_lowercase();
            if self.starts_with {
                candidate.starts_with(&target)
            } else {
                candidate == target
            }
        }
    }
}
