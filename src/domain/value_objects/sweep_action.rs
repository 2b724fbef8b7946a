use serde::Serialize;
use std::fmt;

/// The mutation applied to a matched object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SweepAction {
    Delete,
    Disable,
}

impl SweepAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            SweepAction::Delete => "DELETE",
            SweepAction::Disable => "DISABLE",
        }
    }
}

impl fmt::Display for SweepAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
