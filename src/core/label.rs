use serde::{Deserialize, Serialize};
use std::fmt;

/// Binary recommendation label.
///
/// Dataset cells are normalized leniently: anything that is not
/// case-insensitively "yes" after trimming, including an empty cell,
/// becomes `No`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    Yes,
    No,
}

impl Label {
    pub fn from_dataset_field(raw: &str) -> Self {
        if raw.trim().eq_ignore_ascii_case("yes") {
            Label::Yes
        } else {
            Label::No
        }
    }

    pub fn is_yes(self) -> bool {
        matches!(self, Label::Yes)
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Yes => write!(f, "yes"),
            Label::No => write!(f, "no"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yes_is_case_insensitive_and_trimmed() {
        assert_eq!(Label::from_dataset_field("yes"), Label::Yes);
        assert_eq!(Label::from_dataset_field("YES"), Label::Yes);
        assert_eq!(Label::from_dataset_field("  Yes "), Label::Yes);
    }

    #[test]
    fn everything_else_is_no() {
        assert_eq!(Label::from_dataset_field("no"), Label::No);
        assert_eq!(Label::from_dataset_field("maybe"), Label::No);
        assert_eq!(Label::from_dataset_field("y"), Label::No);
        assert_eq!(Label::from_dataset_field(""), Label::No);
        assert_eq!(Label::from_dataset_field("   "), Label::No);
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Label::Yes).unwrap(), "\"yes\"");
        assert_eq!(serde_json::to_string(&Label::No).unwrap(), "\"no\"");
    }

    #[test]
    fn display_matches_dataset_vocabulary() {
        assert_eq!(Label::Yes.to_string(), "yes");
        assert_eq!(Label::No.to_string(), "no");
    }
}
