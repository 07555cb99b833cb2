use serde::{Deserialize, Serialize};

/// Sentinel facet value that admits every card
pub const ALL: &str = "all";

/// Active value of one facet: either the `all` sentinel or a concrete value.
///
/// Serialized as the plain string carried by selector buttons, so
/// `"all"` round-trips to [`Selection::All`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Selection {
    #[default]
    All,
    Value(String),
}

impl Selection {
    /// Interpret a raw selector value. Unknown values are kept as-is; they
    /// simply match no card.
    pub fn parse(raw: &str) -> Self {
        if raw == ALL {
            Selection::All
        } else {
            Selection::Value(raw.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Selection::All => ALL,
            Selection::Value(value) => value,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Selection::All)
    }

    /// Single-valued match (card topic)
    pub fn admits(&self, candidate: &str) -> bool {
        match self {
            Selection::All => true,
            Selection::Value(value) => value == candidate,
        }
    }

    /// Multi-valued match (card tag list): any candidate equal to the value
    pub fn admits_any<'a, I>(&self, candidates: I) -> bool
    where
        I: IntoIterator<Item = &'a str>,
    {
        match self {
            Selection::All => true,
            Selection::Value(value) => candidates.into_iter().any(|c| c == value),
        }
    }
}

impl From<String> for Selection {
    fn from(raw: String) -> Self {
        if raw == ALL {
            Selection::All
        } else {
            Selection::Value(raw)
        }
    }
}

impl From<Selection> for String {
    fn from(selection: Selection) -> Self {
        match selection {
            Selection::All => ALL.to_string(),
            Selection::Value(value) => value,
        }
    }
}

impl std::fmt::Display for Selection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
