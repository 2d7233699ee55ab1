use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A single fact: who said it, what kind of fact it is, and the text itself.
///
/// Facts carry no identity; two facts with the same fields are equal.
/// Nothing is validated here, the API checks fields before persisting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Fact {
    author: String,
    #[serde(rename = "type")]
    fact_type: String,
    text: String,
}

impl Fact {
    pub fn new(
        author: impl Into<String>,
        fact_type: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            author: author.into(),
            fact_type: fact_type.into(),
            text: text.into(),
        }
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn fact_type(&self) -> &str {
        &self.fact_type
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn field(&self, field: FactField) -> &str {
        match field {
            FactField::Author => &self.author,
            FactField::Type => &self.fact_type,
            FactField::Text => &self.text,
        }
    }

    /// Case-insensitive substring match on one field. `needle` must already be lowercase.
    pub(crate) fn field_contains(&self, field: FactField, needle: &str) -> bool {
        self.field(field).to_lowercase().contains(needle)
    }
}

impl fmt::Display for Fact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Author: {},", self.author)?;
        writeln!(f, "Type: {},", self.fact_type)?;
        writeln!(f, "Fact: {}", self.text)
    }
}

/// The three leaf fields of a fact, in the order they are written to disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FactField {
    Author,
    Type,
    Text,
}

impl FactField {
    pub const ALL: [FactField; 3] = [FactField::Author, FactField::Type, FactField::Text];
}

/// Which fields a search term is matched against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    #[default]
    Author,
    Text,
    Type,
    All,
}

impl SearchMode {
    pub fn fields(self) -> &'static [FactField] {
        match self {
            SearchMode::Author => &[FactField::Author],
            SearchMode::Text => &[FactField::Text],
            SearchMode::Type => &[FactField::Type],
            SearchMode::All => &FactField::ALL,
        }
    }
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SearchMode::Author => "author",
            SearchMode::Text => "text",
            SearchMode::Type => "type",
            SearchMode::All => "all",
        };
        f.write_str(name)
    }
}

impl FromStr for SearchMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "author" => Ok(SearchMode::Author),
            "text" => Ok(SearchMode::Text),
            "type" => Ok(SearchMode::Type),
            "all" => Ok(SearchMode::All),
            other => Err(format!(
                "Unknown search mode: {} (expected author, text, type or all)",
                other
            )),
        }
    }
}

/// What the viewer is currently showing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CurrentFact {
    /// Nothing has been selected yet.
    #[default]
    Nothing,
    Fact(Fact),
    /// A random pick was requested from an empty list.
    EmptyList,
    /// A search matched nothing.
    NoResults,
}

impl CurrentFact {
    pub fn fact(&self) -> Option<&Fact> {
        match self {
            CurrentFact::Fact(fact) => Some(fact),
            _ => None,
        }
    }
}

impl fmt::Display for CurrentFact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CurrentFact::Nothing => Ok(()),
            CurrentFact::Fact(fact) => write!(f, "{}", fact),
            CurrentFact::EmptyList => f.write_str("Fact list is empty."),
            CurrentFact::NoResults => f.write_str("No results."),
        }
    }
}
