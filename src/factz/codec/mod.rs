//! # XML Codec
//!
//! Translates between the on-disk fact document and [`FactList`](crate::facts::FactList).
//!
//! ```text
//! <?xml version="1.0" encoding="UTF-8"?>
//! <fact-list>
//!   <fact>
//!     <author>Mark Twain</author>
//!     <fact-type>humor</fact-type>
//!     <fact-text>Get your facts first.</fact-text>
//!   </fact>
//! </fact-list>
//! ```
//!
//! Both directions stream the document through a `quick_xml` pull reader,
//! one event at a time and never backtracking:
//!
//! - [`reader::decode`] builds facts from `fact` elements.
//! - [`writer::append`] re-emits every event as read and inserts one new
//!   `fact` element just before the root closes.
//!
//! Neither function touches the filesystem; see [`crate::store::xml`] for that.
//! Malformed documents are rejected as a whole, there are no partial results.

use crate::model::FactField;
use quick_xml::events::Event;
use std::fmt;

pub mod reader;
pub mod writer;

pub use reader::decode;
pub use writer::append;

/// Element names used in a fact document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum XmlNode {
    FactList,
    Fact,
    Author,
    Type,
    Text,
}

impl XmlNode {
    const ALL: [XmlNode; 5] = [
        XmlNode::FactList,
        XmlNode::Fact,
        XmlNode::Author,
        XmlNode::Type,
        XmlNode::Text,
    ];

    pub fn name(self) -> &'static str {
        match self {
            XmlNode::FactList => "fact-list",
            XmlNode::Fact => "fact",
            XmlNode::Author => "author",
            XmlNode::Type => "fact-type",
            XmlNode::Text => "fact-text",
        }
    }

    /// Case-insensitive lookup of an element name.
    pub fn from_name(name: &[u8]) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|node| node.name().as_bytes().eq_ignore_ascii_case(name))
    }

    pub fn field(self) -> Option<FactField> {
        match self {
            XmlNode::Author => Some(FactField::Author),
            XmlNode::Type => Some(FactField::Type),
            XmlNode::Text => Some(FactField::Text),
            XmlNode::FactList | XmlNode::Fact => None,
        }
    }

    pub fn for_field(field: FactField) -> Self {
        match field {
            FactField::Author => XmlNode::Author,
            FactField::Type => XmlNode::Type,
            FactField::Text => XmlNode::Text,
        }
    }
}

/// Whether `c` may appear in an XML 1.0 document.
pub fn is_xml_char(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n' | '\r' | '\u{20}'..='\u{D7FF}' | '\u{E000}'..='\u{FFFD}' | '\u{10000}'..='\u{10FFFF}'
    )
}

/// A document that could not be read as a fact file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlError {
    pub position: u64,
    pub message: String,
}

impl XmlError {
    pub(crate) fn new(position: u64, message: impl fmt::Display) -> Self {
        Self {
            position,
            message: message.to_string(),
        }
    }
}

impl fmt::Display for XmlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (at byte {})", self.message, self.position)
    }
}

impl std::error::Error for XmlError {}

/// Tracks element nesting so both directions reject the same documents:
/// exactly one root, balanced tags, no stray text outside the root, and an
/// XML declaration only as the very first event.
#[derive(Debug, Default)]
pub(crate) struct Nesting {
    open: Vec<Vec<u8>>,
    seen_root: bool,
    started: bool,
}

impl Nesting {
    /// Must see every event the reader produces, before it is handled.
    pub(crate) fn event(&mut self, event: &Event<'_>, position: u64) -> Result<(), XmlError> {
        if self.started && matches!(event, Event::Decl(_)) {
            return Err(XmlError::new(
                position,
                "XML declaration is only allowed at the start of the document",
            ));
        }
        self.started = true;
        Ok(())
    }

    pub(crate) fn depth(&self) -> usize {
        self.open.len()
    }

    pub(crate) fn open(&mut self, name: &[u8], position: u64) -> Result<(), XmlError> {
        if self.open.is_empty() {
            if self.seen_root {
                return Err(XmlError::new(position, "document has more than one root element"));
            }
            self.seen_root = true;
        }
        self.open.push(name.to_vec());
        Ok(())
    }

    pub(crate) fn close(&mut self, name: &[u8], position: u64) -> Result<(), XmlError> {
        match self.open.pop() {
            Some(expected) if expected == name => Ok(()),
            Some(expected) => Err(XmlError::new(
                position,
                format!(
                    "expected </{}>, found </{}>",
                    String::from_utf8_lossy(&expected),
                    String::from_utf8_lossy(name)
                ),
            )),
            None => Err(XmlError::new(
                position,
                format!("unexpected </{}>", String::from_utf8_lossy(name)),
            )),
        }
    }

    pub(crate) fn text(&self, raw: &[u8], position: u64) -> Result<(), XmlError> {
        if self.open.is_empty() && !raw.iter().all(u8::is_ascii_whitespace) {
            return Err(XmlError::new(position, "text outside the root element"));
        }
        Ok(())
    }

    pub(crate) fn finish(&self, position: u64) -> Result<(), XmlError> {
        if let Some(name) = self.open.last() {
            return Err(XmlError::new(
                position,
                format!(
                    "unexpected end of document, <{}> is not closed",
                    String::from_utf8_lossy(name)
                ),
            ));
        }
        if !self.seen_root {
            return Err(XmlError::new(position, "document has no root element"));
        }
        Ok(())
    }
}
