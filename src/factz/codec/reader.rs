use super::{Nesting, XmlError, XmlNode};
use crate::facts::FactList;
use crate::model::{Fact, FactField};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use tracing::debug;

/// Decodes a fact document into a [`FactList`].
///
/// Fails on the first malformed construct; no partial list is returned.
pub fn decode(document: &str) -> Result<FactList, XmlError> {
    let mut reader = Reader::from_str(document);
    let mut decoder = Decoder::default();

    loop {
        let position = reader.buffer_position() as u64;
        let event = reader
            .read_event()
            .map_err(|e| XmlError::new(position, e))?;
        decoder.nesting.event(&event, position)?;

        match event {
            Event::Start(e) => decoder.start(&e, position)?,
            Event::Empty(e) => {
                decoder.start(&e, position)?;
                decoder.end(e.name().as_ref(), position)?;
            }
            Event::End(e) => decoder.end(e.name().as_ref(), position)?,
            Event::Text(e) => {
                decoder.nesting.text(&e, position)?;
                if decoder.in_leaf() {
                    let text = e.unescape().map_err(|err| XmlError::new(position, err))?;
                    decoder.buffer.push_str(&text);
                }
            }
            Event::CData(e) => {
                if decoder.in_leaf() {
                    let text = std::str::from_utf8(&e).map_err(|err| XmlError::new(position, err))?;
                    decoder.buffer.push_str(text);
                }
            }
            Event::Eof => {
                decoder.nesting.finish(position)?;
                break;
            }
            _ => {}
        }
    }

    debug!(count = decoder.facts.len(), "decoded fact document");
    Ok(decoder.facts)
}

/// Fields collected for the fact element currently open.
#[derive(Debug, Default)]
struct Draft {
    author: String,
    fact_type: String,
    text: String,
}

impl Draft {
    fn set(&mut self, field: FactField, value: String) {
        match field {
            FactField::Author => self.author = value,
            FactField::Type => self.fact_type = value,
            FactField::Text => self.text = value,
        }
    }

    fn finish(self) -> Fact {
        Fact::new(self.author, self.fact_type, self.text)
    }
}

/// `draft` is `Some` between a fact's open and close tags. `field` is `Some`
/// while inside one of its leaf elements, together with the nesting depth of
/// that leaf; markup nested inside a leaf is skipped along with its text.
#[derive(Debug, Default)]
struct Decoder {
    facts: FactList,
    nesting: Nesting,
    draft: Option<Draft>,
    field: Option<(FactField, usize)>,
    buffer: String,
}

impl Decoder {
    fn in_leaf(&self) -> bool {
        matches!(self.field, Some((_, depth)) if depth == self.nesting.depth())
    }

    fn start(&mut self, e: &BytesStart<'_>, position: u64) -> Result<(), XmlError> {
        let name = e.name();
        self.nesting.open(name.as_ref(), position)?;
        if self.field.is_some() {
            return Ok(());
        }

        match XmlNode::from_name(name.as_ref()) {
            Some(XmlNode::Fact) => self.draft = Some(Draft::default()),
            Some(node) if self.draft.is_some() => {
                if let Some(field) = node.field() {
                    self.field = Some((field, self.nesting.depth()));
                    self.buffer.clear();
                }
            }
            _ => {}
        }
        Ok(())
    }

    fn end(&mut self, name: &[u8], position: u64) -> Result<(), XmlError> {
        let depth = self.nesting.depth();
        self.nesting.close(name, position)?;

        match self.field {
            Some((field, leaf_depth)) if leaf_depth == depth => {
                self.field = None;
                let value = std::mem::take(&mut self.buffer);
                if let Some(draft) = self.draft.as_mut() {
                    if !value.trim().is_empty() {
                        draft.set(field, value);
                    }
                }
                return Ok(());
            }
            Some(_) => return Ok(()),
            None => {}
        }

        if XmlNode::from_name(name) == Some(XmlNode::Fact) {
            if let Some(draft) = self.draft.take() {
                self.facts.add(draft.finish());
            }
        }
        Ok(())
    }
}
