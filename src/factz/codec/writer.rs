use super::{is_xml_char, Nesting, XmlError, XmlNode};
use crate::model::{Fact, FactField};
use quick_xml::escape::escape;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};
use tracing::debug;

const BOM: char = '\u{feff}';

/// Returns `document` with `fact` appended as the last child of the root.
///
/// Existing events are written back as read, without reindenting.
/// The whole document is checked while streaming, so a malformed input
/// produces an error instead of a half-written result. So does a field
/// holding a character XML 1.0 cannot represent. A leading byte order mark
/// is kept.
pub fn append(document: &str, fact: &Fact) -> Result<String, XmlError> {
    check_chars(fact)?;

    let mut out = Vec::with_capacity(document.len() + 256);
    if document.starts_with(BOM) {
        let mut buf = [0u8; 4];
        out.extend_from_slice(BOM.encode_utf8(&mut buf).as_bytes());
    }

    let mut reader = Reader::from_str(document);
    let mut writer = Writer::new(out);
    let mut nesting = Nesting::default();
    let mut started = false;
    let mut appended = false;

    loop {
        let position = reader.buffer_position() as u64;
        let event = reader
            .read_event()
            .map_err(|e| XmlError::new(position, e))?;
        nesting.event(&event, position)?;

        if !started && !matches!(event, Event::Eof) {
            started = true;
            if !matches!(event, Event::Decl(_)) {
                let decl = BytesDecl::new("1.0", Some("UTF-8"), None);
                emit(&mut writer, Event::Decl(decl), position)?;
            }
        }

        match event {
            Event::Start(e) => {
                nesting.open(e.name().as_ref(), position)?;
                emit(&mut writer, Event::Start(e), position)?;
            }
            Event::Empty(e) if nesting.depth() == 0 => {
                nesting.open(e.name().as_ref(), position)?;
                nesting.close(e.name().as_ref(), position)?;
                emit(&mut writer, Event::Start(e.borrow()), position)?;
                write_fact(&mut writer, fact, position)?;
                emit(&mut writer, Event::End(e.to_end()), position)?;
                appended = true;
            }
            Event::End(e) => {
                nesting.close(e.name().as_ref(), position)?;
                if nesting.depth() == 0 {
                    write_fact(&mut writer, fact, position)?;
                    appended = true;
                }
                emit(&mut writer, Event::End(e), position)?;
            }
            Event::Text(e) => {
                nesting.text(&e, position)?;
                emit(&mut writer, Event::Text(e), position)?;
            }
            Event::Eof => {
                nesting.finish(position)?;
                break;
            }
            other => emit(&mut writer, other, position)?,
        }
    }

    if !appended {
        return Err(XmlError::new(document.len() as u64, "no root element to append to"));
    }

    debug!(author = fact.author(), "appended fact element");
    String::from_utf8(writer.into_inner())
        .map_err(|e| XmlError::new(document.len() as u64, e))
}

fn check_chars(fact: &Fact) -> Result<(), XmlError> {
    for field in FactField::ALL {
        if let Some(c) = fact.field(field).chars().find(|&c| !is_xml_char(c)) {
            return Err(XmlError::new(
                0,
                format!(
                    "<{}> contains U+{:04X}, which XML cannot hold",
                    XmlNode::for_field(field).name(),
                    c as u32
                ),
            ));
        }
    }
    Ok(())
}

/// Escapes markup, and writes `\r` as a character reference so readers do
/// not normalise it to `\n`.
fn leaf_text(value: &str) -> BytesText<'static> {
    BytesText::from_escaped(escape(value).replace('\r', "&#13;"))
}

fn write_fact(writer: &mut Writer<Vec<u8>>, fact: &Fact, position: u64) -> Result<(), XmlError> {
    let fact_tag = XmlNode::Fact.name();
    emit(writer, Event::Start(BytesStart::new(fact_tag)), position)?;
    for field in FactField::ALL {
        let tag = XmlNode::for_field(field).name();
        emit(writer, Event::Start(BytesStart::new(tag)), position)?;
        emit(writer, Event::Text(leaf_text(fact.field(field))), position)?;
        emit(writer, Event::End(BytesEnd::new(tag)), position)?;
    }
    emit(writer, Event::End(BytesEnd::new(fact_tag)), position)
}

fn emit(writer: &mut Writer<Vec<u8>>, event: Event<'_>, position: u64) -> Result<(), XmlError> {
    writer
        .write_event(event)
        .map_err(|e| XmlError::new(position, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::decode;

    fn sample_fact() -> Fact {
        Fact::new("Grace Hopper", "computing", "Ask forgiveness, not permission.")
    }

    #[test]
    fn appends_as_last_child_of_root() {
        let doc = r#"<?xml version="1.0" encoding="UTF-8"?><fact-list><fact><author>A</author><fact-type>T</fact-type><fact-text>X</fact-text></fact></fact-list>"#;
        let out = append(doc, &sample_fact()).unwrap();

        assert!(out.ends_with(
            "<fact><author>Grace Hopper</author><fact-type>computing</fact-type><fact-text>Ask forgiveness, not permission.</fact-text></fact></fact-list>"
        ));
        let list = decode(&out).unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list.get(0), Some(&Fact::new("A", "T", "X")));
        assert_eq!(list.get(1), Some(&sample_fact()));
    }

    #[test]
    fn preserves_existing_nodes() {
        let doc = "<?xml version=\"1.0\"?>\n<!-- my facts -->\n<fact-list lang=\"en\">\n  <fact><author>A</author><fact-type>T</fact-type><fact-text>X &amp; Y</fact-text></fact>\n</fact-list>\n";
        let out = append(doc, &sample_fact()).unwrap();

        assert!(out.starts_with("<?xml version=\"1.0\"?>\n<!-- my facts -->\n<fact-list lang=\"en\">"));
        assert!(out.contains("<fact-text>X &amp; Y</fact-text>"));
        assert!(out.ends_with("</fact></fact-list>\n"));
    }

    #[test]
    fn expands_self_closing_root() {
        let out = append("<fact-list/>", &sample_fact()).unwrap();
        assert!(out.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(out.contains("<fact-list><fact><author>Grace Hopper</author>"));
        assert!(out.ends_with("</fact></fact-list>"));
        assert_eq!(decode(&out).unwrap().get(0), Some(&sample_fact()));
    }

    #[test]
    fn escapes_markup_in_new_fields() {
        let fact = Fact::new("<b>", "a & b", "\"quoted\"");
        let out = append("<fact-list></fact-list>", &fact).unwrap();
        assert!(!out.contains("<b>"));
        assert_eq!(decode(&out).unwrap().get(0), Some(&fact));
    }

    #[test]
    fn carriage_returns_survive_as_character_references() {
        let fact = Fact::new("A", "T", "X\r\ny");
        let out = append("<fact-list/>", &fact).unwrap();
        assert!(out.contains("<fact-text>X&#13;\ny</fact-text>"));
        assert_eq!(decode(&out).unwrap().get(0), Some(&fact));
    }

    #[test]
    fn rejects_characters_xml_cannot_hold() {
        let err = append("<fact-list/>", &Fact::new("A\u{1}", "T", "X")).unwrap_err();
        assert!(err.message.contains("U+0001"));
        assert!(append("<fact-list/>", &Fact::new("A", "T", "X\u{FFFF}")).is_err());
    }

    #[test]
    fn rejects_declaration_after_start() {
        assert!(append("\n<?xml version=\"1.0\"?><fact-list/>", &sample_fact()).is_err());
    }

    #[test]
    fn keeps_byte_order_mark() {
        let doc = "\u{feff}<?xml version=\"1.0\"?><fact-list/>";
        let out = append(doc, &sample_fact()).unwrap();
        assert!(out.starts_with("\u{feff}<?xml version=\"1.0\"?><fact-list><fact>"));
        assert_eq!(out.matches('\u{feff}').count(), 1);
    }

    #[test]
    fn rejects_malformed_documents() {
        assert!(append("", &sample_fact()).is_err());
        assert!(append("<fact-list><fact>", &sample_fact()).is_err());
        assert!(append("<fact-list></fact>", &sample_fact()).is_err());
        assert!(append("not xml", &sample_fact()).is_err());
    }
}
