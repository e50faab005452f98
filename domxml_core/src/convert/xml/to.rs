use std::io::Write;

use quick_xml::escape::partial_escape;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::writer::Writer;

use crate::config::OutputMode;
use crate::convert::tree::{Body, DomainTree, Element};

// Error Handling
use domxml_error::DomxmlError;
use log::debug;

pub const XML_DECLARATION: &str = r#"<?xml version="1.0" ?>"#;

/**
Serialize the tree.
Compact output has no whitespace between tags.
Pretty output starts with the xml declaration and puts every element
on its own line, indented by `indent` spaces per level.
*/
pub fn to_xml(tree: &DomainTree, mode: OutputMode, indent: usize) -> Result<String, DomxmlError> {
    let mut writer = match mode {
        OutputMode::Compact => Writer::new(Vec::new()),
        OutputMode::Pretty => Writer::new_with_indent(Vec::new(), b' ', indent),
    };
    write_element(&mut writer, tree.root())?;
    let body = String::from_utf8(writer.into_inner())?;

    let string = match mode {
        OutputMode::Compact => body,
        OutputMode::Pretty => format!("{XML_DECLARATION}\n{body}\n"),
    };
    debug!("Serialized domain as {mode} xml ({} bytes).", string.len());

    Ok(string)
}

/**
Recursive function that writes an element and its children.
Empty branches are self-closing, leaves keep their text inline.
*/
fn write_element<W: Write>(writer: &mut Writer<W>, element: &Element) -> Result<(), DomxmlError> {
    let tag = element.tag.as_str();
    match &element.body {
        Body::Text(text) => {
            writer.write_event(Event::Start(BytesStart::new(tag)))?;
            writer.write_event(Event::Text(BytesText::from_escaped(partial_escape(text))))?;
            writer.write_event(Event::End(BytesEnd::new(tag)))?;
        }
        Body::Children(children) if children.is_empty() => {
            writer.write_event(Event::Empty(BytesStart::new(tag)))?;
        }
        Body::Children(children) => {
            writer.write_event(Event::Start(BytesStart::new(tag)))?;
            for child in children {
                write_element(writer, child)?;
            }
            writer.write_event(Event::End(BytesEnd::new(tag)))?;
        }
    }
    Ok(())
}
