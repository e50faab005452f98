use quick_xml::events::Event;
use quick_xml::reader::Reader;

use crate::convert::tree::{DomainTree, Element};

// Error Handling
use domxml_error::{DomxmlError, LibError, SchemaError};

/// An element whose closing tag hasn't been read yet.
struct Frame {
    tag: String,
    text: String,
    children: Vec<Element>,
}

/**
Read back a document produced by `to_xml` into a DomainTree.
The declaration, comments and whitespace between elements are ignored.
*/
pub fn from_xml(xml: &str) -> Result<DomainTree, DomxmlError> {
    let mut reader = Reader::from_str(xml);
    let mut stack: Vec<Frame> = vec![];
    let mut root: Option<Element> = None;

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                let tag = std::str::from_utf8(e.name().as_ref())?.to_owned();
                stack.push(Frame {
                    tag,
                    text: String::new(),
                    children: vec![],
                });
            }
            Event::Empty(e) => {
                let tag = std::str::from_utf8(e.name().as_ref())?.to_owned();
                attach(&mut stack, &mut root, Element::branch(&tag, vec![]))?;
            }
            Event::Text(e) => {
                let text = e.unescape()?;
                match stack.last_mut() {
                    Some(frame) => frame.text.push_str(&text),
                    None if text.trim().is_empty() => {}
                    None => {
                        let message = "Text found outside of the root element";
                        let help = "a document holds a single <domain> element";
                        return Err(LibError::new(message, help).into());
                    }
                }
            }
            Event::CData(e) => {
                if let Some(frame) = stack.last_mut() {
                    frame.text.push_str(std::str::from_utf8(&e)?);
                }
            }
            Event::End(_) => {
                // The reader rejects unbalanced closing tags.
                if let Some(frame) = stack.pop() {
                    let element = close(&stack, frame)?;
                    attach(&mut stack, &mut root, element)?;
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    match root {
        Some(root) => DomainTree::try_from(root),
        None => {
            let message = "The xml document has no root element";
            let help = "a document holds a single <domain> element";
            Err(LibError::new(message, help).into())
        }
    }
}

fn close(stack: &[Frame], frame: Frame) -> Result<Element, DomxmlError> {
    if frame.children.is_empty() {
        return Ok(Element::leaf(&frame.tag, &frame.text));
    }
    if !frame.text.trim().is_empty() {
        let path = stack
            .iter()
            .map(|e| e.tag.as_str())
            .chain([frame.tag.as_str()])
            .collect::<Vec<&str>>()
            .join(".");
        return Err(SchemaError::MixedContent { path }.into());
    }
    Ok(Element::branch(&frame.tag, frame.children))
}

fn attach(
    stack: &mut [Frame],
    root: &mut Option<Element>,
    element: Element,
) -> Result<(), DomxmlError> {
    match stack.last_mut() {
        Some(parent) => parent.children.push(element),
        None if root.is_none() => *root = Some(element),
        None => {
            let message = "The xml document has more than one root element";
            let help = "a document holds a single <domain> element";
            return Err(LibError::new(message, help).into());
        }
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::config::OutputMode;
    use crate::convert::xml::to_xml;
    use pretty_assertions::assert_eq;

    // Error Handling
    use miette::Result;

    fn sample() -> DomainTree {
        let root = Element::branch(
            "domain",
            vec![
                Element::leaf("name", "ubuntu <24.04> & co"),
                Element::leaf("description", ""),
                Element::leaf("padded", "  spaced  "),
                Element::branch("features", vec![]),
                Element::branch(
                    "os",
                    vec![
                        Element::leaf("type", "hvm"),
                        Element::branch("boot", vec![Element::leaf("dev", "hd")]),
                    ],
                ),
            ],
        );
        DomainTree::try_from(root).unwrap()
    }

    #[test]
    fn read_back_compact() -> Result<()> {
        let tree = sample();
        let xml = to_xml(&tree, OutputMode::Compact, 2)?;
        assert_eq!(from_xml(&xml)?, tree);
        Ok(())
    }

    #[test]
    fn read_back_pretty() -> Result<()> {
        let tree = sample();
        let xml = to_xml(&tree, OutputMode::Pretty, 2)?;
        assert_eq!(from_xml(&xml)?, tree);
        Ok(())
    }

    #[test]
    fn empty_element_and_empty_text_stay_distinct() -> Result<()> {
        let res = from_xml("<domain><devices/><name></name></domain>")?;
        let expected = Element::branch(
            "domain",
            vec![Element::branch("devices", vec![]), Element::leaf("name", "")],
        );
        assert_eq!(res.root(), &expected);
        Ok(())
    }

    #[test]
    fn reject_other_roots() {
        let res = from_xml("<network><name>default</name></network>");
        assert!(matches!(
            res,
            Err(DomxmlError::SchemaError(SchemaError::UnexpectedRoot { .. }))
        ));
    }

    #[test]
    fn reject_mixed_content() {
        let res = from_xml("<domain><os>hvm<boot>hd</boot></os></domain>");
        match res {
            Err(DomxmlError::SchemaError(SchemaError::MixedContent { path })) => {
                assert_eq!(path, "domain.os");
            }
            other => panic!("unexpected result {other:?}"),
        }
    }

    #[test]
    fn reject_malformed_xml() {
        let res = from_xml("<domain><name>vm1</domain>");
        assert!(matches!(res, Err(DomxmlError::XmlError(_))));
    }

    #[test]
    fn reject_empty_document() {
        let res = from_xml("<?xml version=\"1.0\" ?>\n");
        assert!(matches!(res, Err(DomxmlError::LibError(_))));
    }
}
