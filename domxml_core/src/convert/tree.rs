use serde_yaml::{Mapping, Value};

use super::scalar;

// Error Handling
use domxml_error::{DomxmlError, SchemaError};
use log::trace;

pub const ROOT_TAG: &str = "domain";

/// Content of an element: text for leaves, ordered children otherwise.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Body {
    Text(String),
    Children(Vec<Element>),
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Element {
    pub tag: String,
    pub body: Body,
}

impl Element {
    pub fn leaf(tag: &str, text: &str) -> Self {
        Self {
            tag: tag.to_owned(),
            body: Body::Text(text.to_owned()),
        }
    }
    pub fn branch(tag: &str, children: Vec<Element>) -> Self {
        Self {
            tag: tag.to_owned(),
            body: Body::Children(children),
        }
    }
    pub fn text(&self) -> Option<&str> {
        match &self.body {
            Body::Text(text) => Some(text),
            Body::Children(_) => None,
        }
    }
    pub fn children(&self) -> &[Element] {
        match &self.body {
            Body::Text(_) => &[],
            Body::Children(children) => children,
        }
    }
    /**
    Number of element levels below and including this one.
    A leaf, or an empty branch, has depth 1.
    */
    pub fn depth(&self) -> usize {
        1 + self.children().iter().map(Element::depth).max().unwrap_or(0)
    }
    /**
    Every leaf as a (dot separated key path, text) pair, in document order.
    */
    pub fn leaves(&self) -> Vec<(String, String)> {
        let mut leaves = vec![];
        self.collect_leaves(&self.tag, &mut leaves);
        leaves
    }
    fn collect_leaves(&self, path: &str, leaves: &mut Vec<(String, String)>) {
        match &self.body {
            Body::Text(text) => leaves.push((path.to_owned(), text.to_owned())),
            Body::Children(children) => {
                for child in children {
                    child.collect_leaves(&format!("{path}.{}", child.tag), leaves);
                }
            }
        }
    }
}

/**
The xml element tree of a vm template.
The root element is always `<domain>`.
*/
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct DomainTree {
    root: Element,
}

impl DomainTree {
    /**
    Build the tree from a whole yaml document,
    which must hold a top-level `domain` mapping.
    */
    pub fn from_document(value: &Value) -> Result<Self, DomxmlError> {
        let map = match value {
            Value::Mapping(map) => map,
            other => {
                let found = scalar::kind(other).to_owned();
                return Err(SchemaError::RootNotMapping { found }.into());
            }
        };
        match map.get(ROOT_TAG) {
            Some(Value::Mapping(domain)) => Self::from_mapping(domain),
            Some(other) => Err(SchemaError::NotMapping {
                path: ROOT_TAG.to_owned(),
                found: scalar::kind(other).to_owned(),
            }
            .into()),
            None => Err(SchemaError::MissingDomain.into()),
        }
    }
    /**
    Build the tree from the mapping found under the `domain` key.
    */
    pub fn from_mapping(domain: &Mapping) -> Result<Self, DomxmlError> {
        let children = make_children(ROOT_TAG, domain)?;
        Ok(Self {
            root: Element::branch(ROOT_TAG, children),
        })
    }
    pub fn root(&self) -> &Element {
        &self.root
    }
}

impl TryFrom<Element> for DomainTree {
    type Error = DomxmlError;

    fn try_from(root: Element) -> Result<Self, Self::Error> {
        if root.tag != ROOT_TAG {
            return Err(SchemaError::UnexpectedRoot { found: root.tag }.into());
        }
        Ok(Self { root })
    }
}

/**
Recursive function that turns every key of the mapping into an element.
*/
fn make_children(path: &str, map: &Mapping) -> Result<Vec<Element>, DomxmlError> {
    map.iter()
        .map(|(key, value)| make_element(path, key, value))
        .collect()
}

fn make_element(parent: &str, key: &Value, value: &Value) -> Result<Element, DomxmlError> {
    let tag = match key {
        Value::String(tag) => tag,
        other => {
            let key = scalar::to_text(other).unwrap_or_else(|| scalar::kind(other).to_owned());
            return Err(SchemaError::NonStringKey {
                path: parent.to_owned(),
                key,
            }
            .into());
        }
    };
    if !is_valid_tag(tag) {
        return Err(SchemaError::InvalidTag {
            path: parent.to_owned(),
            key: tag.to_owned(),
        }
        .into());
    }
    let path = format!("{parent}.{tag}");
    trace!("Convert {path}");

    if let Value::Mapping(map) = value {
        let children = make_children(&path, map)?;
        return Ok(Element::branch(tag, children));
    }
    match scalar::to_text(value) {
        Some(text) if !text.chars().all(scalar::is_xml_char) => {
            Err(SchemaError::InvalidText { path }.into())
        }
        Some(text) => Ok(Element::leaf(tag, &text)),
        None => Err(SchemaError::UnsupportedValue {
            path,
            found: scalar::kind(value).to_owned(),
        }
        .into()),
    }
}

/**
Xml names without namespaces:
a letter or `_`, followed by letters, digits, `-`, `_` or `.`.
*/
pub fn is_valid_tag(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || matches!(c, '-' | '_' | '.'))
}
