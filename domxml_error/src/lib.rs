use bon::bon;
use miette::{Diagnostic, NamedSource, Report, SourceSpan};
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum DomxmlError {
    ////////////////////////////////
    // Lib native errors
    #[error(transparent)]
    #[diagnostic(transparent)]
    WrapError(#[from] WrapError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    LibError(#[from] LibError),

    ////////////////////////////////
    // Conversion stages
    #[error(transparent)]
    #[diagnostic(transparent)]
    YamlError(#[from] YamlError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    SchemaError(#[from] SchemaError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    FileError(#[from] FileError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    TomlError(#[from] TomlError),

    ////////////////////////////////
    // Type convertion
    #[error(transparent)]
    #[diagnostic(code(domxml::parse::error))]
    XmlError(#[from] quick_xml::Error),

    #[error(transparent)]
    #[diagnostic(code(domxml::parse::error))]
    Utf8Error(#[from] std::str::Utf8Error),

    #[error(transparent)]
    #[diagnostic(code(domxml::parse::error))]
    FromUtf8Error(#[from] std::string::FromUtf8Error),

    #[error(transparent)]
    #[diagnostic(code(domxml::bat::error))]
    BatError(#[from] bat::error::Error),

    #[error(transparent)]
    #[diagnostic(code(domxml::io::error))]
    IoError(#[from] std::io::Error),
}

/**
A yaml syntax error pointing at the faulty line of the template.
*/
#[derive(Debug, Error, Diagnostic)]
#[error("Couldn't parse yaml: {message}")]
#[diagnostic(
    code(domxml::parse::error),
    help("the template must be a well formed yaml document")
)]
pub struct YamlError {
    pub message: String,
    #[source_code]
    pub src: NamedSource<String>,
    #[label("here")]
    pub span: Option<SourceSpan>,
}
impl YamlError {
    pub fn new(e: serde_yaml::Error, name: &str, string: &str) -> Self {
        let span = e.location().map(|location| {
            let offset = location.index().min(string.len());
            SourceSpan::from((offset, 0))
        });
        Self {
            message: e.to_string(),
            src: NamedSource::new(name, string.to_owned()),
            span,
        }
    }
}

/**
A toml syntax or typing error in the configuration file.
*/
#[derive(Debug, Error, Diagnostic)]
#[error("Couldn't parse config: {message}")]
#[diagnostic(code(domxml::config::error))]
pub struct TomlError {
    pub message: String,
    #[source_code]
    pub src: NamedSource<String>,
    #[label("here")]
    pub span: Option<SourceSpan>,
    #[help]
    pub help: String,
}
impl TomlError {
    pub fn new(e: toml::de::Error, name: &str, string: &str) -> Self {
        Self {
            message: e.message().to_owned(),
            src: NamedSource::new(name, string.to_owned()),
            span: e.span().map(SourceSpan::from),
            help: "allowed keys are: source, destination, mode, indent".to_owned(),
        }
    }
}

/**
Valid yaml (or xml) that doesn't describe a convertible domain.
Paths are dot separated keys starting at `domain`.
*/
#[derive(Debug, Error, Diagnostic)]
pub enum SchemaError {
    #[error("Invalid template: the document root is a {found}, not a mapping")]
    #[diagnostic(
        code(domxml::schema::error),
        help("a template starts with a top-level `domain:` mapping")
    )]
    RootNotMapping { found: String },

    #[error("Invalid template: missing top-level key `domain`")]
    #[diagnostic(
        code(domxml::schema::error),
        help("a template starts with a top-level `domain:` mapping")
    )]
    MissingDomain,

    #[error("Invalid template: `{path}` is a {found}, expected a mapping")]
    #[diagnostic(code(domxml::schema::error))]
    NotMapping { path: String, found: String },

    #[error("Invalid template: unsupported {found} at `{path}`")]
    #[diagnostic(
        code(domxml::schema::error),
        help("only scalars and nested mappings can be converted to xml")
    )]
    UnsupportedValue { path: String, found: String },

    #[error("Invalid template: non-string key `{key}` under `{path}`")]
    #[diagnostic(code(domxml::schema::error), help("quote the key to make it a string"))]
    NonStringKey { path: String, key: String },

    #[error("Invalid template: `{key}` under `{path}` is not a valid xml tag name")]
    #[diagnostic(
        code(domxml::schema::error),
        help("tag names start with a letter or `_` and contain only letters, digits, `-`, `_` or `.`")
    )]
    InvalidTag { path: String, key: String },

    #[error("Invalid template: `{path}` holds characters not allowed in xml text")]
    #[diagnostic(
        code(domxml::schema::error),
        help("control characters other than tab, newline and carriage return can't be written to xml 1.0")
    )]
    InvalidText { path: String },

    #[error("Invalid document: unexpected root element <{found}>")]
    #[diagnostic(code(domxml::schema::error), help("the root element must be <domain>"))]
    UnexpectedRoot { found: String },

    #[error("Invalid document: element `{path}` mixes text and child elements")]
    #[diagnostic(code(domxml::schema::error))]
    MixedContent { path: String },
}

/**
A filesystem error with the path it happened on.
*/
#[derive(Debug, Error, Diagnostic)]
#[error("{message} {}", .path.display())]
#[diagnostic(code(domxml::io::error))]
pub struct FileError {
    pub message: String,
    pub path: PathBuf,
    #[source]
    pub origin: std::io::Error,
    #[help]
    pub help: String,
}
impl FileError {
    pub fn read(path: &Path, origin: std::io::Error) -> Self {
        Self {
            message: "Couldn't read file".to_owned(),
            path: path.to_owned(),
            origin,
            help: "check that the file exists and is readable".to_owned(),
        }
    }
    pub fn write(path: &Path, origin: std::io::Error) -> Self {
        Self {
            message: "Couldn't write file".to_owned(),
            path: path.to_owned(),
            origin,
            help: "check that the destination directory exists and is writable".to_owned(),
        }
    }
}

/**
A config error with help higher origin
Can be recursively chained.
*/
#[derive(Debug, Error, Diagnostic)]
#[error("{}", message)]
#[diagnostic(code(domxml::wrap::error))]
pub struct WrapError {
    pub message: String,
    #[diagnostic_source]
    pub origin: Report,
    #[help]
    pub help: String,
}

#[bon]
impl WrapError {
    #[builder]
    pub fn new(msg: &str, help: &str, origin: Report) -> Self {
        Self {
            message: msg.to_owned(),
            help: help.to_owned(),
            origin,
        }
    }
}

/**
A root cause error with no inner origin
*/
#[derive(Debug, Error, Diagnostic)]
#[error("{}", message)]
#[diagnostic(code(domxml::lib::error))]
pub struct LibError {
    pub message: String,
    #[help]
    pub help: String,
}
impl LibError {
    pub fn new(message: &str, help: &str) -> Self {
        Self {
            message: message.to_owned(),
            help: help.to_owned(),
        }
    }
}
