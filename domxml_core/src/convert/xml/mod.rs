pub mod from;
pub mod to;

pub use from::from_xml;
pub use to::{to_xml, XML_DECLARATION};
