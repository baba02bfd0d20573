use crate::error::Error;
use log::debug;
use serde::de::DeserializeOwned;
use serde::Serialize;

pub const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

/// A type that is written as a document root.
///
/// `LOCAL` is the element name of the root; the schema does not declare a
/// namespace, so the name is unqualified.
pub trait RootElement: Serialize + DeserializeOwned {
    const LOCAL: &'static str;
}

/// Required-element check run before a value is handed to the writer.
pub trait Validate {
    fn validate(&self) -> Result<(), Error>;
}

pub fn to_xml<T: RootElement>(value: &T) -> Result<String, Error> {
    quick_xml::se::to_string_with_root(T::LOCAL, value).map_err(|e| Error::XmlWrite(e.to_string()))
}

/// Writes `value` after checking that every required element is present.
pub fn to_xml_checked<T: RootElement + Validate>(value: &T) -> Result<String, Error> {
    value.validate()?;
    to_xml(value)
}

/// Writes a full document, declaration included.
pub fn to_document<T: RootElement>(value: &T) -> Result<String, Error> {
    let body = to_xml(value)?;
    Ok(format!("{XML_DECLARATION}\n{body}"))
}

pub fn from_xml<T: RootElement>(xml: &str) -> Result<T, Error> {
    debug!("reading {} document ({} bytes)", T::LOCAL, xml.len());
    Ok(quick_xml::de::from_str(xml)?)
}

pub(crate) fn require<V>(
    value: &Option<V>,
    parent: &'static str,
    element: &'static str,
) -> Result<(), Error> {
    if value.is_none() {
        return Err(Error::required(parent, element));
    }
    Ok(())
}

/// serde adapter for optional `xs:base64Binary` elements.
pub(crate) mod base64_binary {
    use base64::engine::general_purpose::STANDARD as BASE64_STD;
    use base64::Engine as _;
    use serde::{Deserialize, Deserializer, Serializer};

    pub(crate) fn serialize<S>(value: &Option<Vec<u8>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(bytes) => serializer.serialize_str(&BASE64_STD.encode(bytes)),
            None => serializer.serialize_none(),
        }
    }

    pub(crate) fn deserialize<'de, D>(deserializer: D) -> Result<Option<Vec<u8>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = Option::<String>::deserialize(deserializer)?;
        let Some(text) = text else {
            return Ok(None);
        };
        // line-wrapped payloads are common in server responses
        let compact: String = text.chars().filter(|c| !c.is_whitespace()).collect();
        if compact.is_empty() {
            return Ok(None);
        }
        BASE64_STD
            .decode(compact.as_bytes())
            .map(Some)
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests;
