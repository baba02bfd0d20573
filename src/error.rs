use std::fmt;

/// Operation a registration instance is validated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceOperation {
    Create,
    Modify,
    Delete,
    Validate,
    Print,
}

impl fmt::Display for ServiceOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ServiceOperation::Create => "create",
            ServiceOperation::Modify => "modify",
            ServiceOperation::Delete => "delete",
            ServiceOperation::Validate => "validate",
            ServiceOperation::Print => "print",
        };
        f.write_str(name)
    }
}

/// An invalid value for a named property of an entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidValue {
    pub entity: String,
    pub property: String,
    pub value: String,
}

impl fmt::Display for InvalidValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} property '{}' has invalid value '{}'",
            self.entity, self.property, self.value
        )
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("xml write error: {0}")]
    XmlWrite(String),
    #[error("xml read error: {0}")]
    XmlRead(#[from] quick_xml::DeError),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("url parse error: {0}")]
    Url(#[from] url::ParseError),
    #[error("parameter '{0}' is missing")]
    ParameterMissing(String),
    #[error("element '{0}' may only be specified once")]
    ElementOnlyOnce(String),
    #[error("parameter '{0}' is mandatory")]
    ParameterMandatory(String),
    #[error("no parameters specified")]
    ParameterEmpty,
    #[error("{0}")]
    ParameterInvalid(InvalidValue),
    #[error("unknown property: {0}")]
    UnknownProperty(String),
    #[error("unknown {kind} literal: {value}")]
    UnknownLiteral { kind: &'static str, value: String },
    #[error("required element '{element}' of '{parent}' is missing")]
    RequiredElement {
        parent: &'static str,
        element: &'static str,
    },
    #[error("agent version {version} does not support {operation}")]
    Unsupported {
        version: String,
        operation: ServiceOperation,
    },
}

impl Error {
    pub(crate) fn invalid(
        entity: impl Into<String>,
        property: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Error::ParameterInvalid(InvalidValue {
            entity: entity.into(),
            property: property.into(),
            value: value.into(),
        })
    }

    pub(crate) fn required(parent: &'static str, element: &'static str) -> Self {
        Error::RequiredElement { parent, element }
    }
}
