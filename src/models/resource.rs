use serde::{Deserialize, Serialize};

/// A protected URI of an application domain, optionally narrowed by a query
/// string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UriResource {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query_string: Option<String>,
}

impl UriResource {
    pub const LOCAL: &'static str = "uriResource";

    pub fn new(
        uri: impl Into<String>,
        description: Option<String>,
        query_string: Option<String>,
    ) -> Self {
        Self {
            uri: Some(uri.into()),
            description,
            query_string,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UriList {
    #[serde(default)]
    pub uri_resource: Vec<UriResource>,
}

impl UriList {
    pub const LOCAL: &'static str = "uriList";

    pub fn new(uri_resource: Vec<UriResource>) -> Self {
        Self { uri_resource }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletedUriList {
    #[serde(default)]
    pub uri_resource: Vec<UriResource>,
}

impl DeletedUriList {
    pub const LOCAL: &'static str = "deletedUriList";

    pub fn new(uri_resource: Vec<UriResource>) -> Self {
        Self { uri_resource }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProtectedResourcesList {
    #[serde(default)]
    pub resource: Vec<String>,
}

impl ProtectedResourcesList {
    pub const LOCAL: &'static str = "protectedResourcesList";
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicResourcesList {
    #[serde(default)]
    pub resource: Vec<String>,
}

impl PublicResourcesList {
    pub const LOCAL: &'static str = "publicResourcesList";
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExcludedResourcesList {
    #[serde(default)]
    pub resource: Vec<String>,
}

impl ExcludedResourcesList {
    pub const LOCAL: &'static str = "excludedResourcesList";
}
