use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Server {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server_host: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server_port: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_connections: Option<i32>,
}

impl Server {
    pub const LOCAL: &'static str = "Server";

    pub fn new(host: impl Into<String>, port: i32, max_connections: i32) -> Self {
        Self {
            server_host: Some(host.into()),
            server_port: Some(port),
            max_connections: Some(max_connections),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrimaryServerList {
    #[serde(rename = "Server", default)]
    pub server: Vec<Server>,
}

impl PrimaryServerList {
    pub const LOCAL: &'static str = "primaryServerList";

    pub fn new(server: Vec<Server>) -> Self {
        Self { server }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecondaryServerList {
    #[serde(rename = "Server", default)]
    pub server: Vec<Server>,
}

impl SecondaryServerList {
    pub const LOCAL: &'static str = "secondaryServerList";

    pub fn new(server: Vec<Server>) -> Self {
        Self { server }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostPortVariations {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<String>,
}

impl HostPortVariations {
    pub const LOCAL: &'static str = "HostPortVariations";

    pub fn new(host: impl Into<String>, port: impl Into<String>) -> Self {
        Self {
            host: Some(host.into()),
            port: Some(port.into()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostPortVariationsList {
    #[serde(rename = "HostPortVariations", default)]
    pub host_port_variations: Vec<HostPortVariations>,
}

impl HostPortVariationsList {
    pub const LOCAL: &'static str = "hostPortVariationsList";
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDefinedParam {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl UserDefinedParam {
    pub const LOCAL: &'static str = "userDefinedParam";

    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            value: Some(value.into()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDefinedParameters {
    #[serde(default)]
    pub user_defined_param: Vec<UserDefinedParam>,
}

impl UserDefinedParameters {
    pub const LOCAL: &'static str = "userDefinedParameters";
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IpValidationExceptions {
    #[serde(default)]
    pub ip_address: Vec<String>,
}

impl IpValidationExceptions {
    pub const LOCAL: &'static str = "ipValidationExceptions";
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogInUrls {
    #[serde(default)]
    pub url: Vec<String>,
}

impl LogInUrls {
    pub const LOCAL: &'static str = "logInUrls";
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogOutUrls {
    #[serde(default)]
    pub url: Vec<String>,
}

impl LogOutUrls {
    pub const LOCAL: &'static str = "logOutUrls";

    pub fn new(url: Vec<String>) -> Self {
        Self { url }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotEnforcedUrls {
    #[serde(default)]
    pub url: Vec<String>,
}

impl NotEnforcedUrls {
    pub const LOCAL: &'static str = "notEnforcedUrls";
}
