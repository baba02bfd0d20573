use std::collections::BTreeMap;

use log::debug;
use serde::{Deserialize, Serialize};
use url::Url;

use super::instance::AccessAgentInstance;
use super::property::{Mode, Version};
use crate::error::Error;
use crate::models::{
    AttributeMapping, ExcludedResourcesList, HostPortVariations, HostPortVariationsList,
    IpValidationExceptions, LogInUrls, LogOutUrls, MiscellaneousProperties, MiscellaneousProperty,
    NotEnforcedUrls, PrimaryServerList, ProfileAttributeMapping, ProtectedResourcesList,
    PublicResourcesList, ResponseAttributeMapping, RregApplicationDomain, SecondaryServerList,
    Server, SessionAttributeMapping, UserDefinedParam, UserDefinedParameters,
};

/// Registration settings of one agent as read from a JSON file.
///
/// ```json
/// {
///   "name": "webgate01",
///   "version": "11g",
///   "mode": "agentcreate",
///   "serviceUrl": "http://oam.example.com:7001",
///   "username": "weblogic",
///   "password": "secret",
///   "parameters": { "hostIdentifier": "webgate01", "security": "open" },
///   "primaryServers": [{ "serverHost": "oam1", "serverPort": 5575, "maxConnections": 1 }]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentDescriptor {
    pub name: String,
    pub version: Version,
    pub mode: Mode,
    pub service_url: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    /// Property values keyed by property id.
    #[serde(default)]
    pub parameters: BTreeMap<String, String>,
    #[serde(default)]
    pub primary_servers: Vec<Server>,
    #[serde(default)]
    pub secondary_servers: Vec<Server>,
    #[serde(default)]
    pub host_port_variations: Vec<HostPortVariations>,
    #[serde(default)]
    pub protected_resources: Vec<String>,
    #[serde(default)]
    pub public_resources: Vec<String>,
    #[serde(default)]
    pub excluded_resources: Vec<String>,
    #[serde(default)]
    pub user_defined_parameters: BTreeMap<String, String>,
    #[serde(default)]
    pub log_in_urls: Vec<String>,
    #[serde(default)]
    pub log_out_urls: Vec<String>,
    #[serde(default)]
    pub not_enforced_urls: Vec<String>,
    #[serde(default)]
    pub ip_validation_exceptions: Vec<String>,
    /// OpenSSO attribute mappings, source attribute name to header name.
    #[serde(default)]
    pub profile_attribute_mapping: BTreeMap<String, String>,
    #[serde(default)]
    pub session_attribute_mapping: BTreeMap<String, String>,
    #[serde(default)]
    pub response_attribute_mapping: BTreeMap<String, String>,
    #[serde(default)]
    pub miscellaneous_properties: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_domain: Option<RregApplicationDomain>,
}

impl Default for AgentDescriptor {
    fn default() -> Self {
        Self {
            name: String::new(),
            version: Version::Agent11,
            mode: Mode::Create,
            service_url: String::new(),
            username: String::new(),
            password: String::new(),
            parameters: BTreeMap::new(),
            primary_servers: Vec::new(),
            secondary_servers: Vec::new(),
            host_port_variations: Vec::new(),
            protected_resources: Vec::new(),
            public_resources: Vec::new(),
            excluded_resources: Vec::new(),
            user_defined_parameters: BTreeMap::new(),
            log_in_urls: Vec::new(),
            log_out_urls: Vec::new(),
            not_enforced_urls: Vec::new(),
            ip_validation_exceptions: Vec::new(),
            profile_attribute_mapping: BTreeMap::new(),
            session_attribute_mapping: BTreeMap::new(),
            response_attribute_mapping: BTreeMap::new(),
            miscellaneous_properties: BTreeMap::new(),
            application_domain: None,
        }
    }
}

impl AgentDescriptor {
    pub fn from_json(json: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self, Error> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Builds the agent instance. Property ids are resolved against the
    /// catalogue and the service URL must parse; empty lists attach nothing.
    pub fn into_instance(self) -> Result<AccessAgentInstance, Error> {
        Url::parse(&self.service_url)?;
        let mut instance = AccessAgentInstance::new(
            self.name,
            self.version,
            self.mode,
            self.service_url,
            self.username,
            self.password,
        );
        for (id, value) in self.parameters {
            instance.add_parameter(&id, value)?;
        }
        if !self.primary_servers.is_empty() {
            instance.set_primary_server(PrimaryServerList::new(self.primary_servers))?;
        }
        if !self.secondary_servers.is_empty() {
            instance.set_secondary_server(SecondaryServerList::new(self.secondary_servers))?;
        }
        if !self.host_port_variations.is_empty() {
            instance.set_host_port_variations(HostPortVariationsList {
                host_port_variations: self.host_port_variations,
            })?;
        }
        if !self.protected_resources.is_empty() {
            instance.set_protected_resource(ProtectedResourcesList {
                resource: self.protected_resources,
            })?;
        }
        if !self.public_resources.is_empty() {
            instance.set_public_resource(PublicResourcesList {
                resource: self.public_resources,
            })?;
        }
        if !self.excluded_resources.is_empty() {
            instance.set_excluded_resource(ExcludedResourcesList {
                resource: self.excluded_resources,
            })?;
        }
        if !self.user_defined_parameters.is_empty() {
            let user_defined_param = self
                .user_defined_parameters
                .into_iter()
                .map(|(name, value)| UserDefinedParam::new(name, value))
                .collect();
            instance.set_user_defined_parameters(UserDefinedParameters { user_defined_param })?;
        }
        if !self.log_in_urls.is_empty() {
            instance.set_login_urls(LogInUrls { url: self.log_in_urls })?;
        }
        if !self.log_out_urls.is_empty() {
            instance.set_logout_urls(LogOutUrls::new(self.log_out_urls))?;
        }
        if !self.not_enforced_urls.is_empty() {
            instance.set_not_enforced_urls(NotEnforcedUrls {
                url: self.not_enforced_urls,
            })?;
        }
        if !self.ip_validation_exceptions.is_empty() {
            instance.set_validation_exceptions(IpValidationExceptions {
                ip_address: self.ip_validation_exceptions,
            })?;
        }
        if !self.profile_attribute_mapping.is_empty() {
            instance.set_profile_mapping(ProfileAttributeMapping {
                attribute_mapping: mappings(self.profile_attribute_mapping),
            })?;
        }
        if !self.session_attribute_mapping.is_empty() {
            instance.set_session_mapping(SessionAttributeMapping {
                attribute_mapping: mappings(self.session_attribute_mapping),
            })?;
        }
        if !self.response_attribute_mapping.is_empty() {
            instance.set_response_mapping(ResponseAttributeMapping {
                attribute_mapping: mappings(self.response_attribute_mapping),
            })?;
        }
        if !self.miscellaneous_properties.is_empty() {
            let miscellaneous_property = self
                .miscellaneous_properties
                .into_iter()
                .map(|(name, value)| MiscellaneousProperty::new(name, value))
                .collect();
            instance.set_miscellaneous_properties(MiscellaneousProperties {
                miscellaneous_property,
            })?;
        }
        if let Some(domain) = self.application_domain {
            instance.set_application_domain(domain)?;
        }
        debug!("loaded agent {} ({})", instance.name, instance.version);
        Ok(instance)
    }
}

fn mappings(entries: BTreeMap<String, String>) -> Vec<AttributeMapping> {
    entries
        .into_iter()
        .map(|(name, value)| AttributeMapping::new(name, value))
        .collect()
}
