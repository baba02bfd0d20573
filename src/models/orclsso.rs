use serde::{Deserialize, Serialize};

use super::policy::RregApplicationDomain;
use super::request::{agent_request, agent_response, require_base, Envelope, TYPE_ORCLSSO};
use super::resource::{ProtectedResourcesList, PublicResourcesList};
use crate::error::Error;
use crate::xml::{require, RootElement, Validate};

/// Registration of an Oracle SSO (mod_osso) partner application.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "OSSORegRequest", rename_all = "camelCase")]
pub struct OrclSSOCreate {
    #[serde(skip)]
    pub envelope: Envelope,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host_identifier: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent_base_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub virtual_host: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update_mode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sso_server_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub oracle_home_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_info: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_domain: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_create_policy: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logout_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure_url: Option<String>,
    #[serde(rename = "protectedResourcesList", default, skip_serializing_if = "Option::is_none")]
    pub protected_resource: Option<ProtectedResourcesList>,
    #[serde(rename = "publicResourcesList", default, skip_serializing_if = "Option::is_none")]
    pub public_resource: Option<PublicResourcesList>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protected_authn_scheme: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_authn_scheme: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rreg_application_domain: Option<RregApplicationDomain>,
}

agent_request!(OrclSSOCreate, "OSSORegRequest", Some(TYPE_ORCLSSO));

impl OrclSSOCreate {
    pub fn protected_resource_mut(&mut self) -> &mut ProtectedResourcesList {
        self.protected_resource
            .get_or_insert_with(ProtectedResourcesList::default)
    }

    pub fn public_resource_mut(&mut self) -> &mut PublicResourcesList {
        self.public_resource
            .get_or_insert_with(PublicResourcesList::default)
    }
}

impl Validate for OrclSSOCreate {
    fn validate(&self) -> Result<(), Error> {
        require_base(self)?;
        require(&self.agent_base_url, Self::LOCAL, "agentBaseUrl")?;
        if let Some(domain) = &self.rreg_application_domain {
            domain.validate()?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "OSSOUpdateAgentRegRequest", rename_all = "camelCase")]
pub struct OrclSSOUpdate {
    #[serde(skip)]
    pub envelope: Envelope,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host_identifier: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_info: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logout_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
}

agent_request!(
    OrclSSOUpdate,
    "OSSOUpdateAgentRegRequest",
    Some(TYPE_ORCLSSO)
);

impl Validate for OrclSSOUpdate {
    fn validate(&self) -> Result<(), Error> {
        require_base(self)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "OSSORegResponse", rename_all = "camelCase")]
pub struct OrclSSOResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host_identifier: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent_base_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sso_server_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_info: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logout_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub oracle_home_path: Option<String>,
}

agent_response!(OrclSSOResponse, "OSSORegResponse");

impl Validate for OrclSSOResponse {
    fn validate(&self) -> Result<(), Error> {
        require(&self.agent_name, Self::LOCAL, "agentName")?;
        require(&self.agent_base_url, Self::LOCAL, "agentBaseUrl")
    }
}
