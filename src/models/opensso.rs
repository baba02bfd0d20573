use serde::{Deserialize, Serialize};

use super::mapping::{
    MiscellaneousProperties, ProfileAttributeMapping, ResponseAttributeMapping, ResponseProperties,
    SessionAttributeMapping,
};
use super::policy::RregApplicationDomain;
use super::request::{agent_request, agent_response, require_base, Envelope, TYPE_OPENSSO};
use super::resource::{ExcludedResourcesList, ProtectedResourcesList, PublicResourcesList};
use super::server::{HostPortVariationsList, LogInUrls, LogOutUrls, NotEnforcedUrls};
use crate::error::Error;
use crate::xml::{require, RootElement, Validate};

/// Registration of an OpenSSO policy agent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "OpenSSORegRequest", rename_all = "camelCase")]
pub struct OpenSSOCreate {
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
    pub host_port_variations_list: Option<HostPortVariationsList>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_domain: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_create_policy: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent_password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent_debug_dir: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent_audit_dir: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent_audit_file_name: Option<String>,
    #[serde(rename = "protectedResourcesList", default, skip_serializing_if = "Option::is_none")]
    pub protected_resource: Option<ProtectedResourcesList>,
    #[serde(rename = "publicResourcesList", default, skip_serializing_if = "Option::is_none")]
    pub public_resource: Option<PublicResourcesList>,
    #[serde(rename = "excludedResourcesList", default, skip_serializing_if = "Option::is_none")]
    pub excluded_resource: Option<ExcludedResourcesList>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protected_authn_scheme: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rreg_application_domain: Option<RregApplicationDomain>,
}

agent_request!(OpenSSOCreate, "OpenSSORegRequest", Some(TYPE_OPENSSO));

impl OpenSSOCreate {
    pub fn protected_resource_mut(&mut self) -> &mut ProtectedResourcesList {
        self.protected_resource
            .get_or_insert_with(ProtectedResourcesList::default)
    }

    pub fn public_resource_mut(&mut self) -> &mut PublicResourcesList {
        self.public_resource
            .get_or_insert_with(PublicResourcesList::default)
    }

    pub fn excluded_resource_mut(&mut self) -> &mut ExcludedResourcesList {
        self.excluded_resource
            .get_or_insert_with(ExcludedResourcesList::default)
    }
}

impl Validate for OpenSSOCreate {
    fn validate(&self) -> Result<(), Error> {
        require_base(self)?;
        if let Some(domain) = &self.rreg_application_domain {
            domain.validate()?;
        }
        Ok(())
    }
}

/// Modification of a registered OpenSSO policy agent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "OpenSSOUpdateAgentRegRequest", rename_all = "camelCase")]
pub struct OpenSSOUpdate {
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
    pub agent_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent_password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modify_access_client_passwd_flag: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter_mode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_timeout: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_session: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent_debug_dir: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent_debug_file_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent_audit_dir: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent_audit_file_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cookie_name: Option<String>,
    // the server expects this spelling on update requests
    #[serde(rename = "cookieSeperator", default, skip_serializing_if = "Option::is_none")]
    pub cookie_separator: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cookie_encode: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sso_only: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_denied_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_in_urls: Option<LogInUrls>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_out_urls: Option<LogOutUrls>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub not_enforced_urls: Option<NotEnforcedUrls>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debug_level: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id_param_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id_param: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_mapping_mode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_attribute_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_principal: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_attribute_fetch_mode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_attribute_mapping: Option<ProfileAttributeMapping>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_attribute_fetch_mode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_attribute_mapping: Option<SessionAttributeMapping>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_attribute_fetch_mode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_attribute_mapping: Option<ResponseAttributeMapping>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub miscellaneous_properties: Option<MiscellaneousProperties>,
}

agent_request!(
    OpenSSOUpdate,
    "OpenSSOUpdateAgentRegRequest",
    Some(TYPE_OPENSSO)
);

impl OpenSSOUpdate {
    pub fn log_in_urls_mut(&mut self) -> &mut LogInUrls {
        self.log_in_urls.get_or_insert_with(LogInUrls::default)
    }

    pub fn log_out_urls_mut(&mut self) -> &mut LogOutUrls {
        self.log_out_urls.get_or_insert_with(LogOutUrls::default)
    }

    pub fn not_enforced_urls_mut(&mut self) -> &mut NotEnforcedUrls {
        self.not_enforced_urls
            .get_or_insert_with(NotEnforcedUrls::default)
    }

    pub fn miscellaneous_properties_mut(&mut self) -> &mut MiscellaneousProperties {
        self.miscellaneous_properties
            .get_or_insert_with(MiscellaneousProperties::default)
    }
}

impl Validate for OpenSSOUpdate {
    fn validate(&self) -> Result<(), Error> {
        require_base(self)?;
        require(&self.agent_base_url, Self::LOCAL, "agentBaseUrl")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "OpenSSORegResponse", rename_all = "camelCase")]
pub struct OpenSSOResponse {
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
    pub agent_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent_password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent_encryption_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent_debug_dir: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent_audit_dir: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent_audit_file_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub managed_server_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debug: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cookie_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_denied_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_out_urls: Option<LogOutUrls>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter_mode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_timeout: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_timeout_unit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cookie_separator: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cookie_encode: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_in_urls: Option<LogInUrls>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debug_level: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_mapping_mode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_attribute_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_principal: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_attribute_fetch_mode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_attribute_fetch_mode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_attribute_fetch_mode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_attribute_mapping: Option<ProfileAttributeMapping>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_attribute_mapping: Option<SessionAttributeMapping>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_attribute_mapping: Option<ResponseAttributeMapping>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_properties: Option<ResponseProperties>,
}

agent_response!(OpenSSOResponse, "OpenSSORegResponse");

impl OpenSSOResponse {
    pub fn response_properties_mut(&mut self) -> &mut ResponseProperties {
        self.response_properties
            .get_or_insert_with(ResponseProperties::default)
    }
}

impl Validate for OpenSSOResponse {
    fn validate(&self) -> Result<(), Error> {
        require(&self.agent_name, "OpenSSORegResponse", "agentName")
    }
}
