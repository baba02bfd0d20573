use serde::{Deserialize, Serialize};

use super::policy::RregApplicationDomain;
use super::request::{agent_request, agent_response, require_base, Envelope, TYPE_AGENT11};
use super::resource::{ExcludedResourcesList, ProtectedResourcesList, PublicResourcesList};
use super::server::{
    HostPortVariationsList, IpValidationExceptions, LogOutUrls, PrimaryServerList,
    SecondaryServerList, UserDefinedParameters,
};
use crate::error::Error;
use crate::xml::{require, Validate};

/// Registration of an 11g WebGate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "OAM11GRegRequest", rename_all = "camelCase")]
pub struct Agent11gCreate {
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
    pub virtual_host: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host_port_variations_list: Option<HostPortVariationsList>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_domain: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_create_policy: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_client_passwd: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_host: Option<String>,
    #[serde(rename = "maxCacheElems", default, skip_serializing_if = "Option::is_none")]
    pub max_cache_element: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache_timeout: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_validity_period: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_connections: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_session_time: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failover_threshold: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aaa_timeout_threshold: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sleep_for: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debug: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub security: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deny_on_not_protected: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_management_operations: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_token_scope_operations: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_master_token_retrieval: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_credential_collector_operations: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache_pragma_header: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache_control_header: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip_validation: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip_validation_exceptions: Option<IpValidationExceptions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_out_urls: Option<LogOutUrls>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logout_callback_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logout_target_url_param_name: Option<String>,
    #[serde(rename = "primaryServerList", default, skip_serializing_if = "Option::is_none")]
    pub primary_server: Option<PrimaryServerList>,
    #[serde(rename = "secondaryServerList", default, skip_serializing_if = "Option::is_none")]
    pub secondary_server: Option<SecondaryServerList>,
    #[serde(rename = "protectedResourcesList", default, skip_serializing_if = "Option::is_none")]
    pub protected_resource: Option<ProtectedResourcesList>,
    #[serde(rename = "publicResourcesList", default, skip_serializing_if = "Option::is_none")]
    pub public_resource: Option<PublicResourcesList>,
    #[serde(rename = "excludedResourcesList", default, skip_serializing_if = "Option::is_none")]
    pub excluded_resource: Option<ExcludedResourcesList>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protected_authn_scheme: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_authn_scheme: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_defined_parameters: Option<UserDefinedParameters>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rreg_application_domain: Option<RregApplicationDomain>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_fusion_app_registration: Option<bool>,
}

agent_request!(Agent11gCreate, "OAM11GRegRequest", Some(TYPE_AGENT11));

impl Agent11gCreate {
    pub fn primary_server_mut(&mut self) -> &mut PrimaryServerList {
        self.primary_server
            .get_or_insert_with(PrimaryServerList::default)
    }

    pub fn secondary_server_mut(&mut self) -> &mut SecondaryServerList {
        self.secondary_server
            .get_or_insert_with(SecondaryServerList::default)
    }

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

    pub fn user_defined_parameters_mut(&mut self) -> &mut UserDefinedParameters {
        self.user_defined_parameters
            .get_or_insert_with(UserDefinedParameters::default)
    }
}

impl Validate for Agent11gCreate {
    fn validate(&self) -> Result<(), Error> {
        require_base(self)?;
        if let Some(domain) = &self.rreg_application_domain {
            domain.validate()?;
        }
        Ok(())
    }
}

/// Modification of a registered 11g WebGate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "OAM11GUpdateAgentRegRequest", rename_all = "camelCase")]
pub struct Agent11gUpdate {
    #[serde(skip)]
    pub envelope: Envelope,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host_identifier: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_host: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_client_passwd: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modify_access_client_passwd_flag: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub security: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(rename = "maxCacheElems", default, skip_serializing_if = "Option::is_none")]
    pub max_cache_element: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache_timeout: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_validity_period: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_connections: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_session_time: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failover_threshold: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aaa_timeout_threshold: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_out_urls: Option<LogOutUrls>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logout_callback_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logout_redirect_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logout_target_url_param_name: Option<String>,
    #[serde(rename = "primaryServerList", default, skip_serializing_if = "Option::is_none")]
    pub primary_server: Option<PrimaryServerList>,
    #[serde(rename = "secondaryServerList", default, skip_serializing_if = "Option::is_none")]
    pub secondary_server: Option<SecondaryServerList>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_defined_parameters: Option<UserDefinedParameters>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sleep_for: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache_pragma_header: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache_control_header: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debug: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip_validation: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip_validation_exceptions: Option<IpValidationExceptions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deny_on_not_protected: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_management_operations: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_token_scope_operations: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_master_token_retrieval: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_credential_collector_operations: Option<bool>,
}

agent_request!(
    Agent11gUpdate,
    "OAM11GUpdateAgentRegRequest",
    Some(TYPE_AGENT11)
);

impl Agent11gUpdate {
    pub fn primary_server_mut(&mut self) -> &mut PrimaryServerList {
        self.primary_server
            .get_or_insert_with(PrimaryServerList::default)
    }

    pub fn secondary_server_mut(&mut self) -> &mut SecondaryServerList {
        self.secondary_server
            .get_or_insert_with(SecondaryServerList::default)
    }

    pub fn user_defined_parameters_mut(&mut self) -> &mut UserDefinedParameters {
        self.user_defined_parameters
            .get_or_insert_with(UserDefinedParameters::default)
    }
}

impl Validate for Agent11gUpdate {
    fn validate(&self) -> Result<(), Error> {
        require_base(self)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "OAM11GRegResponse", rename_all = "camelCase")]
pub struct Agent11gResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host_identifier: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_client_passwd: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_host: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default)]
    pub max_cache_elems: i32,
    #[serde(default)]
    pub cache_timeout: i32,
    #[serde(default)]
    pub token_validity_period: i32,
    #[serde(default)]
    pub max_connections: i32,
    #[serde(default)]
    pub max_session_time: i32,
    #[serde(default)]
    pub failover_threshold: i32,
    #[serde(default)]
    pub aaa_timeout_threshold: i32,
    #[serde(default)]
    pub sleep_for: i32,
    #[serde(default)]
    pub debug: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub security: Option<String>,
    #[serde(default)]
    pub deny_on_not_protected: i32,
    #[serde(default)]
    pub allow_management_operations: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_token_scope_operations: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_master_token_retrieval: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_credential_collector_operations: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache_pragma_header: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache_control_header: Option<String>,
    #[serde(default)]
    pub ip_validation: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip_validation_exceptions: Option<IpValidationExceptions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub global_passphrase: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_out_urls: Option<LogOutUrls>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logout_redirect_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logout_callback_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logout_target_url_param_name: Option<String>,
    #[serde(rename = "primaryServerList", default, skip_serializing_if = "Option::is_none")]
    pub primary_server: Option<PrimaryServerList>,
    #[serde(rename = "secondaryServerList", default, skip_serializing_if = "Option::is_none")]
    pub secondary_server: Option<SecondaryServerList>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::xml::base64_binary"
    )]
    pub cert: Option<Vec<u8>>,
    #[serde(
        rename = "cert-key",
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::xml::base64_binary"
    )]
    pub cert_key: Option<Vec<u8>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_defined_parameters: Option<UserDefinedParameters>,
}

agent_response!(Agent11gResponse, "OAM11GRegResponse");

impl Validate for Agent11gResponse {
    fn validate(&self) -> Result<(), Error> {
        const LOCAL: &str = "OAM11GRegResponse";
        require(&self.access_client_passwd, LOCAL, "accessClientPasswd")?;
        require(&self.preferred_host, LOCAL, "preferredHost")?;
        require(&self.state, LOCAL, "state")?;
        require(&self.cache_pragma_header, LOCAL, "cachePragmaHeader")?;
        require(&self.cache_control_header, LOCAL, "cacheControlHeader")?;
        require(&self.logout_redirect_url, LOCAL, "logoutRedirectUrl")?;
        require(&self.logout_callback_url, LOCAL, "logoutCallbackUrl")?;
        require(&self.primary_server, LOCAL, "primaryServerList")?;
        require(&self.secondary_server, LOCAL, "secondaryServerList")
    }
}
