use std::collections::BTreeMap;
use std::net::IpAddr;

use log::{debug, warn};
use url::Url;

use super::property::{AccessAgentProperty, Mode, Security, Status, Version, ENTITY};
use super::report::Report;
use super::request::{RegistrationRequest, RegistrationResponse};
use crate::error::{Error, ServiceOperation};
use crate::models::{
    attach_once, Agent10gCreate, Agent10gResponse, Agent10gUpdate, Agent11gCreate,
    Agent11gResponse, Agent11gUpdate, BaseRequest, ExcludedResourcesList, HostPortVariationsList,
    IpValidationExceptions, LogInUrls, LogOutUrls, MiscellaneousProperties, NotEnforcedUrls,
    OpenSSOCreate, OpenSSOUpdate, OrclSSOCreate, OrclSSOUpdate, PrimaryServerList,
    ProfileAttributeMapping, ProtectedResourcesList, PublicResourcesList,
    ResponseAttributeMapping, RregApplicationDomain, SecondaryServerList, SessionAttributeMapping,
    UserDefinedParameters, TYPE_AGENT10, TYPE_AGENT11, TYPE_OPENSSO, TYPE_ORCLSSO,
};
use crate::xml::from_xml;

// relative references such as `/oam_logout_success` are resolved against this
const RELATIVE_BASE: &str = "http://localhost/";

type P = AccessAgentProperty;

/// An access agent as configured for registration against the OAM server.
///
/// Properties are collected with [`AccessAgentInstance::add`] and checked with
/// [`AccessAgentInstance::validate`] before a request document is built from
/// them. Structured settings (server lists, URL lists, mappings, policies)
/// are attached once each.
#[derive(Debug, Clone)]
pub struct AccessAgentInstance {
    pub name: String,
    pub version: Version,
    pub mode: Mode,
    pub service_url: String,
    pub username: String,
    pub password: String,
    parameters: BTreeMap<AccessAgentProperty, String>,
    primary_server: Option<PrimaryServerList>,
    secondary_server: Option<SecondaryServerList>,
    variation: Option<HostPortVariationsList>,
    protected_resource: Option<ProtectedResourcesList>,
    public_resource: Option<PublicResourcesList>,
    excluded_resource: Option<ExcludedResourcesList>,
    user_defined_parameter: Option<UserDefinedParameters>,
    login_url: Option<LogInUrls>,
    logout_url: Option<LogOutUrls>,
    not_enforced_resource: Option<NotEnforcedUrls>,
    validation_exception: Option<IpValidationExceptions>,
    profile_mapping: Option<ProfileAttributeMapping>,
    session_mapping: Option<SessionAttributeMapping>,
    response_mapping: Option<ResponseAttributeMapping>,
    miscellaneous_property: Option<MiscellaneousProperties>,
    application_domain: Option<RregApplicationDomain>,
}

impl AccessAgentInstance {
    pub fn new(
        name: impl Into<String>,
        version: Version,
        mode: Mode,
        service_url: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            version,
            mode,
            service_url: service_url.into(),
            username: username.into(),
            password: password.into(),
            parameters: BTreeMap::new(),
            primary_server: None,
            secondary_server: None,
            variation: None,
            protected_resource: None,
            public_resource: None,
            excluded_resource: None,
            user_defined_parameter: None,
            login_url: None,
            logout_url: None,
            not_enforced_resource: None,
            validation_exception: None,
            profile_mapping: None,
            session_mapping: None,
            response_mapping: None,
            miscellaneous_property: None,
            application_domain: None,
        }
    }

    /// Records a property value. Mandatory properties reject empty values.
    pub fn add(&mut self, property: AccessAgentProperty, value: impl Into<String>) -> Result<(), Error> {
        let value = value.into();
        if property.required() && value.trim().is_empty() {
            return Err(Error::ParameterMandatory(property.id().to_string()));
        }
        self.parameters.insert(property, value);
        Ok(())
    }

    /// Same as [`AccessAgentInstance::add`] for a property given by its id.
    pub fn add_parameter(&mut self, id: &str, value: impl Into<String>) -> Result<(), Error> {
        self.add(AccessAgentProperty::from_id(id)?, value)
    }

    pub fn parameter(&self, property: AccessAgentProperty) -> Option<&str> {
        self.parameters.get(&property).map(String::as_str)
    }

    pub fn parameters(&self) -> impl Iterator<Item = (AccessAgentProperty, &str)> {
        self.parameters
            .iter()
            .map(|(property, value)| (*property, value.as_str()))
    }

    pub fn set_primary_server(&mut self, value: PrimaryServerList) -> Result<(), Error> {
        attach_once(&mut self.primary_server, value, "primary")
    }

    pub fn set_secondary_server(&mut self, value: SecondaryServerList) -> Result<(), Error> {
        attach_once(&mut self.secondary_server, value, "secondary")
    }

    pub fn set_host_port_variations(&mut self, value: HostPortVariationsList) -> Result<(), Error> {
        attach_once(&mut self.variation, value, "variation")
    }

    pub fn set_protected_resource(&mut self, value: ProtectedResourcesList) -> Result<(), Error> {
        attach_once(&mut self.protected_resource, value, "protectedResource")
    }

    pub fn set_public_resource(&mut self, value: PublicResourcesList) -> Result<(), Error> {
        attach_once(&mut self.public_resource, value, "publicResource")
    }

    pub fn set_excluded_resource(&mut self, value: ExcludedResourcesList) -> Result<(), Error> {
        attach_once(&mut self.excluded_resource, value, "excludedResource")
    }

    pub fn set_user_defined_parameters(&mut self, value: UserDefinedParameters) -> Result<(), Error> {
        attach_once(&mut self.user_defined_parameter, value, "userProperty")
    }

    pub fn set_login_urls(&mut self, value: LogInUrls) -> Result<(), Error> {
        attach_once(&mut self.login_url, value, "loginURL")
    }

    pub fn set_logout_urls(&mut self, value: LogOutUrls) -> Result<(), Error> {
        attach_once(&mut self.logout_url, value, "logoutURL")
    }

    pub fn set_not_enforced_urls(&mut self, value: NotEnforcedUrls) -> Result<(), Error> {
        attach_once(&mut self.not_enforced_resource, value, "notEnforcedResource")
    }

    pub fn set_validation_exceptions(&mut self, value: IpValidationExceptions) -> Result<(), Error> {
        attach_once(&mut self.validation_exception, value, "validationException")
    }

    pub fn set_profile_mapping(&mut self, value: ProfileAttributeMapping) -> Result<(), Error> {
        attach_once(&mut self.profile_mapping, value, "profileMapping")
    }

    pub fn set_session_mapping(&mut self, value: SessionAttributeMapping) -> Result<(), Error> {
        attach_once(&mut self.session_mapping, value, "sessionMapping")
    }

    pub fn set_response_mapping(&mut self, value: ResponseAttributeMapping) -> Result<(), Error> {
        attach_once(&mut self.response_mapping, value, "responseMapping")
    }

    pub fn set_miscellaneous_properties(&mut self, value: MiscellaneousProperties) -> Result<(), Error> {
        attach_once(&mut self.miscellaneous_property, value, "miscellaneousProperty")
    }

    pub fn set_application_domain(&mut self, value: RregApplicationDomain) -> Result<(), Error> {
        attach_once(&mut self.application_domain, value, "applicationDomain")
    }

    /// Checks the instance before it is used for `operation`.
    ///
    /// For [`ServiceOperation::Create`] mandatory properties that were not
    /// given are filled with their defaults first, which is why this takes
    /// `&mut self`.
    pub fn validate(&mut self, operation: ServiceOperation) -> Result<(), Error> {
        if self.name.trim().is_empty() {
            return Err(Error::ParameterMissing("name".to_string()));
        }
        if matches!(
            operation,
            ServiceOperation::Delete | ServiceOperation::Validate | ServiceOperation::Print
        ) {
            return Ok(());
        }
        if self.parameters.is_empty() {
            return Err(Error::ParameterEmpty);
        }

        if operation == ServiceOperation::Create {
            for property in AccessAgentProperty::ALL {
                if !property.required() || self.parameters.contains_key(property) {
                    continue;
                }
                if let Some(value) = property.default_value() {
                    debug!("agent {}: defaulting {} to {}", self.name, property, value);
                    self.add(*property, value)?;
                }
            }
            if let Some(missing) = AccessAgentProperty::ALL
                .iter()
                .find(|property| property.required() && !self.parameters.contains_key(*property))
            {
                return Err(Error::ParameterMandatory(missing.id().to_string()));
            }
        }

        for (property, value) in &self.parameters {
            check_typed(*property, value)?;
        }

        if let Some(value) = self.parameter(P::LogoutTargetUrlParam) {
            if value.contains('>') {
                return Err(Error::invalid(ENTITY, P::LogoutTargetUrlParam.id(), value));
            }
        }
        if let Some(value) = self.parameter(P::Security) {
            if Security::from_value(value).is_err() {
                return Err(Error::invalid(ENTITY, P::Security.id(), value));
            }
        }
        if let Some(urls) = &self.logout_url {
            for url in &urls.url {
                if url.is_empty() || !valid_uri(url) {
                    return Err(Error::invalid(ENTITY, "url", url.as_str()));
                }
            }
        }
        if let Some(exceptions) = &self.validation_exception {
            for address in &exceptions.ip_address {
                if address.is_empty() || !valid_address(address) {
                    return Err(Error::invalid(ENTITY, "address", address.as_str()));
                }
            }
        }
        Ok(())
    }

    /// Request that registers the agent for its version.
    pub fn create_request(&self) -> Result<RegistrationRequest, Error> {
        self.warn_unused();
        let request = match self.version {
            Version::Agent10 => RegistrationRequest::Agent10gCreate(self.agent10g_create()?),
            Version::Agent11 => RegistrationRequest::Agent11gCreate(self.agent11g_create()?),
            Version::LegacySun => RegistrationRequest::OpenSSOCreate(self.opensso_create()),
            Version::LegacyOrcl => RegistrationRequest::OrclSSOCreate(self.orclsso_create()),
        };
        debug!("agent {}: built {} request", self.name, request.local());
        Ok(request)
    }

    /// Request that modifies an already registered agent.
    pub fn modify_request(&self) -> Result<RegistrationRequest, Error> {
        self.warn_unused();
        let request = match self.version {
            Version::Agent10 => RegistrationRequest::Agent10gUpdate(self.agent10g_modify()?),
            Version::Agent11 => RegistrationRequest::Agent11gUpdate(self.agent11g_modify()?),
            Version::LegacySun => RegistrationRequest::OpenSSOUpdate(self.opensso_modify()),
            Version::LegacyOrcl => RegistrationRequest::OrclSSOUpdate(self.orclsso_modify()),
        };
        debug!("agent {}: built {} request", self.name, request.local());
        Ok(request)
    }

    /// Untyped request carrying only the agent identity, used for delete.
    pub fn base_request(&self) -> BaseRequest {
        BaseRequest::new(
            self.mode.value(),
            self.service_url.as_str(),
            self.username.as_str(),
            self.password.as_str(),
            self.name.as_str(),
        )
    }

    /// Request that reads the registered configuration of the agent.
    pub fn report_request(&self) -> BaseRequest {
        self.typed_request()
    }

    /// Request that asks the server to validate the registration.
    pub fn validation_request(&self) -> BaseRequest {
        self.typed_request()
    }

    /// Reads the server's answer to a report request.
    pub fn parse_response(&self, xml: &str) -> Result<RegistrationResponse, Error> {
        match self.version {
            Version::Agent10 => {
                let response: Agent10gResponse = from_xml(xml)?;
                Ok(RegistrationResponse::Agent10g(response))
            }
            Version::Agent11 => {
                let response: Agent11gResponse = from_xml(xml)?;
                Ok(RegistrationResponse::Agent11g(response))
            }
            other => Err(Error::Unsupported {
                version: other.value().to_string(),
                operation: ServiceOperation::Print,
            }),
        }
    }

    /// Property rows of a parsed report response.
    pub fn report(&self, response: &RegistrationResponse) -> Report {
        let mut report = Report::from(response);
        if report.agent_name.is_empty() {
            report.agent_name = self.name.clone();
        }
        report
    }

    fn typed_request(&self) -> BaseRequest {
        let request_type = match self.version {
            Version::Agent10 => TYPE_AGENT10,
            Version::Agent11 => TYPE_AGENT11,
            Version::LegacySun => TYPE_OPENSSO,
            Version::LegacyOrcl => TYPE_ORCLSSO,
        };
        BaseRequest::with_type(
            request_type,
            self.mode.value(),
            self.service_url.as_str(),
            self.username.as_str(),
            self.password.as_str(),
            self.name.as_str(),
        )
    }

    fn warn_unused(&self) {
        for property in self.parameters.keys() {
            if !property.applies_to(self.version) {
                warn!(
                    "agent {}: property {} is ignored for version {}",
                    self.name, property, self.version
                );
            }
        }
        if self.application_domain.is_some()
            && matches!(self.version, Version::LegacySun | Version::LegacyOrcl)
        {
            warn!(
                "agent {}: application domain is ignored for version {}",
                self.name, self.version
            );
        }
    }

    fn string(&self, property: AccessAgentProperty) -> Option<String> {
        self.parameter(property).map(str::to_string)
    }

    fn boolean(&self, property: AccessAgentProperty) -> Option<bool> {
        self.parameter(property).map(|value| value == "true")
    }

    // booleans the schema carries as 0/1
    fn flag(&self, property: AccessAgentProperty) -> Option<i32> {
        self.boolean(property).map(i32::from)
    }

    fn integer(&self, property: AccessAgentProperty) -> Result<Option<i32>, Error> {
        self.parameter(property)
            .map(|value| {
                value
                    .trim()
                    .parse::<i32>()
                    .map_err(|_| Error::invalid(ENTITY, property.id(), value))
            })
            .transpose()
    }

    fn agent10g_create(&self) -> Result<Agent10gCreate, Error> {
        let mut request = Agent10gCreate::new(
            self.mode.value(),
            self.service_url.as_str(),
            self.username.as_str(),
            self.password.as_str(),
            self.name.as_str(),
        );
        request.host_identifier = self.string(P::HostIdentifier);
        request.agent_base_url = self.string(P::AgentBaseUrl);
        request.virtual_host = self.boolean(P::VirtualHost);
        request.application_domain = self.string(P::ApplicationDomain);
        request.auto_create_policy = self.boolean(P::AutoCreatePolicy);
        request.access_client_passwd = self.string(P::AgentPassword);
        request.primary_cookie_domain = self.string(P::CookieDomainPrimary);
        request.preferred_host = self.string(P::PreferredHost);
        request.max_cache_element = self.integer(P::CacheElementsMax)?;
        request.cache_timeout = self.integer(P::CacheTimeout)?;
        request.cookie_session_time = self.integer(P::CookieSessionTime)?;
        request.max_connections = self.integer(P::ConnectionMax)?;
        request.max_session_time = self.integer(P::ConnectionSessionTimeMax)?;
        request.idle_session_timeout = self.integer(P::SessionIdleTimeout)?;
        request.failover_threshold = self.integer(P::ThresholdFailover)?;
        request.aaa_timeout_threshold = self.integer(P::ThresholdTimeout)?;
        request.sleep_for = self.integer(P::Sleep)?;
        request.debug = self.boolean(P::Debug);
        request.security = self.string(P::Security);
        request.deny_on_not_protected = self.flag(P::DenyNotProtected);
        request.allow_management_operations = self.boolean(P::AllowManagementOperation);
        request.cache_pragma_header = self.string(P::CachePragmaHeader);
        request.cache_control_header = self.string(P::CacheControlHeader);
        request.ip_validation = self.flag(P::IpValidation);
        request.logout_target_url_param_name = self.string(P::LogoutTargetUrlParam);
        request.protected_authn_scheme = self.string(P::AuthenticationSchemeProtected);
        request.public_authn_scheme = self.string(P::AuthenticationSchemePublic);
        request.is_fusion_app_registration = self.boolean(P::FusionApplication);
        request.host_port_variations_list = self.variation.clone();
        request.ip_validation_exceptions = self.validation_exception.clone();
        request.log_out_urls = self.logout_url.clone();
        request.primary_server = self.primary_server.clone();
        request.secondary_server = self.secondary_server.clone();
        request.protected_resource = self.protected_resource.clone();
        request.public_resource = self.public_resource.clone();
        request.excluded_resource = self.excluded_resource.clone();
        request.user_defined_parameters = self.user_defined_parameter.clone();
        request.rreg_application_domain = self.application_domain.clone();
        Ok(request)
    }

    fn agent10g_modify(&self) -> Result<Agent10gUpdate, Error> {
        let mut request = Agent10gUpdate::new(
            self.mode.value(),
            self.service_url.as_str(),
            self.username.as_str(),
            self.password.as_str(),
            self.name.as_str(),
        );
        request.preferred_host = self.string(P::PreferredHost);
        let (password, changed) = self.password_change();
        request.access_client_passwd = Some(password);
        request.modify_access_client_passwd_flag = Some(changed);
        request.primary_cookie_domain = self.string(P::CookieDomainPrimary);
        request.security = self.string(P::Security);
        request.state = self.string(P::State);
        request.max_cache_element = self.integer(P::CacheElementsMax)?;
        request.cache_timeout = self.integer(P::CacheTimeout)?;
        request.max_connections = self.integer(P::ConnectionMax)?;
        request.max_session_time = self.integer(P::ConnectionSessionTimeMax)?;
        request.failover_threshold = self.integer(P::ThresholdFailover)?;
        request.aaa_timeout_threshold = self.integer(P::ThresholdTimeout)?;
        request.sleep_for = self.integer(P::Sleep)?;
        request.cache_pragma_header = self.string(P::CachePragmaHeader);
        request.cache_control_header = self.string(P::CacheControlHeader);
        request.debug = self.boolean(P::Debug);
        request.ip_validation = self.flag(P::IpValidation);
        request.deny_on_not_protected = self.flag(P::DenyNotProtected);
        request.allow_management_operations = self.boolean(P::AllowManagementOperation);
        request.log_out_urls = self.logout_url.clone();
        request.user_defined_parameters = self.user_defined_parameter.clone();
        request.ip_validation_exceptions = self.validation_exception.clone();
        Ok(request)
    }

    fn agent11g_create(&self) -> Result<Agent11gCreate, Error> {
        let mut request = Agent11gCreate::new(
            self.mode.value(),
            self.service_url.as_str(),
            self.username.as_str(),
            self.password.as_str(),
            self.name.as_str(),
        );
        request.host_identifier = self.string(P::HostIdentifier);
        request.agent_base_url = self.string(P::AgentBaseUrl);
        request.virtual_host = self.boolean(P::VirtualHost);
        request.application_domain = self.string(P::ApplicationDomain);
        request.auto_create_policy = self.boolean(P::AutoCreatePolicy);
        request.access_client_passwd = self.string(P::AgentPassword);
        request.preferred_host = self.string(P::PreferredHost);
        request.max_cache_element = self.integer(P::CacheElementsMax)?;
        request.cache_timeout = self.integer(P::CacheTimeout)?;
        request.token_validity_period = self.integer(P::TokenValidityTime)?;
        request.max_connections = self.integer(P::ConnectionMax)?;
        request.max_session_time = self.integer(P::ConnectionSessionTimeMax)?;
        request.failover_threshold = self.integer(P::ThresholdFailover)?;
        request.aaa_timeout_threshold = self.integer(P::ThresholdTimeout)?;
        request.sleep_for = self.integer(P::Sleep)?;
        request.debug = self.boolean(P::Debug);
        request.security = self.string(P::Security);
        request.deny_on_not_protected = self.flag(P::DenyNotProtected);
        request.allow_management_operations = self.boolean(P::AllowManagementOperation);
        request.allow_master_token_retrieval = self.boolean(P::AllowMasterTokenRetrieval);
        request.allow_token_scope_operations = self.boolean(P::AllowTokenScopeOperation);
        request.allow_credential_collector_operations = self.boolean(P::AllowCollectorOperation);
        request.cache_pragma_header = self.string(P::CachePragmaHeader);
        request.cache_control_header = self.string(P::CacheControlHeader);
        request.ip_validation = self.flag(P::IpValidation);
        request.logout_callback_url = self.string(P::LogoutCallbackUrl);
        request.logout_target_url_param_name = self.string(P::LogoutTargetUrlParam);
        request.protected_authn_scheme = self.string(P::AuthenticationSchemeProtected);
        request.public_authn_scheme = self.string(P::AuthenticationSchemePublic);
        request.is_fusion_app_registration = self.boolean(P::FusionApplication);
        request.host_port_variations_list = self.variation.clone();
        request.ip_validation_exceptions = self.validation_exception.clone();
        request.log_out_urls = self.logout_url.clone();
        request.primary_server = self.primary_server.clone();
        request.secondary_server = self.secondary_server.clone();
        request.protected_resource = self.protected_resource.clone();
        request.public_resource = self.public_resource.clone();
        request.excluded_resource = self.excluded_resource.clone();
        request.user_defined_parameters = self.user_defined_parameter.clone();
        request.rreg_application_domain = self.application_domain.clone();
        Ok(request)
    }

    fn agent11g_modify(&self) -> Result<Agent11gUpdate, Error> {
        let mut request = Agent11gUpdate::new(
            self.mode.value(),
            self.service_url.as_str(),
            self.username.as_str(),
            self.password.as_str(),
            self.name.as_str(),
        );
        request.preferred_host = self.string(P::PreferredHost);
        let (password, changed) = self.password_change();
        request.access_client_passwd = Some(password);
        request.modify_access_client_passwd_flag = Some(changed);
        request.security = self.string(P::Security);
        request.state = self.string(P::State);
        request.max_cache_element = self.integer(P::CacheElementsMax)?;
        request.cache_timeout = self.integer(P::CacheTimeout)?;
        request.token_validity_period = self.integer(P::TokenValidityTime)?;
        request.max_connections = self.integer(P::ConnectionMax)?;
        request.max_session_time = self.integer(P::ConnectionSessionTimeMax)?;
        request.failover_threshold = self.integer(P::ThresholdFailover)?;
        request.aaa_timeout_threshold = self.integer(P::ThresholdTimeout)?;
        request.logout_callback_url = self.string(P::LogoutCallbackUrl);
        request.logout_redirect_url = self.string(P::LogoutRedirectUrl);
        request.logout_target_url_param_name = self.string(P::LogoutTargetUrlParam);
        request.sleep_for = self.integer(P::Sleep)?;
        request.debug = self.boolean(P::Debug);
        request.cache_pragma_header = self.string(P::CachePragmaHeader);
        request.cache_control_header = self.string(P::CacheControlHeader);
        request.ip_validation = self.flag(P::IpValidation);
        request.deny_on_not_protected = self.flag(P::DenyNotProtected);
        request.allow_management_operations = self.boolean(P::AllowManagementOperation);
        request.allow_master_token_retrieval = self.boolean(P::AllowMasterTokenRetrieval);
        request.allow_token_scope_operations = self.boolean(P::AllowTokenScopeOperation);
        request.allow_credential_collector_operations = self.boolean(P::AllowCollectorOperation);
        request.primary_server = self.primary_server.clone();
        request.secondary_server = self.secondary_server.clone();
        request.log_out_urls = self.logout_url.clone();
        request.user_defined_parameters = self.user_defined_parameter.clone();
        request.ip_validation_exceptions = self.validation_exception.clone();
        Ok(request)
    }

    fn opensso_create(&self) -> OpenSSOCreate {
        let mut request = OpenSSOCreate::new(
            self.mode.value(),
            self.service_url.as_str(),
            self.username.as_str(),
            self.password.as_str(),
            self.name.as_str(),
        );
        request.host_identifier = self.string(P::HostIdentifier);
        request.agent_base_url = self.string(P::AgentBaseUrl);
        request.application_domain = self.string(P::ApplicationDomain);
        request.auto_create_policy = self.boolean(P::AutoCreatePolicy);
        request.agent_password = self.string(P::AgentPassword);
        request.agent_type = self.string(P::OpenSSOType);
        request.agent_version = self.string(P::OpenSSOVersion);
        request.agent_debug_dir = self.string(P::OpenSSODebugDirectory);
        request.agent_audit_dir = self.string(P::OpenSSOAuditDirectory);
        request.agent_audit_file_name = self.string(P::OpenSSOAuditFilename);
        request.protected_authn_scheme = self.string(P::AuthenticationSchemeProtected);
        request.host_port_variations_list = self.variation.clone();
        request.protected_resource = self.protected_resource.clone();
        request.public_resource = self.public_resource.clone();
        request.excluded_resource = self.excluded_resource.clone();
        request
    }

    fn opensso_modify(&self) -> OpenSSOUpdate {
        let mut request = OpenSSOUpdate::new(
            self.mode.value(),
            self.service_url.as_str(),
            self.username.as_str(),
            self.password.as_str(),
            self.name.as_str(),
        );
        request.host_identifier = self.string(P::HostIdentifier);
        request.agent_base_url = self.string(P::AgentBaseUrl);
        if let Some(password) = self.string(P::AgentPassword) {
            request.agent_password = Some(password);
            request.modify_access_client_passwd_flag = Some(true);
        }
        request.state = self.string(P::State);
        request.agent_type = self.string(P::OpenSSOType);
        request.organization_name = self.string(P::OpenSSOOrganizationName);
        request.filter_mode = self.string(P::OpenSSOFilterMode);
        request.max_session = self.string(P::OpenSSOSessionMax);
        request.session_timeout = self.string(P::OpenSSOSessionTimeout);
        request.agent_debug_dir = self.string(P::OpenSSODebugDirectory);
        request.agent_debug_file_name = self.string(P::OpenSSODebugFilename);
        request.agent_audit_dir = self.string(P::OpenSSOAuditDirectory);
        request.agent_audit_file_name = self.string(P::OpenSSOAuditFilename);
        request.cookie_name = self.string(P::OpenSSOCookieName);
        request.cookie_separator = self.string(P::OpenSSOCookieSeparator);
        request.cookie_encode = self.boolean(P::OpenSSOCookieEncoding);
        request.sso_only = self.boolean(P::OpenSSOSsoOnly);
        request.access_denied_url = self.string(P::OpenSSOAccessDenied);
        request.debug_level = self.string(P::OpenSSODebugLevel);
        request.user_id_param_type = self.string(P::OpenSSOUserIdParamType);
        request.user_id_param = self.string(P::OpenSSOUserIdParam);
        request.user_mapping_mode = self.string(P::OpenSSOUserMappingMode);
        request.user_attribute_name = self.string(P::OpenSSOUserAttributeName);
        request.user_principal = self.string(P::OpenSSOUserPrincipal);
        request.user_token = self.string(P::OpenSSOUserToken);
        request.profile_attribute_fetch_mode = self.string(P::OpenSSOFetchModeProfile);
        request.session_attribute_fetch_mode = self.string(P::OpenSSOFetchModeSession);
        request.response_attribute_fetch_mode = self.string(P::OpenSSOFetchModeResponse);
        request.log_in_urls = self.login_url.clone();
        request.log_out_urls = self.logout_url.clone();
        request.not_enforced_urls = self.not_enforced_resource.clone();
        request.profile_attribute_mapping = self.profile_mapping.clone();
        request.session_attribute_mapping = self.session_mapping.clone();
        request.response_attribute_mapping = self.response_mapping.clone();
        request.miscellaneous_properties = self.miscellaneous_property.clone();
        request
    }

    fn orclsso_create(&self) -> OrclSSOCreate {
        let mut request = OrclSSOCreate::new(
            self.mode.value(),
            self.service_url.as_str(),
            self.username.as_str(),
            self.password.as_str(),
            self.name.as_str(),
        );
        request.host_identifier = self.string(P::HostIdentifier);
        request.agent_base_url = self.string(P::AgentBaseUrl);
        request.application_domain = self.string(P::ApplicationDomain);
        request.auto_create_policy = self.boolean(P::AutoCreatePolicy);
        request.sso_server_version = self.string(P::TokenVersion);
        request.oracle_home_path = self.string(P::OrclSSOOracleHomePath);
        request.virtual_host = self.string(P::VirtualHost);
        request.update_mode = self.string(P::UpdateMode);
        request.admin_info = self.string(P::OrclSSOAdminInfo);
        request.admin_id = self.string(P::OrclSSOAdminId);
        request.protected_authn_scheme = self.string(P::AuthenticationSchemeProtected);
        request.public_authn_scheme = self.string(P::AuthenticationSchemePublic);
        request.logout_url = self.string(P::OrclSSOLogoutUrl);
        request.failure_url = self.string(P::OrclSSOFailureUrl);
        request.protected_resource = self.protected_resource.clone();
        request.public_resource = self.public_resource.clone();
        request
    }

    fn orclsso_modify(&self) -> OrclSSOUpdate {
        let mut request = OrclSSOUpdate::new(
            self.mode.value(),
            self.service_url.as_str(),
            self.username.as_str(),
            self.password.as_str(),
            self.name.as_str(),
        );
        request.admin_info = self.string(P::OrclSSOAdminInfo);
        request.admin_id = self.string(P::OrclSSOAdminId);
        request.home_url = self.string(P::OrclSSOHomeUrl);
        request.success_url = self.string(P::OrclSSOSuccessUrl);
        request.logout_url = self.string(P::OrclSSOLogoutUrl);
        request.failure_url = self.string(P::OrclSSOFailureUrl);
        request.start_date = self.string(P::OrclSSOStartDate);
        request
    }

    // an update without a new password still has to send an (empty) one
    fn password_change(&self) -> (String, bool) {
        match self.string(P::AgentPassword) {
            Some(password) => (password, true),
            None => (String::new(), false),
        }
    }
}

fn check_typed(property: AccessAgentProperty, value: &str) -> Result<(), Error> {
    use super::property::PropertyType;

    let valid = match property.property_type() {
        PropertyType::String => true,
        PropertyType::Boolean => value == "true" || value == "false",
        PropertyType::Status => Status::from_value(value).is_ok(),
        PropertyType::Uri => valid_uri(value),
        PropertyType::Url => valid_url(value),
        PropertyType::Integer => match value.trim().parse::<i32>() {
            Ok(number) => property.minimum().map_or(true, |min| number >= min),
            Err(_) => false,
        },
    };
    if !valid {
        return Err(Error::invalid(ENTITY, property.id(), value));
    }
    Ok(())
}

fn valid_url(value: &str) -> bool {
    Url::parse(value).map(|url| url.has_host()).unwrap_or(false)
}

fn valid_uri(value: &str) -> bool {
    if value.is_empty() || value.chars().any(char::is_whitespace) {
        return false;
    }
    match Url::parse(value) {
        Ok(_) => true,
        Err(url::ParseError::RelativeUrlWithoutBase) => Url::parse(RELATIVE_BASE)
            .and_then(|base| base.join(value))
            .is_ok(),
        Err(_) => false,
    }
}

fn valid_address(value: &str) -> bool {
    value.parse::<IpAddr>().is_ok()
}
