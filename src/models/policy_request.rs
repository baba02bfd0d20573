use serde::{Deserialize, Serialize};

use super::policy::RregApplicationDomain;
use super::request::{agent_response, Envelope, Request};
use crate::error::Error;
use crate::xml::{require, RootElement, Validate};

/// Registers policies for an application domain without touching any agent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "PolicyRegRequest", rename_all = "camelCase")]
pub struct PolicyRequest {
    #[serde(skip)]
    pub envelope: Envelope,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host_identifier: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rreg_application_domain: Option<RregApplicationDomain>,
}

impl PolicyRequest {
    pub fn new(
        mode: impl Into<String>,
        server_address: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
        host_identifier: impl Into<String>,
        application_domain: RregApplicationDomain,
    ) -> Self {
        Self {
            envelope: Envelope::new(None, mode, username, password),
            server_address: Some(server_address.into()),
            host_identifier: Some(host_identifier.into()),
            rreg_application_domain: Some(application_domain),
        }
    }

    pub fn application_domain_mut(&mut self) -> &mut RregApplicationDomain {
        self.rreg_application_domain
            .get_or_insert_with(RregApplicationDomain::default)
    }
}

impl RootElement for PolicyRequest {
    const LOCAL: &'static str = "PolicyRegRequest";
}

impl Request for PolicyRequest {
    fn envelope(&self) -> &Envelope {
        &self.envelope
    }

    fn server_address(&self) -> Option<&str> {
        self.server_address.as_deref()
    }

    fn host_identifier(&self) -> Option<&str> {
        self.host_identifier.as_deref()
    }

    fn set_host_identifier(&mut self, value: Option<String>) {
        self.host_identifier = value;
    }
}

impl Validate for PolicyRequest {
    fn validate(&self) -> Result<(), Error> {
        require(&self.server_address, Self::LOCAL, "serverAddress")?;
        require(&self.host_identifier, Self::LOCAL, "hostIdentifier")?;
        match &self.rreg_application_domain {
            Some(domain) => domain.validate(),
            None => Err(Error::required(Self::LOCAL, RregApplicationDomain::LOCAL)),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "PolicyRegResponse", rename_all = "camelCase")]
pub struct PolicyResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host_identifier: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_domain_name: Option<String>,
}

agent_response!(PolicyResponse, "PolicyRegResponse");

impl Validate for PolicyResponse {
    fn validate(&self) -> Result<(), Error> {
        require(&self.application_domain_name, Self::LOCAL, "applicationDomainName")
    }
}
