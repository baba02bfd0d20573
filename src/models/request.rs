use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::xml::{require, RootElement, Validate};

pub const TYPE_AGENT10: &str = "OAM10g";
pub const TYPE_AGENT11: &str = "OAM11g";
pub const TYPE_OPENSSO: &str = "OpenSSO";
pub const TYPE_ORCLSSO: &str = "OSSO";

/// Request context that travels with a request object but is never written
/// into the document: the request type, the registration mode and the
/// administrator credentials used to submit it.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Envelope {
    pub request_type: Option<String>,
    pub mode: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
}

impl Envelope {
    pub fn new(
        request_type: Option<&str>,
        mode: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            request_type: request_type.map(str::to_string),
            mode: Some(mode.into()),
            username: Some(username.into()),
            password: Some(password.into()),
        }
    }
}

impl std::fmt::Debug for Envelope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Envelope")
            .field("request_type", &self.request_type)
            .field("mode", &self.mode)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "***"))
            .finish()
    }
}

/// Common surface of every registration request document.
pub trait Request: RootElement {
    fn envelope(&self) -> &Envelope;
    fn server_address(&self) -> Option<&str>;
    fn host_identifier(&self) -> Option<&str>;
    fn set_host_identifier(&mut self, value: Option<String>);

    fn agent_name(&self) -> Option<&str> {
        None
    }
}

/// Declares the base elements shared by agent request documents together
/// with the `new(mode, server, user, password, agent)` constructor.
macro_rules! agent_request {
    ($name:ident, $local:literal, $request_type:expr) => {
        impl $name {
            pub fn new(
                mode: impl Into<String>,
                server_address: impl Into<String>,
                username: impl Into<String>,
                password: impl Into<String>,
                agent_name: impl Into<String>,
            ) -> Self {
                Self {
                    envelope: $crate::models::Envelope::new(
                        $request_type,
                        mode,
                        username,
                        password,
                    ),
                    server_address: Some(server_address.into()),
                    agent_name: Some(agent_name.into()),
                    ..Self::default()
                }
            }
        }

        impl $crate::xml::RootElement for $name {
            const LOCAL: &'static str = $local;
        }

        impl $crate::models::Request for $name {
            fn envelope(&self) -> &$crate::models::Envelope {
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

            fn agent_name(&self) -> Option<&str> {
                self.agent_name.as_deref()
            }
        }
    };
}

pub(crate) use agent_request;

pub(crate) fn require_base<R: Request>(request: &R) -> Result<(), Error> {
    if request.server_address().is_none() {
        return Err(Error::required(R::LOCAL, "serverAddress"));
    }
    if request.agent_name().is_none() {
        return Err(Error::required(R::LOCAL, "agentName"));
    }
    Ok(())
}

/// Request carrying only the base elements; used for report and validation
/// modes where no agent settings are submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "RegRequest", rename_all = "camelCase")]
pub struct BaseRequest {
    #[serde(skip)]
    pub envelope: Envelope,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host_identifier: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent_name: Option<String>,
}

agent_request!(BaseRequest, "RegRequest", None);

impl BaseRequest {
    pub fn with_type(
        request_type: &str,
        mode: impl Into<String>,
        server_address: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
        agent_name: impl Into<String>,
    ) -> Self {
        let mut request = Self::new(mode, server_address, username, password, agent_name);
        request.envelope.request_type = Some(request_type.to_string());
        request
    }
}

impl Validate for BaseRequest {
    fn validate(&self) -> Result<(), Error> {
        require_base(self)
    }
}

/// Common surface of every registration response document.
pub trait Response: RootElement {
    fn server_address(&self) -> Option<&str>;
    fn agent_name(&self) -> Option<&str>;
    fn description(&self) -> Option<&str>;
}

macro_rules! agent_response {
    ($name:ident, $local:literal) => {
        impl $crate::xml::RootElement for $name {
            const LOCAL: &'static str = $local;
        }

        impl $crate::models::Response for $name {
            fn server_address(&self) -> Option<&str> {
                self.server_address.as_deref()
            }

            fn agent_name(&self) -> Option<&str> {
                self.agent_name.as_deref()
            }

            fn description(&self) -> Option<&str> {
                self.description.as_deref()
            }
        }
    };
}

pub(crate) use agent_response;

/// Common elements of every registration response document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "RegResponse", rename_all = "camelCase")]
pub struct BaseResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host_identifier: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

agent_response!(BaseResponse, "RegResponse");

impl Validate for BaseResponse {
    fn validate(&self) -> Result<(), Error> {
        require(&self.agent_name, Self::LOCAL, "agentName")
    }
}
