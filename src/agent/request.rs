use crate::error::Error;
use crate::models::{
    Agent10gCreate, Agent10gResponse, Agent10gUpdate, Agent11gCreate, Agent11gResponse,
    Agent11gUpdate, BaseRequest, Envelope, OpenSSOCreate, OpenSSOUpdate, OrclSSOCreate,
    OrclSSOUpdate, Request, Response,
};
use crate::xml::{to_xml_checked, RootElement, XML_DECLARATION};

/// A request document built from an access agent instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationRequest {
    Agent10gCreate(Agent10gCreate),
    Agent10gUpdate(Agent10gUpdate),
    Agent11gCreate(Agent11gCreate),
    Agent11gUpdate(Agent11gUpdate),
    OpenSSOCreate(OpenSSOCreate),
    OpenSSOUpdate(OpenSSOUpdate),
    OrclSSOCreate(OrclSSOCreate),
    OrclSSOUpdate(OrclSSOUpdate),
    Base(BaseRequest),
}

macro_rules! each_request {
    ($value:expr, $request:ident => $body:expr) => {
        match $value {
            RegistrationRequest::Agent10gCreate($request) => $body,
            RegistrationRequest::Agent10gUpdate($request) => $body,
            RegistrationRequest::Agent11gCreate($request) => $body,
            RegistrationRequest::Agent11gUpdate($request) => $body,
            RegistrationRequest::OpenSSOCreate($request) => $body,
            RegistrationRequest::OpenSSOUpdate($request) => $body,
            RegistrationRequest::OrclSSOCreate($request) => $body,
            RegistrationRequest::OrclSSOUpdate($request) => $body,
            RegistrationRequest::Base($request) => $body,
        }
    };
}

fn local_of<T: RootElement>(_: &T) -> &'static str {
    T::LOCAL
}

impl RegistrationRequest {
    /// Element name of the document root.
    pub fn local(&self) -> &'static str {
        each_request!(self, request => local_of(request))
    }

    pub fn envelope(&self) -> &Envelope {
        each_request!(self, request => request.envelope())
    }

    pub fn agent_name(&self) -> Option<&str> {
        each_request!(self, request => request.agent_name())
    }

    /// Writes the request body after its required elements were checked.
    pub fn to_xml(&self) -> Result<String, Error> {
        each_request!(self, request => to_xml_checked(request))
    }

    /// Same as [`RegistrationRequest::to_xml`] with the XML declaration.
    pub fn to_document(&self) -> Result<String, Error> {
        let body = self.to_xml()?;
        Ok(format!("{XML_DECLARATION}\n{body}"))
    }
}

impl From<BaseRequest> for RegistrationRequest {
    fn from(request: BaseRequest) -> Self {
        RegistrationRequest::Base(request)
    }
}

/// Response to a report request, by agent version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationResponse {
    Agent10g(Agent10gResponse),
    Agent11g(Agent11gResponse),
}

impl RegistrationResponse {
    pub fn agent_name(&self) -> Option<&str> {
        match self {
            RegistrationResponse::Agent10g(response) => response.agent_name(),
            RegistrationResponse::Agent11g(response) => response.agent_name(),
        }
    }

    pub fn server_address(&self) -> Option<&str> {
        match self {
            RegistrationResponse::Agent10g(response) => response.server_address(),
            RegistrationResponse::Agent11g(response) => response.server_address(),
        }
    }

    pub fn description(&self) -> Option<&str> {
        match self {
            RegistrationResponse::Agent10g(response) => response.description(),
            RegistrationResponse::Agent11g(response) => response.description(),
        }
    }
}
