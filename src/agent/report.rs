use std::fmt;

use super::property::{AccessAgentProperty as P, Security};
use super::request::RegistrationResponse;
use crate::models::{Agent10gResponse, Agent11gResponse, Server, UserDefinedParameters};

/// One line of an agent report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    /// Empty on continuation lines of a multi-valued property.
    pub property: String,
    pub value: String,
}

/// Printable summary of the registration the server holds for an agent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub agent_name: String,
    pub rows: Vec<ReportRow>,
}

impl Report {
    fn push(&mut self, property: impl Into<String>, value: impl fmt::Display) {
        self.rows.push(ReportRow {
            property: property.into(),
            value: value.to_string(),
        });
    }

    fn push_opt(&mut self, property: impl Into<String>, value: Option<&str>) {
        self.push(property, value.unwrap_or_default());
    }

    // first row carries the label, the rest are continuation lines
    fn push_many<I>(&mut self, property: &str, values: I)
    where
        I: IntoIterator<Item = String>,
    {
        for (index, value) in values.into_iter().enumerate() {
            let label = if index == 0 { property } else { "" };
            self.push(label, value);
        }
    }

    fn push_servers(&mut self, property: &str, servers: Option<&[Server]>) {
        let rows = servers.unwrap_or_default().iter().map(|server| {
            format!(
                "{}:{}#{}",
                server.server_host.as_deref().unwrap_or_default(),
                server.server_port.unwrap_or_default(),
                server.max_connections.unwrap_or_default()
            )
        });
        self.push_many(property, rows);
    }

    fn push_user_parameters(&mut self, parameters: Option<&UserDefinedParameters>) {
        let rows = parameters
            .map(|list| list.user_defined_param.as_slice())
            .unwrap_or_default()
            .iter()
            .map(|param| {
                format!(
                    "{}: {}",
                    param.name.as_deref().unwrap_or_default(),
                    param.value.as_deref().unwrap_or_default()
                )
            });
        self.push_many("userDefinedParameters", rows);
    }

    fn from_10g(response: &Agent10gResponse) -> Self {
        let mut report = Report {
            agent_name: response.agent_name.clone().unwrap_or_default(),
            rows: Vec::new(),
        };
        report.push_opt(P::Description.id(), response.description.as_deref());
        report.push_opt(P::PreferredHost.id(), response.preferred_host.as_deref());
        report.push(P::IpValidation.id(), response.ip_validation);
        report.push_servers(
            "primaryServerList",
            response.primary_server.as_ref().map(|list| list.server.as_slice()),
        );
        report.push_servers(
            "secondaryServerList",
            response.secondary_server.as_ref().map(|list| list.server.as_slice()),
        );
        report.push_user_parameters(response.user_defined_parameters.as_ref());
        report
    }

    fn from_11g(response: &Agent11gResponse) -> Self {
        let mut report = Report {
            agent_name: response.agent_name.clone().unwrap_or_default(),
            rows: Vec::new(),
        };
        report.push_opt(P::State.id(), response.state.as_deref());
        report.push(
            P::Security.id(),
            response
                .security
                .as_deref()
                .unwrap_or(Security::Open.value()),
        );
        report.push(P::ConnectionMax.id(), response.max_connections);
        report.push(P::CacheElementsMax.id(), response.max_cache_elems);
        report.push(P::CacheTimeout.id(), response.cache_timeout);
        report.push(P::TokenValidityTime.id(), response.token_validity_period);
        report.push(P::ThresholdFailover.id(), response.failover_threshold);
        report.push_opt(P::PreferredHost.id(), response.preferred_host.as_deref());
        report.push_opt(P::LogoutCallbackUrl.id(), response.logout_callback_url.as_deref());
        report.push_opt(P::LogoutRedirectUrl.id(), response.logout_redirect_url.as_deref());
        report.push(P::DenyNotProtected.id(), response.deny_on_not_protected);
        report.push(P::Sleep.id(), response.sleep_for);
        report.push_opt(P::CachePragmaHeader.id(), response.cache_pragma_header.as_deref());
        report.push_opt(P::CacheControlHeader.id(), response.cache_control_header.as_deref());
        report.push(P::Debug.id(), response.debug);
        report.push(P::IpValidation.id(), response.ip_validation != 0);
        report.push(
            P::AllowManagementOperation.id(),
            response.allow_management_operations,
        );
        report.push(
            P::AllowCollectorOperation.id(),
            response.allow_credential_collector_operations.unwrap_or(false),
        );
        report.push(
            P::AllowMasterTokenRetrieval.id(),
            response.allow_master_token_retrieval.unwrap_or(false),
        );
        report.push(
            P::AllowTokenScopeOperation.id(),
            response.allow_token_scope_operations.unwrap_or(false),
        );
        report.push_servers(
            "primaryServerList",
            response.primary_server.as_ref().map(|list| list.server.as_slice()),
        );
        report.push_servers(
            "secondaryServerList",
            response.secondary_server.as_ref().map(|list| list.server.as_slice()),
        );
        report.push_user_parameters(response.user_defined_parameters.as_ref());
        report
    }
}

impl From<&RegistrationResponse> for Report {
    fn from(response: &RegistrationResponse) -> Self {
        match response {
            RegistrationResponse::Agent10g(response) => Report::from_10g(response),
            RegistrationResponse::Agent11g(response) => Report::from_11g(response),
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.agent_name)?;
        writeln!(f, "Property\tValue")?;
        for row in &self.rows {
            writeln!(f, "{}\t{}", row.property, row.value)?;
        }
        Ok(())
    }
}
