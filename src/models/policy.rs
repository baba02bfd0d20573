use log::warn;
use serde::{Deserialize, Serialize};

use super::attach_once;
use super::condition::ConditionsList;
use super::resource::{DeletedUriList, UriList};
use super::rule::Rules;
use crate::error::Error;
use crate::xml::{require, RootElement, Validate};

/// Header or cookie emitted when a policy evaluates successfully.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuccessResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub response_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl SuccessResponse {
    pub const LOCAL: &'static str = "successResponse";

    pub fn new(
        name: impl Into<String>,
        response_type: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            response_type: Some(response_type.into()),
            value: Some(value.into()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuccessResponseList {
    #[serde(default)]
    pub success_response: Vec<SuccessResponse>,
}

impl SuccessResponseList {
    pub const LOCAL: &'static str = "successResponseList";
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RregAuthenticationPolicy {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authentication_scheme_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uri_list: Option<UriList>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted_uri_list: Option<DeletedUriList>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success_response_list: Option<SuccessResponseList>,
}

impl RregAuthenticationPolicy {
    pub const LOCAL: &'static str = "rregAuthenticationPolicy";

    pub fn new(name: impl Into<String>, scheme: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            authentication_scheme_name: Some(scheme.into()),
            ..Self::default()
        }
    }

    pub fn uri_list_mut(&mut self) -> &mut UriList {
        self.uri_list.get_or_insert_with(UriList::default)
    }

    pub fn deleted_uri_list_mut(&mut self) -> &mut DeletedUriList {
        self.deleted_uri_list
            .get_or_insert_with(DeletedUriList::default)
    }

    pub fn success_response_list_mut(&mut self) -> &mut SuccessResponseList {
        self.success_response_list
            .get_or_insert_with(SuccessResponseList::default)
    }

    pub fn set_uri_list(&mut self, value: UriList) -> Result<(), Error> {
        attach_once(&mut self.uri_list, value, UriList::LOCAL)
    }

    pub fn set_deleted_uri_list(&mut self, value: DeletedUriList) -> Result<(), Error> {
        attach_once(&mut self.deleted_uri_list, value, DeletedUriList::LOCAL)
    }

    pub fn set_success_response_list(&mut self, value: SuccessResponseList) -> Result<(), Error> {
        attach_once(
            &mut self.success_response_list,
            value,
            SuccessResponseList::LOCAL,
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RregAuthenticationPolicies {
    #[serde(default)]
    pub rreg_authentication_policy: Vec<RregAuthenticationPolicy>,
}

impl RregAuthenticationPolicies {
    pub const LOCAL: &'static str = "rregAuthenticationPolicies";
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RregAuthorizationPolicy {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uri_list: Option<UriList>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted_uri_list: Option<DeletedUriList>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success_response_list: Option<SuccessResponseList>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conditions_list: Option<ConditionsList>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rules: Option<Rules>,
}

impl RregAuthorizationPolicy {
    pub const LOCAL: &'static str = "rregAuthorizationPolicy";

    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn uri_list_mut(&mut self) -> &mut UriList {
        self.uri_list.get_or_insert_with(UriList::default)
    }

    pub fn deleted_uri_list_mut(&mut self) -> &mut DeletedUriList {
        self.deleted_uri_list
            .get_or_insert_with(DeletedUriList::default)
    }

    pub fn success_response_list_mut(&mut self) -> &mut SuccessResponseList {
        self.success_response_list
            .get_or_insert_with(SuccessResponseList::default)
    }

    pub fn conditions_list_mut(&mut self) -> &mut ConditionsList {
        self.conditions_list
            .get_or_insert_with(ConditionsList::default)
    }

    pub fn rules_mut(&mut self) -> &mut Rules {
        self.rules.get_or_insert_with(Rules::default)
    }

    pub fn set_uri_list(&mut self, value: UriList) -> Result<(), Error> {
        attach_once(&mut self.uri_list, value, UriList::LOCAL)
    }

    pub fn set_deleted_uri_list(&mut self, value: DeletedUriList) -> Result<(), Error> {
        attach_once(&mut self.deleted_uri_list, value, DeletedUriList::LOCAL)
    }

    pub fn set_success_response_list(&mut self, value: SuccessResponseList) -> Result<(), Error> {
        attach_once(
            &mut self.success_response_list,
            value,
            SuccessResponseList::LOCAL,
        )
    }

    pub fn set_conditions_list(&mut self, value: ConditionsList) -> Result<(), Error> {
        attach_once(&mut self.conditions_list, value, ConditionsList::LOCAL)
    }

    pub fn set_rules(&mut self, value: Rules) -> Result<(), Error> {
        attach_once(&mut self.rules, value, Rules::LOCAL)
    }

    /// Rule references to conditions this policy does not declare.
    pub fn unresolved_conditions(&self) -> Vec<String> {
        let Some(rules) = &self.rules else {
            return Vec::new();
        };
        let empty = ConditionsList::default();
        let conditions = self.conditions_list.as_ref().unwrap_or(&empty);
        rules.unresolved_conditions(conditions)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RregAuthorizationPolicies {
    #[serde(default)]
    pub rreg_authorization_policy: Vec<RregAuthorizationPolicy>,
}

impl RregAuthorizationPolicies {
    pub const LOCAL: &'static str = "rregAuthorizationPolicies";
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthzPolicyList {
    #[serde(default)]
    pub authz_policy: Vec<RregAuthorizationPolicy>,
}

impl AuthzPolicyList {
    pub const LOCAL: &'static str = "authzPolicyList";
}

/// Application domain created or updated alongside an agent registration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RregApplicationDomain {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uri_list: Option<UriList>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted_uri_list: Option<DeletedUriList>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rreg_authentication_policies: Option<RregAuthenticationPolicies>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rreg_authorization_policies: Option<RregAuthorizationPolicies>,
}

impl RregApplicationDomain {
    pub const LOCAL: &'static str = "rregApplicationDomain";

    pub fn new(name: impl Into<String>, description: Option<String>) -> Self {
        Self {
            name: Some(name.into()),
            description,
            ..Self::default()
        }
    }

    pub fn uri_list_mut(&mut self) -> &mut UriList {
        self.uri_list.get_or_insert_with(UriList::default)
    }

    pub fn deleted_uri_list_mut(&mut self) -> &mut DeletedUriList {
        self.deleted_uri_list
            .get_or_insert_with(DeletedUriList::default)
    }

    pub fn authentication_policies_mut(&mut self) -> &mut Vec<RregAuthenticationPolicy> {
        &mut self
            .rreg_authentication_policies
            .get_or_insert_with(RregAuthenticationPolicies::default)
            .rreg_authentication_policy
    }

    pub fn authorization_policies_mut(&mut self) -> &mut Vec<RregAuthorizationPolicy> {
        &mut self
            .rreg_authorization_policies
            .get_or_insert_with(RregAuthorizationPolicies::default)
            .rreg_authorization_policy
    }

    pub fn set_uri_list(&mut self, value: UriList) -> Result<(), Error> {
        attach_once(&mut self.uri_list, value, UriList::LOCAL)
    }

    pub fn set_deleted_uri_list(&mut self, value: DeletedUriList) -> Result<(), Error> {
        attach_once(&mut self.deleted_uri_list, value, DeletedUriList::LOCAL)
    }

    pub fn set_authentication_policies(
        &mut self,
        value: RregAuthenticationPolicies,
    ) -> Result<(), Error> {
        attach_once(
            &mut self.rreg_authentication_policies,
            value,
            RregAuthenticationPolicies::LOCAL,
        )
    }

    pub fn set_authorization_policies(
        &mut self,
        value: RregAuthorizationPolicies,
    ) -> Result<(), Error> {
        attach_once(
            &mut self.rreg_authorization_policies,
            value,
            RregAuthorizationPolicies::LOCAL,
        )
    }
}

impl Validate for RregApplicationDomain {
    fn validate(&self) -> Result<(), Error> {
        require(&self.name, Self::LOCAL, "name")?;
        if let Some(policies) = &self.rreg_authorization_policies {
            for policy in &policies.rreg_authorization_policy {
                require(&policy.name, RregAuthorizationPolicy::LOCAL, "name")?;
                let missing = policy.unresolved_conditions();
                if !missing.is_empty() {
                    warn!(
                        "authorization policy {name:?} references undeclared conditions: {missing:?}",
                        name = policy.name
                    );
                }
            }
        }
        if let Some(policies) = &self.rreg_authentication_policies {
            for policy in &policies.rreg_authentication_policy {
                require(&policy.name, RregAuthenticationPolicy::LOCAL, "name")?;
            }
        }
        Ok(())
    }
}

/// Standalone policy registration document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "RREGPolicy", rename_all = "camelCase")]
pub struct RregPolicy {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host_identifier: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_domain_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rreg_authentication_policies: Option<RregAuthenticationPolicies>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authz_policy_list: Option<AuthzPolicyList>,
}

impl RregPolicy {
    pub fn authentication_policies_mut(&mut self) -> &mut Vec<RregAuthenticationPolicy> {
        &mut self
            .rreg_authentication_policies
            .get_or_insert_with(RregAuthenticationPolicies::default)
            .rreg_authentication_policy
    }

    pub fn authz_policies_mut(&mut self) -> &mut Vec<RregAuthorizationPolicy> {
        &mut self
            .authz_policy_list
            .get_or_insert_with(AuthzPolicyList::default)
            .authz_policy
    }
}

impl RootElement for RregPolicy {
    const LOCAL: &'static str = "RREGPolicy";
}

impl Validate for RregPolicy {
    fn validate(&self) -> Result<(), Error> {
        require(&self.application_domain_name, Self::LOCAL, "applicationDomainName")
    }
}
