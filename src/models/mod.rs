use crate::error::Error;

mod agent10g;
mod agent11g;
mod condition;
mod literal;
mod mapping;
mod opensso;
mod orclsso;
mod policy;
mod policy_request;
mod request;
mod resource;
mod rule;
mod server;

pub(crate) use literal::literal_text;

pub use agent10g::{Agent10gCreate, Agent10gResponse, Agent10gUpdate};
pub use agent11g::{Agent11gCreate, Agent11gResponse, Agent11gUpdate};
pub use condition::{
    AttributeCondition, Condition, ConditionClassType, ConditionsList, DayOfWeek, Identity,
    Ip4Range, Ip4RangeList, Temporal,
};
pub use mapping::{
    AttrMappingValue, AttributeMapping, ListValue, MiscellaneousProperties, MiscellaneousProperty,
    ProfileAttributeMapping, Property, ResponseAttributeMapping, ResponseProperties,
    SessionAttributeMapping,
};
pub use opensso::{OpenSSOCreate, OpenSSOResponse, OpenSSOUpdate};
pub use orclsso::{OrclSSOCreate, OrclSSOResponse, OrclSSOUpdate};
pub use policy::{
    AuthzPolicyList, RregApplicationDomain, RregAuthenticationPolicies, RregAuthenticationPolicy,
    RregAuthorizationPolicies, RregAuthorizationPolicy, RregPolicy, SuccessResponse,
    SuccessResponseList,
};
pub use policy_request::{PolicyRequest, PolicyResponse};
pub use request::{
    BaseRequest, BaseResponse, Envelope, Request, Response, TYPE_AGENT10, TYPE_AGENT11,
    TYPE_OPENSSO, TYPE_ORCLSSO,
};
pub use resource::{
    DeletedUriList, ExcludedResourcesList, ProtectedResourcesList, PublicResourcesList,
    UriList, UriResource,
};
pub use rule::{CombinerMode, ConditionCombiner, ConditionNameList, Rule, RuleEffect, Rules};
pub use server::{
    HostPortVariations, HostPortVariationsList, IpValidationExceptions, LogInUrls, LogOutUrls,
    NotEnforcedUrls, PrimaryServerList, SecondaryServerList, Server, UserDefinedParam,
    UserDefinedParameters,
};

/// Attaches a single-valued child element, refusing to replace one that is
/// already present.
pub(crate) fn attach_once<T>(slot: &mut Option<T>, value: T, element: &str) -> Result<(), Error> {
    if slot.is_some() {
        return Err(Error::ElementOnlyOnce(element.to_string()));
    }
    *slot = Some(value);
    Ok(())
}
