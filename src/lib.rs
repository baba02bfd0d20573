#![forbid(unsafe_code)]

mod agent;
mod error;
mod models;
mod xml;

pub use error::{Error, InvalidValue, ServiceOperation};

pub use xml::{
    from_xml, to_document, to_xml, to_xml_checked, RootElement, Validate, XML_DECLARATION,
};

pub use models::{
    Agent10gCreate, Agent10gResponse, Agent10gUpdate, Agent11gCreate, Agent11gResponse,
    Agent11gUpdate, AttrMappingValue, AttributeCondition, AttributeMapping, AuthzPolicyList,
    BaseRequest, BaseResponse, CombinerMode, Condition, ConditionClassType, ConditionCombiner,
    ConditionNameList, ConditionsList, DayOfWeek, DeletedUriList, Envelope, ExcludedResourcesList,
    HostPortVariations, HostPortVariationsList, Identity, Ip4Range, Ip4RangeList,
    IpValidationExceptions, ListValue, LogInUrls, LogOutUrls, MiscellaneousProperties,
    MiscellaneousProperty, NotEnforcedUrls, OpenSSOCreate, OpenSSOResponse, OpenSSOUpdate,
    OrclSSOCreate, OrclSSOResponse, OrclSSOUpdate, PolicyRequest, PolicyResponse,
    PrimaryServerList, ProfileAttributeMapping, Property, ProtectedResourcesList,
    PublicResourcesList, Request, Response, ResponseAttributeMapping, ResponseProperties,
    RregApplicationDomain, RregAuthenticationPolicies, RregAuthenticationPolicy,
    RregAuthorizationPolicies, RregAuthorizationPolicy, RregPolicy, Rule, RuleEffect, Rules,
    SecondaryServerList, Server, SessionAttributeMapping, SuccessResponse, SuccessResponseList,
    Temporal, UriList, UriResource, UserDefinedParam, UserDefinedParameters, TYPE_AGENT10,
    TYPE_AGENT11, TYPE_OPENSSO, TYPE_ORCLSSO,
};

pub use agent::{
    AccessAgentInstance, AccessAgentProperty, AgentDescriptor, Mode, PropertyType,
    RegistrationRequest, RegistrationResponse, Report, ReportRow, Security, Status, Version,
    ENTITY,
};
