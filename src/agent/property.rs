use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, IntoStaticStr};

use crate::error::Error;
use crate::models::literal_text;

/// Entity name used when reporting invalid agent property values.
pub const ENTITY: &str = "Access Agent";

/// Syntax a property value must satisfy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyType {
    String,
    Boolean,
    Integer,
    Url,
    Uri,
    Status,
}

macro_rules! agent_properties {
    ($($variant:ident($id:literal, $kind:ident, $required:literal, $default:expr)),+ $(,)?) => {
        /// Configurable properties of an access agent registration.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum AccessAgentProperty {
            $($variant),+
        }

        impl AccessAgentProperty {
            pub const ALL: &'static [AccessAgentProperty] = &[$(AccessAgentProperty::$variant),+];

            pub fn id(&self) -> &'static str {
                match self {
                    $(AccessAgentProperty::$variant => $id),+
                }
            }

            pub fn property_type(&self) -> PropertyType {
                match self {
                    $(AccessAgentProperty::$variant => PropertyType::$kind),+
                }
            }

            pub fn required(&self) -> bool {
                match self {
                    $(AccessAgentProperty::$variant => $required),+
                }
            }

            pub fn default_value(&self) -> Option<&'static str> {
                match self {
                    $(AccessAgentProperty::$variant => $default),+
                }
            }
        }
    };
}

agent_properties! {
    AgentBaseUrl("agentBaseURL", Url, false, None),
    AgentPassword("agentPassword", String, false, None),
    AllowManagementOperation("allowManagementOperation", Boolean, false, Some("true")),
    AllowCollectorOperation("allowCollectorOperation", Boolean, false, Some("false")),
    AllowMasterTokenRetrieval("allowMasterTokenRetrieval", Boolean, false, Some("false")),
    AllowTokenScopeOperation("allowTokenScopeOperation", Boolean, false, Some("false")),
    ApplicationDomain("applicationDomain", String, false, None),
    AuthenticationSchemeProtected("authenticationSchemeProtected", String, false, None),
    AuthenticationSchemePublic("authenticationSchemePublic", String, false, None),
    AutoCreatePolicy("autoCreatePolicy", Boolean, true, Some("false")),
    CacheControlHeader("browserCacheControlHeader", String, false, Some("no-cache")),
    CacheElementsMax("cacheElementsMax", Integer, true, Some("100000")),
    CachePragmaHeader("browserCachePragmaHeader", String, false, Some("no-cache")),
    CacheTimeout("cacheTimeout", Integer, true, Some("1800")),
    ConnectionMax("connectionMax", Integer, true, Some("1")),
    ConnectionSessionTimeMax("connectionSessionTimeMax", Integer, false, Some("1")),
    CookieSessionTime("cookieSessionTime", Integer, false, Some("3600")),
    CookieDomainPrimary("cookieDomainPrimary", String, false, None),
    Debug("debug", Boolean, false, Some("false")),
    DenyNotProtected("denyNotProtected", Boolean, true, Some("true")),
    Description("description", String, false, None),
    FusionApplication("fusionApplication", Boolean, false, Some("false")),
    HostIdentifier("hostIdentifier", String, true, Some("SERVER_NAME")),
    ImpersonationUsername("impersonationUsername", String, false, None),
    ImpersonationPassword("impersonationPassword", String, false, None),
    IpValidation("ipValidation", Boolean, false, Some("false")),
    LogoutCallbackUrl("logoutCallbackURL", Uri, false, Some("/oam_logout_success")),
    LogoutRedirectUrl("logoutRedirectURL", Url, false, None),
    LogoutTargetUrlParam("logoutTargetURLParam", String, false, Some("end_url")),
    OpenSSOAccessDenied("openSSOAccessDeniedURI", Uri, false, None),
    OpenSSOAuditDirectory("openSSOAuditDirectory", String, false, None),
    OpenSSOAuditFilename("openSSOAuditFilename", String, false, None),
    OpenSSOCookieName("openSSOCookieName", String, false, Some("iPlanetDirectoryPro")),
    OpenSSOCookieSeparator("openSSOCookieSeparator", String, false, None),
    OpenSSOCookieEncoding("openSSOCookieEncoding", Boolean, false, Some("false")),
    OpenSSODebugDirectory("openSSODebugDirectory", String, false, None),
    OpenSSODebugFilename("openSSODebugFilenameDebug", String, false, None),
    OpenSSODebugLevel("openSSODebugLevel", String, false, Some("Error")),
    OpenSSOFetchModeProfile("openSSOFetchModeProfile", String, false, None),
    OpenSSOFetchModeResponse("openSSOFetchModeResponse", String, false, None),
    OpenSSOFetchModeSession("openSSOFetchModeSession", String, false, None),
    OpenSSOFilterMode("openSSOFilterMode", String, false, Some("URL_Policy")),
    OpenSSOOrganizationName("openSSOOrganizationName", String, false, None),
    OpenSSOSessionMax("openSSOSessionMax", String, false, Some("10")),
    OpenSSOSessionTimeout("openSSOSessionTimeOut", String, false, Some("0")),
    OpenSSOSsoOnly("openSSOSSOOnly", Boolean, false, None),
    OpenSSOType("openSSOType", String, false, Some("J2EE")),
    OpenSSOUserAttributeName("openSSOUserAttributeName", String, false, None),
    OpenSSOUserMappingMode("openSSOUserMappingMode", String, false, Some("User_ID")),
    OpenSSOUserIdParam("openSSOUserIDParam", String, false, None),
    OpenSSOUserIdParamType("openSSOUserIDParamType", String, false, None),
    OpenSSOUserPrincipal("openSSOUserPrincipal", String, false, None),
    OpenSSOUserToken("openSSOUserToken", String, false, None),
    OpenSSOVersion("openSSOVersion", String, false, None),
    OrclSSOAdminId("orclSSOAdminId", String, false, None),
    OrclSSOAdminInfo("orclSSOAdminInfo", String, false, None),
    OrclSSOLogoutUrl("orclSSOLogoutURL", Url, false, None),
    OrclSSOFailureUrl("orclSSOFailureURL", Url, false, None),
    OrclSSOHomeUrl("orclSSOHomeURL", Url, false, None),
    OrclSSOOracleHomePath("orclSSOOracleHomePath", String, false, None),
    OrclSSOStartDate("orclSSOStartDate", String, false, None),
    OrclSSOSuccessUrl("orclSSOSuccessURL", Url, false, None),
    PreferredHost("preferredHost", String, false, Some("SERVER_NAME")),
    Security("security", String, true, Some("open")),
    SessionIdleTimeout("sessionIdleTimeout", Integer, false, Some("3600")),
    Sleep("sleep", Integer, false, Some("60")),
    State("state", Status, false, Some("Enabled")),
    ThresholdFailover("failoverThreshold", Integer, false, Some("1")),
    ThresholdTimeout("timeoutThreshold", Integer, true, Some("-1")),
    TokenValidityTime("tokenValidityPeriod", Integer, true, Some("3600")),
    TokenVersion("tokenVersion", String, false, Some("v3.0")),
    UpdateMode("updateMode", String, false, None),
    VirtualHost("virtualHost", Boolean, false, Some("true")),
}

impl AccessAgentProperty {
    pub fn from_id(id: &str) -> Result<Self, Error> {
        Self::ALL
            .iter()
            .copied()
            .find(|property| property.id() == id)
            .ok_or_else(|| Error::UnknownProperty(id.to_string()))
    }

    /// Whether requests for `version` carry this property. Only the legacy
    /// SSO agents know their prefixed properties.
    pub fn applies_to(&self, version: Version) -> bool {
        let id = self.id();
        if id.starts_with("openSSO") {
            return version == Version::LegacySun;
        }
        if id.starts_with("orclSSO") {
            return version == Version::LegacyOrcl;
        }
        true
    }

    /// Smallest accepted value of an integer property.
    pub fn minimum(&self) -> Option<i32> {
        match self {
            AccessAgentProperty::CacheElementsMax
            | AccessAgentProperty::CacheTimeout
            | AccessAgentProperty::TokenValidityTime
            | AccessAgentProperty::ConnectionSessionTimeMax
            | AccessAgentProperty::ThresholdFailover
            | AccessAgentProperty::Sleep => Some(0),
            AccessAgentProperty::ThresholdTimeout => Some(-1),
            _ => None,
        }
    }
}

impl std::fmt::Display for AccessAgentProperty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

/// Operational mode a registration request is submitted with.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, Display, IntoStaticStr,
)]
pub enum Mode {
    #[serde(rename = "infoagent")]
    #[strum(serialize = "infoagent")]
    Report,
    #[serde(rename = "agentcreate")]
    #[strum(serialize = "agentcreate")]
    Create,
    #[serde(rename = "agentupdate")]
    #[strum(serialize = "agentupdate")]
    Modify,
    #[serde(rename = "agentdelete")]
    #[strum(serialize = "agentdelete")]
    Delete,
    #[serde(rename = "agentvalidate")]
    #[strum(serialize = "agentvalidate")]
    Validate,
    #[serde(rename = "agentPasswordUpdate")]
    #[strum(serialize = "agentPasswordUpdate")]
    Password,
}

literal_text!(Mode, "mode");

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, Display, IntoStaticStr,
)]
pub enum Version {
    #[serde(rename = "11g")]
    #[strum(serialize = "11g")]
    Agent11,
    #[serde(rename = "10g")]
    #[strum(serialize = "10g")]
    Agent10,
    #[serde(rename = "openSSO")]
    #[strum(serialize = "openSSO")]
    LegacySun,
    #[serde(rename = "orclSSO")]
    #[strum(serialize = "orclSSO")]
    LegacyOrcl,
}

literal_text!(Version, "agent version");

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, Display, IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Security {
    Open,
    Simple,
    #[serde(rename = "cert")]
    #[strum(serialize = "cert")]
    Certificate,
}

literal_text!(Security, "security mode");

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, Display, IntoStaticStr,
)]
pub enum Status {
    Enabled,
    Disabled,
}

literal_text!(Status, "status");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique_and_resolve() {
        for property in AccessAgentProperty::ALL {
            assert_eq!(
                AccessAgentProperty::from_id(property.id()).expect("known id"),
                *property
            );
        }
        let mut ids: Vec<&str> = AccessAgentProperty::ALL.iter().map(|p| p.id()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), AccessAgentProperty::ALL.len());
    }

    #[test]
    fn required_properties_carry_defaults() {
        let required: Vec<_> = AccessAgentProperty::ALL
            .iter()
            .filter(|p| p.required())
            .collect();
        assert!(required.contains(&&AccessAgentProperty::HostIdentifier));
        assert!(required.iter().all(|p| p.default_value().is_some()));
        assert_eq!(
            AccessAgentProperty::ThresholdTimeout.default_value(),
            Some("-1")
        );
        assert_eq!(AccessAgentProperty::ThresholdTimeout.minimum(), Some(-1));
    }

    #[test]
    fn unknown_id_is_rejected() {
        let err = AccessAgentProperty::from_id("nope").unwrap_err();
        assert!(matches!(err, Error::UnknownProperty(ref id) if id == "nope"));
    }

    #[test]
    fn mode_literals_match_wire_values() {
        assert_eq!(Mode::Password.value(), "agentPasswordUpdate");
        assert_eq!(Version::from_value("orclSSO").unwrap(), Version::LegacyOrcl);
        assert_eq!("cert".parse::<Security>().unwrap(), Security::Certificate);
        assert!(Status::from_value("enabled").is_err());
    }

    #[test]
    fn literals_serialize_as_wire_text() {
        assert_eq!(serde_json::to_string(&Mode::Password).unwrap(), "\"agentPasswordUpdate\"");
        assert_eq!(serde_json::to_string(&Security::Certificate).unwrap(), "\"cert\"");
        let version: Version = serde_json::from_str("\"openSSO\"").unwrap();
        assert_eq!(version, Version::LegacySun);
        assert_eq!(Security::Simple.to_string(), "simple");
        assert_eq!(Version::Agent10.value(), "10g");
        assert!(serde_json::from_str::<Version>("\"12c\"").is_err());
        let err = Security::from_value("Open").unwrap_err();
        assert!(matches!(err, Error::UnknownLiteral { kind: "security mode", ref value } if value == "Open"));
    }
}
