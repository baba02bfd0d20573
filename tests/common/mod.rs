#![allow(dead_code)]

use oam_rreg::{AccessAgentInstance, AgentDescriptor};

pub const SERVICE_URL: &str = "http://oam.example.com:7001";

/// Descriptor of an 11g WebGate with two primary servers and a policy domain.
pub const WEBGATE_11G: &str = r#"{
    "name": "webgate01",
    "version": "11g",
    "mode": "agentcreate",
    "serviceUrl": "http://oam.example.com:7001",
    "username": "weblogic",
    "password": "welcome1",
    "parameters": {
        "agentBaseURL": "http://web01.example.com:7777",
        "preferredHost": "web01",
        "security": "simple",
        "ipValidation": "true",
        "logoutCallbackURL": "/oam_logout_success"
    },
    "primaryServers": [
        { "serverHost": "oam1", "serverPort": 5575, "maxConnections": 1 },
        { "serverHost": "oam2", "serverPort": 5575, "maxConnections": 2 }
    ],
    "protectedResources": ["/index.html", "/**"],
    "publicResources": ["/public/index.html"],
    "logOutUrls": ["/logout.html"],
    "ipValidationExceptions": ["10.1.1.1"],
    "applicationDomain": {
        "name": "webgate01",
        "description": "created with the agent"
    }
}"#;

pub const REPORT_11G: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<OAM11GRegResponse>
  <serverAddress>http://oam.example.com:7001</serverAddress>
  <agentName>webgate01</agentName>
  <accessClientPasswd>agentpw</accessClientPasswd>
  <preferredHost>web01</preferredHost>
  <state>Enabled</state>
  <maxCacheElems>100000</maxCacheElems>
  <cacheTimeout>1800</cacheTimeout>
  <tokenValidityPeriod>3600</tokenValidityPeriod>
  <maxConnections>1</maxConnections>
  <failoverThreshold>1</failoverThreshold>
  <aaaTimeoutThreshold>-1</aaaTimeoutThreshold>
  <sleepFor>60</sleepFor>
  <debug>false</debug>
  <security>simple</security>
  <denyOnNotProtected>1</denyOnNotProtected>
  <allowManagementOperations>true</allowManagementOperations>
  <cachePragmaHeader>no-cache</cachePragmaHeader>
  <cacheControlHeader>no-cache</cacheControlHeader>
  <ipValidation>1</ipValidation>
  <logoutRedirectUrl>http://oam.example.com:14100/oam/server/logout</logoutRedirectUrl>
  <logoutCallbackUrl>/oam_logout_success</logoutCallbackUrl>
  <primaryServerList>
    <Server><serverHost>oam1</serverHost><serverPort>5575</serverPort><maxConnections>1</maxConnections></Server>
  </primaryServerList>
  <secondaryServerList>
    <Server><serverHost>oam3</serverHost><serverPort>5575</serverPort><maxConnections>1</maxConnections></Server>
  </secondaryServerList>
  <userDefinedParameters>
    <userDefinedParam><name>proxySSLHeaderVar</name><value>IS_SSL</value></userDefinedParam>
  </userDefinedParameters>
</OAM11GRegResponse>"#;

pub fn webgate_11g() -> AccessAgentInstance {
    AgentDescriptor::from_json(WEBGATE_11G)
        .expect("descriptor")
        .into_instance()
        .expect("instance")
}
