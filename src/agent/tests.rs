use super::{
    AccessAgentInstance, AccessAgentProperty as P, AgentDescriptor, Mode, RegistrationRequest,
    RegistrationResponse, Report, Version,
};
use crate::error::{Error, ServiceOperation};
use crate::models::{
    AttributeMapping, IpValidationExceptions, LogOutUrls, MiscellaneousProperty,
    PrimaryServerList, Server, UserDefinedParam, UserDefinedParameters,
};

fn instance(version: Version) -> AccessAgentInstance {
    AccessAgentInstance::new(
        "webgate01",
        version,
        Mode::Create,
        "http://oam.example.com:7001",
        "weblogic",
        "welcome1",
    )
}

#[test]
fn add_rejects_empty_mandatory_value() {
    let mut agent = instance(Version::Agent11);
    let err = agent.add(P::HostIdentifier, "  ").unwrap_err();
    assert!(matches!(err, Error::ParameterMandatory(ref id) if id == "hostIdentifier"));
    agent.add(P::Description, "").expect("optional value may be empty");
}

#[test]
fn add_parameter_resolves_ids() {
    let mut agent = instance(Version::Agent11);
    agent.add_parameter("preferredHost", "web01").expect("known");
    assert_eq!(agent.parameter(P::PreferredHost), Some("web01"));
    assert!(matches!(
        agent.add_parameter("preferedHost", "web01"),
        Err(Error::UnknownProperty(_))
    ));
}

#[test]
fn validate_skips_checks_for_delete() {
    let mut agent = instance(Version::Agent11);
    agent.validate(ServiceOperation::Delete).expect("delete");
    agent.validate(ServiceOperation::Print).expect("print");
}

#[test]
fn validate_requires_parameters() {
    let mut agent = instance(Version::Agent11);
    assert!(matches!(
        agent.validate(ServiceOperation::Modify),
        Err(Error::ParameterEmpty)
    ));
}

#[test]
fn validate_create_injects_defaults() {
    let mut agent = instance(Version::Agent11);
    agent.add(P::AgentBaseUrl, "http://web01.example.com:7777").expect("add");
    agent.validate(ServiceOperation::Create).expect("valid");
    assert_eq!(agent.parameter(P::HostIdentifier), Some("SERVER_NAME"));
    assert_eq!(agent.parameter(P::ThresholdTimeout), Some("-1"));
    assert_eq!(agent.parameter(P::Security), Some("open"));
    // optional properties are not defaulted
    assert_eq!(agent.parameter(P::Sleep), None);
}

#[test]
fn validate_modify_does_not_inject_defaults() {
    let mut agent = instance(Version::Agent11);
    agent.add(P::PreferredHost, "web01").expect("add");
    agent.validate(ServiceOperation::Modify).expect("valid");
    assert_eq!(agent.parameter(P::HostIdentifier), None);
}

#[test]
fn validate_rejects_bad_typed_values() {
    let cases = [
        (P::Debug, "yes"),
        (P::State, "enabled"),
        (P::AgentBaseUrl, "not a url"),
        (P::CacheTimeout, "-5"),
        (P::Sleep, "ten"),
        (P::ThresholdTimeout, "-2"),
        (P::LogoutTargetUrlParam, "end>url"),
        (P::Security, "tls"),
    ];
    for (property, value) in cases {
        let mut agent = instance(Version::Agent11);
        agent.add(property, value).expect("add");
        match agent.validate(ServiceOperation::Modify) {
            Err(Error::ParameterInvalid(invalid)) => {
                assert_eq!(invalid.entity, "Access Agent");
                assert_eq!(invalid.property, property.id());
                assert_eq!(invalid.value, value);
            }
            other => panic!("{property}={value}: unexpected {other:?}"),
        }
    }
}

#[test]
fn validate_accepts_relative_logout_callback() {
    let mut agent = instance(Version::Agent11);
    agent.add(P::LogoutCallbackUrl, "/oam_logout_success").expect("add");
    agent.add(P::ThresholdTimeout, "-1").expect("add");
    agent.validate(ServiceOperation::Modify).expect("valid");
}

#[test]
fn validate_checks_logout_urls_and_exceptions() {
    let mut agent = instance(Version::Agent11);
    agent.add(P::Debug, "true").expect("add");
    agent
        .set_logout_urls(LogOutUrls::new(vec!["/logout.html".to_string(), String::new()]))
        .expect("set");
    assert!(matches!(
        agent.validate(ServiceOperation::Modify),
        Err(Error::ParameterInvalid(_))
    ));

    let mut agent = instance(Version::Agent11);
    agent.add(P::Debug, "true").expect("add");
    agent
        .set_validation_exceptions(IpValidationExceptions {
            ip_address: vec!["10.0.0.1".to_string(), "10.0.0.300".to_string()],
        })
        .expect("set");
    match agent.validate(ServiceOperation::Modify) {
        Err(Error::ParameterInvalid(invalid)) => assert_eq!(invalid.value, "10.0.0.300"),
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn children_attach_once() {
    let mut agent = instance(Version::Agent11);
    agent
        .set_primary_server(PrimaryServerList::new(vec![Server::new("oam1", 5575, 1)]))
        .expect("first");
    let err = agent
        .set_primary_server(PrimaryServerList::default())
        .unwrap_err();
    assert!(matches!(err, Error::ElementOnlyOnce(ref element) if element == "primary"));
}

#[test]
fn create_request_maps_11g_parameters() {
    let mut agent = instance(Version::Agent11);
    agent.add(P::AgentBaseUrl, "http://web01.example.com:7777").expect("add");
    agent.add(P::AgentPassword, "agentpw").expect("add");
    agent.add(P::IpValidation, "true").expect("add");
    agent.add(P::AllowCollectorOperation, "true").expect("add");
    agent.add(P::CookieDomainPrimary, ".example.com").expect("add");
    agent.validate(ServiceOperation::Create).expect("valid");

    let RegistrationRequest::Agent11gCreate(request) = agent.create_request().expect("request")
    else {
        panic!("expected an 11g create request");
    };
    assert_eq!(request.agent_name.as_deref(), Some("webgate01"));
    assert_eq!(request.server_address.as_deref(), Some("http://oam.example.com:7001"));
    assert_eq!(request.envelope.request_type.as_deref(), Some("OAM11g"));
    assert_eq!(request.envelope.mode.as_deref(), Some("agentcreate"));
    assert_eq!(request.access_client_passwd.as_deref(), Some("agentpw"));
    assert_eq!(request.ip_validation, Some(1));
    assert_eq!(request.deny_on_not_protected, Some(1));
    assert_eq!(request.max_cache_element, Some(100000));
    assert_eq!(request.aaa_timeout_threshold, Some(-1));
    assert_eq!(request.allow_credential_collector_operations, Some(true));
    assert_eq!(request.host_identifier.as_deref(), Some("SERVER_NAME"));
}

#[test]
fn modify_request_without_password_clears_flag() {
    let mut agent = instance(Version::Agent10);
    agent.mode = Mode::Modify;
    agent.add(P::PreferredHost, "web01").expect("add");

    let RegistrationRequest::Agent10gUpdate(request) = agent.modify_request().expect("request")
    else {
        panic!("expected a 10g update request");
    };
    assert_eq!(request.access_client_passwd.as_deref(), Some(""));
    assert_eq!(request.modify_access_client_passwd_flag, Some(false));

    agent.add(P::AgentPassword, "newpw").expect("add");
    let RegistrationRequest::Agent10gUpdate(request) = agent.modify_request().expect("request")
    else {
        panic!("expected a 10g update request");
    };
    assert_eq!(request.access_client_passwd.as_deref(), Some("newpw"));
    assert_eq!(request.modify_access_client_passwd_flag, Some(true));
}

#[test]
fn opensso_modify_sets_flag_only_with_password() {
    let mut agent = instance(Version::LegacySun);
    agent.add(P::AgentBaseUrl, "http://web01.example.com").expect("add");
    agent.add(P::OpenSSOCookieSeparator, "|").expect("add");

    let RegistrationRequest::OpenSSOUpdate(request) = agent.modify_request().expect("request")
    else {
        panic!("expected an OpenSSO update request");
    };
    assert_eq!(request.modify_access_client_passwd_flag, None);
    assert_eq!(request.cookie_separator.as_deref(), Some("|"));
}

#[test]
fn orclsso_create_carries_virtual_host_as_text() {
    let mut agent = instance(Version::LegacyOrcl);
    agent.add(P::AgentBaseUrl, "http://web01.example.com").expect("add");
    agent.add(P::VirtualHost, "false").expect("add");
    agent.add(P::TokenVersion, "v1.4").expect("add");

    let RegistrationRequest::OrclSSOCreate(request) = agent.create_request().expect("request")
    else {
        panic!("expected an OSSO create request");
    };
    assert_eq!(request.virtual_host.as_deref(), Some("false"));
    assert_eq!(request.sso_server_version.as_deref(), Some("v1.4"));
}

#[test]
fn bad_integer_surfaces_when_building_request() {
    let mut agent = instance(Version::Agent11);
    agent.add(P::CacheTimeout, "soon").expect("add");
    assert!(matches!(
        agent.create_request(),
        Err(Error::ParameterInvalid(ref invalid)) if invalid.property == "cacheTimeout"
    ));
}

#[test]
fn report_and_delete_requests_share_the_base_shape() {
    let agent = instance(Version::Agent10);
    let report = agent.report_request();
    assert_eq!(report.envelope.request_type.as_deref(), Some("OAM10g"));
    let delete = agent.base_request();
    assert_eq!(delete.envelope.request_type, None);
    assert_eq!(delete.agent_name, report.agent_name);
}

#[test]
fn parse_response_rejects_legacy_versions() {
    let agent = instance(Version::LegacySun);
    let err = agent
        .parse_response("<OpenSSORegResponse/>")
        .unwrap_err();
    assert!(matches!(
        err,
        Error::Unsupported { ref version, operation: ServiceOperation::Print } if version == "openSSO"
    ));
}

#[test]
fn report_lists_11g_settings() {
    let xml = r#"<OAM11GRegResponse>
        <agentName>webgate01</agentName>
        <state>Enabled</state>
        <maxConnections>4</maxConnections>
        <ipValidation>0</ipValidation>
        <primaryServerList>
            <Server><serverHost>oam1</serverHost><serverPort>5575</serverPort><maxConnections>1</maxConnections></Server>
            <Server><serverHost>oam2</serverHost><serverPort>5575</serverPort><maxConnections>2</maxConnections></Server>
        </primaryServerList>
    </OAM11GRegResponse>"#;
    let agent = instance(Version::Agent11);
    let response = agent.parse_response(xml).expect("parse");
    assert!(matches!(response, RegistrationResponse::Agent11g(_)));

    let report = agent.report(&response);
    let value = |property: &str| {
        report
            .rows
            .iter()
            .find(|row| row.property == property)
            .map(|row| row.value.clone())
    };
    assert_eq!(value("security").as_deref(), Some("open"));
    assert_eq!(value("connectionMax").as_deref(), Some("4"));
    assert_eq!(value("ipValidation").as_deref(), Some("false"));
    assert_eq!(value("allowTokenScopeOperation").as_deref(), Some("false"));

    let servers: Vec<_> = report
        .rows
        .iter()
        .skip_while(|row| row.property != "primaryServerList")
        .take(2)
        .collect();
    assert_eq!(servers[0].value, "oam1:5575#1");
    assert_eq!(servers[1].property, "");
    assert_eq!(servers[1].value, "oam2:5575#2");

    let text = report.to_string();
    assert!(text.starts_with("webgate01\nProperty\tValue\n"));
}

#[test]
fn report_lists_10g_user_parameters() {
    let response = crate::models::Agent10gResponse {
        agent_name: Some("wg10".to_string()),
        ip_validation: 1,
        user_defined_parameters: Some(UserDefinedParameters {
            user_defined_param: vec![UserDefinedParam::new("proxySSLHeaderVar", "IS_SSL")],
        }),
        ..Default::default()
    };
    let report = Report::from(&RegistrationResponse::Agent10g(response));
    assert_eq!(report.agent_name, "wg10");
    assert!(report
        .rows
        .iter()
        .any(|row| row.property == "ipValidation" && row.value == "1"));
    assert!(report
        .rows
        .iter()
        .any(|row| row.property == "userDefinedParameters" && row.value == "proxySSLHeaderVar: IS_SSL"));
}

#[test]
fn parsed_10g_response_exposes_identity() {
    let xml = "<OAMRegResponse><serverAddress>http://oam.example.com:7001</serverAddress>\
               <agentName>wg10</agentName><description>legacy gate</description></OAMRegResponse>";
    let agent = instance(Version::Agent10);
    let response = agent.parse_response(xml).expect("parse");
    assert!(matches!(response, RegistrationResponse::Agent10g(_)));
    assert_eq!(response.agent_name(), Some("wg10"));
    assert_eq!(response.server_address(), Some("http://oam.example.com:7001"));
    assert_eq!(response.description(), Some("legacy gate"));
}

#[test]
fn descriptor_builds_instance() {
    let json = r#"{
        "name": "webgate01",
        "version": "11g",
        "mode": "agentcreate",
        "serviceUrl": "http://oam.example.com:7001",
        "username": "weblogic",
        "password": "welcome1",
        "parameters": { "agentBaseURL": "http://web01.example.com:7777", "debug": "true" },
        "primaryServers": [{ "serverHost": "oam1", "serverPort": 5575, "maxConnections": 1 }],
        "userDefinedParameters": { "a": "1" }
    }"#;
    let mut agent = AgentDescriptor::from_json(json)
        .expect("json")
        .into_instance()
        .expect("instance");
    assert_eq!(agent.version, Version::Agent11);
    assert_eq!(agent.parameter(P::Debug), Some("true"));
    agent.validate(ServiceOperation::Create).expect("valid");

    let request = agent.create_request().expect("request");
    let xml = request.to_xml().expect("xml");
    assert!(xml.starts_with("<OAM11GRegRequest>"));
    assert!(xml.contains("<serverHost>oam1</serverHost>"));
}

#[test]
fn descriptor_carries_opensso_mappings() {
    let json = r#"{
        "name": "j2ee01",
        "version": "openSSO",
        "mode": "agentupdate",
        "serviceUrl": "http://oam.example.com:7001",
        "parameters": { "agentBaseURL": "http://app01.example.com:8080" },
        "profileAttributeMapping": { "cn": "HTTP_CN", "mail": "HTTP_MAIL" },
        "sessionAttributeMapping": { "UserToken": "HTTP_USER" },
        "responseAttributeMapping": { "role": "HTTP_ROLE" },
        "miscellaneousProperties": { "com.sun.identity.agents.config.locale": "en_US" }
    }"#;
    let agent = AgentDescriptor::from_json(json)
        .expect("json")
        .into_instance()
        .expect("instance");

    let RegistrationRequest::OpenSSOUpdate(request) = agent.modify_request().expect("request")
    else {
        panic!("expected an OpenSSO update request");
    };
    let profile = request.profile_attribute_mapping.as_ref().expect("profile mapping");
    assert_eq!(
        profile.attribute_mapping,
        vec![
            AttributeMapping::new("cn", "HTTP_CN"),
            AttributeMapping::new("mail", "HTTP_MAIL"),
        ]
    );
    let session = request.session_attribute_mapping.as_ref().expect("session mapping");
    assert_eq!(session.attribute_mapping, vec![AttributeMapping::new("UserToken", "HTTP_USER")]);
    let response = request.response_attribute_mapping.as_ref().expect("response mapping");
    assert_eq!(response.attribute_mapping, vec![AttributeMapping::new("role", "HTTP_ROLE")]);
    let misc = request.miscellaneous_properties.as_ref().expect("miscellaneous");
    assert_eq!(
        misc.miscellaneous_property,
        vec![MiscellaneousProperty::new("com.sun.identity.agents.config.locale", "en_US")]
    );

    let xml = RegistrationRequest::OpenSSOUpdate(request).to_xml().expect("xml");
    assert!(xml.contains(
        "<profileAttributeMapping><attributeMapping><name>cn</name><value>HTTP_CN</value></attributeMapping>"
    ));
}

#[test]
fn descriptor_without_mappings_attaches_none() {
    let agent = AgentDescriptor {
        name: "j2ee01".to_string(),
        version: Version::LegacySun,
        mode: Mode::Modify,
        service_url: "http://oam.example.com:7001".to_string(),
        ..Default::default()
    }
    .into_instance()
    .expect("instance");
    let RegistrationRequest::OpenSSOUpdate(request) = agent.modify_request().expect("request")
    else {
        panic!("expected an OpenSSO update request");
    };
    assert_eq!(request.profile_attribute_mapping, None);
    assert_eq!(request.miscellaneous_properties, None);
}

#[test]
fn descriptor_rejects_bad_service_url() {
    let descriptor = AgentDescriptor {
        name: "webgate01".to_string(),
        service_url: "oam.example.com".to_string(),
        ..Default::default()
    };
    assert!(matches!(descriptor.into_instance(), Err(Error::Url(_))));
}

#[test]
fn legacy_properties_apply_to_their_agents() {
    assert!(P::OpenSSOCookieName.applies_to(Version::LegacySun));
    assert!(!P::OpenSSOCookieName.applies_to(Version::Agent11));
    assert!(!P::OrclSSOAdminId.applies_to(Version::LegacySun));
    assert!(P::PreferredHost.applies_to(Version::LegacyOrcl));
}
