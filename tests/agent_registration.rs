mod common;

use oam_rreg::{
    from_xml, AccessAgentProperty, Agent11gCreate, Error, Mode, RegistrationRequest,
    RegistrationResponse, ServiceOperation, Validate, Version,
};

#[test]
fn descriptor_to_create_document() {
    let mut agent = common::webgate_11g();
    agent.validate(ServiceOperation::Create).expect("valid");

    let request = agent.create_request().expect("request");
    assert_eq!(request.local(), "OAM11GRegRequest");
    assert_eq!(request.agent_name(), Some("webgate01"));
    assert_eq!(request.envelope().request_type.as_deref(), Some("OAM11g"));

    let document = request.to_document().expect("document");
    assert!(document.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<OAM11GRegRequest>"));
    assert!(document.contains("<ipValidation>1</ipValidation>"));
    assert!(document.contains("<security>simple</security>"));
    assert!(document.contains("<logOutUrls><url>/logout.html</url></logOutUrls>"));
    assert!(document.contains("<ipValidationExceptions><ipAddress>10.1.1.1</ipAddress></ipValidationExceptions>"));
    assert!(document.contains("<rregApplicationDomain><name>webgate01</name>"));
    assert!(!document.contains("welcome1"));

    let body = request.to_xml().expect("xml");
    let read: Agent11gCreate = from_xml(&body).expect("read back");
    assert_eq!(read.primary_server.expect("primary").server.len(), 2);
    assert_eq!(
        read.protected_resource.expect("protected").resource,
        vec!["/index.html", "/**"]
    );
}

#[test]
fn modify_document_for_each_version() {
    let expected = [
        (Version::Agent10, "OAMUpdateAgentRegRequest"),
        (Version::Agent11, "OAM11GUpdateAgentRegRequest"),
        (Version::LegacySun, "OpenSSOUpdateAgentRegRequest"),
        (Version::LegacyOrcl, "OSSOUpdateAgentRegRequest"),
    ];
    for (version, local) in expected {
        let mut agent = common::webgate_11g();
        agent.version = version;
        agent.mode = Mode::Modify;
        agent.validate(ServiceOperation::Modify).expect("valid");
        let request = agent.modify_request().expect("request");
        assert_eq!(request.local(), local);
        let xml = request.to_xml().expect("xml");
        assert!(xml.starts_with(&format!("<{local}>")), "{xml}");
    }
}

#[test]
fn create_document_for_legacy_agents() {
    let mut agent = common::webgate_11g();
    agent.version = Version::LegacySun;
    agent
        .add(AccessAgentProperty::OpenSSOType, "J2EE")
        .expect("add");
    let request = agent.create_request().expect("request");
    assert!(matches!(request, RegistrationRequest::OpenSSOCreate(_)));
    let xml = request.to_xml().expect("xml");
    assert!(xml.contains("<agentType>J2EE</agentType>"));
    assert!(!xml.contains("<rregApplicationDomain>"), "{xml}");

    agent.version = Version::LegacyOrcl;
    let request = agent.create_request().expect("request");
    assert_eq!(request.local(), "OSSORegRequest");
    let xml = request.to_xml().expect("xml");
    assert!(!xml.contains("<rregApplicationDomain>"), "{xml}");
}

#[test]
fn invalid_descriptor_value_is_reported() {
    let json = common::WEBGATE_11G.replace("\"simple\"", "\"tls\"");
    let mut agent = oam_rreg::AgentDescriptor::from_json(&json)
        .expect("descriptor")
        .into_instance()
        .expect("instance");
    let err = agent.validate(ServiceOperation::Create).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Access Agent property 'security' has invalid value 'tls'"
    );
}

#[test]
fn unknown_descriptor_property_is_rejected() {
    let json = common::WEBGATE_11G.replace("\"preferredHost\"", "\"preferedHost\"");
    let err = oam_rreg::AgentDescriptor::from_json(&json)
        .expect("descriptor")
        .into_instance()
        .unwrap_err();
    assert!(matches!(err, Error::UnknownProperty(ref id) if id == "preferedHost"));
}

#[test]
fn report_of_registered_agent() {
    let agent = common::webgate_11g();
    let request = agent.report_request();
    assert_eq!(request.envelope.mode.as_deref(), Some("agentcreate"));

    let response = agent.parse_response(common::REPORT_11G).expect("response");
    let RegistrationResponse::Agent11g(ref registered) = response else {
        panic!("expected an 11g response");
    };
    registered.validate().expect("complete response");

    let report = agent.report(&response);
    let text = report.to_string();
    assert!(text.starts_with("webgate01\nProperty\tValue\n"));
    assert!(text.contains("security\tsimple\n"));
    assert!(text.contains("ipValidation\ttrue\n"));
    assert!(text.contains("primaryServerList\toam1:5575#1\n"));
    assert!(text.contains("userDefinedParameters\tproxySSLHeaderVar: IS_SSL\n"));
}
