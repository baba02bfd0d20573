use super::{from_xml, to_document, to_xml, to_xml_checked, Validate, XML_DECLARATION};
use crate::error::Error;
use crate::models::{
    Agent10gResponse, Agent11gCreate, Agent11gResponse, BaseRequest, Request, Server,
};

fn position(xml: &str, needle: &str) -> usize {
    xml.find(needle)
        .unwrap_or_else(|| panic!("{needle} missing from {xml}"))
}

#[test]
fn writes_root_and_base_elements_first() {
    let mut request = Agent11gCreate::new(
        "agentcreate",
        "http://oam.example.com:7001",
        "weblogic",
        "welcome1",
        "webgate01",
    );
    request.host_identifier = Some("webgate01".to_string());
    request.security = Some("open".to_string());
    request.primary_server_mut().server.push(Server::new("oam1", 5575, 1));
    request.auto_create_policy = Some(true);

    let xml = to_xml(&request).expect("xml");
    assert!(xml.starts_with("<OAM11GRegRequest>"));
    assert!(xml.ends_with("</OAM11GRegRequest>"));
    let server = position(&xml, "<serverAddress>");
    let host = position(&xml, "<hostIdentifier>");
    let agent = position(&xml, "<agentName>");
    let policy = position(&xml, "<autoCreatePolicy>true</autoCreatePolicy>");
    let security = position(&xml, "<security>");
    let primary = position(&xml, "<primaryServerList><Server>");
    assert!(server < host && host < agent && agent < policy);
    assert!(policy < security && security < primary);
}

#[test]
fn envelope_is_never_written() {
    let request = BaseRequest::with_type(
        "OAM11g",
        "infoagent",
        "http://oam.example.com:7001",
        "weblogic",
        "welcome1",
        "webgate01",
    );
    let xml = to_xml(&request).expect("xml");
    assert_eq!(
        xml,
        "<RegRequest><serverAddress>http://oam.example.com:7001</serverAddress>\
         <agentName>webgate01</agentName></RegRequest>"
    );
    assert!(!xml.contains("welcome1"));
    assert!(!format!("{request:?}").contains("welcome1"));
}

#[test]
fn document_carries_declaration() {
    let request = BaseRequest::new("agentdelete", "http://oam", "u", "p", "wg");
    let document = to_document(&request).expect("document");
    assert!(document.starts_with(XML_DECLARATION));
    assert!(document.ends_with("</RegRequest>"));
}

#[test]
fn checked_write_reports_missing_required_element() {
    let request = BaseRequest {
        server_address: Some("http://oam".to_string()),
        ..Default::default()
    };
    let err = to_xml_checked(&request).unwrap_err();
    assert!(matches!(
        err,
        Error::RequiredElement { parent: "RegRequest", element: "agentName" }
    ));
}

#[test]
fn reads_response_ignoring_unknown_elements() {
    let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
<OAM11GRegResponse>
  <serverAddress>http://oam.example.com:7001</serverAddress>
  <agentName>webgate01</agentName>
  <somethingNew>ignored</somethingNew>
  <maxCacheElems>100000</maxCacheElems>
  <debug>true</debug>
  <allowMasterTokenRetrieval>false</allowMasterTokenRetrieval>
  <logOutUrls><url>/logout.html</url><url>/signoff</url></logOutUrls>
  <cert>
    aGVsbG8g
    d29ybGQ=
  </cert>
  <cert-key>a2V5</cert-key>
</OAM11GRegResponse>"#;
    let response: Agent11gResponse = from_xml(xml).expect("response");
    assert_eq!(response.agent_name.as_deref(), Some("webgate01"));
    assert_eq!(response.max_cache_elems, 100000);
    assert_eq!(response.cache_timeout, 0);
    assert!(response.debug);
    assert_eq!(response.allow_master_token_retrieval, Some(false));
    assert_eq!(response.allow_token_scope_operations, None);
    let urls = response.log_out_urls.expect("logout urls");
    assert_eq!(urls.url, vec!["/logout.html", "/signoff"]);
    assert_eq!(response.cert.as_deref(), Some(&b"hello world"[..]));
    assert_eq!(response.cert_key.as_deref(), Some(&b"key"[..]));
}

#[test]
fn legacy_response_keys_certificate_without_hyphen() {
    let xml = "<OAMRegResponse><agentName>wg10</agentName><certKey>a2V5</certKey></OAMRegResponse>";
    let response: Agent10gResponse = from_xml(xml).expect("response");
    assert_eq!(response.cert_key.as_deref(), Some(&b"key"[..]));
    assert_eq!(response.cert, None);
}

#[test]
fn request_survives_a_round_trip() {
    let mut request = Agent11gCreate::new(
        "agentcreate",
        "http://oam.example.com:7001",
        "weblogic",
        "welcome1",
        "webgate01",
    );
    request.max_cache_element = Some(100000);
    request.deny_on_not_protected = Some(0);
    request.set_host_identifier(Some("webgate01".to_string()));
    request.secondary_server_mut().server.push(Server::new("oam2", 5575, 2));
    request.protected_resource_mut().resource.push("/index.html".to_string());
    request.protected_resource_mut().resource.push("/**".to_string());

    let xml = to_xml(&request).expect("xml");
    let mut read: Agent11gCreate = from_xml(&xml).expect("read back");
    read.envelope = request.envelope.clone();
    assert_eq!(read, request);
}

const SERVERS: &str = "<secondaryServerList><Server><serverHost>oam2</serverHost>\
<serverPort>5575</serverPort><maxConnections>1</maxConnections></Server></secondaryServerList>";

#[test]
fn response_without_primary_servers_is_rejected() {
    let xml = format!(
        "<OAM11GRegResponse><agentName>webgate01</agentName>\
         <accessClientPasswd>secret</accessClientPasswd><preferredHost>web01</preferredHost>\
         <state>Enabled</state><cachePragmaHeader>no-cache</cachePragmaHeader>\
         <cacheControlHeader>no-cache</cacheControlHeader>\
         <logoutRedirectUrl>http://oam/logout</logoutRedirectUrl>\
         <logoutCallbackUrl>/oam_logout_success</logoutCallbackUrl>{SERVERS}</OAM11GRegResponse>"
    );
    let response: Agent11gResponse = from_xml(&xml).expect("response");
    let err = response.validate().unwrap_err();
    assert!(matches!(
        err,
        Error::RequiredElement { parent: "OAM11GRegResponse", element: "primaryServerList" }
    ));
}

#[test]
fn legacy_response_without_logout_urls_is_rejected() {
    let xml = format!(
        "<OAMRegResponse><agentName>wg10</agentName>\
         <accessClientPasswd>secret</accessClientPasswd>\
         <primaryCookieDomain>example.com</primaryCookieDomain><preferredHost>web01</preferredHost>\
         <state>Enabled</state><cachePragmaHeader>no-cache</cachePragmaHeader>\
         <cacheControlHeader>no-cache</cacheControlHeader>\
         <primaryServerList><Server><serverHost>oam1</serverHost><serverPort>5575</serverPort>\
         <maxConnections>1</maxConnections></Server></primaryServerList>{SERVERS}</OAMRegResponse>"
    );
    let response: Agent10gResponse = from_xml(&xml).expect("response");
    let err = response.validate().unwrap_err();
    assert!(matches!(
        err,
        Error::RequiredElement { parent: "OAMRegResponse", element: "logOutUrls" }
    ));
}

#[test]
fn empty_response_reports_first_missing_element() {
    let response: Agent11gResponse = from_xml("<OAM11GRegResponse/>").expect("response");
    assert!(matches!(
        response.validate(),
        Err(Error::RequiredElement { parent: "OAM11GRegResponse", element: "accessClientPasswd" })
    ));
}
