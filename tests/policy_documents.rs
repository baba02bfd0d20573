use oam_rreg::{
    from_xml, to_xml, to_xml_checked, CombinerMode, Condition, ConditionClassType,
    ConditionCombiner, Error, Identity, Ip4Range, OpenSSOResponse, PolicyRequest,
    RregApplicationDomain, RregAuthenticationPolicy, RregAuthorizationPolicy, RregPolicy, Rule,
    RuleEffect, SuccessResponse, UriResource,
};

fn shop_domain() -> RregApplicationDomain {
    let mut domain = RregApplicationDomain::new("Shop", Some("storefront".to_string()));
    domain
        .uri_list_mut()
        .uri_resource
        .push(UriResource::new("/shop/**", None, None));

    let mut authn = RregAuthenticationPolicy::new("Protected", "LDAPScheme");
    authn
        .uri_list_mut()
        .uri_resource
        .push(UriResource::new("/shop/**", None, None));
    domain.authentication_policies_mut().push(authn);

    let mut authz = RregAuthorizationPolicy::new("Employees");
    authz
        .uri_list_mut()
        .uri_resource
        .push(UriResource::new("/shop/admin", None, Some("mode=edit".to_string())));
    authz
        .success_response_list_mut()
        .success_response
        .push(SuccessResponse::new("OAM_USER", "HEADER", "$user.userid"));

    let mut office = Condition::new("office", ConditionClassType::Ip4Range);
    office
        .ip4_range_list_mut()
        .ip4_range
        .push(Ip4Range::new("10.0.0.1", "10.0.0.254"));
    let mut staff = Condition::new("staff", ConditionClassType::Identity);
    staff
        .identity
        .push(Identity::new("OAMIDSTORE", "group", "employees"));
    authz.conditions_list_mut().condition.extend([office, staff]);
    authz.rules_mut().rule.push(Rule::new(
        "allow-staff-in-office",
        RuleEffect::Allow,
        ConditionCombiner::of(CombinerMode::All, &["office", "staff"]),
    ));
    domain.authorization_policies_mut().push(authz);
    domain
}

#[test]
fn policy_request_writes_nested_policies_in_order() {
    let request = PolicyRequest::new(
        "policycreate",
        "http://oam.example.com:7001",
        "weblogic",
        "welcome1",
        "webgate01",
        shop_domain(),
    );
    let xml = to_xml_checked(&request).expect("xml");
    assert!(xml.starts_with("<PolicyRegRequest><serverAddress>"));

    let order = [
        "<hostIdentifier>webgate01</hostIdentifier>",
        "<rregApplicationDomain><name>Shop</name><description>storefront</description>",
        "<uriList><uriResource><uri>/shop/**</uri></uriResource></uriList>",
        "<rregAuthenticationPolicies><rregAuthenticationPolicy><name>Protected</name>",
        "<authenticationSchemeName>LDAPScheme</authenticationSchemeName>",
        "<rregAuthorizationPolicies><rregAuthorizationPolicy><name>Employees</name>",
        "<queryString>mode=edit</queryString>",
        "<successResponse><name>OAM_USER</name><type>HEADER</type>",
        "<conditionClassType>IP4_RANGE</conditionClassType>",
        "<ip4Range><fromIp>10.0.0.1</fromIp><toIp>10.0.0.254</toIp></ip4Range>",
        "<identity><storeName>OAMIDSTORE</storeName>",
        "<rules><rule><name>allow-staff-in-office</name><effect>ALLOW</effect>",
        "<combinerMode>ALL</combinerMode><conditionNameList><conditionName>office</conditionName><conditionName>staff</conditionName>",
    ];
    let mut last = 0;
    for fragment in order {
        let at = xml[last..]
            .find(fragment)
            .unwrap_or_else(|| panic!("{fragment} missing or out of order in {xml}"));
        last += at + fragment.len();
    }
}

#[test]
fn policy_request_round_trips() {
    let request = PolicyRequest::new(
        "policycreate",
        "http://oam.example.com:7001",
        "weblogic",
        "welcome1",
        "webgate01",
        shop_domain(),
    );
    let xml = to_xml(&request).expect("xml");
    let mut read: PolicyRequest = from_xml(&xml).expect("read back");
    read.envelope = request.envelope.clone();
    assert_eq!(read, request);
}

#[test]
fn policy_request_requires_domain() {
    let mut request = PolicyRequest::new(
        "policycreate",
        "http://oam.example.com:7001",
        "weblogic",
        "welcome1",
        "webgate01",
        RregApplicationDomain::default(),
    );
    let err = to_xml_checked(&request).unwrap_err();
    assert!(matches!(
        err,
        Error::RequiredElement { parent: "rregApplicationDomain", element: "name" }
    ));

    request.rreg_application_domain = None;
    let err = to_xml_checked(&request).unwrap_err();
    assert!(matches!(
        err,
        Error::RequiredElement { parent: "PolicyRegRequest", element: "rregApplicationDomain" }
    ));
}

#[test]
fn standalone_policy_document() {
    let mut policy = RregPolicy {
        host_identifier: Some("webgate01".to_string()),
        application_domain_name: Some("Shop".to_string()),
        ..Default::default()
    };
    policy
        .authz_policies_mut()
        .push(RregAuthorizationPolicy::new("Anyone"));
    let xml = to_xml_checked(&policy).expect("xml");
    assert_eq!(
        xml,
        "<RREGPolicy><hostIdentifier>webgate01</hostIdentifier>\
         <applicationDomainName>Shop</applicationDomainName>\
         <authzPolicyList><authzPolicy><name>Anyone</name></authzPolicy></authzPolicyList>\
         </RREGPolicy>"
    );
}

#[test]
fn opensso_response_exposes_properties() {
    let xml = r#"<OpenSSORegResponse>
        <agentName>sso01</agentName>
        <agentBaseUrl>http://sso.example.com</agentBaseUrl>
        <responseProperties>
            <property><name>com.sun.identity.agents.config.login.url</name>
                <listValue><value>http://a/login</value><value>http://b/login</value></listValue>
            </property>
            <property><name>com.sun.identity.agents.config.debug.level</name><value>Error</value></property>
        </responseProperties>
    </OpenSSORegResponse>"#;
    let mut response: OpenSSOResponse = from_xml(xml).expect("response");
    let properties = response.response_properties_mut();
    let login = properties
        .find("com.sun.identity.agents.config.login.url")
        .expect("login property");
    assert_eq!(
        login.list_value.as_ref().map(|list| list.value.len()),
        Some(2)
    );
    let level = properties
        .find("com.sun.identity.agents.config.debug.level")
        .expect("debug property");
    assert_eq!(level.value.as_deref(), Some("Error"));
}
