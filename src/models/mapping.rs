use serde::{Deserialize, Serialize};

/// One `name -> value` pair of an OpenSSO attribute mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeMapping {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl AttributeMapping {
    pub const LOCAL: &'static str = "attributeMapping";

    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            value: Some(value.into()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileAttributeMapping {
    #[serde(default)]
    pub attribute_mapping: Vec<AttributeMapping>,
}

impl ProfileAttributeMapping {
    pub const LOCAL: &'static str = "profileAttributeMapping";
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionAttributeMapping {
    #[serde(default)]
    pub attribute_mapping: Vec<AttributeMapping>,
}

impl SessionAttributeMapping {
    pub const LOCAL: &'static str = "sessionAttributeMapping";
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseAttributeMapping {
    #[serde(default)]
    pub attribute_mapping: Vec<AttributeMapping>,
}

impl ResponseAttributeMapping {
    pub const LOCAL: &'static str = "responseAttributeMapping";
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListValue {
    #[serde(default)]
    pub value: Vec<String>,
}

impl ListValue {
    pub const LOCAL: &'static str = "listValue";

    pub fn new(value: Vec<String>) -> Self {
        Self { value }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttrMappingValue {
    #[serde(default)]
    pub mapping: Vec<AttributeMapping>,
}

impl AttrMappingValue {
    pub const LOCAL: &'static str = "attrMappingValue";

    pub fn new(mapping: Vec<AttributeMapping>) -> Self {
        Self { mapping }
    }
}

/// Agent property reported back by the server. Exactly one of the value
/// forms is expected to be present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list_value: Option<ListValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attr_mapping_value: Option<AttrMappingValue>,
}

impl Property {
    pub const LOCAL: &'static str = "property";

    pub fn list_value_mut(&mut self) -> &mut ListValue {
        self.list_value.get_or_insert_with(ListValue::default)
    }

    pub fn attr_mapping_value_mut(&mut self) -> &mut AttrMappingValue {
        self.attr_mapping_value
            .get_or_insert_with(AttrMappingValue::default)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseProperties {
    #[serde(default)]
    pub property: Vec<Property>,
}

impl ResponseProperties {
    pub const LOCAL: &'static str = "responseProperties";

    pub fn find(&self, name: &str) -> Option<&Property> {
        self.property
            .iter()
            .find(|property| property.name.as_deref() == Some(name))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MiscellaneousProperty {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl MiscellaneousProperty {
    pub const LOCAL: &'static str = "miscellaneousProperty";

    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            value: Some(value.into()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MiscellaneousProperties {
    #[serde(default)]
    pub miscellaneous_property: Vec<MiscellaneousProperty>,
}

impl MiscellaneousProperties {
    pub const LOCAL: &'static str = "miscellaneousProperties";
}
