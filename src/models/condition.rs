use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, IntoStaticStr};

use super::attach_once;
use super::literal::literal_text;
use super::rule::CombinerMode;
use crate::error::Error;

/// Kind of test an authorization condition performs.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, Display, IntoStaticStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ConditionClassType {
    Identity,
    #[serde(rename = "IP4_RANGE")]
    #[strum(serialize = "IP4_RANGE")]
    Ip4Range,
    Temporal,
    Attribute,
    True,
    False,
}

literal_text!(ConditionClassType, "condition class type");

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_name: Option<String>,
}

impl Identity {
    pub const LOCAL: &'static str = "identity";

    pub fn new(
        store_name: impl Into<String>,
        entity_type: impl Into<String>,
        entity_name: impl Into<String>,
    ) -> Self {
        Self {
            store_name: Some(store_name.into()),
            entity_type: Some(entity_type.into()),
            entity_name: Some(entity_name.into()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ip4Range {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_ip: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_ip: Option<String>,
}

impl Ip4Range {
    pub const LOCAL: &'static str = "ip4Range";

    pub fn new(from_ip: impl Into<String>, to_ip: impl Into<String>) -> Self {
        Self {
            from_ip: Some(from_ip.into()),
            to_ip: Some(to_ip.into()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ip4RangeList {
    #[serde(default)]
    pub ip4_range: Vec<Ip4Range>,
}

impl Ip4RangeList {
    pub const LOCAL: &'static str = "ip4RangeList";
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayOfWeek {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monday: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tuesday: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wednesday: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thursday: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub friday: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saturday: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sunday: Option<String>,
}

impl DayOfWeek {
    pub const LOCAL: &'static str = "dayOfWeek";
}

/// Time window of a temporal condition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Temporal {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days_to_string: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day_of_week: Option<DayOfWeek>,
}

impl Temporal {
    pub const LOCAL: &'static str = "temporal";

    pub fn set_day_of_week(&mut self, value: DayOfWeek) -> Result<(), Error> {
        attach_once(&mut self.day_of_week, value, DayOfWeek::LOCAL)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeCondition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attribute_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operator: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl AttributeCondition {
    pub const LOCAL: &'static str = "attributeCondition";
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Condition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition_class_type: Option<ConditionClassType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition_combiner: Option<CombinerMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip4_range_list: Option<Ip4RangeList>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temporal: Option<Temporal>,
    #[serde(default)]
    pub identity: Vec<Identity>,
    #[serde(default)]
    pub attribute_condition: Vec<AttributeCondition>,
}

impl Condition {
    pub const LOCAL: &'static str = "condition";

    pub fn new(name: impl Into<String>, class_type: ConditionClassType) -> Self {
        Self {
            name: Some(name.into()),
            condition_class_type: Some(class_type),
            ..Self::default()
        }
    }

    pub fn ip4_range_list_mut(&mut self) -> &mut Ip4RangeList {
        self.ip4_range_list.get_or_insert_with(Ip4RangeList::default)
    }

    pub fn set_ip4_range_list(&mut self, value: Ip4RangeList) -> Result<(), Error> {
        attach_once(&mut self.ip4_range_list, value, Ip4RangeList::LOCAL)
    }

    pub fn set_temporal(&mut self, value: Temporal) -> Result<(), Error> {
        attach_once(&mut self.temporal, value, Temporal::LOCAL)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConditionsList {
    #[serde(default)]
    pub condition: Vec<Condition>,
}

impl ConditionsList {
    pub const LOCAL: &'static str = "conditionsList";

    /// Looks a condition up by name.
    pub fn find(&self, name: &str) -> Option<&Condition> {
        self.condition
            .iter()
            .find(|condition| condition.name.as_deref() == Some(name))
    }
}
