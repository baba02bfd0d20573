use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, IntoStaticStr};

use super::attach_once;
use super::condition::ConditionsList;
use super::literal::literal_text;
use crate::error::Error;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, Display, IntoStaticStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum RuleEffect {
    Allow,
    Deny,
}

literal_text!(RuleEffect, "rule effect");

/// How the named conditions of a rule are combined.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, Display, IntoStaticStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum CombinerMode {
    All,
    Any,
}

literal_text!(CombinerMode, "combiner mode");

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConditionNameList {
    #[serde(default)]
    pub condition_name: Vec<String>,
}

impl ConditionNameList {
    pub const LOCAL: &'static str = "conditionNameList";
}

/// Combines named conditions either by mode (all/any of the listed names) or
/// by a free-form expression over condition names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConditionCombiner {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub combiner_mode: Option<CombinerMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition_name_list: Option<ConditionNameList>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expression: Option<String>,
}

impl ConditionCombiner {
    pub const LOCAL: &'static str = "conditionCombiner";

    pub fn of(mode: CombinerMode, names: &[&str]) -> Self {
        Self {
            combiner_mode: Some(mode),
            condition_name_list: Some(ConditionNameList {
                condition_name: names.iter().map(|name| name.to_string()).collect(),
            }),
            expression: None,
        }
    }

    pub fn condition_name_list_mut(&mut self) -> &mut ConditionNameList {
        self.condition_name_list
            .get_or_insert_with(ConditionNameList::default)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.condition_name_list
            .iter()
            .flat_map(|list| list.condition_name.iter().map(String::as_str))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rule {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effect: Option<RuleEffect>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition_combiner: Option<ConditionCombiner>,
}

impl Rule {
    pub const LOCAL: &'static str = "rule";

    pub fn new(name: impl Into<String>, effect: RuleEffect, combiner: ConditionCombiner) -> Self {
        Self {
            name: Some(name.into()),
            description: None,
            effect: Some(effect),
            condition_combiner: Some(combiner),
        }
    }

    pub fn set_condition_combiner(&mut self, value: ConditionCombiner) -> Result<(), Error> {
        attach_once(&mut self.condition_combiner, value, ConditionCombiner::LOCAL)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rules {
    #[serde(default)]
    pub rule: Vec<Rule>,
}

impl Rules {
    pub const LOCAL: &'static str = "rules";

    /// Condition names referenced by a rule but not declared in `conditions`,
    /// in first-reference order.
    pub fn unresolved_conditions(&self, conditions: &ConditionsList) -> Vec<String> {
        let mut missing: Vec<String> = Vec::new();
        for rule in &self.rule {
            let Some(combiner) = &rule.condition_combiner else {
                continue;
            };
            for name in combiner.names() {
                if conditions.find(name).is_none() && !missing.iter().any(|m| m == name) {
                    missing.push(name.to_string());
                }
            }
        }
        missing
    }
}
