//! Condition tree as produced by the query builder panel

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// How the children of a group are joined
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Combinator {
    #[default]
    And,
    Or,
}

impl Combinator {
    pub fn as_sql(&self) -> &'static str {
        match self {
            Combinator::And => "AND",
            Combinator::Or => "OR",
        }
    }
}

// Anything other than "or" (in any case) combines with AND
impl<'de> Deserialize<'de> for Combinator {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = Option::<String>::deserialize(deserializer)?;
        match s {
            Some(s) if s.eq_ignore_ascii_case("or") => Ok(Combinator::Or),
            _ => Ok(Combinator::And),
        }
    }
}

impl Serialize for Combinator {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(match self {
            Combinator::And => "and",
            Combinator::Or => "or",
        })
    }
}

/// A single `field operator value` condition.
///
/// `operator` and `value` stay as sent; they are interpreted during
/// translation so a bad rule degrades on its own instead of failing the
/// whole request at parse time.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Rule {
    pub field: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub operator: String,
    #[serde(default)]
    pub value: Value,
}

// Missing or null operators become "" and are rejected at translation
fn nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl Rule {
    pub fn new(field: impl Into<String>, operator: impl Into<String>, value: Value) -> Self {
        Self {
            field: field.into(),
            operator: operator.into(),
            value,
        }
    }
}

/// A child of a group: either a rule or a nested group
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RuleNode {
    Rule(Rule),
    Group(RuleGroup),
}

// An object carrying `rules` is a group; anything else must be a rule
impl<'de> Deserialize<'de> for RuleNode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        let node = if value.get("rules").is_some() {
            RuleGroup::deserialize(value).map(RuleNode::Group)
        } else {
            Rule::deserialize(value).map(RuleNode::Rule)
        };
        node.map_err(serde::de::Error::custom)
    }
}

impl From<Rule> for RuleNode {
    fn from(rule: Rule) -> Self {
        RuleNode::Rule(rule)
    }
}

impl From<RuleGroup> for RuleNode {
    fn from(group: RuleGroup) -> Self {
        RuleNode::Group(group)
    }
}

/// AND/OR group with optional negation.
///
/// The default group is empty, which compiles to "no filters".
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct RuleGroup {
    #[serde(default)]
    pub combinator: Combinator,
    #[serde(default, rename = "not")]
    pub negated: bool,
    #[serde(default)]
    pub rules: Vec<RuleNode>,
}

impl RuleGroup {
    pub fn and(rules: Vec<RuleNode>) -> Self {
        Self {
            combinator: Combinator::And,
            negated: false,
            rules,
        }
    }

    pub fn or(rules: Vec<RuleNode>) -> Self {
        Self {
            combinator: Combinator::Or,
            negated: false,
            rules,
        }
    }

    pub fn negate(mut self) -> Self {
        self.negated = !self.negated;
        self
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Every rule in the tree, depth first
    pub fn leaves(&self) -> Vec<&Rule> {
        let mut out = Vec::new();
        collect_leaves(self, &mut out);
        out
    }
}

fn collect_leaves<'a>(group: &'a RuleGroup, out: &mut Vec<&'a Rule>) {
    for node in &group.rules {
        match node {
            RuleNode::Rule(rule) => out.push(rule),
            RuleNode::Group(sub) => collect_leaves(sub, out),
        }
    }
}
