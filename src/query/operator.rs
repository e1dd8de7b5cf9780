//! Rule operators as sent by the condition builder

use std::fmt;
use std::str::FromStr;

use crate::catalog::FieldType;
use crate::error::MalformedPredicate;

/// Comparison applied by a single rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Equals,
    NotEquals,
    LessThan,
    LessOrEqual,
    GreaterThan,
    GreaterOrEqual,
    Contains,
    DoesNotContain,
    BeginsWith,
    EndsWith,
    Between,
    NotBetween,
    In,
    NotIn,
    IsNull,
    IsNotNull,
}

/// Value shape an operator expects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    None,
    Scalar,
    Range,
    List,
}

const TEXT_OPERATORS: &[Operator] = &[
    Operator::Contains,
    Operator::DoesNotContain,
    Operator::BeginsWith,
    Operator::EndsWith,
    Operator::Equals,
    Operator::NotEquals,
    Operator::In,
    Operator::NotIn,
    Operator::IsNull,
    Operator::IsNotNull,
];

const NUMBER_OPERATORS: &[Operator] = &[
    Operator::Equals,
    Operator::NotEquals,
    Operator::GreaterThan,
    Operator::GreaterOrEqual,
    Operator::LessThan,
    Operator::LessOrEqual,
    Operator::Between,
    Operator::NotBetween,
    Operator::In,
    Operator::NotIn,
    Operator::IsNull,
    Operator::IsNotNull,
];

const DATE_OPERATORS: &[Operator] = &[
    Operator::Equals,
    Operator::NotEquals,
    Operator::GreaterThan,
    Operator::LessThan,
    Operator::Between,
    Operator::IsNull,
    Operator::IsNotNull,
];

impl Operator {
    /// Wire name used by the condition builder
    pub fn name(&self) -> &'static str {
        match self {
            Operator::Equals => "=",
            Operator::NotEquals => "!=",
            Operator::LessThan => "<",
            Operator::LessOrEqual => "<=",
            Operator::GreaterThan => ">",
            Operator::GreaterOrEqual => ">=",
            Operator::Contains => "contains",
            Operator::DoesNotContain => "doesNotContain",
            Operator::BeginsWith => "beginsWith",
            Operator::EndsWith => "endsWith",
            Operator::Between => "between",
            Operator::NotBetween => "notBetween",
            Operator::In => "in",
            Operator::NotIn => "notIn",
            Operator::IsNull => "isNull",
            Operator::IsNotNull => "isNotNull",
        }
    }

    pub fn arity(&self) -> Arity {
        match self {
            Operator::IsNull | Operator::IsNotNull => Arity::None,
            Operator::Between | Operator::NotBetween => Arity::Range,
            Operator::In | Operator::NotIn => Arity::List,
            _ => Arity::Scalar,
        }
    }

    /// Operators the condition builder offers for a field of this type
    pub fn offered_for(field_type: FieldType) -> &'static [Operator] {
        match field_type {
            FieldType::Text => TEXT_OPERATORS,
            FieldType::Number => NUMBER_OPERATORS,
            FieldType::Date => DATE_OPERATORS,
        }
    }

    pub fn is_offered_for(&self, field_type: FieldType) -> bool {
        Self::offered_for(field_type).contains(self)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operator {
    type Err = MalformedPredicate;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "=" => Ok(Operator::Equals),
            "!=" => Ok(Operator::NotEquals),
            "<" => Ok(Operator::LessThan),
            "<=" => Ok(Operator::LessOrEqual),
            ">" => Ok(Operator::GreaterThan),
            ">=" => Ok(Operator::GreaterOrEqual),
            "contains" => Ok(Operator::Contains),
            "doesNotContain" => Ok(Operator::DoesNotContain),
            "beginsWith" => Ok(Operator::BeginsWith),
            "endsWith" => Ok(Operator::EndsWith),
            "between" => Ok(Operator::Between),
            "notBetween" => Ok(Operator::NotBetween),
            "in" => Ok(Operator::In),
            "notIn" => Ok(Operator::NotIn),
            "isNull" => Ok(Operator::IsNull),
            "isNotNull" => Ok(Operator::IsNotNull),
            other => Err(MalformedPredicate::UnknownOperator(other.to_string())),
        }
    }
}
