//! Typed rule values
//!
//! The condition builder sends one loosely typed `value` per rule: a number,
//! a string, a two-element array for ranges, an array or comma-separated
//! string for lists, or nothing at all. It is resolved into a
//! `PredicateValue` against the rule's operator right before translation.

use std::fmt;
use serde_json::Value;

use crate::error::MalformedPredicate;
use super::operator::{Arity, Operator};

/// One scalar value of a rule
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Number(f64),
    Text(String),
    Bool(bool),
}

impl Scalar {
    /// Convert a JSON scalar; arrays, objects and null are not scalars
    pub fn from_json(value: &Value) -> Option<Scalar> {
        match value {
            Value::Number(n) => n.as_f64().map(Scalar::Number),
            Value::String(s) => Some(Scalar::Text(s.clone())),
            Value::Bool(b) => Some(Scalar::Bool(*b)),
            Value::Null | Value::Array(_) | Value::Object(_) => None,
        }
    }

    /// Numeric reading of the value, if it has one
    pub fn as_number(&self) -> Option<f64> {
        let n = match self {
            Scalar::Number(n) => *n,
            Scalar::Text(s) => s.trim().parse::<f64>().ok()?,
            Scalar::Bool(_) => return None,
        };
        n.is_finite().then_some(n)
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Number(n) => write!(f, "{}", n),
            Scalar::Text(s) => f.write_str(s),
            Scalar::Bool(b) => write!(f, "{}", b),
        }
    }
}

/// A rule value shaped for its operator
#[derive(Debug, Clone, PartialEq)]
pub enum PredicateValue {
    Empty,
    Scalar(Scalar),
    Range(Scalar, Scalar),
    List(Vec<Scalar>),
}

impl PredicateValue {
    /// Shape a raw rule value for `operator`.
    ///
    /// Null-check operators ignore whatever value was sent. Lists accept an
    /// array or a comma-separated string whose tokens are trimmed and whose
    /// empty tokens are dropped.
    pub fn resolve(operator: Operator, raw: &Value) -> Result<PredicateValue, MalformedPredicate> {
        let name = || operator.name().to_string();
        match operator.arity() {
            Arity::None => Ok(PredicateValue::Empty),
            Arity::Scalar => match raw {
                Value::Null => Err(MalformedPredicate::MissingValue(name())),
                other => Scalar::from_json(other)
                    .map(PredicateValue::Scalar)
                    .ok_or_else(|| MalformedPredicate::ExpectedScalar(name())),
            },
            Arity::Range => match raw {
                Value::Array(items) if items.len() == 2 => {
                    let low = Scalar::from_json(&items[0]);
                    let high = Scalar::from_json(&items[1]);
                    match (low, high) {
                        (Some(low), Some(high)) => Ok(PredicateValue::Range(low, high)),
                        _ => Err(MalformedPredicate::ExpectedRange(name())),
                    }
                }
                _ => Err(MalformedPredicate::ExpectedRange(name())),
            },
            Arity::List => {
                let items = match raw {
                    Value::Null => return Err(MalformedPredicate::MissingValue(name())),
                    Value::Array(items) => items
                        .iter()
                        .map(|v| Scalar::from_json(v).ok_or_else(|| MalformedPredicate::ExpectedScalar(name())))
                        .collect::<Result<Vec<_>, _>>()?,
                    Value::String(csv) => split_csv(csv),
                    other => Scalar::from_json(other)
                        .into_iter()
                        .collect(),
                };
                if items.is_empty() {
                    return Err(MalformedPredicate::EmptyList(name()));
                }
                Ok(PredicateValue::List(items))
            }
        }
    }
}

fn split_csv(csv: &str) -> Vec<Scalar> {
    csv.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| Scalar::Text(token.to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn text(s: &str) -> Scalar {
        Scalar::Text(s.to_string())
    }

    #[test]
    fn test_scalar_display() {
        assert_eq!(Scalar::Number(2008.0).to_string(), "2008");
        assert_eq!(Scalar::Number(0.5).to_string(), "0.5");
        assert_eq!(text("abc").to_string(), "abc");
        assert_eq!(Scalar::Bool(true).to_string(), "true");
    }

    #[test]
    fn test_scalar_as_number() {
        assert_eq!(text(" 12 ").as_number(), Some(12.0));
        assert_eq!(text("1e3").as_number(), Some(1000.0));
        assert_eq!(text("twelve").as_number(), None);
        assert_eq!(text("NaN").as_number(), None);
        assert_eq!(text("").as_number(), None);
        assert_eq!(Scalar::Bool(false).as_number(), None);
    }

    #[test]
    fn test_null_checks_ignore_value() {
        assert_eq!(
            PredicateValue::resolve(Operator::IsNull, &json!("stray")).unwrap(),
            PredicateValue::Empty
        );
        assert_eq!(
            PredicateValue::resolve(Operator::IsNotNull, &json!([1, 2])).unwrap(),
            PredicateValue::Empty
        );
    }

    #[test]
    fn test_scalar_shapes() {
        assert_eq!(
            PredicateValue::resolve(Operator::Equals, &json!(3)).unwrap(),
            PredicateValue::Scalar(Scalar::Number(3.0))
        );
        assert_eq!(
            PredicateValue::resolve(Operator::Contains, &Value::Null),
            Err(MalformedPredicate::MissingValue("contains".into()))
        );
        assert_eq!(
            PredicateValue::resolve(Operator::LessThan, &json!([1, 2])),
            Err(MalformedPredicate::ExpectedScalar("<".into()))
        );
    }

    #[test]
    fn test_range_shapes() {
        assert_eq!(
            PredicateValue::resolve(Operator::Between, &json!([2008, "2018"])).unwrap(),
            PredicateValue::Range(Scalar::Number(2008.0), text("2018"))
        );
        for bad in [json!([1]), json!([1, 2, 3]), json!("1,2"), json!([1, null])] {
            assert_eq!(
                PredicateValue::resolve(Operator::NotBetween, &bad),
                Err(MalformedPredicate::ExpectedRange("notBetween".into()))
            );
        }
    }

    #[test]
    fn test_list_from_csv() {
        assert_eq!(
            PredicateValue::resolve(Operator::In, &json!("a, b ,c")).unwrap(),
            PredicateValue::List(vec![text("a"), text("b"), text("c")])
        );
        assert_eq!(
            PredicateValue::resolve(Operator::In, &json!(" x,, ,y,")).unwrap(),
            PredicateValue::List(vec![text("x"), text("y")])
        );
    }

    #[test]
    fn test_list_from_array_and_scalar() {
        assert_eq!(
            PredicateValue::resolve(Operator::NotIn, &json!([1, "two"])).unwrap(),
            PredicateValue::List(vec![Scalar::Number(1.0), text("two")])
        );
        assert_eq!(
            PredicateValue::resolve(Operator::In, &json!(7)).unwrap(),
            PredicateValue::List(vec![Scalar::Number(7.0)])
        );
    }

    #[test]
    fn test_empty_lists_are_malformed() {
        for bad in [json!([]), json!(""), json!(" , ")] {
            assert_eq!(
                PredicateValue::resolve(Operator::In, &bad),
                Err(MalformedPredicate::EmptyList("in".into()))
            );
        }
        assert_eq!(
            PredicateValue::resolve(Operator::NotIn, &Value::Null),
            Err(MalformedPredicate::MissingValue("notIn".into()))
        );
    }
}
