//! Operator translation: one rule to one SQL boolean fragment

use crate::catalog::FieldType;
use crate::error::MalformedPredicate;
use crate::query::{Operator, PredicateValue, Rule, Scalar};

/// Canonical always-true fragment
pub const TAUTOLOGY: &str = "1=1";

/// Render `rule` against `reference`, the expression that names the field
/// in the current stage.
///
/// Total: an unknown operator or a value that does not fit the operator
/// renders as `TAUTOLOGY`.
pub fn translate(rule: &Rule, reference: &str, field_type: FieldType) -> String {
    try_translate(rule, reference, field_type).unwrap_or_else(|_| TAUTOLOGY.to_string())
}

/// Like `translate`, but reports why a rule could not be rendered
pub fn try_translate(rule: &Rule, reference: &str, field_type: FieldType) -> Result<String, MalformedPredicate> {
    let operator: Operator = rule.operator.parse()?;
    if !operator.is_offered_for(field_type) {
        tracing::warn!(
            field = %rule.field,
            %operator,
            %field_type,
            "operator is not offered for this field type, rendering anyway"
        );
    }
    let value = PredicateValue::resolve(operator, &rule.value)?;
    Ok(render(operator, &value, reference, field_type))
}

fn render(operator: Operator, value: &PredicateValue, f: &str, field_type: FieldType) -> String {
    use Operator::*;

    match (operator, value) {
        (Contains, PredicateValue::Scalar(v)) => format!("{} LIKE {}", f, quote(&format!("%{}%", v))),
        (DoesNotContain, PredicateValue::Scalar(v)) => format!("{} NOT LIKE {}", f, quote(&format!("%{}%", v))),
        (BeginsWith, PredicateValue::Scalar(v)) => format!("{} LIKE {}", f, quote(&format!("{}%", v))),
        // no leading wildcard: an exact match, kept as the builder has always sent it
        (EndsWith, PredicateValue::Scalar(v)) => format!("{} LIKE {}", f, quote(&v.to_string())),

        (Equals | NotEquals | LessThan | LessOrEqual | GreaterThan | GreaterOrEqual, PredicateValue::Scalar(v)) => {
            format!("{} {} {}", f, operator.name(), literal(v, field_type))
        }

        (Between, PredicateValue::Range(low, high)) => format!(
            "{} BETWEEN {} AND {}",
            f,
            literal(low, field_type),
            literal(high, field_type)
        ),
        (NotBetween, PredicateValue::Range(low, high)) => format!(
            "{} NOT BETWEEN {} AND {}",
            f,
            literal(low, field_type),
            literal(high, field_type)
        ),

        (In, PredicateValue::List(items)) => format!("{} IN ({})", f, literal_list(items, field_type)),
        (NotIn, PredicateValue::List(items)) => format!("{} NOT IN ({})", f, literal_list(items, field_type)),

        (IsNull, _) => format!("{} IS NULL", f),
        (IsNotNull, _) => format!("{} IS NOT NULL", f),

        _ => TAUTOLOGY.to_string(),
    }
}

/// Single-quote a string, doubling embedded quotes
pub fn quote(s: &str) -> String {
    format!("'{}'", s.replace('\'', "''"))
}

/// Render a value for a field of `field_type`.
///
/// Numeric fields get the bare number when the value parses as one and a
/// quoted string otherwise; text and date fields are always quoted.
pub fn literal(value: &Scalar, field_type: FieldType) -> String {
    match (field_type, value.as_number()) {
        (FieldType::Number, Some(n)) => n.to_string(),
        _ => quote(&value.to_string()),
    }
}

fn literal_list(items: &[Scalar], field_type: FieldType) -> String {
    items
        .iter()
        .map(|item| literal(item, field_type))
        .collect::<Vec<_>>()
        .join(", ")
}
