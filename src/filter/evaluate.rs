//! Predicate tree evaluation for one pipeline stage

use crate::catalog::{Catalog, Field, Stage};
use crate::error::CompileError;
use crate::query::{Rule, RuleGroup, RuleNode};
use super::translate::{try_translate, TAUTOLOGY};

/// Fold `group` into a single boolean expression over the rules whose field
/// belongs to `stage`.
///
/// Rules for other stages are left out entirely, as are children that come
/// out as the tautology. A group with nothing left renders as `TAUTOLOGY`
/// (negated or not). Rules naming a field outside the catalog fail the whole
/// call, whichever stage is being rendered.
pub fn render_group(group: &RuleGroup, stage: Stage, catalog: &Catalog) -> Result<String, CompileError> {
    let mut parts: Vec<String> = Vec::new();

    for node in &group.rules {
        match node {
            RuleNode::Group(sub) => {
                let clause = render_group(sub, stage, catalog)?;
                if clause != TAUTOLOGY {
                    parts.push(format!("({})", clause));
                }
            }
            RuleNode::Rule(rule) => {
                let field = catalog.lookup(&rule.field)?;
                if field.stage != stage {
                    continue;
                }
                let fragment = render_rule(rule, field);
                if fragment != TAUTOLOGY {
                    parts.push(fragment);
                }
            }
        }
    }

    if parts.is_empty() {
        return Ok(TAUTOLOGY.to_string());
    }

    let clause = parts.join(&format!(" {} ", group.combinator.as_sql()));
    if group.negated {
        Ok(format!("NOT ({})", clause))
    } else {
        Ok(clause)
    }
}

fn render_rule(rule: &Rule, field: &Field) -> String {
    match try_translate(rule, &field.reference(), field.field_type) {
        Ok(sql) => sql,
        Err(reason) => {
            tracing::warn!(
                field = field.name,
                operator = %rule.operator,
                %reason,
                "dropping malformed rule"
            );
            TAUTOLOGY.to_string()
        }
    }
}
