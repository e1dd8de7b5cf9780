//! SQL emitter
//!
//! Transforms a QueryPlan into a pretty-printed SQL Server statement.
//! Output is a pure function of the plan: identical plans emit identical
//! text.

use crate::plan::{Cte, Declaration, Join, JoinType, QueryPlan, Relation, Select, SelectItem, SortKey};

/// Emit the full statement, terminated with `;`.
pub fn emit_sql(plan: &QueryPlan) -> String {
    let mut sections = Vec::new();

    if !plan.declarations.is_empty() {
        let decls: Vec<String> = plan.declarations.iter().map(emit_declaration).collect();
        sections.push(decls.join("\n"));
    }

    if !plan.ctes.is_empty() {
        let ctes: Vec<String> = plan.ctes.iter().map(emit_cte).collect();
        sections.push(format!("WITH {}", ctes.join(",\n")));
    }

    sections.push(format!("{};", emit_select(&plan.body, 0)));
    sections.join("\n\n")
}

fn pad(indent: usize) -> String {
    "  ".repeat(indent)
}

// ---------------------------------------------------------------------------
// Statement parts
// ---------------------------------------------------------------------------

fn emit_declaration(decl: &Declaration) -> String {
    format!("DECLARE {} {} = {};", decl.variable(), decl.sql_type, decl.value)
}

fn emit_cte(cte: &Cte) -> String {
    format!("{} AS (\n{}\n)", cte.name, emit_select(&cte.select, 1))
}

fn emit_select(select: &Select, indent: usize) -> String {
    let p = pad(indent);
    let items: Vec<String> = select
        .items
        .iter()
        .map(|item| format!("{p}  {}", emit_item(item)))
        .collect();

    let mut lines = vec![
        format!("{p}SELECT\n{}", items.join(",\n")),
        format!("{p}FROM {}", emit_relation(&select.from)),
    ];

    lines.extend(select.joins.iter().map(|join| format!("{p}{}", emit_join(join))));

    if !select.filter.is_empty() {
        lines.push(format!("{p}WHERE {}", select.filter.join(&format!("\n{p}  AND "))));
    }
    if !select.group_by.is_empty() {
        lines.push(format!("{p}GROUP BY {}", select.group_by.join(", ")));
    }
    if let Some(having) = &select.having {
        lines.push(format!("{p}HAVING {}", having));
    }
    if !select.order_by.is_empty() {
        let keys: Vec<String> = select.order_by.iter().map(emit_sort_key).collect();
        lines.push(format!("{p}ORDER BY {}", keys.join(", ")));
    }

    lines.join("\n")
}

// ---------------------------------------------------------------------------
// Clause fragments
// ---------------------------------------------------------------------------

fn emit_item(item: &SelectItem) -> String {
    match &item.alias {
        Some(alias) => format!("{} AS {}", item.expr, alias),
        None => item.expr.clone(),
    }
}

fn emit_relation(relation: &Relation) -> String {
    match &relation.alias {
        Some(alias) => format!("{} {}", relation.name, alias),
        None => relation.name.clone(),
    }
}

fn emit_join(join: &Join) -> String {
    let keyword = match join.join_type {
        JoinType::Inner => "JOIN",
        JoinType::Left => "LEFT JOIN",
    };
    format!("{} {} ON {}", keyword, emit_relation(&join.relation), join.on)
}

fn emit_sort_key(key: &SortKey) -> String {
    format!("{} {}", key.column, key.direction.as_sql())
}
