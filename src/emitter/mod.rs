//! SQL emitter (verb module)
//!
//! Transforms a QueryPlan into the final SQL statement text.

mod sql;

pub use sql::emit_sql;
