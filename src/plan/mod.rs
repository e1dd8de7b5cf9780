//! Query plan types (noun module)
//!
//! A statement as declarations, a chain of CTEs and a final select, ready
//! to be emitted as SQL text.

mod expr;
mod node;

pub use expr::{SelectItem, SortKey};
pub use node::{Cte, Declaration, Join, JoinType, QueryPlan, Relation, Select};
