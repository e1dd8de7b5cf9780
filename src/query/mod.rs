//! Compiler inputs (noun module)
//!
//! The condition tree and chart configuration shapes sent by the query
//! builder and chart panels.

mod chart;
mod operator;
mod predicate;
mod request;
mod value;

pub use chart::{ChartConfig, SortDirection, COUNT_SENTINEL};
pub use operator::{Arity, Operator};
pub use predicate::{Combinator, Rule, RuleGroup, RuleNode};
pub use request::CompileRequest;
pub use value::{PredicateValue, Scalar};
