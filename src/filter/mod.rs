//! Condition rendering (verb module)
//!
//! Rule → SQL fragment (`translate`), tree → boolean expression for one
//! stage (`render_group`), tree → one expression per stage (`StageFilters`).

mod evaluate;
mod stage;
mod translate;

pub use evaluate::render_group;
pub use stage::StageFilters;
pub use translate::{literal, quote, translate, try_translate, TAUTOLOGY};
