//! Statically initialized lookup tables.
//!
//! The attack tables, line tables and Zobrist keys are computed once, on
//! the first `Board` construction, and never mutated afterwards. Access
//! goes through [`prelude`], whose `init_statics()` guards initialization
//! behind a `Once`.
//!
//! [`prelude`]: prelude/index.html

mod boards;
mod magic;
pub mod prelude;
pub mod zobrist;
