//! Query executor module.
//!
//! Evaluates filter trees into sorted row-index lists and projects the result table.

mod filter;
mod project;
mod runner;
mod set_ops;

pub use filter::{evaluate, FilterExecutor};
pub use project::ProjectExecutor;
pub use runner::{execute_statement, DataSource, InMemoryDataSource, QueryRunner};
pub use set_ops::{intersect_sorted, union_sorted};
