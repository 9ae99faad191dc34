//! Query plan definitions: the filter tree and the parsed select statement.

mod filter;
mod statement;

pub use filter::FilterNode;
pub use statement::SelectStatement;
