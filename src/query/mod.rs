pub mod executor;
pub mod intersect;
pub mod parser;

pub use executor::QueryExecutor;
pub use intersect::intersect;
pub use parser::{Query, parse_query};
