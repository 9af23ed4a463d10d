pub mod common;
pub mod generation;
pub mod nutrition;
pub mod plan;
pub mod schema;
