pub mod llm;
pub mod nutrition;
pub mod schema;
pub mod validation;
