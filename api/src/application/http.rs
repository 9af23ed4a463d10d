pub mod health;
pub mod nutrition;
pub mod plan;
pub mod server;
