pub mod fatsecret_client;

pub use fatsecret_client::FatSecretClient;
