pub mod fs_schema_store;

pub use fs_schema_store::FsSchemaStore;
