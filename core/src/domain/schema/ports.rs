use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    schema::entities::{PromptTemplate, SchemaDocument},
};

/// Read-only access to named schema documents and base prompt templates.
#[cfg_attr(test, mockall::automock)]
pub trait SchemaStore: Send + Sync {
    /// Fails with `SchemaNotFound` when nothing backs `name`, `StorageError` on read errors.
    fn load_schema(
        &self,
        name: &str,
    ) -> impl Future<Output = Result<SchemaDocument, CoreError>> + Send;

    fn load_prompt_template(
        &self,
        name: &str,
    ) -> impl Future<Output = Result<PromptTemplate, CoreError>> + Send;
}
