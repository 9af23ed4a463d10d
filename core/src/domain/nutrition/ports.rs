use std::future::Future;

use serde_json::Value;

use crate::domain::common::entities::app_errors::CoreError;

/// Upstream nutrition search API.
#[cfg_attr(test, mockall::automock)]
pub trait NutritionClient: Send + Sync {
    /// Returns the upstream JSON body verbatim.
    fn search_foods(&self, query: &str) -> impl Future<Output = Result<Value, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait NutritionService: Send + Sync {
    fn search_foods(&self, query: String) -> impl Future<Output = Result<Value, CoreError>> + Send;
}
