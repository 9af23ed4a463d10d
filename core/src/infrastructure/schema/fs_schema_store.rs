use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, error, instrument};

use crate::domain::{
    common::{StorageConfig, entities::app_errors::CoreError},
    schema::{
        entities::{PromptTemplate, SchemaDocument, is_valid_document_name},
        ports::SchemaStore,
    },
};

/// Reads `{schemas_dir}/{name}Schema.json` and `{prompts_dir}/{name}_base_prompt.txt`.
#[derive(Debug, Clone)]
pub struct FsSchemaStore {
    schemas_dir: PathBuf,
    prompts_dir: PathBuf,
    cache: Option<Arc<DocumentCache>>,
}

#[derive(Debug, Default)]
struct DocumentCache {
    schemas: RwLock<HashMap<String, SchemaDocument>>,
    templates: RwLock<HashMap<String, PromptTemplate>>,
}

impl FsSchemaStore {
    pub fn new(config: &StorageConfig) -> Self {
        Self {
            schemas_dir: config.schemas_dir.clone(),
            prompts_dir: config.prompts_dir.clone(),
            cache: config
                .cache_documents
                .then(|| Arc::new(DocumentCache::default())),
        }
    }

    pub fn schema_path(&self, name: &str) -> PathBuf {
        self.schemas_dir.join(format!("{name}Schema.json"))
    }

    pub fn template_path(&self, name: &str) -> PathBuf {
        self.prompts_dir.join(format!("{name}_base_prompt.txt"))
    }
}

async fn read_document(name: &str, path: &Path) -> Result<String, CoreError> {
    if !is_valid_document_name(name) {
        return Err(CoreError::SchemaNotFound(name.to_string()));
    }

    tokio::fs::read_to_string(path).await.map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            CoreError::SchemaNotFound(name.to_string())
        } else {
            error!(path = %path.display(), "Failed to read document: {}", e);
            CoreError::StorageError(format!("{}: {}", path.display(), e))
        }
    })
}

impl SchemaStore for FsSchemaStore {
    #[instrument(skip(self))]
    async fn load_schema(&self, name: &str) -> Result<SchemaDocument, CoreError> {
        if let Some(cache) = &self.cache
            && let Some(document) = cache.schemas.read().await.get(name)
        {
            return Ok(document.clone());
        }

        let text = read_document(name, &self.schema_path(name)).await?;
        let document = SchemaDocument::parse(name, text)?;
        debug!("Loaded schema document");

        if let Some(cache) = &self.cache {
            cache
                .schemas
                .write()
                .await
                .insert(name.to_string(), document.clone());
        }

        Ok(document)
    }

    #[instrument(skip(self))]
    async fn load_prompt_template(&self, name: &str) -> Result<PromptTemplate, CoreError> {
        if let Some(cache) = &self.cache
            && let Some(template) = cache.templates.read().await.get(name)
        {
            return Ok(template.clone());
        }

        let text = read_document(name, &self.template_path(name)).await?;
        let template = PromptTemplate {
            name: name.to_string(),
            text,
        };

        if let Some(cache) = &self.cache {
            cache
                .templates
                .write()
                .await
                .insert(name.to_string(), template.clone());
        }

        Ok(template)
    }
}
