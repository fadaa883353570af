//! Источники шаблонов: файл на диске или строка в памяти.

use crate::{
    error::{ProposalError, Result},
    traits::TemplateSource,
};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct FileTemplate {
    path: PathBuf,
}

impl FileTemplate {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TemplateSource for FileTemplate {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&self) -> Result<String> {
        let unavailable = |reason: String| ProposalError::TemplateUnavailable {
            source_name: self.describe(),
            reason,
        };
        if self.path.as_os_str().is_empty() {
            return Err(unavailable("empty path".into()));
        }
        let text = std::fs::read_to_string(&self.path).map_err(|e| unavailable(e.to_string()))?;
        tracing::debug!(path = %self.path.display(), bytes = text.len(), "template loaded");
        Ok(text)
    }
}

/// Шаблон, уже полученный вызывающей стороной.
#[derive(Debug, Clone)]
pub struct InlineTemplate(pub String);

impl TemplateSource for InlineTemplate {
    fn describe(&self) -> String {
        "inline template".into()
    }

    fn load(&self) -> Result<String> {
        Ok(self.0.clone())
    }
}
