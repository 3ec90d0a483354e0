/*
 * store.rs
 * Copyright (c) 2025 Shutter Gallery contributors
 */

//! Template stores.
//!
//! A store maps a template name to its source text. [`ThemeStore`] reads
//! from `templates_root/theme/` on every load (no caching across requests);
//! [`MemoryStore`] serves templates from an in-memory map, for tests and
//! bundled templates.

use crate::error::{TemplateError, TemplateResult};
use crate::parser::Template;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Trait for loading template source by name.
pub trait TemplateStore {
    /// Load the source text of the named template.
    ///
    /// # Errors
    /// [`TemplateError::NotFound`] if there is no template under this name.
    fn load(&self, name: &str) -> TemplateResult<String>;

    /// Load and compile the named template.
    fn get(&self, name: &str) -> TemplateResult<Template> {
        let source = self.load(name)?;
        Template::compile(&source)
    }
}

/// Store that loads templates from a theme directory on disk.
///
/// The path for a name is `root/theme/name`; names without an extension get
/// the store's default extension (e.g. `"header"` becomes `header.html`),
/// names with an extension are used as-is.
#[derive(Debug, Clone)]
pub struct ThemeStore {
    root: PathBuf,
    theme: String,
    extension: String,
}

impl ThemeStore {
    /// Create a store for a theme, with the default `.html` extension.
    pub fn new(root: impl Into<PathBuf>, theme: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            theme: theme.into(),
            extension: "html".to_string(),
        }
    }

    /// Override the default extension for names without one.
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    /// The theme this store serves.
    pub fn theme(&self) -> &str {
        &self.theme
    }

    /// The path a template name resolves to.
    pub fn path_for(&self, name: &str) -> PathBuf {
        let path = self.root.join(&self.theme).join(name);
        if Path::new(name).extension().is_some() {
            path
        } else {
            path.with_extension(&self.extension)
        }
    }
}

impl TemplateStore for ThemeStore {
    fn load(&self, name: &str) -> TemplateResult<String> {
        let path = self.path_for(name);
        tracing::debug!(template = name, path = %path.display(), "Loading template");
        match std::fs::read_to_string(&path) {
            Ok(source) => Ok(source),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                Err(TemplateError::NotFound { path })
            }
            Err(err) => Err(TemplateError::Io(err)),
        }
    }
}

/// Store that serves templates from an in-memory map.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    templates: HashMap<String, String>,
}

impl MemoryStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a template under a name.
    pub fn add(&mut self, name: impl Into<String>, source: impl Into<String>) -> &mut Self {
        self.templates.insert(name.into(), source.into());
        self
    }

    /// Create a store with the given templates.
    pub fn with_templates(
        templates: impl IntoIterator<Item = (impl Into<String>, impl Into<String>)>,
    ) -> Self {
        let mut store = Self::new();
        for (name, source) in templates {
            store.add(name, source);
        }
        store
    }
}

impl TemplateStore for MemoryStore {
    fn load(&self, name: &str) -> TemplateResult<String> {
        self.templates
            .get(name)
            .cloned()
            .ok_or_else(|| TemplateError::NotFound {
                path: PathBuf::from(name),
            })
    }
}
