//! Page assembly.
//!
//! The assembler has no conditional logic of its own: a page is always
//! header, then navigation, then the central content, then footer. The
//! chrome fragments are rendered through the substitution engine against a
//! single shared context; the central content arrives already rendered by
//! the calling handler.

use shutter_template::{Context, TemplateResult, TemplateStore};

/// The four rendered fragments of a page, in assembly order.
#[derive(Debug, Clone, Default)]
pub struct PageLayout {
    pub header: String,
    pub navigation: String,
    pub content: String,
    pub footer: String,
}

impl PageLayout {
    /// Concatenate the fragments into the final document.
    pub fn assemble(&self) -> String {
        let mut out = String::with_capacity(
            self.header.len() + self.navigation.len() + self.content.len() + self.footer.len(),
        );
        out.push_str(&self.header);
        out.push_str(&self.navigation);
        out.push_str(&self.content);
        out.push_str(&self.footer);
        out
    }
}

/// Renders page chrome from a template store and wraps content with it.
#[derive(Debug, Clone)]
pub struct PageAssembler<S> {
    store: S,
    header: String,
    navigation: String,
    footer: String,
}

impl<S: TemplateStore> PageAssembler<S> {
    /// Create an assembler using the conventional chrome template names
    /// (`header`, `navigation`, `footer`).
    pub fn new(store: S) -> Self {
        Self {
            store,
            header: "header".to_string(),
            navigation: "navigation".to_string(),
            footer: "footer".to_string(),
        }
    }

    /// Override the chrome template names.
    pub fn with_fragments(
        mut self,
        header: impl Into<String>,
        navigation: impl Into<String>,
        footer: impl Into<String>,
    ) -> Self {
        self.header = header.into();
        self.navigation = navigation.into();
        self.footer = footer.into();
        self
    }

    /// Render the chrome against `chrome_ctx` and wrap the already-rendered
    /// central content into the final document.
    ///
    /// # Errors
    /// Fails if a chrome template is missing or malformed.
    pub fn assemble(&self, content: impl Into<String>, chrome_ctx: &Context) -> TemplateResult<String> {
        tracing::debug!(
            header = %self.header,
            navigation = %self.navigation,
            footer = %self.footer,
            "Assembling page"
        );
        let layout = PageLayout {
            header: self.store.get(&self.header)?.render(chrome_ctx),
            navigation: self.store.get(&self.navigation)?.render(chrome_ctx),
            content: content.into(),
            footer: self.store.get(&self.footer)?.render(chrome_ctx),
        };
        Ok(layout.assemble())
    }
}
