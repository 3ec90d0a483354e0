/*
 * lib.rs
 * Copyright (c) 2025 Shutter Gallery contributors
 */

//! Theme template store and substitution engine for the shutter gallery.
//!
//! This crate renders the HTML fragments a gallery page is built from. A
//! template is plain text interspersed with three kinds of markers:
//!
//! - Scalar placeholders: `{SITE_NAME}`
//! - Conditional blocks: `<!-- IF IS_ADMIN -->...<!-- ENDIF IS_ADMIN -->`
//! - Repeatable blocks: `<!-- BLOCK PHOTO_ROW -->...<!-- /BLOCK PHOTO_ROW -->`,
//!   rendered once per registered index in ascending order
//!
//! Conditionals nest inside other conditionals and inside repeatable blocks.
//! Unknown placeholders render as the empty string; a conditional whose flag
//! was never set is treated as false; a block with no registered entries
//! renders zero repetitions. Malformed markers are rejected at compile time.
//!
//! The engine performs no HTML escaping; escaping is the caller's
//! responsibility.
//!
//! # Example
//!
//! ```
//! use shutter_template::{Context, Template};
//!
//! let template =
//!     Template::compile("Hello {NAME}!<!-- IF ADMIN -->(admin)<!-- ENDIF ADMIN -->").unwrap();
//!
//! let mut ctx = Context::new();
//! ctx.set_string("NAME", "Ann");
//! ctx.set_conditional("ADMIN", true);
//!
//! assert_eq!(template.render(&ctx), "Hello Ann!(admin)");
//! ```

pub mod ast;
pub mod context;
pub mod error;
pub mod evaluator;
pub mod parser;
pub mod store;

// Re-export main types at crate root
pub use ast::{Block, Conditional, Node};
pub use context::{BlockEntry, Context, Value};
pub use error::{TemplateError, TemplateResult};
pub use parser::Template;
pub use store::{MemoryStore, TemplateStore, ThemeStore};
