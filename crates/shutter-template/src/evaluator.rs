/*
 * evaluator.rs
 * Copyright (c) 2025 Shutter Gallery contributors
 */

//! Template rendering.
//!
//! Rendering walks the AST and appends into a string buffer. It cannot fail:
//! structural errors are caught when the template is compiled, an unknown
//! placeholder renders as the empty string, an unset flag is false, and a
//! block with no registered entries renders zero repetitions.
//!
//! Inside a block repetition, scalar and flag lookups consult the
//! repetition's field map first and fall back to the enclosing context, so
//! a block body can reference page-wide values like `{SITE_NAME}`. Block
//! lookups always go to the top-level context because repetitions carry
//! only scalars and flags.

use crate::ast::Node;
use crate::context::{BlockEntry, Context, Value};
use crate::parser::Template;

impl Template {
    /// Render this template with the given context.
    ///
    /// Rendering is a pure function of the template and the context: it
    /// mutates neither, so calling it twice yields identical output.
    pub fn render(&self, context: &Context) -> String {
        let mut out = String::new();
        let scope = Scope {
            entry: None,
            context,
        };
        render_nodes(&self.nodes, &scope, &mut out);
        out
    }
}

/// Lookup scope: the current block repetition (if any) over the context.
struct Scope<'a> {
    entry: Option<&'a BlockEntry>,
    context: &'a Context,
}

impl<'a> Scope<'a> {
    fn lookup(&self, key: &str) -> Option<&'a Value> {
        self.entry
            .and_then(|entry| entry.get(key))
            .or_else(|| self.context.get(key))
    }

    fn flag(&self, key: &str) -> bool {
        self.lookup(key).is_some_and(Value::is_truthy)
    }
}

fn render_nodes(nodes: &[Node], scope: &Scope, out: &mut String) {
    for node in nodes {
        render_node(node, scope, out);
    }
}

fn render_node(node: &Node, scope: &Scope, out: &mut String) {
    match node {
        Node::Literal(text) => out.push_str(text),

        Node::Placeholder(name) => {
            if let Some(value) = scope.lookup(name) {
                out.push_str(&value.render());
            }
        }

        Node::Conditional(cond) => {
            if scope.flag(&cond.name) {
                render_nodes(&cond.body, scope, out);
            }
        }

        Node::Block(block) => {
            if let Some(Value::Block(entries)) = scope.context.get(&block.name) {
                for entry in entries.values() {
                    let child = Scope {
                        entry: Some(entry),
                        context: scope.context,
                    };
                    render_nodes(&block.body, &child, out);
                }
            }
        }
    }
}
