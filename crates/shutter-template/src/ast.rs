/*
 * ast.rs
 * Copyright (c) 2025 Shutter Gallery contributors
 */

//! Template AST types.
//!
//! A parsed template is a sequence of nodes: literal text, scalar
//! placeholders, conditional blocks and repeatable blocks. Conditionals and
//! blocks carry their own node sequences, so nesting is represented directly
//! in the tree.

/// A node in the template AST.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Literal text to be output as-is.
    Literal(String),

    /// Scalar placeholder: `{NAME}`
    Placeholder(String),

    /// Conditional block: `<!-- IF NAME -->...<!-- ENDIF NAME -->`
    Conditional(Conditional),

    /// Repeatable block: `<!-- BLOCK NAME -->...<!-- /BLOCK NAME -->`
    Block(Block),
}

/// A fragment emitted only when the named flag is truthy.
#[derive(Debug, Clone, PartialEq)]
pub struct Conditional {
    /// Flag name the body is guarded by.
    pub name: String,
    /// Guarded body.
    pub body: Vec<Node>,
}

/// A fragment rendered once per registered index, in ascending order.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    /// Block name entries are registered under.
    pub name: String,
    /// Per-repetition body.
    pub body: Vec<Node>,
}
