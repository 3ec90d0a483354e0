/*
 * parser.rs
 * Copyright (c) 2025 Shutter Gallery contributors
 */

//! Template parser.
//!
//! A single forward scan over the source produces the AST. Two things look
//! like markers:
//!
//! - `{NAME}` where NAME consists of `A-Z`, `0-9` and `_` becomes a scalar
//!   placeholder; any other brace sequence (CSS rules, JavaScript object
//!   literals, lowercase text) stays literal.
//! - `<!-- IF NAME -->`, `<!-- ENDIF NAME -->`, `<!-- BLOCK NAME -->` and
//!   `<!-- /BLOCK NAME -->` open and close conditional and repeatable
//!   blocks. HTML comments that are not one of these exact forms stay
//!   literal.
//!
//! Open markers are tracked on a stack so conditionals and blocks nest.
//! A close marker must match the innermost open marker by kind and name;
//! anything else is a [`TemplateError`] at compile time. Unknown placeholder
//! names are not checked here at all, they are resolved (or silently
//! dropped) at render time.

use crate::ast::{Block, Conditional, Node};
use crate::error::{TemplateError, TemplateResult};

/// A compiled template ready for rendering.
#[derive(Debug, Clone)]
pub struct Template {
    /// The parsed template AST.
    pub(crate) nodes: Vec<Node>,
}

/// Marker recognized during the scan.
enum Marker {
    OpenIf(String),
    CloseIf(String),
    OpenBlock(String),
    CloseBlock(String),
}

/// An open conditional or block awaiting its close marker.
enum OpenMarker {
    Conditional(String),
    Block(String),
}

impl OpenMarker {
    fn describe(&self) -> String {
        match self {
            OpenMarker::Conditional(name) => format!("IF {name}"),
            OpenMarker::Block(name) => format!("BLOCK {name}"),
        }
    }
}

struct Frame {
    marker: OpenMarker,
    /// Byte offset of the open marker, for error reporting.
    offset: usize,
    nodes: Vec<Node>,
}

impl Template {
    /// Compile a template from source text.
    ///
    /// # Errors
    /// Fails if a conditional or block marker is unterminated, closed under
    /// the wrong name, or closed without having been opened.
    pub fn compile(source: &str) -> TemplateResult<Self> {
        let mut stack: Vec<Frame> = Vec::new();
        let mut root: Vec<Node> = Vec::new();
        let mut literal = String::new();
        let mut pos = 0;

        while pos < source.len() {
            let rest = &source[pos..];
            let Some(off) = rest.find(|c| c == '{' || c == '<') else {
                literal.push_str(rest);
                break;
            };
            literal.push_str(&rest[..off]);
            pos += off;

            if source.as_bytes()[pos] == b'{' {
                if let Some((name, end)) = scan_placeholder(source, pos) {
                    flush_literal(&mut literal, &mut stack, &mut root);
                    push_node(&mut stack, &mut root, Node::Placeholder(name));
                    pos = end;
                } else {
                    literal.push('{');
                    pos += 1;
                }
                continue;
            }

            let Some((marker, end)) = scan_marker(source, pos) else {
                literal.push('<');
                pos += 1;
                continue;
            };
            flush_literal(&mut literal, &mut stack, &mut root);

            match marker {
                Marker::OpenIf(name) => stack.push(Frame {
                    marker: OpenMarker::Conditional(name),
                    offset: pos,
                    nodes: Vec::new(),
                }),
                Marker::OpenBlock(name) => stack.push(Frame {
                    marker: OpenMarker::Block(name),
                    offset: pos,
                    nodes: Vec::new(),
                }),
                Marker::CloseIf(name) => {
                    let frame = close_frame(&mut stack, &format!("ENDIF {name}"))?;
                    match frame.marker {
                        OpenMarker::Conditional(opened) if opened == name => {
                            push_node(
                                &mut stack,
                                &mut root,
                                Node::Conditional(Conditional {
                                    name,
                                    body: frame.nodes,
                                }),
                            );
                        }
                        other => {
                            return Err(TemplateError::MismatchedClose {
                                opened: other.describe(),
                                found: format!("ENDIF {name}"),
                            });
                        }
                    }
                }
                Marker::CloseBlock(name) => {
                    let frame = close_frame(&mut stack, &format!("/BLOCK {name}"))?;
                    match frame.marker {
                        OpenMarker::Block(opened) if opened == name => {
                            push_node(
                                &mut stack,
                                &mut root,
                                Node::Block(Block {
                                    name,
                                    body: frame.nodes,
                                }),
                            );
                        }
                        other => {
                            return Err(TemplateError::MismatchedClose {
                                opened: other.describe(),
                                found: format!("/BLOCK {name}"),
                            });
                        }
                    }
                }
            }
            pos = end;
        }

        if let Some(frame) = stack.pop() {
            return Err(match frame.marker {
                OpenMarker::Conditional(name) => TemplateError::UnterminatedConditional {
                    name,
                    offset: frame.offset,
                },
                OpenMarker::Block(name) => TemplateError::UnterminatedBlock {
                    name,
                    offset: frame.offset,
                },
            });
        }

        flush_literal(&mut literal, &mut stack, &mut root);
        Ok(Template { nodes: root })
    }

    /// Get the AST nodes of this template.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }
}

fn push_node(stack: &mut Vec<Frame>, root: &mut Vec<Node>, node: Node) {
    match stack.last_mut() {
        Some(frame) => frame.nodes.push(node),
        None => root.push(node),
    }
}

fn flush_literal(literal: &mut String, stack: &mut Vec<Frame>, root: &mut Vec<Node>) {
    if !literal.is_empty() {
        push_node(stack, root, Node::Literal(std::mem::take(literal)));
    }
}

fn close_frame(stack: &mut Vec<Frame>, found: &str) -> TemplateResult<Frame> {
    stack.pop().ok_or_else(|| TemplateError::StrayClose {
        marker: found.to_string(),
    })
}

fn is_marker_char(c: char) -> bool {
    c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_'
}

/// Scan a marker name starting at `pos`. Returns the name and the byte
/// offset just past it, or `None` if no marker character is present.
fn scan_name(source: &str, pos: usize) -> Option<(String, usize)> {
    let len = source[pos..]
        .find(|c| !is_marker_char(c))
        .unwrap_or(source.len() - pos);
    if len == 0 {
        return None;
    }
    Some((source[pos..pos + len].to_string(), pos + len))
}

/// Try to scan `{NAME}` at `pos` (which must point at `{`).
fn scan_placeholder(source: &str, pos: usize) -> Option<(String, usize)> {
    let (name, end) = scan_name(source, pos + 1)?;
    if source[end..].starts_with('}') {
        Some((name, end + 1))
    } else {
        None
    }
}

/// Try to scan a well-formed `<!-- KEYWORD NAME -->` marker at `pos`
/// (which must point at `<`). Returns `None` for ordinary comments.
fn scan_marker(source: &str, pos: usize) -> Option<(Marker, usize)> {
    let rest = &source[pos..];
    let body = rest.strip_prefix("<!-- ")?;
    let body_start = pos + "<!-- ".len();

    let (keyword, name_start) = if body.starts_with("IF ") {
        ("IF", body_start + "IF ".len())
    } else if body.starts_with("ENDIF ") {
        ("ENDIF", body_start + "ENDIF ".len())
    } else if body.starts_with("BLOCK ") {
        ("BLOCK", body_start + "BLOCK ".len())
    } else if body.starts_with("/BLOCK ") {
        ("/BLOCK", body_start + "/BLOCK ".len())
    } else {
        return None;
    };

    let (name, end) = scan_name(source, name_start)?;
    if !source[end..].starts_with(" -->") {
        return None;
    }
    let end = end + " -->".len();

    let marker = match keyword {
        "IF" => Marker::OpenIf(name),
        "ENDIF" => Marker::CloseIf(name),
        "BLOCK" => Marker::OpenBlock(name),
        "/BLOCK" => Marker::CloseBlock(name),
        _ => unreachable!(),
    };
    Some((marker, end))
}
