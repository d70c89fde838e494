//! Hand-built CST fixtures shared by the unit tests.
//!
//! Builders mirror the shapes the external grammar serializes: a
//! `module_call` carries its identifier and an `arguments` node, a
//! `transform_chain` carries the leading call plus the body, named arguments
//! are `assignment` nodes with `name`/`value` fields.

#![allow(dead_code)]

use crate::cst::{Point, SyntaxNode, SyntaxTree};

/// A bare named node with zeroed positions.
pub fn node(node_type: &str, text: &str) -> SyntaxNode {
    SyntaxNode {
        node_type: node_type.to_string(),
        text: text.to_string(),
        start_index: 0,
        end_index: text.len(),
        start_position: Point::default(),
        end_position: Point {
            row: 0,
            column: text.len(),
        },
        children: Vec::new(),
        is_named: true,
        field_name: None,
    }
}

/// An anonymous punctuation token.
pub fn token(node_type: &str, text: &str) -> SyntaxNode {
    let mut n = node(node_type, text);
    n.is_named = false;
    n
}

/// Tags a node with a grammar field name.
pub fn with_field(mut n: SyntaxNode, field: &str) -> SyntaxNode {
    n.field_name = Some(field.to_string());
    n
}

pub fn number(text: &str) -> SyntaxNode {
    node("number", text)
}

pub fn boolean(value: bool) -> SyntaxNode {
    node("boolean", if value { "true" } else { "false" })
}

pub fn string_lit(text: &str) -> SyntaxNode {
    node("string", &format!("\"{text}\""))
}

pub fn ident(name: &str) -> SyntaxNode {
    node("identifier", name)
}

pub fn special_var(name: &str) -> SyntaxNode {
    node("special_variable", name)
}

/// A `[a, b, c]` list with the given elements as named children.
pub fn list(elements: Vec<SyntaxNode>) -> SyntaxNode {
    let mut n = node("list", "[...]");
    n.children.push(token("[", "["));
    for element in elements {
        n.children.push(element);
        n.children.push(token(",", ","));
    }
    n.children.push(token("]", "]"));
    n
}

/// A `name = value` argument as the grammar serializes it.
pub fn named_arg(name: &str, value: SyntaxNode) -> SyntaxNode {
    assignment_of(ident(name), value)
}

/// A `$name = value` argument (`$fn = 64`).
pub fn special_arg(name: &str, value: SyntaxNode) -> SyntaxNode {
    assignment_of(special_var(name), value)
}

/// An `assignment` node with `name`/`value` field children.
pub fn assignment_of(name: SyntaxNode, value: SyntaxNode) -> SyntaxNode {
    let mut n = node("assignment", "");
    n.children.push(with_field(name, "name"));
    n.children.push(token("=", "="));
    n.children.push(with_field(value, "value"));
    n
}

/// A `(a, b, name=c)` argument list node.
pub fn arguments(args: Vec<SyntaxNode>) -> SyntaxNode {
    let mut n = node("arguments", "(...)");
    n.children.push(token("(", "("));
    for arg in args {
        n.children.push(arg);
        n.children.push(token(",", ","));
    }
    n.children.push(token(")", ")"));
    n
}

/// A `name(args)` module call.
pub fn call(name: &str, args: Vec<SyntaxNode>) -> SyntaxNode {
    let mut n = node("module_call", name);
    n.children.push(with_field(ident(name), "name"));
    n.children.push(arguments(args));
    n
}

/// A `name(args) body` transform chain: the leading call plus body statements.
pub fn chain(name: &str, args: Vec<SyntaxNode>, body: Vec<SyntaxNode>) -> SyntaxNode {
    let mut n = node("transform_chain", name);
    n.children.push(call(name, args));
    for child in body {
        n.children.push(child);
    }
    n.children.push(token(";", ";"));
    n
}

/// A `{ ... }` block.
pub fn block(children: Vec<SyntaxNode>) -> SyntaxNode {
    let mut n = node("union_block", "{...}");
    n.children.push(token("{", "{"));
    for child in children {
        n.children.push(child);
    }
    n.children.push(token("}", "}"));
    n
}

/// A `source_file` root with the given statements.
pub fn program(children: Vec<SyntaxNode>) -> SyntaxNode {
    let mut n = node("source_file", "");
    for child in children {
        n.children.push(child);
    }
    n
}

/// Wraps a root node into a traversable tree.
pub fn tree(root: SyntaxNode) -> SyntaxTree {
    SyntaxTree::new(root)
}
