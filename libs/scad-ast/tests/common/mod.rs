//! Shared CST builders for the integration tests, mirroring the shapes the
//! external grammar serializes.

#![allow(dead_code)]

use scad_ast::{Point, SyntaxNode, SyntaxTree};

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

pub fn token(node_type: &str, text: &str) -> SyntaxNode {
    let mut n = node(node_type, text);
    n.is_named = false;
    n
}

pub fn with_field(mut n: SyntaxNode, field: &str) -> SyntaxNode {
    n.field_name = Some(field.to_string());
    n
}

pub fn number(text: &str) -> SyntaxNode {
    node("number", text)
}

pub fn ident(name: &str) -> SyntaxNode {
    node("identifier", name)
}

pub fn list(elements: Vec<SyntaxNode>) -> SyntaxNode {
    let mut n = node("list", "[...]");
    for element in elements {
        n.children.push(element);
    }
    n
}

pub fn named_arg(name: &str, value: SyntaxNode) -> SyntaxNode {
    let mut n = node("assignment", "");
    n.children.push(with_field(ident(name), "name"));
    n.children.push(with_field(value, "value"));
    n
}

pub fn arguments(args: Vec<SyntaxNode>) -> SyntaxNode {
    let mut n = node("arguments", "(...)");
    for arg in args {
        n.children.push(arg);
    }
    n
}

pub fn call(name: &str, args: Vec<SyntaxNode>) -> SyntaxNode {
    let mut n = node("module_call", name);
    n.children.push(with_field(ident(name), "name"));
    n.children.push(arguments(args));
    n
}

pub fn chain(name: &str, args: Vec<SyntaxNode>, body: Vec<SyntaxNode>) -> SyntaxNode {
    let mut n = node("transform_chain", name);
    n.children.push(call(name, args));
    for child in body {
        n.children.push(child);
    }
    n
}

pub fn block(children: Vec<SyntaxNode>) -> SyntaxNode {
    let mut n = node("union_block", "{...}");
    for child in children {
        n.children.push(child);
    }
    n
}

pub fn program(children: Vec<SyntaxNode>) -> SyntaxNode {
    let mut n = node("source_file", "");
    for child in children {
        n.children.push(child);
    }
    n
}

pub fn tree(root: SyntaxNode) -> SyntaxTree {
    SyntaxTree::new(root)
}
