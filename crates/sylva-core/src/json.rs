//! JSON encoding of parse trees.
//!
//! Serialization goes through the serde derives on [`ParseNode`];
//! deserialization is explicit because node kinds are interned rule names
//! and must resolve against a live [`Grammar`]. Loading re-checks the label
//! consistency invariant, so a hand-edited document cannot smuggle an
//! inconsistent tree into the API.

use serde_json::Value;

use crate::grammar::Grammar;
use crate::tree::{Item, ParseNode};
use crate::{Error, Result};

/// Encodes a tree as a JSON value.
pub fn to_json(node: &ParseNode) -> Value {
    serde_json::to_value(node).expect("tree serialization is infallible")
}

/// Encodes a tree as a JSON string.
pub fn to_json_string(node: &ParseNode) -> String {
    to_json(node).to_string()
}

/// Decodes a tree from a JSON value, resolving node kinds against
/// `grammar` and validating label consistency.
pub fn from_json(grammar: &Grammar, value: &Value) -> Result<ParseNode> {
    let obj = value
        .as_object()
        .ok_or_else(|| malformed("node must be an object"))?;

    let kind_name = obj
        .get("kind")
        .and_then(Value::as_str)
        .ok_or_else(|| malformed("node is missing a string \"kind\""))?;
    let kind = grammar.kind(kind_name).ok_or_else(|| Error::UnknownRule {
        name: kind_name.to_owned(),
    })?;

    let label = decode_label(obj.get("label"))?;

    let raw_items = obj
        .get("items")
        .and_then(Value::as_array)
        .ok_or_else(|| malformed("node is missing an \"items\" array"))?;

    let mut items = Vec::with_capacity(raw_items.len());
    for raw in raw_items {
        let entry = raw
            .as_object()
            .ok_or_else(|| malformed("item must be an object"))?;
        if let Some(text) = entry.get("Terminal") {
            let text = text
                .as_str()
                .ok_or_else(|| malformed("terminal item must hold a string"))?;
            items.push(Item::Terminal(text.to_owned()));
        } else if let Some(child) = entry.get("Child") {
            let child_label = decode_label(child.get("label"))?;
            let node_value = child
                .get("node")
                .ok_or_else(|| malformed("child item is missing its node"))?;
            let node = from_json(grammar, node_value)?;
            if node.label() != child_label.as_deref() {
                return Err(malformed(
                    "child item label disagrees with the child node's own label",
                ));
            }
            items.push(Item::Child {
                label: child_label,
                node,
            });
        } else {
            return Err(malformed("item must be a Terminal or a Child"));
        }
    }

    let mut node = ParseNode::new(kind, items);
    node.set_label(label);
    Ok(node)
}

/// Decodes a tree from a JSON string.
pub fn from_json_str(grammar: &Grammar, text: &str) -> Result<ParseNode> {
    let value: Value = serde_json::from_str(text).map_err(|e| malformed(&e.to_string()))?;
    from_json(grammar, &value)
}

fn decode_label(value: Option<&Value>) -> Result<Option<String>> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(malformed("label must be a string or null")),
    }
}

fn malformed(reason: &str) -> Error {
    Error::MalformedTree {
        reason: reason.to_owned(),
    }
}
