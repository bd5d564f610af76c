//! The labeled concrete syntax tree and its operation surface.
//!
//! A [`ParseNode`] records which rule produced it ([`NodeKind`]), the role
//! it plays relative to its parent (`label`, assigned by the parent's
//! pattern), and an ordered list of items: literal strings and child nodes.
//!
//! Two nodes are equal when they have the same kind and recursively equal
//! items. Labels are positional metadata, not identity, and are excluded
//! from equality on purpose: the same sub-derivation reached through
//! differently labeled contexts still denotes the same parsed text.
//!
//! Nodes are created only by a successful grammar match. The one mutation
//! point is [`ParseNode::update_with`], which re-derives the items from
//! fresh text under the node's own rule and swaps them in wholesale;
//! everything else is read-only.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::grammar::Grammar;
use crate::{Error, Result};

/// Identifies the grammar rule that produced a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeKind(&'static str);

impl NodeKind {
    pub(crate) fn new(name: &'static str) -> Self {
        Self(name)
    }

    pub fn as_str(self) -> &'static str {
        self.0
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl Serialize for NodeKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.0)
    }
}

/// One entry in a node's item list.
#[derive(Debug, Clone, Serialize)]
pub enum Item {
    /// A literal string contributed by a terminal. Never labeled.
    Terminal(String),
    /// A nested node, with the label the parent assigned it. The label
    /// stored here always equals `node.label()`; that redundancy is the
    /// consistency invariant [`ParseNode::is_label_consistent`] checks.
    Child {
        label: Option<String>,
        node: ParseNode,
    },
}

impl PartialEq for Item {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Item::Terminal(a), Item::Terminal(b)) => a == b,
            (Item::Child { node: a, .. }, Item::Child { node: b, .. }) => a == b,
            _ => false,
        }
    }
}

impl Eq for Item {}

/// A node of the concrete syntax tree.
#[derive(Debug, Clone, Serialize)]
pub struct ParseNode {
    kind: NodeKind,
    label: Option<String>,
    items: Vec<Item>,
}

impl PartialEq for ParseNode {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.items == other.items
    }
}

impl Eq for ParseNode {}

impl ParseNode {
    pub(crate) fn new(kind: NodeKind, items: Vec<Item>) -> Self {
        Self {
            kind,
            label: None,
            items,
        }
    }

    pub(crate) fn set_label(&mut self, label: Option<String>) {
        self.label = label;
    }

    /// The rule that produced this node.
    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    /// The role this node plays relative to its immediate parent, if its
    /// parent's pattern assigned one.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// The ordered items, terminals and children interleaved as matched.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// The child nodes, in order, skipping terminal items.
    pub fn children(&self) -> impl Iterator<Item = &ParseNode> {
        self.items.iter().filter_map(|item| match item {
            Item::Child { node, .. } => Some(node),
            Item::Terminal(_) => None,
        })
    }

    /// True iff every item is a terminal.
    pub fn is_leaf(&self) -> bool {
        self.items
            .iter()
            .all(|item| matches!(item, Item::Terminal(_)))
    }

    pub fn is_branch(&self) -> bool {
        !self.is_leaf()
    }

    /// The labels present among the immediate items, in order.
    pub fn labels(&self) -> Vec<&str> {
        self.items
            .iter()
            .filter_map(|item| match item {
                Item::Child {
                    label: Some(l), ..
                } => Some(l.as_str()),
                _ => None,
            })
            .collect()
    }

    /// True if `label` occurs among the immediate items.
    pub fn has_label(&self, label: &str) -> bool {
        self.labels().contains(&label)
    }

    /// All immediate children carrying `label` (non-recursive; a label may
    /// legitimately repeat, e.g. the arguments of a call).
    pub fn values_for_label(&self, label: &str) -> Vec<&ParseNode> {
        self.items
            .iter()
            .filter_map(|item| match item {
                Item::Child {
                    label: Some(l),
                    node,
                } if l.as_str() == label => Some(node),
                _ => None,
            })
            .collect()
    }

    /// All immediate items carrying `label` (non-recursive).
    pub fn items_for_label(&self, label: &str) -> Vec<&Item> {
        self.items
            .iter()
            .filter(|item| {
                matches!(item, Item::Child { label: Some(l), .. } if l.as_str() == label)
            })
            .collect()
    }

    /// The unique immediate child carrying `label`. Fails loudly when the
    /// label occurs zero or several times; callers that expect repetition
    /// use [`values_for_label`](Self::values_for_label).
    pub fn value_for_label(&self, label: &str) -> Result<&ParseNode> {
        let values = self.values_for_label(label);
        match values.as_slice() {
            [single] => Ok(*single),
            _ => Err(Error::LabelCardinality {
                label: label.to_owned(),
                count: values.len(),
            }),
        }
    }

    /// Mutable access to the unique immediate child carrying `label`,
    /// for in-place updates of a labeled element.
    pub fn value_for_label_mut(&mut self, label: &str) -> Result<&mut ParseNode> {
        let count = self.values_for_label(label).len();
        if count != 1 {
            return Err(Error::LabelCardinality {
                label: label.to_owned(),
                count,
            });
        }
        let node = self.items.iter_mut().find_map(|item| match item {
            Item::Child {
                label: Some(l),
                node,
            } if l.as_str() == label => Some(node),
            _ => None,
        });
        Ok(node.expect("presence checked above"))
    }

    /// Collects every node in the subtree (pre-order) satisfying all of the
    /// search's provided predicates. With `labeled_only` (the default),
    /// only nodes carrying a label relative to their parent are considered,
    /// which filters out purely structural wrapper layers.
    pub fn search_elements(&self, search: &Search<'_>) -> Vec<&ParseNode> {
        let mut candidates = Vec::new();
        self.collect(search.labeled_only, &mut candidates);
        candidates
            .into_iter()
            .filter(|node| {
                if let Some(label) = search.label
                    && node.label() != Some(label)
                {
                    return false;
                }
                if let Some(kind) = search.kind
                    && node.kind != kind
                {
                    return false;
                }
                if let Some(value) = search.value
                    && node.to_string() != value
                {
                    return false;
                }
                true
            })
            .collect()
    }

    fn collect<'n>(&'n self, labeled_only: bool, out: &mut Vec<&'n ParseNode>) {
        if self.label.is_some() || !labeled_only {
            out.push(self);
        }
        for child in self.children() {
            child.collect(labeled_only, out);
        }
    }

    /// Follows sole children downward: while the node has exactly one item
    /// and that item is a child, moves to it. Skips trivial
    /// single-alternative precedence layers without hardcoding their depth.
    pub fn descend(&self) -> &ParseNode {
        let mut current = self;
        while let [Item::Child { node, .. }] = current.items.as_slice() {
            current = node;
        }
        current
    }

    /// Re-derives this node's items from `text`, parsed under the node's
    /// own rule. On success the items are replaced wholesale (the node
    /// keeps its place and label); on failure the node is left completely
    /// unchanged and the error carries the rejected text and rule name.
    pub fn update_with(&mut self, grammar: &Grammar, text: &str) -> Result<()> {
        let fresh = grammar.parse(self.kind.as_str(), text)?;
        self.items = fresh.items;
        Ok(())
    }

    /// True iff rendering this node and reparsing the result under its own
    /// rule yields a structurally equal tree.
    pub fn validate(&self, grammar: &Grammar) -> bool {
        grammar
            .parse(self.kind.as_str(), &self.to_string())
            .is_ok_and(|reparsed| reparsed == *self)
    }

    /// Checks the label redundancy invariant: each child item's recorded
    /// label equals the child's own, recursively. Violations indicate a
    /// defect in binding, not bad input.
    pub fn is_label_consistent(&self) -> bool {
        self.items.iter().all(|item| match item {
            Item::Terminal(_) => true,
            Item::Child { label, node } => {
                node.label.as_deref() == label.as_deref() && node.is_label_consistent()
            }
        })
    }

    /// Indented debug dump: one `[Kind] /rendered/` line per node, label
    /// annotations as `> label:` lines, terminal items verbatim.
    /// Diagnostic output only; the format carries no semantic contract.
    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.dump_into(&mut out, "", "|  ");
        out
    }

    fn dump_into(&self, out: &mut String, indent: &str, step: &str) {
        if let Some(label) = &self.label {
            out.push_str(indent);
            out.push_str("> ");
            out.push_str(label);
            out.push_str(":\n");
        }
        out.push_str(indent);
        out.push('[');
        out.push_str(self.kind.as_str());
        out.push_str("] /");
        out.push_str(&self.to_string());
        out.push_str("/\n");
        let deeper = format!("{indent}{step}");
        for item in &self.items {
            match item {
                Item::Terminal(text) => {
                    out.push_str(&deeper);
                    out.push_str(text);
                    out.push('\n');
                }
                Item::Child { node, .. } => node.dump_into(out, &deeper, step),
            }
        }
    }
}

/// Rendering: depth-first join of item renderings with single spaces.
/// Items rendering to the empty string are omitted from the join but remain
/// structurally present. Except for whitespace variations this reproduces
/// the text the node was parsed from.
impl fmt::Display for ParseNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut separate = false;
        for item in &self.items {
            let rendered = match item {
                Item::Terminal(text) => text.clone(),
                Item::Child { node, .. } => node.to_string(),
            };
            if rendered.is_empty() {
                continue;
            }
            if separate {
                f.write_str(" ")?;
            }
            f.write_str(&rendered)?;
            separate = true;
        }
        Ok(())
    }
}

/// Predicates for [`ParseNode::search_elements`]. Absent fields are
/// wildcards; all present fields must match.
#[derive(Debug, Clone)]
pub struct Search<'a> {
    label: Option<&'a str>,
    kind: Option<NodeKind>,
    value: Option<&'a str>,
    labeled_only: bool,
}

impl Default for Search<'_> {
    fn default() -> Self {
        Self {
            label: None,
            kind: None,
            value: None,
            labeled_only: true,
        }
    }
}

impl<'a> Search<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Require this parent-relative label.
    pub fn label(mut self, label: &'a str) -> Self {
        self.label = Some(label);
        self
    }

    /// Require this node kind.
    pub fn kind(mut self, kind: NodeKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Require the node's rendered text to equal this string.
    pub fn value(mut self, value: &'a str) -> Self {
        self.value = Some(value);
        self
    }

    /// Whether only labeled nodes are considered (default true).
    pub fn labeled_only(mut self, labeled_only: bool) -> Self {
        self.labeled_only = labeled_only;
        self
    }
}
