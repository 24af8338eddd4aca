//! Abstract syntax tree types for mutation paths.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::ParseError;
use super::parser::Parser;
use super::render::{self, RenderOptions};

/// Tag identifying which variant a [`Node`] is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Object,
    List,
    Path,
}

/// A node in a mutation path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Node {
    /// Named field access (`spec`, `"foo bar"`)
    Object(Object),
    /// Keyed list element match (`[name: foo]`, `[name: *]`)
    List(List),
    /// A nested path, only produced by programmatic composition
    Path(Path),
}

impl Node {
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Object(_) => NodeKind::Object,
            Node::List(_) => NodeKind::List,
            Node::Path(_) => NodeKind::Path,
        }
    }

    /// Renders the node with the default options.
    pub fn render(&self) -> String {
        self.render_with(&RenderOptions::default())
    }

    pub fn render_with(&self, options: &RenderOptions) -> String {
        match self {
            Node::Object(object) => object.render_with(options),
            Node::List(list) => list.render_with(options),
            Node::Path(path) => path.render_with(options),
        }
    }

    /// Returns an independent copy of the node and everything below it.
    pub fn deep_copy(&self) -> Node {
        match self {
            Node::Object(object) => Node::Object(object.deep_copy()),
            Node::List(list) => Node::List(list.deep_copy()),
            Node::Path(path) => Node::Path(path.deep_copy()),
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl From<Object> for Node {
    fn from(object: Object) -> Self {
        Node::Object(object)
    }
}

impl From<List> for Node {
    fn from(list: List) -> Self {
        Node::List(list)
    }
}

impl From<Path> for Node {
    fn from(path: Path) -> Self {
        Node::Path(path)
    }
}

/// A single named field access.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Object {
    /// Field name; may be empty or contain any character.
    pub reference: String,
}

impl Object {
    pub fn new(reference: impl Into<String>) -> Self {
        Self {
            reference: reference.into(),
        }
    }

    pub fn render_with(&self, options: &RenderOptions) -> String {
        render::quote_token(&self.reference, options.quote).into_owned()
    }

    pub fn deep_copy(&self) -> Object {
        Object::new(self.reference.clone())
    }
}

impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_with(&RenderOptions::default()))
    }
}

/// How a [`List`] segment selects its element.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "mode", content = "value", rename_all = "lowercase")]
pub enum KeyMatch {
    /// Any element (`[key: *]`).
    Glob,
    /// The element whose key field equals the value.
    Value(String),
}

/// Selects elements of a list-valued field by one of their key fields.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct List {
    pub key_field: String,
    #[serde(rename = "match")]
    pub key_match: KeyMatch,
}

impl List {
    /// A list segment matching every element.
    pub fn glob(key_field: impl Into<String>) -> Self {
        Self {
            key_field: key_field.into(),
            key_match: KeyMatch::Glob,
        }
    }

    /// A list segment matching the element whose `key_field` equals `value`.
    pub fn with_value(key_field: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key_field: key_field.into(),
            key_match: KeyMatch::Value(value.into()),
        }
    }

    /// The specific key value, absent for glob matches.
    pub fn key_value(&self) -> Option<&str> {
        match &self.key_match {
            KeyMatch::Glob => None,
            KeyMatch::Value(value) => Some(value),
        }
    }

    pub fn is_glob(&self) -> bool {
        matches!(self.key_match, KeyMatch::Glob)
    }

    pub fn render_with(&self, options: &RenderOptions) -> String {
        let value = match &self.key_match {
            KeyMatch::Glob => "*".to_string(),
            KeyMatch::Value(value) => render::quote_token(value, options.quote).into_owned(),
        };
        format!(
            "[{}: {}]",
            render::quote_token(&self.key_field, options.quote),
            value
        )
    }

    pub fn deep_copy(&self) -> List {
        let key_match = match &self.key_match {
            KeyMatch::Glob => KeyMatch::Glob,
            KeyMatch::Value(value) => KeyMatch::Value(value.clone()),
        };
        List {
            key_field: self.key_field.clone(),
            key_match,
        }
    }
}

impl fmt::Display for List {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_with(&RenderOptions::default()))
    }
}

/// A complete mutation path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Path {
    /// Nodes in source order.
    pub nodes: Vec<Node>,
}

impl Path {
    /// Creates a new path with the given nodes.
    pub fn new(nodes: Vec<Node>) -> Self {
        Self { nodes }
    }

    pub fn push(&mut self, node: impl Into<Node>) {
        self.nodes.push(node.into());
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Node> {
        self.nodes.iter()
    }

    /// Object and List segments in order, descending into nested paths.
    pub fn segments(&self) -> Vec<&Node> {
        let mut out = Vec::new();
        collect_segments(&self.nodes, &mut out);
        out
    }

    pub fn render_with(&self, options: &RenderOptions) -> String {
        render::render_nodes(&self.nodes, options)
    }

    pub fn deep_copy(&self) -> Path {
        Path::new(self.nodes.iter().map(Node::deep_copy).collect())
    }
}

fn collect_segments<'a>(nodes: &'a [Node], out: &mut Vec<&'a Node>) {
    for node in nodes {
        match node {
            Node::Object(_) | Node::List(_) => out.push(node),
            Node::Path(path) => collect_segments(&path.nodes, out),
        }
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_with(&RenderOptions::default()))
    }
}

impl FromStr for Path {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Parser::parse(s)
    }
}

impl From<Vec<Node>> for Path {
    fn from(nodes: Vec<Node>) -> Self {
        Path::new(nodes)
    }
}

impl FromIterator<Node> for Path {
    fn from_iter<I: IntoIterator<Item = Node>>(iter: I) -> Self {
        Path::new(iter.into_iter().collect())
    }
}

impl IntoIterator for Path {
    type Item = Node;
    type IntoIter = std::vec::IntoIter<Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.into_iter()
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Node;
    type IntoIter = std::slice::Iter<'a, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}
