//! Mutation path language: lexer, parser, AST and renderer.
//!
//! A mutation path addresses a location inside a nested document of objects
//! and lists, so that tooling can locate or rewrite the value there.
//!
//! # Supported Syntax
//!
//! - `field` - Named field access (letters, digits, `-` and `_`)
//! - `"any text"` or `'any text'` - Quoted field name, `\` escapes the quote and `\`
//! - `a.b` - Nested field access
//! - `list[key: value]` - List element whose `key` field equals `value`
//! - `list[key: *]` - Every list element (glob); `"*"` matches a literal star
//!
//! # Examples
//!
//! ```
//! use mutpath::path::{parse, List, Node, Object};
//!
//! let path = parse("spec.containers[name: *].securityContext").unwrap();
//! assert_eq!(path.nodes[2], Node::List(List::glob("name")));
//! assert_eq!(path.to_string(), "spec.containers[name: *].securityContext");
//!
//! let path = parse(r#"metadata.labels."app.kubernetes.io/name""#).unwrap();
//! assert_eq!(path.nodes[2], Node::Object(Object::new("app.kubernetes.io/name")));
//! ```

pub mod ast;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod render;

pub use ast::{KeyMatch, List, Node, NodeKind, Object, Path};
pub use error::{ErrorKind, ParseError};
pub use parser::{parse, Parser};
pub use render::{QuoteStyle, RenderOptions};
