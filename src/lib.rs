//! mutpath - parser, AST and canonical renderer for mutation paths.
//!
//! The [`path`] module holds the language itself. [`config`], [`file`] and
//! [`report`] support the `mutpath` command-line tool.

pub mod config;
pub mod file;
pub mod path;
pub mod report;
