//! Reference resolution.
//!
//! Three independent entry points turn a symbolic reference into a node:
//! by path, by node label, or by alias. Labels and aliases go through one
//! level of indirection: the table maps them to the target node's macro
//! key, which is decoded back to a path before the node is built. A
//! fourth mode, [`RefKind::Auto`], tries all three in a fixed order.
//!
//! All resolvers are pure functions over an immutable [`MacroTable`] and
//! can be called any number of times; "no such node" is `Ok(None)`, never
//! an error.

use crate::error::{DtError, Result};
use crate::header::{alias_to_key, key_to_path, label_to_key, MacroTable};
use crate::tree::Node;

/// How a symbolic reference should be interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum RefKind {
    /// A hierarchical path, starting with `/`
    Path,
    /// A node label (flat name)
    Label,
    /// An alias (flat name)
    Alias,
    /// Try path, then label, then alias
    Auto,
}

/// Resolve a reference by hierarchical path.
///
/// Fails with [`DtError::MalformedReference`] if the path does not start
/// with `/`.
pub fn resolve_path<'a>(table: &'a MacroTable, path: &str) -> Result<Option<Node<'a>>> {
    Node::at(table, path)
}

/// Resolve a reference by node label.
///
/// Fails with [`DtError::MalformedReference`] if the label starts with
/// `/`; returns `Ok(None)` if the label is not defined in the table.
pub fn resolve_label<'a>(table: &'a MacroTable, label: &str) -> Result<Option<Node<'a>>> {
    let label_key = label_to_key(label)?;
    resolve_indirect(table, &label_key)
}

/// Resolve a reference by alias.
///
/// Fails with [`DtError::MalformedReference`] if the alias starts with
/// `/`; returns `Ok(None)` if the alias is not defined in the table.
pub fn resolve_alias<'a>(table: &'a MacroTable, alias: &str) -> Result<Option<Node<'a>>> {
    let alias_key = alias_to_key(alias)?;
    resolve_indirect(table, &alias_key)
}

/// Follow a label or alias key to its target node.
///
/// The key's value is the target node's macro key, which is decoded to a
/// path and rebuilt as a node.
fn resolve_indirect<'a>(table: &'a MacroTable, key: &str) -> Result<Option<Node<'a>>> {
    let node_key = match table.get(key) {
        Some(node_key) => node_key,
        None => return Ok(None),
    };
    let node_path = key_to_path(node_key);
    Node::at(table, &node_path)
}

/// Resolve a reference of the given kind.
///
/// [`RefKind::Auto`] tries path, then label, then alias, taking the
/// first interpretation that both parses and names an existing node.
/// Path comes first so that the malformed-reference error a slash-leading
/// input triggers in the label and alias parsers can never mask a valid
/// path match. A malformed interpretation is skipped; any other hard
/// failure aborts immediately.
pub fn resolve<'a>(table: &'a MacroTable, kind: RefKind, value: &str) -> Result<Option<Node<'a>>> {
    match kind {
        RefKind::Path => resolve_path(table, value),
        RefKind::Label => resolve_label(table, value),
        RefKind::Alias => resolve_alias(table, value),
        RefKind::Auto => {
            if let Some(node) = skip_malformed(resolve_path(table, value))? {
                return Ok(Some(node));
            }
            if let Some(node) = skip_malformed(resolve_label(table, value))? {
                return Ok(Some(node));
            }
            skip_malformed(resolve_alias(table, value))
        }
    }
}

/// Treat a malformed interpretation as a miss during auto resolution.
///
/// Only the syntactic error is downgraded; namespace-inconsistency
/// failures still propagate.
fn skip_malformed(attempt: Result<Option<Node<'_>>>) -> Result<Option<Node<'_>>> {
    match attempt {
        Err(DtError::MalformedReference { .. }) => Ok(None),
        other => other,
    }
}

/// Resolve a reference all the way to its canonical identifier.
///
/// This is the query surface consumed by code generation: absence is a
/// hard [`DtError::NotFound`] here, since the caller asked for an
/// identifier and there is none to give.
pub fn resolve_device_ref(table: &MacroTable, kind: RefKind, value: &str) -> Result<String> {
    match resolve(table, kind, value)? {
        Some(node) => node.device_ref(),
        None => Err(DtError::not_found(value)),
    }
}
