//! A single devicetree node, viewed through the macro namespace.

use crate::error::{DtError, Result};
use crate::header::{key_to_path, path_to_key, MacroTable};
use crate::DEVICE_REF_PREFIX;

/// A lazily-evaluated view of one hardware node.
///
/// Holds a borrow of the table plus the node's path and derived macro
/// key; everything else is looked up on demand. A `Node` only exists if
/// its `_EXISTS` marker is present, so holding one proves the path
/// denotes a real node.
#[derive(Debug, Clone)]
pub struct Node<'a> {
    table: &'a MacroTable,
    path: String,
    key: String,
}

impl<'a> Node<'a> {
    /// Construct the node at `path`.
    ///
    /// Returns `Err` for a malformed path (no leading slash) and
    /// `Ok(None)` when the path denotes no node in the table, an
    /// ordinary outcome of traversal, not an error.
    pub fn at(table: &'a MacroTable, path: &str) -> Result<Option<Self>> {
        let key = path_to_key(path)?;
        if !table.contains(&format!("{key}_EXISTS")) {
            return Ok(None);
        }
        Ok(Some(Self {
            table,
            path: path.to_string(),
            key,
        }))
    }

    /// The node's hierarchical path.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The flat macro key under which the node's properties are stored.
    pub fn macro_key(&self) -> &str {
        &self.key
    }

    /// Whether the node's status is "okay".
    pub fn is_okay(&self) -> bool {
        self.table.contains(&format!("{}_STATUS_okay", self.key))
    }

    /// The node's ordinal, as decimal text.
    ///
    /// Every existing node is expected to carry one; absence is a
    /// structural inconsistency in the generated header, surfaced as
    /// [`DtError::MissingOrdinal`].
    pub fn ordinal(&self) -> Result<&'a str> {
        self.attribute("ORD")
            .ok_or_else(|| DtError::missing_ordinal(&self.path))
    }

    /// The canonical device reference identifier, `__device_dts_ord_<N>`.
    ///
    /// This is the sole stable output of resolution: any two references
    /// that reach the same node yield the same identifier.
    pub fn device_ref(&self) -> Result<String> {
        let ord = self.ordinal()?;
        Ok(format!("{DEVICE_REF_PREFIX}{ord}"))
    }

    /// The node's parent, through the `_PARENT` indirection.
    ///
    /// `_PARENT` stores the parent's macro key, not a path, so it is
    /// decoded first. `Ok(None)` means the node has no parent (the root
    /// case). A `_PARENT` key that does not denote an existing node is a
    /// table inconsistency and fails with [`DtError::InvalidNode`] rather
    /// than being silently dropped.
    pub fn parent(&self) -> Result<Option<Node<'a>>> {
        let parent_key = match self.table.get(&format!("{}_PARENT", self.key)) {
            Some(key) => key,
            None => return Ok(None),
        };
        let parent_path = key_to_path(parent_key);
        match Node::at(self.table, &parent_path)? {
            Some(parent) => Ok(Some(parent)),
            None => Err(DtError::invalid_node(
                parent_key,
                format!("parent of '{}' does not exist in the table", self.path),
            )),
        }
    }

    /// Resolve a path relative to this node.
    ///
    /// `.` is a no-op and `..` pops one segment; anything else descends.
    /// Applying `..` at the root clamps silently at the root rather than
    /// failing. The computed path is normalized (single slashes), and the
    /// result is `Ok(None)` if it denotes no node.
    pub fn appending(&self, relative: &str) -> Result<Option<Node<'a>>> {
        let mut components: Vec<&str> =
            self.path.split('/').filter(|c| !c.is_empty()).collect();
        for component in relative.split('/').filter(|c| !c.is_empty()) {
            match component {
                "." => {}
                ".." => {
                    components.pop();
                }
                _ => components.push(component),
            }
        }

        let new_path = if components.is_empty() {
            "/".to_string()
        } else {
            format!("/{}", components.join("/"))
        };
        Node::at(self.table, &new_path)
    }

    /// Look up an arbitrary attribute of the node, `<key>_<attr>`.
    pub fn attribute(&self, attr: &str) -> Option<&'a str> {
        self.table.get(&format!("{}_{}", self.key, attr))
    }
}
