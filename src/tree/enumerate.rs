//! Full-namespace enumeration.
//!
//! Discovers every node in the table by scanning for `_ORD` markers.
//! Used to drive exhaustive accessor generation; too heavy to run per
//! reference, but the table never changes mid-compilation, so callers
//! may cache the result.

use crate::error::{DtError, Result};
use crate::header::MacroTable;

use super::Node;

/// Enumerate every node in the table, sorted by path.
///
/// Each key ending in `_ORD` names one node; its `_PATH` entry (required,
/// double-quoted) gives the literal path the node is rebuilt from. A
/// missing `_PATH`, an unquoted path value, or a path that reconstructs
/// to no node all indicate an inconsistent header and fail hard.
///
/// No status filtering happens here; see [`okay_nodes`].
pub fn all_nodes(table: &MacroTable) -> Result<Vec<Node<'_>>> {
    let mut nodes = Vec::new();
    for key in table.keys() {
        let base = match key.strip_suffix("_ORD") {
            Some(base) => base,
            None => continue,
        };
        let path_key = format!("{base}_PATH");
        let quoted = table.get(&path_key).ok_or_else(|| {
            DtError::invalid_node(base, format!("node has no path entry '{path_key}'"))
        })?;
        let path = unquoted(&path_key, quoted)?;
        match Node::at(table, path)? {
            Some(node) => nodes.push(node),
            None => {
                return Err(DtError::invalid_node(
                    base,
                    format!("path '{path}' does not denote an existing node"),
                ));
            }
        }
    }
    nodes.sort_by(|a, b| a.path().cmp(b.path()));
    Ok(nodes)
}

/// Enumerate the nodes whose status is "okay", sorted by path.
///
/// This is the set the generator emits accessors for.
pub fn okay_nodes(table: &MacroTable) -> Result<Vec<Node<'_>>> {
    let mut nodes = all_nodes(table)?;
    nodes.retain(Node::is_okay);
    Ok(nodes)
}

/// Strip the surrounding double quotes from a `_PATH` value.
fn unquoted<'v>(key: &str, value: &'v str) -> Result<&'v str> {
    value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .ok_or_else(|| {
            DtError::malformed(
                key,
                format!("path value should be quoted, but was '{value}'"),
            )
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::header::MacroTable;

    fn fixture() -> MacroTable {
        MacroTable::parse(
            "\
#define DT_N_EXISTS 1
#define DT_N_ORD 0
#define DT_N_PATH \"/\"
#define DT_N_STATUS_okay 1
#define DT_N_S_soc_EXISTS 1
#define DT_N_S_soc_ORD 1
#define DT_N_S_soc_PATH \"/soc\"
#define DT_N_S_soc_STATUS_okay 1
#define DT_N_S_soc_S_gpio_40000000_EXISTS 1
#define DT_N_S_soc_S_gpio_40000000_ORD 5
#define DT_N_S_soc_S_gpio_40000000_PATH \"/soc/gpio@40000000\"
#define DT_N_S_soc_S_gpio_40000000_STATUS_okay 1
#define DT_N_S_soc_S_uart_40001000_EXISTS 1
#define DT_N_S_soc_S_uart_40001000_ORD 6
#define DT_N_S_soc_S_uart_40001000_PATH \"/soc/uart@40001000\"
#define DT_N_NODELABEL_led0 DT_N_S_soc_S_gpio_40000000
",
        )
    }

    #[test]
    fn test_all_nodes_finds_every_ordinal() {
        let table = fixture();
        let nodes = all_nodes(&table).unwrap();
        let paths: Vec<&str> = nodes.iter().map(Node::path).collect();
        assert_eq!(
            paths,
            vec!["/", "/soc", "/soc/gpio@40000000", "/soc/uart@40001000"]
        );
    }

    #[test]
    fn test_okay_nodes_filters_status() {
        let table = fixture();
        let nodes = okay_nodes(&table).unwrap();
        let paths: Vec<&str> = nodes.iter().map(Node::path).collect();
        // uart lacks _STATUS_okay and is excluded
        assert_eq!(paths, vec!["/", "/soc", "/soc/gpio@40000000"]);
    }

    #[test]
    fn test_enumeration_is_stable() {
        let table = fixture();
        let first: Vec<String> = all_nodes(&table)
            .unwrap()
            .iter()
            .map(|n| n.path().to_string())
            .collect();
        let second: Vec<String> = all_nodes(&table)
            .unwrap()
            .iter()
            .map(|n| n.path().to_string())
            .collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_missing_path_entry_fails() {
        let table = MacroTable::parse(
            "\
#define DT_N_S_soc_EXISTS 1
#define DT_N_S_soc_ORD 1
",
        );
        assert!(matches!(
            all_nodes(&table).unwrap_err(),
            DtError::InvalidNode { .. }
        ));
    }

    #[test]
    fn test_unquoted_path_value_fails() {
        let table = MacroTable::parse(
            "\
#define DT_N_S_soc_EXISTS 1
#define DT_N_S_soc_ORD 1
#define DT_N_S_soc_PATH /soc
",
        );
        assert!(matches!(
            all_nodes(&table).unwrap_err(),
            DtError::MalformedReference { .. }
        ));
    }

    #[test]
    fn test_ordinal_without_node_fails() {
        let table = MacroTable::parse(
            "\
#define DT_N_S_soc_ORD 1
#define DT_N_S_soc_PATH \"/soc\"
",
        );
        // _ORD present but no _EXISTS: the namespace is inconsistent
        assert!(matches!(
            all_nodes(&table).unwrap_err(),
            DtError::InvalidNode { .. }
        ));
    }

    #[test]
    fn test_empty_table_enumerates_nothing() {
        let table = MacroTable::parse("");
        assert!(all_nodes(&table).unwrap().is_empty());
    }
}
