//! The flat macro namespace.

use std::collections::HashMap;

/// Immutable mapping from macro key to macro value.
///
/// Built once per compilation from the generated header text and queried
/// for every reference afterwards. The table attaches no meaning to its
/// entries; "required key" semantics live in the node layer.
#[derive(Debug, Default)]
pub struct MacroTable {
    defines: HashMap<String, String>,
}

impl MacroTable {
    /// Parse header text into a table.
    ///
    /// Keeps every line of the form `#define DT_<name> <value>` and
    /// silently drops everything else (include guards, function-like
    /// macros, non-devicetree defines). Construction never fails.
    pub fn parse(input: &str) -> Self {
        let mut defines = HashMap::new();
        for line in input.lines() {
            if let Some((name, value)) = parse_define(line) {
                defines.insert(name.to_string(), value.to_string());
            }
        }
        Self { defines }
    }

    /// Look up a macro value by key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.defines.get(key).map(String::as_str)
    }

    /// Check whether a key is defined.
    pub fn contains(&self, key: &str) -> bool {
        self.defines.contains_key(key)
    }

    /// Iterate over all defined keys.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.defines.keys().map(String::as_str)
    }

    /// Number of entries in the table.
    pub fn len(&self) -> usize {
        self.defines.len()
    }

    /// Check whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.defines.is_empty()
    }
}

/// Split one header line into a `(name, value)` pair, if it is a
/// devicetree define. The name must start with `DT_` and contain only
/// word characters; the value is the rest of the line, untouched apart
/// from surrounding whitespace.
fn parse_define(line: &str) -> Option<(&str, &str)> {
    let rest = line.trim().strip_prefix("#define")?;
    // "#define" must be its own token
    if !rest.starts_with(|c: char| c.is_whitespace()) {
        return None;
    }
    let rest = rest.trim_start();
    let name_end = rest.find(|c: char| c.is_whitespace())?;
    let (name, value) = rest.split_at(name_end);
    let value = value.trim();
    if value.is_empty() || !is_dt_name(name) {
        return None;
    }
    Some((name, value))
}

fn is_dt_name(name: &str) -> bool {
    match name.strip_prefix("DT_") {
        Some(rest) => {
            !rest.is_empty() && rest.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_')
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic_defines() {
        let input = "\
#define DT_N_S_soc_EXISTS 1
#define DT_N_S_soc_ORD 1
#define DT_N_S_soc_PATH \"/soc\"
";
        let table = MacroTable::parse(input);
        assert_eq!(table.len(), 3);
        assert_eq!(table.get("DT_N_S_soc_ORD"), Some("1"));
        assert_eq!(table.get("DT_N_S_soc_PATH"), Some("\"/soc\""));
        assert!(table.contains("DT_N_S_soc_EXISTS"));
    }

    #[test]
    fn test_ignores_unrelated_lines() {
        let input = "\
#ifndef DEVICETREE_GENERATED_H
#define DEVICETREE_GENERATED_H
#define DT_N_S_soc_EXISTS 1
#define CONFIG_GPIO 1
#include <something.h>
/* comment */
#endif
";
        let table = MacroTable::parse(input);
        // Only the DT_ define with a value survives
        assert_eq!(table.len(), 1);
        assert!(table.contains("DT_N_S_soc_EXISTS"));
        assert!(!table.contains("DEVICETREE_GENERATED_H"));
        assert!(!table.contains("CONFIG_GPIO"));
    }

    #[test]
    fn test_value_is_rest_of_line() {
        let input = "#define DT_N_S_soc_COMPAT \"vendor,soc\" /* trailing */";
        let table = MacroTable::parse(input);
        assert_eq!(
            table.get("DT_N_S_soc_COMPAT"),
            Some("\"vendor,soc\" /* trailing */")
        );
    }

    #[test]
    fn test_define_without_value_ignored() {
        let table = MacroTable::parse("#define DT_N_S_soc_EXISTS\n");
        assert!(table.is_empty());
    }

    #[test]
    fn test_leading_whitespace_accepted() {
        let table = MacroTable::parse("   #define DT_N_S_soc_ORD 7\n");
        assert_eq!(table.get("DT_N_S_soc_ORD"), Some("7"));
    }

    #[test]
    fn test_empty_input_is_valid() {
        let table = MacroTable::parse("");
        assert!(table.is_empty());
        assert_eq!(table.get("DT_N_S_soc_ORD"), None);
    }

    #[test]
    fn test_name_must_be_word_characters() {
        // "DT_N(x)" is a function-like macro, not a node define
        let table = MacroTable::parse("#define DT_N(x) something\n");
        assert!(table.is_empty());
    }
}
