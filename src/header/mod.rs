//! Parser for the generated devicetree macro header.
//!
//! The upstream hardware-description compiler flattens the devicetree into
//! a C header of `#define` lines. There is no nested structure and no
//! pointers in that file: the whole topology is encoded in the *names* of
//! the macros. Only lines of the exact shape below are meaningful; every
//! other preprocessor line is ignored.
//!
//! ```text
//! line  = "#define" ws name ws value
//! name  = "DT_" (letter | digit | '_')+
//! value = rest of line (kept verbatim, never interpreted here)
//! ```
//!
//! # Key-naming contract
//!
//! The resolver depends on the fixed naming conventions of the generated
//! header:
//!
//! | Key | Meaning |
//! |-----|---------|
//! | `<key>_EXISTS` | Node existence marker (value ignored) |
//! | `<key>_ORD` | Node ordinal (decimal text) |
//! | `<key>_PATH` | Double-quoted hierarchical path string |
//! | `<key>_PARENT` | Parent's macro key (a key, not a path) |
//! | `<key>_STATUS_okay` | Presence-only "status = okay" marker |
//! | `<key>_<attr>` | Arbitrary node attribute |
//! | `DT_N_NODELABEL_<label>` | Value is the target node's macro key |
//! | `DT_N_ALIAS_<alias>` | Value is the target node's macro key |
//!
//! Node keys themselves are built from paths by [`path_to_key`]:
//! `/soc/gpio@40000000` becomes `DT_N_S_soc_S_gpio_40000000`. The
//! sanitization step folds `,`, `-` and `@` to `_` and lower-cases, so
//! two distinct paths can collide on one key; this mirrors the upstream
//! convention and is not detected here.

mod key;
mod table;

pub use key::{
    alias_to_key, key_to_path, label_to_key, path_to_key, ALIAS_KEY_PREFIX,
    NODELABEL_KEY_PREFIX, NODE_KEY_PREFIX, PATH_SEPARATOR_TOKEN,
};
pub use table::MacroTable;

use crate::error::Result;

/// Parse generated header text into a [`MacroTable`].
///
/// Never fails: an input with no matching `#define` lines yields an empty
/// table, which is still valid (useful before the header has been
/// generated at all).
pub fn parse(input: &str) -> MacroTable {
    MacroTable::parse(input)
}

/// Parse a generated header file.
#[cfg(feature = "cli")]
pub fn parse_file(path: &std::path::Path) -> Result<MacroTable> {
    let content = std::fs::read_to_string(path).map_err(|e| crate::error::DtError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;
    Ok(parse(&content))
}
