//! Bidirectional codec between hierarchical paths and flat macro keys.

use crate::error::{DtError, Result};

/// Prefix of every node macro key.
pub const NODE_KEY_PREFIX: &str = "DT_N";

/// Prefix of node-label keys.
pub const NODELABEL_KEY_PREFIX: &str = "DT_N_NODELABEL";

/// Prefix of alias keys.
pub const ALIAS_KEY_PREFIX: &str = "DT_N_ALIAS";

/// Token that stands in for `/` inside a macro key.
pub const PATH_SEPARATOR_TOKEN: &str = "_S_";

/// Sanitize one path segment, label, or alias for use inside a macro key.
///
/// Folds `,`, `-` and `@` to `_` and lower-cases, mirroring the upstream
/// header generator. The fold is lossy: `gpio@40000000` and
/// `gpio-40000000` map to the same token. Collisions are an accepted
/// property of the naming convention and are not detected.
fn sanitize(component: &str) -> String {
    component
        .chars()
        .map(|c| match c {
            ',' | '-' | '@' => '_',
            _ => c.to_ascii_lowercase(),
        })
        .collect()
}

/// Encode a hierarchical path as a node macro key.
///
/// `/soc/gpio@40000000` becomes `DT_N_S_soc_S_gpio_40000000`; the root
/// path `/` becomes the bare `DT_N`. Purely syntactic: the table is never
/// consulted, and any slash-leading input encodes successfully.
///
/// Returns [`DtError::MalformedReference`] if the path does not start
/// with `/`.
pub fn path_to_key(path: &str) -> Result<String> {
    if !path.starts_with('/') {
        return Err(DtError::malformed(
            path,
            "devicetree paths must start with a slash",
        ));
    }

    let mut key = String::from(NODE_KEY_PREFIX);
    for component in path.split('/').filter(|c| !c.is_empty()) {
        key.push_str(PATH_SEPARATOR_TOKEN);
        key.push_str(&sanitize(component));
    }
    Ok(key)
}

/// Decode a node macro key back to a path.
///
/// Used when following a `_PARENT` indirection, which stores a macro key
/// rather than a path. Assumes the key was produced by [`path_to_key`] or
/// appears in the table; segments are not re-sanitized, so the decoded
/// path carries the sanitized spelling (`/soc/gpio_40000000`). The bare
/// `DT_N` decodes to the root path `/`.
pub fn key_to_path(key: &str) -> String {
    let trimmed = key.strip_prefix(NODE_KEY_PREFIX).unwrap_or(key);
    let path = trimmed.replace(PATH_SEPARATOR_TOKEN, "/");
    if path.is_empty() {
        "/".to_string()
    } else {
        path
    }
}

/// Derive the macro key under which a node label is stored.
///
/// Returns [`DtError::MalformedReference`] if the label starts with `/`
/// (labels are flat names, not paths).
pub fn label_to_key(label: &str) -> Result<String> {
    if label.starts_with('/') {
        return Err(DtError::malformed(
            label,
            "devicetree labels must not start with a slash",
        ));
    }
    Ok(format!("{}_{}", NODELABEL_KEY_PREFIX, sanitize(label)))
}

/// Derive the macro key under which an alias is stored.
///
/// Returns [`DtError::MalformedReference`] if the alias starts with `/`.
pub fn alias_to_key(alias: &str) -> Result<String> {
    if alias.starts_with('/') {
        return Err(DtError::malformed(
            alias,
            "devicetree aliases must not start with a slash",
        ));
    }
    Ok(format!("{}_{}", ALIAS_KEY_PREFIX, sanitize(alias)))
}
