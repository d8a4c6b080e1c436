//! Accessor code generation.
//!
//! The downstream consumer of resolution is generated source text: one
//! declaration per okay node, named by the node's canonical identifier.
//! The emitted file declares the device symbols the platform's own build
//! placed in the final image, so user code can reference a node the
//! resolver found without spelling raw ordinals anywhere.

use crate::error::Result;
use crate::header::MacroTable;
use crate::tree::okay_nodes;

/// Banner written at the top of every generated file.
const GENERATED_BANNER: &str = "// Generated accessor declarations - do not edit.\n";

/// Render accessor declarations for every okay node in the table.
///
/// Emits an `extern "C"` block with one `pub static` per okay node, typed
/// by `device_type` (a type path meaningful to the consuming crate) and
/// preceded by a comment naming the node's path. Nodes are sorted by path
/// so repeated generation of the same table is byte-identical.
pub fn render_accessors(table: &MacroTable, device_type: &str) -> Result<String> {
    let nodes = okay_nodes(table)?;

    let mut out = String::from(GENERATED_BANNER);
    if nodes.is_empty() {
        return Ok(out);
    }

    out.push_str("\nextern \"C\" {\n");
    for node in &nodes {
        let device_ref = node.device_ref()?;
        out.push_str(&format!("    /// Node: {}\n", node.path()));
        out.push_str(&format!("    pub static {device_ref}: {device_type};\n"));
    }
    out.push_str("}\n");
    Ok(out)
}

/// Render accessors and write them to a file.
#[cfg(feature = "cli")]
pub fn write_accessors(
    path: &std::path::Path,
    table: &MacroTable,
    device_type: &str,
) -> Result<()> {
    let contents = render_accessors(table, device_type)?;
    std::fs::write(path, contents).map_err(|e| crate::error::DtError::FileWriteError {
        path: path.display().to_string(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::header::MacroTable;

    fn fixture() -> MacroTable {
        MacroTable::parse(
            "\
#define DT_N_S_leds_S_led_0_EXISTS 1
#define DT_N_S_leds_S_led_0_ORD 9
#define DT_N_S_leds_S_led_0_PATH \"/leds/led-0\"
#define DT_N_S_leds_S_led_0_STATUS_okay 1
#define DT_N_S_soc_S_gpio_40000000_EXISTS 1
#define DT_N_S_soc_S_gpio_40000000_ORD 5
#define DT_N_S_soc_S_gpio_40000000_PATH \"/soc/gpio@40000000\"
#define DT_N_S_soc_S_gpio_40000000_STATUS_okay 1
#define DT_N_S_soc_S_uart_40001000_EXISTS 1
#define DT_N_S_soc_S_uart_40001000_ORD 6
#define DT_N_S_soc_S_uart_40001000_PATH \"/soc/uart@40001000\"
",
        )
    }

    #[test]
    fn test_render_declares_okay_nodes() {
        let table = fixture();
        let out = render_accessors(&table, "Device").unwrap();
        assert!(out.contains("pub static __device_dts_ord_5: Device;"));
        assert!(out.contains("pub static __device_dts_ord_9: Device;"));
        assert!(out.contains("/// Node: /soc/gpio@40000000"));
    }

    #[test]
    fn test_render_skips_disabled_nodes() {
        let table = fixture();
        let out = render_accessors(&table, "Device").unwrap();
        // uart is present in the table but not okay
        assert!(!out.contains("__device_dts_ord_6"));
    }

    #[test]
    fn test_render_is_deterministic() {
        let table = fixture();
        let first = render_accessors(&table, "Device").unwrap();
        let second = render_accessors(&table, "Device").unwrap();
        assert_eq!(first, second);
        // Sorted by path: /leds/led-0 before /soc/gpio@40000000
        let led = first.find("__device_dts_ord_9").unwrap();
        let gpio = first.find("__device_dts_ord_5").unwrap();
        assert!(led < gpio);
    }

    #[test]
    fn test_render_empty_table() {
        let table = MacroTable::parse("");
        let out = render_accessors(&table, "Device").unwrap();
        assert!(out.starts_with("// Generated"));
        assert!(!out.contains("extern"));
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_write_accessors() {
        let table = fixture();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("devices.rs");
        write_accessors(&path, &table, "zephyr::Device").unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("pub static __device_dts_ord_5: zephyr::Device;"));
    }
}
