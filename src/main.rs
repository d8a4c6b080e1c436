//! Dtref - Devicetree Reference Resolver
//!
//! Resolves symbolic devicetree references against a generated macro
//! header and emits accessor declarations for code generation.
//!
//! # Usage
//!
//! ```bash
//! dtref devicetree_generated.h resolve led0
//! dtref devicetree_generated.h list
//! dtref devicetree_generated.h generate -o devices.rs --device-type zephyr::Device
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use dtref_core::{
    codegen, error::Result, header, resolve::resolve_device_ref, tree, RefKind,
};

/// Devicetree reference resolver
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the generated devicetree macro header
    #[arg(value_name = "HEADER_FILE")]
    header_file: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Resolve one reference to its canonical identifier
    Resolve {
        /// The reference to resolve
        reference: String,

        /// How to interpret the reference
        #[arg(short, long, value_enum, default_value = "auto")]
        kind: RefKind,
    },

    /// List every okay node with its identifier
    List,

    /// Write accessor declarations for all okay nodes
    Generate {
        /// Output file for the generated declarations
        #[arg(short, long, value_name = "FILE")]
        output: PathBuf,

        /// Type path used for the generated statics
        #[arg(short, long, default_value = "Device")]
        device_type: String,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Parse the generated header
    let table = header::parse_file(&args.header_file)?;

    match args.command {
        Command::Resolve { reference, kind } => {
            let ident = resolve_device_ref(&table, kind, &reference)?;
            println!("{ident}");
        }
        Command::List => {
            for node in tree::okay_nodes(&table)? {
                println!("{}\t{}", node.path(), node.device_ref()?);
            }
        }
        Command::Generate {
            output,
            device_type,
        } => {
            codegen::write_accessors(&output, &table, &device_type)?;
        }
    }

    Ok(())
}
