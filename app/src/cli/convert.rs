//! Batch conversion command.

use anyhow::{Context, Result};
use clap::Parser;
use srs_convert::{convert_dir, SchemaVariant};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "srsconv")]
#[command(about = "Convert Clash rule-provider YAML into sing-box rule-set JSON", long_about = None)]
pub struct ConvertArgs {
    /// Directory scanned recursively for rule-provider YAML files
    #[arg(value_name = "INPUT_DIR")]
    pub input_dir: PathBuf,

    /// Root directory for converted rule-sets
    #[arg(value_name = "OUTPUT_DIR")]
    pub output_dir: PathBuf,

    /// Source label; output is mirrored under OUTPUT_DIR/SOURCE_NAME/
    #[arg(value_name = "SOURCE_NAME")]
    pub source_name: String,

    /// Rule-set source schema version (2: category fields, 3: type/payload entries)
    #[arg(long = "schema-version", value_name = "N", default_value_t = 2)]
    pub schema_version: u8,
}

pub fn run(args: ConvertArgs) -> Result<()> {
    let variant = SchemaVariant::from_version(args.schema_version).with_context(|| {
        format!(
            "unsupported schema version {} (expected 2 or 3)",
            args.schema_version
        )
    })?;

    let report = convert_dir(
        &args.input_dir,
        &args.output_dir,
        &args.source_name,
        variant,
    );

    println!(
        "Found {} YAML files in {}",
        report.discovered,
        args.input_dir.display()
    );
    println!(
        "Conversion complete: {} succeeded, {} failed",
        report.converted.len(),
        report.failed.len()
    );
    println!(
        "Successfully converted {} rule files from {}",
        report.converted.len(),
        args.source_name
    );

    // Per-file failures are operator information, not a batch error.
    Ok(())
}
