//! Binary to generate a C++ header from a JSON Schema file.
//!
//! Usage: `json-schema-cpp <schema> --namespace <ns> --out <file> --root-typename <name>`
//!
//! Prints nothing to stdout on success; exits non-zero with a message on
//! stderr for any error.

use std::path::PathBuf;
use std::process;

use clap::Parser;
use json_schema_cpp::generate_from_file;

#[derive(Debug, Parser)]
#[command(name = "json-schema-cpp", version, about)]
struct Cli {
    /// Path to a JSON Schema file
    schema: PathBuf,

    /// C++ namespace prefix
    #[arg(long)]
    namespace: String,

    /// The file to write
    #[arg(long)]
    out: PathBuf,

    /// The name of the root type
    #[arg(long)]
    root_typename: String,
}

fn main() {
    let cli: Cli = Cli::parse();

    if let Err(e) = generate_from_file(&cli.schema, &cli.out, &cli.root_typename, &cli.namespace) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
