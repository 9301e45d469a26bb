//! Generate C++ header classes from JSON Schema.
//!
//! A schema document is walked once by the resolver, which builds an ordered
//! forest of class descriptors; the emitter then renders that forest into
//! one `semester`-targeting C++ header. Batch and all-or-nothing: any
//! structural problem aborts the run with no output written.

mod emitter;
mod error;
mod resolver;
mod schema;

pub use emitter::emit_to_writer;
pub use error::CppGenError;
pub use resolver::{ClassDef, FieldDef, Resolver, TypeRef, resolve};
pub use schema::SchemaNode;

use std::io::Write;
use std::path::Path;

/// Generate a C++ header from a JSON Schema string and write it to `writer`.
///
/// The writer can be any type implementing `Write`, such as `File`,
/// `Vec<u8>`, or `Cursor<Vec<u8>>`, enabling easy unit testing without file
/// system interaction.
///
/// # Errors
///
/// Returns `CppGenError` if the schema JSON is invalid, the root is not an
/// object, a schema node has an unsupported type tag, or writing fails.
pub fn generate_to_writer<W: Write>(
    schema_json: &str,
    root_typename: &str,
    namespace: &str,
    writer: &mut W,
) -> Result<(), CppGenError> {
    let document: serde_json::Value = serde_json::from_str(schema_json)?;
    let forest: Vec<ClassDef> = resolve(&document, root_typename)?;
    emit_to_writer(&forest, namespace, writer)?;
    Ok(())
}

/// Generate a C++ header from a JSON Schema file and write it to an output
/// file.
///
/// The header is rendered fully in memory before the output file is
/// created, so a failed run never leaves a partial output file behind.
///
/// # Errors
///
/// Returns `CppGenError` if reading the input file fails, the schema is
/// invalid, resolution fails, or writing the output file fails.
pub fn generate_from_file(
    input_path: impl AsRef<Path>,
    output_path: impl AsRef<Path>,
    root_typename: &str,
    namespace: &str,
) -> Result<(), CppGenError> {
    let schema_json: String = std::fs::read_to_string(input_path)?;
    let mut rendered: Vec<u8> = Vec::new();
    generate_to_writer(&schema_json, root_typename, namespace, &mut rendered)?;
    std::fs::write(output_path, rendered)?;
    Ok(())
}
