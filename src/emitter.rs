//! Renders a declaration forest into C++ header text.
//!
//! Purely mechanical: forest order is honored verbatim, and every decision
//! (naming, optionality, container shape) was already made by the resolver.

use crate::resolver::{ClassDef, FieldDef, TypeRef};
use std::io::Write;

/// Sanitize a schema key for use as a C++ identifier (replace `-` with `_`).
fn cpp_safe_name(name: &str) -> String {
    name.replace('-', "_")
}

/// Render a type reference as C++ source text.
fn render_type(ty: &TypeRef) -> String {
    match ty {
        TypeRef::Double => "double".to_string(),
        TypeRef::Str => "std::string".to_string(),
        TypeRef::Class(name) => cpp_safe_name(name),
        TypeRef::Sequence(item) => format!("std::vector<{}>", render_type(item)),
        TypeRef::Mapping(value) => {
            format!("std::map<std::string, {}>", render_type(value))
        }
    }
}

/// Render one member declaration, without indentation or trailing `;`.
/// Optional fields wrap their base type in `std::optional`.
fn render_field(field: &FieldDef) -> String {
    let mut type_name: String = render_type(&field.ty);
    if !field.required {
        type_name = format!("std::optional<{type_name}>");
    }
    format!("{type_name} {}", cpp_safe_name(&field.name))
}

/// Write the whole header: generated-file banner, `#pragma once`, includes
/// for the semester JSON runtime plus `<optional>`/`<variant>` (always
/// included, needed or not), then each class in forest order inside the
/// target namespace.
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn emit_to_writer<W: Write>(
    forest: &[ClassDef],
    namespace: &str,
    writer: &mut W,
) -> std::io::Result<()> {
    writeln!(writer, "/**")?;
    writeln!(writer, " * This file is GENERATED! DO NOT EDIT!")?;
    writeln!(writer, " */")?;
    writeln!(writer, "#pragma once")?;
    writeln!(writer)?;
    writeln!(writer, "#include <semester/json.hpp>")?;
    writeln!(writer)?;
    writeln!(writer, "#include <optional>")?;
    writeln!(writer, "#include <variant>")?;
    writeln!(writer)?;
    writeln!(writer, "namespace {namespace} {{")?;
    writeln!(writer)?;

    for class in forest {
        writeln!(writer, "class {} {{", cpp_safe_name(&class.name))?;
        for field in &class.fields {
            writeln!(writer, "    {};", render_field(field))?;
        }
        writeln!(writer, "}};")?;
        writeln!(writer)?;
    }

    writeln!(writer, "}} // namespace {namespace}")?;
    Ok(())
}
