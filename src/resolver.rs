//! Recursive schema-to-type resolver and the declaration model it builds.
//!
//! Walks a schema document depth-first, classifying each node by its `type`
//! tag, and accumulates an ordered forest of class descriptors. All naming,
//! required/optional, and map-vs-object decisions are made here; the emitter
//! only renders what this module already decided.

use crate::error::CppGenError;
use crate::schema::SchemaNode;

/// Reference to the C++ type of one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeRef {
    /// Schema `number`; rendered as `double`.
    Double,
    /// Schema `string`; rendered as `std::string`.
    Str,
    /// A class in the forest, by (unsanitized) name.
    Class(String),
    /// Rendered as `std::vector<...>`.
    Sequence(Box<TypeRef>),
    /// Rendered as `std::map<std::string, ...>`.
    Mapping(Box<TypeRef>),
}

/// One class member. Created once during resolution, immutable thereafter.
/// `name` is the raw schema key; sanitization happens at emission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDef {
    pub name: String,
    pub ty: TypeRef,
    pub required: bool,
}

/// One emitted class: the root type, or a synthetic `_<key>_type`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassDef {
    pub name: String,
    pub fields: Vec<FieldDef>,
}

/// Synthetic class name for an anonymous nested schema under a property key.
fn synthetic_name(key: &str) -> String {
    format!("_{key}_type")
}

/// Forest accumulator for one resolution pass.
///
/// Owned by the caller of [`resolve`] and threaded by `&mut self` through
/// the recursion, so the forest's lifetime is independent of any single
/// recursive call. Append-only: a class descriptor is never removed.
#[derive(Debug, Default)]
pub struct Resolver {
    forest: Vec<ClassDef>,
}

impl Resolver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Consumes the resolver, yielding the classes in discovery order.
    #[must_use]
    pub fn into_forest(self) -> Vec<ClassDef> {
        self.forest
    }

    /// Object-resolution rule: appends one class for `schema` under `name`
    /// and resolves one field per property, in the schema's own property
    /// order. Returns the class's forest index.
    ///
    /// The class slot is appended before its fields are resolved (pre-order
    /// discovery), so a container always precedes the classes it depends on.
    ///
    /// # Errors
    ///
    /// Returns `CppGenError::Structural` for unsupported type tags and
    /// `CppGenError::Json` if an `additionalProperties` sub-schema cannot
    /// be deserialized.
    pub fn resolve_object(
        &mut self,
        schema: &SchemaNode,
        name: &str,
    ) -> Result<usize, CppGenError> {
        let index: usize = self.forest.len();
        self.forest.push(ClassDef {
            name: name.to_string(),
            fields: Vec::new(),
        });

        let mut fields: Vec<FieldDef> = Vec::new();
        if let Some(ref properties) = schema.properties {
            for (key, prop_schema) in properties {
                fields.push(self.resolve_property(key, prop_schema, schema.is_required(key))?);
            }
        }
        self.forest[index].fields = fields;
        Ok(index)
    }

    /// Property-resolution rule: dispatch on the sub-schema's type tag.
    ///
    /// Array and map fields come back with `required` forced to `true`
    /// regardless of the caller-supplied flag; scalar and fixed-shape
    /// object fields pass it through unchanged.
    ///
    /// # Errors
    ///
    /// Returns `CppGenError::Structural` when the type tag is missing or
    /// outside {number, string, array, object}, or when an array schema
    /// has no `items` node.
    pub fn resolve_property(
        &mut self,
        key: &str,
        schema: &SchemaNode,
        required: bool,
    ) -> Result<FieldDef, CppGenError> {
        let type_tag: &str = schema.r#type.as_deref().unwrap_or("");

        match type_tag {
            "number" => Ok(FieldDef {
                name: key.to_string(),
                ty: TypeRef::Double,
                required,
            }),
            "string" => Ok(FieldDef {
                name: key.to_string(),
                ty: TypeRef::Str,
                required,
            }),
            "array" => {
                let Some(ref items) = schema.items else {
                    return Err(CppGenError::Structural(format!(
                        "array property {key:?} has no \"items\" schema"
                    )));
                };
                let class_name: String = synthetic_name(key);
                self.resolve_object(items, &class_name)?;
                Ok(FieldDef {
                    name: key.to_string(),
                    ty: TypeRef::Sequence(Box::new(TypeRef::Class(class_name))),
                    // Arrays are never wrapped as optional.
                    required: true,
                })
            }
            "object" => self.resolve_object_property(key, schema, required),
            other => Err(CppGenError::Structural(format!(
                "unsupported schema type {other:?} for property {key:?} \
                 (supported: number, string, array, object)"
            ))),
        }
    }

    /// The `object` arm of the property-resolution rule: either a
    /// fixed-shape nested class or, when `additionalProperties` is present,
    /// an open-ended string-keyed map.
    fn resolve_object_property(
        &mut self,
        key: &str,
        schema: &SchemaNode,
        required: bool,
    ) -> Result<FieldDef, CppGenError> {
        let class_name: String = synthetic_name(key);

        let Some(ref additional) = schema.additional_properties else {
            // A simple single property.
            self.resolve_object(schema, &class_name)?;
            return Ok(FieldDef {
                name: key.to_string(),
                ty: TypeRef::Class(class_name),
                required,
            });
        };

        // This one is a map of properties. When the additionalProperties
        // sub-schema carries a key literally named "object", the class is
        // built from the outer property schema; this mirrors the original
        // generator's check verbatim (a `type == "object"` value does NOT
        // take this branch).
        let value_ty: TypeRef = if additional
            .as_object()
            .is_some_and(|map| map.contains_key("object"))
        {
            self.resolve_object(schema, &class_name)?;
            TypeRef::Class(class_name)
        } else {
            let value_schema: SchemaNode = serde_json::from_value(additional.clone())?;
            self.resolve_property(key, &value_schema, true)?.ty
        };

        Ok(FieldDef {
            name: key.to_string(),
            ty: TypeRef::Mapping(Box::new(value_ty)),
            // Maps are never wrapped as optional.
            required: true,
        })
    }
}

/// Entry operation: resolves a whole schema document into a declaration
/// forest under the caller-supplied root type name.
///
/// # Errors
///
/// Returns `CppGenError::Structural` if `document` is not a JSON object,
/// or any error the object-resolution rule produces.
pub fn resolve(
    document: &serde_json::Value,
    root_name: &str,
) -> Result<Vec<ClassDef>, CppGenError> {
    if !document.is_object() {
        return Err(CppGenError::Structural(
            "root schema node must be an object".to_string(),
        ));
    }
    let schema: SchemaNode = serde_json::from_value(document.clone())?;

    let mut resolver: Resolver = Resolver::new();
    resolver.resolve_object(&schema, root_name)?;
    Ok(resolver.into_forest())
}
