//! Whole-program symbol registry.
//!
//! [`ScriptRegistry`] holds the classes (fields and methods) visible to a
//! compilation unit. It is populated before analysis starts and analysis
//! only ever holds a shared reference, so a registry of built-ins can be
//! reused across independent compilations.

use rustc_hash::FxHashMap;

use crate::types::{Primitive, TypeId, ValueType};

/// A field declared on a class.
#[derive(Debug, Clone)]
pub struct FieldEntry {
    /// Field name.
    pub name: String,
    /// Field type.
    pub ty: ValueType,
}

/// A method declared on a class.
#[derive(Debug, Clone)]
pub struct MethodEntry {
    /// Method name.
    pub name: String,
    /// Parameter types, in declaration order.
    pub params: Vec<ValueType>,
    /// Return type.
    pub return_type: ValueType,
}

/// A registered class.
#[derive(Debug, Clone, Default)]
pub struct ClassEntry {
    /// The qualified class name.
    pub name: String,
    /// Declared fields.
    pub fields: Vec<FieldEntry>,
    /// Declared methods. Overloads are distinguished by arity.
    pub methods: Vec<MethodEntry>,
}

impl ClassEntry {
    /// Create an empty class with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
            methods: Vec::new(),
        }
    }

    /// The id computed from this class's name.
    pub fn type_id(&self) -> TypeId {
        TypeId::of(&self.name)
    }

    /// Add a field, builder-style.
    pub fn with_field(mut self, name: impl Into<String>, ty: ValueType) -> Self {
        self.fields.push(FieldEntry {
            name: name.into(),
            ty,
        });
        self
    }

    /// Add a method, builder-style.
    pub fn with_method(
        mut self,
        name: impl Into<String>,
        params: Vec<ValueType>,
        return_type: ValueType,
    ) -> Self {
        self.methods.push(MethodEntry {
            name: name.into(),
            params,
            return_type,
        });
        self
    }

    /// Find a field by name.
    pub fn find_field(&self, name: &str) -> Option<&FieldEntry> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Find a method by name and argument count.
    pub fn find_method(&self, name: &str, argc: usize) -> Option<&MethodEntry> {
        self.methods
            .iter()
            .find(|m| m.name == name && m.params.len() == argc)
    }

    /// Find any method with this name, regardless of arity. Distinguishes a
    /// wrong argument count from a name that doesn't exist at all.
    pub fn find_method_named(&self, name: &str) -> Option<&MethodEntry> {
        self.methods.iter().find(|m| m.name == name)
    }
}

/// The symbol registry for one compilation unit.
///
/// Classes are stored by [`TypeId`]; lookups during analysis never mutate
/// the registry.
#[derive(Debug, Default)]
pub struct ScriptRegistry {
    classes: FxHashMap<TypeId, ClassEntry>,
    string_type: Option<TypeId>,
}

impl ScriptRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with the built-in `String` class registered.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        let string = ClassEntry::new("String")
            .with_method("length", vec![], ValueType::Primitive(Primitive::Int))
            .with_method("toString", vec![], ValueType::reference("String"));
        registry.register_class(string);
        registry
    }

    /// Register a class. Re-registering a name replaces the previous entry.
    pub fn register_class(&mut self, class: ClassEntry) -> TypeId {
        let id = class.type_id();
        if class.name == "String" {
            self.string_type = Some(id);
        }
        self.classes.insert(id, class);
        id
    }

    /// Look up a class by id.
    pub fn get_class(&self, id: TypeId) -> Option<&ClassEntry> {
        self.classes.get(&id)
    }

    /// The id of the registered `String` class, if any.
    ///
    /// String literals cannot be typed without it.
    pub fn string_type(&self) -> Option<TypeId> {
        self.string_type
    }

    /// The display name for a type, for error messages.
    pub fn type_name(&self, ty: ValueType) -> String {
        match ty {
            ValueType::Primitive(p) => p.name().to_string(),
            ValueType::Reference(id) => self
                .get_class(id)
                .map(|c| c.name.clone())
                .unwrap_or_else(|| format!("{id}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_and_lookup() {
        let mut registry = ScriptRegistry::new();
        let id = registry.register_class(
            ClassEntry::new("Widget").with_field("name", ValueType::reference("String")),
        );

        let class = registry.get_class(id).unwrap();
        assert_eq!(class.name, "Widget");
        assert!(class.find_field("name").is_some());
        assert!(class.find_field("missing").is_none());
    }

    #[test]
    fn method_lookup_by_arity() {
        let class = ClassEntry::new("Widget")
            .with_method("resize", vec![ValueType::Primitive(Primitive::Int)], ValueType::reference("Widget"))
            .with_method(
                "resize",
                vec![
                    ValueType::Primitive(Primitive::Int),
                    ValueType::Primitive(Primitive::Int),
                ],
                ValueType::reference("Widget"),
            );

        assert!(class.find_method("resize", 1).is_some());
        assert!(class.find_method("resize", 2).is_some());
        assert!(class.find_method("resize", 3).is_none());
        assert!(class.find_method_named("resize").is_some());
        assert!(class.find_method_named("rotate").is_none());
    }

    #[test]
    fn builtins_register_string() {
        let registry = ScriptRegistry::with_builtins();
        let id = registry.string_type().unwrap();
        assert_eq!(id, TypeId::of("String"));
        assert!(registry.get_class(id).unwrap().find_method("length", 0).is_some());
    }

    #[test]
    fn type_name_resolution() {
        let registry = ScriptRegistry::with_builtins();
        assert_eq!(
            registry.type_name(ValueType::Primitive(Primitive::Int)),
            "int"
        );
        assert_eq!(registry.type_name(ValueType::reference("String")), "String");
        // Unregistered references fall back to the id hex.
        let unknown = registry.type_name(ValueType::reference("Ghost"));
        assert!(unknown.starts_with("0x"));
    }
}
