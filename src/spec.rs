use crate::access::AccessType;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::path::PathBuf;

/// Resolves the identifier a value contributes to the generated enum.
///
/// This is the only thing that differs between enum flavours; validation
/// and generation are shared and only ever see the resolved names.
pub trait ValueName {
    fn value_name(&self) -> Cow<'_, str>;
}

impl ValueName for String {
    fn value_name(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.as_str())
    }
}

impl ValueName for &str {
    fn value_name(&self) -> Cow<'_, str> {
        Cow::Borrowed(*self)
    }
}

/// A name carrying a payload the generator never looks at
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedPair<T> {
    pub name: String,
    pub value: T,
}

impl<T> NamedPair<T> {
    pub fn new(name: impl Into<String>, value: T) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

impl<T> ValueName for NamedPair<T> {
    fn value_name(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.name.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    #[serde(default = "default_alpha")]
    pub a: f32,
}

fn default_alpha() -> f32 {
    1.0
}

/// Payloads of the pair-based enum kinds
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Color(Color),
    Value(toml::Value),
}

/// Kinds of referenced assets whose names become enum values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObjectKind {
    AudioClip,
    Prefab,
    Sprite,
}

/// A value named after a referenced asset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectRef {
    pub kind: ObjectKind,
    pub path: PathBuf,
}

impl ObjectRef {
    pub fn new(kind: ObjectKind, path: impl Into<PathBuf>) -> Self {
        Self {
            kind,
            path: path.into(),
        }
    }

    /// Name of the asset as the host shows it: its file stem
    pub fn display_name(&self) -> Cow<'_, str> {
        self.path
            .file_stem()
            .map(|stem| stem.to_string_lossy())
            .unwrap_or(Cow::Borrowed(""))
    }
}

impl ValueName for ObjectRef {
    fn value_name(&self) -> Cow<'_, str> {
        let display = self.display_name();
        if display.chars().any(char::is_whitespace) {
            Cow::Owned(display.chars().filter(|c| !c.is_whitespace()).collect())
        } else {
            display
        }
    }
}

/// One entry of an enum asset's value list
#[derive(Debug, Clone, PartialEq)]
pub enum ValueEntry {
    Plain(String),
    Pair(NamedPair<Payload>),
    Referenced(ObjectRef),
}

impl ValueName for ValueEntry {
    fn value_name(&self) -> Cow<'_, str> {
        match self {
            ValueEntry::Plain(name) => name.value_name(),
            ValueEntry::Pair(pair) => pair.value_name(),
            ValueEntry::Referenced(object) => object.value_name(),
        }
    }
}

/// Everything needed to validate and render one enum declaration
#[derive(Debug, Clone, PartialEq)]
pub struct EnumSpecification<V = ValueEntry> {
    /// Output file stem, without extension
    pub file_name: String,
    /// Dotted namespace; empty means none
    pub namespace_name: String,
    /// Enclosing class; empty means the enum is declared at namespace scope
    pub class_name: String,
    pub is_partial: bool,
    pub class_access_type: AccessType,
    pub enumerator_name: String,
    pub enum_access_type: AccessType,
    /// Values in declaration order
    pub values: Vec<V>,
}

impl<V> EnumSpecification<V> {
    pub fn new(file_name: impl Into<String>, enumerator_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            namespace_name: String::new(),
            class_name: String::new(),
            is_partial: false,
            class_access_type: AccessType::None,
            enumerator_name: enumerator_name.into(),
            enum_access_type: AccessType::None,
            values: Vec::new(),
        }
    }

    pub fn with_namespace(mut self, namespace_name: impl Into<String>) -> Self {
        self.namespace_name = namespace_name.into();
        self
    }

    pub fn with_class(
        mut self,
        class_name: impl Into<String>,
        access: AccessType,
        is_partial: bool,
    ) -> Self {
        self.class_name = class_name.into();
        self.class_access_type = access;
        self.is_partial = is_partial;
        self
    }

    pub fn with_enum_access(mut self, access: AccessType) -> Self {
        self.enum_access_type = access;
        self
    }

    pub fn with_values(mut self, values: impl IntoIterator<Item = V>) -> Self {
        self.values = values.into_iter().collect();
        self
    }

    pub fn has_namespace(&self) -> bool {
        !self.namespace_name.is_empty()
    }

    pub fn has_class(&self) -> bool {
        !self.class_name.is_empty()
    }

    /// Swap the value representation, keeping every other field
    pub fn map_values<U>(self, f: impl FnMut(V) -> U) -> EnumSpecification<U> {
        EnumSpecification {
            file_name: self.file_name,
            namespace_name: self.namespace_name,
            class_name: self.class_name,
            is_partial: self.is_partial,
            class_access_type: self.class_access_type,
            enumerator_name: self.enumerator_name,
            enum_access_type: self.enum_access_type,
            values: self.values.into_iter().map(f).collect(),
        }
    }
}

impl<V: ValueName> EnumSpecification<V> {
    pub fn value_names(&self) -> Vec<Cow<'_, str>> {
        self.values.iter().map(ValueName::value_name).collect()
    }
}
