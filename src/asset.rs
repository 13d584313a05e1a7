use crate::access::AccessType;
use crate::error::{Error, Result};
use crate::spec::{Color, EnumSpecification, NamedPair, ObjectKind, ObjectRef, Payload, ValueEntry};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// File suffix that marks an enum asset
pub const ASSET_SUFFIX: &str = ".enum.toml";

/// An enum definition as stored on disk
#[derive(Debug, Clone, Deserialize)]
pub struct EnumAsset {
    pub file_name: String,
    #[serde(default)]
    pub namespace_name: String,
    #[serde(default)]
    pub class_name: String,
    #[serde(default)]
    pub is_partial: bool,
    #[serde(default)]
    pub class_access_type: AccessType,
    pub enumerator_name: String,
    #[serde(default)]
    pub enum_access_type: AccessType,
    #[serde(flatten)]
    pub values: AssetValues,
}

/// Value list, shaped by the asset `kind`
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AssetValues {
    Simple {
        #[serde(default)]
        values: Vec<String>,
    },
    Color {
        #[serde(default)]
        values: Vec<NamedPair<Color>>,
    },
    Pair {
        #[serde(default)]
        values: Vec<NamedPair<toml::Value>>,
    },
    AudioClip {
        #[serde(default)]
        values: Vec<PathBuf>,
    },
    Prefab {
        #[serde(default)]
        values: Vec<PathBuf>,
    },
    Sprite {
        #[serde(default)]
        values: Vec<PathBuf>,
    },
}

impl AssetValues {
    pub fn kind(&self) -> &'static str {
        match self {
            AssetValues::Simple { .. } => "simple",
            AssetValues::Color { .. } => "color",
            AssetValues::Pair { .. } => "pair",
            AssetValues::AudioClip { .. } => "audio_clip",
            AssetValues::Prefab { .. } => "prefab",
            AssetValues::Sprite { .. } => "sprite",
        }
    }

    pub fn into_entries(self) -> Vec<ValueEntry> {
        fn referenced(kind: ObjectKind, paths: Vec<PathBuf>) -> Vec<ValueEntry> {
            paths
                .into_iter()
                .map(|path| ValueEntry::Referenced(ObjectRef::new(kind, path)))
                .collect()
        }

        match self {
            AssetValues::Simple { values } => values.into_iter().map(ValueEntry::Plain).collect(),
            AssetValues::Color { values } => values
                .into_iter()
                .map(|p| ValueEntry::Pair(NamedPair::new(p.name, Payload::Color(p.value))))
                .collect(),
            AssetValues::Pair { values } => values
                .into_iter()
                .map(|p| ValueEntry::Pair(NamedPair::new(p.name, Payload::Value(p.value))))
                .collect(),
            AssetValues::AudioClip { values } => referenced(ObjectKind::AudioClip, values),
            AssetValues::Prefab { values } => referenced(ObjectKind::Prefab, values),
            AssetValues::Sprite { values } => referenced(ObjectKind::Sprite, values),
        }
    }
}

impl EnumAsset {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| Error::ReadAsset {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| Error::ParseAsset {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn into_specification(self) -> EnumSpecification<ValueEntry> {
        EnumSpecification {
            file_name: self.file_name,
            namespace_name: self.namespace_name,
            class_name: self.class_name,
            is_partial: self.is_partial,
            class_access_type: self.class_access_type,
            enumerator_name: self.enumerator_name,
            enum_access_type: self.enum_access_type,
            values: self.values.into_entries(),
        }
    }
}

pub fn is_asset_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(|n| n.ends_with(ASSET_SUFFIX))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_parse_simple_asset() {
        let toml_str = r#"
kind = "simple"
file_name = "Layers"
namespace_name = "Game"
class_name = "Physics"
is_partial = true
class_access_type = "Public"
enumerator_name = "Layer"
enum_access_type = "Private"
values = ["Ground", "Water", "Air"]
"#;
        let asset: EnumAsset = toml::from_str(toml_str).unwrap();
        assert_eq!(asset.values.kind(), "simple");

        let spec = asset.into_specification();
        assert_eq!(spec.file_name, "Layers");
        assert_eq!(spec.namespace_name, "Game");
        assert_eq!(spec.class_name, "Physics");
        assert!(spec.is_partial);
        assert_eq!(spec.class_access_type, AccessType::Public);
        assert_eq!(spec.enum_access_type, AccessType::Private);
        assert_eq!(spec.value_names(), vec!["Ground", "Water", "Air"]);
    }

    #[test]
    fn test_defaults() {
        let toml_str = r#"
kind = "simple"
file_name = "Empty"
enumerator_name = "Nothing"
"#;
        let spec = toml::from_str::<EnumAsset>(toml_str)
            .unwrap()
            .into_specification();
        assert!(!spec.has_namespace());
        assert!(!spec.has_class());
        assert!(!spec.is_partial);
        assert_eq!(spec.class_access_type, AccessType::None);
        assert_eq!(spec.enum_access_type, AccessType::None);
        assert!(spec.values.is_empty());
    }

    #[test]
    fn test_parse_color_asset() {
        let toml_str = r#"
kind = "color"
file_name = "Palette"
enumerator_name = "Swatch"
values = [
    { name = "Red", value = { r = 1.0, g = 0.0, b = 0.0 } },
    { name = "Ghost", value = { r = 1, g = 1, b = 1, a = 0.5 } },
]
"#;
        let spec = toml::from_str::<EnumAsset>(toml_str)
            .unwrap()
            .into_specification();
        assert_eq!(spec.value_names(), vec!["Red", "Ghost"]);
        match &spec.values[0] {
            ValueEntry::Pair(pair) => {
                assert_eq!(pair.value, Payload::Color(Color { r: 1.0, g: 0.0, b: 0.0, a: 1.0 }))
            }
            other => panic!("expected a color pair, got {other:?}"),
        }
        match &spec.values[1] {
            ValueEntry::Pair(NamedPair {
                value: Payload::Color(color),
                ..
            }) => assert_eq!(color.a, 0.5),
            other => panic!("expected a color pair, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_pair_asset() {
        let toml_str = r#"
kind = "pair"
file_name = "Speeds"
enumerator_name = "Speed"
values = [
    { name = "Slow", value = 1 },
    { name = "Fast", value = { factor = 2.5, label = "zoom" } },
]
"#;
        let spec = toml::from_str::<EnumAsset>(toml_str)
            .unwrap()
            .into_specification();
        assert_eq!(spec.value_names(), vec!["Slow", "Fast"]);
        assert_eq!(
            spec.values[0],
            ValueEntry::Pair(NamedPair::new("Slow", Payload::Value(toml::Value::Integer(1))))
        );
    }

    #[test]
    fn test_parse_referenced_assets() {
        for (kind, object_kind) in [
            ("audio_clip", ObjectKind::AudioClip),
            ("prefab", ObjectKind::Prefab),
            ("sprite", ObjectKind::Sprite),
        ] {
            let toml_str = format!(
                r#"
kind = "{kind}"
file_name = "Things"
enumerator_name = "Thing"
values = ["Assets/Things/Big Boom.asset", "Assets/Things/Spark.asset"]
"#
            );
            let spec = toml::from_str::<EnumAsset>(&toml_str)
                .unwrap()
                .into_specification();
            assert_eq!(spec.value_names(), vec!["BigBoom", "Spark"]);
            assert!(spec.values.iter().all(|v| matches!(
                v,
                ValueEntry::Referenced(ObjectRef { kind, .. }) if *kind == object_kind
            )));
        }
    }

    #[test]
    fn test_unknown_kind_is_rejected() {
        let toml_str = r#"
kind = "mesh"
file_name = "Meshes"
enumerator_name = "Mesh"
values = []
"#;
        assert!(toml::from_str::<EnumAsset>(toml_str).is_err());
    }

    #[test]
    fn test_load_errors_carry_path() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("Missing.enum.toml");
        assert!(matches!(
            EnumAsset::load(&missing),
            Err(Error::ReadAsset { path, .. }) if path == missing
        ));

        let broken = dir.path().join("Broken.enum.toml");
        fs::write(&broken, "kind = ").unwrap();
        assert!(matches!(
            EnumAsset::load(&broken),
            Err(Error::ParseAsset { path, .. }) if path == broken
        ));
    }

    #[test]
    fn test_is_asset_file() {
        assert!(is_asset_file(Path::new("Assets/Colors.enum.toml")));
        assert!(!is_asset_file(Path::new("enum-gen.toml")));
        assert!(!is_asset_file(Path::new("Assets/Colors.cs")));
    }
}
