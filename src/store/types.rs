use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// A saved combination of mod files, a chosen source port, and launch
/// metadata. Owned by the document store; read-only to the launch core.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Package {
    /// Unique identifier within the `packages` document.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Path to the base game-data archive.
    pub iwad: PathBuf,
    /// Id of the source port this package launches with.
    pub sourceport: String,
    /// Per-package storage directory, relative to `Settings::savepath`.
    pub datapath: PathBuf,
    /// Free-text extra parameters, expanded at composition time.
    /// `<data>` resolves to the save root, `<package>` to the package
    /// directory.
    #[serde(default)]
    pub userparams: String,
    /// Unix timestamp of the last launch; `0` means never played.
    #[serde(default)]
    pub lastplayed: u64,
    /// The currently selected mod files, in load order.
    #[serde(default)]
    pub selected: Vec<SelectionEntry>,
}

/// One selected mod file inside a package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionEntry {
    /// Absolute or store-relative file path.
    pub path: PathBuf,
    /// File kind, decides which command-line flag carries it.
    pub kind: EntryKind,
}

/// Kind of a selected file.
///
/// Anything that is not a DEH/BEX patch loads as generic data via
/// `-file`, so unknown kind strings fall through to `Wad`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EntryKind {
    Deh,
    Bex,
    Wad,
}

impl From<String> for EntryKind {
    fn from(kind: String) -> Self {
        match kind.as_str() {
            "DEH" => Self::Deh,
            "BEX" => Self::Bex,
            _ => Self::Wad,
        }
    }
}

impl From<EntryKind> for String {
    fn from(kind: EntryKind) -> Self {
        match kind {
            EntryKind::Deh => "DEH",
            EntryKind::Bex => "BEX",
            EntryKind::Wad => "WAD",
        }
        .to_string()
    }
}

/// An engine binary and its parameter conventions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourcePort {
    /// Unique identifier within the `sourceports` document.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Path to the executable, or to an application bundle on macOS.
    pub binary: PathBuf,
    /// Whether the port takes an explicit config-file flag.
    #[serde(default)]
    pub has_config: bool,
    /// Flag token for the config file (e.g. `-config`). Must start
    /// with `-` when `has_config` is set.
    #[serde(default)]
    pub param_config: String,
    /// File name of the per-package config inside the package
    /// directory.
    #[serde(default)]
    pub config_filename: String,
    /// Template config file a frontend seeds fresh package
    /// directories from. Not used during composition.
    #[serde(default)]
    pub config_default: Option<PathBuf>,
    /// Whether the port takes save-directory and load-savegame flags.
    #[serde(default)]
    pub has_savedir: bool,
    /// Flag token for the save directory (e.g. `-savedir`).
    #[serde(default)]
    pub param_save: String,
    /// Flag token for resuming a savegame (e.g. `-loadgame`).
    #[serde(default)]
    pub param_load: String,
    /// Whether the load argument is the absolute save path or the
    /// bare file name.
    #[serde(default)]
    pub use_full_path: bool,
}

/// Frontend settings document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Root directory for all per-package data: configs, saves,
    /// generated files.
    pub savepath: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_kind_known_strings() {
        let deh: EntryKind = serde_json::from_str("\"DEH\"").unwrap();
        let bex: EntryKind = serde_json::from_str("\"BEX\"").unwrap();
        let wad: EntryKind = serde_json::from_str("\"WAD\"").unwrap();
        assert_eq!(deh, EntryKind::Deh);
        assert_eq!(bex, EntryKind::Bex);
        assert_eq!(wad, EntryKind::Wad);
    }

    #[test]
    fn entry_kind_unknown_string_is_generic_data() {
        let kind: EntryKind = serde_json::from_str("\"PK3\"").unwrap();
        assert_eq!(kind, EntryKind::Wad);
    }

    #[test]
    fn package_optional_fields_default() {
        let pack: Package = serde_json::from_str(
            r#"{
                "id": "pk1",
                "name": "Vanilla",
                "iwad": "/wads/doom2.wad",
                "sourceport": "gzdoom",
                "datapath": "pk1"
            }"#,
        )
        .unwrap();
        assert_eq!(pack.userparams, "");
        assert_eq!(pack.lastplayed, 0);
        assert!(pack.selected.is_empty());
    }
}
