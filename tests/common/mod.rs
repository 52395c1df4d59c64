//! Shared test fixtures.

#![allow(dead_code, unused_imports)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use doomdeck::store::{EntryKind, Package, SelectionEntry, Settings, SourcePort, Store};

/// Settings rooted at the given save path.
pub fn settings(savepath: &str) -> Settings {
    Settings {
        savepath: PathBuf::from(savepath),
    }
}

/// A package with no user parameters and an empty selection.
pub fn package(iwad: &str, datapath: &str) -> Package {
    Package {
        id: "pk1".to_string(),
        name: "Test Package".to_string(),
        iwad: PathBuf::from(iwad),
        sourceport: "gzdoom".to_string(),
        datapath: PathBuf::from(datapath),
        userparams: String::new(),
        lastplayed: 0,
        selected: Vec::new(),
    }
}

pub fn entry(path: &str, kind: EntryKind) -> SelectionEntry {
    SelectionEntry {
        path: PathBuf::from(path),
        kind,
    }
}

/// A port with no config or save-directory conventions.
pub fn plain_port() -> SourcePort {
    SourcePort {
        id: "gzdoom".to_string(),
        name: "GZDoom".to_string(),
        binary: PathBuf::from("/bin/gzdoom"),
        has_config: false,
        param_config: String::new(),
        config_filename: String::new(),
        config_default: None,
        has_savedir: false,
        param_save: String::new(),
        param_load: String::new(),
        use_full_path: false,
    }
}

/// A port with both config and save-directory conventions.
pub fn full_port() -> SourcePort {
    SourcePort {
        id: "gzdoom".to_string(),
        name: "GZDoom".to_string(),
        binary: PathBuf::from("/bin/gzdoom"),
        has_config: true,
        param_config: "-config".to_string(),
        config_filename: "gzdoom.ini".to_string(),
        config_default: None,
        has_savedir: true,
        param_save: "-savedir".to_string(),
        param_load: "-loadgame".to_string(),
        use_full_path: false,
    }
}

/// An on-disk document store in a temporary directory.
pub struct StoreFixture {
    dir: TempDir,
}

impl StoreFixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("create temp store dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write one JSON document (`settings`, `sourceports`, `packages`).
    pub fn write(&self, name: &str, doc: &serde_json::Value) -> &Self {
        let path = self.dir.path().join(format!("{name}.json"));
        fs::write(path, serde_json::to_string_pretty(doc).unwrap()).expect("write store doc");
        self
    }

    pub fn store(&self) -> Store {
        Store::open(self.dir.path())
    }
}

/// A fixture seeded with a minimal valid store: settings rooted at a
/// directory inside the fixture, one GZDoom-like source port with
/// config and save conventions, and one package with a single
/// selected wad.
pub fn seeded_store() -> StoreFixture {
    let fixture = StoreFixture::new();
    let savepath = fixture.path().join("data");
    fs::create_dir_all(&savepath).expect("create savepath");

    fixture.write(
        "settings",
        &serde_json::json!({ "savepath": savepath.to_str().unwrap() }),
    );
    fixture.write(
        "sourceports",
        &serde_json::json!([{
            "id": "gzdoom",
            "name": "GZDoom",
            "binary": "/bin/gzdoom",
            "hasConfig": true,
            "paramConfig": "-config",
            "configFilename": "gzdoom.ini",
            "hasSavedir": true,
            "paramSave": "-savedir",
            "paramLoad": "-loadgame",
            "useFullPath": false
        }]),
    );
    fixture.write(
        "packages",
        &serde_json::json!([{
            "id": "pk1",
            "name": "Test Package",
            "iwad": "/wads/doom2.wad",
            "sourceport": "gzdoom",
            "datapath": "pk1",
            "userparams": "",
            "lastplayed": 0,
            "selected": [
                { "path": "a.wad", "kind": "WAD" }
            ]
        }]),
    );
    fixture
}
