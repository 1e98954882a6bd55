//! Configuration schema for `.conformity.yml`.

use serde::Deserialize;
use std::path::PathBuf;

/// Locations the concrete checks read, relative to the project root.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChecksConfig {
    /// Manifest of translatable source files, one path per line.
    pub potfiles: PathBuf,

    /// Directory of UI definition files scanned for translatable strings.
    pub ui_dir: PathBuf,

    /// Directory of Rust sources scanned for gettext calls.
    pub source_dir: PathBuf,

    /// Resource bundle manifest whose `<file>` entries must be sorted.
    pub resources: PathBuf,
}

impl Default for ChecksConfig {
    fn default() -> Self {
        Self {
            potfiles: PathBuf::from("po/POTFILES.in"),
            ui_dir: PathBuf::from("data/resources/ui"),
            source_dir: PathBuf::from("src"),
            resources: PathBuf::from("data/resources/resources.gresource.xml"),
        }
    }
}
