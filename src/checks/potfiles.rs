//! Translation manifest (`POTFILES.in`) checks.
//!
//! The manifest lists every source file gettext should extract strings
//! from, one path per line. Three checks share one parsed manifest:
//!
//! - [`PotfilesExistenceCheck`] - the manifest and every listed file exist
//! - [`PotfilesSanityCheck`] - exactly the files with translatable strings are listed
//! - [`PotfilesOrderCheck`] - entries are sorted

use std::collections::{BTreeSet, HashSet};
use std::fs;
use std::path::{Component, Path, PathBuf};
use std::rc::Rc;
use std::sync::LazyLock;

use regex::Regex;
use walkdir::WalkDir;

use crate::error::{ConformityError, Result};
use crate::runner::{Check, CheckError, CheckResult};

use super::first_unsorted_by_key;

/// Any `*gettext` function call or macro invocation.
static GETTEXT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"gettext!?\(").expect("GETTEXT_REGEX must compile"));

/// Marker for translatable properties in UI definitions.
const TRANSLATABLE_MARKER: &str = r#"translatable="yes""#;

/// Parsed `POTFILES.in`, read once and shared by the manifest checks.
#[derive(Debug, Clone)]
pub struct PotfilesManifest {
    project_root: PathBuf,
    path: PathBuf,
    entries: Option<Vec<PathBuf>>,
}

impl PotfilesManifest {
    /// Read the manifest at `path` (relative to `project_root`).
    ///
    /// A manifest that does not exist is recorded as missing, to be reported
    /// by [`PotfilesExistenceCheck`].
    ///
    /// # Errors
    ///
    /// Returns `ManifestRead` if the file exists but cannot be read.
    pub fn load(project_root: &Path, path: &Path) -> Result<Self> {
        let full_path = project_root.join(path);
        match fs::read_to_string(&full_path) {
            Ok(content) => Ok(Self::parse(project_root, path, &content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("Manifest {} not found", full_path.display());
                Ok(Self::missing(project_root, path))
            }
            Err(source) => Err(ConformityError::ManifestRead {
                path: full_path,
                source,
            }),
        }
    }

    /// Build a manifest from its contents. Blank lines and `#` comments are
    /// ignored; entries keep their listed order, with `.` components dropped
    /// so `./src/a.rs` names the same file as `src/a.rs`.
    pub fn parse(project_root: &Path, path: &Path, content: &str) -> Self {
        let entries = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(normalize_entry)
            .collect();

        Self {
            project_root: project_root.to_path_buf(),
            path: path.to_path_buf(),
            entries: Some(entries),
        }
    }

    /// A manifest whose file does not exist.
    pub fn missing(project_root: &Path, path: &Path) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            path: path.to_path_buf(),
            entries: None,
        }
    }

    /// Manifest path relative to the project root.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Project root entries are resolved against.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Listed entries, or `None` if the manifest file does not exist.
    pub fn entries(&self) -> Option<&[PathBuf]> {
        self.entries.as_deref()
    }

    /// Listed entries with the given extension, in manifest order.
    pub fn entries_with_extension(&self, extension: &str) -> Vec<&Path> {
        self.entries()
            .unwrap_or_default()
            .iter()
            .filter(|entry| entry.extension().and_then(|e| e.to_str()) == Some(extension))
            .map(PathBuf::as_path)
            .collect()
    }

    fn require_entries(&self) -> std::result::Result<&[PathBuf], CheckError> {
        self.entries().ok_or_else(|| {
            CheckError::failed(format!("File `{}` does not exist", self.path.display()))
        })
    }

    fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

/// The manifest exists and every listed file exists.
pub struct PotfilesExistenceCheck {
    subject: String,
    manifest: Rc<PotfilesManifest>,
}

impl PotfilesExistenceCheck {
    /// Create the check.
    pub fn new(manifest: Rc<PotfilesManifest>) -> Self {
        Self {
            subject: format!("{} existence", manifest.path().display()),
            manifest,
        }
    }
}

impl Check for PotfilesExistenceCheck {
    fn subject(&self) -> &str {
        &self.subject
    }

    fn run(&self) -> CheckResult {
        let entries = self.manifest.require_entries()?;
        let root = self.manifest.project_root();

        match entries.iter().find(|entry| !root.join(entry).exists()) {
            Some(entry) => Err(CheckError::failed(format!(
                "File `{}` does not exist",
                entry.display()
            ))),
            None => Ok(()),
        }
    }
}

/// Exactly the `.rs` and `.ui` files containing translatable strings are
/// listed. Entries with other extensions are not considered.
pub struct PotfilesSanityCheck {
    subject: String,
    manifest: Rc<PotfilesManifest>,
    ui_dir: PathBuf,
    source_dir: PathBuf,
    prerequisites: Vec<Rc<dyn Check>>,
}

impl PotfilesSanityCheck {
    /// Create the check, scanning `ui_dir` for UI files and `source_dir` for
    /// Rust sources.
    pub fn new(manifest: Rc<PotfilesManifest>, ui_dir: &Path, source_dir: &Path) -> Self {
        Self {
            subject: format!("{} sanity", manifest.path().display()),
            manifest,
            ui_dir: ui_dir.to_path_buf(),
            source_dir: source_dir.to_path_buf(),
            prerequisites: Vec::new(),
        }
    }

    /// Require `check` to have succeeded first.
    pub fn requires(mut self, check: Rc<dyn Check>) -> Self {
        self.prerequisites.push(check);
        self
    }
}

impl Check for PotfilesSanityCheck {
    fn subject(&self) -> &str {
        &self.subject
    }

    fn prerequisites(&self) -> &[Rc<dyn Check>] {
        &self.prerequisites
    }

    fn run(&self) -> CheckResult {
        self.manifest.require_entries()?;
        let root = self.manifest.project_root();
        let file_name = self.manifest.file_name();

        let rust_files = files_matching(root, &self.source_dir, "rs", |content| {
            GETTEXT_REGEX.is_match(content)
        })?;
        let ui_files = files_matching(root, &self.ui_dir, "ui", |content| {
            content.contains(TRANSLATABLE_MARKER)
        })?;

        let listed_rust = self.manifest.entries_with_extension("rs");
        let listed_ui = self.manifest.entries_with_extension("ui");

        let unneeded: Vec<&Path> = listed_rust
            .iter()
            .filter(|entry| !rust_files.contains(**entry))
            .chain(listed_ui.iter().filter(|entry| !ui_files.contains(**entry)))
            .copied()
            .collect();
        if !unneeded.is_empty() {
            return Err(CheckError::failed(file_listing(
                &format!(
                    "Found {} in {} without translatable strings:",
                    count_files(unneeded.len()),
                    file_name
                ),
                &unneeded,
            )));
        }

        let listed: HashSet<&Path> = listed_rust.iter().chain(&listed_ui).copied().collect();
        let unlisted: Vec<&Path> = rust_files
            .iter()
            .chain(&ui_files)
            .map(PathBuf::as_path)
            .filter(|file| !listed.contains(file))
            .collect();
        if !unlisted.is_empty() {
            return Err(CheckError::failed(file_listing(
                &format!(
                    "Found {} with translatable strings not present in {}:",
                    count_files(unlisted.len()),
                    file_name
                ),
                &unlisted,
            )));
        }

        Ok(())
    }
}

/// Manifest entries are in sorted order.
pub struct PotfilesOrderCheck {
    subject: String,
    manifest: Rc<PotfilesManifest>,
    prerequisites: Vec<Rc<dyn Check>>,
}

impl PotfilesOrderCheck {
    /// Create the check.
    pub fn new(manifest: Rc<PotfilesManifest>) -> Self {
        Self {
            subject: format!("{} order", manifest.path().display()),
            manifest,
            prerequisites: Vec::new(),
        }
    }

    /// Require `check` to have succeeded first.
    pub fn requires(mut self, check: Rc<dyn Check>) -> Self {
        self.prerequisites.push(check);
        self
    }
}

impl Check for PotfilesOrderCheck {
    fn subject(&self) -> &str {
        &self.subject
    }

    fn prerequisites(&self) -> &[Rc<dyn Check>] {
        &self.prerequisites
    }

    fn run(&self) -> CheckResult {
        let entries = self.manifest.require_entries()?;

        match first_unsorted_by_key(entries, |entry| entry.clone()) {
            Some((found, expected)) => Err(CheckError::failed(format!(
                "Found file `{}` before `{}` in {}",
                found.display(),
                expected.display(),
                self.manifest.file_name()
            ))),
            None => Ok(()),
        }
    }
}

/// Files under `root/dir` with `extension` whose text satisfies `matches`,
/// as paths relative to `root`. Non-UTF-8 files are skipped.
fn files_matching(
    root: &Path,
    dir: &Path,
    extension: &str,
    matches: impl Fn(&str) -> bool,
) -> std::result::Result<BTreeSet<PathBuf>, CheckError> {
    let mut found = BTreeSet::new();

    for entry in WalkDir::new(root.join(dir))
        .sort_by_file_name()
        .into_iter()
        .filter_map(std::result::Result::ok)
    {
        let path = entry.path();
        if !entry.file_type().is_file()
            || path.extension().and_then(|e| e.to_str()) != Some(extension)
        {
            continue;
        }

        let bytes = fs::read(path).map_err(|e| {
            CheckError::failed(format!("Failed to read `{}`: {}", path.display(), e))
        })?;
        let Ok(content) = String::from_utf8(bytes) else {
            continue;
        };

        if matches(&content) {
            found.insert(path.strip_prefix(root).unwrap_or(path).to_path_buf());
        }
    }

    Ok(found)
}

fn normalize_entry(line: &str) -> PathBuf {
    Path::new(line)
        .components()
        .filter(|component| !matches!(component, Component::CurDir))
        .collect()
}

fn count_files(n: usize) -> String {
    format!("{} file{}", n, if n == 1 { "" } else { "s" })
}

fn file_listing(header: &str, files: &[&Path]) -> String {
    std::iter::once(header.to_string())
        .chain(files.iter().map(|file| file.display().to_string()))
        .collect::<Vec<_>>()
        .join("\n")
}
