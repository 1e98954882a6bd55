//! Resource bundle manifest ordering.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{ConformityError, Result};
use crate::runner::{Check, CheckError, CheckResult};

use super::first_unsorted_by_key;

static COMMENT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<!--.*?-->").expect("COMMENT_REGEX must compile"));

/// A `<gresource>` element; group 1 is absent when it is self-closing.
static GRESOURCE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<gresource(?:\s[^>]*?)?(?:/>|>(.*?)</gresource>)")
        .expect("GRESOURCE_REGEX must compile")
});

static FILE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<file(?:\s[^>]*)?>(.*?)</file>").expect("FILE_REGEX must compile")
});

static CDATA_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<!\[CDATA\[(.*?)\]\]>").expect("CDATA_REGEX must compile")
});

static ENTITY_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"&(#[xX][0-9a-fA-F]+|#[0-9]+|[A-Za-z]+);").expect("ENTITY_REGEX must compile")
});

/// `<file>` entries of the first `<gresource>` element, in document order.
///
/// Entry text has CDATA sections unwrapped and character references
/// decoded.
///
/// # Errors
///
/// Returns `ResourceManifestParse` if there is no `<gresource>` element.
pub fn parse_resource_files(content: &str, path: &Path) -> Result<Vec<String>> {
    let content = COMMENT_REGEX.replace_all(content, "");

    let gresource = GRESOURCE_REGEX.captures(&content).ok_or_else(|| {
        ConformityError::ResourceManifestParse {
            path: path.to_path_buf(),
            message: "no <gresource> element".to_string(),
        }
    })?;
    let body = gresource.get(1).map_or("", |body| body.as_str());

    Ok(FILE_REGEX
        .captures_iter(body)
        .filter_map(|caps| caps.get(1))
        .map(|file| element_text(file.as_str()).trim().to_string())
        .collect())
}

/// Character data of an element: CDATA taken verbatim, the rest decoded.
fn element_text(raw: &str) -> String {
    let mut text = String::with_capacity(raw.len());
    let mut last = 0;

    for cdata in CDATA_REGEX.captures_iter(raw) {
        let (Some(whole), Some(inner)) = (cdata.get(0), cdata.get(1)) else {
            continue;
        };
        text.push_str(&decode_entities(&raw[last..whole.start()]));
        text.push_str(inner.as_str());
        last = whole.end();
    }
    text.push_str(&decode_entities(&raw[last..]));

    text
}

/// Replace predefined entities and numeric character references. Anything
/// else is left as written.
fn decode_entities(text: &str) -> String {
    ENTITY_REGEX
        .replace_all(text, |caps: &regex::Captures<'_>| {
            let name = &caps[1];
            let decoded = match name {
                "amp" => Some('&'),
                "lt" => Some('<'),
                "gt" => Some('>'),
                "quot" => Some('"'),
                "apos" => Some('\''),
                _ => name
                    .strip_prefix("#x")
                    .or_else(|| name.strip_prefix("#X"))
                    .map(|hex| u32::from_str_radix(hex, 16).ok())
                    .unwrap_or_else(|| name.strip_prefix('#').and_then(|dec| dec.parse().ok()))
                    .and_then(char::from_u32),
            };
            decoded.map_or_else(|| caps[0].to_string(), String::from)
        })
        .into_owned()
}

/// Files in the resource manifest are sorted, ignoring their extension.
pub struct ResourceOrderCheck {
    subject: String,
    project_root: PathBuf,
    path: PathBuf,
}

impl ResourceOrderCheck {
    /// Create the check for the manifest at `path` (relative to `project_root`).
    pub fn new(project_root: &Path, path: &Path) -> Self {
        Self {
            subject: format!("{} order", path.display()),
            project_root: project_root.to_path_buf(),
            path: path.to_path_buf(),
        }
    }

    fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

impl Check for ResourceOrderCheck {
    fn subject(&self) -> &str {
        &self.subject
    }

    fn run(&self) -> CheckResult {
        let full_path = self.project_root.join(&self.path);
        let content = fs::read_to_string(&full_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                CheckError::failed(format!("File `{}` does not exist", self.path.display()))
            } else {
                CheckError::failed(format!("Failed to read `{}`: {}", self.path.display(), e))
            }
        })?;

        let files = parse_resource_files(&content, &self.path)
            .map_err(|e| CheckError::failed(e.to_string()))?;

        match first_unsorted_by_key(&files, |file| Path::new(file).with_extension("")) {
            Some((found, expected)) => Err(CheckError::failed(format!(
                "Found file `{}` before `{}` in {}",
                found,
                expected,
                self.file_name()
            ))),
            None => Ok(()),
        }
    }
}
