//! Concrete conformity checks.
//!
//! - [`tool`] - Code style and spelling, delegated to external tools
//! - [`potfiles`] - Translation manifest existence, sanity and order
//! - [`resources`] - Resource bundle manifest order

pub mod potfiles;
pub mod resources;
pub mod tool;

pub use potfiles::{
    PotfilesExistenceCheck, PotfilesManifest, PotfilesOrderCheck, PotfilesSanityCheck,
};
pub use resources::{parse_resource_files, ResourceOrderCheck};
pub use tool::ToolCheck;

use std::path::Path;
use std::rc::Rc;

use crate::config::ChecksConfig;
use crate::error::Result;
use crate::runner::{Check, Runner};

/// Which tool-backed checks to disable.
#[derive(Debug, Clone, Copy, Default)]
pub struct SkipFlags {
    /// Disable the code style check.
    pub rustfmt: bool,
    /// Disable the spelling check.
    pub typos: bool,
}

/// Register the standard check set, in evaluation order.
///
/// Both manifest follow-up checks require the existence check, so they are
/// registered after it.
///
/// # Errors
///
/// Returns `ManifestRead` if the translation manifest exists but is unreadable.
pub fn register_default_checks(
    runner: &mut Runner,
    project_root: &Path,
    config: &ChecksConfig,
    skip: SkipFlags,
) -> Result<()> {
    runner.add(Rc::new(ToolCheck::rustfmt(project_root, skip.rustfmt)));
    runner.add(Rc::new(ToolCheck::typos(project_root, skip.typos)));

    let manifest = Rc::new(PotfilesManifest::load(project_root, &config.potfiles)?);
    let existence: Rc<dyn Check> = Rc::new(PotfilesExistenceCheck::new(Rc::clone(&manifest)));
    runner.add(Rc::clone(&existence));
    runner.add(Rc::new(
        PotfilesSanityCheck::new(Rc::clone(&manifest), &config.ui_dir, &config.source_dir)
            .requires(Rc::clone(&existence)),
    ));
    runner.add(Rc::new(
        PotfilesOrderCheck::new(manifest).requires(existence),
    ));

    runner.add(Rc::new(ResourceOrderCheck::new(
        project_root,
        &config.resources,
    )));

    Ok(())
}

/// First position where `items` differs from its stable sort by `key`,
/// as `(found, expected)`.
pub(crate) fn first_unsorted_by_key<T, K: Ord>(
    items: &[T],
    key: impl Fn(&T) -> K,
) -> Option<(&T, &T)> {
    let mut sorted: Vec<&T> = items.iter().collect();
    sorted.sort_by_key(|item| key(*item));

    items
        .iter()
        .zip(sorted)
        .find(|(found, expected)| !std::ptr::eq(*found, *expected))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockReporter;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn first_unsorted_finds_first_difference() {
        let items = [1, 3, 2, 4];
        assert_eq!(first_unsorted_by_key(&items, |i| *i), Some((&3, &2)));
    }

    #[test]
    fn first_unsorted_accepts_sorted_and_duplicates() {
        assert_eq!(first_unsorted_by_key(&[1, 1, 2], |i| *i), None);
        let empty: [i32; 0] = [];
        assert_eq!(first_unsorted_by_key(&empty, |i| *i), None);
    }

    #[test]
    fn first_unsorted_uses_key() {
        let items = ["b.x", "a.y"];
        assert_eq!(
            first_unsorted_by_key(&items, |s| s.split('.').nth(1).map(str::to_string)),
            None
        );
    }

    #[test]
    fn default_checks_are_registered_in_order() {
        let temp = TempDir::new().unwrap();
        let mut runner = Runner::new("test");

        register_default_checks(
            &mut runner,
            temp.path(),
            &ChecksConfig::default(),
            SkipFlags {
                rustfmt: true,
                typos: true,
            },
        )
        .unwrap();

        let mut reporter = MockReporter::new();
        runner.run(&mut reporter);

        let subjects: Vec<_> = reporter
            .outcomes()
            .iter()
            .map(|o| o.subject.as_str())
            .collect();
        assert_eq!(
            subjects,
            vec![
                "code style",
                "spelling mistakes",
                "po/POTFILES.in existence",
                "po/POTFILES.in sanity",
                "po/POTFILES.in order",
                "data/resources/resources.gresource.xml order",
            ]
        );
    }

    #[test]
    fn missing_manifest_skips_follow_up_checks() {
        let temp = TempDir::new().unwrap();
        let mut runner = Runner::new("test");
        register_default_checks(
            &mut runner,
            temp.path(),
            &ChecksConfig::default(),
            SkipFlags {
                rustfmt: true,
                typos: true,
            },
        )
        .unwrap();

        let report = runner.run(&mut MockReporter::new());

        let summary = report.summary();
        // Manifest existence and resource order fail; tools are skipped by
        // flag and the two manifest follow-ups by prerequisite.
        assert_eq!((summary.passed, summary.failed, summary.skipped), (0, 2, 4));
    }

    #[test]
    fn conforming_project_passes() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        fs::create_dir_all(root.join("po")).unwrap();
        fs::create_dir_all(root.join("src")).unwrap();
        fs::create_dir_all(root.join("data/resources/ui")).unwrap();
        fs::write(root.join("src/main.rs"), "gettext(\"Hello\");").unwrap();
        fs::write(
            root.join("data/resources/ui/window.ui"),
            r#"<property translatable="yes">Hi</property>"#,
        )
        .unwrap();
        fs::write(
            root.join("po/POTFILES.in"),
            "data/resources/ui/window.ui\nsrc/main.rs\n",
        )
        .unwrap();
        fs::write(
            root.join("data/resources/resources.gresource.xml"),
            "<gresources><gresource prefix=\"/app\"><file>ui/window.ui</file></gresource></gresources>",
        )
        .unwrap();

        let mut runner = Runner::new("test");
        register_default_checks(
            &mut runner,
            root,
            &ChecksConfig::default(),
            SkipFlags {
                rustfmt: true,
                typos: true,
            },
        )
        .unwrap();

        let report = runner.run(&mut MockReporter::new());
        let summary = report.summary();
        assert_eq!((summary.passed, summary.failed, summary.skipped), (4, 0, 2));
        assert!(report.success());
    }
}
