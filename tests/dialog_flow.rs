//! Integration walk of the public dialog API: catalog files on disk, locale
//! picker labels, pagination, selection, and the confirm handoff.

use std::cell::RefCell;
use std::fs;
use std::path::Path;
use std::rc::Rc;

use modpicker::dialog::{DialogConfig, InstallDialog};
use modpicker::i18n::BuiltinLocaleNames;
use modpicker::metadata::StaticMetadata;
use modpicker::sources::FileCatalog;
use modpicker::state::{DialogPhase, MetadataRecord, ModId};

fn write_file(dir: &Path, name: &str, body: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, body).expect("write catalog file");
    path
}

#[test]
/// What: Full session against a disk-backed catalog
///
/// - Input: JSON listing with en and ru.machine main mods and four add-ons,
///   one en-only with a dependency, one ko-only
/// - Output: Eligibility, labels, pagination, selection reconciliation, and
///   the confirm payload all line up end to end
fn disk_catalog_session_end_to_end() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mods_path = write_file(
        dir.path(),
        "main_mods.json",
        r#"[
            {"id": 100, "locale": "en", "version": "5.4.1"},
            {"id": 101, "locale": "ru.machine", "version": "5.4.1"}
        ]"#,
    );
    let addons_path = write_file(
        dir.path(),
        "addons.json",
        r#"[
            {"id": 1, "modname": "hulls"},
            {"id": 2, "modname": "weapons", "compatible_mv_locale": ["en"], "dependent_modnames": ["hulls"]},
            {"id": 3, "modname": "music"},
            {"id": 4, "modname": "ko-patch", "compatible_mv_locale": ["ko"]}
        ]"#,
    );

    let metadata = StaticMetadata::new([
        (
            1,
            MetadataRecord {
                title: "Extra Hulls".to_string(),
                ..MetadataRecord::default()
            },
        ),
        (
            2,
            MetadataRecord {
                title: "Extra Weapons".to_string(),
                version: "2.0".to_string(),
                description: "More guns.".to_string(),
                ..MetadataRecord::default()
            },
        ),
    ]);

    let installed: Rc<RefCell<Vec<(String, Vec<ModId>)>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&installed);
    let mut dialog = InstallDialog::new(
        FileCatalog::new(mods_path, addons_path),
        metadata,
        BuiltinLocaleNames,
        DialogConfig::default(),
    )
    .with_install_callback(move |locale: &str, ids: &[ModId]| {
        sink.borrow_mut().push((locale.to_string(), ids.to_vec()));
    });

    dialog.open();
    assert_eq!(dialog.phase(), DialogPhase::Ready);
    assert_eq!(dialog.locale(), Some("en"));

    let options = dialog.locale_options();
    assert_eq!(options.len(), 2);
    assert_eq!(options[0].label, "5.4.1 English");
    assert_eq!(options[1].label, "5.4.1 Русский (machine translation)");

    // ko-patch fails the locale check; everything else fits on one page
    assert_eq!(dialog.eligible_count(), 3);
    assert_eq!(dialog.page_label(), "1/1");
    let rows = dialog.visible_rows();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].title, "Extra Hulls");
    assert_eq!(rows[2].title, "music");

    // Check the dependent add-on, then its description shows on toggle
    dialog.toggle_addon(2);
    assert!(dialog.description().contains("Extra Weapons"));
    assert!(dialog.description().contains("More guns."));

    // The machine-translated locale keeps the universal add-ons but drops
    // the en-only one, reconciling the selection with it
    dialog.set_locale("ru.machine");
    assert_eq!(dialog.eligible_count(), 2);
    assert!(dialog.selected_ids().is_empty());

    dialog.set_locale("en");
    dialog.toggle_addon(1);
    dialog.toggle_addon(2);

    let result = dialog.confirm().expect("confirm in Ready");
    assert_eq!(result.locale, "en");
    assert_eq!(result.selected_ids, vec![1, 2]);
    assert_eq!(
        installed.borrow().as_slice(),
        &[("en".to_string(), vec![1, 2])]
    );
}

#[test]
/// What: Missing catalog files cancel the session through the error path
///
/// - Input: FileCatalog pointed at paths that do not exist
/// - Output: Phase Cancelled without a confirm payload
fn missing_catalog_cancels_session() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut dialog = InstallDialog::new(
        FileCatalog::new(dir.path().join("none.json"), dir.path().join("none2.json")),
        StaticMetadata::default(),
        BuiltinLocaleNames,
        DialogConfig::default(),
    );

    dialog.open();
    assert_eq!(dialog.phase(), DialogPhase::Cancelled);
    assert!(dialog.confirm().is_none());
}
