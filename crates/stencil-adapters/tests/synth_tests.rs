//! End-to-end synthesis against real and in-memory filesystems.

use std::path::Path;

use stencil_adapters::{LocalFilesystem, MemoryFilesystem};
use stencil_core::{
    application::{FileOutcome, FileStatus, SynthService, ports::Filesystem},
    domain::{Project, ProjectDescriptor, ProjectOptions},
};
use tempfile::TempDir;

fn starter() -> Project {
    let descriptor = ProjectDescriptor::from_options(ProjectOptions::new(
        "Order intake lambda",
        "order-intake",
    ))
    .unwrap();
    Project::lambda_starter(descriptor)
}

fn snapshot(root: &Path) -> Vec<(String, Vec<u8>)> {
    let mut out = Vec::new();
    let mut stack = vec![root.to_path_buf()];
    while let Some(dir) = stack.pop() {
        for entry in std::fs::read_dir(&dir).unwrap() {
            let path = entry.unwrap().path();
            if path.is_dir() {
                stack.push(path);
            } else {
                let rel = path.strip_prefix(root).unwrap().display().to_string();
                out.push((rel, std::fs::read(&path).unwrap()));
            }
        }
    }
    out.sort();
    out
}

#[test]
fn writes_nine_files_to_disk() {
    let dir = TempDir::new().unwrap();
    let report = SynthService::new(Box::new(LocalFilesystem::new()))
        .synthesize(&starter(), dir.path())
        .unwrap();

    assert_eq!(report.files.len(), 9);
    assert_eq!(snapshot(dir.path()).len(), 9);

    let settings = std::fs::read_to_string(dir.path().join(".vscode/settings.json")).unwrap();
    let json: serde_json::Value = serde_json::from_str(&settings).unwrap();
    assert_eq!(json["editor.defaultFormatter"], "esbenp.prettier-vscode");
    assert!(settings.ends_with("}\n"));
}

#[test]
fn regeneration_is_byte_identical_even_when_read_only() {
    let dir = TempDir::new().unwrap();
    let service = SynthService::new(Box::new(LocalFilesystem::new()));

    service.synthesize(&starter(), dir.path()).unwrap();
    let first = snapshot(dir.path());

    let report = service.synthesize(&starter(), dir.path()).unwrap();
    assert_eq!(report.count(FileOutcome::Unchanged), 9);
    assert_eq!(snapshot(dir.path()), first);
}

#[test]
fn read_only_files_are_rewritten_when_options_change() {
    let dir = TempDir::new().unwrap();
    let service = SynthService::new(Box::new(LocalFilesystem::new()));
    service.synthesize(&starter(), dir.path()).unwrap();

    let renamed = Project::lambda_starter(
        ProjectDescriptor::from_options(ProjectOptions::new("x", "renamed")).unwrap(),
    );
    let report = service.synthesize(&renamed, dir.path()).unwrap();

    assert_eq!(report.count(FileOutcome::Updated), 1);
    let manifest = std::fs::read_to_string(dir.path().join("package.json")).unwrap();
    assert!(manifest.contains("\"renamed\""));
}

#[cfg(unix)]
#[test]
fn hooks_are_executable_and_everything_is_read_only() {
    use std::os::unix::fs::PermissionsExt;

    let dir = TempDir::new().unwrap();
    SynthService::new(Box::new(LocalFilesystem::new()))
        .synthesize(&starter(), dir.path())
        .unwrap();

    let mode = |p: &str| {
        std::fs::metadata(dir.path().join(p))
            .unwrap()
            .permissions()
            .mode()
            & 0o777
    };
    assert_eq!(mode(".husky/pre-commit"), 0o555);
    assert_eq!(mode(".husky/commit-msg"), 0o555);
    assert_eq!(mode("package.json"), 0o444);
    assert_eq!(mode(".husky/.gitignore"), 0o444);
}

#[cfg(unix)]
#[test]
fn writable_mode_keeps_files_editable() {
    use std::os::unix::fs::PermissionsExt;

    let dir = TempDir::new().unwrap();
    SynthService::new(Box::new(LocalFilesystem::new()))
        .read_only(false)
        .synthesize(&starter(), dir.path())
        .unwrap();

    let mode = |p: &str| {
        std::fs::metadata(dir.path().join(p))
            .unwrap()
            .permissions()
            .mode()
            & 0o777
    };
    assert_eq!(mode("package.json"), 0o644);
    assert_eq!(mode(".husky/pre-commit"), 0o755);
}

#[test]
fn check_detects_hand_edits() {
    let dir = TempDir::new().unwrap();
    let service = SynthService::new(Box::new(LocalFilesystem::new())).read_only(false);
    service.synthesize(&starter(), dir.path()).unwrap();
    assert!(service.check(&starter(), dir.path()).unwrap().is_clean());

    std::fs::write(dir.path().join(".prettierignore"), "edited").unwrap();
    std::fs::remove_file(dir.path().join("lint-staged.config.js")).unwrap();

    let report = service.check(&starter(), dir.path()).unwrap();
    let mut drifted: Vec<_> = report
        .drifted()
        .map(|f| (f.path.display().to_string(), f.status))
        .collect();
    drifted.sort();
    assert_eq!(
        drifted,
        vec![
            (".prettierignore".to_string(), FileStatus::Stale),
            ("lint-staged.config.js".to_string(), FileStatus::Missing),
        ]
    );
}

#[cfg(unix)]
#[test]
fn check_detects_hook_without_executable_bit() {
    use std::os::unix::fs::PermissionsExt;

    let dir = TempDir::new().unwrap();
    let service = SynthService::new(Box::new(LocalFilesystem::new()));
    service.synthesize(&starter(), dir.path()).unwrap();

    let hook = dir.path().join(".husky/pre-commit");
    std::fs::set_permissions(&hook, std::fs::Permissions::from_mode(0o644)).unwrap();

    let report = service.check(&starter(), dir.path()).unwrap();
    let drifted: Vec<_> = report
        .drifted()
        .map(|f| (f.path.display().to_string(), f.status))
        .collect();
    assert_eq!(
        drifted,
        vec![(".husky/pre-commit".to_string(), FileStatus::PermissionsDrift)]
    );

    service.synthesize(&starter(), dir.path()).unwrap();
    assert!(service.check(&starter(), dir.path()).unwrap().is_clean());
}

#[test]
fn non_utf8_target_is_stale_and_gets_regenerated() {
    let dir = TempDir::new().unwrap();
    let service = SynthService::new(Box::new(LocalFilesystem::new()));
    std::fs::write(dir.path().join(".eslintignore"), [0xff, 0xfe, 0x00]).unwrap();

    let report = service.check(&starter(), dir.path()).unwrap();
    let status = report
        .files
        .iter()
        .find(|f| f.path == Path::new(".eslintignore"))
        .map(|f| f.status);
    assert_eq!(status, Some(FileStatus::Stale));

    let report = service.synthesize(&starter(), dir.path()).unwrap();
    assert_eq!(report.count(FileOutcome::Updated), 1);
    assert_eq!(
        std::fs::read_to_string(dir.path().join(".eslintignore")).unwrap(),
        "lib\nnode_modules"
    );
}

#[test]
fn memory_filesystem_records_permissions() {
    let fs = MemoryFilesystem::new();
    SynthService::new(Box::new(fs.clone()))
        .synthesize(&starter(), "/out")
        .unwrap();

    assert_eq!(fs.list_files().len(), 9);
    assert!(fs.is_executable(Path::new("/out/.husky/commit-msg")));
    assert!(!fs.is_executable(Path::new("/out/package.json")));
    let perms = fs.permissions(Path::new("/out/package.json")).unwrap().unwrap();
    assert!(!perms.writable());
}

#[test]
fn file_in_place_of_root_is_rejected() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("occupied");
    std::fs::write(&file, "x").unwrap();

    let err = SynthService::new(Box::new(LocalFilesystem::new()))
        .synthesize(&starter(), &file)
        .unwrap_err();
    assert!(err.to_string().contains("not a directory"));
}
