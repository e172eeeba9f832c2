use dupescan::actions::remove_duplicates;
use dupescan::duplicates::DuplicateFinder;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tempfile::tempdir;

fn write_file(path: &Path, content: &str) {
    File::create(path)
        .unwrap()
        .write_all(content.as_bytes())
        .unwrap();
}

#[test]
fn test_keep_one_leaves_exactly_one_of_three() {
    let dir = tempdir().unwrap();
    for name in ["copy1.txt", "copy2.txt", "copy3.txt"] {
        write_file(&dir.path().join(name), "identical");
    }

    let result = DuplicateFinder::with_defaults()
        .find_duplicates(dir.path())
        .unwrap();
    assert_eq!(result.len(), 1);

    let summary = remove_duplicates(&result, true);
    assert_eq!(summary.deleted_count(), 2);
    assert!(summary.all_succeeded());

    let remaining: Vec<_> = std::fs::read_dir(dir.path())
        .unwrap()
        .filter_map(Result::ok)
        .collect();
    assert_eq!(remaining.len(), 1);
    // The first member in discovery order survives
    assert!(dir.path().join("copy1.txt").exists());
}

#[test]
fn test_keep_none_leaves_zero_of_three() {
    let dir = tempdir().unwrap();
    for name in ["copy1.txt", "copy2.txt", "copy3.txt"] {
        write_file(&dir.path().join(name), "identical");
    }

    let result = DuplicateFinder::with_defaults()
        .find_duplicates(dir.path())
        .unwrap();
    let summary = remove_duplicates(&result, false);

    assert_eq!(summary.deleted_count(), 3);
    let remaining = std::fs::read_dir(dir.path()).unwrap().count();
    assert_eq!(remaining, 0);
}

#[test]
fn test_unique_files_are_never_deleted() {
    let dir = tempdir().unwrap();
    write_file(&dir.path().join("a.txt"), "dup");
    write_file(&dir.path().join("b.txt"), "dup");
    write_file(&dir.path().join("unique.txt"), "one of a kind");

    let result = DuplicateFinder::with_defaults()
        .find_duplicates(dir.path())
        .unwrap();
    let summary = remove_duplicates(&result, true);

    assert_eq!(summary.deleted_count(), 1);
    assert!(dir.path().join("unique.txt").exists());
    assert!(dir.path().join("a.txt").exists());
}

#[test]
fn test_deletion_continues_across_groups_after_failure() {
    let dir = tempdir().unwrap();
    write_file(&dir.path().join("g1_a.txt"), "group one");
    write_file(&dir.path().join("g1_b.txt"), "group one");
    write_file(&dir.path().join("g2_a.txt"), "group two");
    write_file(&dir.path().join("g2_b.txt"), "group two");

    let result = DuplicateFinder::with_defaults()
        .find_duplicates(dir.path())
        .unwrap();
    assert_eq!(result.len(), 2);

    // Remove the first group's victim out from under the deleter
    std::fs::remove_file(dir.path().join("g1_b.txt")).unwrap();

    let summary = remove_duplicates(&result, true);
    assert_eq!(summary.failure_count(), 1);
    // The second group was still processed
    assert_eq!(summary.deleted_count(), 1);
    assert!(!dir.path().join("g2_b.txt").exists());
    assert!(dir.path().join("g2_a.txt").exists());
}

#[cfg(unix)]
#[test]
fn test_undeletable_file_is_reported_and_skipped() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempdir().unwrap();
    let locked = dir.path().join("locked");
    std::fs::create_dir(&locked).unwrap();
    write_file(&locked.join("a.txt"), "dup");
    write_file(&locked.join("b.txt"), "dup");
    write_file(&locked.join("probe.txt"), "unique probe content");
    write_file(&dir.path().join("c.txt"), "dup");

    let result = DuplicateFinder::with_defaults()
        .find_duplicates(dir.path())
        .unwrap();
    assert_eq!(result.len(), 1);
    assert_eq!(result.groups()[0].len(), 3);
    // Discovery order puts c.txt first, so both victims live under locked/
    assert_eq!(result.groups()[0].paths[0], dir.path().join("c.txt"));

    // Read-only parent directory makes its children undeletable
    std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o555)).unwrap();

    // A privileged user is not stopped by directory permissions; skip then
    if std::fs::remove_file(locked.join("probe.txt")).is_ok() {
        std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o755)).unwrap();
        return;
    }

    let summary = remove_duplicates(&result, true);

    // Restore permissions so the tempdir can be cleaned up
    std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o755)).unwrap();

    assert_eq!(summary.failure_count(), 2);
    assert_eq!(summary.deleted_count(), 0);
    assert!(dir.path().join("c.txt").exists());
    assert!(locked.join("a.txt").exists());
    assert!(locked.join("b.txt").exists());
}
