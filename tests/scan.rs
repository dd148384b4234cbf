use assert_cmd::Command;
use assert_fs::prelude::*;
use predicates::prelude::*;

fn command() -> Command {
    Command::cargo_bin("apksweep").expect("binary exists")
}

#[test]
fn scan_reports_only_package_files() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("app/build/outputs/app-release.apk").write_binary(&[0u8; 2048]).unwrap();
    temp.child("app/build/outputs/bundle.aab").write_str("bundle").unwrap();
    temp.child("app/build.gradle").write_str("android {}").unwrap();
    temp.child("notes.APK").write_str("wrong case").unwrap();
    temp.child("archive.apk.bak").write_str("backup").unwrap();

    let assert = command()
        .arg("--no-pause")
        .arg(temp.path())
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("app-release.apk - 0.00 MB"))
        .stdout(predicate::str::contains("bundle.aab - 0.00 MB"))
        .stdout(predicate::str::contains("Total size of APK and AAB files: 0.00 MB"))
        .stdout(predicate::str::contains("notes.APK").not())
        .stdout(predicate::str::contains("archive.apk.bak").not())
        .stdout(predicate::str::contains("build.gradle").not());

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    assert_eq!(stdout.matches(" MB\n").count(), 3);
}

#[test]
fn scan_prompts_for_directory_when_no_path_given() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("a.apk").write_binary(&vec![0u8; 1024 * 1024]).unwrap();
    temp.child("nested/b.aab").write_binary(&vec![0u8; 3 * 1024 * 1024]).unwrap();

    let input = format!("{}\nn\n\n", temp.path().display());
    command()
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Enter directory path: "))
        .stdout(predicate::str::contains("a.apk - 1.00 MB"))
        .stdout(predicate::str::contains("b.aab - 3.00 MB"))
        .stdout(predicate::str::contains("Total size of APK and AAB files: 4.00 MB"))
        .stdout(predicate::str::ends_with("Press any key to exit..."));
}

#[test]
fn scan_without_matches_says_none_found() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("readme.md").write_str("# hi").unwrap();

    command()
        .arg(temp.path())
        .write_stdin("\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("No APK or AAB files found."))
        .stdout(predicate::str::contains("Do you want to clean up").not());
}

#[test]
fn scan_rejects_file_root() {
    let temp = assert_fs::TempDir::new().unwrap();
    let file = temp.child("app.apk");
    file.write_str("apk").unwrap();

    command()
        .arg(file.path())
        .assert()
        .failure()
        .stdout(predicate::str::contains("Error:"))
        .stdout(predicate::str::contains("is not a directory"))
        .stdout(predicate::str::contains(" MB").not());

    file.assert(predicate::path::exists());
}

#[test]
fn scan_rejects_missing_root() {
    let temp = assert_fs::TempDir::new().unwrap();

    command()
        .arg(temp.child("missing").path())
        .assert()
        .failure()
        .stdout(predicate::str::contains("Error:"))
        .stdout(predicate::str::contains("does not exist"));
}

#[cfg(unix)]
#[test]
fn scan_skips_unreadable_folder() {
    use std::fs;
    use std::os::unix::fs::PermissionsExt;

    let temp = assert_fs::TempDir::new().unwrap();
    let locked = temp.child("locked");
    locked.child("hidden.apk").write_str("apk").unwrap();
    temp.child("open/visible.apk").write_str("apk").unwrap();
    temp.child("zzz/last.aab").write_str("aab").unwrap();

    fs::set_permissions(locked.path(), fs::Permissions::from_mode(0o000)).unwrap();
    if fs::read_dir(locked.path()).is_ok() {
        // Permissions are not enforced for this user.
        fs::set_permissions(locked.path(), fs::Permissions::from_mode(0o755)).unwrap();
        return;
    }

    let assert = command()
        .arg("--no-pause")
        .arg(temp.path())
        .write_stdin("n\n")
        .assert();

    fs::set_permissions(locked.path(), fs::Permissions::from_mode(0o755)).unwrap();

    let skipped = format!("Skipping folder: {} (Access is denied)", locked.path().display());
    assert
        .success()
        .stdout(predicate::str::contains(skipped))
        .stdout(predicate::str::contains("hidden.apk").not())
        .stdout(predicate::str::contains("visible.apk"))
        .stdout(predicate::str::contains("last.aab"));
}

#[test]
fn version_flag_works() {
    command().arg("--version").assert().success();
}
