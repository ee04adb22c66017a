//! End-to-end tests for the `gallery-manifest` binary.

mod common;

use assert_cmd::Command;
use common::TestSite;
use predicates::prelude::*;
use serde_json::json;

#[allow(deprecated)]
fn gallery_cmd(site: &TestSite) -> Command {
    let mut cmd = Command::cargo_bin("gallery-manifest").unwrap();
    cmd.current_dir(&site.path);
    cmd
}

const MANIFEST: &str = "assets/gallery/manifest.json";

#[test]
fn builds_albums_and_ungrouped() {
    let site = TestSite::new();
    site.touch("assets/gallery/Trip/b.jpg");
    site.touch("assets/gallery/Trip/a.png");
    site.touch("assets/gallery/sunset.JPG");
    site.write_file("assets/gallery/Empty/notes.txt", "not an image");

    gallery_cmd(&site)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "with 1 albums, 3 photos (1 ungrouped)",
        ));

    assert_eq!(
        site.read_json(MANIFEST),
        json!({
            "albums": [{
                "title": "Trip",
                "folder": "Trip",
                "cover": "a.png",
                "photos": [
                    {"file": "a.png", "caption": ""},
                    {"file": "b.jpg", "caption": ""}
                ]
            }],
            "ungrouped": [{"file": "sunset.JPG", "caption": ""}]
        })
    );
}

#[test]
fn hand_edited_caption_survives_rerun() {
    let site = TestSite::new();
    site.touch("assets/gallery/Trip/a.png");
    site.touch("assets/gallery/Trip/b.jpg");
    gallery_cmd(&site).assert().success();

    let mut manifest = site.read_json(MANIFEST);
    manifest["albums"][0]["photos"][0]["caption"] = json!("Golden hour");
    site.write_file(MANIFEST, &serde_json::to_string_pretty(&manifest).unwrap());

    gallery_cmd(&site).assert().success();

    let manifest = site.read_json(MANIFEST);
    assert_eq!(manifest["albums"][0]["photos"][0]["caption"], "Golden hour");
    assert_eq!(manifest["albums"][0]["photos"][1]["caption"], "");
}

#[test]
fn rename_resets_caption() {
    let site = TestSite::new();
    site.touch("assets/gallery/Trip/a.png");
    site.write_file(
        MANIFEST,
        r#"{"albums": [{"folder": "Trip", "photos": [{"file": "a.png", "caption": "Golden hour"}]}], "ungrouped": []}"#,
    );
    std::fs::rename(
        site.path.join("assets/gallery/Trip/a.png"),
        site.path.join("assets/gallery/Trip/a2.png"),
    )
    .unwrap();

    gallery_cmd(&site).assert().success();

    let manifest = site.read_json(MANIFEST);
    assert_eq!(manifest["albums"][0]["photos"][0]["file"], "a2.png");
    assert_eq!(manifest["albums"][0]["photos"][0]["caption"], "");
}

#[test]
fn rerun_without_changes_is_byte_identical() {
    let site = TestSite::new();
    site.touch("assets/gallery/Trip/a.png");
    site.touch("assets/gallery/solo.webp");

    gallery_cmd(&site).assert().success();
    let first = site.read_file(MANIFEST);
    gallery_cmd(&site).assert().success();

    assert_eq!(site.read_file(MANIFEST), first);
    assert!(first.ends_with("}\n"));
}

#[test]
fn invalid_manifest_json_fails_and_is_kept() {
    let site = TestSite::new();
    site.touch("assets/gallery/a.jpg");
    site.write_file(MANIFEST, "{ not json");

    gallery_cmd(&site)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Invalid JSON in"));

    assert_eq!(site.read_file(MANIFEST), "{ not json");
}

#[test]
fn unrecognized_manifest_shape_fails() {
    let site = TestSite::new();
    site.write_file(MANIFEST, "42");

    gallery_cmd(&site)
        .assert()
        .failure()
        .stderr(predicate::str::contains("must be either an array"));
}

#[test]
fn missing_gallery_directory_fails() {
    let site = TestSite::new();

    gallery_cmd(&site)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Gallery directory does not exist"));
}

#[test]
fn verbose_prints_inventory() {
    let site = TestSite::new();
    site.touch("assets/gallery/Trip/a.png");
    site.touch("assets/gallery/solo.gif");

    gallery_cmd(&site)
        .arg("-v")
        .assert()
        .success()
        .stdout(predicate::str::contains("001 Trip (1 photos)"))
        .stdout(predicate::str::contains("Cover: a.png"))
        .stdout(predicate::str::contains("Ungrouped"));
}
