//! Integration tests for the vastu CLI.
//!
//! These run the real binary and check end-to-end behavior.

use assert_cmd::Command;
use assert_fs::prelude::*;
use assert_fs::TempDir;
use predicates::prelude::*;

fn vastu() -> Command {
    Command::cargo_bin("vastu").expect("vastu binary should be built")
}

const TRIANGLE_BOARD: &str = r#"
polygon:
  - { x: 100, y: 100 }
  - { x: 560, y: 120 }
  - { x: 300, y: 560 }
rotation: 10
"#;

#[test]
fn derive_default_board_outputs_json() {
    let output = vastu().arg("derive").output().expect("Failed to execute command");
    assert!(output.status.success(), "derive should succeed");

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).expect("Output should be valid JSON");
    assert_eq!(json["directions"].as_array().map(Vec::len), Some(32), "Should have 32 direction points");
    assert_eq!(json["zones"].as_array().map(Vec::len), Some(45), "Should have 45 zones");
    assert_eq!(json["marma"]["core"].as_array().map(Vec::len), Some(9), "Should have 9 core marma points");
    assert_eq!(json["directions"][0]["label"], "E5", "First direction point should be E5");
    assert!((json["centroid"]["x"].as_f64().unwrap() - 340.0).abs() < 1e-9);
}

#[test]
fn derive_reads_board_file() {
    let dir = TempDir::new().unwrap();
    let board = dir.child("board.yaml");
    board.write_str(TRIANGLE_BOARD).unwrap();

    let output = vastu()
        .args(["derive", "--compact"])
        .arg(board.path())
        .output()
        .expect("Failed to execute command");
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["rotation"], 10.0);
    assert_eq!(json["rays"].as_array().map(Vec::len), Some(32));
}

#[test]
fn derive_rejects_malformed_board() {
    let dir = TempDir::new().unwrap();
    let board = dir.child("bad.yaml");
    board.write_str("polygon:\n  - { x: 1, y: 1 }\n").unwrap();

    vastu()
        .arg("derive")
        .arg(board.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid board file"));
}

#[test]
fn render_writes_svg_with_layers() {
    vastu()
        .arg("render")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("<?xml"))
        .stdout(predicate::str::contains("<svg"))
        .stdout(predicate::str::contains("id=\"rays\""))
        .stdout(predicate::str::contains("<title>1 Brahma</title>"))
        .stdout(predicate::str::contains("</svg>"));
}

#[test]
fn render_hides_layers() {
    vastu()
        .args(["render", "--hide", "rays,zones"])
        .assert()
        .success()
        .stdout(predicate::str::contains("id=\"rays\"").not())
        .stdout(predicate::str::contains("Brahma").not())
        .stdout(predicate::str::contains("id=\"outline\""));
}

#[test]
fn export_writes_png_and_jpeg() {
    let dir = TempDir::new().unwrap();
    for name in ["board.png", "board.jpg"] {
        let out = dir.child(name);
        vastu()
            .args(["export", "--scale", "0.5", "-o"])
            .arg(out.path())
            .assert()
            .success();
        out.assert(predicate::path::is_file());

        let image = image::open(out.path()).expect("exported image should decode");
        assert_eq!((image.width(), image.height()), (338, 338), "{name} size");
    }
}

#[test]
fn export_rejects_unknown_format() {
    let dir = TempDir::new().unwrap();
    vastu()
        .args(["export", "-o"])
        .arg(dir.child("board.bmp").path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported export format"));
}

#[test]
fn hover_names_zones() {
    let cases = [
        ("340,340", "1 Brahma"),
        ("540,335", "Mahendra"),
        ("150,150", "Roga"),
        ("5,5", "none"),
    ];
    for (at, expected) in cases {
        vastu()
            .args(["hover", "--at", at])
            .assert()
            .success()
            .stdout(predicate::str::contains(expected));
    }
}

#[test]
fn hover_json_is_null_outside() {
    vastu()
        .args(["hover", "--json", "--at", "5,5"])
        .assert()
        .success()
        .stdout(predicate::str::diff("null\n"));
}

#[test]
fn labels_lists_32_rays() {
    let output = vastu().arg("labels").output().expect("Failed to execute command");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.lines().count(), 33, "Header plus one row per ray");
    assert!(stdout.contains("E5"));
    assert!(stdout.contains("N1"));
}

#[test]
fn edit_creates_and_updates_board() {
    let dir = TempDir::new().unwrap();
    let board = dir.child("board.yaml");

    vastu().arg("edit").arg(board.path()).args(["rotate", "45"]).assert().success();
    board.assert(predicate::str::contains("rotation: 45"));

    vastu()
        .arg("edit")
        .arg(board.path())
        .args(["move", "0", "101,99", "--snap"])
        .assert()
        .success();
    board.assert(predicate::str::contains("x: 100.0"));

    vastu()
        .arg("derive")
        .arg(board.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"rotation\": 45.0"));
}

#[test]
fn rejected_edit_leaves_board_untouched() {
    let dir = TempDir::new().unwrap();
    let board = dir.child("board.yaml");
    board.write_str(TRIANGLE_BOARD).unwrap();

    vastu()
        .arg("edit")
        .arg(board.path())
        .args(["delete", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least 3"));
    board.assert(TRIANGLE_BOARD);

    vastu()
        .arg("edit")
        .arg(board.path())
        .args(["centroid", "300,300"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("free mode"));
    board.assert(TRIANGLE_BOARD);
}

#[test]
fn import_svg_outline() {
    let dir = TempDir::new().unwrap();
    let plan = dir.child("plan.svg");
    plan.write_str(
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 676 676">
            <rect x="10" y="10" width="30" height="30"/>
            <rect x="150" y="100" width="400" height="450"/>
        </svg>"#,
    )
    .unwrap();
    let board = dir.child("board.yaml");

    vastu().arg("import").arg(plan.path()).arg("-o").arg(board.path()).assert().success();
    board.assert(predicate::str::contains("x: 150.0"));
    board.assert(predicate::str::contains("background").not());

    vastu()
        .args(["hover", "--at", "350,325"])
        .arg(board.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Brahma"));
}

#[test]
fn import_background_image() {
    let dir = TempDir::new().unwrap();
    let plan = dir.child("plan.png");
    image::RgbaImage::new(4, 4).save(plan.path()).unwrap();
    let board = dir.child("board.yaml");

    vastu().arg("import").arg(plan.path()).arg("-o").arg(board.path()).assert().success();
    board.assert(predicate::str::contains("background: plan.png"));

    vastu()
        .arg("render")
        .arg(board.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("<image"));
}

#[test]
fn import_rejects_other_file_types() {
    let dir = TempDir::new().unwrap();
    let plan = dir.child("plan.gif");
    plan.write_binary(b"GIF89a").unwrap();

    vastu()
        .arg("import")
        .arg(plan.path())
        .arg("-o")
        .arg(dir.child("board.yaml").path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("image/jpeg, image/png, image/jpg, application/pdf"));
}
