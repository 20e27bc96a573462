use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use textside_pdf::{Error, Metadata, Options, create_pdf, create_pdf_with};

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("textside-{name}-{}", std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).expect("create scratch dir");
    dir
}

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|w| w == needle)
}

fn convert(dir: &Path, text: &str) -> Vec<u8> {
    let input = dir.join("in.md");
    let output = dir.join("out.pdf");
    fs::write(&input, text).unwrap();
    create_pdf(&input, &output).expect("conversion failed");
    fs::read(&output).unwrap()
}

#[test]
fn hello_world_produces_pdf() {
    let dir = scratch_dir("hello");
    let bytes = convert(&dir, "Hello, world!");
    assert!(!bytes.is_empty());
    assert!(bytes.starts_with(b"%PDF-"));
    assert!(contains(&bytes, b"(Hello, world!) Tj"));
    assert!(contains(&bytes, b"/Helvetica"));
}

#[test]
fn empty_input_gives_single_page() {
    let dir = scratch_dir("empty");
    let bytes = convert(&dir, "");
    assert!(bytes.starts_with(b"%PDF-"));
    assert!(contains(&bytes, b"/Count 1"));
    assert!(!contains(&bytes, b"Tj"));
}

#[test]
fn missing_input_leaves_no_output() {
    let dir = scratch_dir("missing");
    let output = dir.join("out.pdf");
    let result = create_pdf(&dir.join("nope.md"), &output);
    assert!(matches!(result, Err(Error::Io(_))));
    assert!(!output.exists());
}

#[test]
fn invalid_utf8_leaves_no_output() {
    let dir = scratch_dir("badutf8");
    let input = dir.join("in.md");
    let output = dir.join("out.pdf");
    fs::write(&input, [0x66, 0x6F, 0xC3, 0x28]).unwrap();
    let result = create_pdf(&input, &output);
    assert!(matches!(result, Err(Error::Decode { .. })));
    assert!(!output.exists());
}

#[test]
fn non_latin1_characters_become_placeholders() {
    let dir = scratch_dir("placeholder");
    let bytes = convert(&dir, "price: 5 EUR \u{20AC} ok");
    assert!(contains(&bytes, b"(price: 5 EUR ? ok) Tj"));
}

#[test]
fn long_document_paginates() {
    let dir = scratch_dir("long");
    let text: String = (1..=200).map(|n| format!("Line {n}\n")).collect();
    let bytes = convert(&dir, &text);
    // 54 lines fit between the top margin and the 15 mm page-break margin.
    assert!(contains(&bytes, b"/Count 4"));
}

#[test]
fn repeated_runs_have_equal_length() {
    let dir = scratch_dir("determinism");
    let input = dir.join("in.md");
    fs::write(&input, "# Notes\n\nSome text that wraps around. ".repeat(40)).unwrap();
    let first = dir.join("a.pdf");
    let second = dir.join("b.pdf");
    create_pdf(&input, &first).unwrap();
    create_pdf(&input, &second).unwrap();
    assert_eq!(
        fs::metadata(&first).unwrap().len(),
        fs::metadata(&second).unwrap().len()
    );
}

#[test]
fn pinned_date_gives_identical_bytes() {
    let dir = scratch_dir("pinned");
    let input = dir.join("in.md");
    fs::write(&input, "same text").unwrap();
    let options = Options {
        metadata: Metadata {
            title: Some("Pinned".into()),
            creation_date: "2025-06-01T12:00:00Z".parse().ok(),
        },
        ..Options::default()
    };
    let first = dir.join("a.pdf");
    let second = dir.join("b.pdf");
    create_pdf_with(&input, &first, &options).unwrap();
    create_pdf_with(&input, &second, &options).unwrap();
    assert_eq!(fs::read(&first).unwrap(), fs::read(&second).unwrap());
}

#[test]
fn cli_without_arguments_uses_default_paths() {
    let dir = scratch_dir("cli-default");
    fs::write(dir.join("DOCUMENTATION.md"), "# Project\n\nDocs.\n").unwrap();
    let out = Command::new(env!("CARGO_BIN_EXE_textside-pdf"))
        .current_dir(&dir)
        .output()
        .expect("run binary");
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert_eq!(
        stdout.trim(),
        "PDF created successfully: PROJECT_DOCUMENTATION.pdf"
    );
    let pdf = fs::read(dir.join("PROJECT_DOCUMENTATION.pdf")).unwrap();
    assert!(pdf.starts_with(b"%PDF-"));
}

#[test]
fn cli_accepts_paths_and_flags() {
    let dir = scratch_dir("cli-flags");
    let input = dir.join("notes.txt");
    let output = dir.join("notes.pdf");
    fs::write(&input, "mono").unwrap();
    let out = Command::new(env!("CARGO_BIN_EXE_textside-pdf"))
        .arg(&input)
        .arg(&output)
        .args(["--font", "courier", "--font-size", "12", "--title", "Notes"])
        .output()
        .expect("run binary");
    assert!(out.status.success());
    let pdf = fs::read(&output).unwrap();
    assert!(contains(&pdf, b"/Courier"));
    assert!(contains(&pdf, b"/F1 12 Tf"));
    assert!(contains(&pdf, b"/Title (Notes)"));
}

#[test]
fn cli_accepts_bold_font() {
    let dir = scratch_dir("cli-bold");
    let input = dir.join("notes.txt");
    let output = dir.join("notes.pdf");
    fs::write(&input, "bold").unwrap();
    let out = Command::new(env!("CARGO_BIN_EXE_textside-pdf"))
        .arg(&input)
        .arg(&output)
        .args(["--font", "helvetica-bold"])
        .output()
        .expect("run binary");
    assert!(out.status.success());
    assert!(contains(&fs::read(&output).unwrap(), b"/Helvetica-Bold"));
}

#[test]
fn cli_fails_on_missing_input() {
    let dir = scratch_dir("cli-missing");
    let out = Command::new(env!("CARGO_BIN_EXE_textside-pdf"))
        .current_dir(&dir)
        .output()
        .expect("run binary");
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("file not found"));
    assert!(!dir.join("PROJECT_DOCUMENTATION.pdf").exists());
}
