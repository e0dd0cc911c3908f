//! End-to-end tests for the `dombind` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

const VOCAB_YAML: &str = r#"
namespace: "http://www.w3.org/1999/xhtml"
version:
  ref: "https://html.spec.whatwg.org/"
  pubdate: "2024-01-01"
elements:
  a:
    description: "Hyperlink"
    ref: "https://html.spec.whatwg.org/#the-a-element"
    interface: HTMLAnchorElement
    attributes:
      hidden:
        description: "Hides the element"
        ref: "https://html.spec.whatwg.org/#attr-hidden"
        values:
          type: boolean
      href:
        description: "Destination of the hyperlink"
        ref: "https://html.spec.whatwg.org/#attr-hyperlink-href"
        values:
          type: string
  div:
    description: "Generic container"
    ref: "https://html.spec.whatwg.org/#the-div-element"
    interface: HTMLDivElement
    attributes:
      hidden:
        description: "Hides the element"
        ref: "https://html.spec.whatwg.org/#attr-hidden"
        values:
          type: boolean
"#;

#[test]
fn test_generate_typescript_from_yaml() {
    let dir = tempfile::tempdir().expect("temp dir");
    let schema_path = dir.path().join("html.yaml");
    let out_path = dir.path().join("html.ts");
    fs::write(&schema_path, VOCAB_YAML).unwrap();

    Command::cargo_bin("dombind")
        .unwrap()
        .args(["generate", "typescript"])
        .arg(&schema_path)
        .arg("--out")
        .arg(&out_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Generated TypeScript bindings"));

    let module = fs::read_to_string(&out_path).unwrap();
    assert!(module.contains("export const domNamespace = \"http://www.w3.org/1999/xhtml\";"));
    // `hidden` is shared, `href` is anchor-specific.
    assert!(module.contains("type GlobalAttributes<IFace extends Element> = {"));
    assert!(module.contains("export type aAttribs"));
    assert!(module.contains("\"href\"?: string;"));
    assert!(module.contains("\"div\": GlobalAttributes<HTMLDivElement>;"));
}

#[test]
fn test_runtime_import_flag() {
    let dir = tempfile::tempdir().expect("temp dir");
    let schema_path = dir.path().join("html.yaml");
    let out_path = dir.path().join("html.ts");
    fs::write(&schema_path, VOCAB_YAML).unwrap();

    Command::cargo_bin("dombind")
        .unwrap()
        .args(["generate", "typescript"])
        .arg(&schema_path)
        .arg("--out")
        .arg(&out_path)
        .args(["--runtime-import", "@dombind/runtime"])
        .assert()
        .success();

    let module = fs::read_to_string(&out_path).unwrap();
    assert!(module.contains("from '@dombind/runtime';"));
}

#[test]
fn test_unsupported_extension_fails() {
    let dir = tempfile::tempdir().expect("temp dir");
    let schema_path = dir.path().join("html.toml");
    fs::write(&schema_path, "namespace = 'x'").unwrap();

    Command::cargo_bin("dombind")
        .unwrap()
        .args(["generate", "typescript"])
        .arg(&schema_path)
        .arg("--out")
        .arg(dir.path().join("html.ts"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported input file type"));
}

#[test]
fn test_event_prefixed_attribute_fails() {
    let vocab = VOCAB_YAML.replace("      href:", "      onfocus:");
    let dir = tempfile::tempdir().expect("temp dir");
    let schema_path = dir.path().join("html.yaml");
    let out_path = dir.path().join("html.ts");
    fs::write(&schema_path, vocab).unwrap();

    Command::cargo_bin("dombind")
        .unwrap()
        .args(["generate", "typescript"])
        .arg(&schema_path)
        .arg("--out")
        .arg(&out_path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("reserved 'on' prefix"));

    assert!(!out_path.exists(), "no partial output may be written");
}

#[test]
fn test_missing_input_fails() {
    let dir = tempfile::tempdir().expect("temp dir");

    Command::cargo_bin("dombind")
        .unwrap()
        .args(["generate", "typescript"])
        .arg(dir.path().join("nope.yaml"))
        .arg("--out")
        .arg(dir.path().join("html.ts"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("error reading"));
}
