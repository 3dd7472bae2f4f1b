use std::fs;
use std::path::PathBuf;

use probdist_cli::config::NotebookConfig;
use probdist_cli::notebook::{NotebookRunner, RenderMode};
use probdist_core::DistributionSnapshot;
use sha2::{Digest, Sha256};
use tempfile::tempdir;

fn sample_notebook(snapshot_dir: &std::path::Path) -> NotebookConfig {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("notebooks/notebook.yaml");
    let mut cfg = NotebookConfig::from_path(&path).expect("sample notebook loads");
    cfg.outputs.snapshot_dir = Some(snapshot_dir.display().to_string());
    cfg.validate().expect("config validates");
    cfg
}

#[test]
fn sample_notebook_renders_stable_text() {
    let dir = tempdir().expect("temp dir");
    let config = sample_notebook(&dir.path().join("snapshots"));
    let outputs = config.resolved_outputs();

    let runner = NotebookRunner::new(config, outputs).expect("runner created");
    let mut out = Vec::new();
    let summary = runner
        .run(None, RenderMode::Text, &mut out)
        .expect("notebook renders");

    assert_eq!(summary.rendered, 5);
    let text = String::from_utf8(out).expect("rendering is utf8");
    assert_eq!(text.lines().count(), 21);

    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    let actual = hex::encode(hasher.finalize());
    assert_eq!(
        actual, "cfa08a913732ebb4775e800839f12b18b92f658b4e9f54ebc710d79770a3a770",
        "rendering changed; update expected value if intentional:\n{text}"
    );
}

#[test]
fn sample_notebook_snapshots_restore() {
    let dir = tempdir().expect("temp dir");
    let config = sample_notebook(&dir.path().join("snapshots"));
    let outputs = config.resolved_outputs();

    let runner = NotebookRunner::new(config, outputs).expect("runner created");
    let summary = runner
        .run(None, RenderMode::Json, &mut Vec::new())
        .expect("notebook renders");

    assert_eq!(summary.snapshots.len(), 5);
    for ((name, original), path) in runner.distributions().zip(&summary.snapshots) {
        assert!(path.ends_with(format!("{name}.json")));
        let json = fs::read_to_string(path).expect("snapshot readable");
        let restored = DistributionSnapshot::from_json(&json)
            .expect("snapshot decodes")
            .restore()
            .expect("snapshot restores");
        assert_eq!(&restored, original, "{name}");
    }
}
