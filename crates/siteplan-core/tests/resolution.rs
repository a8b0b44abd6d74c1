//! End-to-end resolution tests.
//!
//! Exercise the full path from manifest and environment signal to the
//! configuration document handed to the build tool.

use siteplan_core::{BuildMode, DeploymentTarget, Integration, Manifest, OutputMode};

#[test]
fn test_production_resolution_targets_pages_deployment() {
    let mode = BuildMode::from_signal(Some("production"));
    let config = Manifest::default().resolve(mode);

    assert!(config.is_production());
    assert_eq!(
        config.site_url(),
        Some("https://kellytom.github.io/Base-Frank1/")
    );
    assert_eq!(config.base_path(), Some("/Base-Frank1/"));
    assert_eq!(config.output, OutputMode::Static);
    assert_eq!(config.integrations, vec![Integration::React]);
    assert_eq!(config.build.assets, "assets");

    assert!(config.site_url().expect("hosted").ends_with('/'));
    assert!(config.base_path().expect("hosted").ends_with('/'));
}

#[test]
fn test_unset_signal_resolution_stays_local() {
    let mode = BuildMode::from_signal(None);
    let config = Manifest::default().resolve(mode);

    assert!(!config.is_production());
    assert_eq!(config.deployment, DeploymentTarget::Local);
    assert_eq!(config.site_url(), None);
    assert_eq!(config.base_path(), None);
    assert_eq!(config.output, OutputMode::Static);
    assert_eq!(config.integrations.len(), 1);
    assert_eq!(config.build.assets, "assets");
}

#[test]
fn test_non_production_signals_stay_local() {
    for signal in ["", "development", "test", "Production", "prod"] {
        let mode = BuildMode::from_signal(Some(signal));
        let config = Manifest::default().resolve(mode);

        assert_eq!(
            config.deployment,
            DeploymentTarget::Local,
            "signal {signal:?} must resolve to a local target"
        );
    }
}

#[test]
fn test_resolution_is_idempotent() {
    let manifest = Manifest::default();

    for mode in [BuildMode::Development, BuildMode::Production] {
        let first = manifest.resolve(mode);
        let second = manifest.resolve(mode);
        assert_eq!(first, second);
        assert_eq!(first.document(), second.document());
    }
}

#[test]
fn test_integrations_are_independent_of_mode() {
    let manifest = Manifest::default();

    for mode in [BuildMode::Development, BuildMode::Production] {
        let config = manifest.resolve(mode);
        assert_eq!(config.integrations, vec![Integration::React]);
        assert_eq!(config.build.assets, "assets");
    }
}

#[test]
fn test_manifest_overrides_deployment_coordinates() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let manifest_path = dir.path().join("siteplan.toml");
    std::fs::write(
        &manifest_path,
        r#"
[site]
owner = "octocat"
repo = "hello-world"
"#,
    )
    .expect("write");

    let manifest = Manifest::load(&manifest_path).expect("load manifest");
    let config = manifest.resolve(BuildMode::Production);

    assert_eq!(
        config.site_url(),
        Some("https://octocat.github.io/hello-world/")
    );
    assert_eq!(config.base_path(), Some("/hello-world/"));
}

#[test]
fn test_production_document_shape() {
    let config = Manifest::default().resolve(BuildMode::Production);
    let json = config.to_json_string().expect("render json");
    let value: serde_json::Value = serde_json::from_str(&json).expect("parse json");

    assert_eq!(
        value["site"],
        serde_json::json!("https://kellytom.github.io/Base-Frank1/")
    );
    assert_eq!(value["base"], serde_json::json!("/Base-Frank1/"));
    assert_eq!(value["output"], serde_json::json!("static"));
    assert_eq!(value["integrations"], serde_json::json!(["react"]));
    assert_eq!(value["build"]["assets"], serde_json::json!("assets"));
}

#[test]
fn test_local_document_omits_site_and_base() {
    let config = Manifest::default().resolve(BuildMode::Development);
    let json = config.to_json_string().expect("render json");
    let value: serde_json::Value = serde_json::from_str(&json).expect("parse json");

    let object = value.as_object().expect("document object");
    assert!(!object.contains_key("site"));
    assert!(!object.contains_key("base"));
    assert_eq!(value["output"], serde_json::json!("static"));

    let toml = config.to_toml_string().expect("render toml");
    assert!(!toml.contains("site ="));
    assert!(!toml.contains("base ="));
}

#[test]
fn test_href_follows_deployment_target() {
    let manifest = Manifest::default();

    let hosted = manifest.resolve(BuildMode::Production);
    assert_eq!(
        hosted.deployment.href("assets/app.js"),
        "/Base-Frank1/assets/app.js"
    );

    let local = manifest.resolve(BuildMode::Development);
    assert_eq!(local.deployment.href("assets/app.js"), "/assets/app.js");
}
