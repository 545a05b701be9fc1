#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

mod common;

use common::FakeSpawner;
use linklaunch::{HostOsFamily, Launcher, LauncherConfig};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_launcher_from_yaml_config() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("launcher.yaml");
    fs::write(
        &path,
        "native: false\nplatform: Linux\nlinux_openers:\n  - command: xdg-open\n    args: \"%s\"\n",
    )
    .unwrap();

    let config = LauncherConfig::load(&path).unwrap();
    let spawner = FakeSpawner::succeeding();
    let launcher = Launcher::from_config_with_spawner(&config, spawner.clone());

    assert!(!launcher.has_desktop());
    assert_eq!(launcher.fallback().os(), HostOsFamily::Linux);

    assert!(launcher.launch_github("testuser").is_success());
    assert_eq!(
        spawner.calls(),
        vec![vec![
            "xdg-open".to_string(),
            "http://github.com/testuser".to_string()
        ]]
    );
}

#[test]
fn test_unknown_platform_config_fails_without_spawning() {
    let config = LauncherConfig::from_yaml_str("native: false\nplatform: Plan 9\n").unwrap();
    let spawner = FakeSpawner::succeeding();
    let launcher = Launcher::from_config_with_spawner(&config, spawner.clone());

    assert!(!launcher.launch_telegram("alice").is_success());
    assert!(spawner.calls().is_empty());
}
