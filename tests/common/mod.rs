#![allow(dead_code)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub struct TestEnv {
    tmp: TempDir,
    pub home: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let home = tmp.path().join("home");
        fs::create_dir_all(&home).expect("create isolated home");
        Self { tmp, home }
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("stormsense");
        cmd.env("HOME", &self.home).env_remove("RUST_LOG");
        cmd
    }

    pub fn run_json(&self, args: &[&str]) -> Value {
        let out = self
            .cmd()
            .arg("--json")
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }

    pub fn config_path(&self) -> PathBuf {
        self.home.join(".config/stormsense/config.toml")
    }

    pub fn write_config(&self, body: &str) {
        let path = self.config_path();
        fs::create_dir_all(path.parent().expect("config dir")).expect("create config dir");
        fs::write(path, body).expect("write config");
    }

    pub fn write_file(&self, name: &str, body: &str) -> PathBuf {
        let path = self.tmp.path().join(name);
        fs::write(&path, body).expect("write fixture");
        path
    }
}

pub const SCENARIOS: &str = r#"
[[scenario]]
name = "coastal-apartment"
wind_speed = 80
hours_to_landfall = 20
family_size = 3
has_car = false
has_pets = true

[[scenario]]
name = "inland-house"
wind_speed = 40
hours_to_landfall = 48
family_size = 2
has_car = true

[[scenario]]
name = "big-family"
wind_speed = 65
hours_to_landfall = 36
family_size = 6
has_car = true
has_elderly_or_disabled = true
"#;
