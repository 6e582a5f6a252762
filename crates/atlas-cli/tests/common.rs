#![allow(dead_code)]

use std::{
    fs,
    path::{Path, PathBuf},
};

use assert_cmd::{assert::Assert, cargo::cargo_bin_cmd, Command};
use tempfile::TempDir;

/// A stand-in `pytest` that records its argv and the `TEST_*` variables it saw.
pub struct FakePytest {
    dir: TempDir,
}

impl FakePytest {
    #[cfg(unix)]
    pub fn install(exit_code: i32) -> Self {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::Builder::new()
            .prefix("atlas-fake-pytest")
            .tempdir()
            .expect("tempdir");
        let args_log = dir.path().join("pytest.args");
        let env_log = dir.path().join("pytest.env");
        let script = format!(
            "#!/bin/sh\n\
             : > \"{args}\"\n\
             for arg in \"$@\"; do printf '%s\\n' \"$arg\" >> \"{args}\"; done\n\
             printf 'TEST_ENVIRONMENT=%s\\nTEST_REGION=%s\\nTEST_MARKERS=%s\\n' \
             \"$TEST_ENVIRONMENT\" \"$TEST_REGION\" \"$TEST_MARKERS\" > \"{env}\"\n\
             echo 'fake pytest ran'\n\
             exit {exit_code}\n",
            args = args_log.display(),
            env = env_log.display(),
        );
        let path = dir.path().join("pytest");
        fs::write(&path, script).expect("write fake pytest");
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).expect("chmod fake pytest");
        Self { dir }
    }

    pub fn bin_dir(&self) -> &Path {
        self.dir.path()
    }

    pub fn recorded_args(&self) -> Option<Vec<String>> {
        read_lines(&self.dir.path().join("pytest.args"))
    }

    pub fn recorded_env(&self) -> Option<Vec<String>> {
        read_lines(&self.dir.path().join("pytest.env"))
    }
}

fn read_lines(path: &Path) -> Option<Vec<String>> {
    let contents = fs::read_to_string(path).ok()?;
    Some(contents.lines().map(str::to_string).collect())
}

pub fn prepare_project(prefix: &str) -> (TempDir, PathBuf) {
    let temp = tempfile::Builder::new()
        .prefix(prefix)
        .tempdir()
        .expect("tempdir");
    let project = temp.path().join("suite");
    fs::create_dir_all(&project).expect("create project dir");
    (temp, project)
}

pub fn write_config(project: &Path, environment: &str) {
    let config = project.join("config");
    fs::create_dir_all(&config).expect("create config dir");
    fs::write(config.join(format!("{environment}.yaml")), "base_url: https://example.test\n")
        .expect("write config");
}

/// `atlas-prep` running in `project` with `bin_dir` as the only PATH entry.
pub fn atlas_cmd(project: &Path, bin_dir: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("atlas-prep");
    cmd.current_dir(project)
        .env("PATH", bin_dir)
        .env("NO_COLOR", "1")
        .env_remove("TEST_OPEN_ALLURE")
        .env_remove("TEST_ENVIRONMENT")
        .env_remove("TEST_REGION")
        .env_remove("TEST_MARKERS")
        .env_remove("RUST_LOG");
    cmd
}

pub fn stdout_of(assert: &Assert) -> String {
    String::from_utf8_lossy(&assert.get_output().stdout).to_string()
}

pub fn stderr_of(assert: &Assert) -> String {
    String::from_utf8_lossy(&assert.get_output().stderr).to_string()
}
