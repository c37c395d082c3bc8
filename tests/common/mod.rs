use assert_cmd::Command;
use std::path::Path;

pub fn moodj_cmd() -> Command {
    let mut cmd = Command::cargo_bin("moodj").unwrap();
    cmd.env_remove("MOODJ_FILE");
    cmd.env_remove("MOODJ_CONFIG");
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Command running inside `dir`, using its default `entries.json`
pub fn moodj_in(dir: &Path) -> Command {
    let mut cmd = moodj_cmd();
    cmd.current_dir(dir);
    cmd
}

#[allow(dead_code)]
pub fn add_entry(dir: &Path, date: &str, mood: &str, title: &str, tags: &str) {
    moodj_in(dir)
        .args(["add", "--date", date, "--mood", mood, "--title", title])
        .args(["--tags", tags])
        .assert()
        .success();
}
