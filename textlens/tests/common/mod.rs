use assert_cmd::Command;
use assert_cmd::assert::Assert;
use assert_fs::TempDir;
use assert_fs::prelude::PathCopy;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

fn setup_working_dir(dir_name: &str) -> TempDir {
    let file_path = PathBuf::from(format!(
        "{}/tests/test-cases/{}",
        env!("CARGO_MANIFEST_DIR"),
        dir_name
    ));

    let temp = TempDir::new().unwrap();
    temp.copy_from(file_path, &["*", "**/*"]).unwrap();

    temp
}

pub struct TextlensTestHelper<'a> {
    pub work_dir: TempDir,
    name: &'a str,
    counter: AtomicUsize,
}

#[allow(dead_code)]
impl<'a> TextlensTestHelper<'a> {
    pub fn new(name: &'a str, test_dir: &'a str) -> Self {
        Self {
            work_dir: setup_working_dir(test_dir),
            name,
            counter: AtomicUsize::new(0),
        }
    }

    /// An empty working dir, only builtins will be found.
    pub fn empty(name: &'a str) -> Self {
        Self {
            work_dir: TempDir::new().unwrap(),
            name,
            counter: AtomicUsize::new(0),
        }
    }

    fn command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::cargo_bin("textlens").unwrap();
        cmd.current_dir(self.work_dir.path())
            .env(
                "TEXTLENS_RUN_ID",
                format!(
                    "{}-{}",
                    self.name,
                    self.counter.fetch_add(1, Ordering::Relaxed)
                ),
            )
            .env_remove("TEXTLENS_CONFIG_DIR")
            .env("NO_COLOR", "1")
            .args(args);
        cmd
    }

    pub fn run_command(&self, args: &[&str]) -> Assert {
        self.command(args).assert()
    }

    /// Run with `input` piped to stdin, one answer per line.
    pub fn run_with_input<I>(&self, args: &[&str], input: I) -> Assert
    where
        I: Into<Vec<u8>>,
    {
        self.command(args).write_stdin(input).assert()
    }

    pub fn clean_work_dir(self) {
        self.work_dir.close().unwrap();
    }
}
