use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub struct TestEnv {
    pub temp_dir: TempDir,
    pub work_path: PathBuf,
}

impl TestEnv {
    pub fn new() -> Result<Self, Box<dyn std::error::Error>> {
        let temp_dir = TempDir::with_prefix("lll_test_")?;
        let work_path = temp_dir.path().join("work");
        fs::create_dir_all(&work_path)?;

        Ok(TestEnv {
            temp_dir,
            work_path,
        })
    }

    pub fn create_file(
        &self,
        relative_path: &str,
        content: &str,
    ) -> Result<PathBuf, Box<dyn std::error::Error>> {
        let path = Path::new(relative_path);
        if path.is_absolute()
            || path
                .components()
                .any(|c| matches!(c, std::path::Component::ParentDir))
        {
            return Err("Path must be relative and cannot contain '..' components".into());
        }

        let file_path = self.work_path.join(relative_path);
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&file_path, content)?;
        Ok(file_path)
    }

    /// Writes `.lll/config.toml` in the working directory.
    pub fn write_local_config(&self, content: &str) -> Result<(), Box<dyn std::error::Error>> {
        self.create_file(".lll/config.toml", content)?;
        Ok(())
    }

    /// Writes the per-user config under the isolated XDG_CONFIG_HOME.
    pub fn write_global_config(&self, content: &str) -> Result<(), Box<dyn std::error::Error>> {
        let dir = self.xdg_config_home().join("lll");
        fs::create_dir_all(&dir)?;
        fs::write(dir.join("config.toml"), content)?;
        Ok(())
    }

    pub fn xdg_config_home(&self) -> PathBuf {
        self.temp_dir.path().join("xdg")
    }

    pub fn run_lll(
        &self,
        args: &[&str],
    ) -> Result<std::process::Output, Box<dyn std::error::Error>> {
        let output = assert_cmd::Command::cargo_bin("lll")?
            .args(args)
            .current_dir(&self.work_path)
            .env("XDG_CONFIG_HOME", self.xdg_config_home())
            .env_remove("RUST_LOG")
            .output()?;

        Ok(output)
    }

    pub fn path(&self) -> &Path {
        &self.work_path
    }
}

pub fn stdout_of(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr_of(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[macro_export]
macro_rules! test_env {
    ($name:ident) => {
        let $name = $crate::utils::test_env::TestEnv::new()?;
    };
}
