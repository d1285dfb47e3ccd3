// コマンド共通コンテキスト
//
// 設定ファイル読み込みやパス解決の重複をCLI層で集約する。

use crate::adapters::manifest_file::ManifestFile;
use crate::adapters::migration_directory::MigrationDirectory;
use crate::core::config::Config;
use anyhow::{anyhow, Context, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

/// CLIコマンド共通の実行コンテキスト
#[derive(Debug, Clone)]
pub struct CommandContext {
    pub project_path: PathBuf,
    /// 読み込んだ設定ファイル（既定値を使用した場合は None）
    pub config_path: Option<PathBuf>,
    pub config: Config,
}

impl CommandContext {
    /// プロジェクトルートから設定を読み込んでコンテキストを作成
    ///
    /// 既定の設定ファイルが存在しない場合は既定値を使用します。
    pub fn load(project_path: PathBuf) -> Result<Self> {
        Self::load_with_config(project_path, None)
    }

    /// カスタム設定ファイルパスを指定してコンテキストを作成
    ///
    /// 明示的に指定された設定ファイルが存在しない場合はエラーです。
    pub fn load_with_config(project_path: PathBuf, config_path: Option<PathBuf>) -> Result<Self> {
        let (config_path, config) = match config_path {
            Some(path) => {
                if !path.exists() {
                    return Err(anyhow!("Config file not found: {:?}", path));
                }
                let config =
                    Config::from_file(&path).with_context(|| "Failed to read config file")?;
                (Some(path), config)
            }
            None => {
                let default_path = project_path.join(Config::DEFAULT_CONFIG_PATH);
                if default_path.exists() {
                    let config = Config::from_file(&default_path)
                        .with_context(|| "Failed to read config file")?;
                    (Some(default_path), config)
                } else {
                    (None, Config::default())
                }
            }
        };

        debug!(config_path = ?config_path, "Resolved configuration");

        Ok(Self {
            project_path,
            config_path,
            config,
        })
    }

    /// マイグレーションディレクトリの絶対パス
    pub fn migrations_dir(&self) -> PathBuf {
        self.project_path.join(&self.config.migrations_dir)
    }

    /// 生成ファイルの絶対パス
    pub fn generated_file_path(&self) -> PathBuf {
        self.migrations_dir().join(&self.config.output_file)
    }

    /// マイグレーションディレクトリのアダプター
    pub fn migration_directory(&self) -> MigrationDirectory {
        MigrationDirectory::new(self.migrations_dir(), self.config.extension.clone())
    }

    /// 生成ファイルのアダプター
    pub fn manifest_file(&self) -> ManifestFile {
        ManifestFile::new(self.generated_file_path())
    }

    /// プロジェクトルートからの相対パスで表示用文字列を作る
    pub fn display_path(&self, path: &Path) -> String {
        path.strip_prefix(&self.project_path)
            .unwrap_or(path)
            .display()
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_without_config_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let context = CommandContext::load(temp_dir.path().to_path_buf()).unwrap();

        assert!(context.config_path.is_none());
        assert_eq!(
            context.generated_file_path(),
            temp_dir
                .path()
                .join("src-tauri/migrations/generated_migrations.rs")
        );
        assert_eq!(
            context.display_path(&context.generated_file_path()),
            "src-tauri/migrations/generated_migrations.rs"
        );
    }

    #[test]
    fn test_load_reads_default_config_file() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join(Config::DEFAULT_CONFIG_PATH),
            "migrations_dir: db\noutput_file: embedded.rs\n",
        )
        .unwrap();

        let context = CommandContext::load(temp_dir.path().to_path_buf()).unwrap();

        assert!(context.config_path.is_some());
        assert_eq!(context.migrations_dir(), temp_dir.path().join("db"));
        assert_eq!(
            context.generated_file_path(),
            temp_dir.path().join("db").join("embedded.rs")
        );
    }

    #[test]
    fn test_load_with_missing_explicit_config_fails() {
        let temp_dir = TempDir::new().unwrap();
        let result = CommandContext::load_with_config(
            temp_dir.path().to_path_buf(),
            Some(temp_dir.path().join("custom.yaml")),
        );

        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Config file not found"));
    }

    #[test]
    fn test_load_with_invalid_config_fails() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("custom.yaml");
        fs::write(&config_path, "output_file: all.sql\n").unwrap();

        let result = CommandContext::load_with_config(temp_dir.path().to_path_buf(), Some(config_path));

        assert!(result.is_err());
    }
}
