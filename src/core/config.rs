// 設定ファイル管理
//
// プロジェクトの設定ファイル（YAML形式）の読み込みと検証を行います。
// 設定ファイルは任意で、存在しない場合は既定値を使用します。

use crate::core::naming;
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// プロジェクト設定
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// マイグレーションディレクトリ（プロジェクトルートからの相対パス）
    #[serde(default = "default_migrations_dir")]
    pub migrations_dir: PathBuf,

    /// 生成ファイル名（マイグレーションディレクトリ内）
    #[serde(default = "default_output_file")]
    pub output_file: String,

    /// マイグレーションファイルとして扱う拡張子（ドットなし、大文字小文字を区別）
    #[serde(default = "default_extension")]
    pub extension: String,
}

fn default_migrations_dir() -> PathBuf {
    PathBuf::from(naming::MIGRATIONS_DIR)
}

fn default_output_file() -> String {
    naming::GENERATED_FILE.to_string()
}

fn default_extension() -> String {
    naming::MIGRATION_EXTENSION.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            migrations_dir: default_migrations_dir(),
            output_file: default_output_file(),
            extension: default_extension(),
        }
    }
}

impl Config {
    /// デフォルトの設定ファイルパス
    pub const DEFAULT_CONFIG_PATH: &'static str = naming::CONFIG_FILE;

    /// 設定ファイルを読み込んで検証する
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        let config: Config = content.parse()?;
        config.validate()?;
        Ok(config)
    }

    /// 設定の妥当性を検証
    pub fn validate(&self) -> Result<()> {
        if self.migrations_dir.as_os_str().is_empty() {
            return Err(anyhow!("migrations_dir must not be empty"));
        }

        if self.output_file.is_empty() {
            return Err(anyhow!("output_file must not be empty"));
        }

        if self.output_file.contains('/') || self.output_file.contains('\\') {
            return Err(anyhow!(
                "output_file must be a file name, not a path: {}",
                self.output_file
            ));
        }

        if self.extension.is_empty() || self.extension.starts_with('.') {
            return Err(anyhow!(
                "extension must be non-empty and given without a leading dot: '{}'",
                self.extension
            ));
        }

        // 生成ファイル自体がマイグレーションとして検出されないこと
        if Path::new(&self.output_file)
            .extension()
            .is_some_and(|ext| ext == self.extension.as_str())
        {
            return Err(anyhow!(
                "output_file '{}' must not use the migration extension '.{}'",
                self.output_file,
                self.extension
            ));
        }

        Ok(())
    }
}

impl FromStr for Config {
    type Err = anyhow::Error;

    fn from_str(yaml: &str) -> Result<Self, Self::Err> {
        serde_saphyr::from_str(yaml).with_context(|| "Failed to parse config file")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.migrations_dir, PathBuf::from("src-tauri/migrations"));
        assert_eq!(config.output_file, "generated_migrations.rs");
        assert_eq!(config.extension, "sql");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_partial_config_uses_defaults() {
        let config: Config = "migrations_dir: db/migrations\n".parse().unwrap();

        assert_eq!(config.migrations_dir, PathBuf::from("db/migrations"));
        assert_eq!(config.output_file, "generated_migrations.rs");
        assert_eq!(config.extension, "sql");
    }

    #[test]
    fn test_validate_rejects_output_with_migration_extension() {
        let config = Config {
            output_file: "all.sql".to_string(),
            ..Config::default()
        };

        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("must not use the migration extension"));
    }

    #[test]
    fn test_validate_rejects_dotted_extension() {
        let config = Config {
            extension: ".sql".to_string(),
            ..Config::default()
        };

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_output_path() {
        let config = Config {
            output_file: "../out.rs".to_string(),
            ..Config::default()
        };

        assert!(config.validate().is_err());
    }
}
