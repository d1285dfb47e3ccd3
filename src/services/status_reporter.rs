// ステータスレポーターサービス
//
// マイグレーションディレクトリと生成ファイルの状態を読み取り専用で集計します。
// 入力の欠如はエラーではなく状態として報告します。

use crate::adapters::manifest_file::ManifestFile;
use crate::adapters::migration_directory::MigrationDirectory;
use crate::core::error::ManifestError;
use serde::Serialize;
use std::path::PathBuf;

/// ステータスレポート
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusReport {
    /// マイグレーションディレクトリのパス
    pub migrations_dir: PathBuf,
    /// 生成ファイルのパス
    pub generated_file: PathBuf,
    /// マイグレーションディレクトリが存在するか
    pub directory_exists: bool,
    /// 生成ファイルが存在するか
    pub generated_exists: bool,
    /// 対象マイグレーションファイル数
    pub migration_count: usize,
}

/// ステータスレポーターサービス
#[derive(Debug, Clone, Default)]
pub struct StatusReporterService {}

impl StatusReporterService {
    /// 新しいStatusReporterServiceを作成
    pub fn new() -> Self {
        Self {}
    }

    /// 状態を集計する
    ///
    /// # Errors
    ///
    /// ディレクトリの存在を確認できない、または存在するが読み込めない場合のみ `Io` を返します。
    pub fn report(
        &self,
        directory: &MigrationDirectory,
        generated: &ManifestFile,
    ) -> Result<StatusReport, ManifestError> {
        let directory_exists = directory.try_exists()?;
        let migration_count = if directory_exists {
            directory.entries()?.len()
        } else {
            0
        };

        Ok(StatusReport {
            migrations_dir: directory.path().to_path_buf(),
            generated_file: generated.path().to_path_buf(),
            directory_exists,
            generated_exists: generated.exists(),
            migration_count,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_report_counts_eligible_files() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path();
        for name in ["0001_a.sql", "0002_b.sql", "0003_c.sql", "notes.md"] {
            fs::write(path.join(name), "").unwrap();
        }

        let directory = MigrationDirectory::new(path, "sql");
        let generated = ManifestFile::new(path.join("generated_migrations.rs"));
        let report = StatusReporterService::new()
            .report(&directory, &generated)
            .unwrap();

        assert!(report.directory_exists);
        assert!(!report.generated_exists);
        assert_eq!(report.migration_count, 3);
    }

    #[test]
    fn test_report_missing_directory_is_not_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("missing");

        let directory = MigrationDirectory::new(&missing, "sql");
        let generated = ManifestFile::new(missing.join("generated_migrations.rs"));
        let report = StatusReporterService::new()
            .report(&directory, &generated)
            .unwrap();

        assert!(!report.directory_exists);
        assert!(!report.generated_exists);
        assert_eq!(report.migration_count, 0);
    }

    #[test]
    fn test_report_unreadable_directory_is_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let not_a_dir = temp_dir.path().join("migrations");
        fs::write(&not_a_dir, "").unwrap();

        let directory = MigrationDirectory::new(&not_a_dir, "sql");
        let generated = ManifestFile::new(temp_dir.path().join("generated_migrations.rs"));
        let err = StatusReporterService::new()
            .report(&directory, &generated)
            .unwrap_err();

        assert!(err.is_io());
        assert!(err.to_string().starts_with("Failed to read directory"));
    }
}
