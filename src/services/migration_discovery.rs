// マイグレーション検出サービス
//
// MigrationSource から対象ファイル名を取得し、バージョンを解釈して
// バージョン昇順の MigrationSet を構築します。

use crate::core::error::ManifestError;
use crate::core::migration::{MigrationFile, MigrationSet};
use crate::services::traits::MigrationSource;
use crate::services::version_parser::extract_version;
use tracing::debug;

/// マイグレーション検出サービス
#[derive(Debug, Clone, Default)]
pub struct MigrationDiscoveryService {}

impl MigrationDiscoveryService {
    /// 新しいMigrationDiscoveryServiceを作成
    pub fn new() -> Self {
        Self {}
    }

    /// 取得元からマイグレーションを検出する
    ///
    /// # Arguments
    ///
    /// * `source` - マイグレーションの取得元
    ///
    /// # Returns
    ///
    /// バージョン昇順（同一バージョンは一覧順）のマイグレーション集合
    ///
    /// # Errors
    ///
    /// 取得元が返したエラー（`DirectoryNotFound` / `Io`）をそのまま返します。
    pub fn discover(&self, source: &dyn MigrationSource) -> Result<MigrationSet, ManifestError> {
        let filenames = source.eligible_filenames()?;

        let migrations: Vec<MigrationFile> = filenames
            .into_iter()
            .map(|filename| {
                let version = extract_version(&filename);
                MigrationFile::new(filename, version)
            })
            .collect();

        let set = MigrationSet::from_discovered(migrations);
        debug!(
            source = %source.location(),
            count = set.len(),
            "Discovered migrations"
        );

        Ok(set)
    }
}
