// マニフェスト生成パイプライン
//
// 検出 → 検証 → 生成 → 書き込み を順に実行し、生成ファイルの上書き方針を適用します。
//
// 上書き方針（実行ごとに生成ファイルの有無と force フラグだけで判断する）:
// - 生成ファイルなし            → 常に生成して書き込む
// - 生成ファイルあり, force=false → 何もせず AlreadyExists を返す（エラーではない）
// - 生成ファイルあり, force=true  → 生成ファイルなしと同様に上書きする

use crate::adapters::manifest_file::ManifestFile;
use crate::core::error::{ManifestError, ValidationWarning};
use crate::core::migration::MigrationSet;
use crate::services::manifest_generator::ManifestGeneratorService;
use crate::services::migration_discovery::MigrationDiscoveryService;
use crate::services::migration_validator::MigrationValidatorService;
use crate::services::traits::MigrationSource;
use serde::Serialize;
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// 生成の結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationOutcome {
    /// 生成ファイルを書き込んだ
    Written {
        /// 出力先
        path: PathBuf,
        /// 書き込んだマイグレーション（生成順）
        migrations: MigrationSet,
        /// 検証時の警告
        warnings: Vec<ValidationWarning>,
    },
    /// 生成ファイルが既に存在するため何もしなかった
    AlreadyExists {
        /// 既存の生成ファイル
        path: PathBuf,
    },
    /// マイグレーションが1件もないため何もしなかった
    NothingToDo,
}

impl GenerationOutcome {
    /// ファイルを書き込んだかどうか
    pub fn is_written(&self) -> bool {
        matches!(self, GenerationOutcome::Written { .. })
    }
}

/// 生成ファイルと現在のマイグレーションとの同期状態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SyncStatus {
    /// 再生成しても内容が変わらない
    InSync,
    /// 再生成すると内容が変わる
    OutOfDate,
    /// 生成ファイルが存在しない
    Missing,
    /// 生成ファイルを読み込めない（UTF-8でない、権限がない等）
    Unreadable,
}

impl std::fmt::Display for SyncStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SyncStatus::InSync => write!(f, "in sync"),
            SyncStatus::OutOfDate => write!(f, "out of date"),
            SyncStatus::Missing => write!(f, "missing"),
            SyncStatus::Unreadable => write!(f, "unreadable"),
        }
    }
}

/// マニフェスト生成パイプライン
pub struct ManifestPipeline<'a> {
    source: &'a dyn MigrationSource,
    output: &'a ManifestFile,
    discovery: MigrationDiscoveryService,
    validator: MigrationValidatorService,
    generator: ManifestGeneratorService,
}

impl<'a> ManifestPipeline<'a> {
    /// 新しいパイプラインを作成
    ///
    /// # Arguments
    ///
    /// * `source` - マイグレーションの取得元
    /// * `output` - 生成ファイル
    pub fn new(source: &'a dyn MigrationSource, output: &'a ManifestFile) -> Self {
        Self {
            source,
            output,
            discovery: MigrationDiscoveryService::new(),
            validator: MigrationValidatorService::new(),
            generator: ManifestGeneratorService::new(),
        }
    }

    /// パイプラインを実行する
    ///
    /// # Errors
    ///
    /// - 取得元のエラー（`DirectoryNotFound` / `Io`）
    /// - バージョン重複（`DuplicateVersion`、すべての組を含む）
    /// - 書き込み失敗（`Io`）
    pub fn run(&self, force: bool) -> Result<GenerationOutcome, ManifestError> {
        if self.output.exists() && !force {
            debug!(path = %self.output.path().display(), "Generated file exists, skipping");
            return Ok(GenerationOutcome::AlreadyExists {
                path: self.output.path().to_path_buf(),
            });
        }

        let migrations = self.discovery.discover(self.source)?;
        if migrations.is_empty() {
            debug!(source = %self.source.location(), "No migrations found");
            return Ok(GenerationOutcome::NothingToDo);
        }

        let validation = self.validator.ensure_valid(&migrations)?;
        let manifest = self.generator.generate(&migrations);
        self.output.write(manifest.as_str())?;

        info!(
            path = %self.output.path().display(),
            count = manifest.entry_count(),
            "Wrote generated migrations"
        );

        Ok(GenerationOutcome::Written {
            path: self.output.path().to_path_buf(),
            migrations,
            warnings: validation.warnings,
        })
    }

    /// 検証済みの集合から生成した内容と、既存の生成ファイルを比較する
    ///
    /// 読み取りのみで、上書き方針には影響しません。
    /// 生成ファイルを読み込めない場合もエラーにせず `Unreadable` を返します。
    pub fn sync_status(&self, migrations: &MigrationSet) -> SyncStatus {
        let current = match self.output.read() {
            Ok(Some(current)) => current,
            Ok(None) => return SyncStatus::Missing,
            Err(e) => {
                warn!(error = %e, "Could not read generated file for sync check");
                return SyncStatus::Unreadable;
            }
        };

        let expected = self.generator.generate(migrations);
        if expected.as_str() == current {
            SyncStatus::InSync
        } else {
            SyncStatus::OutOfDate
        }
    }
}
