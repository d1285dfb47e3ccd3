// マイグレーションバリデーターサービス
//
// 検出されたマイグレーション集合の構造的な整合性を検証します。
// - バージョンの重複（エラー）
// - バージョンを解釈できなかったファイル（警告）
// - NNNN_description 形式に従わないファイル名（警告）

use crate::core::error::{
    ManifestError, ValidationError, ValidationResult, ValidationWarning,
};
use crate::core::migration::{MigrationSet, VersionConflict};
use crate::services::version_parser::file_stem;
use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

static FILENAME_FORMAT: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[0-9]+_\S+$").ok());

/// マイグレーションバリデーターサービス
#[derive(Debug, Clone, Default)]
pub struct MigrationValidatorService {}

impl MigrationValidatorService {
    /// 新しいMigrationValidatorServiceを作成
    pub fn new() -> Self {
        Self {}
    }

    /// マイグレーション集合を検証する
    ///
    /// バージョンごとに最初に現れたファイルを記録し、以降に同じバージョンを持つ
    /// ファイルごとに重複を1件記録します。最初の重複で打ち切らず、すべてを報告します。
    /// 空の集合は有効です。
    pub fn validate(&self, set: &MigrationSet) -> ValidationResult {
        let mut result = ValidationResult::new();
        let mut first_seen: HashMap<u64, &str> = HashMap::new();

        for migration in set {
            if migration.version.is_defaulted() {
                result.add_warning(ValidationWarning::defaulted_version(&migration.filename));
            } else if !matches_filename_format(&migration.filename) {
                result.add_warning(ValidationWarning::filename_format(&migration.filename));
            }

            let version = migration.version_number();
            match first_seen.get(&version) {
                Some(existing) => {
                    result.add_error(ValidationError::DuplicateVersion(VersionConflict {
                        version,
                        existing: existing.to_string(),
                        duplicate: migration.filename.clone(),
                    }));
                }
                None => {
                    first_seen.insert(version, &migration.filename);
                }
            }
        }

        result
    }

    /// 検証し、重複があれば `DuplicateVersion` エラーを返す
    pub fn ensure_valid(&self, set: &MigrationSet) -> Result<ValidationResult, ManifestError> {
        self.validate(set).into_result()
    }
}

fn matches_filename_format(filename: &str) -> bool {
    FILENAME_FORMAT
        .as_ref()
        .is_none_or(|re| re.is_match(file_stem(filename)))
}
