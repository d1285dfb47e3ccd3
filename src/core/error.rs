// エラー型定義
//
// アプリケーション全体で使用されるカスタムエラー型を提供します。
// thiserrorを使用して、ManifestError と検証結果の型を定義します。

use crate::core::migration::VersionConflict;
use std::path::PathBuf;
use thiserror::Error;

/// マニフェスト生成エラー
///
/// 検出・検証・生成の各段階で発生する致命的なエラーを表現します。
#[derive(Debug, Error)]
pub enum ManifestError {
    /// Migrations directory does not exist
    #[error("Migrations directory not found: {}", .path.display())]
    DirectoryNotFound {
        /// ディレクトリパス
        path: PathBuf,
    },

    /// Filesystem read/write failure
    #[error("Failed to {action} {}", .path.display())]
    Io {
        /// 実行していた操作
        action: &'static str,
        /// 対象パス
        path: PathBuf,
        /// 元のI/Oエラー
        #[source]
        source: std::io::Error,
    },

    /// Two or more migrations share a version
    #[error("Duplicate migration versions found: {}", format_conflicts(.conflicts))]
    DuplicateVersion {
        /// 重複の組（すべて）
        conflicts: Vec<VersionConflict>,
    },
}

impl ManifestError {
    /// I/Oエラーを作成
    pub fn io(action: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ManifestError::Io {
            action,
            path: path.into(),
            source,
        }
    }

    /// ディレクトリが見つからないエラーかどうか
    pub fn is_directory_not_found(&self) -> bool {
        matches!(self, ManifestError::DirectoryNotFound { .. })
    }

    /// I/Oエラーかどうか
    pub fn is_io(&self) -> bool {
        matches!(self, ManifestError::Io { .. })
    }

    /// バージョン重複エラーかどうか
    pub fn is_duplicate_version(&self) -> bool {
        matches!(self, ManifestError::DuplicateVersion { .. })
    }

    /// 重複の組を取得
    pub fn conflicts(&self) -> &[VersionConflict] {
        match self {
            ManifestError::DuplicateVersion { conflicts } => conflicts,
            _ => &[],
        }
    }
}

fn format_conflicts(conflicts: &[VersionConflict]) -> String {
    conflicts
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

/// バリデーションエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Duplicate version
    #[error("Duplicate {0}")]
    DuplicateVersion(VersionConflict),
}

/// バリデーション警告
///
/// エラーではないが、ユーザーに注意を促すべき事項を表します。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationWarning {
    /// 警告メッセージ
    pub message: String,
    /// 対象ファイル
    pub filename: String,
    /// 警告の種類
    pub kind: WarningKind,
}

/// 警告の種類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningKind {
    /// 先頭の数値を解釈できずバージョン0にフォールバックした
    DefaultedVersion,
    /// NNNN_description.ext 形式に従っていない
    FilenameFormat,
}

impl ValidationWarning {
    /// バージョンフォールバックの警告を作成
    pub fn defaulted_version(filename: &str) -> Self {
        Self {
            message: "no numeric version prefix, treated as version 0".to_string(),
            filename: filename.to_string(),
            kind: WarningKind::DefaultedVersion,
        }
    }

    /// ファイル名書式の警告を作成
    pub fn filename_format(filename: &str) -> Self {
        Self {
            message: "filename does not follow the NNNN_description format".to_string(),
            filename: filename.to_string(),
            kind: WarningKind::FilenameFormat,
        }
    }

    /// 表示用にフォーマット
    pub fn format(&self) -> String {
        format!("Warning: {} ({})", self.message, self.filename)
    }
}

/// バリデーション結果
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    /// エラーのリスト
    pub errors: Vec<ValidationError>,
    /// 警告のリスト
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    /// 新しいバリデーション結果を作成
    pub fn new() -> Self {
        Self::default()
    }

    /// エラーを追加
    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// 警告を追加
    pub fn add_warning(&mut self, warning: ValidationWarning) {
        self.warnings.push(warning);
    }

    /// 検証が成功したかどうか（エラーがない場合は成功）
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// エラーの数を取得
    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    /// 警告の数を取得
    pub fn warning_count(&self) -> usize {
        self.warnings.len()
    }

    /// 重複の組を取り出す
    pub fn conflicts(&self) -> Vec<VersionConflict> {
        self.errors
            .iter()
            .map(|error| match error {
                ValidationError::DuplicateVersion(conflict) => conflict.clone(),
            })
            .collect()
    }

    /// エラーがあれば ManifestError::DuplicateVersion に変換する
    pub fn into_result(self) -> Result<Self, ManifestError> {
        if self.is_valid() {
            Ok(self)
        } else {
            Err(ManifestError::DuplicateVersion {
                conflicts: self.conflicts(),
            })
        }
    }
}
