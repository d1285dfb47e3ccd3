// マイグレーションディレクトリアダプター
//
// ファイルシステム上のマイグレーションディレクトリを MigrationSource として提供します。
// 一覧はファイル名のバイト順に並べ替えるため、同じディレクトリ状態に対して
// 常に同じ順序になります。

use crate::core::error::ManifestError;
use crate::services::traits::MigrationSource;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use tracing::{debug, warn};

/// ディレクトリ内の対象ファイル
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationEntry {
    /// ファイル名
    pub filename: String,
    /// ファイルサイズ（バイト）
    pub size: u64,
    /// 更新日時
    pub modified: Option<SystemTime>,
}

/// マイグレーションディレクトリ
#[derive(Debug, Clone)]
pub struct MigrationDirectory {
    path: PathBuf,
    extension: String,
}

impl MigrationDirectory {
    /// 新しいMigrationDirectoryを作成
    ///
    /// `extension` はドットなしで指定します（例: `sql`）。
    pub fn new(path: impl Into<PathBuf>, extension: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            extension: extension.into(),
        }
    }

    /// ディレクトリのパス
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 対象拡張子
    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// ディレクトリが存在するかどうか
    ///
    /// # Errors
    ///
    /// 存在を確認できない場合（権限不足など）は `Io`
    pub fn try_exists(&self) -> Result<bool, ManifestError> {
        self.path
            .try_exists()
            .map_err(|e| ManifestError::io("read directory", &self.path, e))
    }

    /// 対象ファイルかどうか（拡張子の完全一致、大文字小文字を区別）
    pub fn is_eligible_name(&self, filename: &str) -> bool {
        Path::new(filename).extension() == Some(OsStr::new(&self.extension))
    }

    /// 対象ファイルの一覧をファイル名順で取得
    ///
    /// # Errors
    ///
    /// - ディレクトリが存在しない場合は `DirectoryNotFound`
    /// - 読み込みに失敗した場合は `Io`
    pub fn entries(&self) -> Result<Vec<MigrationEntry>, ManifestError> {
        if !self.try_exists()? {
            return Err(ManifestError::DirectoryNotFound {
                path: self.path.clone(),
            });
        }

        let read_dir = fs::read_dir(&self.path)
            .map_err(|e| ManifestError::io("read directory", &self.path, e))?;

        let mut entries = Vec::new();
        for entry in read_dir {
            let entry = entry.map_err(|e| ManifestError::io("read directory", &self.path, e))?;

            let filename = match entry.file_name().into_string() {
                Ok(name) => name,
                Err(name) => {
                    warn!(filename = ?name, "Skipping non UTF-8 file name");
                    continue;
                }
            };

            if !self.is_eligible_name(&filename) {
                continue;
            }

            // シンボリックリンクは参照先で判定する
            let metadata = match fs::metadata(entry.path()) {
                Ok(metadata) => metadata,
                Err(e) => {
                    warn!(filename = %filename, error = %e, "Skipping unreadable entry");
                    continue;
                }
            };

            if !metadata.is_file() {
                continue;
            }

            entries.push(MigrationEntry {
                filename,
                size: metadata.len(),
                modified: metadata.modified().ok(),
            });
        }

        entries.sort_by(|a, b| a.filename.cmp(&b.filename));
        debug!(
            dir = %self.path.display(),
            count = entries.len(),
            "Scanned migrations directory"
        );

        Ok(entries)
    }
}

impl MigrationSource for MigrationDirectory {
    fn location(&self) -> String {
        self.path.display().to_string()
    }

    fn eligible_filenames(&self) -> Result<Vec<String>, ManifestError> {
        Ok(self
            .entries()?
            .into_iter()
            .map(|entry| entry.filename)
            .collect())
    }
}
