// 生成ファイルアダプター
//
// 生成されたマニフェストファイルの存在確認・読み込み・書き込みを行います。

use crate::core::error::ManifestError;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// 生成されたマニフェストファイル
#[derive(Debug, Clone)]
pub struct ManifestFile {
    path: PathBuf,
}

impl ManifestFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// ファイルが存在するかどうか
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// 現在の内容を読み込む（存在しない場合は None）
    pub fn read(&self) -> Result<Option<String>, ManifestError> {
        match fs::read_to_string(&self.path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(ManifestError::io("read generated file", &self.path, e)),
        }
    }

    /// 内容を書き込む（既存ファイルは上書き）
    pub fn write(&self, content: &str) -> Result<(), ManifestError> {
        fs::write(&self.path, content)
            .map_err(|e| ManifestError::io("write generated file", &self.path, e))
    }
}
