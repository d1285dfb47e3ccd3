// サービストレイト定義
//
// マイグレーションの取得元を抽象化するトレイト。
// ディレクトリ以外の取得元（埋め込みマニフェストなど）やテスト用の
// インメモリ実装に差し替えても、検証・生成側は変更不要です。

use crate::core::error::ManifestError;

/// マイグレーション取得元のトレイト
pub trait MigrationSource {
    /// 取得元の表示名（ログ・メッセージ用）
    fn location(&self) -> String;

    /// 対象となるマイグレーションのファイル名を一覧順に返す
    ///
    /// 一覧順は同一状態に対して常に同じでなければなりません。
    /// 同一バージョンの重複報告はこの順序に依存します。
    fn eligible_filenames(&self) -> Result<Vec<String>, ManifestError>;
}

/// インメモリのマイグレーション取得元
///
/// 与えられた順序をそのまま一覧順として返します。
#[derive(Debug, Clone, Default)]
pub struct StaticMigrationSource {
    filenames: Vec<String>,
}

impl StaticMigrationSource {
    pub fn new<I, S>(filenames: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            filenames: filenames.into_iter().map(Into::into).collect(),
        }
    }
}

impl MigrationSource for StaticMigrationSource {
    fn location(&self) -> String {
        "<in-memory>".to_string()
    }

    fn eligible_filenames(&self) -> Result<Vec<String>, ManifestError> {
        Ok(self.filenames.clone())
    }
}
