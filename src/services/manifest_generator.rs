// マニフェスト生成サービス
//
// 検証済みのマイグレーション集合から、tauri_plugin_sql 向けの Rust ソースを生成します。
// SQL本体は読み込まず、include_str! によってビルド時に埋め込ませます。
// タイムスタンプ等は含めないため、同じ入力からは常に同じ出力が得られます。

use crate::core::migration::{MigrationFile, MigrationSet};
use crate::core::naming;

/// 生成されたマニフェスト
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedManifest {
    content: String,
    entry_count: usize,
}

impl GeneratedManifest {
    /// 生成されたソーステキスト
    pub fn as_str(&self) -> &str {
        &self.content
    }

    /// エントリ数
    pub fn entry_count(&self) -> usize {
        self.entry_count
    }
}

/// マニフェスト生成サービス
#[derive(Debug, Clone, Default)]
pub struct ManifestGeneratorService {}

impl ManifestGeneratorService {
    /// 新しいManifestGeneratorServiceを作成
    pub fn new() -> Self {
        Self {}
    }

    /// マニフェストを生成する
    ///
    /// 集合はあらかじめ検証済みであることを前提とし、ここでは重複を再検査しません。
    ///
    /// # Arguments
    ///
    /// * `set` - 検証済みのマイグレーション集合
    ///
    /// # Returns
    ///
    /// 集合と同じ順序でレコードを並べた Rust ソース
    pub fn generate(&self, set: &MigrationSet) -> GeneratedManifest {
        let mut content = String::new();

        content.push_str(naming::GENERATED_MARKER);
        content.push('\n');
        content.push_str("use tauri_plugin_sql::{Migration, MigrationKind};\n\n");
        content.push_str("pub fn load_migrations() -> Vec<Migration> {\n");
        content.push_str("    vec![\n");

        for migration in set {
            content.push_str(&self.render_entry(migration));
        }

        content.push_str("    ]\n");
        content.push_str("}\n");

        GeneratedManifest {
            content,
            entry_count: set.len(),
        }
    }

    /// 1件分のレコードを生成
    fn render_entry(&self, migration: &MigrationFile) -> String {
        format!(
            "        Migration {{ version: {}, description: {}, sql: include_str!({}), kind: MigrationKind::Up }},\n",
            migration.version_number(),
            string_literal(&migration.description),
            string_literal(&migration.filename),
        )
    }
}

/// Rust の文字列リテラルとしてエスケープする
fn string_literal(value: &str) -> String {
    format!("{:?}", value)
}
