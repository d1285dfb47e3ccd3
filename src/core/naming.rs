// 命名ポリシー
//
// アプリケーション名と関連パスの単一ソースを提供します。

/// 現行アプリケーション名
pub const APP_NAME: &str = "migration-manifest";

/// 既定の設定ファイル名
pub const CONFIG_FILE: &str = ".migration-manifest.yaml";

/// 既定のマイグレーションディレクトリ（プロジェクトルートからの相対パス）
pub const MIGRATIONS_DIR: &str = "src-tauri/migrations";

/// 既定の生成ファイル名（マイグレーションディレクトリ内に出力）
pub const GENERATED_FILE: &str = "generated_migrations.rs";

/// 既定のマイグレーションファイル拡張子
pub const MIGRATION_EXTENSION: &str = "sql";

/// 生成ファイル先頭に付与するマーカー
pub const GENERATED_MARKER: &str = "// @generated by migration-manifest. Do not edit by hand.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_file_is_not_a_migration() {
        assert!(!GENERATED_FILE.ends_with(&format!(".{}", MIGRATION_EXTENSION)));
    }

    #[test]
    fn test_marker_mentions_app_name() {
        assert!(GENERATED_MARKER.contains(APP_NAME));
    }
}
