// テスト共通ヘルパー

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// 既定のマイグレーションディレクトリ（プロジェクトルートからの相対パス）
#[allow(dead_code)]
pub const MIGRATIONS_DIR: &str = "src-tauri/migrations";

/// テスト用のプロジェクトディレクトリを作成
///
/// `files` に指定したファイルを既定のマイグレーションディレクトリに作成します。
#[allow(dead_code)]
pub fn setup_test_project(files: &[&str]) -> Result<(TempDir, PathBuf)> {
    let temp_dir = TempDir::new()?;
    let project_path = temp_dir.path().to_path_buf();

    let migrations_dir = project_path.join(MIGRATIONS_DIR);
    fs::create_dir_all(&migrations_dir)?;
    write_migrations(&migrations_dir, files)?;

    Ok((temp_dir, project_path))
}

/// マイグレーションディレクトリを持たない空のプロジェクトを作成
#[allow(dead_code)]
pub fn setup_empty_project() -> Result<(TempDir, PathBuf)> {
    let temp_dir = TempDir::new()?;
    let project_path = temp_dir.path().to_path_buf();
    Ok((temp_dir, project_path))
}

/// マイグレーションファイルを作成（内容はファイル名から作るダミーSQL）
#[allow(dead_code)]
pub fn write_migrations(dir: &Path, files: &[&str]) -> Result<()> {
    for file in files {
        fs::write(dir.join(file), format!("-- {}\nSELECT 1;\n", file))?;
    }
    Ok(())
}

/// 既定の生成ファイルパス
#[allow(dead_code)]
pub fn generated_file(project_path: &Path) -> PathBuf {
    project_path
        .join(MIGRATIONS_DIR)
        .join("generated_migrations.rs")
}
