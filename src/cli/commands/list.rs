// listコマンドハンドラー
//
// マイグレーションディレクトリ内のマイグレーションをバージョン順に一覧表示します。
// --verbose 指定時はファイルサイズと更新日時も表示します。

use crate::cli::command_context::CommandContext;
use crate::cli::commands::{render_output, CommandOutput};
use crate::cli::OutputFormat;
use crate::services::migration_discovery::MigrationDiscoveryService;
use crate::services::traits::StaticMigrationSource;
use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use colored::Colorize;
use serde::Serialize;
use std::collections::HashMap;
use std::path::PathBuf;
use std::time::SystemTime;

/// listコマンドの入力パラメータ
#[derive(Debug, Clone)]
pub struct ListCommand {
    /// プロジェクトのルートパス
    pub project_path: PathBuf,
    /// カスタム設定ファイルパス
    pub config_path: Option<PathBuf>,
    /// 詳細出力モード
    pub verbose: bool,
    /// 出力フォーマット
    pub format: OutputFormat,
}

/// 一覧の1行
#[derive(Debug, Clone, Serialize)]
pub struct ListEntry {
    pub filename: String,
    pub version: u64,
    /// 先頭の数値を解釈できずバージョン0として扱ったか
    pub version_defaulted: bool,
    pub size: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified: Option<String>,
}

/// listコマンドの出力構造体
#[derive(Debug, Clone, Serialize)]
pub struct ListOutput {
    pub migrations: Vec<ListEntry>,
    pub total: usize,
    #[serde(skip)]
    pub verbose: bool,
}

impl CommandOutput for ListOutput {
    fn to_text(&self) -> String {
        let mut output = String::new();
        output.push_str("Available Migrations:\n");

        if self.migrations.is_empty() {
            output.push_str(&format!("{} No migration files found", "⚠".yellow()));
            return output;
        }

        for entry in &self.migrations {
            if self.verbose {
                output.push_str(&format!(
                    "  {} (version: {}, size: {} bytes, modified: {})\n",
                    entry.filename,
                    entry.version,
                    entry.size,
                    entry.modified.as_deref().unwrap_or("unknown")
                ));
            } else {
                output.push_str(&format!(
                    "  {} (version: {})\n",
                    entry.filename, entry.version
                ));
            }
        }

        output.push_str(&format!("\nTotal: {} migration(s)", self.total));
        output
    }
}

/// listコマンドハンドラー
#[derive(Debug, Clone, Default)]
pub struct ListCommandHandler {}

impl ListCommandHandler {
    /// 新しいListCommandHandlerを作成
    pub fn new() -> Self {
        Self {}
    }

    /// listコマンドを実行
    ///
    /// # Errors
    ///
    /// マイグレーションディレクトリが存在しない、または読み込めない場合
    pub fn execute(&self, command: &ListCommand) -> Result<String> {
        let context = CommandContext::load_with_config(
            command.project_path.clone(),
            command.config_path.clone(),
        )?;

        let directory = context.migration_directory();
        let entries = directory
            .entries()
            .with_context(|| "Failed to list migrations")?;

        // 1回のスキャン結果を取得元として使い、メタデータとバージョン順を揃える
        let source = StaticMigrationSource::new(entries.iter().map(|e| e.filename.clone()));
        let migrations = MigrationDiscoveryService::new().discover(&source)?;
        let metadata: HashMap<&str, _> = entries
            .iter()
            .map(|e| (e.filename.as_str(), e))
            .collect();

        let list: Vec<ListEntry> = migrations
            .iter()
            .map(|migration| {
                let entry = metadata.get(migration.filename.as_str());
                ListEntry {
                    filename: migration.filename.clone(),
                    version: migration.version_number(),
                    version_defaulted: migration.version.is_defaulted(),
                    size: entry.map_or(0, |e| e.size),
                    modified: entry.and_then(|e| e.modified).map(format_modified),
                }
            })
            .collect();

        let output = ListOutput {
            total: list.len(),
            migrations: list,
            verbose: command.verbose,
        };

        render_output(&output, &command.format)
    }
}

/// 更新日時をローカルタイムでフォーマット
fn format_modified(time: SystemTime) -> String {
    DateTime::<Local>::from(time)
        .format("%Y-%m-%d %H:%M:%S")
        .to_string()
}
