// statusコマンドハンドラー
//
// マイグレーションシステムの状態を表示します。
// - マイグレーションディレクトリの有無
// - 生成ファイルの有無
// - 対象マイグレーションファイル数

use crate::cli::command_context::CommandContext;
use crate::cli::commands::{render_output, CommandOutput};
use crate::cli::OutputFormat;
use crate::services::status_reporter::{StatusReport, StatusReporterService};
use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;
use std::path::PathBuf;
use tracing::debug;

/// statusコマンドの入力パラメータ
#[derive(Debug, Clone)]
pub struct StatusCommand {
    /// プロジェクトのルートパス
    pub project_path: PathBuf,
    /// カスタム設定ファイルパス
    pub config_path: Option<PathBuf>,
    /// 詳細出力モード
    pub verbose: bool,
    /// 出力フォーマット
    pub format: OutputFormat,
}

/// statusコマンドの出力構造体
#[derive(Debug, Clone, Serialize)]
pub struct StatusOutput {
    #[serde(flatten)]
    pub report: StatusReport,
    /// 対象拡張子
    pub extension: String,
    #[serde(skip)]
    pub verbose: bool,
}

impl CommandOutput for StatusOutput {
    fn to_text(&self) -> String {
        let report = &self.report;
        let mut output = String::new();

        output.push_str("Migration System Status:\n");

        if report.directory_exists {
            output.push_str(&format!("{} Migrations directory: Found\n", "✓".green()));
        } else {
            output.push_str(&format!("{} Migrations directory: Not found\n", "✗".red()));
        }

        if report.generated_exists {
            output.push_str(&format!("{} Generated file: Found\n", "✓".green()));
        } else {
            output.push_str(&format!(
                "{} Generated file: Not found (run 'migration-manifest generate')\n",
                "⚠".yellow()
            ));
        }

        output.push_str(&format!(
            "{} migrations: {} found\n",
            self.extension.to_uppercase(),
            report.migration_count
        ));

        if self.verbose {
            output.push_str(&format!(
                "Migrations path: {}\n",
                report.migrations_dir.display()
            ));
            output.push_str(&format!(
                "Generated file: {}\n",
                report.generated_file.display()
            ));
        }

        output
    }
}

/// statusコマンドハンドラー
#[derive(Debug, Clone, Default)]
pub struct StatusCommandHandler {}

impl StatusCommandHandler {
    /// 新しいStatusCommandHandlerを作成
    pub fn new() -> Self {
        Self {}
    }

    /// statusコマンドを実行
    ///
    /// # Arguments
    ///
    /// * `command` - statusコマンドのパラメータ
    ///
    /// # Returns
    ///
    /// 成功時は状態のサマリー。ディレクトリや生成ファイルが存在しなくても成功します。
    pub fn execute(&self, command: &StatusCommand) -> Result<String> {
        let context = CommandContext::load_with_config(
            command.project_path.clone(),
            command.config_path.clone(),
        )?;

        let directory = context.migration_directory();
        let manifest_file = context.manifest_file();

        let report = StatusReporterService::new()
            .report(&directory, &manifest_file)
            .with_context(|| "Failed to read migrations directory")?;
        debug!(
            directory_exists = report.directory_exists,
            generated_exists = report.generated_exists,
            count = report.migration_count,
            "Collected migration status"
        );

        let output = StatusOutput {
            report,
            extension: context.config.extension.clone(),
            verbose: command.verbose,
        };

        render_output(&output, &command.format)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(directory_exists: bool, generated_exists: bool, count: usize) -> StatusReport {
        StatusReport {
            migrations_dir: PathBuf::from("/project/src-tauri/migrations"),
            generated_file: PathBuf::from("/project/src-tauri/migrations/generated_migrations.rs"),
            directory_exists,
            generated_exists,
            migration_count: count,
        }
    }

    #[test]
    fn test_new_handler() {
        let handler = StatusCommandHandler::new();
        assert!(format!("{:?}", handler).contains("StatusCommandHandler"));
    }

    #[test]
    fn test_to_text_missing_generated_file() {
        let output = StatusOutput {
            report: report(true, false, 3),
            extension: "sql".to_string(),
            verbose: false,
        };

        let text = output.to_text();
        assert!(text.contains("Migrations directory: Found"));
        assert!(text.contains("Generated file: Not found"));
        assert!(text.contains("SQL migrations: 3 found"));
        assert!(!text.contains("Migrations path:"));
    }

    #[test]
    fn test_to_text_verbose_shows_paths() {
        let output = StatusOutput {
            report: report(false, false, 0),
            extension: "sql".to_string(),
            verbose: true,
        };

        let text = output.to_text();
        assert!(text.contains("Migrations directory: Not found"));
        assert!(text.contains("Migrations path: /project/src-tauri/migrations"));
    }
}
