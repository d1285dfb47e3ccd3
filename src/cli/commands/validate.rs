// validateコマンドハンドラー
//
// マイグレーションファイルの検証機能を実装します。
// - ファイル名の書式チェック（警告）
// - バージョン番号の重複チェック（エラー、すべての組を報告）
// - 生成ファイルとの同期状態の表示（情報のみ）

use crate::cli::command_context::CommandContext;
use crate::cli::commands::{render_output, CommandOutput};
use crate::cli::OutputFormat;
use crate::services::manifest_pipeline::{ManifestPipeline, SyncStatus};
use crate::services::migration_discovery::MigrationDiscoveryService;
use crate::services::migration_validator::MigrationValidatorService;
use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;
use std::path::PathBuf;
use tracing::{debug, warn};

/// validateコマンドの入力パラメータ
#[derive(Debug, Clone)]
pub struct ValidateCommand {
    /// プロジェクトのルートパス
    pub project_path: PathBuf,
    /// カスタム設定ファイルパス
    pub config_path: Option<PathBuf>,
    /// 詳細出力モード
    pub verbose: bool,
    /// 出力フォーマット
    pub format: OutputFormat,
}

/// validateコマンドの出力構造体
#[derive(Debug, Clone, Serialize)]
pub struct ValidateOutput {
    /// 検証対象のマイグレーション数
    pub migration_count: usize,
    /// 警告メッセージ
    pub warnings: Vec<String>,
    /// 生成ファイルの同期状態（マイグレーションがない場合は None）
    pub generated_file: Option<SyncStatus>,
    #[serde(skip)]
    pub verbose: bool,
}

impl CommandOutput for ValidateOutput {
    fn to_text(&self) -> String {
        let mut output = String::new();

        output.push_str("=== Migration Validation Results ===\n\n");

        if self.verbose {
            output.push_str("Checked filename formats\n");
            output.push_str("Checked version numbers\n");
            output.push_str("Checked for duplicates\n\n");
        }

        if self.migration_count == 0 {
            output.push_str(&format!("{} No migration files found\n", "⚠".yellow()));
            return output;
        }

        if !self.warnings.is_empty() {
            output.push_str(&format!("{} warning(s) found:\n", self.warnings.len()));
            for warning in &self.warnings {
                output.push_str(&format!("  {} {}\n", "⚠".yellow(), warning));
            }
            output.push('\n');
        }

        if let Some(status) = self.generated_file {
            let line = format!("Generated file: {}\n", status);
            match status {
                SyncStatus::InSync => output.push_str(&line),
                SyncStatus::OutOfDate | SyncStatus::Missing | SyncStatus::Unreadable => {
                    output.push_str(&format!("{} {}", "⚠".yellow(), line));
                    output.push_str("   Run 'migration-manifest generate --force' to refresh it\n");
                }
            }
        }

        output.push_str(&format!(
            "\n{} All {} migration(s) are valid!\n",
            "✓".green(),
            self.migration_count
        ));

        output
    }
}

/// validateコマンドハンドラー
#[derive(Debug, Clone, Default)]
pub struct ValidateCommandHandler {}

impl ValidateCommandHandler {
    /// 新しいValidateCommandHandlerを作成
    pub fn new() -> Self {
        Self {}
    }

    /// validateコマンドを実行
    ///
    /// # Arguments
    ///
    /// * `command` - validateコマンドのパラメータ
    ///
    /// # Returns
    ///
    /// 成功時は検証結果のサマリー、失敗時はすべての重複を含むエラー
    pub fn execute(&self, command: &ValidateCommand) -> Result<String> {
        let context = CommandContext::load_with_config(
            command.project_path.clone(),
            command.config_path.clone(),
        )?;

        let directory = context.migration_directory();
        let manifest_file = context.manifest_file();

        let migrations = MigrationDiscoveryService::new()
            .discover(&directory)
            .with_context(|| "Failed to read migration files")?;
        debug!(count = migrations.len(), "Loaded migrations for validation");

        if migrations.is_empty() {
            let output = ValidateOutput {
                migration_count: 0,
                warnings: vec![],
                generated_file: None,
                verbose: command.verbose,
            };
            return render_output(&output, &command.format);
        }

        let result = MigrationValidatorService::new().validate(&migrations);
        let warnings: Vec<String> = result.warnings.iter().map(|w| w.format()).collect();

        if !result.is_valid() {
            for warning in &warnings {
                warn!("{}", warning);
            }
            result
                .into_result()
                .with_context(|| "Validation failed")?;
        }

        let sync = ManifestPipeline::new(&directory, &manifest_file).sync_status(&migrations);

        let output = ValidateOutput {
            migration_count: migrations.len(),
            warnings,
            generated_file: Some(sync),
            verbose: command.verbose,
        };

        render_output(&output, &command.format)
    }
}
