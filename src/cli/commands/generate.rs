// generateコマンドハンドラー
//
// マイグレーションファイルから生成ファイルを作成します。
// - マイグレーションディレクトリのスキャン
// - バージョン重複の検証
// - 生成ファイルの書き込み（既存ファイルは --force 指定時のみ上書き）

use crate::cli::command_context::CommandContext;
use crate::cli::commands::{render_output, CommandOutput};
use crate::cli::OutputFormat;
use crate::core::migration::MigrationSet;
use crate::services::manifest_pipeline::{GenerationOutcome, ManifestPipeline};
use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;
use std::path::PathBuf;
use tracing::debug;

/// generateコマンドの入力パラメータ
#[derive(Debug, Clone)]
pub struct GenerateCommand {
    /// プロジェクトのルートパス
    pub project_path: PathBuf,
    /// カスタム設定ファイルパス
    pub config_path: Option<PathBuf>,
    /// 既存の生成ファイルを上書きする
    pub force: bool,
    /// 詳細出力モード
    pub verbose: bool,
    /// 出力フォーマット
    pub format: OutputFormat,
}

/// generateの結果種別
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GenerateStatus {
    Written,
    AlreadyExists,
    NothingToDo,
}

/// 出力用のマイグレーション情報
#[derive(Debug, Clone, Serialize)]
pub struct MigrationSummary {
    pub filename: String,
    pub version: u64,
}

/// generateコマンドの出力構造体
#[derive(Debug, Clone, Serialize)]
pub struct GenerateOutput {
    /// 結果種別
    pub status: GenerateStatus,
    /// 生成ファイルのパス（プロジェクトルートからの相対パス）
    pub generated_file: String,
    /// 書き込んだマイグレーション
    pub migrations: Vec<MigrationSummary>,
    /// 警告メッセージ
    pub warnings: Vec<String>,
    /// メッセージ
    #[serde(skip)]
    pub message: String,
}

impl CommandOutput for GenerateOutput {
    fn to_text(&self) -> String {
        self.message.clone()
    }
}

/// generateコマンドハンドラー
#[derive(Debug, Clone, Default)]
pub struct GenerateCommandHandler {}

impl GenerateCommandHandler {
    /// 新しいGenerateCommandHandlerを作成
    pub fn new() -> Self {
        Self {}
    }

    /// generateコマンドを実行
    ///
    /// # Arguments
    ///
    /// * `command` - generateコマンドのパラメータ
    ///
    /// # Returns
    ///
    /// 成功時は結果のサマリー（既存ファイルのスキップや空ディレクトリも成功扱い）、
    /// 失敗時はエラーメッセージ
    pub fn execute(&self, command: &GenerateCommand) -> Result<String> {
        let context = CommandContext::load_with_config(
            command.project_path.clone(),
            command.config_path.clone(),
        )?;

        let directory = context.migration_directory();
        let manifest_file = context.manifest_file();
        let generated_file = context.display_path(manifest_file.path());
        debug!(
            migrations_dir = %directory.path().display(),
            force = command.force,
            "Executing generate command"
        );

        let outcome = ManifestPipeline::new(&directory, &manifest_file)
            .run(command.force)
            .with_context(|| "Migration generation failed")?;

        let output = match outcome {
            GenerationOutcome::AlreadyExists { .. } => GenerateOutput {
                status: GenerateStatus::AlreadyExists,
                message: self.format_already_exists(&generated_file),
                generated_file,
                migrations: vec![],
                warnings: vec![],
            },
            GenerationOutcome::NothingToDo => GenerateOutput {
                status: GenerateStatus::NothingToDo,
                message: self.format_no_migrations(directory.extension()),
                generated_file,
                migrations: vec![],
                warnings: vec![],
            },
            GenerationOutcome::Written {
                migrations,
                warnings,
                ..
            } => {
                let warnings: Vec<String> = warnings.iter().map(|w| w.format()).collect();
                GenerateOutput {
                    status: GenerateStatus::Written,
                    message: self.format_written(
                        &migrations,
                        &warnings,
                        &generated_file,
                        command.verbose,
                    ),
                    generated_file,
                    migrations: summarize(&migrations),
                    warnings,
                }
            }
        };

        render_output(&output, &command.format)
    }

    /// 生成ファイルが既に存在する場合のメッセージ
    fn format_already_exists(&self, generated_file: &str) -> String {
        format!(
            "{} Generated file already exists: {}\n💡 Use --force flag to overwrite",
            "⚠".yellow(),
            generated_file
        )
    }

    /// マイグレーションが存在しない場合のメッセージ
    fn format_no_migrations(&self, extension: &str) -> String {
        format!(
            "{} No .{} migration files found. Nothing to generate.",
            "⚠".yellow(),
            extension
        )
    }

    /// 書き込み完了時のメッセージ
    fn format_written(
        &self,
        migrations: &MigrationSet,
        warnings: &[String],
        generated_file: &str,
        verbose: bool,
    ) -> String {
        let mut output = String::new();

        if verbose {
            output.push_str(&format!("Found {} migration(s):\n", migrations.len()));
            for migration in migrations {
                output.push_str(&format!(
                    "   - {} (version: {})\n",
                    migration.filename,
                    migration.version_number()
                ));
            }
            output.push('\n');
        }

        for warning in warnings {
            output.push_str(&format!("{} {}\n", "⚠".yellow(), warning));
        }

        output.push_str(&format!(
            "{} Generated: {} ({} migration(s))",
            "✓".green(),
            generated_file,
            migrations.len()
        ));

        output
    }
}

fn summarize(migrations: &MigrationSet) -> Vec<MigrationSummary> {
    migrations
        .iter()
        .map(|m| MigrationSummary {
            filename: m.filename.clone(),
            version: m.version_number(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::migration::{MigrationFile, ParsedVersion};

    #[test]
    fn test_new_handler() {
        let handler = GenerateCommandHandler::new();
        assert!(format!("{:?}", handler).contains("GenerateCommandHandler"));
    }

    #[test]
    fn test_format_written_verbose_lists_migrations() {
        let handler = GenerateCommandHandler::new();
        let set = MigrationSet::from_discovered(vec![
            MigrationFile::new("0001_a.sql".to_string(), ParsedVersion::Parsed(1)),
            MigrationFile::new("0002_b.sql".to_string(), ParsedVersion::Parsed(2)),
        ]);

        let text = handler.format_written(&set, &[], "migrations/generated_migrations.rs", true);

        assert!(text.contains("Found 2 migration(s):"));
        assert!(text.contains("   - 0002_b.sql (version: 2)"));
        assert!(text.contains("Generated: migrations/generated_migrations.rs (2 migration(s))"));

        let quiet = handler.format_written(&set, &[], "out.rs", false);
        assert!(!quiet.contains("Found 2 migration(s):"));
    }

    #[test]
    fn test_format_no_migrations_mentions_extension() {
        let handler = GenerateCommandHandler::new();
        assert!(handler
            .format_no_migrations("sql")
            .contains("No .sql migration files found"));
    }
}
