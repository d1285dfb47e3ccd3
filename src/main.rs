use anyhow::Result;
use clap::Parser;
use colored::control as color_control;
use migration_manifest::cli::commands::generate::{GenerateCommand, GenerateCommandHandler};
use migration_manifest::cli::commands::list::{ListCommand, ListCommandHandler};
use migration_manifest::cli::commands::status::{StatusCommand, StatusCommandHandler};
use migration_manifest::cli::commands::validate::{ValidateCommand, ValidateCommandHandler};
use migration_manifest::cli::{Cli, Commands};
use std::env;
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    // CLIをパースして実行
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    match run_command(cli) {
        Ok(output) => {
            if !output.is_empty() {
                println!("{}", output);
            }
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            process::exit(1);
        }
    }
}

/// トレーシングを初期化する
///
/// RUST_LOG が設定されていればそれを優先し、未設定なら --verbose で debug、通常は warn。
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// コマンドを実行する
fn run_command(cli: Cli) -> Result<String> {
    // --no-color フラグの処理
    if cli.no_color {
        color_control::set_override(false);
    }

    // プロジェクトのルートパスを取得
    let project_path = env::current_dir()?;

    // --config フラグの処理（絶対パスに変換）
    let config_path: Option<PathBuf> = cli.config.map(|p| {
        if p.is_absolute() {
            p
        } else {
            project_path.join(p)
        }
    });

    // サブコマンド省略時は generate（上書きなし）
    let command = cli.command.unwrap_or(Commands::Generate { force: false });

    match command {
        Commands::Generate { force } => {
            let handler = GenerateCommandHandler::new();
            let command = GenerateCommand {
                project_path,
                config_path,
                force,
                verbose: cli.verbose,
                format: cli.format,
            };
            handler.execute(&command)
        }

        Commands::List => {
            let handler = ListCommandHandler::new();
            let command = ListCommand {
                project_path,
                config_path,
                verbose: cli.verbose,
                format: cli.format,
            };
            handler.execute(&command)
        }

        Commands::Validate => {
            let handler = ValidateCommandHandler::new();
            let command = ValidateCommand {
                project_path,
                config_path,
                verbose: cli.verbose,
                format: cli.format,
            };
            handler.execute(&command)
        }

        Commands::Status => {
            let handler = StatusCommandHandler::new();
            let command = StatusCommand {
                project_path,
                config_path,
                verbose: cli.verbose,
                format: cli.format,
            };
            handler.execute(&command)
        }
    }
}
