// CLI Layer
// ユーザー入力の受付とコマンドルーティング

pub mod command_context;
pub mod commands;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// 出力フォーマット
#[derive(Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output (default)
    #[default]
    Text,
    /// Structured JSON output
    Json,
}

/// migration-manifest - SQL Migration Manifest Compiler
///
/// Generates embedded migration bindings for Tauri applications
/// from versioned SQL migration files.
#[derive(Parser, Debug)]
#[command(name = "migration-manifest")]
#[command(author = "Migration Manifest Contributors")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Manage database migrations for your Tauri application")]
#[command(long_about = "migration-manifest - SQL Migration Manifest Compiler

Turns the SQL migration files of a Tauri application into a generated
Rust module that embeds every migration at build time.

MIGRATION WORKFLOW:
  1. Create SQL migration files in src-tauri/migrations/
  2. Run 'migration-manifest generate' to create the Rust bindings
  3. Migrations are applied by tauri-plugin-sql on app startup

FILENAME FORMAT:
  NNNN_description.sql (e.g., 0001_create_users.sql)")]
#[command(propagate_version = true)]
#[command(after_help = "Running without a subcommand is the same as 'migration-manifest generate'.

For detailed help on each command, use: migration-manifest <command> --help")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Output format (text or json)
    #[arg(long, global = true, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Subcommand to execute (defaults to `generate`)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Generate the Rust migration module from SQL files
    ///
    /// Scans the migrations directory for SQL files, extracts the version
    /// from each filename, checks for duplicate versions and writes
    /// generated_migrations.rs next to them.
    ///
    /// EXAMPLES:
    ///   # Generate migrations (standard usage)
    ///   migration-manifest generate
    ///
    ///   # Generate with detailed output
    ///   migration-manifest generate --verbose
    ///
    ///   # Force regeneration
    ///   migration-manifest generate --force
    Generate {
        /// Overwrite the generated file if it already exists
        #[arg(short, long)]
        force: bool,
    },

    /// List all available migrations
    ///
    /// EXAMPLES:
    ///   # List all migrations
    ///   migration-manifest list
    ///
    ///   # Include file size and modification time
    ///   migration-manifest list --verbose
    List,

    /// Validate migration files
    ///
    /// Checks filename formats and duplicate version numbers, and reports
    /// whether the generated file matches the current migrations.
    ///
    /// EXAMPLES:
    ///   migration-manifest validate
    Validate,

    /// Show migration system status
    ///
    /// EXAMPLES:
    ///   # Check migration status
    ///   migration-manifest status
    ///
    ///   # Include resolved paths
    ///   migration-manifest status --verbose
    Status,
}
