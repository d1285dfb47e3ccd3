// listコマンドハンドラーのテスト

use migration_manifest::cli::commands::list::{ListCommand, ListCommandHandler};
use migration_manifest::cli::OutputFormat;
use migration_manifest::core::error::ManifestError;
use std::path::PathBuf;

mod common;

fn list_command(project_path: PathBuf) -> ListCommand {
    ListCommand {
        project_path,
        config_path: None,
        verbose: false,
        format: OutputFormat::Text,
    }
}

#[test]
fn test_list_in_version_order() {
    let (_temp_dir, project_path) =
        common::setup_test_project(&["0010_c.sql", "0002_b.sql", "0001_a.sql", "readme.txt"])
            .unwrap();

    let output = ListCommandHandler::new()
        .execute(&list_command(project_path))
        .unwrap();

    let first = output.find("0001_a.sql (version: 1)").unwrap();
    let second = output.find("0002_b.sql (version: 2)").unwrap();
    let third = output.find("0010_c.sql (version: 10)").unwrap();
    assert!(first < second && second < third);
    assert!(!output.contains("readme.txt"));
    assert!(output.contains("Total: 3 migration(s)"));
}

#[test]
fn test_list_verbose_shows_size() {
    let (_temp_dir, project_path) = common::setup_test_project(&["0001_a.sql"]).unwrap();

    let command = ListCommand {
        verbose: true,
        ..list_command(project_path)
    };
    let output = ListCommandHandler::new().execute(&command).unwrap();

    // common::write_migrations の内容は "-- 0001_a.sql\nSELECT 1;\n"
    assert!(output.contains("size: 24 bytes"));
    assert!(output.contains("modified: "));
}

#[test]
fn test_list_empty_directory() {
    let (_temp_dir, project_path) = common::setup_test_project(&[]).unwrap();

    let output = ListCommandHandler::new()
        .execute(&list_command(project_path))
        .unwrap();

    assert!(output.contains("No migration files found"));
}

#[test]
fn test_list_missing_directory_fails() {
    let (_temp_dir, project_path) = common::setup_empty_project().unwrap();

    let err = ListCommandHandler::new()
        .execute(&list_command(project_path))
        .unwrap_err();

    assert!(err
        .downcast_ref::<ManifestError>()
        .unwrap()
        .is_directory_not_found());
}

#[test]
fn test_list_json_marks_defaulted_versions() {
    let (_temp_dir, project_path) =
        common::setup_test_project(&["0001_a.sql", "seed.sql"]).unwrap();

    let command = ListCommand {
        format: OutputFormat::Json,
        ..list_command(project_path)
    };
    let output = ListCommandHandler::new().execute(&command).unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(value["total"], 2);
    assert_eq!(value["migrations"][0]["filename"], "seed.sql");
    assert_eq!(value["migrations"][0]["version_defaulted"], true);
    assert_eq!(value["migrations"][1]["version_defaulted"], false);
}
