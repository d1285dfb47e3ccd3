// Services Layer
// マイグレーションの検出・検証・生成・状態集計を行うサービス層

pub mod manifest_generator;
pub mod manifest_pipeline;
pub mod migration_discovery;
pub mod migration_validator;
pub mod status_reporter;
pub mod traits;
pub mod version_parser;
