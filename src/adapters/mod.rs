// Adapters
// マイグレーションディレクトリと生成ファイルへのファイルシステムアクセスを抽象化

pub mod manifest_file;
pub mod migration_directory;
