// migration-manifest ライブラリのエントリーポイント
//
// モジュール構造:
// - cli: CLIレイヤー（ユーザー入力の受付とコマンドルーティング）
// - core: コアドメイン（マイグレーションモデル、設定、エラー型）
// - adapters: ファイルシステムへのアクセスを抽象化
// - services: 検出・検証・生成・状態集計のロジック

pub mod adapters;
pub mod cli;
pub mod core;
pub mod services;
