// Core Domain
// マイグレーションファイルのモデル、設定、エラー型などの純粋なドメイン定義

pub mod config;
pub mod error;
pub mod migration;
pub mod naming;
