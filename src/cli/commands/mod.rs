// コマンドハンドラー層
// 各CLIコマンドの実装

pub mod generate;
pub mod list;
pub mod status;
pub mod validate;

use crate::cli::OutputFormat;
use anyhow::{Context, Result};
use serde::Serialize;

/// コマンド出力の共通トレイト
///
/// テキスト出力は `to_text`、JSON出力は Serialize 実装で表現します。
pub trait CommandOutput: Serialize {
    /// 人間向けのテキスト表現
    fn to_text(&self) -> String;
}

/// 出力フォーマットに従ってコマンド出力を文字列化する
pub fn render_output<T: CommandOutput>(output: &T, format: &OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(output.to_text()),
        OutputFormat::Json => {
            serde_json::to_string_pretty(output).with_context(|| "Failed to serialize output")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct SampleOutput {
        count: usize,
        #[serde(skip)]
        message: String,
    }

    impl CommandOutput for SampleOutput {
        fn to_text(&self) -> String {
            self.message.clone()
        }
    }

    #[test]
    fn test_render_text_and_json() {
        let output = SampleOutput {
            count: 3,
            message: "3 found".to_string(),
        };

        assert_eq!(render_output(&output, &OutputFormat::Text).unwrap(), "3 found");

        let json = render_output(&output, &OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["count"], 3);
        assert!(value.get("message").is_none());
    }
}
