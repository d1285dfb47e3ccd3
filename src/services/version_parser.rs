// バージョンパーサー
//
// マイグレーションファイル名の先頭の数値からバージョンを取り出します。
// 解釈できない場合はエラーにせず Defaulted（バージョン0）を返します。

use crate::core::migration::ParsedVersion;

/// バージョン番号とファイル名の残りを区切る文字
pub const VERSION_SEPARATOR: char = '_';

/// ファイル名からバージョンを取り出す
///
/// 拡張子を除いたステムを最初の `_` で分割し、先頭部分を10進整数として解釈します。
/// 先頭ゼロは許容します。
///
/// # Examples
///
/// ```
/// use migration_manifest::core::migration::ParsedVersion;
/// use migration_manifest::services::version_parser::extract_version;
///
/// assert_eq!(extract_version("0007_init.sql"), ParsedVersion::Parsed(7));
/// assert_eq!(extract_version("migration.sql"), ParsedVersion::Defaulted);
/// ```
pub fn extract_version(filename: &str) -> ParsedVersion {
    let stem = file_stem(filename);

    let Some((prefix, _)) = stem.split_once(VERSION_SEPARATOR) else {
        return ParsedVersion::Defaulted;
    };

    // u64::from_str は先頭の '+' を受け付けるため、数字のみを明示的に確認する
    if prefix.is_empty() || !prefix.bytes().all(|b| b.is_ascii_digit()) {
        return ParsedVersion::Defaulted;
    }

    prefix
        .parse::<u64>()
        .map(ParsedVersion::Parsed)
        .unwrap_or(ParsedVersion::Defaulted)
}

/// 最後の '.' 以降を拡張子とみなして取り除く
pub(crate) fn file_stem(filename: &str) -> &str {
    match filename.rfind('.') {
        Some(index) => &filename[..index],
        None => filename,
    }
}
