// マイグレーションドメインモデル
//
// ディスク上のマイグレーションファイルと、そのバージョン順の集合を表現します。

use serde::Serialize;

/// ファイル名から取り出したバージョン
///
/// 先頭の数値を解釈できなかったファイルは `Defaulted` となり、
/// 数値としては 0 として扱われます。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum ParsedVersion {
    /// ファイル名の先頭から解釈できたバージョン
    Parsed(u64),
    /// 解釈できなかったため 0 にフォールバックしたバージョン
    Defaulted,
}

impl ParsedVersion {
    /// バージョン番号を取得（`Defaulted` は 0）
    pub fn value(&self) -> u64 {
        match self {
            ParsedVersion::Parsed(version) => *version,
            ParsedVersion::Defaulted => 0,
        }
    }

    /// フォールバック値かどうか
    pub fn is_defaulted(&self) -> bool {
        matches!(self, ParsedVersion::Defaulted)
    }
}

/// マイグレーションファイル
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MigrationFile {
    /// 拡張子を含むファイル名
    pub filename: String,
    /// ファイル名から解釈したバージョン
    pub version: ParsedVersion,
    /// 説明（現状はファイル名そのもの）
    pub description: String,
}

impl MigrationFile {
    /// 新しいマイグレーションファイルを作成
    pub fn new(filename: String, version: ParsedVersion) -> Self {
        let description = filename.clone();
        Self {
            filename,
            version,
            description,
        }
    }

    /// バージョン番号
    pub fn version_number(&self) -> u64 {
        self.version.value()
    }
}

/// バージョン昇順に並んだマイグレーションの集合
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MigrationSet {
    migrations: Vec<MigrationFile>,
}

impl MigrationSet {
    /// 検出順のマイグレーションからセットを作成
    ///
    /// バージョン昇順に安定ソートするため、同一バージョンのファイルは検出順を保ちます。
    pub fn from_discovered(mut migrations: Vec<MigrationFile>) -> Self {
        migrations.sort_by_key(MigrationFile::version_number);
        Self { migrations }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MigrationFile> {
        self.migrations.iter()
    }

    pub fn len(&self) -> usize {
        self.migrations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.migrations.is_empty()
    }

    pub fn as_slice(&self) -> &[MigrationFile] {
        &self.migrations
    }

    /// ファイル名の一覧（セット順）
    pub fn filenames(&self) -> Vec<&str> {
        self.migrations.iter().map(|m| m.filename.as_str()).collect()
    }
}

impl<'a> IntoIterator for &'a MigrationSet {
    type Item = &'a MigrationFile;
    type IntoIter = std::slice::Iter<'a, MigrationFile>;

    fn into_iter(self) -> Self::IntoIter {
        self.migrations.iter()
    }
}

/// 同一バージョンを持つファイルの組
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionConflict {
    /// 重複しているバージョン
    pub version: u64,
    /// 先に検出されたファイル
    pub existing: String,
    /// 後から検出されたファイル
    pub duplicate: String,
}

impl std::fmt::Display for VersionConflict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "version {}: {} and {}",
            self.version, self.existing, self.duplicate
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(name: &str, version: ParsedVersion) -> MigrationFile {
        MigrationFile::new(name.to_string(), version)
    }

    #[test]
    fn test_description_is_filename() {
        let migration = file("0001_create_users.sql", ParsedVersion::Parsed(1));

        assert_eq!(migration.description, "0001_create_users.sql");
        assert_eq!(migration.version_number(), 1);
    }

    #[test]
    fn test_defaulted_version_is_zero() {
        assert_eq!(ParsedVersion::Defaulted.value(), 0);
        assert!(ParsedVersion::Defaulted.is_defaulted());
        assert!(!ParsedVersion::Parsed(0).is_defaulted());
    }

    #[test]
    fn test_set_sorts_by_version_and_keeps_tie_order() {
        let set = MigrationSet::from_discovered(vec![
            file("0005_b.sql", ParsedVersion::Parsed(5)),
            file("0002_a.sql", ParsedVersion::Parsed(2)),
            file("0005_a.sql", ParsedVersion::Parsed(5)),
            file("init.sql", ParsedVersion::Defaulted),
        ]);

        assert_eq!(
            set.filenames(),
            vec!["init.sql", "0002_a.sql", "0005_b.sql", "0005_a.sql"]
        );
    }

    #[test]
    fn test_conflict_display() {
        let conflict = VersionConflict {
            version: 5,
            existing: "0005_a.sql".to_string(),
            duplicate: "0005_b.sql".to_string(),
        };

        assert_eq!(conflict.to_string(), "version 5: 0005_a.sql and 0005_b.sql");
    }
}
