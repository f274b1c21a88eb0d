//! キーワード集合
//!
//! カンマ区切りテキストと改行区切りのキーワードファイルを同じ手順で正規化する。
//! 照合は小文字で行い、順序は入力順を保つ（一致キーワードの判定に使用）。

/// 正規化済みキーワード集合（小文字・前後空白除去・空要素なし・重複なし）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordSet {
    keywords: Vec<String>,
}

impl KeywordSet {
    /// カンマ区切りテキストを解析
    pub fn parse(text: &str) -> Self {
        let mut keywords: Vec<String> = Vec::new();

        for entry in text.split(',') {
            let keyword = entry.trim().to_lowercase();
            if keyword.is_empty() || keywords.contains(&keyword) {
                continue;
            }
            keywords.push(keyword);
        }

        Self { keywords }
    }

    /// テキスト入力とキーワードファイルの内容を結合して解析
    ///
    /// テキストが先、ファイルの行が後に並ぶ。
    pub fn from_sources(text: Option<&str>, file_content: Option<&str>) -> Self {
        let mut combined = String::new();

        if let Some(text) = text {
            combined.push_str(text);
        }

        if let Some(content) = file_content {
            let file_text = keywords_file_to_text(content);
            if !file_text.is_empty() {
                if !combined.trim().is_empty() {
                    combined.push_str(", ");
                }
                combined.push_str(&file_text);
            }
        }

        Self::parse(&combined)
    }

    /// `haystack_lower`（小文字化済み）に含まれる最初のキーワードを入力順で返す
    pub fn first_match(&self, haystack_lower: &str) -> Option<&str> {
        self.keywords
            .iter()
            .find(|kw| haystack_lower.contains(kw.as_str()))
            .map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.keywords.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }
}

/// 1行1キーワードのファイル内容をカンマ区切りテキストに変換
pub fn keywords_file_to_text(content: &str) -> String {
    content
        .trim()
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}
