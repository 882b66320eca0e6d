//! Localized Strings
//!
//! Display text looked up by key. Views never branch on the returned text.

/// Supported display languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    En,
    Zh,
}

impl Locale {
    /// Parse a language tag such as `en-US` or `zh-CN`. Unknown tags fall back to English.
    pub fn from_tag(tag: &str) -> Self {
        let primary = tag.trim().split(['-', '_']).next().unwrap_or_default();
        if primary.eq_ignore_ascii_case("zh") {
            Locale::Zh
        } else {
            Locale::En
        }
    }

    pub fn as_tag(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Zh => "zh",
        }
    }
}

/// Identifiers of every user-visible label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextKey {
    Todo,
    Add,
    NewTodo,
    Clear,
    Save,
    Cancel,
    PleaseEnterTodo,
}

pub fn text(locale: Locale, key: TextKey) -> &'static str {
    match locale {
        Locale::En => match key {
            TextKey::Todo => "Todo",
            TextKey::Add => "Add",
            TextKey::NewTodo => "New todo",
            TextKey::Clear => "Clear",
            TextKey::Save => "Save",
            TextKey::Cancel => "Cancel",
            TextKey::PleaseEnterTodo => "Please enter a todo",
        },
        Locale::Zh => match key {
            TextKey::Todo => "待办",
            TextKey::Add => "添加",
            TextKey::NewTodo => "新待办",
            TextKey::Clear => "清除",
            TextKey::Save => "保存",
            TextKey::Cancel => "取消",
            TextKey::PleaseEnterTodo => "请输入待办事项",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_KEYS: [TextKey; 7] = [
        TextKey::Todo,
        TextKey::Add,
        TextKey::NewTodo,
        TextKey::Clear,
        TextKey::Save,
        TextKey::Cancel,
        TextKey::PleaseEnterTodo,
    ];

    #[test]
    fn test_english_labels() {
        let labels: Vec<&str> = ALL_KEYS.iter().map(|key| text(Locale::En, *key)).collect();
        assert_eq!(
            labels,
            vec!["Todo", "Add", "New todo", "Clear", "Save", "Cancel", "Please enter a todo"]
        );
    }

    #[test]
    fn test_chinese_labels_present() {
        for key in ALL_KEYS {
            let label = text(Locale::Zh, key);
            assert!(!label.trim().is_empty(), "missing zh label for {:?}", key);
            assert_ne!(label, text(Locale::En, key), "untranslated zh label for {:?}", key);
        }
    }

    #[test]
    fn test_locale_from_tag() {
        assert_eq!(Locale::from_tag("zh"), Locale::Zh);
        assert_eq!(Locale::from_tag("zh-CN"), Locale::Zh);
        assert_eq!(Locale::from_tag("ZH_tw"), Locale::Zh);
        assert_eq!(Locale::from_tag("en-US"), Locale::En);
        assert_eq!(Locale::from_tag("fr"), Locale::En);
        assert_eq!(Locale::from_tag(""), Locale::En);
    }
}
