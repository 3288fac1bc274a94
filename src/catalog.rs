//! Fixed word catalog: every practice character belongs to exactly one
//! themed category, in a fixed order.
//!
//! The lists are grade-one vocabulary and are intentionally immutable;
//! progress tracking keys on the character strings themselves.

/// A themed grouping of practice characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// 數字 — numbers
    Numbers,
    /// 自然 — nature
    Nature,
    /// 人體 — body
    Body,
    /// 生活 — daily life
    DailyLife,
}

const NUMBERS: &[&str] = &["一", "二", "三", "四", "五", "六", "七", "八", "九", "十"];
const NATURE: &[&str] = &["天", "地", "日", "月", "山", "水", "火", "風", "雨", "田"];
const BODY: &[&str] = &["口", "耳", "目", "手", "足", "心", "大", "小", "長", "短"];
const DAILY_LIFE: &[&str] = &["工", "人", "王", "力", "又", "寸", "木", "禾", "竹", "米"];

impl Category {
    /// All categories, in start-screen display order.
    pub const ALL: [Category; 4] = [
        Category::Numbers,
        Category::Nature,
        Category::Body,
        Category::DailyLife,
    ];

    /// Display name shown to the learner.
    pub fn title(self) -> &'static str {
        match self {
            Category::Numbers => "數字",
            Category::Nature => "自然",
            Category::Body => "人體",
            Category::DailyLife => "生活",
        }
    }

    /// The ordered character list owned by this category.
    pub fn characters(self) -> &'static [&'static str] {
        match self {
            Category::Numbers => NUMBERS,
            Category::Nature => NATURE,
            Category::Body => BODY,
            Category::DailyLife => DAILY_LIFE,
        }
    }

    /// Number of characters in this category.
    pub fn len(self) -> usize {
        self.characters().len()
    }

    pub fn is_empty(self) -> bool {
        self.characters().is_empty()
    }

    /// Character at `index`, if in bounds.
    pub fn character(self, index: usize) -> Option<&'static str> {
        self.characters().get(index).copied()
    }

    /// Look up a category by its display name.
    pub fn from_title(title: &str) -> Option<Category> {
        Category::ALL.iter().copied().find(|c| c.title() == title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_category_has_ten_characters() {
        for cat in Category::ALL {
            assert_eq!(cat.len(), 10, "{}", cat.title());
        }
    }

    #[test]
    fn characters_are_unique_across_catalog() {
        let mut seen = std::collections::HashSet::new();
        for cat in Category::ALL {
            for ch in cat.characters() {
                assert!(seen.insert(*ch), "duplicate character {ch}");
            }
        }
    }

    #[test]
    fn from_title_round_trips() {
        for cat in Category::ALL {
            assert_eq!(Category::from_title(cat.title()), Some(cat));
        }
        assert_eq!(Category::from_title("動物"), None);
    }
}
