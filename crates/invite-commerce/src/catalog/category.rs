//! Category keys for product grouping.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A browsable category of invitation cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Wedding,
    Engagement,
    BabyShower,
    Festival,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Category; 4] = [
        Category::Wedding,
        Category::Engagement,
        Category::BabyShower,
        Category::Festival,
    ];

    /// Key used in markup (`data-category`) and lookups.
    pub fn key(&self) -> &'static str {
        match self {
            Category::Wedding => "wedding",
            Category::Engagement => "engagement",
            Category::BabyShower => "baby-shower",
            Category::Festival => "festival",
        }
    }

    /// Heading shown above the expanded category grid.
    pub fn title(&self) -> &'static str {
        match self {
            Category::Wedding => "Wedding Invitations",
            Category::Engagement => "Engagement Cards",
            Category::BabyShower => "Baby Shower",
            Category::Festival => "Festival Cards",
        }
    }

    /// Parse a category key.
    pub fn from_key(key: &str) -> Option<Self> {
        Category::ALL.into_iter().find(|c| c.key() == key)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_round_trip() {
        for category in Category::ALL {
            assert_eq!(Category::from_key(category.key()), Some(category));
        }
        assert_eq!(Category::from_key("birthday"), None);
    }

    #[test]
    fn test_titles() {
        assert_eq!(Category::BabyShower.title(), "Baby Shower");
        assert_eq!(Category::Wedding.title(), "Wedding Invitations");
    }

    #[test]
    fn test_serde_uses_keys() {
        let json = serde_json::to_string(&Category::BabyShower).unwrap();
        assert_eq!(json, "\"baby-shower\"");
    }
}
