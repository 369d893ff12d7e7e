//! Advisory grocery tags (Trello labels) derived from item text.
//!
//! Every rule is checked independently and in table order, so an item that
//! matches two keywords for the same tag carries that tag twice.

use std::fmt;

/// Board labels an item may be filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    Produce,
    Refrigerated,
    Pantry,
    HomeGoods,
    Pets,
    Clothes,
    Hardware,
    LocalMarket,
    Discount,
    PersonalCare,
}

impl Tag {
    /// Label text as it appears on the board.
    pub fn label(self) -> &'static str {
        match self {
            Self::Produce => "Produce",
            Self::Refrigerated => "Frozen Refrigerated Dairy",
            Self::Pantry => "Dry Goods",
            Self::HomeGoods => "Home Goods",
            Self::Pets => "Pet Store",
            Self::Clothes => "Clothes",
            Self::Hardware => "Hardware Store",
            Self::LocalMarket => "Local Market",
            Self::Discount => "Euro Store",
            Self::PersonalCare => "Personal Care",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Keyword rules, matched against the lower-cased item.
const RULES: &[(&str, Tag)] = &[
    ("milk", Tag::Refrigerated),
    ("cream", Tag::Refrigerated),
    ("cheese", Tag::Refrigerated),
    ("walnut", Tag::Pantry),
    ("pepperoni", Tag::Refrigerated),
    ("tortillas", Tag::Pantry),
    ("lettuce", Tag::Produce),
    ("bread", Tag::Pantry),
    ("chicken", Tag::Refrigerated),
    ("muffin", Tag::Pantry),
    ("peanut", Tag::Pantry),
];

/// All tags matching `item`, in rule order, duplicates included.
pub fn classify_tags(item: &str) -> Vec<Tag> {
    let lowered = item.to_lowercase();
    RULES
        .iter()
        .filter(|(keyword, _)| lowered.contains(keyword))
        .map(|&(_, tag)| tag)
        .collect()
}

/// Comma-joined tag labels for `item`, or `""` when nothing matches.
pub fn classify(item: &str) -> String {
    classify_tags(item)
        .into_iter()
        .map(Tag::label)
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_case_insensitively() {
        assert!(classify("MILK").contains("Frozen Refrigerated Dairy"));
    }

    #[test]
    fn keeps_duplicates_in_rule_order() {
        assert_eq!(
            classify("Milk and Cheese"),
            "Frozen Refrigerated Dairy,Frozen Refrigerated Dairy"
        );
    }

    #[test]
    fn mixed_tags_follow_rule_order() {
        // "bread" is checked before "chicken" even though it comes later in the text.
        assert_eq!(
            classify_tags("chicken on bread"),
            vec![Tag::Pantry, Tag::Refrigerated]
        );
        assert_eq!(classify("chicken on bread"), "Dry Goods,Frozen Refrigerated Dairy");
    }

    #[test]
    fn substring_matches_count() {
        assert_eq!(classify("ice cream sandwiches"), "Frozen Refrigerated Dairy");
        assert_eq!(classify("blueberry muffins"), "Dry Goods");
        assert_eq!(classify("romaine lettuce"), "Produce");
    }

    #[test]
    fn single_item_can_hit_many_rules() {
        assert_eq!(classify("peanut butter bread"), "Dry Goods,Dry Goods");
    }

    #[test]
    fn no_match_is_empty() {
        assert_eq!(classify("rocks"), "");
        assert!(classify_tags("").is_empty());
    }

    #[test]
    fn is_deterministic() {
        assert_eq!(classify("cream cheese"), classify("cream cheese"));
    }

    #[test]
    fn labels_display() {
        assert_eq!(Tag::Pantry.to_string(), "Dry Goods");
        assert_eq!(Tag::Discount.to_string(), "Euro Store");
    }
}
