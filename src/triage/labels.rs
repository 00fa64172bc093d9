//! Fixed label tables for the garment model heads

/// Category head labels, index order matches the model output
pub const CATEGORY_LABELS: &[&str] = &["t-shirt", "jeans", "dress", "jacket", "shoes"];

/// Condition head labels, index order matches the model output
pub const CONDITION_LABELS: &[&str] = &["good", "torn", "worn"];

/// Garment categories eligible for the donate/resell rule
pub const RESELLABLE_CATEGORIES: &[&str] = &["t-shirt", "jeans", "dress"];

/// Label for a category class index. Out-of-table indices map to a label
/// no recommendation rule matches.
pub fn category_label(index: usize) -> &'static str {
    CATEGORY_LABELS.get(index).copied().unwrap_or("unknown")
}

/// Label for a condition class index
pub fn condition_label(index: usize) -> &'static str {
    CONDITION_LABELS.get(index).copied().unwrap_or("unknown")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_labels() {
        assert_eq!(category_label(0), "t-shirt");
        assert_eq!(category_label(4), "shoes");
        assert_eq!(category_label(99), "unknown");
    }

    #[test]
    fn test_condition_labels() {
        assert_eq!(condition_label(0), "good");
        assert_eq!(condition_label(1), "torn");
        assert_eq!(condition_label(2), "worn");
        assert_eq!(condition_label(3), "unknown");
    }

    #[test]
    fn test_resellable_is_subset_of_categories() {
        assert!(RESELLABLE_CATEGORIES
            .iter()
            .all(|c| CATEGORY_LABELS.contains(c)));
    }
}
