//! Recommendation rules for classified garments
//!
//! Ordered rule checks; the first hit wins. Advisory strings are returned
//! verbatim.

use crate::triage::labels::RESELLABLE_CATEGORIES;

pub const DONATE: &str = "Donate / Resell";
pub const REPAIR: &str = "Repair / Upcycle (patch, embroidery)";
pub const RECYCLE: &str = "Recycle via textile recycling";
pub const FALLBACK: &str = "Consider repair or creative upcycling";

/// Map a (category, condition) pair to its advisory string
pub fn recommend(category: &str, condition: &str) -> &'static str {
    if condition == "good" && RESELLABLE_CATEGORIES.contains(&category) {
        return DONATE;
    }
    if condition == "torn" {
        return REPAIR;
    }
    if condition == "worn" {
        return RECYCLE;
    }
    FALLBACK
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_good_resellable_donates() {
        assert_eq!(recommend("t-shirt", "good"), DONATE);
        assert_eq!(recommend("jeans", "good"), DONATE);
        assert_eq!(recommend("dress", "good"), DONATE);
    }

    #[test]
    fn test_good_non_resellable_falls_through() {
        // "good" only short-circuits for the resellable set
        assert_eq!(recommend("shoes", "good"), FALLBACK);
    }

    #[test]
    fn test_torn_repairs_regardless_of_category() {
        assert_eq!(recommend("t-shirt", "torn"), REPAIR);
        assert_eq!(recommend("shoes", "torn"), REPAIR);
        assert_eq!(recommend("unknown", "torn"), REPAIR);
    }

    #[test]
    fn test_worn_recycles() {
        assert_eq!(recommend("jacket", "worn"), RECYCLE);
    }

    #[test]
    fn test_unknown_condition_generic_fallback() {
        assert_eq!(recommend("t-shirt", "unknown"), FALLBACK);
        assert_eq!(recommend("t-shirt", ""), FALLBACK);
    }
}
