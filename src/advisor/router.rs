//! Keyword intent routing for the chat advisor
//!
//! An explicit ordered rule table evaluated in priority order. The first
//! matching rule wins; intents never combine. The table is data rather
//! than a match cascade so the ordering semantics stay testable.

use crate::advisor::dataset::CoinTable;
use crate::advisor::queries;

/// Recognized chat intents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Sustainability,
    Trending,
    Invest,
    Help,
    List,
    Unknown,
}

/// Ordered intent rules. Priority is the table order.
const RULES: &[(Intent, &[&str])] = &[
    (
        Intent::Sustainability,
        &["sustain", "eco", "green", "environment"],
    ),
    (
        Intent::Trending,
        &["trend", "trending", "up", "rising", "growth", "grow"],
    ),
    (Intent::Invest, &["buy", "recommend", "should i", "invest"]),
    (Intent::Help, &["help", "how"]),
    (Intent::List, &["list", "show", "coins"]),
];

/// Reply for input no rule matches
pub const FALLBACK: &str = "Sorry, I didn't understand. Try asking: 'Which crypto is trending up?' \
     or 'What's the most sustainable coin?'";

/// Classify lowercased, trimmed input against the rule table
fn classify(query: &str) -> Intent {
    for (intent, keywords) in RULES {
        if keywords.iter().any(|k| query.contains(k)) {
            return *intent;
        }
    }
    Intent::Unknown
}

/// Route one chat turn to its reply
pub fn reply(table: &CoinTable, input: &str) -> String {
    let query = input.to_lowercase();
    let query = query.trim();

    match classify(query) {
        Intent::Sustainability => queries::most_sustainable(table),
        Intent::Trending => queries::trending_up(table),
        // "long" also covers "long-term"
        Intent::Invest if query.contains("long") => queries::long_term_pick(table),
        Intent::Invest => queries::default_pick(table),
        Intent::Help => queries::help_text(),
        Intent::List => queries::list_coins(table),
        Intent::Unknown => FALLBACK.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sustainability_intent() {
        assert_eq!(classify("what's the most sustainable coin?"), Intent::Sustainability);
        assert_eq!(classify("anything eco friendly?"), Intent::Sustainability);
    }

    #[test]
    fn test_trending_intent() {
        assert_eq!(classify("which crypto is trending up?"), Intent::Trending);
        assert_eq!(classify("what is growing fastest"), Intent::Trending);
    }

    #[test]
    fn test_invest_intent() {
        assert_eq!(classify("which coin should i buy?"), Intent::Invest);
        assert_eq!(classify("where to invest"), Intent::Invest);
    }

    #[test]
    fn test_priority_order_sustainability_beats_trending() {
        // contains both sustainability and trend keywords; the earlier
        // rule wins
        assert_eq!(
            classify("is the sustainable coin trending up?"),
            Intent::Sustainability
        );
    }

    #[test]
    fn test_unknown_intent() {
        assert_eq!(classify("tell me a joke"), Intent::Unknown);
    }

    #[test]
    fn test_reply_routes_to_most_sustainable() {
        let table = CoinTable::builtin();
        let reply = reply(&table, "What's the most sustainable coin?");
        assert!(reply.contains("Algorand"));
    }

    #[test]
    fn test_reply_long_term_routes_to_long_term_pick() {
        let table = CoinTable::builtin();
        let reply = reply(&table, "should I buy for long-term growth");
        assert!(reply.contains("Cardano"));
    }

    #[test]
    fn test_reply_plain_buy_routes_to_default_pick() {
        let table = CoinTable::builtin();
        let reply = reply(&table, "which coin should I buy?");
        assert!(reply.contains("My simple pick"));
        assert!(reply.contains("Bitcoin"));
    }

    #[test]
    fn test_reply_unrecognized_is_verbatim_fallback() {
        let table = CoinTable::builtin();
        assert_eq!(reply(&table, "tell me a joke"), FALLBACK);
    }

    #[test]
    fn test_reply_is_case_insensitive() {
        let table = CoinTable::builtin();
        let upper = reply(&table, "WHICH CRYPTO IS TRENDING UP?");
        assert!(upper.contains("Bitcoin"));
    }
}
