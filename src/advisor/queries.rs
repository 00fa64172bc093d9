//! Fixed advisory queries over the coin table
//!
//! Every selection uses a stable first-maximum-wins scan: iterate in table
//! order, replace the best only on a strictly greater key. Ties therefore
//! always resolve to the earliest record.

use crate::advisor::dataset::{CoinRecord, CoinTable, Trend};

/// Appended to every recommendation reply
pub const DISCLAIMER: &str = "I am a simple rule-based advisor. Crypto is risky—always do your own research. This is not financial advice.";

/// Reply when no coin is marked rising
pub const NO_RISING: &str = "No coins are currently marked as 'rising' in my dataset.";

/// Reply when the table has no entries at all (never the case for the
/// built-in table, kept so every query stays total)
pub const NO_COINS: &str = "No coins in my dataset.";

/// Sustainability floor for the long-term rule
const LONG_TERM_SUSTAINABILITY_FLOOR: f64 = 0.7;

/// Stable first-maximum-wins scan.
///
/// Returns the first item whose key no later item strictly exceeds.
pub fn stable_max_by_key<'a, T, K, F>(items: impl Iterator<Item = &'a T>, key: F) -> Option<&'a T>
where
    F: Fn(&T) -> K,
    K: PartialOrd,
{
    let mut best: Option<(&T, K)> = None;
    for item in items {
        let k = key(item);
        match &best {
            None => best = Some((item, k)),
            Some((_, best_key)) if k > *best_key => best = Some((item, k)),
            _ => {}
        }
    }
    best.map(|(item, _)| item)
}

/// Highest-cap coin among rising coins, earliest on ties
fn best_rising(table: &CoinTable) -> Option<&CoinRecord> {
    stable_max_by_key(
        table.iter().filter(|c| c.trend == Trend::Rising),
        |c| c.market_cap.ordinal(),
    )
}

/// Default investment score: trend weight + sustainability + cap weight
fn investment_score(coin: &CoinRecord) -> f64 {
    coin.trend.weight() + coin.sustainability + coin.market_cap.cap_weight()
}

/// Coin with the highest sustainability score
pub fn most_sustainable(table: &CoinTable) -> String {
    match stable_max_by_key(table.iter(), |c| c.sustainability) {
        Some(best) => format!(
            "🌱 Most sustainable: {} ({}). Sustainability score: {:.1}/10. Energy use: {}. {}",
            best.name, best.symbol, best.sustainability, best.energy_use, DISCLAIMER
        ),
        None => NO_COINS.to_string(),
    }
}

/// Rising coin with the highest market-cap tier
pub fn trending_up(table: &CoinTable) -> String {
    match best_rising(table) {
        Some(best) => format!(
            "🚀 Trending: {} ({}) is trending up with market cap {}. Energy use: {}. {}",
            best.name, best.symbol, best.market_cap, best.energy_use, DISCLAIMER
        ),
        None => NO_RISING.to_string(),
    }
}

/// Long-term pick: first rising coin above the sustainability floor,
/// falling back to the best rising coin by market cap
pub fn long_term_pick(table: &CoinTable) -> String {
    if let Some(pick) = table
        .iter()
        .find(|c| c.trend == Trend::Rising && c.sustainability > LONG_TERM_SUSTAINABILITY_FLOOR)
    {
        return format!(
            "{} ({}) is a good long-term pick: rising trend and sustainability score {:.1}/10. {}",
            pick.name, pick.symbol, pick.sustainability, DISCLAIMER
        );
    }

    if let Some(best) = best_rising(table) {
        return format!(
            "{} ({}) is trending and may suit long-term growth. Sustainability score: {:.1}/10. {}",
            best.name, best.symbol, best.sustainability, DISCLAIMER
        );
    }

    "I don't have a clear long-term candidate. Try asking about sustainability or trend."
        .to_string()
}

/// Default pick by the combined investment score
pub fn default_pick(table: &CoinTable) -> String {
    match stable_max_by_key(table.iter(), investment_score) {
        Some(best) => format!(
            "My simple pick: {} ({}). Trend: {}, market cap: {}, sustainability: {:.1}/10. {}",
            best.name, best.symbol, best.trend, best.market_cap, best.sustainability, DISCLAIMER
        ),
        None => NO_COINS.to_string(),
    }
}

/// One line per coin, table order
pub fn list_coins(table: &CoinTable) -> String {
    let lines: Vec<String> = table
        .iter()
        .map(|c| {
            format!(
                "{} ({}): trend={}, market_cap={}, sustainability={:.1}/10",
                c.name, c.symbol, c.trend, c.market_cap, c.sustainability
            )
        })
        .collect();
    format!("Coins in my dataset:\n{}", lines.join("\n"))
}

pub fn help_text() -> String {
    "I can answer: 'Which crypto is trending up?', 'What's the most sustainable coin?', \
     'Which coin should I buy?', 'List coins'. Try: 'Which crypto should I buy for long-term growth?'"
        .to_string()
}
