//! Coin dataset for the rule-based advisor
//!
//! The table is fixed at process start, immutable, and passed by reference
//! to every query. No lifecycle beyond construction.

use std::fmt;

/// Price-direction label for a coin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Rising,
    Stable,
    Falling,
}

impl Trend {
    /// Weight used by the default investment score.
    /// Illustrative constants carried over unchanged.
    pub fn weight(&self) -> f64 {
        match self {
            Trend::Rising => 2.0,
            Trend::Stable => 1.0,
            Trend::Falling => 0.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Trend::Rising => "rising",
            Trend::Stable => "stable",
            Trend::Falling => "falling",
        }
    }
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coarse low/medium/high classification, used for both market-cap tier
/// and energy use
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Low,
    Medium,
    High,
}

impl Level {
    /// Ordinal used to rank market-cap tiers
    pub fn ordinal(&self) -> u8 {
        match self {
            Level::Low => 1,
            Level::Medium => 2,
            Level::High => 3,
        }
    }

    /// Market-cap weight used by the default investment score.
    /// Illustrative constants carried over unchanged.
    pub fn cap_weight(&self) -> f64 {
        match self {
            Level::Low => 0.5,
            Level::Medium => 1.0,
            Level::High => 1.5,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Low => "low",
            Level::Medium => "medium",
            Level::High => "high",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry in the advisor's dataset
///
/// `energy_use` is descriptive only and never enters any score.
#[derive(Debug, Clone)]
pub struct CoinRecord {
    pub name: &'static str,
    pub symbol: &'static str,
    pub trend: Trend,
    pub market_cap: Level,
    pub energy_use: Level,
    /// Environmental-friendliness rating in [0, 1]
    pub sustainability: f64,
}

/// Immutable coin table with a fixed iteration order
pub struct CoinTable {
    coins: Vec<CoinRecord>,
}

impl CoinTable {
    /// Build a table from records.
    ///
    /// Invariants: unique names, sustainability in [0, 1].
    pub fn new(coins: Vec<CoinRecord>) -> Self {
        debug_assert!(
            coins
                .iter()
                .all(|c| (0.0..=1.0).contains(&c.sustainability)),
            "sustainability scores must be in [0, 1]"
        );
        debug_assert!(
            {
                let mut names: Vec<_> = coins.iter().map(|c| c.name).collect();
                names.sort_unstable();
                names.windows(2).all(|w| w[0] != w[1])
            },
            "coin names must be unique"
        );
        CoinTable { coins }
    }

    /// The built-in four-coin dataset
    pub fn builtin() -> Self {
        CoinTable::new(vec![
            CoinRecord {
                name: "Bitcoin",
                symbol: "BTC",
                trend: Trend::Rising,
                market_cap: Level::High,
                energy_use: Level::High,
                sustainability: 0.3,
            },
            CoinRecord {
                name: "Ethereum",
                symbol: "ETH",
                trend: Trend::Stable,
                market_cap: Level::High,
                energy_use: Level::Medium,
                sustainability: 0.6,
            },
            CoinRecord {
                name: "Cardano",
                symbol: "ADA",
                trend: Trend::Rising,
                market_cap: Level::Medium,
                energy_use: Level::Low,
                sustainability: 0.8,
            },
            CoinRecord {
                name: "Algorand",
                symbol: "ALGO",
                trend: Trend::Falling,
                market_cap: Level::Low,
                energy_use: Level::Low,
                sustainability: 0.9,
            },
        ])
    }

    /// Iterate records in the table's fixed order
    pub fn iter(&self) -> std::slice::Iter<'_, CoinRecord> {
        self.coins.iter()
    }

    pub fn len(&self) -> usize {
        self.coins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coins.is_empty()
    }
}
