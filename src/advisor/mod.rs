//! Rule-based cryptocurrency advisor
//!
//! A fixed four-coin table answered by five canned queries, with keyword
//! intent routing over free text. The table is built once at startup and
//! shared by reference; nothing here mutates state between turns.

pub mod dataset;
pub mod queries;
pub mod router;

pub use dataset::{CoinRecord, CoinTable, Level, Trend};
pub use queries::DISCLAIMER;
pub use router::{reply, Intent};
