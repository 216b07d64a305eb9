//! Domain models for the calculators

pub mod trade;
pub mod market;
pub mod breakeven;
pub mod position;

pub use trade::{TradeInput, TradeResult, ValuationMode};
pub use market::CurrencyPair;
pub use breakeven::{FeeBreakEvenInput, FeeBreakEvenResult};
pub use position::{PositionSizeInput, PositionSize, SimpleProfit};
