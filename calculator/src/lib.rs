//! Input handling and presentation for the trade calculators
//!
//! Validates user input before it reaches the engine, supplies the
//! conversion rate, and turns results into text reports or JSON summary
//! cards.

pub mod config;
pub mod service;
pub mod report;
pub mod card;

pub use config::CalculatorConfig;
pub use service::Calculator;
pub use card::SummaryCard;
