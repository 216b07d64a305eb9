//! Profit, break-even and position sizing computations
//!
//! Every function here is pure: it reads its arguments, does a fixed amount
//! of decimal arithmetic and returns a result or a domain error.

pub mod engine;
pub mod breakeven;
pub mod position;
pub mod magnitude;

pub use engine::compute_trade;
pub use breakeven::compute_fee_break_even;
pub use position::{calculate_position_size, calculate_simple_profit};
pub use magnitude::{format_number, parse_magnitude};
