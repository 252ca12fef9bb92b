//! CalcPro Finance - Money calculations
//!
//! Compound interest, amortized mortgage payments, sequential discount
//! chains, and tip splitting. Every function is pure: structured numeric
//! input in, structured result out, money rounded to cents on the way out.

mod compound;
mod discount;
mod mortgage;
mod tip;

pub use compound::{compound_interest, interest_earned};
pub use discount::{chain_discounts, single_discount, Discount, DiscountChain};
pub use mortgage::{mortgage, MortgageBreakdown, MortgagePayment};
pub use tip::{tip_split, TipSplit, TIP_PRESETS};
