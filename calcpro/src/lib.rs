//! CalcPro - Calculator engines behind one facade
//!
//! Every engine is a pure function over parsed numeric input: the
//! presentation layer collects raw strings, parses them through [`input`],
//! invokes exactly one engine per action, and renders the structured
//! result. Engines share no state and nothing here blocks, retries, or
//! spawns work.

pub mod input;

pub use calcpro_core::{format_trimmed, round1, round2, CalcError};

pub use calcpro_datetime as datetime;
pub use calcpro_expr as expr;
pub use calcpro_favorites as favorites;
pub use calcpro_finance as finance;
pub use calcpro_health as health;
pub use calcpro_percent as percent;
pub use calcpro_units as units;
