mod reduce;
mod resolve;


pub use reduce::{DivisionTier, MID_TIER_MAX, UNDIVIDED_MAX, reduce_sum};
pub use resolve::{WordResolution, resolve_word};
