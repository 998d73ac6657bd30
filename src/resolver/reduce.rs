use crate::vocab::TokenId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Largest fragment-id sum passed through without division
pub const UNDIVIDED_MAX: TokenId = 9999;

/// Largest sum reduced by the 128 divisor; anything above uses 32
pub const MID_TIER_MAX: TokenId = 99_999;

/// Which divisor was applied to a word's fragment-id sum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DivisionTier {
    /// Up to 4 digits, kept as is
    Unchanged,
    /// 5 digits, divided by 2^7
    By128,
    /// 6+ digits, divided by 2^5
    By32,
}

impl DivisionTier {
    pub fn for_sum(sum: TokenId) -> Self {
        if sum <= UNDIVIDED_MAX {
            DivisionTier::Unchanged
        } else if sum <= MID_TIER_MAX {
            DivisionTier::By128
        } else {
            DivisionTier::By32
        }
    }

    pub fn divisor(&self) -> TokenId {
        match self {
            DivisionTier::Unchanged => 1,
            DivisionTier::By128 => 128,
            DivisionTier::By32 => 32,
        }
    }

    pub fn apply(&self, sum: TokenId) -> TokenId {
        sum / self.divisor()
    }
}

impl fmt::Display for DivisionTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DivisionTier::Unchanged => write!(f, "no division"),
            DivisionTier::By128 => write!(f, "÷ 128 (2^7)"),
            DivisionTier::By32 => write!(f, "÷ 32 (2^5)"),
        }
    }
}

/// Reduce a fragment-id sum to a word token id
pub fn reduce_sum(sum: TokenId) -> (TokenId, DivisionTier) {
    let tier = DivisionTier::for_sum(sum);
    (tier.apply(sum), tier)
}
