// Statistics engine: rate-stat arithmetic and scorebook formatting.

pub mod batting;
pub mod fielding;
pub mod format;
pub mod pitching;
pub mod rate;
