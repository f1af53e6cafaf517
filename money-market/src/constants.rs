/// A WAD equals 1e18
pub const WAD: u64 = 1_000_000_000_000_000_000;

/// One hundred percent in basis points
pub const BPS: u64 = 10_000;

/// The number of decimals of shares
pub const SHARE_DECIMALS: u8 = 18;
