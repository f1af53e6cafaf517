/// The WAD unit
pub const WAD: u64 = 1_000_000_000_000_000_000;

/// The number of decimals of EGLD
pub const EGLD_DECIMALS: u8 = 18;

/// The maximum number of decimals a token can have
pub const MAX_DECIMALS: u8 = 18;
