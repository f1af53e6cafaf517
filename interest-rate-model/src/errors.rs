pub const ERROR_NOT_OWNER: &str = "caller is not the owner";
pub const ERROR_INVALID_BLOCKS_PER_YEAR: &str = "blocks per year must be greater than zero";
pub const ERROR_INVALID_KINK: &str = "kink must be in the (0, 1] range";
