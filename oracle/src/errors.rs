pub const ERROR_NOT_OWNER: &str = "caller is not the owner";
pub const ERROR_INVALID_ASSET: &str = "invalid asset";
pub const ERROR_INVALID_DECIMALS: &str = "invalid number of decimals";
pub const ERROR_UNKNOWN_DECIMALS: &str = "token decimals have not been set";
pub const ERROR_INVALID_PRICE_SOURCE: &str = "invalid price source";
pub const ERROR_PRICE_SOURCE_NOT_SET: &str = "price source has not been set";
pub const ERROR_ZERO_PRICE: &str = "price cannot be zero";
