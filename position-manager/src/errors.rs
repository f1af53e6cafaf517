pub const ERROR_NOT_OWNER: &str = "caller is not the owner";
pub const ERROR_NOT_LISTED: &str = "market not listed";
pub const ERROR_ALREADY_LISTED: &str = "market already listed";
pub const ERROR_INVALID_MONEY_MARKET: &str = "invalid money market smart contract";
pub const ERROR_ARRAY_LENGTH_MISMATCH: &str = "arrays must have the same length";
pub const ERROR_INVALID_BORROW_CAP: &str = "borrow cap cannot exceed 10000 basis points";
pub const ERROR_INVALID_RISK_PARAMETER: &str = "risk parameter cannot exceed 10000 basis points";
pub const ERROR_INVALID_PRICE_ORACLE: &str = "invalid price oracle smart contract";
pub const ERROR_ORACLE_NOT_INITIALIZED: &str = "price oracle has not been set";
