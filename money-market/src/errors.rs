pub const ERROR_NOT_OWNER: &str = "caller is not the owner";
pub const ERROR_INVALID_AMOUNT: &str = "invalid amount";
pub const ERROR_INVALID_ASSET: &str = "invalid asset";
pub const ERROR_NOT_LISTED: &str = "market not listed";
pub const ERROR_MARKET_PAUSED: &str = "market is paused";
pub const ERROR_BORROW_PAUSED: &str = "borrowing is paused";
pub const ERROR_ALREADY_IN_STATE: &str = "market already in requested state";
pub const ERROR_ALREADY_ASSOCIATED: &str = "token already associated";
pub const ERROR_TOKEN_NOT_ASSOCIATED: &str = "token not associated";
pub const ERROR_UNDER_COLLATERALIZED: &str = "under collateralized";
pub const ERROR_INSUFFICIENT_CASH: &str = "insufficient cash";
pub const ERROR_INVALID_DECIMALS: &str = "invalid number of decimals";
pub const ERROR_INVALID_FEE_RATE: &str = "fee rate cannot exceed 10000 basis points";
pub const ERROR_RESERVE_FACTOR_TOO_HIGH: &str = "reserve factor too high";
pub const ERROR_INITIAL_FX_MUST_BE_GREATER_THAN_ZERO: &str = "initial exchange rate must be greater than zero";
pub const ERROR_NON_VALID_POSITION_MANAGER_SC: &str = "invalid position manager smart contract";
pub const ERROR_NON_VALID_INTEREST_RATE_MODEL_SC: &str = "invalid interest rate model smart contract";
pub const ERROR_MARKET_NOT_FRESH: &str = "market has not accrued interest";
pub const ERROR_REPAY_EXCEEDS_DEBT: &str = "repay amount exceeds outstanding debt";
pub const ERROR_CLAIM_EXCEEDS_INTERESTS: &str = "claim amount exceeds claimable interests";
pub const ERROR_CLAIM_EXCEEDS_RESERVES: &str = "claim amount exceeds reserves";
