pub use interest_rate_model;
pub use money_market;
pub use oracle;
pub use position_manager;
