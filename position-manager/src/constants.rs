/// One hundred percent in basis points
pub const BPS: u64 = 10_000;
