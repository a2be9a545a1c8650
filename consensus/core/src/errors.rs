pub mod amount;
pub mod payload;
