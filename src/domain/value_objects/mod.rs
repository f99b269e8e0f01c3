pub mod price;
pub mod shares;
