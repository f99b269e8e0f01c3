pub mod badge;
pub mod position;
pub mod stock;
