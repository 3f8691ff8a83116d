pub mod logo;
pub mod styles;
