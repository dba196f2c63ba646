pub mod error;
pub mod expr;
pub mod stmt;
pub mod token;
pub mod token_type;
