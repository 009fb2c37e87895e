pub mod error;
pub mod logger;
pub mod lstring;
pub mod validation;
