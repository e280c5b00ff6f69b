pub mod canonicalize;
pub mod compare;
pub mod envelope;
pub mod validate;
