mod customer;
mod metafield;

pub use customer::*;
pub use metafield::*;
