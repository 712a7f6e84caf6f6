mod fill;
mod header;

pub use fill::*;
pub use header::*;
