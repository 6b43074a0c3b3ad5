mod attribute;
mod model;

pub use attribute::*;
pub use model::*;
