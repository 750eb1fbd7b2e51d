mod domain;
mod result;

pub use domain::*;
pub use result::*;
