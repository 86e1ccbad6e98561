//! Data models for Pinecamp

mod zone;
mod spot;
mod range;
mod guest;
mod reservation;

pub use zone::*;
pub use spot::*;
pub use range::*;
pub use guest::*;
pub use reservation::*;
