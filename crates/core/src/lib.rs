//! Pinecamp Core Library
//!
//! Domain models, catalog fixtures, pricing, the booking-flow state
//! machine, and validation for the Pinecamp reservation client.

pub mod board;
pub mod catalog;
pub mod error;
pub mod flow;
pub mod invariants;
pub mod models;
pub mod payment;
pub mod pricing;
pub mod summary;

pub use board::{SpotBoard, SpotVisual, ViewMode};
pub use catalog::Catalog;
pub use error::{Error, Result};
pub use flow::{BookingDraft, BookingFlow, FlowState, Missing};
pub use models::*;
pub use payment::{SlipFile, MAX_SLIP_BYTES};
pub use pricing::Quote;
pub use summary::SummaryView;
