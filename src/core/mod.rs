//! Core module containing fundamental traits and types for the crate

pub mod choice;
pub mod clock;
pub mod entity;
pub mod error;
pub mod field;
pub mod query;
pub mod store;

pub use choice::{Choice, ChoiceError};
pub use clock::{Clock, DefaultClock, ManualClock, SharedClock, system_clock};
pub use entity::{Record, to_json_array};
pub use error::{QueryError, StoreError, forbidden, not_found};
pub use field::FieldValue;
pub use query::{Query, SortDirection};
pub use store::{RecordSource, RecordStore};
