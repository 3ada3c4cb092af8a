pub mod coerce;
pub mod error;
pub mod pipeline;

pub use coerce::parse_estimate;
pub use error::{RowFailure, SubmitError};
pub use pipeline::{SubmitReport, TicketClient, run, validate_coverage};
