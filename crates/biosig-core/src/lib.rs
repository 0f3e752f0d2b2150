//! biosig-core: canonical validated record for one-dimensional biosignals
//!
//! One constructible type, [`SignalRecord`], normalizes and validates raw
//! sample data at construction and exposes derived read-only queries
//! (sample count, duration, time vector). Loading, plotting and analysis
//! live in external collaborators that consume the validated record.

pub mod error;
pub mod samples;
pub mod signal_record;

pub use error::{RecordError, RecordResult};
pub use samples::{IntoSample, RawSamples};
pub use signal_record::{Metadata, SignalRecord};
