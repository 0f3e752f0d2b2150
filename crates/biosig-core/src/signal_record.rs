//! SignalRecord: canonical container for one-dimensional biosignal data

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::trace;
use uuid::Uuid;

use crate::error::{RecordError, RecordResult};
use crate::samples::RawSamples;

/// Free-form provenance mapping carried by a record (source file, channel
/// index, device info, ...). The core stores it verbatim and never
/// interprets its contents.
pub type Metadata = HashMap<String, Value>;

/// Canonical representation of a one-dimensional biological signal
///
/// A record is validated once, at construction. Every live instance holds a
/// non-empty, finite, one-dimensional sample buffer and a positive sampling
/// rate; the validated fields are immutable for the lifetime of the
/// instance, so concurrent reads need no synchronization.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "RecordParts")]
pub struct SignalRecord {
    /// Unique identifier for this record
    id: Uuid,
    /// Signal samples, one-dimensional after normalization
    samples: Vec<f64>,
    /// Sampling rate in Hz
    sampling_rate: f64,
    /// Signal domain tag, e.g. "ecg", "eeg", "emg", "ppg"
    signal_type: String,
    /// Amplitude unit label, e.g. "mV", "a.u."
    units: Option<String>,
    /// Free-form provenance metadata
    metadata: Metadata,
    /// Creation timestamp, milliseconds since Unix epoch
    created_at: u64,
}

impl SignalRecord {
    /// Create a record from raw sample data, a sampling rate and a signal
    /// type tag. Units default to absent and metadata to empty.
    pub fn new(
        samples: impl Into<RawSamples>,
        sampling_rate: f64,
        signal_type: impl Into<String>,
    ) -> RecordResult<Self> {
        Self::with_details(samples, sampling_rate, signal_type, None, Metadata::new())
    }

    /// Create a record with all fields supplied up front
    pub fn with_details(
        samples: impl Into<RawSamples>,
        sampling_rate: f64,
        signal_type: impl Into<String>,
        units: Option<String>,
        metadata: Metadata,
    ) -> RecordResult<Self> {
        let samples = samples.into().normalize()?;
        validate(&samples, sampling_rate)?;

        let signal_type = signal_type.into();
        trace!(
            sample_count = samples.len(),
            sampling_rate,
            signal_type = %signal_type,
            "signal record validated"
        );

        Ok(SignalRecord {
            id: Uuid::new_v4(),
            samples,
            sampling_rate,
            signal_type,
            units,
            metadata,
            created_at: now_millis(),
        })
    }

    /// Attach an amplitude unit label
    pub fn with_units(mut self, units: impl Into<String>) -> Self {
        self.units = Some(units.into());
        self
    }

    /// Replace the provenance metadata mapping
    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// Number of stored samples, always at least 1
    pub fn sample_count(&self) -> usize {
        self.samples.len()
    }

    /// Signal duration in seconds, always strictly positive
    pub fn duration_seconds(&self) -> f64 {
        self.sample_count() as f64 / self.sampling_rate
    }

    /// Timestamps in seconds corresponding one-to-one with the samples,
    /// starting at 0.0 with fixed step `1 / sampling_rate`
    pub fn time_vector(&self) -> Vec<f64> {
        (0..self.samples.len())
            .map(|i| i as f64 / self.sampling_rate)
            .collect()
    }

    /// Validated sample buffer
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    /// Sampling rate in Hz
    pub fn sampling_rate(&self) -> f64 {
        self.sampling_rate
    }

    /// Signal domain tag, stored verbatim
    pub fn signal_type(&self) -> &str {
        &self.signal_type
    }

    /// Amplitude unit label, if one was supplied
    pub fn units(&self) -> Option<&str> {
        self.units.as_deref()
    }

    /// Provenance metadata, stored verbatim and never interpreted
    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    /// Unique record identifier
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Creation timestamp, milliseconds since Unix epoch
    pub fn created_at(&self) -> u64 {
        self.created_at
    }

    /// Consume the record and take ownership of the sample buffer
    pub fn into_samples(self) -> Vec<f64> {
        self.samples
    }
}

impl fmt::Display for SignalRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} signal: {} samples @ {} Hz ({:.3} s)",
            self.signal_type,
            self.sample_count(),
            self.sampling_rate,
            self.duration_seconds()
        )
    }
}

/// Validation applied to every record, whether constructed or deserialized.
/// Checked in order, failing fast on the first violation.
fn validate(samples: &[f64], sampling_rate: f64) -> RecordResult<()> {
    if samples.is_empty() {
        return Err(RecordError::EmptySignal);
    }
    if !sampling_rate.is_finite() || sampling_rate <= 0.0 {
        return Err(RecordError::InvalidSamplingRate { rate: sampling_rate });
    }
    if let Some(index) = samples.iter().position(|s| !s.is_finite()) {
        return Err(RecordError::NonFiniteSample {
            index,
            value: samples[index],
        });
    }
    Ok(())
}

fn now_millis() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// Wire-side mirror of [`SignalRecord`]. Deserialization funnels through
/// [`validate`], so no code path yields an observable invalid record.
#[derive(Deserialize)]
struct RecordParts {
    #[serde(default = "Uuid::new_v4")]
    id: Uuid,
    samples: Vec<f64>,
    sampling_rate: f64,
    signal_type: String,
    #[serde(default)]
    units: Option<String>,
    #[serde(default)]
    metadata: Metadata,
    #[serde(default = "now_millis")]
    created_at: u64,
}

impl TryFrom<RecordParts> for SignalRecord {
    type Error = RecordError;

    fn try_from(parts: RecordParts) -> RecordResult<Self> {
        validate(&parts.samples, parts.sampling_rate)?;
        Ok(SignalRecord {
            id: parts.id,
            samples: parts.samples,
            sampling_rate: parts.sampling_rate,
            signal_type: parts.signal_type,
            units: parts.units,
            metadata: parts.metadata,
            created_at: parts.created_at,
        })
    }
}
