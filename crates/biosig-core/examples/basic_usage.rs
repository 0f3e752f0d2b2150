//! Basic usage examples for biosig-core
//!
//! Demonstrates record construction, the derived queries, normalization of
//! array-like input, and what construction failures look like at the call
//! site.

use anyhow::Result;
use biosig_core::{Metadata, RawSamples, RecordError, SignalRecord};
use serde_json::json;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    println!("=== biosig-core Basic Usage Examples ===\n");

    ecg_record_example()?;
    squeeze_example()?;
    validation_failure_example();
    metadata_and_serde_example()?;

    println!("\n=== All examples completed successfully! ===");
    Ok(())
}

/// Example 1: ECG record construction and derived queries
fn ecg_record_example() -> Result<()> {
    println!("1. ECG Record Example");

    // Simulate a crude ECG-like waveform: 2 seconds at 250 Hz
    let samples: Vec<f64> = (0..500)
        .map(|i| {
            let t = i as f64 / 250.0;
            (2.0 * std::f64::consts::PI * 1.2 * t).sin().powi(15)
        })
        .collect();

    let record = SignalRecord::new(samples, 250.0, "ecg")?.with_units("mV");

    println!("   ✓ Created record: {}", record);
    println!("   ✓ Sample count: {}", record.sample_count());
    println!("   ✓ Duration: {:.3} s", record.duration_seconds());
    println!("   ✓ Time vector tail: {:?}", &record.time_vector()[497..]);

    Ok(())
}

/// Example 2: array-like input is squeezed to one dimension
fn squeeze_example() -> Result<()> {
    println!("\n2. Input Normalization Example");

    // A single-row nested input, as a file loader handing over one channel
    // of a multi-channel matrix might produce.
    let one_row = vec![vec![0.1, 0.2, 0.3, 0.4]];
    let record = SignalRecord::new(one_row, 100.0, "eeg")?;
    println!("   ✓ [1, 4] input squeezed to {} samples", record.sample_count());

    // Integer input is coerced to floating point.
    let counts = SignalRecord::new(vec![12u16, 14, 13, 15], 1.0, "resp")?;
    println!("   ✓ Integer input coerced: {:?}", counts.samples());

    // An explicit shape with unit axes squeezes the same way.
    let shaped = RawSamples::with_shape(vec![1.0, 2.0, 3.0], vec![1, 3, 1]);
    let record = SignalRecord::new(shaped, 10.0, "emg")?;
    println!("   ✓ [1, 3, 1] input squeezed to {} samples", record.sample_count());

    Ok(())
}

/// Example 3: malformed input fails fast at the construction site
fn validation_failure_example() {
    println!("\n3. Validation Failure Example");

    let two_channels = vec![vec![0.0; 100], vec![0.0; 100]];
    match SignalRecord::new(two_channels, 250.0, "ecg") {
        Err(err @ RecordError::Shape { .. }) => println!("   ✓ Rejected: {}", err),
        other => println!("   ✗ Unexpected outcome: {:?}", other),
    }

    match SignalRecord::new(vec![1.0, 2.0, 3.0], 0.0, "ecg") {
        Err(err @ RecordError::InvalidSamplingRate { .. }) => println!("   ✓ Rejected: {}", err),
        other => println!("   ✗ Unexpected outcome: {:?}", other),
    }

    match SignalRecord::new(vec![1.0, f64::NAN], 250.0, "ecg") {
        Err(err @ RecordError::NonFiniteSample { .. }) => println!("   ✓ Rejected: {}", err),
        other => println!("   ✗ Unexpected outcome: {:?}", other),
    }

    match SignalRecord::new(Vec::<f64>::new(), 250.0, "ecg") {
        Err(err @ RecordError::EmptySignal) => println!("   ✓ Rejected: {}", err),
        other => println!("   ✗ Unexpected outcome: {:?}", other),
    }
}

/// Example 4: provenance metadata and JSON round trip
fn metadata_and_serde_example() -> Result<()> {
    println!("\n4. Metadata and Serialization Example");

    let mut metadata = Metadata::new();
    metadata.insert("source_file".into(), json!("session_017.edf"));
    metadata.insert("channel_index".into(), json!(3));
    metadata.insert("device".into(), json!({"vendor": "acme", "model": "BS-9"}));

    let record = SignalRecord::with_details(
        vec![0.0, 1.0, 0.0, -1.0],
        250.0,
        "ecg",
        Some("a.u.".into()),
        metadata,
    )?;

    println!("   ✓ Record id: {}", record.id());
    println!("   ✓ Metadata keys: {}", record.metadata().len());

    let encoded = serde_json::to_string(&record)?;
    println!("   ✓ Serialized {} bytes", encoded.len());

    let decoded: SignalRecord = serde_json::from_str(&encoded)?;
    println!("   ✓ Round trip preserved {} samples", decoded.sample_count());

    Ok(())
}
