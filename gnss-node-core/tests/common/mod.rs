//! Shared fixtures for integration tests
//!
//! This module provides:
//! - A parameter store pre-loaded with a realistic receiver configuration
//! - A store wrapper that records every write, for read-only assertions
//! - Known calendar instants (see [`scenarios`])

#![allow(dead_code)]

use std::cell::Cell;

use gnss_node_core::params::{MemoryParamStore, ParamStore, ParamValue};

pub mod scenarios;

/// Receiver configuration as a parameter file would load it
pub fn receiver_store() -> MemoryParamStore {
    MemoryParamStore::new()
        .with_param("device", "/dev/ttyACM0")
        .with_param("frame_id", "gps")
        .with_param("uart1/baudrate", 115_200i64)
        .with_param("uart1/in", 1i64)
        .with_param("uart1/out", 3i64)
        .with_param("rate", 4i64)
        .with_param("nav_rate", 1i64)
        .with_param("dynamic_model", 4i64)
        .with_param("fix_mode", 3i64)
        .with_param("dr_limit", 0i64)
        .with_param("tmode3/offsets_cm", vec![-12i64, 0, 35])
        .with_param("sbas/prns", vec![120i64, 124, 126])
        .with_param("sbas/enable", true)
        .with_param("gnss/glonass", false)
        .with_param("gps/elevation_mask", 10.5)
}

/// Store wrapper counting reads and writes
#[derive(Default)]
pub struct RecordingStore {
    pub inner: MemoryParamStore,
    pub reads: Cell<usize>,
    pub writes: usize,
}

impl RecordingStore {
    pub fn new(inner: MemoryParamStore) -> Self {
        Self {
            inner,
            reads: Cell::new(0),
            writes: 0,
        }
    }
}

impl ParamStore for RecordingStore {
    fn get_param(&self, key: &str) -> Option<ParamValue> {
        self.reads.set(self.reads.get() + 1);
        self.inner.get_param(key)
    }

    fn set_param(&mut self, key: &str, value: ParamValue) {
        self.writes += 1;
        self.inner.set_param(key, value);
    }

    fn has_param(&self, key: &str) -> bool {
        self.inner.has_param(key)
    }
}
