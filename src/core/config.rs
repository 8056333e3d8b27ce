use derive_getters::Getters;

use crate::core::error::ConfigurationError;

/// Per-run knobs for the counting pipeline. Thresholds are inclusive upper
/// bounds and must be at least 1.
#[derive(Getters, Copy, Clone, Eq, PartialEq, Debug)]
pub struct CountingConfig {
    del_threshold: u32,
    ins_threshold: u32,
}

impl CountingConfig {
    pub fn new(del_threshold: u32, ins_threshold: u32) -> Result<Self, ConfigurationError> {
        if del_threshold == 0 {
            return Err(ConfigurationError::ZeroThreshold { what: "deletion" });
        }
        if ins_threshold == 0 {
            return Err(ConfigurationError::ZeroThreshold { what: "insertion" });
        }
        Ok(Self { del_threshold, ins_threshold })
    }
}
