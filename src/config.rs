//! Configuration parameters for match computation

/// Engine configuration parameters
#[derive(Debug, Clone, Copy)]
pub struct EngineConfig {
    /// Tempo tolerance in percent (default: 2.97)
    /// Models the ±3% pitch-fader range a track can be nudged without
    /// leaving its Camelot key classification
    pub tolerance_percent: f64,

    /// Minimum BPM accepted by the engine (default: 60.0)
    pub min_bpm: f64,

    /// Maximum BPM accepted by the engine (default: 200.0)
    pub max_bpm: f64,
}

impl EngineConfig {
    /// Clamp a raw BPM value into the engine's accepted range
    ///
    /// Callers feeding user input (sliders, steppers, text fields) are
    /// expected to clamp before querying the engine.
    ///
    /// # Example
    ///
    /// ```
    /// use harmonic_match::EngineConfig;
    ///
    /// let config = EngineConfig::default();
    /// assert_eq!(config.clamp_bpm(30.0), 60.0);
    /// assert_eq!(config.clamp_bpm(128.0), 128.0);
    /// assert_eq!(config.clamp_bpm(250.0), 200.0);
    /// ```
    pub fn clamp_bpm(&self, bpm: f64) -> f64 {
        bpm.clamp(self.min_bpm, self.max_bpm)
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            tolerance_percent: 2.97,
            min_bpm: 60.0,
            max_bpm: 200.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert_eq!(config.tolerance_percent, 2.97);
        assert_eq!(config.min_bpm, 60.0);
        assert_eq!(config.max_bpm, 200.0);
    }

    #[test]
    fn test_clamp_bpm() {
        let config = EngineConfig::default();
        assert_eq!(config.clamp_bpm(59.9), 60.0);
        assert_eq!(config.clamp_bpm(60.0), 60.0);
        assert_eq!(config.clamp_bpm(120.0), 120.0);
        assert_eq!(config.clamp_bpm(200.0), 200.0);
        assert_eq!(config.clamp_bpm(200.1), 200.0);
    }
}
