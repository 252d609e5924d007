//! Analysis configuration

use crate::error::{StatsError, StatsResult};

/// Default threshold at or below which an F0 value counts as unvoiced
pub const DEFAULT_VOICING_EPSILON: f64 = 1e-8;

/// Default pause/punctuation label of the corpus
pub const DEFAULT_PAUSE_MARKER: &str = "、";

/// How to pair alignment segments with accent labels when counts differ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PairingPolicy {
    /// Reject utterances whose sequences differ in length
    #[default]
    Strict,
    /// Pair up to the shorter sequence and drop the rest
    Truncate,
}

/// Parameters of the segmentation-to-statistics engine
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisConfig {
    voicing_epsilon: f64,
    pause_marker: String,
    pairing: PairingPolicy,
}

impl AnalysisConfig {
    /// Create a configuration
    pub fn new(
        voicing_epsilon: f64,
        pause_marker: impl Into<String>,
        pairing: PairingPolicy,
    ) -> StatsResult<Self> {
        let config = Self::default()
            .with_voicing_epsilon(voicing_epsilon)?
            .with_pause_marker(pause_marker)?
            .with_pairing(pairing);
        Ok(config)
    }

    /// Set the voicing threshold
    pub fn with_voicing_epsilon(mut self, epsilon: f64) -> StatsResult<Self> {
        if !epsilon.is_finite() || epsilon < 0.0 {
            return Err(StatsError::Config(format!(
                "Voicing epsilon must be a non-negative finite number, got {}",
                epsilon
            )));
        }
        self.voicing_epsilon = epsilon;
        Ok(self)
    }

    /// Set the pause marker label
    pub fn with_pause_marker(mut self, marker: impl Into<String>) -> StatsResult<Self> {
        let marker = marker.into();
        if marker.is_empty() {
            return Err(StatsError::Config("Pause marker must not be empty".to_string()));
        }
        self.pause_marker = marker;
        Ok(self)
    }

    /// Set the pairing policy
    pub fn with_pairing(mut self, pairing: PairingPolicy) -> Self {
        self.pairing = pairing;
        self
    }

    /// Get the voicing threshold
    pub fn voicing_epsilon(&self) -> f64 {
        self.voicing_epsilon
    }

    /// Get the pause marker label
    pub fn pause_marker(&self) -> &str {
        &self.pause_marker
    }

    /// Get the pairing policy
    pub fn pairing(&self) -> PairingPolicy {
        self.pairing
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        AnalysisConfig {
            voicing_epsilon: DEFAULT_VOICING_EPSILON,
            pause_marker: DEFAULT_PAUSE_MARKER.to_string(),
            pairing: PairingPolicy::Strict,
        }
    }
}
