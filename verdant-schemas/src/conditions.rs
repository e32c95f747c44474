use serde::{Deserialize, Serialize};

/// Presentation switch: changes only the narrative layer of a report,
/// never the numeric metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ContextMode {
    #[default]
    Standard,
    Audit,
    Executive,
}

impl ContextMode {
    pub fn from_label(label: &str) -> ContextMode {
        match label {
            "audit" => ContextMode::Audit,
            "executive" => ContextMode::Executive,
            _ => ContextMode::Standard,
        }
    }
}

/// Closed set of process types the narrative and ROI models recognize.
/// Unknown labels fall back to `Generic` rather than silently branching on
/// free-form strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ProcessType {
    NpkSynthesis,
    SolventRecovery,
    PhNeutralization,
    #[default]
    Generic,
}

impl ProcessType {
    pub fn from_label(label: &str) -> ProcessType {
        match label {
            "npk_synthesis" => ProcessType::NpkSynthesis,
            "solvent_recovery" => ProcessType::SolventRecovery,
            "ph_neutralization" => ProcessType::PhNeutralization,
            _ => ProcessType::Generic,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProcessType::NpkSynthesis => "npk_synthesis",
            ProcessType::SolventRecovery => "solvent_recovery",
            ProcessType::PhNeutralization => "ph_neutralization",
            ProcessType::Generic => "generic",
        }
    }
}

/// Operating parameters for a single analysis call. Owned by the caller and
/// re-submitted on every invocation; the engine holds no state between calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessConditions {
    pub temperature_c: f64,
    pub ph: f64,
    pub agitation_rpm: f64,
    pub pressure_bar: f64,
    pub process_type: ProcessType,
    pub context_mode: ContextMode,
}

impl Default for ProcessConditions {
    /// The untouched bench state: 25 C, neutral pH, no agitation, ambient pressure.
    fn default() -> Self {
        ProcessConditions {
            temperature_c: 25.0,
            ph: 7.0,
            agitation_rpm: 0.0,
            pressure_bar: 1.0,
            process_type: ProcessType::Generic,
            context_mode: ContextMode::Standard,
        }
    }
}
