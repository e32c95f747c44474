use serde::Deserialize;

/// One mixture line in a request file: which catalog substance, and
/// optionally how much of it goes into the batch.
#[derive(Debug, Deserialize)]
pub struct MixtureEntry {
    pub substance_id: String,
    #[serde(default)]
    pub amount_g: Option<f64>,
}

/// A complete analysis request, loadable from YAML. Condition fields default
/// to the untouched bench state so a request may list only the mixture.
#[derive(Debug, Deserialize)]
pub struct AnalysisRequest {
    pub mixture: Vec<MixtureEntry>,
    #[serde(default = "default_temperature")]
    pub temperature_c: f64,
    #[serde(default = "default_ph")]
    pub ph: f64,
    #[serde(default)]
    pub agitation_rpm: f64,
    #[serde(default = "default_pressure")]
    pub pressure_bar: f64,
    #[serde(default = "default_label")]
    pub process_type: String,
    #[serde(default = "default_label")]
    pub context_mode: String,
}

fn default_temperature() -> f64 {
    25.0
}

fn default_ph() -> f64 {
    7.0
}

fn default_pressure() -> f64 {
    1.0
}

fn default_label() -> String {
    "standard".to_string()
}
