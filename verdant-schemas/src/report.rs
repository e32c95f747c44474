use crate::substance::{HazardLevel, ReachStatus, SubstanceRole};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProcessStatus {
    Nominal,
    Evaluation,
    Restricted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComplianceStatus {
    Compliant,
    Warning,
    Critical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlagSeverity {
    High,
    Medium,
}

/// Reactant / solvent / product / waste masses for one batch, in grams.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MassBalance {
    pub total_reactants_g: f64,
    pub total_solvents_g: f64,
    pub total_product_g: f64,
    pub total_waste_g: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ImpactProfile {
    pub waste: f64,
    pub energy: f64,
    pub emissions: f64,
}

/// Live process figures next to the traditional industry baseline.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ComparisonData {
    pub traditional: ImpactProfile,
    pub optimized: ImpactProfile,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AnalysisMetrics {
    pub carbon_footprint: f64,
    pub water_usage: f64,
    pub waste_factor: f64,
    pub voc_level: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_roi: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compliance_risk: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub atomic_efficiency: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mass_balance: Option<MassBalance>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comparison: Option<ComparisonData>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductProfile {
    pub name: String,
    pub toxicity: HazardLevel,
    pub biodegradability: String,
    pub stability: String,
    pub industrial_use: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub functional_improvement: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compositional_difference: Option<String>,
}

/// Verdict for one of the 12 Green Chemistry Principles. The engine reports
/// on principles 1 (waste prevention), 5 (safer auxiliaries), 6 (energy
/// efficiency) and 12 (inherent safety).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrincipleVerdict {
    pub principle_id: u8,
    pub status: ComplianceStatus,
    pub value: String,
    pub diagnostic: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OptimizationImpact {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub waste: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub energy: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub safety: Option<f64>,
}

/// One actionable parameter adjustment, with the principle it serves and the
/// operational trade-off it costs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Optimization {
    pub id: String,
    pub label: String,
    pub description: String,
    pub principle_id: u8,
    pub impact: OptimizationImpact,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tradeoff: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakdownEntry {
    pub substance_name: String,
    pub substance_id: String,
    pub mass_g: f64,
    pub role: SubstanceRole,
    pub ghs_risk: String,
    pub reach_status: ReachStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionalFulfillment {
    pub initial_use: String,
    pub performance_score: f64,
    pub diagnostic: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegulatoryFlag {
    pub id: String,
    pub severity: FlagSeverity,
    pub label: String,
}

/// Full output of one analysis call. Entirely derived from the inputs;
/// recomputed from scratch on every invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub score: u32,
    pub status: ProcessStatus,
    pub justification: String,
    pub metrics: AnalysisMetrics,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_profile: Option<ProductProfile>,
    pub principles: Vec<PrincipleVerdict>,
    pub diagnostics: Vec<String>,
    pub optimizations: Vec<Optimization>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chemical_breakdown: Option<Vec<BreakdownEntry>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub functional_fulfillment: Option<FunctionalFulfillment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub regulatory_flags: Option<Vec<RegulatoryFlag>>,
}
