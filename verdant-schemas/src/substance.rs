use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HazardLevel {
    Low,
    Medium,
    High,
}

impl HazardLevel {
    /// Display form used in chemical breakdown tables ("HIGH", "MEDIUM", "LOW").
    pub fn ghs_label(&self) -> &'static str {
        match self {
            HazardLevel::Low => "LOW",
            HazardLevel::Medium => "MEDIUM",
            HazardLevel::High => "HIGH",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubstanceType {
    Solvent,
    Reagent,
    Catalyst,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubstanceRole {
    Acid,
    Base,
    Reactant,
    Additive,
    Catalyst,
    Solvent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GhsClass {
    Flame,
    Skull,
    Corrosive,
    Bio,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReachStatus {
    Compliant,
    Svhc,
    Restricted,
}

/// Which heuristic branch of the analysis engine a substance belongs to.
/// An explicit tag on the catalog record, so scenario selection never depends
/// on id naming conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ScenarioTag {
    #[default]
    Generic,
    Fertilizer,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LifecycleProfile {
    pub carbon_footprint: f64, // kg CO2e per kg
    pub water_usage: f64,      // L per kg
    pub waste_factor: f64,     // kg waste per kg product
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegulatoryProfile {
    pub reach_status: ReachStatus,
    pub annex_xvii: bool,
    pub osha_compliant: bool,
}

/// Immutable substance catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Substance {
    pub substance_id: String,
    pub cas_number: String,
    pub substance_name: String,
    pub hazard: HazardLevel,
    pub substance_type: SubstanceType,
    #[serde(default)]
    pub scenario: ScenarioTag,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<SubstanceRole>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ghs_class: Option<GhsClass>,
    /// Substances that release NH3 under process heat (drives the VOC model).
    #[serde(default)]
    pub ammonia_bearing: bool,
    pub lifecycle: LifecycleProfile,
    pub regulatory: RegulatoryProfile,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount_g: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub molecular_weight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub physical_state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub substitute_id: Option<String>,
}

impl Substance {
    /// Role within the mixture; entries without an explicit role count as additives.
    pub fn mixture_role(&self) -> SubstanceRole {
        self.role.unwrap_or(SubstanceRole::Additive)
    }

    /// Mass in the active mixture. Unset amounts read as zero.
    pub fn mass_g(&self) -> f64 {
        self.amount_g.unwrap_or(0.0)
    }

    /// True for entries that participate in the reaction stoichiometry.
    pub fn is_reactive(&self) -> bool {
        matches!(
            self.mixture_role(),
            SubstanceRole::Reactant | SubstanceRole::Acid | SubstanceRole::Base
        )
    }
}
