//! Shared builders for unit tests.

use verdant_schemas::substance::{
    HazardLevel, LifecycleProfile, ReachStatus, RegulatoryProfile, ScenarioTag, Substance,
    SubstanceType,
};

/// Baseline catalog entry: low-hazard, REACH-compliant generic reagent with
/// modest lifecycle figures. Tests mutate the fields they care about.
pub fn substance(id: &str) -> Substance {
    Substance {
        substance_id: id.to_string(),
        cas_number: "0-00-0".to_string(),
        substance_name: id.to_string(),
        hazard: HazardLevel::Low,
        substance_type: SubstanceType::Reagent,
        scenario: ScenarioTag::Generic,
        role: None,
        ghs_class: None,
        ammonia_bearing: false,
        lifecycle: LifecycleProfile {
            carbon_footprint: 1.0,
            water_usage: 10.0,
            waste_factor: 0.2,
        },
        regulatory: RegulatoryProfile {
            reach_status: ReachStatus::Compliant,
            annex_xvii: false,
            osha_compliant: true,
        },
        amount_g: None,
        molecular_weight: None,
        physical_state: None,
        substitute_id: None,
    }
}

pub fn high_hazard(id: &str) -> Substance {
    let mut s = substance(id);
    s.hazard = HazardLevel::High;
    s
}

pub fn restricted(id: &str) -> Substance {
    let mut s = substance(id);
    s.regulatory.reach_status = ReachStatus::Restricted;
    s.regulatory.annex_xvii = true;
    s
}

pub fn fertilizer(id: &str) -> Substance {
    let mut s = substance(id);
    s.scenario = ScenarioTag::Fertilizer;
    s
}
