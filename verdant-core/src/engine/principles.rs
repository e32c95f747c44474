use crate::engine::metrics::ProcessMetrics;
use crate::tuning::Tuning;
use verdant_schemas::conditions::ProcessConditions;
use verdant_schemas::report::{ComplianceStatus, PrincipleVerdict};
use verdant_schemas::substance::ScenarioTag;

const WASTE_CRITICAL_E_FACTOR: f64 = 2.0;
const WASTE_WARNING_E_FACTOR: f64 = 1.0;
const ENERGY_CRITICAL_SCORE: f64 = 60.0;
const ENERGY_WARNING_SCORE: f64 = 85.0;
const ENERGY_EFFICIENT_SCORE: f64 = 80.0;

/// Maps the computed metrics onto verdicts for Green Chemistry Principles
/// 1, 5, 6 and 12. Value and diagnostic strings are fixed templates chosen by
/// tier, so identical inputs always produce identical text.
pub fn evaluate_principles(
    metrics: &ProcessMetrics,
    conditions: &ProcessConditions,
    tuning: &Tuning,
) -> Vec<PrincipleVerdict> {
    let waste = metrics.total_waste_factor;
    let high_hazards = metrics.hazards.high;
    let energy = metrics.energy_score;
    let overpressure = conditions.pressure_bar > tuning.fert_pressure_hard_bar;

    vec![
        // Principle 1: waste prevention.
        PrincipleVerdict {
            principle_id: 1,
            status: if waste > WASTE_CRITICAL_E_FACTOR {
                ComplianceStatus::Critical
            } else if waste > WASTE_WARNING_E_FACTOR {
                ComplianceStatus::Warning
            } else {
                ComplianceStatus::Compliant
            },
            value: format!("{waste:.2} E-Factor"),
            diagnostic: if waste > WASTE_CRITICAL_E_FACTOR {
                "Excessive byproduct generation.".to_string()
            } else {
                "Waste level acceptable.".to_string()
            },
        },
        // Principle 5: safer solvents and auxiliaries.
        PrincipleVerdict {
            principle_id: 5,
            status: if high_hazards > 1 {
                ComplianceStatus::Critical
            } else {
                ComplianceStatus::Compliant
            },
            value: if metrics.scenario == ScenarioTag::Fertilizer {
                "NPK control".to_string()
            } else {
                "Substitution".to_string()
            },
            diagnostic: if high_hazards > 0 {
                "High-risk substances present.".to_string()
            } else {
                "Components are safe.".to_string()
            },
        },
        // Principle 6: energy efficiency.
        PrincipleVerdict {
            principle_id: 6,
            status: if energy < ENERGY_CRITICAL_SCORE {
                ComplianceStatus::Critical
            } else if energy < ENERGY_WARNING_SCORE {
                ComplianceStatus::Warning
            } else {
                ComplianceStatus::Compliant
            },
            value: if energy > ENERGY_EFFICIENT_SCORE {
                "Efficient".to_string()
            } else {
                "High load".to_string()
            },
            diagnostic: if energy < ENERGY_CRITICAL_SCORE {
                "Process draws heavy energy demand.".to_string()
            } else {
                "Energy demand is under control.".to_string()
            },
        },
        // Principle 12: inherently safer chemistry.
        PrincipleVerdict {
            principle_id: 12,
            status: if high_hazards > 0 || overpressure {
                ComplianceStatus::Critical
            } else {
                ComplianceStatus::Compliant
            },
            value: if overpressure {
                "Pressure risk".to_string()
            } else {
                format!("{high_hazards} risks")
            },
            diagnostic: if overpressure {
                "Pressure outside safety limits.".to_string()
            } else {
                "Intrinsically safe operation.".to_string()
            },
        },
    ]
}
