/// Named coefficients for the scoring heuristics.
///
/// These are illustrative demo constants, not validated chemistry. They are
/// collected here so a caller can override any of them through
/// `analyze_with_tuning` instead of editing formula bodies.
#[derive(Debug, Clone, PartialEq)]
pub struct Tuning {
    // Generic scenario score penalties, per substance.
    pub generic_high_hazard_penalty: f64,
    pub generic_medium_hazard_penalty: f64,
    pub generic_restricted_penalty: f64,

    // Fertilizer scenario score penalties.
    pub fert_temp_limit_c: f64,
    pub fert_temp_penalty_per_deg: f64,
    pub fert_ideal_ph: f64,
    pub fert_ph_tolerance: f64,
    pub fert_ph_penalty_per_unit: f64,
    pub fert_pressure_soft_bar: f64,
    pub fert_pressure_soft_penalty_per_bar: f64,
    pub fert_pressure_hard_bar: f64,
    pub fert_pressure_hard_penalty_per_bar: f64,
    pub fert_min_rpm: f64,
    pub fert_low_rpm_penalty: f64,
    pub fert_max_rpm: f64,
    pub fert_over_rpm_penalty_per_rpm: f64,
    pub fert_high_hazard_penalty: f64,

    // VOC / emissions model.
    pub voc_baseline: f64,
    pub voc_per_high_hazard: f64,
    pub ammonia_temp_limit_c: f64,
    pub voc_per_deg_over_ammonia_limit: f64,
    pub voc_ph_tolerance: f64,
    pub voc_per_ph_unit: f64,

    // Energy efficiency model.
    pub energy_temp_limit_c: f64,
    pub energy_pressure_limit_bar: f64,
    pub energy_pressure_factor: f64,
    pub energy_rpm_limit: f64,
    pub energy_rpm_divisor: f64,

    // Mass balance heuristics.
    pub atomic_efficiency_ratio: f64,
    pub solvent_loss_ratio: f64,

    // Status floors on the headline score.
    pub nominal_floor: f64,
    pub evaluation_floor: f64,
}

impl Default for Tuning {
    fn default() -> Self {
        Tuning {
            generic_high_hazard_penalty: 15.0,
            generic_medium_hazard_penalty: 5.0,
            generic_restricted_penalty: 20.0,

            fert_temp_limit_c: 70.0,
            fert_temp_penalty_per_deg: 1.5,
            fert_ideal_ph: 6.2,
            fert_ph_tolerance: 0.2,
            fert_ph_penalty_per_unit: 15.0,
            fert_pressure_soft_bar: 5.0,
            fert_pressure_soft_penalty_per_bar: 5.0,
            fert_pressure_hard_bar: 10.0,
            fert_pressure_hard_penalty_per_bar: 15.0,
            fert_min_rpm: 100.0,
            fert_low_rpm_penalty: 10.0,
            fert_max_rpm: 300.0,
            fert_over_rpm_penalty_per_rpm: 0.2,
            fert_high_hazard_penalty: 10.0,

            voc_baseline: 10.0,
            voc_per_high_hazard: 20.0,
            ammonia_temp_limit_c: 60.0,
            voc_per_deg_over_ammonia_limit: 5.0,
            voc_ph_tolerance: 0.5,
            voc_per_ph_unit: 35.0,

            energy_temp_limit_c: 50.0,
            energy_pressure_limit_bar: 2.0,
            energy_pressure_factor: 10.0,
            energy_rpm_limit: 200.0,
            energy_rpm_divisor: 2.0,

            atomic_efficiency_ratio: 0.8,
            solvent_loss_ratio: 0.05,

            nominal_floor: 80.0,
            evaluation_floor: 40.0,
        }
    }
}
