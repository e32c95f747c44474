use verdant_schemas::substance::{ScenarioTag, Substance};

/// Selects the heuristic branch for a mixture. A single fertilizer-tagged
/// substance is enough to switch the whole analysis to the NPK formulas.
pub fn classify(mixture: &[Substance]) -> ScenarioTag {
    if mixture.iter().any(|s| s.scenario == ScenarioTag::Fertilizer) {
        ScenarioTag::Fertilizer
    } else {
        ScenarioTag::Generic
    }
}
