use crate::error::VerdantError;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use verdant_schemas::file_formats::SubstanceFile;
use verdant_schemas::substance::Substance;

/// Hard cap on the number of substances in an active mixture.
pub const MIXTURE_CAPACITY: usize = 10;

/// Read-only, id-keyed collection of substance records.
pub struct SubstanceCatalog {
    substances: HashMap<String, Substance>,
}

impl SubstanceCatalog {
    pub fn from_substances(substances: Vec<Substance>) -> Self {
        let substances = substances
            .into_iter()
            .map(|s| (s.substance_id.clone(), s))
            .collect();
        Self { substances }
    }

    /// Parses a single catalog YAML document.
    pub fn from_yaml_str(source_name: &str, content: &str) -> Result<Self, VerdantError> {
        let file: SubstanceFile = serde_yaml::from_str(content)
            .map_err(|e| VerdantError::YamlParsing(source_name.to_string(), e))?;
        Ok(Self::from_substances(file.substances))
    }

    /// Loads every YAML file in a directory into one catalog.
    pub fn load_dir<P: AsRef<Path>>(dir_path: P) -> Result<Self, VerdantError> {
        let dir_path = dir_path.as_ref();
        let mut substances = HashMap::new();

        let entries = fs::read_dir(dir_path)
            .map_err(|e| VerdantError::FileIO(dir_path.display().to_string(), e))?;
        for entry in entries {
            let entry =
                entry.map_err(|e| VerdantError::FileIO(dir_path.display().to_string(), e))?;
            let path = entry.path();
            if path.is_file() && path.extension().map_or(false, |s| s == "yaml" || s == "yml") {
                let content = fs::read_to_string(&path)
                    .map_err(|e| VerdantError::FileIO(path.display().to_string(), e))?;
                let file: SubstanceFile = serde_yaml::from_str(&content)
                    .map_err(|e| VerdantError::YamlParsing(path.display().to_string(), e))?;
                for substance in file.substances {
                    substances.insert(substance.substance_id.clone(), substance);
                }
            }
        }

        Ok(Self { substances })
    }

    pub fn get(&self, substance_id: &str) -> Option<&Substance> {
        self.substances.get(substance_id)
    }

    /// Clones a catalog entry for use in a mixture.
    pub fn resolve(&self, substance_id: &str) -> Result<Substance, VerdantError> {
        self.substances
            .get(substance_id)
            .cloned()
            .ok_or_else(|| VerdantError::SubstanceNotFound(substance_id.to_string()))
    }

    pub fn len(&self) -> usize {
        self.substances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.substances.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Substance> {
        self.substances.values()
    }
}

/// Ordered, size-bounded collection of substances under analysis. Owned by the
/// caller and handed to `analyze` on every call; the engine only reads it.
#[derive(Debug, Clone, Default)]
pub struct Mixture {
    entries: Vec<Substance>,
}

impl Mixture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a substance, rejecting duplicates and anything past the cap.
    pub fn push(&mut self, substance: Substance) -> Result<(), VerdantError> {
        if self.entries.len() >= MIXTURE_CAPACITY {
            return Err(VerdantError::MixtureFull(MIXTURE_CAPACITY));
        }
        if self
            .entries
            .iter()
            .any(|s| s.substance_id == substance.substance_id)
        {
            return Err(VerdantError::DuplicateSubstance(substance.substance_id));
        }
        self.entries.push(substance);
        Ok(())
    }

    /// Overrides the batch mass of one entry, in grams.
    pub fn set_amount(&mut self, substance_id: &str, grams: f64) -> Result<(), VerdantError> {
        let entry = self
            .entries
            .iter_mut()
            .find(|s| s.substance_id == substance_id)
            .ok_or_else(|| VerdantError::SubstanceNotFound(substance_id.to_string()))?;
        entry.amount_g = Some(grams);
        Ok(())
    }

    pub fn remove(&mut self, substance_id: &str) {
        self.entries.retain(|s| s.substance_id != substance_id);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn substances(&self) -> &[Substance] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
