use crate::substance::Substance;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct SubstanceFile {
    pub schema_version: String,
    pub substances: Vec<Substance>,
}
