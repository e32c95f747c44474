pub mod conditions;
pub mod file_formats;
pub mod report;
pub mod substance;
