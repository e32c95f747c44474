pub mod assemble;
pub mod metrics;
pub mod optimize;
pub mod principles;
pub mod scenario;
