pub mod collector;
pub mod provider;
pub mod sampler;
pub mod snapshot;
