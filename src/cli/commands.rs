pub mod insights;
pub mod options;
pub mod predict;
pub mod serve;

pub use insights::insights;
pub use options::options;
pub use predict::predict;
pub use serve::serve;
