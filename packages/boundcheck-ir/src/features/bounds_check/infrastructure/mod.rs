//! Bounds Check Infrastructure - Port implementations and domain queries

pub mod bounds_oracle;
pub mod pointer_resolver;
pub mod shadow_size;

pub use bounds_oracle::BoundsOracle;
pub use pointer_resolver::PointerResolver;
pub use shadow_size::ShadowSizeNaming;
