mod migrate;
mod normalize;

pub use migrate::MigrateError;
pub use normalize::NormalizeError;
