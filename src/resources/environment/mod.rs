mod conditions;
mod wind;

pub use conditions::EnvironmentConditions;
pub use wind::WindModel;
