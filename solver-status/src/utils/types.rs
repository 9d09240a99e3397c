/// Alias to a scalar floating type.
pub type Float = f64;

/// Alias to an integral objective type used by the solver: costs and penalties.
pub type Cost = i64;
