//! Simulation configuration.

/// Brand of the simulated car.
pub const DEFAULT_BRAND: &str = "BMW";
/// Distance requested from the car.
pub const DEFAULT_DISTANCE: u32 = 200;
/// Seed used when none is given.
pub const DEFAULT_SEED: u64 = 123;

/// Parameters of a car simulation run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimConfig {
    /// Brand of the car.
    pub brand: String,
    /// Distance passed to the first [`drive`](crate::car::Car::drive) call.
    pub distance: u32,
    /// Seed of the random number generator.
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            brand: DEFAULT_BRAND.to_string(),
            distance: DEFAULT_DISTANCE,
            seed: DEFAULT_SEED,
        }
    }
}
