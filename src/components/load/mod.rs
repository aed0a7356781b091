mod cargo;
mod personnel;
mod plan;

pub use cargo::CargoItem;
pub use personnel::Personnel;
pub use plan::LoadPlan;

/// Anything aboard that contributes weight at a longitudinal station.
pub trait Payload {
    fn weight(&self) -> f64;
    fn position(&self) -> f64;

    /// Contribution to the total moment about the datum.
    fn moment(&self) -> f64 {
        self.weight() * self.position()
    }
}
