pub mod crossover;
pub mod initialization;
pub mod mutation;
pub mod pruning;
pub mod runner;

pub use self::pruning::FeasibleSet;
pub use self::runner::{OptimizationOptions, Optimizer, ProgressCallback, Silent};
