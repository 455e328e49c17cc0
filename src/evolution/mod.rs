pub mod builder;
pub mod goal;
pub mod launcher;
pub mod observer;
pub mod options;
pub mod oracle;

pub use builder::EvolutionLauncherBuilder;
pub use goal::{FitnessThreshold, Goal};
pub use launcher::{EvolutionLauncher, EvolutionResult};
pub use observer::{NoopObserver, Observer, ProgressLogger};
pub use options::{EvolutionOptions, EvolutionOptionsBuilder, LogLevel};
pub use oracle::Oracle;
