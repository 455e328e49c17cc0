pub mod elite;
pub mod selection_strategy;

pub use elite::EliteSelection;
pub use selection_strategy::SelectionStrategy;
