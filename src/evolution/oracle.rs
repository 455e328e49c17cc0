use crate::{error::Result, gene::Gene, genome::Genome};

/// Scores a genome. Lower scores are better.
///
/// Oracles are shared by every offspring task of a generation, so they must
/// be `Send + Sync`, and they must be deterministic for runs to be
/// reproducible under a fixed seed. Returning an error aborts the run.
///
/// Any `Fn(&Genome<G>) -> Result<f64>` closure is an oracle.
pub trait Oracle<G: Gene>: Send + Sync {
    fn score(&self, genome: &Genome<G>) -> Result<f64>;
}

impl<G, F> Oracle<G> for F
where
    G: Gene,
    F: Fn(&Genome<G>) -> Result<f64> + Send + Sync,
{
    fn score(&self, genome: &Genome<G>) -> Result<f64> {
        self(genome)
    }
}
