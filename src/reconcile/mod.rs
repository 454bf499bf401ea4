mod engine;
mod needs;
mod report;

pub use engine::Reconciler;
pub use needs::Needs;
pub use report::{ReconcileReport, TournamentOutcome};
