pub mod backfill;
pub mod orchestrator;
pub mod staleness;
pub mod ttl;

pub use backfill::BackfillPlanner;
pub use orchestrator::{CacheOrchestrator, CacheOutcome, MissReason, Resolution};
pub use staleness::{FreshnessCheck, StalenessChecker};
pub use ttl::TtlPolicy;
