pub mod context;
pub mod executor;
pub mod dml;
pub mod update;
pub mod delete;
pub mod filter;
pub mod sort;
pub mod paginate;
pub mod query;

pub use context::ExecutionContext;
pub use executor::{Command, Executor, ExecutorPipeline, Mutation, MutationOutcome};
pub use query::{ViewQuery, derive_view};
