use super::ExecutionContext;
use crate::core::{Record, RecordDraft, RecordId, Result, RosterError, ValidationError};
use crate::notification::Notification;
use crate::storage::RecordCollection;

/// A write intent against the collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(RecordDraft),
    Update { id: RecordId, draft: RecordDraft },
    Delete(RecordId),
}

/// What a write did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MutationOutcome {
    Added(Record),
    Updated(Record),
    Deleted(Record),
    /// The id named by an update or delete is not in the collection
    NotFound(RecordId),
    Rejected(ValidationError),
}

impl MutationOutcome {
    /// True when the collection changed
    pub fn is_applied(&self) -> bool {
        matches!(
            self,
            MutationOutcome::Added(_) | MutationOutcome::Updated(_) | MutationOutcome::Deleted(_)
        )
    }

    pub fn record(&self) -> Option<&Record> {
        match self {
            MutationOutcome::Added(record)
            | MutationOutcome::Updated(record)
            | MutationOutcome::Deleted(record) => Some(record),
            _ => None,
        }
    }
}

/// Next collection state plus what happened to get there.
#[derive(Debug, Clone)]
pub struct Mutation {
    pub collection: RecordCollection,
    pub outcome: MutationOutcome,
}

impl Mutation {
    /// Collection left as it was
    pub fn unchanged(collection: &RecordCollection, outcome: MutationOutcome) -> Self {
        Self {
            collection: collection.clone(),
            outcome,
        }
    }

    pub fn notification(&self) -> Option<Notification> {
        Notification::for_outcome(&self.outcome)
    }
}

pub trait Executor: Send + Sync {
    /// Executor name for debugging
    fn name(&self) -> &'static str;

    fn can_handle(&self, command: &Command) -> bool;

    fn execute(&self, command: &Command, ctx: &mut ExecutionContext<'_>) -> Result<Mutation>;
}

pub struct ExecutorPipeline {
    pub executors: Vec<Box<dyn Executor>>,
}

impl ExecutorPipeline {
    pub fn new() -> Self {
        Self {
            executors: Vec::new(),
        }
    }

    /// Pipeline with the add, update and delete executors registered
    pub fn with_default_executors() -> Self {
        let mut pipeline = Self::new();
        pipeline.register(Box::new(super::dml::AddExecutor));
        pipeline.register(Box::new(super::update::UpdateExecutor));
        pipeline.register(Box::new(super::delete::DeleteExecutor));
        pipeline
    }

    pub fn register(&mut self, executor: Box<dyn Executor>) {
        self.executors.push(executor);
    }

    pub fn execute(&self, command: &Command, ctx: &mut ExecutionContext<'_>) -> Result<Mutation> {
        for executor in &self.executors {
            if executor.can_handle(command) {
                return executor.execute(command, ctx);
            }
        }

        Err(RosterError::UnsupportedOperation(
            "No executor found for command".into(),
        ))
    }
}

impl Default for ExecutorPipeline {
    fn default() -> Self {
        Self::with_default_executors()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::IdGenerator;
    use crate::validation::Validator;

    #[test]
    fn test_empty_pipeline_reports_unsupported() {
        let pipeline = ExecutorPipeline::new();
        let collection = RecordCollection::new();
        let validator = Validator::default();
        let mut ids = IdGenerator::default();
        let mut ctx = ExecutionContext::new(&collection, &validator, &mut ids);

        let result = pipeline.execute(&Command::Delete(1), &mut ctx);
        assert!(matches!(result, Err(RosterError::UnsupportedOperation(_))));
    }

    #[test]
    fn test_default_pipeline_routes_every_command() {
        let pipeline = ExecutorPipeline::default();
        let names: Vec<&str> = pipeline.executors.iter().map(|e| e.name()).collect();
        assert_eq!(names, vec!["ADD", "UPDATE", "DELETE"]);
    }
}
