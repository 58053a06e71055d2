use super::{Command, ExecutionContext, Executor, Mutation, MutationOutcome};
use crate::core::{Record, Result};
use tracing::{info, warn};

/// Validates a draft and appends it under a fresh id
pub struct AddExecutor;

impl Executor for AddExecutor {
    fn name(&self) -> &'static str {
        "ADD"
    }

    fn can_handle(&self, command: &Command) -> bool {
        matches!(command, Command::Add(_))
    }

    fn execute(&self, command: &Command, ctx: &mut ExecutionContext<'_>) -> Result<Mutation> {
        let Command::Add(draft) = command else {
            unreachable!();
        };

        let valid = match ctx.validator.validate(draft) {
            Ok(valid) => valid,
            Err(err) => {
                warn!(error = %err, "add rejected");
                return Ok(Mutation::unchanged(ctx.collection, MutationOutcome::Rejected(err)));
            }
        };

        // The id is only consumed once the draft is known to be good
        let record = Record::new(ctx.ids.next_id(), valid);
        let collection = ctx.collection.with_appended(record.clone())?;
        info!(id = record.id(), name = record.name(), "student added");

        Ok(Mutation {
            collection,
            outcome: MutationOutcome::Added(record),
        })
    }
}
