use super::{Command, ExecutionContext, Executor, Mutation, MutationOutcome};
use crate::core::Result;
use tracing::{info, warn};

/// Replaces a record's fields in place, keeping its id and position
pub struct UpdateExecutor;

impl Executor for UpdateExecutor {
    fn name(&self) -> &'static str {
        "UPDATE"
    }

    fn can_handle(&self, command: &Command) -> bool {
        matches!(command, Command::Update { .. })
    }

    fn execute(&self, command: &Command, ctx: &mut ExecutionContext<'_>) -> Result<Mutation> {
        let Command::Update { id, draft } = command else {
            unreachable!();
        };

        let valid = match ctx.validator.validate(draft) {
            Ok(valid) => valid,
            Err(err) => {
                warn!(id, error = %err, "update rejected");
                return Ok(Mutation::unchanged(ctx.collection, MutationOutcome::Rejected(err)));
            }
        };

        let Some(existing) = ctx.collection.get(*id) else {
            warn!(id, "update of unknown student ignored");
            return Ok(Mutation::unchanged(ctx.collection, MutationOutcome::NotFound(*id)));
        };

        let updated = existing.with_changes(valid);
        let Some(collection) = ctx.collection.with_replaced(updated.clone()) else {
            return Ok(Mutation::unchanged(ctx.collection, MutationOutcome::NotFound(*id)));
        };
        info!(id, name = updated.name(), "student updated");

        Ok(Mutation {
            collection,
            outcome: MutationOutcome::Updated(updated),
        })
    }
}
