use super::{Command, ExecutionContext, Executor, Mutation, MutationOutcome};
use crate::core::Result;
use tracing::{debug, info};

pub struct DeleteExecutor;

impl Executor for DeleteExecutor {
    fn name(&self) -> &'static str {
        "DELETE"
    }

    fn can_handle(&self, command: &Command) -> bool {
        matches!(command, Command::Delete(_))
    }

    fn execute(&self, command: &Command, ctx: &mut ExecutionContext<'_>) -> Result<Mutation> {
        let Command::Delete(id) = command else {
            unreachable!();
        };

        match ctx.collection.without(*id) {
            Some((collection, removed)) => {
                info!(id, name = removed.name(), "student deleted");
                Ok(Mutation {
                    collection,
                    outcome: MutationOutcome::Deleted(removed),
                })
            }
            None => {
                // Deleting twice is harmless
                debug!(id, "delete of unknown student ignored");
                Ok(Mutation::unchanged(ctx.collection, MutationOutcome::NotFound(*id)))
            }
        }
    }
}
