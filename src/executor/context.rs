use crate::storage::{IdGenerator, RecordCollection};
use crate::validation::Validator;

pub struct ExecutionContext<'a> {
    pub collection: &'a RecordCollection,
    pub validator: &'a Validator,
    pub ids: &'a mut IdGenerator,
}

impl<'a> ExecutionContext<'a> {
    pub fn new(
        collection: &'a RecordCollection,
        validator: &'a Validator,
        ids: &'a mut IdGenerator,
    ) -> Self {
        Self {
            collection,
            validator,
            ids,
        }
    }
}
