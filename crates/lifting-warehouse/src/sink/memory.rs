use std::collections::BTreeMap;

use lifting_model::Relation;

use super::RelationSink;
use crate::error::Result;

/// In-memory sink for tests and dry runs.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    relations: BTreeMap<String, Relation>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&Relation> {
        self.relations.get(name)
    }
}

impl RelationSink for MemorySink {
    fn write_all(&mut self, relations: &[Relation]) -> Result<()> {
        for relation in relations {
            self.relations
                .insert(relation.name.clone(), relation.clone());
        }
        Ok(())
    }

    fn relation_names(&self) -> Result<Vec<String>> {
        Ok(self.relations.keys().cloned().collect())
    }

    fn row_count(&self, relation: &str) -> Result<Option<usize>> {
        Ok(self.relations.get(relation).map(Relation::row_count))
    }
}
