use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::Mutex;
use westeros_migrate_shared::{EdgeKind, EntityKind, NewEntity, TargetId};

use crate::errors::StoreError;
use crate::interfaces::TargetGraph;

#[derive(Default)]
struct TargetState {
    generation: u64,
    next_id: u64,
    entities: BTreeMap<TargetId, NewEntity>,
    edges: Vec<(EdgeKind, TargetId, TargetId)>,
    statements: Vec<String>,
    recreations: usize,
}

/// Identifier-free view of a target graph's content.
///
/// Two migrations of the same source produce equal snapshots even though the
/// identifiers and uuids they assign differ.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetSnapshot {
    /// `(kind, name, alias, motto)`, sorted.
    pub entities: Vec<(EntityKind, String, Vec<String>, Option<Vec<String>>)>,
    /// `(kind, source name, destination name)`, sorted.
    pub edges: Vec<(EdgeKind, String, String)>,
}

/// A target graph held in memory.
///
/// Identifiers embed a generation counter bumped by every `recreate`, so ids
/// handed out by an earlier run are never reused by a later one.
#[derive(Default)]
pub struct InMemoryTargetGraph {
    state: Mutex<TargetState>,
    failing_statement: Option<String>,
    failing_entity: Option<String>,
}

impl InMemoryTargetGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject any schema statement containing `fragment`.
    pub fn failing_statement(mut self, fragment: impl Into<String>) -> Self {
        self.failing_statement = Some(fragment.into());
        self
    }

    /// Reject creation of any entity named `name`.
    pub fn failing_entity(mut self, name: impl Into<String>) -> Self {
        self.failing_entity = Some(name.into());
        self
    }

    pub async fn entities(&self) -> Vec<(TargetId, NewEntity)> {
        let state = self.state.lock().await;
        state
            .entities
            .iter()
            .map(|(id, entity)| (id.clone(), entity.clone()))
            .collect()
    }

    pub async fn edges(&self) -> Vec<(EdgeKind, TargetId, TargetId)> {
        self.state.lock().await.edges.clone()
    }

    pub async fn statements(&self) -> Vec<String> {
        self.state.lock().await.statements.clone()
    }

    pub async fn recreations(&self) -> usize {
        self.state.lock().await.recreations
    }

    pub async fn snapshot(&self) -> TargetSnapshot {
        let state = self.state.lock().await;

        let mut entities: Vec<_> = state
            .entities
            .values()
            .map(|e| (e.kind, e.name.clone(), e.alias.clone(), e.motto.clone()))
            .collect();
        entities.sort();

        let name_of = |id: &TargetId| {
            state
                .entities
                .get(id)
                .map(|e| e.name.clone())
                .unwrap_or_default()
        };
        let mut edges: Vec<_> = state
            .edges
            .iter()
            .map(|(kind, from, to)| (*kind, name_of(from), name_of(to)))
            .collect();
        edges.sort();

        TargetSnapshot { entities, edges }
    }
}

#[async_trait]
impl TargetGraph for InMemoryTargetGraph {
    async fn recreate(&self) -> Result<(), StoreError> {
        let mut state = self.state.lock().await;
        state.generation += 1;
        state.next_id = 0;
        state.entities.clear();
        state.edges.clear();
        state.statements.clear();
        state.recreations += 1;
        Ok(())
    }

    async fn apply_statement(&self, statement: &str) -> Result<(), StoreError> {
        if let Some(fragment) = &self.failing_statement {
            if statement.contains(fragment.as_str()) {
                return Err(StoreError::query(format!("Invalid statement: {}", statement)));
            }
        }

        self.state.lock().await.statements.push(statement.to_string());
        Ok(())
    }

    async fn create_entity(&self, entity: &NewEntity) -> Result<TargetId, StoreError> {
        if self.failing_entity.as_deref() == Some(entity.name.as_str()) {
            return Err(StoreError::query(format!(
                "Cannot create {} '{}'",
                entity.kind, entity.name
            )));
        }

        let mut state = self.state.lock().await;
        let id = TargetId::new(format!("mem:{}:{}", state.generation, state.next_id));
        state.next_id += 1;
        state.entities.insert(id.clone(), entity.clone());
        Ok(id)
    }

    async fn create_edge(
        &self,
        kind: EdgeKind,
        from: &TargetId,
        to: &TargetId,
    ) -> Result<(), StoreError> {
        let mut state = self.state.lock().await;
        for handle in [from, to] {
            if !state.entities.contains_key(handle) {
                return Err(StoreError::query(format!("Unknown entity handle {}", handle)));
            }
        }

        state.edges.push((kind, from.clone(), to.clone()));
        Ok(())
    }
}
