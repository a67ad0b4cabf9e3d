use crate::error::{GraphError, Result};
use std::collections::HashMap;
use std::hash::Hash;

/// Directed dependency graph over an arbitrary vertex type.
///
/// Vertices are interned to dense ids in first-seen order; each adjacency
/// slot lists the ids a vertex depends on. Edges point from a class to the
/// classes that must be compiled before it.
#[derive(Debug, Clone, Default)]
pub struct DependencyGraph<T> {
    /// Value -> id, for O(1) lookup of a vertex's id.
    ids: HashMap<T, usize>,
    /// Id -> value, for reconstructing output from ids.
    values: Vec<T>,
    /// Id -> ids this vertex depends on, in insertion order.
    adjacency: Vec<Vec<usize>>,
}

impl<T: Eq + Hash + Clone> DependencyGraph<T> {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self {
            ids: HashMap::new(),
            values: Vec::new(),
            adjacency: Vec::new(),
        }
    }

    /// Number of registered vertices.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True if no vertices have been registered.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Register a vertex, returning its id.
    ///
    /// Idempotent: a value already in the registry keeps its original id and
    /// adjacency slot. Ids are assigned sequentially and never reused.
    pub fn add_vertex(&mut self, value: T) -> usize {
        if let Some(&id) = self.ids.get(&value) {
            return id;
        }
        let id = self.values.len();
        self.ids.insert(value.clone(), id);
        self.values.push(value);
        self.adjacency.push(Vec::new());
        id
    }

    /// Add an edge meaning `origin` depends on `depends_on`.
    ///
    /// Both endpoints must already be registered. Repeated edges between the
    /// same pair are kept as declared, not deduplicated.
    pub fn add_edge(&mut self, origin: &T, depends_on: &T) -> Result<()> {
        let origin_id = *self.ids.get(origin).ok_or(GraphError::UnknownVertex)?;
        let dep_id = *self.ids.get(depends_on).ok_or(GraphError::UnknownVertex)?;
        self.adjacency[origin_id].push(dep_id);
        Ok(())
    }

    /// Build a graph from dependency records.
    ///
    /// Each record is one declaration: element 0 is the origin class,
    /// elements 1.. are the classes it depends on. Empty records are
    /// skipped. Building never fails; cyclic input is accepted and only
    /// reported by [`topological_order`](Self::topological_order).
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = Vec<T>>,
    {
        let mut graph = Self::new();
        for record in records {
            let mut elements = record.into_iter();
            let Some(origin) = elements.next() else {
                continue;
            };
            let origin_id = graph.add_vertex(origin);
            for dependency in elements {
                let dep_id = graph.add_vertex(dependency);
                graph.adjacency[origin_id].push(dep_id);
            }
        }
        graph
    }

    /// Registered vertices in id order.
    pub fn vertices(&self) -> impl Iterator<Item = &T> {
        self.values.iter()
    }

    /// The vertices `origin` depends on, in declaration order.
    ///
    /// Returns `None` if `origin` is not registered.
    pub fn dependencies(&self, origin: &T) -> Option<impl Iterator<Item = &T>> {
        let id = *self.ids.get(origin)?;
        Some(self.adjacency[id].iter().map(|&dep| &self.values[dep]))
    }

    /// Compute the order in which `start` and everything it transitively
    /// depends on must be compiled: dependencies first, `start` last.
    ///
    /// Fails with [`GraphError::UnknownVertex`] if `start` was never
    /// registered, and with [`GraphError::CycleDetected`] if the descent
    /// re-encounters a vertex already visited within this query. The visited
    /// flag is shared across the whole query, so a vertex reachable along
    /// two paths (a diamond) is reported as a cycle even though the graph is
    /// acyclic; callers must not rely on diamond-shaped inputs succeeding.
    pub fn topological_order(&self, start: &T) -> Result<Vec<T>> {
        let start_id = *self.ids.get(start).ok_or(GraphError::UnknownVertex)?;

        let mut visited = vec![false; self.values.len()];
        let mut order: Vec<T> = Vec::new();

        // Explicit work stack of (vertex id, next neighbor index) frames so
        // long dependency chains cannot overflow the call stack.
        let mut frames: Vec<(usize, usize)> = Vec::new();
        visited[start_id] = true;
        frames.push((start_id, 0));

        while let Some(frame) = frames.last_mut() {
            let id = frame.0;
            if frame.1 < self.adjacency[id].len() {
                let neighbor = self.adjacency[id][frame.1];
                frame.1 += 1;
                if visited[neighbor] {
                    return Err(GraphError::CycleDetected);
                }
                visited[neighbor] = true;
                frames.push((neighbor, 0));
            } else {
                // All dependencies emitted; the vertex itself comes next.
                order.push(self.values[id].clone());
                frames.pop();
            }
        }

        Ok(order)
    }
}
