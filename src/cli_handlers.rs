use crate::error::{GraphError, Result};
use crate::graph::DependencyGraph;
use crate::parse;
use serde::Serialize;
use std::path::Path;
use tracing::debug;

/// JSON shape for `order --json`
#[derive(Serialize)]
struct OrderReport<'a> {
    class: &'a str,
    order: &'a [String],
}

/// JSON shape for one adjacency row of `graph --json`
#[derive(Serialize)]
struct GraphEntry<'a> {
    class: &'a str,
    depends_on: Vec<&'a str>,
}

fn build_graph(file: &Path) -> Result<DependencyGraph<String>> {
    let records = parse::load_records(file)?;
    let graph = DependencyGraph::from_records(records);
    debug!(classes = graph.len(), "graph built");
    Ok(graph)
}

/// Handle the order command
pub fn handle_order(file: &Path, class: &str, json: bool) -> Result<()> {
    let class = class.trim();
    if class.is_empty() {
        return Err(GraphError::EmptyClassName);
    }

    let graph = build_graph(file)?;
    let order = graph.topological_order(&class.to_owned())?;

    if json {
        let report = OrderReport {
            class,
            order: &order,
        };
        println!("{}", serde_json::to_string(&report)?);
    } else {
        println!("{}", order.join(" "));
    }

    Ok(())
}

/// Handle the graph command
pub fn handle_graph(file: &Path, json: bool) -> Result<()> {
    let graph = build_graph(file)?;

    if graph.is_empty() {
        println!("No classes declared.");
        return Ok(());
    }

    let entries: Vec<GraphEntry> = graph
        .vertices()
        .map(|class| GraphEntry {
            class,
            depends_on: graph
                .dependencies(class)
                .into_iter()
                .flatten()
                .map(String::as_str)
                .collect(),
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string(&entries)?);
        return Ok(());
    }

    println!("Dependency graph ({} classes):", graph.len());
    for (id, entry) in entries.iter().enumerate() {
        if entry.depends_on.is_empty() {
            println!("{:>3} {}", id, entry.class);
        } else {
            println!("{:>3} {} -> {}", id, entry.class, entry.depends_on.join(", "));
        }
    }

    Ok(())
}
