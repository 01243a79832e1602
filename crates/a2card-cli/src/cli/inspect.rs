//! `a2card inspect`: structural diagnostics for a component graph.

use std::path::Path;

use a2card_core::inspect::{GraphReport, inspect as inspect_graph};
use a2card_core::reply::parse_graph;
use anyhow::Result;
use console::style;

use super::read_input;

/// Inspect a graph and print the report.
///
/// With `strict`, any issue turns into a non-zero exit.
///
/// # Examples
///
/// ```bash
/// a2card inspect graph.json
/// a2card inspect --json --strict < graph.json
/// ```
pub async fn inspect(file: Option<&Path>, strict: bool, json: bool) -> Result<()> {
    let raw = read_input(file).await?;
    let graph = parse_graph(&raw)?;
    let report = inspect_graph(&graph);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    if strict && !report.is_clean() {
        anyhow::bail!("graph has {} issue(s)", report.issue_count());
    }
    Ok(())
}

fn print_report(report: &GraphReport) {
    let check_mark = |ok: bool| {
        if ok {
            format!("{}", style("✓").green())
        } else {
            format!("{}", style("✗").red())
        }
    };

    println!();
    println!(
        "  {} {} component(s)",
        style("Graph").bold(),
        report.component_count
    );
    println!();
    println!("  {} root resolves", check_mark(report.root_resolved));
    println!(
        "  {} unique ids",
        check_mark(report.duplicate_ids.is_empty())
    );
    for id in &report.duplicate_ids {
        println!("      {} declared more than once", style(id).yellow());
    }
    println!(
        "  {} all references resolve",
        check_mark(report.dangling_references.is_empty())
    );
    for dangling in &report.dangling_references {
        println!(
            "      {} -> {}",
            style(&dangling.parent).cyan(),
            style(&dangling.child).yellow()
        );
    }
    println!(
        "  {} all types supported",
        check_mark(report.unknown_components.is_empty())
    );
    for unknown in &report.unknown_components {
        println!(
            "      {} ({})",
            style(&unknown.id).cyan(),
            style(&unknown.tag).yellow()
        );
    }
    println!(
        "  {} everything reachable from root",
        check_mark(report.unreachable.is_empty())
    );
    for id in &report.unreachable {
        println!("      {}", style(id).yellow());
    }
    println!("  {} acyclic", check_mark(report.cycles.is_empty()));
    for cycle in &report.cycles {
        println!("      {}", style(cycle.join(" <-> ")).yellow());
    }
    println!();
}
