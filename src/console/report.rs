//! Fixed-width node tables and the end-of-run summary

use crate::models::experiment::ExperimentId;
use crate::models::flash::FlashReport;
use crate::models::node::Node;
use chrono::Local;

/// Preview rows shown for the available-node table
const PREVIEW_LIMIT: usize = 10;

const RULE_WIDTH: usize = 100;

fn print_table_header() {
    println!(
        "{:<25} {:<40} {:<15}{:<10}",
        "Architecture", "Network Address", "UID", "State"
    );
    println!("{}", "-".repeat(RULE_WIDTH));
}

fn print_node_row(node: &Node) {
    println!(
        "{:<25} {:<40} {:<15}{:<10}",
        node.archi,
        node.network_address,
        node.uid,
        node.state.to_string()
    );
}

/// Preview of the available nodes, capped at [`PREVIEW_LIMIT`] rows
pub fn print_available_nodes(nodes: &[Node]) {
    println!("\nTotal Available Nodes: {}\n", nodes.len());
    println!("Selected Node Information:");
    print_table_header();
    for node in nodes.iter().take(PREVIEW_LIMIT) {
        print_node_row(node);
    }
    if nodes.len() > PREVIEW_LIMIT {
        println!(
            "\nNote: Only the first {} nodes are displayed. There are more nodes available.",
            PREVIEW_LIMIT
        );
    }
}

/// Final experiment summary: reserved count, per-architecture flash results,
/// and the uncapped suspected-node table
pub fn print_summary(
    experiment_id: ExperimentId,
    reserved: &[Node],
    suspected: &[Node],
    flash_reports: &[FlashReport],
) {
    println!("\n--- Experiment Summary ---");
    println!("Completed at: {}", Local::now().format("%Y-%m-%d %H:%M:%S"));
    println!("Experiment ID: {}", experiment_id);
    println!("Number of reserved nodes: {}", reserved.len());
    println!("Number of suspected nodes at site: {}", suspected.len());

    if !flash_reports.is_empty() {
        println!("\nFirmware deployment:");
        for report in flash_reports {
            println!("  {:<15} {}", report.archi, report.describe());
        }
    }

    if !suspected.is_empty() {
        println!("\nSuspected Nodes:");
        print_table_header();
        for node in suspected {
            print_node_row(node);
        }
    }

    println!("--- End of Summary ---");
}
