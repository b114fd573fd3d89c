//! Interactive architecture selection

use crate::models::node::Node;
use std::collections::BTreeSet;
use std::io::{self, BufRead, Write};

/// Operator's architecture selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArchChoice {
    /// The synthetic "All Nodes" option
    All,
    One(String),
}

/// Distinct architecture prefixes present in a node list, deduplicated and
/// sorted for consistent display
pub fn distinct_architectures(nodes: &[Node]) -> Vec<String> {
    nodes
        .iter()
        .map(|node| node.archi_prefix().to_string())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Prompt the operator to pick an architecture, or "All Nodes".
///
/// Loops until a valid numeric selection is entered. Input comes from any
/// `BufRead`; an exhausted reader is an error rather than an endless loop.
pub fn choose_architecture(
    architectures: &[String],
    input: &mut impl BufRead,
) -> io::Result<ArchChoice> {
    loop {
        println!("\nOptions:");
        println!("0. All Nodes");
        for (index, archi) in architectures.iter().enumerate() {
            println!("{}. {}", index + 1, archi);
        }
        print!("Choose an architecture to test: ");
        io::stdout().flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed before a choice was made",
            ));
        }

        match line.trim().parse::<usize>() {
            Ok(0) => return Ok(ArchChoice::All),
            Ok(index) if index <= architectures.len() => {
                return Ok(ArchChoice::One(architectures[index - 1].clone()));
            }
            Ok(_) => println!("Invalid choice. Please try again."),
            Err(_) => {
                println!("Invalid input. Please enter a number corresponding to your choice.")
            }
        }
    }
}

/// Apply the operator's choice. "All Nodes" returns the list unchanged, same
/// members in the same order.
pub fn filter_by_architecture(nodes: &[Node], choice: &ArchChoice) -> Vec<Node> {
    match choice {
        ArchChoice::All => nodes.to_vec(),
        ArchChoice::One(archi) => nodes
            .iter()
            .filter(|node| node.archi.starts_with(archi.as_str()))
            .cloned()
            .collect(),
    }
}

/// Read one line of operator input after a prompt
pub fn prompt_line(prompt: &str, input: &mut impl BufRead) -> io::Result<String> {
    print!("{}", prompt);
    io::stdout().flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input closed before a choice was made",
        ));
    }
    Ok(line.trim().to_string())
}
