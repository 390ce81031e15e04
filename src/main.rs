//! Mini-Pager CLI: inspect how a saved editor document paginates.
//! The main interface is through WASM bindings.

use std::process::ExitCode;

use mini_pager::{Pager, Result};

fn run(path: &str) -> Result<()> {
    let json = std::fs::read_to_string(path)?;
    let mut pager = Pager::default();
    pager.on_document_json(&json);

    println!("{}: {} page(s)", path, pager.page_count());
    for (i, page) in pager.pages().iter().enumerate() {
        println!("  Page {}: {} block(s)", i + 1, page.len());
    }
    println!();
    for row in pager.stat_rows() {
        println!("{}", row);
    }
    Ok(())
}

fn main() -> ExitCode {
    let Some(path) = std::env::args().nth(1) else {
        eprintln!("usage: mini-pager <document.json>");
        return ExitCode::from(2);
    };

    match run(&path) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}
