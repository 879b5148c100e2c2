use std::env;
use std::process::exit;

use lexer::Lexer;
use mimalloc::MiMalloc;
use parser::Parser;

mod error;
mod lexer;
mod parser;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

const DEFAULT_SOURCE_PATH: &str = "syntax.txt";

fn main() {
    let args = env::args().collect::<Vec<String>>();
    match args.len() {
        1 => run_file(DEFAULT_SOURCE_PATH),
        2 => run_file(&args[1]),
        _ => {
            eprintln!("Usage: ifcheck [path]");
            exit(64)
        }
    }
}

fn run_file(path: &str) {
    let Ok(mut source) = std::fs::read_to_string(path) else {
        eprintln!("Could not open file {path}");
        exit(74);
    };
    source.push('\0');
    let failures = Parser::new(Lexer::new(&source)).run();
    match failures {
        0 => println!("----- 1 succeeded, 0 failed -----"),
        n => println!("----- 0 succeeded {n} failed -----"),
    }
}
