use std::{env, io, process};

use lox_lang::Lox;

fn main() {
    let args: Vec<String> = env::args().collect();

    let mut stdout = io::stdout();
    let mut lox = Lox::new(&mut stdout);

    match args.len() {
        n if n > 2 => {
            println!("Usage: lox [script]");
            process::exit(64);
        },
        2 => lox.run_file(&args[1]),
        _ => lox.run_prompt(),
    };
}
