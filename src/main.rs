use std::env;
use std::io::{self, BufRead, Write};

use prattle::lexer::lexer::Lexer;

const PROMPT: &str = ">>> ";

fn current_user() -> String {
    env::var("USER")
        .or_else(|_| env::var("USERNAME"))
        .unwrap_or_else(|_| String::from("you"))
}

fn main() {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut lexer = Lexer::default();

    println!(
        "Hello, {}! This is the Prattle programming language!",
        current_user()
    );
    println!("Feel free to type in commands.");

    loop {
        print!("{}", PROMPT);
        stdout.flush().expect("Failed to flush stdout");

        let mut line = String::new();
        let read = stdin
            .lock()
            .read_line(&mut line)
            .expect("Failed to read from stdin");

        if read == 0 {
            break;
        }

        let line = line.trim_end_matches(['\r', '\n']);

        if line == "exit" {
            break;
        }

        // One lexer for the whole session, re-seeded per line.
        lexer.emplace(line);

        loop {
            match lexer.next() {
                Ok(Some(token)) => println!("{}", token),
                Ok(None) => break,
                Err(error) => {
                    println!("error: {}", error);
                    break;
                }
            }
        }
    }
}
