use battlechess::{FileTallyStore, GameSession};
use std::io::{self, BufRead};

use battlechess::repl::command::parse_command;
use battlechess::repl::protocol::handle_command;

fn main() {
    println!("Battlechess");

    let stdin = io::stdin();
    let store = FileTallyStore::new(FileTallyStore::default_path());
    let mut session = GameSession::new(Box::new(store));

    for line in stdin.lock().lines() {
        let input = match line {
            Ok(input) => input,
            Err(_) => break,
        };

        if let Some(cmd) = parse_command(&input) {
            match handle_command(&cmd, &mut session) {
                Ok(true) => {}
                Ok(false) => break,
                Err(err) => eprintln!("{}", err),
            }
        }
    }
}
