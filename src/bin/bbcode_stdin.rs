//! Simple CLI that reads Steam BBCode from stdin and writes HTML to stdout.

use std::io::{self, Read, Write};

fn main() {
    let mut bbcode = Vec::new();
    if io::stdin().read_to_end(&mut bbcode).is_err() {
        eprintln!("Failed to read from stdin");
        std::process::exit(1);
    }

    let html = match steam_bbcode::parse_bytes_with_options(&bbcode, &steam_bbcode::Options::default()) {
        Ok(html) => html,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    if writeln!(io::stdout(), "{html}").is_err() {
        std::process::exit(1);
    }
}
