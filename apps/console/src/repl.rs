//! # Prompt Loop
//!
//! Line-oriented command dispatch for the operator console.
//!
//! ## Line Grammar
//! Tokens are whitespace-separated; double quotes group words into one
//! token so titles with spaces stay intact:
//!
//! ```text
//! folio> add-book "The Left Hand of Darkness" "Ursula K. Le Guin" Ace 4 250.00
//! folio> add "The Left Hand of Darkness" 2
//! folio> checkout
//! ```
//!
//! Errors never leave the loop: every command result - success or failure -
//! is one printed line (or small table), and the prompt comes back.

use std::io::{self, BufRead, Write};

use crate::commands;
use crate::error::StatusError;
use crate::session::Session;

/// Runs the prompt loop until `quit`/`exit` or end of input.
pub fn run(session: &mut Session) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut input = stdin.lock();

    println!("Folio POS console. Type 'help' for commands, 'quit' to leave.");

    loop {
        write!(stdout, "folio> ")?;
        stdout.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            // End of input (Ctrl-D / piped script ran out)
            break;
        }

        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line == "quit" || line == "exit" {
            break;
        }

        match execute(session, line) {
            Ok(message) => println!("{message}"),
            Err(err) => println!("{}", err.message),
        }
    }

    Ok(())
}

/// Parses and runs one command line, returning its status message.
pub fn execute(session: &mut Session, line: &str) -> Result<String, StatusError> {
    let tokens = tokenize(line)?;
    let (command, args) = tokens
        .split_first()
        .ok_or_else(|| StatusError::usage("Empty command"))?;

    match command.as_str() {
        "add-book" => commands::inventory::add_book(session, args),
        "edit-book" => commands::inventory::edit_book(session, args),
        "remove-book" => commands::inventory::remove_book(session, args),
        "books" => commands::inventory::list_books(session),
        "titles" => commands::inventory::list_titles(session),
        "authors" => commands::inventory::list_authors(session),
        "add" => commands::cart::add_to_cart(session, args),
        "cart" => commands::cart::view_cart(session),
        "checkout" => commands::sales::checkout(session),
        "sales" => commands::sales::sales_history(session),
        "help" => Ok(help_text()),
        other => Err(StatusError::usage(format!(
            "Unknown command: {other}. Type 'help' for commands."
        ))),
    }
}

/// Splits a command line into tokens, honoring double quotes.
fn tokenize(line: &str) -> Result<Vec<String>, StatusError> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut token_started = false;

    for c in line.chars() {
        match c {
            '"' => {
                in_quotes = !in_quotes;
                token_started = true;
            }
            c if c.is_whitespace() && !in_quotes => {
                if token_started {
                    tokens.push(std::mem::take(&mut current));
                    token_started = false;
                }
            }
            c => {
                current.push(c);
                token_started = true;
            }
        }
    }

    if in_quotes {
        return Err(StatusError::usage("Unterminated quote"));
    }
    if token_started {
        tokens.push(current);
    }

    Ok(tokens)
}

fn help_text() -> String {
    "Commands:\n\
     \x20 add-book <title> <author> <publisher> <stock> <price>\n\
     \x20 edit-book <title> <stock|-1> <price|-1>   (-1 = leave unchanged)\n\
     \x20 remove-book <title>\n\
     \x20 books                                     list the catalog\n\
     \x20 titles                                    list titles only\n\
     \x20 authors                                   list distinct authors\n\
     \x20 add <title> [quantity]                    add to cart (default 1)\n\
     \x20 cart                                      show the cart\n\
     \x20 checkout                                  complete the purchase\n\
     \x20 sales                                     show sales history\n\
     \x20 quit                                      leave the console\n\
     Quote titles containing spaces: add \"Dune Messiah\" 2"
        .to_string()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use folio_store::{Store, StoreConfig};
    use tempfile::TempDir;

    fn session(dir: &TempDir) -> Session {
        Session::new(Store::open(StoreConfig::new(dir.path())).unwrap())
    }

    #[test]
    fn test_tokenize_plain_words() {
        assert_eq!(
            tokenize("add Dune 2").unwrap(),
            vec!["add", "Dune", "2"]
        );
    }

    #[test]
    fn test_tokenize_quoted_titles() {
        assert_eq!(
            tokenize(r#"add-book "Dune Messiah" "Frank Herbert" Ace 2 399.00"#).unwrap(),
            vec!["add-book", "Dune Messiah", "Frank Herbert", "Ace", "2", "399.00"]
        );
    }

    #[test]
    fn test_tokenize_empty_quotes_make_empty_token() {
        // An explicitly empty field (e.g. no author) is still a token.
        assert_eq!(
            tokenize(r#"add-book Anthology "" Various 1 10.00"#).unwrap(),
            vec!["add-book", "Anthology", "", "Various", "1", "10.00"]
        );
    }

    #[test]
    fn test_tokenize_unterminated_quote() {
        let err = tokenize(r#"add "Dune Messiah"#).unwrap_err();
        assert_eq!(err.code, ErrorCode::Usage);
    }

    #[test]
    fn test_execute_full_flow() {
        let dir = TempDir::new().unwrap();
        let mut session = session(&dir);

        execute(
            &mut session,
            r#"add-book "Dune" "Frank Herbert" Ace 5 499.00"#,
        )
        .unwrap();
        execute(&mut session, r#"add "Dune" 2"#).unwrap();

        let msg = execute(&mut session, "checkout").unwrap();
        assert!(msg.starts_with("Purchase successful! Total: $998.00."));

        let sales = execute(&mut session, "sales").unwrap();
        assert!(sales.contains("1 sale(s) on record."));
    }

    #[test]
    fn test_execute_unknown_command() {
        let dir = TempDir::new().unwrap();
        let mut session = session(&dir);

        let err = execute(&mut session, "frobnicate").unwrap_err();
        assert_eq!(err.code, ErrorCode::Usage);
        assert!(err.message.contains("Unknown command"));
    }

    #[test]
    fn test_help_lists_every_command() {
        let help = help_text();
        for command in [
            "add-book",
            "edit-book",
            "remove-book",
            "books",
            "titles",
            "authors",
            "add",
            "cart",
            "checkout",
            "sales",
            "quit",
        ] {
            assert!(help.contains(command), "help is missing {command}");
        }
    }
}
