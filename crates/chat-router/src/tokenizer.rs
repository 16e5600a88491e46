//! Quote and escape aware argument tokenizer.
//!
//! Splits a command's argument string on spaces and tabs. Single and double
//! quotes group characters into one token, a backslash makes the following
//! character literal. If the input starts with a double quote, backslashes are
//! taken literally for the whole input so a fully quoted argument does not
//! need escaping.

use crate::error::ParseError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Start,
    InQuotes,
    InArgument,
}

/// Split `raw` into arguments.
///
/// Parsing is atomic: an unclosed quote fails the whole input and no partial
/// tokens are returned.
pub fn tokenize(raw: &str) -> Result<Vec<String>, ParseError> {
    let mut args = Vec::new();
    let mut state = State::Start;
    let mut current = String::new();
    let mut quote = '"';
    let mut escape_next = false;
    let escapes_enabled = !raw.starts_with('"');

    for c in raw.chars() {
        if state == State::InQuotes {
            if c == quote {
                args.push(std::mem::take(&mut current));
                state = State::Start;
            } else {
                current.push(c);
            }
            continue;
        }

        if escape_next {
            current.push(c);
            escape_next = false;
            continue;
        }

        if c == '\\' && escapes_enabled {
            escape_next = true;
            continue;
        }

        if c == '"' || c == '\'' {
            quote = c;
            state = State::InQuotes;
            continue;
        }

        match state {
            State::InArgument if is_delimiter(c) => {
                args.push(std::mem::take(&mut current));
                state = State::Start;
            }
            State::InArgument => current.push(c),
            State::Start if !is_delimiter(c) => {
                current.push(c);
                state = State::InArgument;
            }
            _ => {}
        }
    }

    if state == State::InQuotes {
        return Err(ParseError::UnclosedQuote {
            input: raw.to_string(),
        });
    }

    if !current.is_empty() {
        args.push(current);
    }

    Ok(args)
}

fn is_delimiter(c: char) -> bool {
    c == ' ' || c == '\t'
}
