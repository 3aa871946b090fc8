use std::io::{BufRead, Write};
use std::path::Path;

use anyhow::Result;
use la_core::config::OutputMode;
use la_core::error::CoreError;
use la_image::load_image;

use crate::session::Session;

const PROMPT: &str = ">>> ";

const INVALID_COMMAND_MSG: &str = "Did not execute due to incorrect command.";
const LOAD_IMAGE_MSG: &str = "Did not execute due to problem with image file.";
const OUTPUT_FORMAT_MSG: &str = "Did not change output method due to incorrect format.";
const RES_BOUNDS_MSG: &str = "Did not change resolution due to exceeding boundaries.";
const RES_FORMAT_MSG: &str = "Did not change resolution due to incorrect format.";
const ADD_FORMAT_MSG: &str = "Did not add due to incorrect format.";
const REMOVE_FORMAT_MSG: &str = "Did not remove due to incorrect format.";
const EMPTY_SET_MSG: &str = "Did not execute. Charset is empty.";

/// One parsed command line.
#[derive(Debug, PartialEq, Eq)]
enum Command<'a> {
    Exit,
    Chars,
    AsciiArt,
    Add(&'a str),
    Remove(&'a str),
    Res(&'a str),
    Image(&'a str),
    Output(&'a str),
}

/// What the loop should do with a handled line.
#[derive(Debug, PartialEq, Eq)]
pub enum Response {
    /// Leave the loop.
    Exit,
    /// Command ran; nothing to print (grid output goes to the sink itself).
    Silent,
    /// A line to print: a status or one of the fixed error messages.
    Message(String),
}

/// Interactive command loop. Reads lines until `exit` or EOF.
///
/// Every error is reported as a message and the loop continues; no command
/// failure terminates the session.
///
/// # Errors
/// Returns an error only when stdin/stdout themselves fail.
pub fn run(session: &mut Session) -> Result<()> {
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    let mut line = String::new();
    loop {
        write!(stdout, "{PROMPT}")?;
        stdout.flush()?;
        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF ends the session like `exit`
        }
        match handle(session, line.trim()) {
            Response::Exit => break,
            Response::Silent => {}
            Response::Message(msg) => writeln!(stdout, "{msg}")?,
        }
    }
    Ok(())
}

/// Parse and execute one line against the session.
pub fn handle(session: &mut Session, line: &str) -> Response {
    let Some(command) = parse(line) else {
        return Response::Message(INVALID_COMMAND_MSG.to_string());
    };
    match command {
        Command::Exit => Response::Exit,
        Command::Chars => Response::Message(session.chars_line()),
        Command::AsciiArt => match session.run_ascii() {
            Ok(()) => Response::Silent,
            Err(e) => {
                if matches!(
                    e.downcast_ref::<CoreError>(),
                    Some(CoreError::EmptyPalette)
                ) {
                    Response::Message(EMPTY_SET_MSG.to_string())
                } else {
                    Response::Message(e.to_string())
                }
            }
        },
        Command::Add(arg) => match char_range(arg) {
            Some((lo, hi)) => {
                session.add_range(lo, hi);
                Response::Silent
            }
            None => Response::Message(ADD_FORMAT_MSG.to_string()),
        },
        Command::Remove(arg) => match char_range(arg) {
            Some((lo, hi)) => {
                session.remove_range(lo, hi);
                Response::Silent
            }
            None => Response::Message(REMOVE_FORMAT_MSG.to_string()),
        },
        Command::Res(arg) => {
            let result = match arg {
                "up" => session.res_up(),
                "down" => session.res_down(),
                _ => return Response::Message(RES_FORMAT_MSG.to_string()),
            };
            match result {
                Ok(r) => Response::Message(format!("Resolution set to {r}.")),
                Err(_) => Response::Message(RES_BOUNDS_MSG.to_string()),
            }
        }
        Command::Image(path) => match load_image(Path::new(path)) {
            Ok(image) => {
                session.set_image(image);
                Response::Silent
            }
            Err(e) => {
                log::debug!("image load failed: {e:#}");
                Response::Message(LOAD_IMAGE_MSG.to_string())
            }
        },
        Command::Output(arg) => match arg {
            "console" => {
                session.set_output_mode(OutputMode::Console);
                Response::Silent
            }
            "html" => {
                session.set_output_mode(OutputMode::Html);
                Response::Silent
            }
            _ => Response::Message(OUTPUT_FORMAT_MSG.to_string()),
        },
    }
}

/// Split a line into a command. At most two space-separated words.
fn parse(line: &str) -> Option<Command<'_>> {
    let parts: Vec<&str> = line.split(' ').collect();
    if parts.len() > 2 {
        return None;
    }
    match (parts[0], parts.get(1).copied()) {
        ("exit", None) => Some(Command::Exit),
        ("chars", None) => Some(Command::Chars),
        ("asciiArt", None) => Some(Command::AsciiArt),
        ("add", Some(arg)) => Some(Command::Add(arg)),
        ("remove", Some(arg)) => Some(Command::Remove(arg)),
        ("res", Some(arg)) => Some(Command::Res(arg)),
        ("image", Some(arg)) => Some(Command::Image(arg)),
        ("output", Some(arg)) => Some(Command::Output(arg)),
        _ => None,
    }
}

/// Operand of `add`/`remove`: `all`, `space`, one character, or a range
/// like `a-z` (either direction).
fn char_range(arg: &str) -> Option<(char, char)> {
    if arg == "all" {
        return Some((' ', '~'));
    }
    if arg == "space" {
        return Some((' ', ' '));
    }
    let chars: Vec<char> = arg.chars().collect();
    match chars.as_slice() {
        [c] => Some((*c, *c)),
        [a, '-', b] => Some((*a, *b)),
        _ => None,
    }
}
