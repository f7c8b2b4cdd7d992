mod display;
mod session;

use crate::session::Session;
use anyhow::Result;
use clap::Parser;
use infix_calculator::evaluator::infix_converter::infix_to_postfix;
use infix_calculator::evaluator::lexer::tokenize;
use infix_calculator::evaluator::postfix_evaluator::evaluate_postfix;
use infix_calculator::evaluator::tokens_to_string;
use log::{debug, info};
use std::io;
use std::io::{BufRead, Write};

/// Evaluates infix arithmetic expressions
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Arguments {
    /// The expression to evaluate; omit it to start an interactive session
    expression: Option<String>,

    #[clap(flatten)]
    verbose: clap_verbosity_flag::Verbosity,
}

fn main() -> Result<()> {
    let arguments = Arguments::parse();

    env_logger::Builder::new()
        .filter_level(arguments.verbose.log_level_filter())
        .init();

    match arguments.expression {
        Some(expression) => evaluate_once(expression),
        None => run_session(),
    }
}

/// Evaluates a single expression stage by stage, logging the intermediate
/// token sequences, and prints the normalized expression with its result.
fn evaluate_once(expression: String) -> Result<()> {
    let infix_tokens = tokenize(expression)?;
    debug!("infix tokens: {:?}", infix_tokens);

    let postfix_tokens = infix_to_postfix(infix_tokens.clone())?;
    debug!("postfix tokens: {:?}", postfix_tokens);

    let result = evaluate_postfix(postfix_tokens)?;
    debug!("result: {}", result);

    println!(
        "{} = {}",
        tokens_to_string(&infix_tokens)?,
        display::round_for_display(result)
    );
    Ok(())
}

/// Runs an interactive calculator session.
///
/// Each entered line is appended to the accumulated expression; the commands
/// `=` (evaluate), `<` (backspace), `c` (clear) and `q` (quit) mirror the
/// keys of a pocket calculator.
fn run_session() -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut session = Session::new();

    print_prompt(&mut stdout, &session)?;
    for line in stdin.lock().lines() {
        let line = line?;
        match line.trim() {
            "q" => break,
            "c" => session.clear(),
            "<" => session.backspace(),
            "=" => match session.evaluate() {
                Ok(result) => {
                    info!("evaluated '{}' to {}", session.input(), result);
                    println!("= {}", result);
                }
                Err(error) => println!("error: {}", error),
            },
            pressed => session.press(pressed),
        }
        print_prompt(&mut stdout, &session)?;
    }
    Ok(())
}

fn print_prompt(stdout: &mut io::Stdout, session: &Session) -> Result<()> {
    write!(stdout, "{}> ", session.input())?;
    stdout.flush()?;
    Ok(())
}
