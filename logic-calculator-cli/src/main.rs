use anyhow::{Context, Result};
use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use log::{debug, info};
use logic_calculator::interpreter::{
    build, evaluate, render_infix, render_postfix, tokenize, tokens_to_string,
};
use std::io;
use std::io::{BufRead, Write};

/// Evaluates an arithmetic or logical expression over 64-bit integers
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Arguments {
    /// The expression to evaluate, read from the first line of standard input if omitted
    #[clap(allow_hyphen_values = true)]
    expression: Option<String>,

    /// Also print the expression tree
    #[clap(long)]
    tree: bool,

    /// Also print the tokens of the expression
    #[clap(long)]
    tokens: bool,

    #[clap(flatten)]
    verbose: Verbosity<WarnLevel>,
}

fn main() -> Result<()> {
    let arguments = Arguments::parse();
    env_logger::Builder::new()
        .filter_level(arguments.verbose.log_level_filter())
        .parse_default_env()
        .init();
    debug!("{:?}", arguments);

    let expression = match arguments.expression {
        Some(ref expression) => Some(expression.clone()),
        None => read_expression(io::stdin().lock()).context("Failed to read standard input")?,
    };

    let stdout = io::stdout();
    let mut output = stdout.lock();
    report(expression.as_deref(), &arguments, &mut output)
        .context("Failed to write to standard output")
}

/// Reads the first line of the input without its line terminator.
///
/// returns: `None` if the input is already at its end.
fn read_expression(mut input: impl BufRead) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    if let Some(stripped) = line.strip_suffix('\n') {
        let stripped = stripped.strip_suffix('\r').unwrap_or(stripped);
        line = stripped.to_string();
    }
    Ok(Some(line))
}

/// Builds and evaluates the expression, printing the outcome in both notations.
///
/// Failures of the expression itself are reported as text; only failing writes are errors.
fn report(expression: Option<&str>, arguments: &Arguments, output: &mut impl Write) -> Result<()> {
    let expression = match expression {
        Some(expression) if !expression.is_empty() => expression,
        _ => {
            writeln!(output, "Input is empty!")?;
            return Ok(());
        }
    };

    if arguments.tokens {
        if let Ok(tokens) = tokenize(expression) {
            writeln!(output, "Tokens: \n{}", tokens_to_string(&tokens))?;
        }
    }

    let tree = match build(expression) {
        Ok(tree) => tree,
        Err(error) => {
            info!("Failed to build '{}'", expression);
            writeln!(output, "AST build error: {}", error)?;
            return Ok(());
        }
    };

    writeln!(output, "AST: \n{}", render_infix(&tree))?;
    if arguments.tree {
        write!(output, "{}", tree)?;
    }

    let postfix = render_postfix(&tree);
    match evaluate(&tree) {
        Ok(value) => {
            writeln!(output, "Infix notation: \n{} = {}", expression, value)?;
            writeln!(output, "Reverse polish notation: \n{}= {}", postfix, value)?;
        }
        Err(error) => {
            writeln!(output, "Reverse polish notation: \n{}", postfix.trim_end())?;
            writeln!(output, "Evaluation error: {}", error)?;
        }
    }
    Ok(())
}
