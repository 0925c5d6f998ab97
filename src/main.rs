use std::{
    env,
    io::{self, BufRead},
    process::ExitCode,
    sync::Once,
};

use arithmetic::{errors::errors::Error, parser::parser::Parser, render_error};

static TRACING_INIT: Once = Once::new();

/// Installs a subscriber when `RUST_LOG` is set, e.g. `RUST_LOG=arithmetic=debug`.
fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if env::var("RUST_LOG").is_ok() {
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true).with_writer(io::stderr))
                .with(EnvFilter::from_default_env())
                .init();
        }
    });
}

#[derive(Default)]
struct Options {
    show_postfix: bool,
    show_tree: bool,
    expressions: Vec<String>,
}

fn parse_args(args: impl Iterator<Item = String>) -> Options {
    let mut options = Options::default();

    for arg in args {
        match arg.as_str() {
            "--postfix" => options.show_postfix = true,
            "--tree" => options.show_tree = true,
            _ => options.expressions.push(arg),
        }
    }

    options
}

fn run(source: &str, options: &Options) -> Result<(), Error> {
    let parser = Parser::new(source, None)?;

    if options.show_postfix {
        println!("postfix: {}", parser.postfix_string());
    }

    let Some(root) = parser.build_tree()? else {
        println!("(empty)");
        return Ok(());
    };

    if options.show_tree {
        println!("tree: {}", root);
    }

    println!("{}", root.eval()?);

    Ok(())
}

/// Feeds each non-blank line of `input` to `handle`.
///
/// Stops at the first read error, including a line that is not valid UTF-8,
/// and returns it.
fn for_each_line(input: impl BufRead, mut handle: impl FnMut(&str)) -> io::Result<()> {
    for line in input.lines() {
        let line = line?;

        if !line.trim().is_empty() {
            handle(&line);
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    init_tracing();

    let options = parse_args(env::args().skip(1));
    let mut failed = false;

    let mut handle = |source: &str| {
        if let Err(error) = run(source, &options) {
            eprint!("{}", render_error(&error, source));
            failed = true;
        }
    };

    if options.expressions.is_empty() {
        if let Err(error) = for_each_line(io::stdin().lock(), &mut handle) {
            eprintln!("Error: failed to read expression from stdin ({})", error);
            failed = true;
        }
    } else {
        for expression in &options.expressions {
            handle(expression);
        }
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
