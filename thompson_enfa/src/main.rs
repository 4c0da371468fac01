use std::io::{self, BufRead, Write};
use std::process;

use anyhow::Context;
use clap::{arg, command, ArgAction};
use log::info;
use thompson_enfa::{compile, validate, Enfa, Matcher};

const EXIT_ERROR: i32 = 1;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = command!()
        .about("Compiles a regular expression to an epsilon-NFA and tests strings against it")
        .long_about(
            "Reads a regular expression from the first line of standard input, \
             then prints `true` or `false` for every following line depending \
             on whether the whole line matches.",
        )
        .arg(
            arg!(-v --verbose "Print the transition table after compiling")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut lines = stdin.lock().lines();
    let mut out = stdout.lock();

    writeln!(out, "Enter the regular expression:")?;
    out.flush()?;

    let expr = match lines.next() {
        Some(line) => line.context("failed to read the expression")?,
        None => return Ok(()),
    };

    let nfa = match build(&expr) {
        Ok(nfa) => nfa,
        Err(err) => {
            info!("rejected {:?}: {}", expr, err);
            writeln!(out, "Invalid Expression")?;
            out.flush()?;
            process::exit(EXIT_ERROR);
        }
    };

    if args.get_flag("verbose") {
        print_nfa(&mut out, &nfa)?;
    }

    writeln!(out, "ready")?;
    out.flush()?;

    let matcher = Matcher::new(&nfa);
    for line in lines {
        let input = line.context("failed to read input")?;
        writeln!(out, "{}", matcher.is_match(&input))?;
        out.flush()?;
    }

    Ok(())
}

/// Validation first: the compiler assumes an admissible expression.
fn build(expr: &str) -> anyhow::Result<Enfa> {
    validate(expr)?;
    Ok(compile(expr)?)
}

fn print_nfa<W: Write>(out: &mut W, nfa: &Enfa) -> io::Result<()> {
    writeln!(out, "Start state: {}", nfa.start())?;
    writeln!(out, "Accept state: {}", nfa.accept())?;
    writeln!(out, "States: {}", nfa.state_count())?;
    write!(out, "{}", nfa)
}
