//! Reads markup expressions from standard input and prints both output
//! dialects for each one.
//!
//! ```text
//! > \frac{x^2-4}{2}
//!   solver: (x**2-4)/(2)
//!   widget: (x^2-4)/(2)
//! ```

use std::io::{self, BufRead, Write};

use solvista::{evaluable_to_graphing, markup_to_evaluable};

fn main() -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    writeln!(stdout, "Enter markup expressions, one per line (Ctrl-D to exit).")?;

    loop {
        write!(stdout, "> ")?;
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let evaluable = markup_to_evaluable(line.trim_end());
        let graphing = evaluable_to_graphing(evaluable.as_str());

        writeln!(stdout, "  solver: {}", evaluable)?;
        writeln!(stdout, "  widget: {}", graphing)?;
    }

    Ok(())
}
