use crate::duke::{Duke, GREETING};
use std::io::{self, BufRead, Write};

const DIVIDER: &str = "____________________________________________________________";

fn print_block<W: Write>(output: &mut W, message: &str) -> io::Result<()> {
    writeln!(output, "{}", DIVIDER)?;
    for line in message.lines() {
        writeln!(output, " {}", line)?;
    }
    writeln!(output, "{}", DIVIDER)?;
    output.flush()
}

/// Line-oriented session: one command per input line until `bye` or end of input.
pub fn run<R: BufRead, W: Write>(duke: &mut Duke, input: R, output: &mut W) -> io::Result<()> {
    print_block(output, GREETING)?;

    for line in input.lines() {
        let line = line?;
        let reply = duke.respond(&line);
        print_block(output, &reply.message)?;
        if reply.is_exit {
            break;
        }
    }

    Ok(())
}
