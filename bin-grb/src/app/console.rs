use std::fmt::Display;
use std::io::{BufRead, Write};
use std::panic::AssertUnwindSafe;
use std::str::FromStr;
use itertools::Itertools;
use log::{debug, info};
use grobner::{Field, FieldOps, Ideal, MonoOrd, Poly};
use grobner::io::{Parser, StrPrinter};
use super::err::*;
use super::utils::*;

const HEADER: &str = "\
IDEAL MEMBERSHIP SOLVER
Enter \"help\" for instructions, or \"quit\" to exit.
";

const PROMPT: &str = ">>";

/// Reads one command per line and answers it, 
/// keeping the current ideal between commands.
pub struct Console<R>
where R: Field, for<'x> &'x R: FieldOps<R> {
    parser: Parser,
    printer: StrPrinter,
    ideal: Ideal<R>,
    quiet: bool,
    quit: bool,
}

impl<R> Console<R>
where 
    R: Field + FromStr, 
    R::Err: Into<grobner::Error>,
    for<'x> &'x R: FieldOps<R> 
{
    pub fn new<S>(vars: &[S], ord: MonoOrd, quiet: bool) -> Result<Self, grobner::Error>
    where S: AsRef<str> { 
        let parser = Parser::new(vars)?;
        let printer = StrPrinter::new(parser.vars().clone());
        let ideal = Ideal::new(vec![], ord);
        Ok(Self { parser, printer, ideal, quiet, quit: false })
    }

    #[cfg(test)]
    pub fn ideal(&self) -> &Ideal<R> { 
        &self.ideal
    }

    pub fn is_running(&self) -> bool { 
        !self.quit
    }

    pub fn header(&self) -> String { 
        if self.quiet { 
            String::new()
        } else { 
            format!("{HEADER}{PROMPT}")
        }
    }

    /// Processes a line and returns the response, followed by the prompt 
    /// unless the console has quit.
    pub fn dispatch(&mut self, line: &str) -> String { 
        let line = line.trim();
        let (cmd, arg) = match line.split_once(char::is_whitespace) { 
            Some((cmd, arg)) => (cmd, arg.trim()),
            None => (line, "")
        };

        debug!("cmd: '{cmd}', arg: '{arg}'");

        let mut output = match cmd { 
            "" => String::new(),
            "quit" => { 
                self.quit = true;
                String::new()
            },
            "help" => help_text(&self.ideal.ordering()),
            "ideal" | "member" | "reduce" | "order" | "basis" => { 
                let (res, time) = measure(|| 
                    guard_panic(AssertUnwindSafe(|| self.exec(cmd, arg)))
                );
                info!("{cmd}: {time:?}");
                match res { 
                    Ok(s) => format!("{s}\n"),
                    Err(e) => format!("Error: {e}\n")
                }
            },
            _ => format!("Unknown command {cmd}\n")
        };

        if !self.quit && !self.quiet { 
            output.push_str(PROMPT);
        }

        output
    }

    fn exec(&mut self, cmd: &str, arg: &str) -> Result<String, Box<dyn std::error::Error>> { 
        match cmd { 
            "ideal"  => self.set_ideal(arg),
            "member" => self.is_member(arg),
            "reduce" => self.reduce(arg),
            "order"  => self.set_ordering(arg),
            "basis"  => Ok(self.ideal_string()),
            _ => err!("Unknown command {cmd}")
        }
    }

    fn parse(&self, s: &str) -> Result<Poly<R>, Box<dyn std::error::Error>> { 
        ensure!(!s.trim().is_empty(), "polynomial is missing.");
        let p = self.parser.parse(s)?;
        Ok(p)
    }

    fn set_ideal(&mut self, arg: &str) -> Result<String, Box<dyn std::error::Error>> { 
        let gens: Vec<_> = if arg.is_empty() { 
            vec![]
        } else { 
            arg.split(',').map(|s| self.parse(s)).try_collect()?
        };

        info!("gens: {}", gens.iter().join(", "));

        self.ideal = Ideal::new(gens, self.ideal.ordering());
        Ok(self.ideal_string())
    }

    fn is_member(&self, arg: &str) -> Result<String, Box<dyn std::error::Error>> { 
        let p = self.parse(arg)?;
        Ok(self.ideal.is_member(&p).to_string())
    }

    fn reduce(&mut self, arg: &str) -> Result<String, Box<dyn std::error::Error>> { 
        let p = self.parse(arg)?;
        let ord = self.ideal.ordering();
        let r = self.ideal.reduce(&p);
        Ok(r.to_string_with(&mut self.printer, Some(&ord)))
    }

    fn set_ordering(&mut self, arg: &str) -> Result<String, Box<dyn std::error::Error>> { 
        let ord = if arg.is_empty() { 
            None
        } else { 
            Some(arg.parse::<MonoOrd>()?)
        };
        self.ideal.set_ordering(ord)?;
        Ok(self.ideal_string())
    }

    fn ideal_string(&mut self) -> String { 
        format!("I := {}", self.ideal.to_string_with(&mut self.printer))
    }

    /// Runs until `quit` or the end of `input`.
    pub fn run<In, Out>(&mut self, input: In, mut output: Out) -> std::io::Result<()>
    where In: BufRead, Out: Write { 
        write!(output, "{}", self.header())?;
        output.flush()?;

        for line in input.lines() { 
            let res = self.dispatch(&line?);
            write!(output, "{res}")?;
            output.flush()?;

            if !self.is_running() { 
                break
            }
        }

        if self.is_running() && !self.quiet { 
            writeln!(output)?;
        }

        Ok(())
    }
}

fn help_text<O>(ord: &O) -> String
where O: Display { 
    let text = "
Solves the ideal membership problem for polynomials with rational coefficients.
Polynomials should be entered in standard form (1/2*x^2 + x*y + 1/2*y^2, not 1/2*(x+y)^2).

COMMANDS:

help
Display this help menu.

ideal p1, p2, ...
Set the generators of the ideal and print its reduced Grobner basis.
Example:
>>ideal x*y - x, x^2 - y
I := ( y - x^2 , x^3 - x )

member p
Print true if p is in the ideal. Otherwise, print false.
Example:
>>member x^3*y - x*y
true

reduce p
Print the reduction of p by the ideal.
Example:
>>reduce y + x
x^2 + x

order lex|deglex|degrevlex
Switch the term order and recompute the basis.

basis
Print the current basis.

quit
Quits the application.
";
    format!("{text}\nCurrent term order: {ord}\n\n")
}
