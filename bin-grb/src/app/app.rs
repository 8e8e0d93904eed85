use log::info;
use clap::Parser;
use grobner::MonoOrd;

use super::console::Console;
use super::utils::*;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    /// Variable names, in the order of decreasing precedence.
    #[arg(long, value_delimiter = ',', default_value = "z,y,x")]
    pub vars: Vec<String>,

    /// Monomial ordering: lex, deglex or degrevlex.
    #[arg(short, long, default_value_t)]
    pub order: MonoOrd,

    #[arg(long, default_value_t = 0)]
    pub log: u8,

    /// Suppress the header and the prompt.
    #[arg(short, long)]
    pub quiet: bool,
}

pub struct App {
    pub args: CliArgs
}

impl App { 
    pub fn new() -> Self { 
        let args = CliArgs::parse();
        App { args }
    }

    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> { 
        grobner::util::log::init_logger(self.args.log)?;

        info!("args: {:?}", self.args);
        info!("int-type: {}", std::any::type_name::<Int>());

        let mut console = Console::<R>::new(
            &self.args.vars[..], 
            self.args.order, 
            self.args.quiet
        )?;

        let (res, time) = measure(|| 
            console.run(std::io::stdin().lock(), std::io::stdout().lock())
        );

        info!("time: {:?}", time);

        res?;
        Ok(())
    }
}
