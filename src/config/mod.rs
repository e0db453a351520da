pub mod settings;

use clap::Parser;

pub use settings::ModuleSettings;

/// Cluster Flow invocation parameters. Clap's own help flag is disabled:
/// `--help` is part of the module protocol and prints the module docs.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "plot_preseq")]
#[command(about = "Make complexity curve plots from preseq results")]
#[command(disable_help_flag = true)]
pub struct ModuleArgs {
    #[arg(long = "cores", help = "Request the number of cores needed by the module.")]
    pub required_cores: bool,

    #[arg(long = "mem", help = "Request the amount of memory needed by the module.")]
    pub required_mem: bool,

    #[arg(
        long = "modules",
        help = "Request the names of environment modules needed by the module."
    )]
    pub required_modules: bool,

    #[arg(long, help = "Path to the Cluster Flow run file for this pipeline")]
    pub runfn: Option<String>,

    #[arg(long = "help", help = "Show module help")]
    pub print_help: bool,

    #[arg(help = "List of parameters.")]
    pub parameters: Vec<String>,
}

impl ModuleArgs {
    /// Normal execution only happens when no protocol query flag is set.
    pub fn is_query(&self) -> bool {
        self.required_cores || self.required_mem || self.required_modules || self.print_help
    }
}
