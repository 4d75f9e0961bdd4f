use clap::{ArgGroup, Parser};

#[derive(Parser, Debug, Clone)]
#[command(name = "algorun", about = "Algorithm script runner CLI", version)]
#[command(group(ArgGroup::new("mode").args(["picker", "list", "show"]).multiple(false)))]
#[command(group(ArgGroup::new("pretty_switch").args(["pretty", "no_pretty"]).multiple(false)))]
pub struct Cli {
    /// Name of the algorithm to run (maps to <scripts-dir>/<ALGORITHM>.rhai).
    #[arg(value_name = "ALGORITHM")]
    pub algorithm: Option<String>,

    /// Directory containing algorithm scripts.
    #[arg(long = "scripts-dir")]
    pub scripts_dir: Option<String>,

    /// Open the interactive algorithm picker.
    #[arg(short = 'p', long)]
    pub picker: bool,

    /// List available algorithm scripts.
    #[arg(short = 'l', long, visible_alias = "ls")]
    pub list: bool,

    /// Show the source of an algorithm script.
    #[arg(long = "show", value_name = "ALGORITHM")]
    pub show: Option<String>,

    /// Indent structured results (default, see PRETTY_OUTPUT).
    #[arg(long)]
    pub pretty: bool,
    /// Print structured results in compact form.
    #[arg(long = "no-pretty")]
    pub no_pretty: bool,

    /// Disable colored output.
    #[arg(long = "no-color")]
    pub no_color: bool,
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }
}
