use anyhow::{bail, Result};
use is_terminal::IsTerminal;

use algorun::{cli, config::Config, handlers, script, tui};

#[tokio::main]
async fn main() -> Result<()> {
    let args = cli::Cli::parse();

    // Optional: override the scripts directory via CLI before loading config
    if let Some(dir) = args.scripts_dir.as_deref() {
        std::env::set_var("SCRIPTS_PATH", dir);
    }

    let cfg = Config::load();
    let scripts_dir = cfg.scripts_path();

    // Effective boolean switches with config defaults
    let pretty = if args.no_pretty {
        false
    } else if args.pretty {
        true
    } else {
        cfg.get_bool("PRETTY_OUTPUT")
    };
    let color = !args.no_color && std::io::stdout().is_terminal();

    // Listing shortcuts
    if args.list {
        for name in script::discover(&scripts_dir)? {
            println!("{}", name);
        }
        return Ok(());
    }
    if let Some(name) = &args.show {
        let path = scripts_dir.join(script::script_file_name(name));
        if !path.exists() {
            bail!("algorithm not found: {}", path.display());
        }
        print!("{}", std::fs::read_to_string(&path)?);
        return Ok(());
    }

    if args.picker {
        return tui::run_picker(&scripts_dir, pretty).await;
    }

    handlers::run::RunHandler::run(args.algorithm.as_deref(), &scripts_dir, pretty, color).await
}
