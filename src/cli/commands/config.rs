use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        edit_config,
        editor,
    } = cmd
    {
        if *print_config {
            info(format!(
                "Current configuration ({}):\n",
                Config::config_file().display()
            ));
            println!("{}", serde_yaml::to_string(cfg)?);
        }

        if *edit_config {
            Config::edit_file(editor.as_deref())?;
            success("Configuration file edited.");
        }

        if !*print_config && !*edit_config {
            info("Nothing to do: use --print or --edit.");
        }
    }

    Ok(())
}
