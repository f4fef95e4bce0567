use clap::Parser;

use shorts_lens::{
    cli::{handle_commands, run_classification, CliArgs},
    config::Config,
    utils::{setup_logging, Result},
};

#[tokio::main]
async fn main() -> Result<()> {
    let args = CliArgs::parse();

    if !args.is_info_command() && args.input.is_empty() {
        use clap::CommandFactory;
        let mut cmd = CliArgs::command();
        cmd.print_help().unwrap();
        println!();
        return Ok(());
    }

    args.validate()?;

    let config = Config::load_with_fallback(&args.config)?;

    setup_logging(
        args.get_log_level(&config.logging.level),
        config.logging.show_timestamps,
        config.logging.colored_output && args.should_use_color(),
    )?;

    if handle_commands(&args, &config).await? {
        return Ok(());
    }

    if args.should_classify() {
        run_classification(&args, &config).await
    } else {
        Ok(())
    }
}
