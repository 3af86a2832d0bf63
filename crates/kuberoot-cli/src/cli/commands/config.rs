//! `kuberoot config` - inspect CLI configuration.

use anyhow::Result;
use colored::Colorize;

use super::Context;
use crate::cli::args::{ConfigArgs, ConfigCommands};
use crate::config::Config;

pub fn execute(ctx: &Context, args: ConfigArgs) -> Result<()> {
    match args.command {
        ConfigCommands::Show => {
            show_config(ctx);
            Ok(())
        }
        ConfigCommands::Path => show_path(ctx),
    }
}

fn show_config(ctx: &Context) {
    let config = &ctx.config;
    let unset = || "(not set)".dimmed().to_string();

    println!("{}", "Current Configuration:".bold());
    println!();
    println!(
        "  {} {}",
        "kubeconfig:".bold(),
        config.kubeconfig.clone().unwrap_or_else(unset)
    );
    println!(
        "  {} {}",
        "context:".bold(),
        config.context.clone().unwrap_or_else(unset)
    );
    println!("  {} {}", "exec_timeout_secs:".bold(), config.exec_timeout_secs);
    println!("  {} {}", "concurrency:".bold(), config.concurrency);
    println!("  {} {}", "classifier:".bold(), config.classifier);
    println!("  {} {}", "no_color:".bold(), ctx.no_color);
}

fn show_path(ctx: &Context) -> Result<()> {
    let path = match &ctx.config_path {
        Some(path) => path.clone(),
        None => Config::path()?,
    };
    println!("{}", path.display());
    Ok(())
}
