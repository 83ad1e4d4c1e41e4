//! fee CLI binary entry point.
//! Delegates to modules for synthesis, installation, serialization, and
//! IDE watcher generation, and prints results.

mod cli;
mod config;
mod idea;
mod install;
mod models;
mod modules;
mod prompt;
mod serialize;
mod severity;
mod synth;
mod utils;

use crate::models::answers::Answers;
use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    match cli.cmd {
        Commands::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
        }
        Commands::Init {
            root,
            format,
            yes,
            skip_install,
        } => {
            let eff = config::resolve_effective(
                root.as_deref(),
                format.as_deref(),
                if skip_install { Some(true) } else { None },
            );
            if config::load_config(&eff.root).is_none() {
                eprintln!(
                    "{} {}",
                    utils::note_prefix(),
                    "No fee.toml found; using defaults."
                );
            }
            let ext = match eff.format.as_str() {
                "json" => "json",
                "yaml" | "yml" => "yaml",
                other => {
                    eprintln!(
                        "{} {}",
                        utils::error_prefix(),
                        format!("unsupported format \"{}\"; expected json or yaml", other)
                    );
                    std::process::exit(2);
                }
            };

            let answers = if yes {
                Answers::defaults()
            } else {
                match prompt::collect_answers() {
                    Ok(a) => a,
                    Err(e) => {
                        eprintln!(
                            "{} {}",
                            utils::error_prefix(),
                            format!("prompt aborted: {}", e)
                        );
                        std::process::exit(2);
                    }
                }
            };

            let eslint_cfg = synth::synthesize(&answers);
            let packages = modules::resolve_modules(&eslint_cfg, true, &eff.bare_install);
            if eff.skip_install {
                eprintln!(
                    "{} {}",
                    utils::info_prefix(),
                    format!("install skipped; needed packages: {}", packages.join(", "))
                );
            } else if let Err(e) = install::install_packages(&eff.root, &packages) {
                eprintln!(
                    "{} {}",
                    utils::error_prefix(),
                    format!("package installation failed: {}", e)
                );
                std::process::exit(1);
            }

            let eslint_path = eff.root.join(format!(".eslintrc.{ext}"));
            if let Err(e) = serialize::write_config(&eslint_cfg.to_json(), &eslint_path) {
                eprintln!("{} {}", utils::error_prefix(), e);
                std::process::exit(1);
            }
            println!(
                "{} wrote {}",
                utils::done_prefix(),
                eslint_path.to_string_lossy()
            );

            if answers.prettier {
                let prettier_path = eff.root.join(format!(".prettierrc.{ext}"));
                if let Err(e) = serialize::write_config(&synth::prettier_config(), &prettier_path) {
                    eprintln!("{} {}", utils::error_prefix(), e);
                    std::process::exit(1);
                }
                println!(
                    "{} wrote {}",
                    utils::done_prefix(),
                    prettier_path.to_string_lossy()
                );
            }

            // Optional watcher stage; defaults never reach into the IDE
            // unasked, so --yes skips it entirely.
            if !yes {
                match prompt::confirm_watchers() {
                    Ok(true) => run_watch(&eff),
                    Ok(false) => {}
                    Err(e) => {
                        eprintln!(
                            "{} {}",
                            utils::error_prefix(),
                            format!("prompt aborted: {}", e)
                        );
                        std::process::exit(2);
                    }
                }
            }
        }
        Commands::Watch { root } => {
            let eff = config::resolve_effective(root.as_deref(), None, None);
            if config::load_config(&eff.root).is_none() {
                eprintln!(
                    "{} {}",
                    utils::note_prefix(),
                    "No fee.toml found; watching all known file types."
                );
            }
            run_watch(&eff);
        }
    }
}

fn run_watch(eff: &config::Effective) {
    match idea::generate(&eff.root, &eff.watch) {
        Ok(true) => {
            println!(
                "{} file watchers written under {}",
                utils::done_prefix(),
                eff.root.join(".idea").to_string_lossy()
            );
        }
        // Refusal already reported by discovery
        Ok(false) => std::process::exit(2),
        Err(e) => {
            eprintln!("{} {}", utils::error_prefix(), e);
            std::process::exit(1);
        }
    }
}
