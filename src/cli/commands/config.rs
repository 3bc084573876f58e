use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{error, success, warning};
use std::path::Path;
use std::process::Command;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, path: &Path) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        edit_config,
        editor,
    } = cmd
    {
        // ---- PRINT CONFIG ----
        if *print_config {
            let cfg = Config::load(path)?;
            println!("📄 Current configuration ({}):\n", path.display());
            let yaml = matches!(
                path.extension().and_then(|e| e.to_str()),
                Some("yaml") | Some("yml")
            );
            println!("{}", cfg.to_text(yaml)?);
        }

        // ---- CHECK CONFIG ----
        if *check {
            let report = Config::load(path)?.check();

            for w in &report.warnings {
                warning(w);
            }
            for e in &report.errors {
                error(e);
            }

            if !report.is_ok() {
                return Err(AppError::Config(format!(
                    "{} problem(s) found in {}",
                    report.errors.len(),
                    path.display()
                )));
            }
            success(format!("Configuration OK: {}", path.display()));
        }

        // ---- EDIT CONFIG ----
        if *edit_config {
            edit(path, editor)?;
        }
    }

    Ok(())
}

fn edit(path: &Path, editor: &Option<String>) -> AppResult<()> {
    let default_editor = std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            if cfg!(target_os = "windows") {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        });

    let editor_to_use = editor.clone().unwrap_or_else(|| default_editor.clone());

    match Command::new(&editor_to_use).arg(path).status() {
        Ok(s) if s.success() => {
            success(format!(
                "Configuration file edited successfully using '{editor_to_use}'"
            ));
            Ok(())
        }
        _ => {
            warning(format!(
                "Editor '{editor_to_use}' not available, falling back to '{default_editor}'"
            ));

            match Command::new(&default_editor).arg(path).status() {
                Ok(s) if s.success() => {
                    success(format!(
                        "Configuration file edited successfully using fallback '{default_editor}'"
                    ));
                    Ok(())
                }
                _ => Err(AppError::Config(format!(
                    "failed to edit configuration file using '{default_editor}'"
                ))),
            }
        }
    }
}
