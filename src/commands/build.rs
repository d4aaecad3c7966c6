//! Implementation of the `minamo build` and `minamo exec` commands.
//!
//! Both start the editor once, print its combined output and elapsed time,
//! and optionally append the outcome to a build history file.

use crate::cli::{BuildArgs, ExecArgs};
use crate::config::Config;
use crate::editor::{self, Platform};
use crate::error::{MinamoError, Result};
use crate::events::{BuildAction, BuildRecord, append_record};
use crate::output::build_path;
use std::borrow::Cow;
use std::fs;

/// Execute the `minamo build` command.
pub fn cmd_build(config: &Config, args: &BuildArgs) -> Result<()> {
    run_editor(
        config,
        &Platform::current(),
        BuildAction::Build,
        config.method(),
        args,
    )
}

/// Execute the `minamo exec` command.
pub fn cmd_exec(config: &Config, args: &ExecArgs) -> Result<()> {
    run_editor(
        config,
        &Platform::current(),
        BuildAction::Exec,
        &args.method,
        &args.build,
    )
}

fn run_editor(
    config: &Config,
    platform: &Platform,
    action: BuildAction,
    method: &str,
    args: &BuildArgs,
) -> Result<()> {
    if method.is_empty() {
        return Err(MinamoError::UserError(format!(
            "no editor method to run.\n\n\
             Set `method` in '{}' or use `minamo exec <METHOD>`.",
            config.file_path().display()
        )));
    }

    let output_path = build_path(config);

    if args.mkdir {
        fs::create_dir_all(&output_path).map_err(|e| {
            MinamoError::UserError(format!(
                "failed to create build directory '{}': {}",
                output_path.display(),
                e
            ))
        })?;
    }

    let invocation = editor::execute_method(config, platform, method);

    if let Some(history) = &args.history {
        let record = BuildRecord::new(action, method)
            .with_paths(config.file_path(), &output_path)
            .with_revision(config.revision())
            .with_outcome(invocation.elapsed, invocation.error.as_ref());

        if let Err(e) = append_record(history, &record) {
            // An editor failure takes precedence over a history write failure.
            if invocation.error.is_some() {
                log::warn!("{}", e);
            } else {
                return Err(e);
            }
        }
    }

    match invocation.error {
        None => {
            print!("{}", with_line_break(&invocation.output));
            println!(
                "{} finished in {:.2?} ({})",
                method,
                invocation.elapsed,
                output_path.display()
            );
            Ok(())
        }
        Some(err) => {
            if let MinamoError::InvocationError { output, .. } = &err {
                eprint!("{}", output);
            }
            eprintln!("{} failed after {:.2?}", method, invocation.elapsed);
            Err(err)
        }
    }
}

/// Editor output terminated by a line break, unless it is empty.
fn with_line_break(output: &str) -> Cow<'_, str> {
    if output.is_empty() || output.ends_with('\n') {
        Cow::Borrowed(output)
    } else {
        Cow::Owned(format!("{}\n", output))
    }
}
