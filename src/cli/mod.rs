// CLI module for command-line interface

pub mod create;

use std::ffi::OsString;

use clap::Parser;

use crate::models::project::DEFAULT_PROJECT_NAME;
use crate::utils::error::Result;

use self::create::CreateCommand;

/// Main CLI structure
#[derive(Debug, Parser)]
#[command(name = "deno-scaffold")]
#[command(about = "Scaffold a new Deno + React front-end project")]
#[command(long_about = r#"Creates a project directory with everything needed to start a Deno
development server for a React application.

Generated files:
  deno.json          Tasks and import map reference
  import_map.json    Remote URLs for react and react-dom
  dev.ts             Dev server on port 3000 with watch/recompile
  index.html         HTML shell loading /static/main.js
  src/main.tsx       Application entry point
  src/App.tsx        Starter component

Existing files at those paths are overwritten.

Examples:
  deno-scaffold                   Create ./deno-react-app
  deno-scaffold --name demo       Create ./demo
  deno-scaffold -name demo        Same, single-dash form"#)]
#[command(version)]
pub struct Cli {
    /// Name of the project (also the directory it is created in)
    #[arg(short = 'n', long, default_value = DEFAULT_PROJECT_NAME)]
    pub name: String,
}

impl Cli {
    /// Parse process arguments, accepting the single-dash `-name` form.
    pub fn parse_normalized() -> Self {
        Self::parse_from(normalize_args(std::env::args_os()))
    }

    pub async fn execute(self) -> Result<()> {
        let cmd = CreateCommand { name: self.name };
        cmd.run().await
    }
}

/// Rewrite `-name` / `-name=<value>` to their `--name` spelling so clap can
/// parse them. Everything after a bare `--` is passed through untouched.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut passthrough = false;
    args.into_iter()
        .map(Into::into)
        .map(|arg| {
            if passthrough {
                return arg;
            }
            let rewritten = match arg.to_str() {
                Some("--") => {
                    passthrough = true;
                    None
                }
                Some("-name") => Some(OsString::from("--name")),
                Some(s) if s.starts_with("-name=") => Some(OsString::from(format!("-{s}"))),
                _ => None,
            };
            rewritten.unwrap_or(arg)
        })
        .collect()
}
