//! Command-line interface implementation for pystamp.
//! Provides argument parsing and help text formatting using clap.

use clap::{error::ErrorKind, CommandFactory, Parser};

use crate::layout::Layout;
use crate::metadata::MetaFormat;

/// Command-line arguments structure for pystamp.
#[derive(Parser, Debug)]
#[command(version, about = "pystamp: instant Python package scaffolding", long_about = None)]
pub struct Args {
    /// Name of the package to create
    #[arg(value_name = "TITLE")]
    pub title: String,

    /// Abbreviation for the package name, used when importing
    #[arg(short, long)]
    pub abbrev: Option<String>,

    /// Personal name displayed on the PyPI page
    #[arg(short, long)]
    pub name: Option<String>,

    /// GitHub username
    #[arg(long)]
    pub github: Option<String>,

    /// PyPI username
    #[arg(long)]
    pub pypi: Option<String>,

    /// Email address
    #[arg(long)]
    pub email: Option<String>,

    /// Short description
    #[arg(short, long)]
    pub desc: Option<String>,

    /// Minimum Python version required
    #[arg(long, value_name = "VERSION")]
    pub python_version: Option<String>,

    /// Required packages, comma or space separated
    #[arg(short, long)]
    pub requires: Option<String>,

    /// Keywords, comma separated
    #[arg(short, long)]
    pub keywords: Option<String>,

    /// Replace an existing directory without asking for confirmation
    #[arg(short, long)]
    pub force: bool,

    /// Skip git repository initialization and the .gitignore file
    #[arg(long)]
    pub no_git: bool,

    /// Skip the LICENSE file
    #[arg(long)]
    pub no_license: bool,

    /// Skip the README.md file
    #[arg(long)]
    pub no_readme: bool,

    /// What type of file to store metadata in
    #[arg(long, value_enum, default_value_t = MetaFormat::Pyproject)]
    pub meta: MetaFormat,

    /// File structure format
    #[arg(long, value_enum, default_value_t = Layout::SrcUtil)]
    pub layout: Layout,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With status code 1 if required arguments are missing
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if e.kind() == ErrorKind::MissingRequiredArgument {
                Args::command()
                    .help_template(
                        r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#,
                    )
                    .print_help()
                    .unwrap();
                std::process::exit(1);
            } else {
                e.exit();
            }
        }
    }
}
