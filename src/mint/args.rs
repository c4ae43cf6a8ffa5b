use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "mint", bin_name = "mint", version)]
#[command(about = "Interactive scaffolding for Mint projects", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scaffold a new Mint project in the current directory
    Init {
        /// Optional template name followed by flags
        /// (--makefile/-m, --base/-b, --yes/-y)
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },

    /// List the available templates
    Templates,

    #[command(external_subcommand)]
    External(Vec<String>),
}

/// Arguments recognized by `mint init`, scanned out of the raw token list.
///
/// The tokens are scanned manually rather than declared as clap flags so the
/// historical CLI contract holds: flags are case-insensitive and
/// order-independent, unrecognized flag-shaped tokens are silently ignored,
/// and the first token that does not look like a flag is the template name.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct InitArgs {
    pub template: Option<String>,
    pub makefile: bool,
    pub base_code: bool,
    pub skip_prompts: bool,
}

impl InitArgs {
    pub fn scan(tokens: &[String]) -> Self {
        let mut out = Self::default();
        for token in tokens {
            match token.to_lowercase().as_str() {
                "--makefile" | "-m" => out.makefile = true,
                "--base" | "-b" => out.base_code = true,
                "--yes" | "-y" => out.skip_prompts = true,
                _ if token.starts_with('-') => {}
                _ => {
                    if out.template.is_none() {
                        out.template = Some(token.clone());
                    }
                }
            }
        }
        out
    }
}
