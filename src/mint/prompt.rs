//! Decides which questions still need asking and merges the answers.
//!
//! All answers are gathered before the project writer runs, so the writer
//! always sees a fully resolved configuration.

use crate::args::InitArgs;
use crate::commands::CmdMessage;
use crate::config::{ScaffoldConfig, Template};
use crate::error::Result;

use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Select};

/// Choices offered by the interactive template question.
pub const TEMPLATE_CHOICES: [&str; 2] = ["JavaScript", "TypeScript"];

/// Source of interactive answers.
///
/// The production implementation talks to the terminal through `dialoguer`;
/// tests drive the orchestrator with a scripted implementation instead.
pub trait PromptSource {
    /// Ask a single-choice question, returning the selected item.
    fn select(&mut self, message: &str, items: &[&str]) -> Result<String>;

    /// Ask a free-text question pre-filled with a default.
    fn text(&mut self, message: &str, default: &str) -> Result<String>;
}

pub struct TerminalPrompter;

impl PromptSource for TerminalPrompter {
    fn select(&mut self, message: &str, items: &[&str]) -> Result<String> {
        let index = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(message)
            .items(items)
            .default(0)
            .interact()?;
        Ok(items[index].to_string())
    }

    fn text(&mut self, message: &str, default: &str) -> Result<String> {
        Ok(Input::with_theme(&ColorfulTheme::default())
            .with_prompt(message)
            .default(default.to_string())
            .interact_text()?)
    }
}

/// Fill the remaining gaps in `config` from flags and prompts.
///
/// A template supplied positionally is resolved without prompting; an
/// unrecognized one is reported and the configuration keeps its prior
/// default (the run continues — there is no rollback of the scaffold).
/// The four property questions are skipped entirely with `--yes`.
pub fn resolve(
    config: &mut ScaffoldConfig,
    args: &InitArgs,
    source: &mut dyn PromptSource,
) -> Result<Vec<CmdMessage>> {
    let mut messages = Vec::new();

    config.makefile = args.makefile;
    config.base_code = args.base_code;

    let template_name = match &args.template {
        Some(name) => name.clone(),
        None => source.select("Which language do you want to use?", &TEMPLATE_CHOICES)?,
    };

    match Template::from_name(&template_name) {
        Some(template) => {
            config.template = template;
            messages.push(CmdMessage::info(format!(
                "{} chosen!",
                template.display_name()
            )));
        }
        None => messages.push(CmdMessage::error(format!(
            "The specified template (\"{}\") is invalid. For a list of available options, run \"mint templates\".",
            template_name
        ))),
    }

    if !args.skip_prompts {
        let p = &mut config.properties;
        p.name = source.text("Specify the project name", &p.name)?;
        p.author = source.text("Specify the project author", &p.author)?;
        p.version = source.text("Specify the project version", &p.version)?;
        p.assets_dir = source.text("Specify the assets folder", &p.assets_dir)?;
    }

    Ok(messages)
}
