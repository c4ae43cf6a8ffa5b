use clap::Parser;
use colored::Colorize;

use mint::args::{Cli, Commands, InitArgs};
use mint::commands::{self, CmdMessage, CmdResult, MessageLevel};
use mint::config::ScaffoldConfig;
use mint::prompt::{self, TerminalPrompter};

fn main() {
    let cli = Cli::parse();
    std::process::exit(run(cli));
}

fn run(cli: Cli) -> i32 {
    match cli.command {
        Some(Commands::Init { args }) => handle_init(&args),
        Some(Commands::Templates) => finish(commands::templates::run()),
        Some(Commands::External(tokens)) => {
            invalid_command(tokens.first().map(String::as_str).unwrap_or(""))
        }
        None => invalid_command(""),
    }
}

fn handle_init(tokens: &[String]) -> i32 {
    let args = InitArgs::scan(tokens);
    let mut config = ScaffoldConfig::default();

    println!("{}", "Creating Mint setup, please wait!".dimmed());

    let mut prompter = TerminalPrompter;
    let gathered = match prompt::resolve(&mut config, &args, &mut prompter) {
        Ok(messages) => messages,
        Err(e) => {
            eprintln!("{}", format!("Error: {}", e).red());
            return 1;
        }
    };
    print_messages(&gathered);

    let cwd = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            eprintln!("{}", format!("Error: {}", e).red());
            return 1;
        }
    };

    let result = commands::init::run(&config, &cwd);
    print_messages(&result.messages);

    if has_errors(&gathered) || !result.succeeded() {
        1
    } else {
        0
    }
}

fn invalid_command(name: &str) -> i32 {
    eprintln!(
        "{}",
        format!(
            "The specified command (\"{}\") is invalid. For a list of available options, run \"mint help\".",
            name
        )
        .red()
    );
    1
}

fn finish(result: CmdResult) -> i32 {
    print_messages(&result.messages);
    if result.succeeded() { 0 } else { 1 }
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => eprintln!("{}", message.content.red()),
        }
    }
}

fn has_errors(messages: &[CmdMessage]) -> bool {
    messages.iter().any(|m| m.level == MessageLevel::Error)
}
