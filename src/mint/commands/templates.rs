use crate::commands::{CmdMessage, CmdResult};
use crate::config::Template;

pub const TEMPLATES: [Template; 2] = [Template::JavaScript, Template::TypeScript];

pub fn run() -> CmdResult {
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::info("Available templates:"));
    for template in TEMPLATES {
        result.add_message(CmdMessage::info(format!(
            "  {}",
            template.display_name().to_lowercase()
        )));
    }
    result
}
