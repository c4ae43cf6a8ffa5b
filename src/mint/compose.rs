//! Pure content builders for every generated artifact.
//!
//! Nothing in this module touches the filesystem; given the same inputs these
//! functions always produce the same bytes, which keeps the project writer
//! trivially testable.

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// On-disk shape of `Project.mint.json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProjectManifest {
    pub name: String,
    pub author: String,
    pub version: String,
    pub assets: String,
    #[serde(rename = "type")]
    pub type_code: u32,
}

/// Render the manifest for the given project properties.
pub fn manifest(
    name: &str,
    author: &str,
    version: &str,
    assets: &str,
    type_code: u32,
) -> Result<String> {
    let manifest = ProjectManifest {
        name: name.to_string(),
        author: author.to_string(),
        version: version.to_string(),
        assets: assets.to_string(),
        type_code,
    };
    let mut content = serde_json::to_string_pretty(&manifest)?;
    content.push('\n');
    Ok(content)
}

pub fn makefile() -> &'static str {
    "\
MINT ?= mint

.PHONY: install build start clean

install:
\t$(MINT) install

build:
\t$(MINT) build

start:
\t$(MINT) start

clean:
\trm -rf dist
"
}

/// Hello-world stub shared by both templates.
pub fn base_stub() -> &'static str {
    "\
function main() {
    console.log(\"Hello from Mint!\");
}

main();
"
}

/// Base64 payload of the default project icon (a 1x1 PNG).
pub fn icon_base64() -> &'static str {
    "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mNkYPhfDwAChwGA60e6kgAAAABJRU5ErkJggg=="
}
