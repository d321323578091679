use crate::commands::{CmdMessage, CmdResult};
use crate::config::ProcessorConfig;

/// Check a configuration before any record is processed.
///
/// An invalid configuration is reported as an error message, not as `Err`,
/// so callers can show it alongside the resolved config.
pub fn run(config: &ProcessorConfig) -> CmdResult {
    let mut result = CmdResult::default().with_config(config.clone());

    match config.attribute_names() {
        Ok(names) if names.is_empty() => {
            result.add_message(CmdMessage::success("Configuration is valid"));
            result.add_message(CmdMessage::warning(
                "Attributes List names no attributes; records will pass through unchanged",
            ));
        }
        Ok(names) => {
            result.add_message(CmdMessage::success("Configuration is valid"));
            result.add_message(CmdMessage::info(format!(
                "Attributes to convert: {}",
                names
            )));
        }
        Err(e) => result.add_message(CmdMessage::error(e.to_string())),
    }

    result
}
