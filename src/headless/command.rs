//! Line commands accepted on stdin in headless mode
//!
//! ```text
//! start <panel> <profile-id>
//! inject <panel>
//! clear <panel>
//! list
//! quit
//! ```

use pdeck_app::message::Message;
use pdeck_app::panel::PanelId;
use pdeck_core::prelude::*;

/// Parse one stdin line. Blank lines yield `Ok(None)`.
pub fn parse_command(line: &str) -> Result<Option<Message>> {
    let mut words = line.split_whitespace();
    let Some(verb) = words.next() else {
        return Ok(None);
    };

    let message = match verb {
        "start" | "run" => {
            let panel = panel_arg(words.next())?;
            // Profile ids never contain whitespace; anything after is ignored
            let profile_id = words
                .next()
                .ok_or_else(|| Error::validation("usage: start <panel> <profile-id>"))?;
            Message::RequestStart {
                panel,
                profile_id: profile_id.to_string(),
            }
        }
        "inject" => Message::RequestInject {
            panel: panel_arg(words.next())?,
        },
        "clear" => Message::ClearLog {
            panel: panel_arg(words.next())?,
        },
        "list" | "ls" => Message::RequestRemoteList,
        "q" | "quit" | "exit" => Message::Quit,
        other => return Err(Error::validation(format!("unknown command: {}", other))),
    };

    Ok(Some(message))
}

/// 1-based panel number on the wire, 0-based index inside
fn panel_arg(arg: Option<&str>) -> Result<PanelId> {
    let raw = arg.ok_or_else(|| Error::validation("missing panel number"))?;
    match raw.parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n - 1),
        _ => Err(Error::validation(format!(
            "invalid panel number: {} (panels start at 1)",
            raw
        ))),
    }
}
