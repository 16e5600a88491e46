//! Command resolution.
//!
//! An exact name match wins outright. Otherwise every command whose name
//! followed by a space prefixes the message is a candidate and the longest
//! name wins. A candidate is skipped when the message continues with
//! `set `, which keeps `rules set …` away from a plain `rules` command.

use crate::command::{Command, MatchedCommand};
use crate::error::MatchError;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Delimiter between a command name and its arguments.
pub const COMMAND_DELIMITER: &str = " ";

/// Reserved sub-command word protected from shorter prefix matches.
const RESERVED_SUBCOMMAND: &str = "set";

pub(crate) fn resolve(
    commands: &BTreeMap<String, Arc<Command>>,
    body: &str,
) -> Result<MatchedCommand, MatchError> {
    if let Some(command) = commands.get(body) {
        return Ok(MatchedCommand {
            command: Arc::clone(command),
            arg: String::new(),
        });
    }

    commands
        .iter()
        .filter_map(|(name, command)| {
            let rest = body
                .strip_prefix(name.as_str())?
                .strip_prefix(COMMAND_DELIMITER)?;

            if is_reserved_subcommand(rest) {
                return None;
            }

            Some((name.len(), command, rest))
        })
        .max_by_key(|(len, _, _)| *len)
        .map(|(_, command, rest)| MatchedCommand {
            command: Arc::clone(command),
            arg: rest.trim().to_string(),
        })
        .ok_or(MatchError::CommandNotFound)
}

fn is_reserved_subcommand(rest: &str) -> bool {
    rest.strip_prefix(RESERVED_SUBCOMMAND)
        .is_some_and(|after| after.starts_with(COMMAND_DELIMITER))
}

#[cfg(test)]
mod tests {
    use crate::context::Context;
    use crate::error::MatchError;
    use crate::registry::CommandRegistry;

    async fn noop(_ctx: Context) -> anyhow::Result<()> {
        Ok(())
    }

    fn registry(names: &[&str]) -> CommandRegistry {
        let mut registry = CommandRegistry::default();
        for name in names {
            registry.register(name, noop, []).unwrap();
        }
        registry
    }

    #[test]
    fn test_exact_match_has_empty_arg() {
        let matched = registry(&["help"]).find("help").unwrap();
        assert_eq!(matched.name(), "help");
        assert_eq!(matched.arg, "");
    }

    #[test]
    fn test_prefix_match_extracts_arg() {
        let matched = registry(&["roll"]).find("roll 2d6  +3 ").unwrap();
        assert_eq!(matched.name(), "roll");
        assert_eq!(matched.arg, "2d6  +3");
    }

    #[test]
    fn test_trailing_delimiter_only() {
        let matched = registry(&["help"]).find("help ").unwrap();
        assert_eq!(matched.name(), "help");
        assert_eq!(matched.arg, "");
    }

    #[test]
    fn test_no_prefix_match_without_delimiter() {
        let err = registry(&["help"]).find("helper").unwrap_err();
        assert_eq!(err, MatchError::CommandNotFound);
    }

    #[test]
    fn test_not_found() {
        assert_eq!(
            registry(&["help", "ping"]).find("status now").unwrap_err(),
            MatchError::CommandNotFound
        );
        assert_eq!(
            registry(&["help"]).find("").unwrap_err(),
            MatchError::CommandNotFound
        );
    }

    #[test]
    fn test_set_subcommand_prefers_longer_name() {
        let registry = registry(&["rules", "rules set"]);

        let matched = registry.find("rules set budget").unwrap();
        assert_eq!(matched.name(), "rules set");
        assert_eq!(matched.arg, "budget");

        let matched = registry.find("rules show").unwrap();
        assert_eq!(matched.name(), "rules");
        assert_eq!(matched.arg, "show");
    }

    #[test]
    fn test_set_subcommand_never_falls_back_to_shorter_name() {
        let err = registry(&["rules"]).find("rules set budget").unwrap_err();
        assert_eq!(err, MatchError::CommandNotFound);
    }

    #[test]
    fn test_set_as_plain_argument() {
        let matched = registry(&["rules"]).find("rules set").unwrap();
        assert_eq!(matched.name(), "rules");
        assert_eq!(matched.arg, "set");

        let matched = registry(&["rules"]).find("rules settings").unwrap();
        assert_eq!(matched.arg, "settings");
    }

    #[test]
    fn test_longest_prefix_wins_regardless_of_registration_order() {
        for names in [&["git", "git log"][..], &["git log", "git"][..]] {
            let matched = registry(names).find("git log --oneline").unwrap();
            assert_eq!(matched.name(), "git log");
            assert_eq!(matched.arg, "--oneline");
        }
    }

    #[test]
    fn test_exact_match_beats_prefix() {
        let matched = registry(&["git", "git log"]).find("git log").unwrap();
        assert_eq!(matched.name(), "git log");
        assert_eq!(matched.arg, "");
    }
}
