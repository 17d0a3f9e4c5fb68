//! Voice command classification over transcribed text.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

static NUMBER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d+(?:\.\d+)?").expect("invalid number regex"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CommandKind {
    Measurement,
    Material,
    Navigation,
    Action,
    Modification,
    General,
}

const COMMAND_KEYWORDS: &[(CommandKind, &[&str])] = &[
    (
        CommandKind::Measurement,
        &[
            "measure", "dimension", "size", "length", "width", "height", "feet", "inches",
        ],
    ),
    (
        CommandKind::Material,
        &[
            "wood", "composite", "lumber", "railing", "decking", "joist", "beam",
        ],
    ),
    (
        CommandKind::Navigation,
        &["next", "previous", "back", "forward", "stage", "step"],
    ),
    (
        CommandKind::Action,
        &[
            "calculate", "analyze", "show", "display", "generate", "create",
        ],
    ),
    (
        CommandKind::Modification,
        &["change", "modify", "adjust", "update", "edit", "move"],
    ),
];

#[derive(Debug, Clone, Serialize)]
pub struct VoiceCommand {
    pub kind: CommandKind,
    pub all_kinds: Vec<CommandKind>,
    pub numbers: Vec<f64>,
}

/// Bucket a transcribed utterance into deck-design command kinds and pull out
/// any numeric tokens (candidate measurements).
pub fn classify_command(text: &str) -> VoiceCommand {
    let lower = text.to_lowercase();

    let all_kinds: Vec<CommandKind> = COMMAND_KEYWORDS
        .iter()
        .filter(|(_, keywords)| keywords.iter().any(|k| lower.contains(k)))
        .map(|(kind, _)| *kind)
        .collect();

    let numbers = NUMBER_RE
        .find_iter(text)
        .filter_map(|m| m.as_str().parse().ok())
        .collect();

    VoiceCommand {
        kind: all_kinds.first().copied().unwrap_or(CommandKind::General),
        all_kinds,
        numbers,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_measurement_commands() {
        let command = classify_command("Measure the deck, 12 by 16 feet");
        assert_eq!(command.kind, CommandKind::Measurement);
        assert_eq!(command.numbers, vec![12.0, 16.0]);
    }

    #[test]
    fn detects_multiple_kinds_in_priority_order() {
        let command = classify_command("calculate the composite railing length");
        assert_eq!(command.kind, CommandKind::Measurement);
        assert!(command.all_kinds.contains(&CommandKind::Material));
        assert!(command.all_kinds.contains(&CommandKind::Action));
    }

    #[test]
    fn unmatched_text_is_general() {
        let command = classify_command("hello there");
        assert_eq!(command.kind, CommandKind::General);
        assert!(command.all_kinds.is_empty());
        assert!(command.numbers.is_empty());
    }
}
