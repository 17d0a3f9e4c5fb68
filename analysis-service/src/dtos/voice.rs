use crate::services::voice::{CommandKind, VoiceCommand};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct VoiceCommandDto {
    pub kind: CommandKind,
    pub all_kinds: Vec<CommandKind>,
    pub numbers: Vec<f64>,
}

impl From<VoiceCommand> for VoiceCommandDto {
    fn from(command: VoiceCommand) -> Self {
        Self {
            kind: command.kind,
            all_kinds: command.all_kinds,
            numbers: command.numbers,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TranscribeResponse {
    pub text: String,
    pub language: Option<String>,
    pub command: VoiceCommandDto,
}
