use std::fmt;

use serde::Serialize;

/// Position of a request in the handler's linear state machine
///
/// `Validating → Synthesizing → Writing → Uploading → UpdatingStatus → Done`;
/// a failure in any stage ends in `Failed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Validating,
    Synthesizing,
    Writing,
    Uploading,
    UpdatingStatus,
    Done,
    Failed,
}

impl Stage {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Validating => "validating",
            Self::Synthesizing => "synthesizing",
            Self::Writing => "writing",
            Self::Uploading => "uploading",
            Self::UpdatingStatus => "updating_status",
            Self::Done => "done",
            Self::Failed => "failed",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
