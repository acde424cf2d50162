use serde::Serialize;

/// Which form the kiosk front end is showing. Independent of stored data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FlowMode {
    #[default]
    Registering,
    LoggingIn,
}

impl FlowMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::Registering => Self::LoggingIn,
            Self::LoggingIn => Self::Registering,
        }
    }
}
