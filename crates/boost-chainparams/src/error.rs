use core::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorCode {
    FatalGenesisMismatch,
    FatalUnselected,
    UnknownNetwork,
    AlreadySelected,
    AlreadyInstalled,
    InvalidCheckpoints,
    InvalidDeploymentWindow,
    InvalidHex,
    InvalidTarget,
    HashProvider,
}

impl ErrorCode {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::FatalGenesisMismatch => "FATAL_GENESIS_MISMATCH",
            ErrorCode::FatalUnselected => "FATAL_UNSELECTED",
            ErrorCode::UnknownNetwork => "UNKNOWN_NETWORK",
            ErrorCode::AlreadySelected => "ALREADY_SELECTED",
            ErrorCode::AlreadyInstalled => "ALREADY_INSTALLED",
            ErrorCode::InvalidCheckpoints => "INVALID_CHECKPOINTS",
            ErrorCode::InvalidDeploymentWindow => "INVALID_DEPLOYMENT_WINDOW",
            ErrorCode::InvalidHex => "INVALID_HEX",
            ErrorCode::InvalidTarget => "INVALID_TARGET",
            ErrorCode::HashProvider => "HASH_PROVIDER",
        }
    }

    /// Fatal codes mean a corrupted build or a logic error. They are never
    /// retried and must stop startup.
    pub fn is_fatal(self) -> bool {
        matches!(
            self,
            ErrorCode::FatalGenesisMismatch
                | ErrorCode::FatalUnselected
                | ErrorCode::InvalidCheckpoints
                | ErrorCode::HashProvider
        )
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChainParamsError {
    pub code: ErrorCode,
    pub msg: String,
}

impl ChainParamsError {
    pub fn new(code: ErrorCode, msg: impl Into<String>) -> Self {
        Self {
            code,
            msg: msg.into(),
        }
    }

    pub fn is_fatal(&self) -> bool {
        self.code.is_fatal()
    }
}

impl fmt::Display for ChainParamsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.msg.is_empty() {
            write!(f, "{}", self.code.as_str())
        } else {
            write!(f, "{}: {}", self.code.as_str(), self.msg)
        }
    }
}

impl std::error::Error for ChainParamsError {}
