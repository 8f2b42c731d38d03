//! Version-bit deployment windows.
//!
//! Only the parameters are owned here. The activation state machine that
//! counts signalling blocks inside a window lives with the validation engine.

use crate::error::{ChainParamsError, ErrorCode};

/// `timeout` of a slot that is eligible from the epoch onwards.
pub const ALWAYS_ELIGIBLE_TIMEOUT: i64 = 999_999_999_999;

pub const MAX_DEPLOYMENTS: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DeploymentPos {
    TestDummy = 0,
    /// BIP68, BIP112 and BIP113.
    Csv = 1,
    /// BIP141, BIP143 and BIP147.
    Segwit = 2,
}

impl DeploymentPos {
    pub const ALL: [DeploymentPos; MAX_DEPLOYMENTS] =
        [DeploymentPos::TestDummy, DeploymentPos::Csv, DeploymentPos::Segwit];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            DeploymentPos::TestDummy => "testdummy",
            DeploymentPos::Csv => "csv",
            DeploymentPos::Segwit => "segwit",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.name() == name)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Deployment {
    pub bit: u8,
    pub start_time: i64,
    pub timeout: i64,
}

impl Deployment {
    pub const fn new(bit: u8, start_time: i64, timeout: i64) -> Self {
        Self {
            bit,
            start_time,
            timeout,
        }
    }

    pub const fn always_eligible(bit: u8) -> Self {
        Self::new(bit, 0, ALWAYS_ELIGIBLE_TIMEOUT)
    }

    pub fn is_always_eligible(&self) -> bool {
        self.start_time == 0 && self.timeout == ALWAYS_ELIGIBLE_TIMEOUT
    }

    /// A zero-valued slot is an unused deployment.
    pub fn is_inactive(&self) -> bool {
        *self == Deployment::default()
    }

    /// Zero for a bit outside the 32-bit version field.
    pub fn version_mask(&self) -> u32 {
        1u32.checked_shl(self.bit.into()).unwrap_or(0)
    }

    fn check(&self) -> Result<(), ChainParamsError> {
        if self.bit > 31 {
            return Err(ChainParamsError::new(
                ErrorCode::InvalidDeploymentWindow,
                format!("deployment: bit out of range: {}", self.bit),
            ));
        }
        if self.start_time > self.timeout {
            return Err(ChainParamsError::new(
                ErrorCode::InvalidDeploymentWindow,
                format!(
                    "deployment: start_time {} > timeout {}",
                    self.start_time, self.timeout
                ),
            ));
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeploymentTable {
    slots: [Deployment; MAX_DEPLOYMENTS],
}

impl DeploymentTable {
    pub fn new(slots: [Deployment; MAX_DEPLOYMENTS]) -> Result<Self, ChainParamsError> {
        for (pos, slot) in DeploymentPos::ALL.iter().zip(slots.iter()) {
            slot.check().map_err(|e| {
                ChainParamsError::new(e.code, format!("{}: {}", pos.name(), e.msg))
            })?;
        }
        Ok(Self { slots })
    }

    pub fn get(&self, pos: DeploymentPos) -> &Deployment {
        &self.slots[pos.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (DeploymentPos, &Deployment)> {
        DeploymentPos::ALL.into_iter().zip(self.slots.iter())
    }

    /// Move one deployment's window. Reachable only through the regtest
    /// registry mutator.
    pub(crate) fn set_window(
        &mut self,
        pos: DeploymentPos,
        start_time: i64,
        timeout: i64,
    ) -> Result<(), ChainParamsError> {
        let updated = Deployment {
            start_time,
            timeout,
            ..self.slots[pos.index()]
        };
        updated.check()?;
        self.slots[pos.index()] = updated;
        Ok(())
    }
}
