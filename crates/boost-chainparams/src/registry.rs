//! Network selection.
//!
//! All three networks are built and verified eagerly. A registry binds at most
//! one active network for its lifetime; the process-wide handle stores one
//! registry in a `OnceLock` and hands out `&'static` borrows.

use std::sync::OnceLock;

use boost_crypto::HashProvider;
use log::{debug, error, info, warn};

use crate::deployment::DeploymentPos;
use crate::error::{ChainParamsError, ErrorCode};
use crate::network::{main_params, regtest_params, test_params, Network, NetworkParams};

#[derive(Debug)]
pub struct NetworkRegistry {
    networks: [NetworkParams; 3],
    active: OnceLock<Network>,
}

impl NetworkRegistry {
    /// Build and verify all three networks. The provider must compute the
    /// consensus header hash; anything else cannot vouch for the genesis
    /// anchors and is refused.
    pub fn build(provider: &dyn HashProvider) -> Result<Self, ChainParamsError> {
        if !provider.is_consensus_header_hash() {
            error!("refusing to build chain params: provider cannot check genesis hashes");
            return Err(ChainParamsError::new(
                ErrorCode::FatalGenesisMismatch,
                "genesis hashes unverifiable: provider is not the consensus header hash",
            ));
        }
        Self::build_with(provider)
    }

    /// Build with a development provider. Genesis hashes are taken from the
    /// recorded anchors without being recomputed; only the regtest merkle
    /// root is checked. For tests and dev tooling.
    pub fn build_unverified(provider: &dyn HashProvider) -> Result<Self, ChainParamsError> {
        warn!("building chain params without genesis hash verification");
        Self::build_with(provider)
    }

    fn build_with(provider: &dyn HashProvider) -> Result<Self, ChainParamsError> {
        let networks = [
            main_params(provider)?,
            test_params(provider)?,
            regtest_params(provider)?,
        ];
        debug!("chain params registry built");
        Ok(Self {
            networks,
            active: OnceLock::new(),
        })
    }

    pub fn params(&self, network: Network) -> &NetworkParams {
        &self.networks[network.index()]
    }

    pub fn params_for_key(&self, key: &str) -> Result<&NetworkParams, ChainParamsError> {
        Ok(self.params(key.parse()?))
    }

    /// Bind the active network. The binding is permanent: selecting the same
    /// network again is a no-op, selecting another one fails.
    pub fn select(&self, key: &str) -> Result<&NetworkParams, ChainParamsError> {
        let wanted: Network = key.parse()?;
        let bound = *self.active.get_or_init(|| {
            info!("active network: {wanted}");
            wanted
        });
        if bound != wanted {
            return Err(ChainParamsError::new(
                ErrorCode::AlreadySelected,
                format!("network already selected: {bound}, refusing {wanted}"),
            ));
        }
        debug!("select({key}) ok");
        Ok(self.params(bound))
    }

    pub fn selected(&self) -> Option<Network> {
        self.active.get().copied()
    }

    pub fn try_active(&self) -> Result<&NetworkParams, ChainParamsError> {
        match self.active.get() {
            Some(network) => Ok(self.params(*network)),
            None => Err(ChainParamsError::new(
                ErrorCode::FatalUnselected,
                "no network selected",
            )),
        }
    }

    /// # Panics
    ///
    /// Panics if no network has been selected.
    pub fn active(&self) -> &NetworkParams {
        match self.try_active() {
            Ok(params) => params,
            Err(e) => panic!("{e}"),
        }
    }

    /// Move one regtest deployment window. Only reachable while the registry
    /// is exclusively owned, i.e. before it is shared or installed.
    pub fn update_regtest_deployment(
        &mut self,
        pos: DeploymentPos,
        start_time: i64,
        timeout: i64,
    ) -> Result<(), ChainParamsError> {
        self.networks[Network::Regtest.index()]
            .consensus
            .deployments
            .set_window(pos, start_time, timeout)?;
        debug!(
            "regtest deployment {} window [{start_time}, {timeout}]",
            pos.name()
        );
        Ok(())
    }
}

static GLOBAL: OnceLock<NetworkRegistry> = OnceLock::new();

/// Install the process-wide registry. Succeeds once.
pub fn install_global(
    registry: NetworkRegistry,
) -> Result<&'static NetworkRegistry, ChainParamsError> {
    if GLOBAL.set(registry).is_err() {
        return Err(ChainParamsError::new(
            ErrorCode::AlreadyInstalled,
            "chain params registry already installed",
        ));
    }
    match GLOBAL.get() {
        Some(registry) => Ok(registry),
        None => unreachable!("registry set above"),
    }
}

pub fn global() -> Option<&'static NetworkRegistry> {
    GLOBAL.get()
}

pub fn select_params(key: &str) -> Result<&'static NetworkParams, ChainParamsError> {
    match GLOBAL.get() {
        Some(registry) => registry.select(key),
        None => Err(ChainParamsError::new(
            ErrorCode::FatalUnselected,
            "chain params registry not installed",
        )),
    }
}

/// Active parameters of the process-wide registry.
///
/// # Panics
///
/// Panics if no registry is installed or no network has been selected.
pub fn params() -> &'static NetworkParams {
    match GLOBAL.get() {
        Some(registry) => registry.active(),
        None => panic!(
            "{}",
            ChainParamsError::new(
                ErrorCode::FatalUnselected,
                "chain params registry not installed"
            )
        ),
    }
}
