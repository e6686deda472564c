use std::{path::Path, path::PathBuf, str::FromStr, time::Duration};

use ::config::{Config, Environment, File};
use serde::Deserialize;
use solana_commitment_config::CommitmentConfig;
use solana_sdk::{pubkey::Pubkey, signature::Keypair};
use tracing::debug;

use crate::{
    constants::{DEFAULT_RPC_URL, VOTEE_PROGRAM_ID},
    error::ClientError,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Commitment {
    Processed,
    #[default]
    Confirmed,
    Finalized,
}

impl From<Commitment> for CommitmentConfig {
    fn from(commitment: Commitment) -> Self {
        match commitment {
            Commitment::Processed => CommitmentConfig::processed(),
            Commitment::Confirmed => CommitmentConfig::confirmed(),
            Commitment::Finalized => CommitmentConfig::finalized(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    #[serde(default = "default_rpc_url")]
    pub rpc_url: String,

    // base58; defaults to the declared program id
    #[serde(default)]
    pub program_id: Option<String>,

    // Solana CLI style keypair file (JSON array of 64 bytes); none means read-only
    #[serde(default)]
    pub keypair: Option<PathBuf>,

    // Commitment used for reads; sends always wait for finalization
    #[serde(default)]
    pub commitment: Commitment,

    #[serde(default = "default_finalize_timeout_secs")]
    pub finalize_timeout_secs: u64,
}

fn default_rpc_url() -> String {
    DEFAULT_RPC_URL.to_string()
}

fn default_finalize_timeout_secs() -> u64 {
    60
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            rpc_url: default_rpc_url(),
            program_id: None,
            keypair: None,
            commitment: Commitment::default(),
            finalize_timeout_secs: default_finalize_timeout_secs(),
        }
    }
}

impl ClientConfig {
    /// Optional config file, overridden by VOTEE_* environment variables.
    pub fn load(config_path: Option<&Path>) -> Result<Self, ClientError> {
        let mut builder = Config::builder();
        if let Some(path) = config_path {
            debug!("Reading config from path {:?}", path);
            builder = builder.add_source(File::from(path));
        }

        let config = builder
            .add_source(Environment::with_prefix("VOTEE").try_parsing(true))
            .build()?;

        Ok(config.try_deserialize()?)
    }

    pub fn program_id(&self) -> Result<Pubkey, ClientError> {
        match &self.program_id {
            Some(id) => {
                Pubkey::from_str(id).map_err(|_| ClientError::InvalidAddress(id.clone()))
            }
            None => Ok(VOTEE_PROGRAM_ID),
        }
    }

    pub fn finalize_timeout(&self) -> Duration {
        Duration::from_secs(self.finalize_timeout_secs)
    }

    pub fn load_keypair(&self) -> Result<Option<Keypair>, ClientError> {
        self.keypair.as_deref().map(read_keypair).transpose()
    }
}

pub fn read_keypair(path: &Path) -> Result<Keypair, ClientError> {
    let keypair_error = |reason: String| ClientError::Keypair {
        path: path.display().to_string(),
        reason,
    };

    let contents = std::fs::read_to_string(path).map_err(|err| keypair_error(err.to_string()))?;
    let bytes: Vec<u8> =
        serde_json::from_str(&contents).map_err(|err| keypair_error(err.to_string()))?;

    Keypair::try_from(bytes.as_slice()).map_err(|err| keypair_error(err.to_string()))
}
