//! Transactions stored at the leaves of a merkle tree

use super::Hash;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A wallet identifier: the 32 raw bytes of the wallet's public key
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct PublicKey([u8; 32]);

impl PublicKey {
    /// Create a key from raw bytes
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        PublicKey(bytes)
    }

    /// Get the raw bytes
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Convert to hex string
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl FromStr for PublicKey {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        let bytes = hex::decode(s)
            .map_err(|e| crate::Error::InvalidKey(format!("{}: {}", s, e)))?;
        let arr: [u8; 32] = bytes
            .try_into()
            .map_err(|_| crate::Error::InvalidKey(format!("{}: expected 32 bytes", s)))?;
        Ok(PublicKey(arr))
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublicKey({})", &self.to_hex()[..7])
    }
}

impl Serialize for PublicKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for PublicKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// The staking wallet that receives locked stake.
///
/// Passed explicitly to whatever issues staking transactions; usually
/// obtained from [`crate::Config::staking`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StakingConfig {
    pub wallet: PublicKey,
}

impl StakingConfig {
    pub fn new(wallet: PublicKey) -> Self {
        StakingConfig { wallet }
    }
}

/// A value transfer between two wallets
///
/// Transactions are content-addressed: [`Transaction::hash`] is the digest of
/// the canonical (bincode) encoding of every field, signature included.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Paying wallet
    pub source: PublicKey,
    /// Receiving wallet
    pub destination: PublicKey,
    /// Transferred amount, in minor units
    pub amount: u64,
    /// Fee offered to the block producer, in minor units
    #[serde(default)]
    pub tip: u64,
    /// Signature over the transfer by the source wallet
    #[serde(with = "hex_bytes", default)]
    pub signature: Vec<u8>,
}

impl Transaction {
    pub fn new(
        source: PublicKey,
        destination: PublicKey,
        amount: u64,
        tip: u64,
        signature: Vec<u8>,
    ) -> Self {
        Transaction {
            source,
            destination,
            amount,
            tip,
            signature,
        }
    }

    /// Create a transaction that locks `amount` in the staking wallet
    pub fn staking(
        staking: &StakingConfig,
        source: PublicKey,
        amount: u64,
        tip: u64,
        signature: Vec<u8>,
    ) -> Self {
        Self::new(source, staking.wallet, amount, tip, signature)
    }

    /// Whether this transaction pays into the given staking wallet
    pub fn is_staking(&self, staking: &StakingConfig) -> bool {
        self.destination == staking.wallet
    }

    /// Canonical content hash; this is the leaf hash in a merkle tree
    pub fn hash(&self) -> Hash {
        let data = bincode::serialize(self).expect("serialization should not fail");
        Hash::digest(&data)
    }
}

mod hex_bytes {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&hex::encode(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let s = String::deserialize(deserializer)?;
        hex::decode(s).map_err(serde::de::Error::custom)
    }
}
