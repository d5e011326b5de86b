//! Item ID - 64-bit time-ordered unique identifier
//!
//! Structure:
//! - Bits 63-22: Timestamp (milliseconds since custom epoch)
//! - Bits 21-14: Node ID (0-255, random per generator by default)
//! - Bits 13-0:  Sequence number (0-16383)

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

const NODE_BITS: u32 = 8;
const SEQUENCE_BITS: u32 = 14;
const SEQUENCE_MASK: i64 = (1 << SEQUENCE_BITS) - 1;
const NODE_MASK: i64 = (1 << NODE_BITS) - 1;

/// Time-ordered 64-bit item identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ItemId(i64);

impl ItemId {
    /// Custom epoch: 2025-01-01 00:00:00 UTC (milliseconds)
    pub const EPOCH: i64 = 1_735_689_600_000;

    /// Create an ItemId from a raw i64 value
    #[inline]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the inner i64 value
    #[inline]
    pub const fn into_inner(self) -> i64 {
        self.0
    }

    /// Check if the id is nil (zero, never produced by a generator)
    #[inline]
    pub const fn is_nil(&self) -> bool {
        self.0 == 0
    }

    /// Extract the timestamp (milliseconds since Unix epoch)
    #[inline]
    pub fn timestamp(&self) -> i64 {
        (self.0 >> (NODE_BITS + SEQUENCE_BITS)) + Self::EPOCH
    }

    /// Extract the node id (0-255)
    #[inline]
    pub fn node(&self) -> u8 {
        ((self.0 >> SEQUENCE_BITS) & NODE_MASK) as u8
    }

    /// Extract the sequence number (0-16383)
    #[inline]
    pub fn sequence(&self) -> u16 {
        (self.0 & SEQUENCE_MASK) as u16
    }

    /// Convert the embedded timestamp to a DateTime<Utc>
    pub fn created_at(&self) -> chrono::DateTime<chrono::Utc> {
        use chrono::{TimeZone, Utc};
        Utc.timestamp_millis_opt(self.timestamp())
            .single()
            .unwrap_or_default()
    }

    /// Parse from the decimal string representation
    pub fn parse(s: &str) -> Result<Self, ParseItemIdError> {
        s.parse::<i64>()
            .map(ItemId)
            .map_err(|_| ParseItemIdError::InvalidFormat)
    }
}

/// Error when parsing an ItemId from a string
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ParseItemIdError {
    #[error("invalid item id format")]
    InvalidFormat,
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for ItemId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<ItemId> for i64 {
    fn from(id: ItemId) -> Self {
        id.0
    }
}

impl std::str::FromStr for ItemId {
    type Err = ParseItemIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ItemId::parse(s)
    }
}

// Serialize as string for JSON (JavaScript BigInt safety)
impl Serialize for ItemId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0.to_string())
    }
}

// Deserialize from string or integer
impl<'de> Deserialize<'de> for ItemId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Int(i64),
            Str(String),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Int(id) => Ok(ItemId(id)),
            Repr::Str(s) => {
                ItemId::parse(&s).map_err(|_| serde::de::Error::custom("invalid item id string"))
            }
        }
    }
}

/// Thread-safe, collision-resistant ItemId generator
///
/// Packs the last-issued (timestamp, sequence) pair into a single atomic
/// word; ids from one generator are strictly increasing. The node byte
/// separates generators running in different processes.
pub struct IdGenerator {
    node: u8,
    state: AtomicI64,
}

impl IdGenerator {
    /// Create a generator with a fixed node id
    pub fn new(node: u8) -> Self {
        Self {
            node,
            state: AtomicI64::new(0),
        }
    }

    /// Create a generator with a random node id
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// Generate a new unique ItemId
    pub fn generate(&self) -> ItemId {
        loop {
            let now = Self::millis_since_epoch();
            let state = self.state.load(Ordering::Acquire);
            let last = state >> SEQUENCE_BITS;
            let seq = state & SEQUENCE_MASK;

            // If the clock reads earlier than the last issued timestamp
            // (backwards step), keep issuing against the last one instead of
            // blocking until the clock catches up.
            let (ts, next_seq) = if now > last {
                (now, 0)
            } else if seq < SEQUENCE_MASK {
                (last, seq + 1)
            } else {
                // Sequence exhausted within this millisecond; borrow the next one.
                (last + 1, 0)
            };

            let next_state = (ts << SEQUENCE_BITS) | next_seq;
            if self
                .state
                .compare_exchange(state, next_state, Ordering::AcqRel, Ordering::Acquire)
                .is_ok()
            {
                let id = (ts << (NODE_BITS + SEQUENCE_BITS))
                    | (i64::from(self.node) << SEQUENCE_BITS)
                    | next_seq;
                return ItemId::new(id);
            }
        }
    }

    /// Get the node id of this generator
    pub fn node(&self) -> u8 {
        self.node
    }

    #[inline]
    fn millis_since_epoch() -> i64 {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as i64)
            .unwrap_or(0);
        (now - ItemId::EPOCH).max(1)
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::from_entropy()
    }
}
