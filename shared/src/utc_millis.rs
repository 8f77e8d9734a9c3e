use chrono::DateTime;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{Display, Formatter};

/// Value object holding a UTC timestamp in milliseconds. Serializes to a bare
/// u64 and prints as a readable UTC datetime.
#[derive(Clone, Copy, Debug, Eq, PartialEq, PartialOrd, Ord)]
pub struct UtcMillis {
    millis: u64,
}

impl UtcMillis {
    pub fn now() -> Self {
        UtcMillis {
            millis: chrono::Utc::now().timestamp_millis() as u64,
        }
    }

    pub fn get(&self) -> u64 {
        self.millis
    }
}

impl From<u64> for UtcMillis {
    fn from(millis: u64) -> Self {
        UtcMillis { millis }
    }
}

impl Display for UtcMillis {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let secs = self.millis as i64 / 1_000;
        let nanos = (self.millis % 1_000) as u32 * 1_000_000;
        match DateTime::from_timestamp(secs, nanos) {
            Some(d) => write!(f, "{}", d),
            None => write!(f, "{}ms", self.millis),
        }
    }
}

impl<'de> Deserialize<'de> for UtcMillis {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let millis = u64::deserialize(deserializer)?;
        Ok(UtcMillis { millis })
    }
}

impl Serialize for UtcMillis {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(self.millis)
    }
}
