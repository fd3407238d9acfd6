//! Object identifiers and name hashing

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Identifier of an engine object.
///
/// Objects are owned by the host; everything in the area trigger crates
/// refers to them through this copyable id.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ObjectId(u64);

impl ObjectId {
    /// Create an id from raw bits
    #[inline]
    pub const fn from_raw(bits: u64) -> Self {
        Self(bits)
    }

    /// Create a null/invalid id
    #[inline]
    pub const fn null() -> Self {
        Self(u64::MAX)
    }

    /// Check if this id is null
    #[inline]
    pub const fn is_null(&self) -> bool {
        self.0 == u64::MAX
    }

    /// Get the raw bits
    #[inline]
    pub const fn to_raw(&self) -> u64 {
        self.0
    }

    /// Raw bits widened for physics user data
    #[inline]
    pub const fn to_user_data(&self) -> u128 {
        self.0 as u128
    }

    /// Recover an id stored in physics user data
    #[inline]
    pub const fn from_user_data(data: u128) -> Self {
        Self(data as u64)
    }
}

impl Default for ObjectId {
    fn default() -> Self {
        Self::null()
    }
}

impl fmt::Debug for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_null() {
            write!(f, "ObjectId(null)")
        } else {
            write!(f, "ObjectId({})", self.0)
        }
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_null() {
            write!(f, "null")
        } else {
            write!(f, "#{}", self.0)
        }
    }
}

/// Thread-safe object id generator
pub struct IdGenerator {
    next: AtomicU64,
}

impl IdGenerator {
    /// Create a new generator starting at zero
    pub const fn new() -> Self {
        Self {
            next: AtomicU64::new(0),
        }
    }

    /// Generate the next unique id
    pub fn next(&self) -> ObjectId {
        ObjectId(self.next.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// 32-bit FNV-1 hash of a name, lowercased first.
///
/// Audio middleware derives its short event ids this way, so names that
/// differ only in ASCII case share an id.
pub fn fnv1_32(name: &str) -> u32 {
    let mut hash = 0x811c_9dc5u32;
    for byte in name.bytes() {
        hash = hash.wrapping_mul(0x0100_0193);
        hash ^= byte.to_ascii_lowercase() as u32;
    }
    hash
}
