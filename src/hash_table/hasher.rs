use siphasher::sip::SipHasher;
use std::hash::{Hash, Hasher};

/// Knuth's multiplicative hashing constant, `2^32 / phi`.
pub const KNUTH_MULTIPLIER: u64 = 2_654_435_761;

/// Multiplier of the polynomial rolling hash used for text keys.
pub const POLYNOMIAL_BASE: u32 = 31;

/// A key that can pick its own slot in a `ChainedHashMap`.
///
/// The slot of a key is `slot_hash() % slot_count`. Integers use multiplicative hashing, text uses
/// a polynomial rolling hash, and any other `Hash` type can be wrapped in `Hashed`.
pub trait SlotHash {
    fn slot_hash(&self) -> u64;
}

macro_rules! impl_narrow_int_slot_hash {
    ($($ty:ty)*) => {
        $(
            impl SlotHash for $ty {
                #[inline]
                fn slot_hash(&self) -> u64 {
                    u64::from(*self as u32) * KNUTH_MULTIPLIER
                }
            }
        )*
    }
}

macro_rules! impl_wide_int_slot_hash {
    ($($ty:ty)*) => {
        $(
            impl SlotHash for $ty {
                #[inline]
                fn slot_hash(&self) -> u64 {
                    (*self as u64).wrapping_mul(KNUTH_MULTIPLIER)
                }
            }
        )*
    }
}

impl_narrow_int_slot_hash!(i8 i16 i32 u8 u16 u32);
impl_wide_int_slot_hash!(i64 u64 isize usize);

impl SlotHash for str {
    #[inline]
    fn slot_hash(&self) -> u64 {
        // Bytes are added as signed 8-bit values.
        let hash = self.bytes().fold(0u32, |hash, byte| {
            hash.wrapping_mul(POLYNOMIAL_BASE).wrapping_add(byte as i8 as u32)
        });
        u64::from(hash)
    }
}

impl SlotHash for String {
    #[inline]
    fn slot_hash(&self) -> u64 {
        self.as_str().slot_hash()
    }
}

impl<'a, T> SlotHash for &'a T
where
    T: SlotHash + ?Sized,
{
    #[inline]
    fn slot_hash(&self) -> u64 {
        (**self).slot_hash()
    }
}

/// A wrapper that gives any `Hash` type a slot hash through SipHash. The full 64-bit digest is
/// kept so the slot index is never computed from a truncated or negative value.
///
/// # Examples
///
/// ```
/// use dictionaries::hash_table::{ChainedHashMap, Hashed};
///
/// let mut map = ChainedHashMap::new();
/// map.insert(Hashed((1, 'a')), "tuple");
/// assert_eq!(map.get(&Hashed((1, 'a'))), Some(&"tuple"));
/// ```
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Hashed<T>(pub T);

impl<T> SlotHash for Hashed<T>
where
    T: Hash,
{
    fn slot_hash(&self) -> u64 {
        let mut hasher = SipHasher::new();
        self.0.hash(&mut hasher);
        hasher.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::{Hashed, SlotHash, KNUTH_MULTIPLIER};

    #[test]
    fn test_int_hash_is_multiplicative() {
        assert_eq!(0i32.slot_hash(), 0);
        assert_eq!(1i32.slot_hash(), KNUTH_MULTIPLIER);
        assert_eq!(3u64.slot_hash(), 3 * KNUTH_MULTIPLIER);
    }

    #[test]
    fn test_negative_int_hashes_through_unsigned_bits() {
        assert_eq!((-1i32).slot_hash(), u64::from(u32::max_value()) * KNUTH_MULTIPLIER);
    }

    #[test]
    fn test_string_hash_is_polynomial() {
        assert_eq!("".slot_hash(), 0);
        assert_eq!("a".slot_hash(), 97);
        assert_eq!("ab".slot_hash(), 97 * 31 + 98);
        assert_eq!(String::from("ab").slot_hash(), "ab".slot_hash());
        assert_eq!((&"ab").slot_hash(), "ab".slot_hash());
    }

    #[test]
    fn test_string_hash_sign_extends_high_bytes() {
        // "é" is encoded as 0xc3 0xa9.
        let expected = 0xffff_ffc3u32.wrapping_mul(31).wrapping_add(0xffff_ffa9);
        assert_eq!("é".slot_hash(), u64::from(expected));
        assert_ne!("é".slot_hash(), u64::from(0xc3u32 * 31 + 0xa9));
    }

    #[test]
    fn test_hashed_is_deterministic() {
        assert_eq!(Hashed("key").slot_hash(), Hashed("key").slot_hash());
        assert_ne!(Hashed(1u8).slot_hash(), Hashed(2u8).slot_hash());
    }
}
