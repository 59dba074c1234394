use rand::{seq::SliceRandom, Error, RngCore, SeedableRng};

/// Number of distinct lattice hashes; the table stores them twice.
pub const TABLE_SIZE: usize = 256;

const MODULUS: u64 = 2_147_483_647;
const MULTIPLIER: u64 = 16_807;

/// Park–Miller "minimal standard" Lehmer generator.
///
/// Small and fully deterministic across platforms and crate versions, which
/// is all the permutation shuffle needs.
#[derive(Debug, Clone)]
pub struct MinStdRand {
    state: u32,
}

impl MinStdRand {
    /// Seeds are reduced modulo 2^31 - 1, so `s` and `s + 2^31 - 1` give the
    /// same stream, and seed 0 is mapped to 1 (zero would lock the generator).
    /// Seeds 0, 1 and 2_147_483_647 therefore all coincide.
    pub fn new(seed: u32) -> Self {
        let state = (u64::from(seed) % MODULUS) as u32;
        Self { state: if state == 0 { 1 } else { state } }
    }

    fn step(&mut self) -> u32 {
        self.state = ((u64::from(self.state) * MULTIPLIER) % MODULUS) as u32;
        self.state
    }
}

impl RngCore for MinStdRand {
    fn next_u32(&mut self) -> u32 {
        // A step only carries 31 bits, so stitch two 16-bit halves.
        let hi = self.step() & 0xFFFF;
        let lo = self.step() & 0xFFFF;
        (hi << 16) | lo
    }

    fn next_u64(&mut self) -> u64 {
        (u64::from(self.next_u32()) << 32) | u64::from(self.next_u32())
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = self.next_u32().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for MinStdRand {
    type Seed = [u8; 4];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u32::from_le_bytes(seed))
    }
}

/// Shuffled identity over `0..256`, stored twice so `table[table[x] + y]`
/// never needs a wrap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermutationTable([u8; TABLE_SIZE * 2]);

impl PermutationTable {
    pub fn new(seed: u32) -> Self {
        let mut base: [u8; TABLE_SIZE] = std::array::from_fn(|i| i as u8);
        base.shuffle(&mut MinStdRand::new(seed));

        let mut table = [0u8; TABLE_SIZE * 2];
        table[..TABLE_SIZE].copy_from_slice(&base);
        table[TABLE_SIZE..].copy_from_slice(&base);
        Self(table)
    }

    /// Entry at `index`, which must be below 512.
    #[inline]
    pub fn get(&self, index: usize) -> usize {
        usize::from(self.0[index])
    }

    pub fn base(&self) -> &[u8] {
        &self.0[..TABLE_SIZE]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minstd_matches_reference_sequence() {
        let mut rng = MinStdRand::new(1);
        assert_eq!(rng.step(), 16_807);
        assert_eq!(rng.step(), 282_475_249);

        let mut rng = MinStdRand::new(1);
        let mut last = 0;
        for _ in 0..10_000 {
            last = rng.step();
        }
        assert_eq!(last, 1_043_618_065);
    }

    #[test]
    fn zero_seed_does_not_lock_generator() {
        let mut zero = MinStdRand::new(0);
        let mut one = MinStdRand::new(1);
        assert_eq!(zero.next_u32(), one.next_u32());
        assert_ne!(zero.next_u32(), 0);
    }

    #[test]
    fn seeds_congruent_modulo_period_coincide() {
        assert_eq!(PermutationTable::new(1), PermutationTable::new(2_147_483_647));
        assert_eq!(PermutationTable::new(0), PermutationTable::new(1));
        assert_eq!(PermutationTable::new(5), PermutationTable::new(2_147_483_652));
    }

    #[test]
    fn seedable_rng_agrees_with_new() {
        let mut a = MinStdRand::from_seed(7u32.to_le_bytes());
        let mut b = MinStdRand::new(7);
        assert_eq!(a.next_u64(), b.next_u64());
    }

    #[test]
    fn fill_bytes_handles_partial_chunks() {
        let mut rng = MinStdRand::new(3);
        let mut buf = [0u8; 7];
        rng.fill_bytes(&mut buf);

        let mut expected = MinStdRand::new(3);
        let first = expected.next_u32().to_le_bytes();
        let second = expected.next_u32().to_le_bytes();
        assert_eq!(&buf[..4], &first);
        assert_eq!(&buf[4..], &second[..3]);
    }

    #[test]
    fn table_is_duplicated_bijection() {
        for seed in [0, 1, 2, 16, 12_345, u32::MAX] {
            let table = PermutationTable::new(seed);
            let mut seen = [false; TABLE_SIZE];
            for &v in table.base() {
                assert!(!seen[usize::from(v)], "seed {seed}: {v} repeated");
                seen[usize::from(v)] = true;
            }
            for i in 0..TABLE_SIZE {
                assert_eq!(table.get(i), table.get(i + TABLE_SIZE));
            }
        }
    }

    #[test]
    fn table_is_shuffled_and_seed_dependent() {
        let identity: Vec<u8> = (0..=255).collect();
        let one = PermutationTable::new(1);
        assert_ne!(one.base(), identity.as_slice());
        assert_ne!(one, PermutationTable::new(2));
        assert_eq!(one, PermutationTable::new(1));
    }
}
