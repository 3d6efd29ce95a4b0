//! Kani arbitrary implementations for 2048 types.

#[cfg(kani)]
use super::Direction;

#[cfg(kani)]
impl kani::Arbitrary for Direction {
    fn any() -> Self {
        let index: u8 = kani::any();
        kani::assume(index < 4);
        Direction::ALL[index as usize]
    }
}
