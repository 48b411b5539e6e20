use std::num::NonZeroU32;

/// A stable reference to a node slot in an `Arena`.
///
/// The raw value is the slot index plus one, so `Option<Handle>` costs no more than a
/// `Handle`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Handle(NonZeroU32);

impl Handle {
    pub const MAX: usize = (u32::MAX - 1) as usize;

    pub fn from_index(index: usize) -> Self {
        assert!(index <= Self::MAX, "`Handle::from_index()` - `index` > `Handle::MAX`!");
        match NonZeroU32::new((index + 1) as u32) {
            Some(raw) => Handle(raw),
            None => unreachable!(),
        }
    }

    pub fn to_index(self) -> usize { (self.0.get() - 1) as usize }
}
