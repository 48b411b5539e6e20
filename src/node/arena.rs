use std::collections::TryReserveError;
use super::handle::Handle;

/// Slot storage for tree nodes. Freed slots are recycled before the backing vector grows.
#[derive(Clone)]
pub struct Arena<T> {
    slots: Vec<Option<T>>,
    free: Vec<Handle>,
}

impl<T> Arena<T> {
    pub fn new() -> Self { Arena { slots: Vec::new(), free: Vec::new() } }

    pub fn len(&self) -> usize { self.slots.len() - self.free.len() }

    /// Stores `element`, returning its handle, or the reservation error if the backing
    /// vector could not grow.
    pub fn try_alloc(&mut self, element: T) -> Result<Handle, TryReserveError> {
        if let Some(handle) = self.free.pop() {
            self.slots[handle.to_index()] = Some(element);
            return Ok(handle);
        }

        assert!(self.slots.len() < Handle::MAX,
                "`Arena::try_alloc()` - arena is at maximum capacity ({})", Handle::MAX);

        // Reserve room in the free list too, so that `take` never allocates.
        self.slots.try_reserve(1)?;
        self.free.try_reserve(self.slots.len() + 1 - self.free.len())?;
        self.slots.push(Some(element));
        Ok(Handle::from_index(self.slots.len() - 1))
    }

    pub fn get(&self, handle: Handle) -> &T {
        self.slots[handle.to_index()].as_ref().expect("`Arena::get()` - `handle` is invalid!")
    }

    pub fn get_mut(&mut self, handle: Handle) -> &mut T {
        self.slots[handle.to_index()].as_mut().expect("`Arena::get_mut()` - `handle` is invalid!")
    }

    /// Removes the element from its slot and recycles the handle.
    pub fn take(&mut self, handle: Handle) -> T {
        let element = self.slots[handle.to_index()].take()
            .expect("`Arena::take()` - `handle` is invalid!");
        self.free.push(handle);
        element
    }

    pub fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
    }
}

#[cfg(test)]
mod test {
    use quickcheck::{Arbitrary, Gen};
    use quickcheck_macros::quickcheck;
    use super::Arena;
    use super::super::handle::Handle;

    #[derive(Clone, Debug)]
    enum Op {
        Alloc(u32),
        Take(usize),
        Clear,
    }

    impl Arbitrary for Op {
        fn arbitrary(g: &mut Gen) -> Self {
            match *g.choose(&[0, 0, 0, 1, 1, 2]).unwrap() {
                0 => Op::Alloc(u32::arbitrary(g)),
                1 => Op::Take(usize::arbitrary(g)),
                _ => Op::Clear,
            }
        }
    }

    #[quickcheck]
    fn behaves_like_vec(ops: Vec<Op>) -> bool {
        let mut model: Vec<(Handle, u32)> = vec![];
        let mut arena = Arena::new();

        for op in ops {
            match op {
                Op::Alloc(value) => model.push((arena.try_alloc(value).unwrap(), value)),
                Op::Take(which) => if !model.is_empty() {
                    let (handle, value) = model.swap_remove(which % model.len());
                    if arena.take(handle) != value { return false; }
                },
                Op::Clear => { arena.clear(); model.clear(); }
            }

            if arena.len() != model.len() { return false; }
            if model.iter().any(|&(handle, value)| *arena.get(handle) != value) { return false; }
        }

        true
    }

    #[test]
    fn recycles_freed_slots() {
        let mut arena = Arena::new();
        let a = arena.try_alloc('a').unwrap();
        let b = arena.try_alloc('b').unwrap();
        assert_eq!(arena.take(a), 'a');
        assert_eq!(arena.try_alloc('c').unwrap(), a);
        assert_eq!(*arena.get(b), 'b');
        assert_eq!(arena.len(), 2);
    }

    #[test]
    #[should_panic(expected = "`Arena::get()` - `handle` is invalid!")]
    fn rejects_freed_handle() {
        let mut arena = Arena::new();
        let a = arena.try_alloc(1).unwrap();
        arena.take(a);
        arena.get(a);
    }
}
