/// Flips once, the first time its target is seen, and never flips back.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ViewLatch {
    tripped: bool,
}

impl ViewLatch {
    /// Returns `true` only for the call that trips the latch.
    pub fn trip(&mut self) -> bool {
        !std::mem::replace(&mut self.tripped, true)
    }

    #[cfg(test)]
    fn is_tripped(&self) -> bool {
        self.tripped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trips_exactly_once() {
        let mut latch = ViewLatch::default();
        assert!(!latch.is_tripped());
        assert!(latch.trip());
        for _ in 0..5 {
            assert!(!latch.trip());
            assert!(latch.is_tripped());
        }
    }
}
