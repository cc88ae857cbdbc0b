use super::refs::Refs;

/// Zero-sized no-reference.
#[derive(Clone, Debug)]
pub struct RefsNone;

impl Refs for RefsNone {
    fn empty() -> Self {
        Self
    }

    fn is_empty(&self) -> bool {
        true
    }

    fn clear(&mut self) {}

    fn redirect(&mut self, _old: usize, _new: usize) {}
}
