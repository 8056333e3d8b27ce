use std::ops::{Index, IndexMut};

use bio_types::strand::ReqStrand;

/// Anything bucketed per strand. Reads are always assigned to one of the two
/// buckets, so there is no slot for an unknown strand.
#[derive(Default, Copy, Clone, Eq, PartialEq, Debug)]
pub struct StrandedData<T> {
    pub forward: T,
    pub reverse: T,
}

impl<T> Index<ReqStrand> for StrandedData<T> {
    type Output = T;

    fn index(&self, index: ReqStrand) -> &Self::Output {
        match index {
            ReqStrand::Forward => &self.forward,
            ReqStrand::Reverse => &self.reverse,
        }
    }
}

impl<T> IndexMut<ReqStrand> for StrandedData<T> {
    fn index_mut(&mut self, index: ReqStrand) -> &mut Self::Output {
        match index {
            ReqStrand::Forward => &mut self.forward,
            ReqStrand::Reverse => &mut self.reverse,
        }
    }
}

impl<T> StrandedData<T> {
    #[inline(always)]
    pub fn apply_mut(&mut self, mut func: impl FnMut(&mut T, ReqStrand)) {
        func(&mut self.forward, ReqStrand::Forward);
        func(&mut self.reverse, ReqStrand::Reverse);
    }

    #[inline(always)]
    pub fn apply(&self, mut func: impl FnMut(&T, ReqStrand)) {
        func(&self.forward, ReqStrand::Forward);
        func(&self.reverse, ReqStrand::Reverse);
    }
}
