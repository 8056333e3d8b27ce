use bio_types::strand::ReqStrand;
#[cfg(test)]
use mockall::mock;
use rust_htslib::bam::ext::BamRecordExtensions;
use rust_htslib::bam::record::{Aux, CigarStringView};
use rust_htslib::bam::Record;

pub trait SequencedRead {
    fn name(&self) -> &[u8];
    fn strand(&self) -> &ReqStrand;

    fn seq(&self) -> Vec<u8>;

    fn is_first(&self) -> bool;
    fn is_paired(&self) -> bool;
}

pub trait AlignedRead: SequencedRead {
    fn cigar(&self) -> CigarStringView;
    fn is_mapped(&self) -> bool;

    // One entry per alignment column, soft clips included: [query offset, reference position].
    fn columns(&self) -> Vec<[Option<i64>; 2]>;
    fn mdtag(&self) -> Option<Vec<u8>>;
}

#[cfg(test)]
mock! {
    pub Read {}
    impl AlignedRead for Read {
        fn cigar(&self) -> CigarStringView;
        fn is_mapped(&self) -> bool;

        fn columns(&self) -> Vec<[Option<i64>; 2]>;
        fn mdtag(&self) -> Option<Vec<u8>>;
    }

    impl SequencedRead for Read {
        fn name(&self) -> &[u8];
        fn strand(&self) -> &ReqStrand;

        fn seq(&self) -> Vec<u8>;

        fn is_first(&self) -> bool;
        fn is_paired(&self) -> bool;
    }
}

impl SequencedRead for Record {
    #[inline]
    fn name(&self) -> &[u8] {
        self.qname()
    }

    #[inline]
    fn strand(&self) -> &ReqStrand {
        if self.is_reverse() {
            &ReqStrand::Reverse
        } else {
            &ReqStrand::Forward
        }
    }

    #[inline]
    fn seq(&self) -> Vec<u8> {
        self.seq().as_bytes()
    }

    #[inline]
    fn is_first(&self) -> bool {
        self.is_first_in_template()
    }

    #[inline]
    fn is_paired(&self) -> bool {
        self.is_paired()
    }
}

impl AlignedRead for Record {
    #[inline]
    fn cigar(&self) -> CigarStringView {
        self.cigar()
    }

    #[inline]
    fn is_mapped(&self) -> bool {
        !self.is_unmapped()
    }

    #[inline]
    fn columns(&self) -> Vec<[Option<i64>; 2]> {
        self.aligned_pairs_full().collect()
    }

    #[inline]
    fn mdtag(&self) -> Option<Vec<u8>> {
        match self.aux(b"MD") {
            Ok(Aux::String(md)) => Some(md.as_bytes().to_vec()),
            _ => None,
        }
    }
}
