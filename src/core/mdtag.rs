use crate::core::error::TagParseError;

/// Single MD tag token: a run of matches, deleted reference bases, or one
/// mismatched reference base.
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub enum MdToken<'a> {
    Matched(u32),
    Deleted(&'a [u8]),
    Mismatched(u8),
}

pub struct MdTokenizer<'a> {
    tag: &'a [u8],
    offset: usize,
}

impl<'a> MdTokenizer<'a> {
    pub fn new(tag: &'a [u8]) -> Self {
        Self { tag, offset: 0 }
    }
}

impl<'a> Iterator for MdTokenizer<'a> {
    type Item = Result<MdToken<'a>, TagParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        let tag = self.tag;
        if self.offset >= tag.len() {
            return None;
        }

        let start = self.offset;
        match tag[start] {
            b'0'..=b'9' => {
                let mut end = start + 1;
                while end < tag.len() && tag[end].is_ascii_digit() {
                    end += 1;
                }
                self.offset = end;

                let mut run = 0u32;
                for &digit in &tag[start..end] {
                    run = run.saturating_mul(10).saturating_add((digit - b'0') as u32);
                }
                Some(Ok(MdToken::Matched(run)))
            }
            b'^' => {
                let mut end = start + 1;
                while end < tag.len() && tag[end].is_ascii_uppercase() {
                    end += 1;
                }
                if end == start + 1 {
                    // Errors are terminal.
                    self.offset = tag.len();
                    return Some(Err(TagParseError::EmptyDeletion { offset: start }));
                }
                self.offset = end;
                Some(Ok(MdToken::Deleted(&tag[start + 1..end])))
            }
            base @ b'A'..=b'Z' => {
                self.offset = start + 1;
                Some(Ok(MdToken::Mismatched(base)))
            }
            other => {
                self.offset = tag.len();
                Some(Err(TagParseError::UnexpectedByte { ch: other as char, offset: start }))
            }
        }
    }
}

/// Rebuilds the reference bases covered by the aligned (and already
/// insertion-free) query: match runs copy query bases, mismatch tokens carry
/// the reference base themselves, deletion tokens list the deleted bases.
pub fn reference_slice(tag: &[u8], query: &[u8]) -> Result<Vec<u8>, TagParseError> {
    let mut slice = Vec::with_capacity(query.len());
    let mut qpos = 0usize;

    for token in MdTokenizer::new(tag) {
        match token? {
            MdToken::Matched(run) => {
                let run = run as usize;
                if qpos + run > query.len() {
                    return Err(TagParseError::CursorExhausted { cursor: "query" });
                }
                slice.extend_from_slice(&query[qpos..qpos + run]);
                qpos += run;
            }
            MdToken::Deleted(bases) => slice.extend_from_slice(bases),
            MdToken::Mismatched(base) => {
                if qpos >= query.len() {
                    return Err(TagParseError::CursorExhausted { cursor: "query" });
                }
                slice.push(base);
                qpos += 1;
            }
        }
    }
    Ok(slice)
}
