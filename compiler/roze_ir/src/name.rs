//! Interned identifier handle.

use std::fmt;

/// Interned string handle: an index into a [`StringInterner`](crate::StringInterner).
///
/// Identifiers, parameter names and tag words are all interned. Tags keep
/// their leading `#`, so the tag `#complete` and an identifier `complete`
/// are different names.
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Name(u32);

impl Name {
    /// The empty string. Always index 0.
    pub const EMPTY: Name = Name(0);
    /// `#complete`: a generator or stage has nothing more to produce.
    pub const COMPLETE: Name = Name(1);
    /// `#continue`: abandon the rest of this lap and start the next one.
    pub const CONTINUE: Name = Name(2);
    /// `#break`: stop the pipeline.
    pub const BREAK: Name = Name(3);
    /// `#null`: stop the pipeline with no meaningful value.
    pub const NULL: Name = Name(4);

    /// Texts pre-interned at the indices of the constants above, in order.
    pub(crate) const PRE_INTERNED: [&'static str; 5] =
        ["", "#complete", "#continue", "#break", "#null"];

    #[inline]
    pub(crate) const fn from_raw(raw: u32) -> Self {
        Name(raw)
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Whether this name is one of the four pipeline sentinels.
    #[inline]
    pub fn is_sentinel(self) -> bool {
        matches!(
            self,
            Name::COMPLETE | Name::CONTINUE | Name::BREAK | Name::NULL
        )
    }

    /// Whether a lap ending on this name ends the whole pipeline.
    ///
    /// `#continue` is a sentinel but restarts the pipeline instead.
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, Name::COMPLETE | Name::BREAK | Name::NULL)
    }
}

impl fmt::Debug for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name({})", self.0)
    }
}
