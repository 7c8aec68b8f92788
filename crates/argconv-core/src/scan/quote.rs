//! Quote-state tracking

/// Open quote while scanning an argument
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum QuoteState {
    /// Outside any quote
    #[default]
    None,
    /// Inside `'...'`
    Single,
    /// Inside `"..."`
    Double,
}

impl QuoteState {
    /// State opened by a quote byte
    #[inline]
    pub const fn opened_by(b: u8) -> Option<Self> {
        match b {
            b'\'' => Some(Self::Single),
            b'"' => Some(Self::Double),
            _ => None,
        }
    }

    /// The quote byte that closes this state, `0` when none is open
    #[inline]
    pub const fn as_byte(self) -> u8 {
        match self {
            Self::None => 0,
            Self::Single => b'\'',
            Self::Double => b'"',
        }
    }

    /// True inside a quote
    #[inline]
    pub const fn is_open(self) -> bool {
        !matches!(self, Self::None)
    }

    /// True when `b` closes the open quote
    #[inline]
    pub const fn closes(self, b: u8) -> bool {
        self.is_open() && b == self.as_byte()
    }

    /// Feed one byte with its successor.
    ///
    /// A matching quote closes the state unless the next byte repeats it
    /// (`''` inside single quotes is a literal quote). Any other quote byte
    /// becomes the open quote.
    #[inline]
    pub fn update(&mut self, b: u8, next: u8) {
        let Some(opened) = Self::opened_by(b) else {
            return;
        };
        if self.closes(b) {
            if next != b {
                *self = Self::None;
            }
        } else {
            *self = opened;
        }
    }

    /// Quote state after scanning all of `src`
    pub fn after(src: &[u8]) -> Self {
        let mut state = Self::None;
        for (i, &b) in src.iter().enumerate() {
            state.update(b, super::byte_at(src, i + 1));
        }
        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_balanced_quotes_close() {
        assert_eq!(QuoteState::after(b"--x=\"/usr/bin\""), QuoteState::None);
        assert_eq!(QuoteState::after(b"'a' \"b\""), QuoteState::None);
    }

    #[test]
    fn test_unbalanced_quote_stays_open() {
        assert_eq!(QuoteState::after(b"--x='/usr"), QuoteState::Single);
        assert_eq!(QuoteState::after(b"\"a"), QuoteState::Double);
    }

    #[test]
    fn test_other_quote_takes_over() {
        assert_eq!(QuoteState::after(b"\"it's"), QuoteState::Single);
    }

    #[test]
    fn test_doubled_quote_is_literal() {
        let mut state = QuoteState::Single;
        state.update(b'\'', b'\'');
        assert_eq!(state, QuoteState::Single);
        state.update(b'\'', b'x');
        assert_eq!(state, QuoteState::None);
    }

    #[test]
    fn test_closes() {
        assert!(QuoteState::Double.closes(b'"'));
        assert!(!QuoteState::Double.closes(b'\''));
        assert!(!QuoteState::None.closes(0));
    }
}
