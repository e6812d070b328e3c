//! Structured warning channel.
//!
//! Recoverable problems (a skipped table line, a reinterpreted symbol token,
//! a word containing a foreign symbol) are reported to the caller as values
//! instead of being printed at the point of discovery. Fatal problems travel
//! as errors; warnings never abort processing.

use std::fmt;

/// A recoverable problem observed while parsing tables or recognizing words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// A transition line did not have exactly three fields and was skipped.
    MalformedTransitionLine {
        /// The offending line, as read.
        line: String,
    },
    /// A transition-line symbol token could not be an alphabet symbol and was
    /// reinterpreted as the epsilon token.
    SymbolCoercedToEpsilon {
        /// The token that was reinterpreted.
        token: String,
        /// The line it appeared on.
        line: String,
    },
    /// A word contained a symbol outside the automaton's alphabet and was
    /// rejected.
    WordOutsideAlphabet {
        /// The rejected word.
        word: String,
        /// The foreign symbol.
        symbol: char,
    },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::MalformedTransitionLine { line } => {
                write!(f, "ignoring malformed transition line: '{line}'")
            }
            Warning::SymbolCoercedToEpsilon { token, line } => {
                write!(
                    f,
                    "symbol '{token}' on line '{line}' cannot be an alphabet symbol; \
                     interpreted as the empty move"
                )
            }
            Warning::WordOutsideAlphabet { word, symbol } => {
                write!(
                    f,
                    "word '{word}' contains symbol '{symbol}' outside the alphabet; rejected"
                )
            }
        }
    }
}

/// Collector for [`Warning`]s raised during one operation.
///
/// Passed by mutable reference into parsing and recognition entry points;
/// callers inspect or drain it afterwards.
#[derive(Debug, Default)]
pub struct Diagnostics {
    warnings: Vec<Warning>,
}

impl Diagnostics {
    /// Create an empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a warning.
    pub fn warn(&mut self, warning: Warning) {
        self.warnings.push(warning);
    }

    /// The warnings recorded so far, in order.
    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    /// Whether no warnings were recorded.
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }

    /// Consume the collector, yielding its warnings.
    pub fn into_warnings(self) -> Vec<Warning> {
        self.warnings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collector_preserves_order() {
        let mut diagnostics = Diagnostics::new();
        assert!(diagnostics.is_clean());

        diagnostics.warn(Warning::MalformedTransitionLine {
            line: "A 0".to_string(),
        });
        diagnostics.warn(Warning::WordOutsideAlphabet {
            word: "0x1".to_string(),
            symbol: 'x',
        });

        assert_eq!(diagnostics.warnings().len(), 2);
        assert!(matches!(
            diagnostics.warnings()[0],
            Warning::MalformedTransitionLine { .. }
        ));
    }
}
