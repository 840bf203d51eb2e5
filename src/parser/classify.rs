//! Maps each incoming character to a token category

/// Token category of a single character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// The `"` quote character.
    Quote,
    /// The configured delimiter.
    Delimiter,
    /// `\n`, terminating a logical line.
    Newline,
    /// `\r`, elided in every state.
    CarriageReturn,
    /// `#`, opening a comment when it starts a line.
    CommentStart,
    /// Any other character.
    Character,
}

/// Classifies characters against a configured delimiter.
///
/// Total over all characters; the first matching rule wins, with the
/// delimiter taking priority over every special character.
#[derive(Debug, Clone, Copy)]
pub struct Classifier {
    delimiter: char,
}

impl Classifier {
    /// Create a classifier for the given delimiter.
    pub fn new(delimiter: char) -> Self {
        Classifier { delimiter }
    }

    /// Classify a single character.
    pub fn classify(&self, ch: char) -> Token {
        match ch {
            c if c == self.delimiter => Token::Delimiter,
            '\n' => Token::Newline,
            '\r' => Token::CarriageReturn,
            '"' => Token::Quote,
            '#' => Token::CommentStart,
            _ => Token::Character,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comma_delimiter() {
        let classifier = Classifier::new(',');
        assert_eq!(classifier.classify(','), Token::Delimiter);
        assert_eq!(classifier.classify('\n'), Token::Newline);
        assert_eq!(classifier.classify('\r'), Token::CarriageReturn);
        assert_eq!(classifier.classify('"'), Token::Quote);
        assert_eq!(classifier.classify('#'), Token::CommentStart);
        assert_eq!(classifier.classify('x'), Token::Character);
        assert_eq!(classifier.classify('é'), Token::Character);
    }

    #[test]
    fn test_semicolon_delimiter() {
        let classifier = Classifier::new(';');
        assert_eq!(classifier.classify(';'), Token::Delimiter);
        assert_eq!(classifier.classify(','), Token::Character);
    }

    #[test]
    fn test_delimiter_wins_over_special_characters() {
        // The configured delimiter takes priority even when it collides
        // with a character that is otherwise special.
        let classifier = Classifier::new('#');
        assert_eq!(classifier.classify('#'), Token::Delimiter);
    }
}
