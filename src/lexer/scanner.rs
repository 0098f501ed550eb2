use crate::lexer::{Keyword, Position, ScanError, Token, TokenKind};

/// Operator spellings that scan as words rather than symbols.
const WORD_OPERATORS: &[&str] = &["и", "или", "не"];

pub struct Scanner {
    input: Vec<char>,
    current: usize,
    line: usize,
    column: usize,
}

impl Scanner {
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            current: 0,
            line: 1,
            column: 1,
        }
    }

    /// Scans the whole input, comment tokens included.
    pub fn scan_all(&mut self) -> Result<Vec<Token>, ScanError> {
        let mut tokens = Vec::new();

        self.skip_whitespace();
        while let Some(ch) = self.peek() {
            tokens.push(self.scan_token(ch)?);
            self.skip_whitespace();
        }

        Ok(tokens)
    }

    fn current_position(&self) -> Position {
        Position::new(self.line, self.column)
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.input.len()
    }

    fn peek(&self) -> Option<char> {
        self.input.get(self.current).copied()
    }

    fn peek_ahead(&self, offset: usize) -> Option<char> {
        self.input.get(self.current + offset).copied()
    }

    fn advance(&mut self) -> Option<char> {
        if let Some(ch) = self.peek() {
            self.current += 1;
            if ch == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
            Some(ch)
        } else {
            None
        }
    }

    fn match_char(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.peek() {
            if ch.is_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
    }

    fn text_from(&self, start: usize) -> String {
        self.input[start..self.current].iter().collect()
    }

    /// One token, dispatched on the character at the cursor. The longest
    /// match wins: comment openers beat the division operator, a whole
    /// word beats any keyword prefix inside it.
    fn scan_token(&mut self, ch: char) -> Result<Token, ScanError> {
        match ch {
            '"' => self.scan_string(),
            '/' if self.peek_ahead(1) == Some('/') => Ok(self.scan_line_comment()),
            '/' if self.peek_ahead(1) == Some('*') => self.scan_block_comment(),
            _ if ch.is_ascii_digit() => Ok(self.scan_number()),
            _ if is_word_start(ch) => Ok(self.scan_word()),
            _ => self.scan_symbol(ch),
        }
    }

    /// Keyword, word operator, or identifier; equal-length matches prefer
    /// the fixed spellings over an identifier reading.
    fn scan_word(&mut self) -> Token {
        let start = self.current;

        while is_word_continue(self.peek().unwrap_or('\0')) {
            self.advance();
        }

        let text = self.text_from(start);
        let kind = if Keyword::from_str(&text).is_some() {
            TokenKind::Keyword
        } else if WORD_OPERATORS.contains(&text.as_str()) {
            TokenKind::Operator
        } else {
            TokenKind::Identifier
        };

        Token::new(kind, text)
    }

    fn scan_number(&mut self) -> Token {
        let start = self.current;

        while self.peek().unwrap_or('\0').is_ascii_digit() {
            self.advance();
        }

        // A dot joins the number only when digits follow it.
        if self.peek() == Some('.') && self.peek_ahead(1).unwrap_or('\0').is_ascii_digit() {
            self.advance();
            while self.peek().unwrap_or('\0').is_ascii_digit() {
                self.advance();
            }
        }

        Token::new(TokenKind::NumericLiteral, self.text_from(start))
    }

    /// No escape sequences; the literal may span newlines and the lexeme
    /// keeps both quotes.
    fn scan_string(&mut self) -> Result<Token, ScanError> {
        let start = self.current;
        let start_pos = self.current_position();

        self.advance(); // opening quote
        while !self.is_at_end() && self.peek() != Some('"') {
            self.advance();
        }

        if !self.match_char('"') {
            return Err(ScanError::UnterminatedString(start_pos));
        }

        Ok(Token::new(TokenKind::StringLiteral, self.text_from(start)))
    }

    /// The lexeme ends at the line's text; `\r` and `\n` stay outside it.
    fn scan_line_comment(&mut self) -> Token {
        let start = self.current;

        self.advance();
        self.advance();
        while !self.is_at_end() && self.peek() != Some('\n') && self.peek() != Some('\r') {
            self.advance();
        }

        Token::new(TokenKind::Comment, self.text_from(start))
    }

    /// Ends at the nearest `*/`.
    fn scan_block_comment(&mut self) -> Result<Token, ScanError> {
        let start = self.current;
        let start_pos = self.current_position();

        self.advance();
        self.advance();
        while !self.is_at_end() {
            if self.peek() == Some('*') && self.peek_ahead(1) == Some('/') {
                self.advance();
                self.advance();
                return Ok(Token::new(TokenKind::Comment, self.text_from(start)));
            }
            self.advance();
        }

        Err(ScanError::UnterminatedComment(start_pos))
    }

    fn scan_symbol(&mut self, ch: char) -> Result<Token, ScanError> {
        let start_pos = self.current_position();
        self.advance();

        let text = match ch {
            '(' | ')' | '{' | '}' | ';' | ',' => {
                return Ok(Token::new(TokenKind::Separator, ch.to_string()));
            }
            '=' => {
                if self.match_char('=') {
                    "=="
                } else {
                    "="
                }
            }
            '!' => {
                // A bare '!' spells nothing in this language.
                if self.match_char('=') {
                    "!="
                } else {
                    return Err(ScanError::UnexpectedChar(ch, start_pos));
                }
            }
            '<' => {
                if self.match_char('=') {
                    "<="
                } else {
                    "<"
                }
            }
            '>' => {
                if self.match_char('=') {
                    ">="
                } else {
                    ">"
                }
            }
            '+' => "+",
            '-' => "-",
            '*' => "*",
            '/' => "/",
            _ => return Err(ScanError::UnexpectedChar(ch, start_pos)),
        };

        Ok(Token::new(TokenKind::Operator, text.to_string()))
    }
}

fn is_word_start(ch: char) -> bool {
    ch.is_alphabetic() || ch == '_'
}

fn is_word_continue(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

// Convenience function for tokenizing input
pub fn tokenize(input: &str) -> Result<Vec<Token>, ScanError> {
    let mut scanner = Scanner::new(input);
    scanner.scan_all()
}
