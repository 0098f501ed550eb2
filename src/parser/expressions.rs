use crate::lexer::{Keyword, Token, TokenKind};
use crate::parser::{AddOp, Expr, Literal, MulOp, ParseError, Program};

/// Deepest statement/factor nesting accepted before parsing gives up
/// instead of exhausting the stack.
pub const MAX_NESTING: usize = 256;

pub struct Parser {
    tokens: Vec<Token>,
    current: usize,
    depth: usize,
}

impl Parser {
    /// Comment tokens are dropped here; no grammar rule ever sees one.
    #[must_use]
    pub fn new(tokens: Vec<Token>) -> Self {
        let tokens = tokens
            .into_iter()
            .filter(|token| token.kind != TokenKind::Comment)
            .collect();
        Self {
            tokens,
            current: 0,
            depth: 0,
        }
    }

    /// Check if we've reached the end of tokens
    pub(crate) fn is_at_end(&self) -> bool {
        self.current >= self.tokens.len()
    }

    /// Peek at current token without consuming it
    pub(crate) fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.current)
    }

    /// Advance past the current token
    pub(crate) fn advance(&mut self) {
        if !self.is_at_end() {
            self.current += 1;
        }
    }

    /// Check if current token is a keyword
    pub(crate) fn check_keyword(&self, keyword: Keyword) -> bool {
        matches!(self.peek(), Some(token) if token.keyword() == Some(keyword))
    }

    pub(crate) fn check_operator(&self, symbol: &str) -> bool {
        matches!(self.peek(), Some(token) if token.is_operator(symbol))
    }

    pub(crate) fn check_separator(&self, symbol: &str) -> bool {
        matches!(self.peek(), Some(token) if token.is_separator(symbol))
    }

    /// Consume a separator if it is next
    pub(crate) fn match_separator(&mut self, symbol: &str) -> bool {
        if self.check_separator(symbol) {
            self.advance();
            true
        } else {
            false
        }
    }

    pub(crate) fn expect_keyword(&mut self, keyword: Keyword) -> Result<(), ParseError> {
        if self.check_keyword(keyword) {
            self.advance();
            Ok(())
        } else {
            Err(self.unexpected(&format!("keyword '{}'", keyword)))
        }
    }

    pub(crate) fn expect_operator(&mut self, symbol: &str) -> Result<(), ParseError> {
        if self.check_operator(symbol) {
            self.advance();
            Ok(())
        } else {
            Err(self.unexpected(&format!("'{}'", symbol)))
        }
    }

    pub(crate) fn expect_separator(&mut self, symbol: &str) -> Result<(), ParseError> {
        if self.check_separator(symbol) {
            self.advance();
            Ok(())
        } else {
            Err(self.unexpected(&format!("'{}'", symbol)))
        }
    }

    /// Consume an identifier token and return its name
    pub(crate) fn expect_identifier(&mut self) -> Result<String, ParseError> {
        match self.peek() {
            Some(token) if token.kind == TokenKind::Identifier => {
                let name = token.text.clone();
                self.advance();
                Ok(name)
            }
            _ => Err(self.unexpected("identifier")),
        }
    }

    /// Error for the token at the cursor, or for running out of input.
    pub(crate) fn unexpected(&self, expected: &str) -> ParseError {
        match self.peek() {
            Some(token) => ParseError::UnexpectedToken {
                expected: expected.to_string(),
                found: token.to_string(),
                position: self.current,
            },
            None => ParseError::UnexpectedEndOfInput {
                expected: expected.to_string(),
                position: self.current,
            },
        }
    }

    pub(crate) fn enter_nested(&mut self) -> Result<(), ParseError> {
        if self.depth >= MAX_NESTING {
            return Err(ParseError::NestingTooDeep {
                limit: MAX_NESTING,
                position: self.current,
            });
        }
        self.depth += 1;
        Ok(())
    }

    pub(crate) fn exit_nested(&mut self) {
        self.depth -= 1;
    }

    /// Parse a complete program
    /// # Errors
    /// If parsing fails at any point; no partial tree is returned.
    pub fn parse_program(&mut self) -> Result<Program, ParseError> {
        let mut statements = Vec::new();

        while !self.is_at_end() {
            statements.push(self.parse_statement()?);
        }

        Ok(Program { statements })
    }

    /// Parse an expression: terms joined by additive operators
    pub(crate) fn parse_expression(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_term()?;

        while let Some(op) = self.match_add_op() {
            let right = self.parse_term()?;
            left = Expr::Sum {
                left: Box::new(left),
                op,
                right: Box::new(right),
            };
        }

        Ok(left)
    }

    /// Parse a term: factors joined by multiplicative operators
    fn parse_term(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_factor()?;

        while let Some(op) = self.match_mul_op() {
            let right = self.parse_factor()?;
            left = Expr::Product {
                left: Box::new(left),
                op,
                right: Box::new(right),
            };
        }

        Ok(left)
    }

    fn match_add_op(&mut self) -> Option<AddOp> {
        let op = match self.peek() {
            Some(token) if token.kind == TokenKind::Operator => match token.text.as_str() {
                "+" => AddOp::Add,
                "-" => AddOp::Sub,
                _ => return None,
            },
            _ => return None,
        };
        self.advance();
        Some(op)
    }

    fn match_mul_op(&mut self) -> Option<MulOp> {
        let op = match self.peek() {
            Some(token) if token.kind == TokenKind::Operator => match token.text.as_str() {
                "*" => MulOp::Mul,
                "/" => MulOp::Div,
                _ => return None,
            },
            _ => return None,
        };
        self.advance();
        Some(op)
    }

    fn parse_factor(&mut self) -> Result<Expr, ParseError> {
        self.enter_nested()?;
        let result = self.dispatch_factor();
        self.exit_nested();
        result
    }

    /// Parenthesized expression, identifier, or literal. Parentheses group
    /// only; they leave no node of their own behind.
    fn dispatch_factor(&mut self) -> Result<Expr, ParseError> {
        let token = match self.peek() {
            Some(token) => token,
            None => return Err(self.unexpected("expression")),
        };

        match token.kind {
            TokenKind::Separator if token.text == "(" => {
                self.advance();
                let expr = self.parse_expression()?;
                self.expect_separator(")")?;
                Ok(expr)
            }
            TokenKind::Identifier => {
                let name = token.text.clone();
                self.advance();
                Ok(Expr::Identifier(name))
            }
            TokenKind::NumericLiteral => {
                let text = token.text.clone();
                self.advance();
                Ok(Expr::Literal(Literal::Number(text)))
            }
            TokenKind::StringLiteral => {
                let text = token.text.clone();
                self.advance();
                Ok(Expr::Literal(Literal::Text(text)))
            }
            _ => Err(self.unexpected("expression")),
        }
    }
}

// Convenience function for parsing a token sequence
pub fn parse(tokens: Vec<Token>) -> Result<Program, ParseError> {
    let mut parser = Parser::new(tokens);
    parser.parse_program()
}
