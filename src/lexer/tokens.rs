use std::fmt;

/// Language keywords
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyword {
    Let,
    Int,
    Real,
    Str,
    Bool,
    If,
    Else,
    While,
    From,
    To,
    Func,
    Return,
    Input,
}

impl Keyword {
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "даждь" => Some(Keyword::Let),
            "цело" => Some(Keyword::Int),
            "вещественно" => Some(Keyword::Real),
            "строка" => Some(Keyword::Str),
            "истина" => Some(Keyword::Bool),
            "аще" => Some(Keyword::If),
            "иначе" => Some(Keyword::Else),
            "доколе" => Some(Keyword::While),
            "от" => Some(Keyword::From),
            "до" => Some(Keyword::To),
            "твори" => Some(Keyword::Func),
            "воздать" => Some(Keyword::Return),
            "введи" => Some(Keyword::Input),
            _ => None,
        }
    }

    /// The keyword's spelling in source text.
    pub fn as_str(self) -> &'static str {
        match self {
            Keyword::Let => "даждь",
            Keyword::Int => "цело",
            Keyword::Real => "вещественно",
            Keyword::Str => "строка",
            Keyword::Bool => "истина",
            Keyword::If => "аще",
            Keyword::Else => "иначе",
            Keyword::While => "доколе",
            Keyword::From => "от",
            Keyword::To => "до",
            Keyword::Func => "твори",
            Keyword::Return => "воздать",
            Keyword::Input => "введи",
        }
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Token categories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Keyword,
    Operator,
    Separator,
    Identifier,
    NumericLiteral,
    StringLiteral,
    Comment,
    /// Never produced by the scanner; unrecognized input is a scan error instead.
    Unknown,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = match self {
            TokenKind::Keyword => "keyword",
            TokenKind::Operator => "operator",
            TokenKind::Separator => "separator",
            TokenKind::Identifier => "identifier",
            TokenKind::NumericLiteral => "number",
            TokenKind::StringLiteral => "string",
            TokenKind::Comment => "comment",
            TokenKind::Unknown => "unknown",
        };
        // lex output pads kinds into columns, so width flags must apply
        f.pad(s)
    }
}

/// A classified lexeme. String literal tokens keep their surrounding quotes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    /// The keyword this token spells, if it is a keyword token.
    pub fn keyword(&self) -> Option<Keyword> {
        if self.kind == TokenKind::Keyword {
            Keyword::from_str(&self.text)
        } else {
            None
        }
    }

    pub fn is_operator(&self, symbol: &str) -> bool {
        self.kind == TokenKind::Operator && self.text == symbol
    }

    pub fn is_separator(&self, symbol: &str) -> bool {
        self.kind == TokenKind::Separator && self.text == symbol
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.kind {
            TokenKind::Keyword => write!(f, "keyword '{}'", self.text),
            TokenKind::Operator | TokenKind::Separator => write!(f, "'{}'", self.text),
            TokenKind::Identifier => write!(f, "identifier '{}'", self.text),
            TokenKind::NumericLiteral => write!(f, "number {}", self.text),
            TokenKind::StringLiteral => write!(f, "string {}", self.text),
            TokenKind::Comment => write!(f, "comment"),
            TokenKind::Unknown => write!(f, "unknown token '{}'", self.text),
        }
    }
}
