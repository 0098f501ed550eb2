use std::fmt;

use crate::lexer::Keyword;

/// The four declarable type names
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeName {
    Int,
    Real,
    Str,
    Bool,
}

impl TypeName {
    pub fn from_keyword(keyword: Keyword) -> Option<Self> {
        match keyword {
            Keyword::Int => Some(TypeName::Int),
            Keyword::Real => Some(TypeName::Real),
            Keyword::Str => Some(TypeName::Str),
            Keyword::Bool => Some(TypeName::Bool),
            _ => None,
        }
    }

    pub fn keyword(self) -> Keyword {
        match self {
            TypeName::Int => Keyword::Int,
            TypeName::Real => Keyword::Real,
            TypeName::Str => Keyword::Str,
            TypeName::Bool => Keyword::Bool,
        }
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.keyword())
    }
}

/// Additive operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOp {
    Add,
    Sub,
}

impl AddOp {
    pub fn symbol(self) -> &'static str {
        match self {
            AddOp::Add => "+",
            AddOp::Sub => "-",
        }
    }
}

impl fmt::Display for AddOp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Multiplicative operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MulOp {
    Mul,
    Div,
}

impl MulOp {
    pub fn symbol(self) -> &'static str {
        match self {
            MulOp::Mul => "*",
            MulOp::Div => "/",
        }
    }
}

impl fmt::Display for MulOp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Literal spellings, carried through from the token text unparsed.
/// A text literal keeps its surrounding quotes.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Number(String),
    Text(String),
}

/// Expression variants. Children are owned exclusively; the tree never
/// shares or aliases a node.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Additive node, built left-associatively
    Sum {
        left: Box<Expr>,
        op: AddOp,
        right: Box<Expr>,
    },
    /// Multiplicative node, built left-associatively
    Product {
        left: Box<Expr>,
        op: MulOp,
        right: Box<Expr>,
    },
    Literal(Literal),
    Identifier(String),
}

/// Function parameter: declared type, then name
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    pub type_name: TypeName,
    pub name: String,
}

/// Statement variants
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Declaration {
        name: String,
        type_name: TypeName,
        value: Expr,
    },
    Assignment {
        name: String,
        value: Expr,
    },
    /// Both branches are always present; the grammar has no else-less form.
    If {
        condition: Expr,
        then_branch: Vec<Statement>,
        else_branch: Vec<Statement>,
    },
    While {
        condition: Expr,
        body: Vec<Statement>,
    },
    Function {
        name: String,
        params: Vec<Parameter>,
        body: Vec<Statement>,
    },
    Return(Expr),
}

/// Complete program: the single root of the syntax tree
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub statements: Vec<Statement>,
}
