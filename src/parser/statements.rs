use crate::lexer::Keyword;
use crate::parser::expressions::Parser;
use crate::parser::{Parameter, ParseError, Statement, TypeName};

impl Parser {
    /// Parse a statement
    pub(crate) fn parse_statement(&mut self) -> Result<Statement, ParseError> {
        self.enter_nested()?;
        let result = self.dispatch_statement();
        self.exit_nested();
        result
    }

    /// Dispatch on the leading keyword; anything that is not a statement
    /// keyword falls through to assignment.
    fn dispatch_statement(&mut self) -> Result<Statement, ParseError> {
        let keyword = match self.peek() {
            Some(token) => token.keyword(),
            None => return Err(self.unexpected("statement")),
        };

        match keyword {
            Some(Keyword::Let) => self.parse_declaration(),
            Some(Keyword::If) => self.parse_if_statement(),
            Some(Keyword::While) => self.parse_while_statement(),
            Some(Keyword::Func) => self.parse_function_declaration(),
            Some(Keyword::Return) => self.parse_return_statement(),
            // Reserved keywords have no statement rule.
            Some(_) => Err(self.unexpected("statement")),
            None => self.parse_assignment(),
        }
    }

    /// Parse a declaration: the name comes before its type
    fn parse_declaration(&mut self) -> Result<Statement, ParseError> {
        self.expect_keyword(Keyword::Let)?;
        let name = self.expect_identifier()?;
        let type_name = self.parse_type_name()?;
        self.expect_operator("=")?;
        let value = self.parse_expression()?;
        self.expect_separator(";")?;

        Ok(Statement::Declaration {
            name,
            type_name,
            value,
        })
    }

    fn parse_assignment(&mut self) -> Result<Statement, ParseError> {
        let name = self.expect_identifier()?;
        self.expect_operator("=")?;
        let value = self.parse_expression()?;
        self.expect_separator(";")?;

        Ok(Statement::Assignment { name, value })
    }

    /// Parse an if statement; the else block is mandatory
    fn parse_if_statement(&mut self) -> Result<Statement, ParseError> {
        self.expect_keyword(Keyword::If)?;
        self.expect_separator("(")?;
        let condition = self.parse_expression()?;
        self.expect_separator(")")?;
        let then_branch = self.parse_block()?;
        self.expect_keyword(Keyword::Else)?;
        let else_branch = self.parse_block()?;

        Ok(Statement::If {
            condition,
            then_branch,
            else_branch,
        })
    }

    /// Parse a while loop
    fn parse_while_statement(&mut self) -> Result<Statement, ParseError> {
        self.expect_keyword(Keyword::While)?;
        self.expect_separator("(")?;
        let condition = self.parse_expression()?;
        self.expect_separator(")")?;
        let body = self.parse_block()?;

        Ok(Statement::While { condition, body })
    }

    /// Parse a function declaration
    fn parse_function_declaration(&mut self) -> Result<Statement, ParseError> {
        self.expect_keyword(Keyword::Func)?;
        let name = self.expect_identifier()?;
        self.expect_separator("(")?;
        let params = self.parse_parameter_list()?;
        self.expect_separator(")")?;
        let body = self.parse_block()?;

        Ok(Statement::Function { name, params, body })
    }

    /// Parse a possibly empty comma-separated parameter list
    fn parse_parameter_list(&mut self) -> Result<Vec<Parameter>, ParseError> {
        let mut params = Vec::new();

        if !self.check_separator(")") {
            loop {
                let type_name = self.parse_type_name()?;
                let name = self.expect_identifier()?;
                params.push(Parameter { type_name, name });

                if !self.match_separator(",") {
                    break;
                }
            }
        }

        Ok(params)
    }

    fn parse_return_statement(&mut self) -> Result<Statement, ParseError> {
        self.expect_keyword(Keyword::Return)?;
        let value = self.parse_expression()?;
        self.expect_separator(";")?;

        Ok(Statement::Return(value))
    }

    /// Parse a braced statement list; it ends exactly at the closing brace
    /// and may be empty.
    fn parse_block(&mut self) -> Result<Vec<Statement>, ParseError> {
        self.expect_separator("{")?;

        let mut statements = Vec::new();
        while !self.check_separator("}") && !self.is_at_end() {
            statements.push(self.parse_statement()?);
        }

        self.expect_separator("}")?;
        Ok(statements)
    }

    fn parse_type_name(&mut self) -> Result<TypeName, ParseError> {
        let type_name = self
            .peek()
            .and_then(|token| token.keyword())
            .and_then(TypeName::from_keyword);

        match type_name {
            Some(type_name) => {
                self.advance();
                Ok(type_name)
            }
            None => Err(self.unexpected("type name")),
        }
    }
}
