use anyhow::{Context, Result};
use clap::{Parser as ClapParser, Subcommand};
use std::fs;
use std::path::PathBuf;

use glagol::lexer::tokenize;
use glagol::parser::{parse, Expr, Literal, Program, Statement};

#[derive(ClapParser)]
#[command(name = "glagol")]
#[command(about = "Front end for the Glagol toy language", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Tokenize the input file and print tokens
    Lex {
        /// Input file path
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
    /// Parse the input file and print the syntax tree
    Parse {
        /// Input file path
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Lex { file } => lex_file(&file)?,
        Commands::Parse { file } => parse_file(&file)?,
    }

    Ok(())
}

fn lex_file(path: &PathBuf) -> Result<()> {
    let input = fs::read_to_string(path)
        .with_context(|| format!("failed to read file '{}'", path.display()))?;

    let tokens = tokenize(&input)
        .with_context(|| format!("failed to tokenize '{}'", path.display()))?;

    println!("Tokens:");
    println!("-------");
    for token in &tokens {
        println!("{:<11} {}", token.kind, token.text);
    }

    println!("\nTotal tokens: {}", tokens.len());

    Ok(())
}

fn parse_file(path: &PathBuf) -> Result<()> {
    let input = fs::read_to_string(path)
        .with_context(|| format!("failed to read file '{}'", path.display()))?;

    let tokens = tokenize(&input)
        .with_context(|| format!("failed to tokenize '{}'", path.display()))?;

    let program = parse(tokens)
        .with_context(|| format!("failed to parse '{}'", path.display()))?;

    println!("Program AST:");
    println!("============");
    print!("{}", render_program(&program));

    Ok(())
}

fn render_program(program: &Program) -> String {
    AstPrinter::new().render(program)
}

/// Read-only indented dump of the syntax tree, two spaces per level.
struct AstPrinter {
    out: String,
    indent: usize,
}

impl AstPrinter {
    fn new() -> Self {
        Self {
            out: String::new(),
            indent: 0,
        }
    }

    fn render(mut self, program: &Program) -> String {
        self.line(&format!("Program ({} statements)", program.statements.len()));
        self.indent += 1;
        for statement in &program.statements {
            self.statement(statement);
        }
        self.indent -= 1;
        self.out
    }

    fn line(&mut self, text: &str) {
        for _ in 0..self.indent {
            self.out.push_str("  ");
        }
        self.out.push_str(text);
        self.out.push('\n');
    }

    fn statement(&mut self, statement: &Statement) {
        match statement {
            Statement::Declaration {
                name,
                type_name,
                value,
            } => {
                self.line(&format!("Declaration '{}' : {}", name, type_name));
                self.indent += 1;
                self.expr(value);
                self.indent -= 1;
            }
            Statement::Assignment { name, value } => {
                self.line(&format!("Assignment '{}'", name));
                self.indent += 1;
                self.expr(value);
                self.indent -= 1;
            }
            Statement::If {
                condition,
                then_branch,
                else_branch,
            } => {
                self.line("If");
                self.indent += 1;
                self.line("condition:");
                self.indent += 1;
                self.expr(condition);
                self.indent -= 1;
                self.line("then:");
                self.block(then_branch);
                self.line("else:");
                self.block(else_branch);
                self.indent -= 1;
            }
            Statement::While { condition, body } => {
                self.line("While");
                self.indent += 1;
                self.line("condition:");
                self.indent += 1;
                self.expr(condition);
                self.indent -= 1;
                self.line("body:");
                self.block(body);
                self.indent -= 1;
            }
            Statement::Function { name, params, body } => {
                let params: Vec<String> = params
                    .iter()
                    .map(|param| format!("{} {}", param.type_name, param.name))
                    .collect();
                self.line(&format!("Function '{}' ({})", name, params.join(", ")));
                self.block(body);
            }
            Statement::Return(value) => {
                self.line("Return");
                self.indent += 1;
                self.expr(value);
                self.indent -= 1;
            }
        }
    }

    fn block(&mut self, statements: &[Statement]) {
        self.indent += 1;
        if statements.is_empty() {
            self.line("(empty)");
        }
        for statement in statements {
            self.statement(statement);
        }
        self.indent -= 1;
    }

    fn expr(&mut self, expr: &Expr) {
        match expr {
            Expr::Sum { left, op, right } => {
                self.line(&format!("Sum '{}'", op));
                self.indent += 1;
                self.expr(left);
                self.expr(right);
                self.indent -= 1;
            }
            Expr::Product { left, op, right } => {
                self.line(&format!("Product '{}'", op));
                self.indent += 1;
                self.expr(left);
                self.expr(right);
                self.indent -= 1;
            }
            Expr::Literal(Literal::Number(text)) => {
                self.line(&format!("Number {}", text));
            }
            Expr::Literal(Literal::Text(text)) => {
                self.line(&format!("String {}", text));
            }
            Expr::Identifier(name) => {
                self.line(&format!("Identifier '{}'", name));
            }
        }
    }
}
