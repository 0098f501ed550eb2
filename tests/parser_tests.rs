use std::fs;

use glagol::lexer::tokenize;
use glagol::parser::{
    parse, AddOp, Expr, Literal, MulOp, Parameter, ParseError, Program, Statement, TypeName,
    MAX_NESTING,
};

fn parse_source(source: &str) -> Result<Program, ParseError> {
    let tokens = tokenize(source).expect("scan failed");
    parse(tokens)
}

fn number(text: &str) -> Expr {
    Expr::Literal(Literal::Number(text.to_string()))
}

fn ident(name: &str) -> Expr {
    Expr::Identifier(name.to_string())
}

fn sum(left: Expr, op: AddOp, right: Expr) -> Expr {
    Expr::Sum {
        left: Box::new(left),
        op,
        right: Box::new(right),
    }
}

fn product(left: Expr, op: MulOp, right: Expr) -> Expr {
    Expr::Product {
        left: Box::new(left),
        op,
        right: Box::new(right),
    }
}

#[test]
fn test_declaration() {
    let program = parse_source("даждь значение цело = 5;").expect("parse failed");

    assert_eq!(
        program.statements,
        vec![Statement::Declaration {
            name: "значение".to_string(),
            type_name: TypeName::Int,
            value: number("5"),
        }]
    );
}

#[test]
fn test_precedence_multiplication_binds_tighter() {
    let program = parse_source("х = 1 + 2 * 3;").expect("parse failed");

    assert_eq!(
        program.statements,
        vec![Statement::Assignment {
            name: "х".to_string(),
            value: sum(
                number("1"),
                AddOp::Add,
                product(number("2"), MulOp::Mul, number("3")),
            ),
        }]
    );
}

#[test]
fn test_additive_operators_left_associative() {
    let program = parse_source("х = 1 - 2 - 3;").expect("parse failed");

    assert_eq!(
        program.statements,
        vec![Statement::Assignment {
            name: "х".to_string(),
            value: sum(
                sum(number("1"), AddOp::Sub, number("2")),
                AddOp::Sub,
                number("3"),
            ),
        }]
    );
}

#[test]
fn test_multiplicative_operators_left_associative() {
    let program = parse_source("х = 8 / 4 / 2;").expect("parse failed");

    assert_eq!(
        program.statements,
        vec![Statement::Assignment {
            name: "х".to_string(),
            value: product(
                product(number("8"), MulOp::Div, number("4")),
                MulOp::Div,
                number("2"),
            ),
        }]
    );
}

#[test]
fn test_parentheses_group_without_extra_node() {
    let program = parse_source("х = (1 + 2) * 3;").expect("parse failed");

    assert_eq!(
        program.statements,
        vec![Statement::Assignment {
            name: "х".to_string(),
            value: product(
                sum(number("1"), AddOp::Add, number("2")),
                MulOp::Mul,
                number("3"),
            ),
        }]
    );
}

#[test]
fn test_if_with_both_branches() {
    let program = parse_source("аще (х) { х = 1; } иначе { }").expect("parse failed");

    assert_eq!(
        program.statements,
        vec![Statement::If {
            condition: ident("х"),
            then_branch: vec![Statement::Assignment {
                name: "х".to_string(),
                value: number("1"),
            }],
            else_branch: vec![],
        }]
    );
}

#[test]
fn test_else_is_mandatory_at_end_of_input() {
    let error = parse_source("аще (х) { }").expect_err("if without else");

    assert_eq!(
        error,
        ParseError::UnexpectedEndOfInput {
            expected: "keyword 'иначе'".to_string(),
            position: 6,
        }
    );
}

#[test]
fn test_else_is_mandatory_before_next_statement() {
    let error = parse_source("аще (х) { } х = 1;").expect_err("if without else");

    assert_eq!(
        error,
        ParseError::UnexpectedToken {
            expected: "keyword 'иначе'".to_string(),
            found: "identifier 'х'".to_string(),
            position: 6,
        }
    );
}

#[test]
fn test_if_condition_requires_parentheses() {
    let error = parse_source("аще х { } иначе { }").expect_err("unparenthesized condition");

    assert_eq!(
        error,
        ParseError::UnexpectedToken {
            expected: "'('".to_string(),
            found: "identifier 'х'".to_string(),
            position: 1,
        }
    );
}

#[test]
fn test_while_with_empty_body() {
    let program = parse_source("доколе (х) { }").expect("parse failed");

    assert_eq!(
        program.statements,
        vec![Statement::While {
            condition: ident("х"),
            body: vec![],
        }]
    );
}

#[test]
fn test_function_with_parameters() {
    let program =
        parse_source("твори сложить (цело а, строка б) { воздать а + б; }").expect("parse failed");

    assert_eq!(
        program.statements,
        vec![Statement::Function {
            name: "сложить".to_string(),
            params: vec![
                Parameter {
                    type_name: TypeName::Int,
                    name: "а".to_string(),
                },
                Parameter {
                    type_name: TypeName::Str,
                    name: "б".to_string(),
                },
            ],
            body: vec![Statement::Return(sum(ident("а"), AddOp::Add, ident("б")))],
        }]
    );
}

#[test]
fn test_function_without_parameters() {
    let program = parse_source("твори главная () { }").expect("parse failed");

    assert_eq!(
        program.statements,
        vec![Statement::Function {
            name: "главная".to_string(),
            params: vec![],
            body: vec![],
        }]
    );
}

#[test]
fn test_return_statement() {
    let program = parse_source("воздать 42;").expect("parse failed");
    assert_eq!(program.statements, vec![Statement::Return(number("42"))]);
}

#[test]
fn test_string_literal_value_keeps_quotes() {
    let program = parse_source("имя = \"мир\";").expect("parse failed");

    assert_eq!(
        program.statements,
        vec![Statement::Assignment {
            name: "имя".to_string(),
            value: Expr::Literal(Literal::Text("\"мир\"".to_string())),
        }]
    );
}

#[test]
fn test_top_level_statement_count() {
    let source = "\
даждь а цело = 1;
а = а + 1;
доколе (а) { а = а - 1; }
аще (а) { } иначе { а = 0; }
";
    let program = parse_source(source).expect("parse failed");
    assert_eq!(program.statements.len(), 4);
}

#[test]
fn test_empty_program() {
    let program = parse_source("").expect("parse failed");
    assert_eq!(program.statements, vec![]);
}

#[test]
fn test_comments_are_invisible_to_the_grammar() {
    let program =
        parse_source("даждь х цело = /* пояснение */ 5; // конец").expect("parse failed");

    assert_eq!(
        program.statements,
        vec![Statement::Declaration {
            name: "х".to_string(),
            type_name: TypeName::Int,
            value: number("5"),
        }]
    );
}

#[test]
fn test_error_positions_index_comment_filtered_tokens() {
    let error = parse_source("// заметка\nх 5;").expect_err("assignment without '='");

    assert_eq!(
        error,
        ParseError::UnexpectedToken {
            expected: "'='".to_string(),
            found: "number 5".to_string(),
            position: 1,
        }
    );
}

#[test]
fn test_missing_type_in_declaration() {
    let error = parse_source("даждь х = 5;").expect_err("declaration without type");

    assert_eq!(
        error,
        ParseError::UnexpectedToken {
            expected: "type name".to_string(),
            found: "'='".to_string(),
            position: 2,
        }
    );
}

#[test]
fn test_missing_semicolon_fails_the_same_way_twice() {
    let tokens = tokenize("даждь х цело = 5").expect("scan failed");

    let first = parse(tokens.clone()).expect_err("declaration without ';'");
    let second = parse(tokens).expect_err("declaration without ';'");

    assert_eq!(first, second);
    assert_eq!(
        first,
        ParseError::UnexpectedEndOfInput {
            expected: "';'".to_string(),
            position: 5,
        }
    );
}

#[test]
fn test_reserved_keywords_do_not_start_statements() {
    let error = parse_source("от х;").expect_err("'от' has no statement rule");
    assert_eq!(
        error,
        ParseError::UnexpectedToken {
            expected: "statement".to_string(),
            found: "keyword 'от'".to_string(),
            position: 0,
        }
    );

    let error = parse_source("введи имя;").expect_err("'введи' has no statement rule");
    assert_eq!(
        error,
        ParseError::UnexpectedToken {
            expected: "statement".to_string(),
            found: "keyword 'введи'".to_string(),
            position: 0,
        }
    );
}

#[test]
fn test_comparison_operators_have_no_grammar_rule() {
    let error = parse_source("аще (х > 5) { } иначе { }").expect_err("'>' is not parseable");

    assert_eq!(
        error,
        ParseError::UnexpectedToken {
            expected: "')'".to_string(),
            found: "'>'".to_string(),
            position: 3,
        }
    );
}

#[test]
fn test_stray_closing_brace_falls_through_to_assignment() {
    let error = parse_source("}").expect_err("'}' starts no statement");

    assert_eq!(
        error,
        ParseError::UnexpectedToken {
            expected: "identifier".to_string(),
            found: "'}'".to_string(),
            position: 0,
        }
    );
}

#[test]
fn test_nesting_limit_is_reported_not_crashed() {
    let depth = MAX_NESTING + 10;
    let mut source = String::from("х = ");
    source.push_str(&"(".repeat(depth));
    source.push('1');
    source.push_str(&")".repeat(depth));
    source.push(';');

    match parse_source(&source) {
        Err(ParseError::NestingTooDeep { limit, .. }) => assert_eq!(limit, MAX_NESTING),
        other => panic!("expected a nesting error, got {other:?}"),
    }
}

#[test]
fn test_deep_but_legal_nesting() {
    let depth = 200;
    let mut source = String::from("х = ");
    source.push_str(&"(".repeat(depth));
    source.push('1');
    source.push_str(&")".repeat(depth));
    source.push(';');

    let program = parse_source(&source).expect("parse failed");
    assert_eq!(
        program.statements,
        vec![Statement::Assignment {
            name: "х".to_string(),
            value: number("1"),
        }]
    );
}

#[test]
fn test_parsing_is_deterministic() {
    let tokens = tokenize("аще (х + 1) { воздать 2; } иначе { }").expect("scan failed");

    let first = parse(tokens.clone()).expect("parse failed");
    let second = parse(tokens).expect("parse failed");
    assert_eq!(first, second);
}

#[test]
fn test_fixture_programs_parse() {
    let cases = [
        ("tests/programs/greeting.glg", 3),
        ("tests/programs/loops.glg", 3),
        ("tests/programs/functions.glg", 2),
    ];

    for (path, statements) in cases {
        let source = fs::read_to_string(path).expect("failed to read fixture");
        let program = parse_source(&source)
            .unwrap_or_else(|error| panic!("fixture {path} failed to parse: {error}"));
        assert_eq!(program.statements.len(), statements, "fixture {path}");
    }
}
