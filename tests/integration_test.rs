use std::{cell::RefCell, fmt::Arguments, rc::Rc};

use rlox_syntax::{
    logger::Logger,
    stmt::{
        Block, Break, Class, Continue, Expression, For, Function, If, Method, Return, Var,
        Visitor, While,
    },
    syntax::expr::Variable,
    AstPrinter, Expr, Literal, Stmt, SyntaxError, Token, TokenType,
};

struct MockLogger {
    logs: Rc<RefCell<Vec<String>>>,
}

impl MockLogger {
    fn new() -> MockLogger {
        MockLogger {
            logs: Rc::new(RefCell::new(vec![])),
        }
    }
}

impl Logger for MockLogger {
    fn print(&mut self, value: Arguments) {
        self.logs.borrow_mut().push(value.to_string());
    }
}

fn token(token_type: TokenType, lexeme: &str, line: usize) -> Token {
    Token::new(token_type, lexeme.into(), Literal::None, line)
}

fn identifier(name: &str) -> Token {
    token(TokenType::Identifier, name, 1)
}

fn number(value: f64) -> Expr {
    Expr::literal(Literal::Number(value))
}

fn shape_class() -> Stmt {
    let area = Function::new(
        identifier("area"),
        vec![],
        vec![Return::new(token(TokenType::Return, "return", 3), Some(number(0.0))).into()],
    );
    let create = Function::new(
        identifier("create"),
        vec![identifier("kind")],
        vec![Return::new(
            token(TokenType::Return, "return", 6),
            Some(Expr::call(
                Expr::variable(identifier("Shape")),
                token(TokenType::RightParen, ")", 6),
                vec![],
            )),
        )
        .into()],
    );

    Class::new(
        identifier("Shape"),
        None,
        vec![Method::new(area, false), Method::new(create, true)],
    )
    .into()
}

#[test]
fn shape_class_renders_static_and_superclass_distinctly() {
    let rendered = AstPrinter.print_stmt(&shape_class());

    assert_eq!(
        rendered,
        "(class Shape \
         (method (fun area () (return 0))) \
         (static method (fun create (kind) (return (call Shape)))))"
    );
    assert!(!rendered.contains(" < "));

    let derived: Stmt = Class::new(
        identifier("Square"),
        Some(Variable::new(identifier("Shape"))),
        vec![],
    )
    .into();
    assert_eq!(AstPrinter.print_stmt(&derived), "(class Square < Shape)");
}

#[test]
fn mismatched_var_is_rejected_and_reported() {
    let logger = Box::new(MockLogger::new());
    let logs = logger.logs.clone();
    let mut logger: Box<dyn Logger> = logger;

    let result = Var::new(
        vec![
            token(TokenType::Identifier, "a", 9),
            token(TokenType::Identifier, "b", 9),
        ],
        vec![Some(number(1.0)), Some(number(2.0)), None],
    );

    let err = result.unwrap_err();
    assert!(matches!(
        err,
        SyntaxError::InitializerCountMismatch {
            names: 2,
            initializers: 3,
            ..
        }
    ));

    err.report(logger.as_mut());
    assert_eq!(
        logs.borrow().as_slice(),
        ["[line 9] Error: Variable declaration has 2 name(s) but 3 initializer slot(s)."]
    );
}

/// Collects declared names. Descends into blocks, control flow and class
/// bodies but deliberately not into function bodies.
#[derive(Default)]
struct Declarations {
    names: Vec<String>,
}

impl Declarations {
    fn declare(&mut self, name: &Token) {
        self.names.push(name.lexeme.clone());
    }
}

impl Visitor<()> for Declarations {
    fn visit_block_stmt(&mut self, stmt: &Block) {
        for statement in stmt.statements() {
            statement.accept(self);
        }
    }

    fn visit_expression_stmt(&mut self, _stmt: &Expression) {}

    fn visit_var_stmt(&mut self, stmt: &Var) {
        for name in stmt.names() {
            self.declare(name);
        }
    }

    fn visit_function_stmt(&mut self, stmt: &Function) {
        self.declare(stmt.name());
    }

    fn visit_method_stmt(&mut self, stmt: &Method) {
        stmt.function().accept(self);
    }

    fn visit_class_stmt(&mut self, stmt: &Class) {
        self.declare(stmt.name());
        for method in stmt.methods() {
            method.accept(self);
        }
    }

    fn visit_break_stmt(&mut self, _stmt: &Break) {}

    fn visit_continue_stmt(&mut self, _stmt: &Continue) {}

    fn visit_return_stmt(&mut self, _stmt: &Return) {}

    fn visit_if_stmt(&mut self, stmt: &If) {
        stmt.then_branch().accept(self);
        if let Some(else_branch) = stmt.else_branch() {
            else_branch.accept(self);
        }
    }

    fn visit_while_stmt(&mut self, stmt: &While) {
        stmt.body().accept(self);
    }

    fn visit_for_stmt(&mut self, stmt: &For) {
        if let Some(initializer) = stmt.initializer() {
            initializer.accept(self);
        }
        stmt.body().accept(self);
    }
}

#[test]
fn consumer_controls_how_deep_it_walks() {
    let inner_var = Var::new(vec![identifier("hidden")], vec![None]).unwrap();
    let program: Vec<Stmt> = vec![
        Var::new(
            vec![identifier("x"), identifier("y")],
            vec![Some(number(1.0)), None],
        )
        .unwrap()
        .into(),
        Function::new(identifier("helper"), vec![], vec![inner_var.into()]).into(),
        For::new(
            Some(Var::new(vec![identifier("i")], vec![Some(number(0.0))]).unwrap().into()),
            None,
            None,
            Block::new(vec![
                Var::new(vec![identifier("step")], vec![None]).unwrap().into(),
                Break::new(token(TokenType::Break, "break", 4)).into(),
            ])
            .into(),
        )
        .into(),
        shape_class(),
    ];

    let mut declarations = Declarations::default();
    for stmt in &program {
        stmt.accept(&mut declarations);
    }

    assert_eq!(
        declarations.names,
        vec!["x", "y", "helper", "i", "step", "Shape", "area", "create"]
    );
}

#[test]
fn printed_program_keeps_declaration_order() {
    let program: Vec<Stmt> = vec![
        Expression::new(number(1.0)).into(),
        Expression::new(number(2.0)).into(),
        Expression::new(number(3.0)).into(),
    ];

    assert_eq!(AstPrinter.print_program(&program), "(; 1)\n(; 2)\n(; 3)");
}

#[test]
fn continue_and_break_keep_their_keywords() {
    let body: Stmt = Block::new(vec![
        If::new(
            Expr::literal(Literal::Bool(true)),
            Continue::new(token(TokenType::Continue, "continue", 2)).into(),
            Some(Break::new(token(TokenType::Break, "break", 3)).into()),
        )
        .into(),
    ])
    .into();
    let stmt: Stmt = While::new(Expr::literal(Literal::Bool(true)), body).into();

    let Stmt::While(node) = &stmt else {
        panic!("expected a while statement");
    };
    let Stmt::Block(block) = node.body() else {
        panic!("expected a block body");
    };
    let Stmt::If(branch) = &block.statements()[0] else {
        panic!("expected an if statement");
    };

    assert!(matches!(branch.then_branch(), Stmt::Continue(c) if c.keyword().line == 2));
    assert!(matches!(branch.else_branch(), Some(Stmt::Break(b)) if b.keyword().line == 3));
    assert_eq!(
        AstPrinter.print_stmt(&stmt),
        "(while true (block (if-else true (continue) (break))))"
    );
}
