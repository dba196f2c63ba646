//! Statement syntax tree.
//!
//! The set of statements is closed: [`Stmt`] has one variant per statement
//! form, and every consumer implements [`Visitor`] with one method per
//! variant. Dispatch never walks into children on its own; a consumer that
//! wants to descend calls `accept` on the children it cares about, in the
//! order it chooses.
//!
//! Nodes are built once through `new` and only read afterwards. None of them
//! hand out mutable access to their fields.

use super::{
    error::{Result, SyntaxError},
    expr::{Expr, Variable},
    token::Token,
};

pub trait Visitor<R> {
    fn visit_block_stmt(&mut self, stmt: &Block) -> R;
    fn visit_expression_stmt(&mut self, stmt: &Expression) -> R;
    fn visit_var_stmt(&mut self, stmt: &Var) -> R;
    fn visit_function_stmt(&mut self, stmt: &Function) -> R;
    fn visit_method_stmt(&mut self, stmt: &Method) -> R;
    fn visit_class_stmt(&mut self, stmt: &Class) -> R;
    fn visit_break_stmt(&mut self, stmt: &Break) -> R;
    fn visit_continue_stmt(&mut self, stmt: &Continue) -> R;
    fn visit_return_stmt(&mut self, stmt: &Return) -> R;
    fn visit_if_stmt(&mut self, stmt: &If) -> R;
    fn visit_while_stmt(&mut self, stmt: &While) -> R;
    fn visit_for_stmt(&mut self, stmt: &For) -> R;
}

#[derive(Debug)]
pub enum Stmt {
    Block(Block),
    Expression(Expression),
    Var(Var),
    Function(Function),
    Method(Method),
    Class(Class),
    Break(Break),
    Continue(Continue),
    Return(Return),
    If(If),
    While(While),
    For(For),
}

impl Stmt {
    pub fn accept<R, V: Visitor<R> + ?Sized>(&self, visitor: &mut V) -> R {
        match self {
            Stmt::Block(stmt) => visitor.visit_block_stmt(stmt),
            Stmt::Expression(stmt) => visitor.visit_expression_stmt(stmt),
            Stmt::Var(stmt) => visitor.visit_var_stmt(stmt),
            Stmt::Function(stmt) => visitor.visit_function_stmt(stmt),
            Stmt::Method(stmt) => visitor.visit_method_stmt(stmt),
            Stmt::Class(stmt) => visitor.visit_class_stmt(stmt),
            Stmt::Break(stmt) => visitor.visit_break_stmt(stmt),
            Stmt::Continue(stmt) => visitor.visit_continue_stmt(stmt),
            Stmt::Return(stmt) => visitor.visit_return_stmt(stmt),
            Stmt::If(stmt) => visitor.visit_if_stmt(stmt),
            Stmt::While(stmt) => visitor.visit_while_stmt(stmt),
            Stmt::For(stmt) => visitor.visit_for_stmt(stmt),
        }
    }
}

// A class holds its methods and a method holds its function without a
// `Stmt` around them, so each node type carries its own entry point too.
macro_rules! node {
    ($($variant:ident => $visit:ident),* $(,)?) => {
        $(
            impl $variant {
                pub fn accept<R, V: Visitor<R> + ?Sized>(&self, visitor: &mut V) -> R {
                    visitor.$visit(self)
                }
            }

            impl From<$variant> for Stmt {
                fn from(stmt: $variant) -> Self {
                    Stmt::$variant(stmt)
                }
            }
        )*
    };
}

node!(
    Block => visit_block_stmt,
    Expression => visit_expression_stmt,
    Var => visit_var_stmt,
    Function => visit_function_stmt,
    Method => visit_method_stmt,
    Class => visit_class_stmt,
    Break => visit_break_stmt,
    Continue => visit_continue_stmt,
    Return => visit_return_stmt,
    If => visit_if_stmt,
    While => visit_while_stmt,
    For => visit_for_stmt,
);

#[derive(Debug)]
pub struct Block {
    statements: Vec<Stmt>,
}

impl Block {
    pub fn new(statements: Vec<Stmt>) -> Self {
        Self { statements }
    }

    pub fn statements(&self) -> &[Stmt] {
        &self.statements
    }
}

#[derive(Debug)]
pub struct Expression {
    expression: Expr,
}

impl Expression {
    pub fn new(expression: Expr) -> Self {
        Self { expression }
    }

    pub fn expression(&self) -> &Expr {
        &self.expression
    }
}

/// `var a = 1, b;` declares names left to right. The slot at a name's
/// position holds its initializer, `None` when the name has none.
#[derive(Debug)]
pub struct Var {
    names: Vec<Token>,
    initializers: Vec<Option<Expr>>,
}

impl Var {
    pub fn new(names: Vec<Token>, initializers: Vec<Option<Expr>>) -> Result<Self> {
        if names.len() != initializers.len() {
            return Err(SyntaxError::InitializerCountMismatch {
                line: names.first().map(|name| name.line),
                names: names.len(),
                initializers: initializers.len(),
            });
        }

        Ok(Self {
            names,
            initializers,
        })
    }

    pub fn names(&self) -> &[Token] {
        &self.names
    }

    pub fn initializers(&self) -> &[Option<Expr>] {
        &self.initializers
    }

    pub fn bindings(&self) -> impl Iterator<Item = (&Token, Option<&Expr>)> {
        self.names
            .iter()
            .zip(self.initializers.iter().map(Option::as_ref))
    }
}

#[derive(Debug)]
pub struct Function {
    name: Token,
    parameters: Vec<Token>,
    body: Vec<Stmt>,
}

impl Function {
    pub fn new(name: Token, parameters: Vec<Token>, body: Vec<Stmt>) -> Self {
        Self {
            name,
            parameters,
            body,
        }
    }

    pub fn name(&self) -> &Token {
        &self.name
    }

    pub fn parameters(&self) -> &[Token] {
        &self.parameters
    }

    pub fn body(&self) -> &[Stmt] {
        &self.body
    }
}

/// A function declared inside a class body.
#[derive(Debug)]
pub struct Method {
    function: Function,
    is_static: bool,
}

impl Method {
    pub fn new(function: Function, is_static: bool) -> Self {
        Self {
            function,
            is_static,
        }
    }

    pub fn function(&self) -> &Function {
        &self.function
    }

    pub fn is_static(&self) -> bool {
        self.is_static
    }

    pub fn name(&self) -> &Token {
        self.function.name()
    }
}

#[derive(Debug)]
pub struct Class {
    name: Token,
    superclass: Option<Variable>,
    methods: Vec<Method>,
}

impl Class {
    pub fn new(name: Token, superclass: Option<Variable>, methods: Vec<Method>) -> Self {
        Self {
            name,
            superclass,
            methods,
        }
    }

    pub fn name(&self) -> &Token {
        &self.name
    }

    pub fn superclass(&self) -> Option<&Variable> {
        self.superclass.as_ref()
    }

    pub fn methods(&self) -> &[Method] {
        &self.methods
    }
}

#[derive(Debug)]
pub struct Break {
    keyword: Token,
}

impl Break {
    pub fn new(keyword: Token) -> Self {
        Self { keyword }
    }

    pub fn keyword(&self) -> &Token {
        &self.keyword
    }
}

#[derive(Debug)]
pub struct Continue {
    keyword: Token,
}

impl Continue {
    pub fn new(keyword: Token) -> Self {
        Self { keyword }
    }

    pub fn keyword(&self) -> &Token {
        &self.keyword
    }
}

#[derive(Debug)]
pub struct Return {
    keyword: Token,
    value: Option<Expr>,
}

impl Return {
    pub fn new(keyword: Token, value: Option<Expr>) -> Self {
        Self { keyword, value }
    }

    pub fn keyword(&self) -> &Token {
        &self.keyword
    }

    pub fn value(&self) -> Option<&Expr> {
        self.value.as_ref()
    }
}

#[derive(Debug)]
pub struct If {
    condition: Expr,
    then_branch: Box<Stmt>,
    else_branch: Option<Box<Stmt>>,
}

impl If {
    pub fn new(condition: Expr, then_branch: Stmt, else_branch: Option<Stmt>) -> Self {
        Self {
            condition,
            then_branch: Box::new(then_branch),
            else_branch: else_branch.map(Box::new),
        }
    }

    pub fn condition(&self) -> &Expr {
        &self.condition
    }

    pub fn then_branch(&self) -> &Stmt {
        &self.then_branch
    }

    pub fn else_branch(&self) -> Option<&Stmt> {
        self.else_branch.as_deref()
    }
}

#[derive(Debug)]
pub struct While {
    condition: Expr,
    body: Box<Stmt>,
}

impl While {
    pub fn new(condition: Expr, body: Stmt) -> Self {
        Self {
            condition,
            body: Box::new(body),
        }
    }

    pub fn condition(&self) -> &Expr {
        &self.condition
    }

    pub fn body(&self) -> &Stmt {
        &self.body
    }
}

/// C-style loop header. An absent condition loops until something inside
/// the body leaves it.
#[derive(Debug)]
pub struct For {
    initializer: Option<Box<Stmt>>,
    condition: Option<Expr>,
    increment: Option<Expr>,
    body: Box<Stmt>,
}

impl For {
    pub fn new(
        initializer: Option<Stmt>,
        condition: Option<Expr>,
        increment: Option<Expr>,
        body: Stmt,
    ) -> Self {
        Self {
            initializer: initializer.map(Box::new),
            condition,
            increment,
            body: Box::new(body),
        }
    }

    pub fn initializer(&self) -> Option<&Stmt> {
        self.initializer.as_deref()
    }

    pub fn condition(&self) -> Option<&Expr> {
        self.condition.as_ref()
    }

    pub fn increment(&self) -> Option<&Expr> {
        self.increment.as_ref()
    }

    pub fn body(&self) -> &Stmt {
        &self.body
    }
}
