//! Syntax trees for a Tree-Walk Lox interpreter.
//!
//! Statements form a closed set of node types ([`Stmt`]); later phases
//! (resolver, interpreter, printer) act on them by implementing
//! [`stmt::Visitor`] and calling `accept`.

pub mod syntax;
pub mod utils;

pub use syntax::{
    error::SyntaxError,
    expr::Expr,
    stmt::{self, Stmt},
    token::{Literal, Token},
    token_type::TokenType,
};
pub use utils::{ast_printer::AstPrinter, logger};
