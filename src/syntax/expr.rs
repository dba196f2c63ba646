use std::hash::Hash;

use crate::utils::id_factory::{new_uid, Id};

use super::token::{Literal, Token};

// Notes
//
// 1. Box
// A recursive enum has no known size, `Box<T>` does. So every child
// expression lives behind one.
//
// 2. Identity
// Each node gets an `Id` when it is built. Equality and hashing only look
// at that id, never at the shape: `a + b` on line 1 and `a + b` on line 2
// are two different expressions. Resolvers key their side tables on it.

pub trait Visitor<T> {
    fn visit_expr(&mut self, expression: &Expr) -> T;
}

/// A variable reference. Kept as its own struct because a class declaration
/// names its superclass with exactly this kind of node.
#[derive(Debug, Clone)]
pub struct Variable {
    pub uid: Id,
    pub name: Token,
}

impl Variable {
    pub fn new(name: Token) -> Self {
        Self {
            uid: new_uid(),
            name,
        }
    }
}

impl PartialEq for Variable {
    fn eq(&self, other: &Self) -> bool {
        self.uid == other.uid
    }
}

impl Eq for Variable {}

#[derive(Debug, Clone)]
pub enum Expr {
    Binary {
        uid: Id,
        left: Box<Expr>,
        operator: Token,
        right: Box<Expr>,
    },
    Grouping {
        uid: Id,
        expression: Box<Expr>,
    },
    Literal {
        uid: Id,
        value: Literal,
    },
    Unary {
        uid: Id,
        operator: Token,
        right: Box<Expr>,
    },
    Variable(Variable),
    Assign {
        uid: Id,
        name: Token,
        value: Box<Expr>,
    },
    Logical {
        uid: Id,
        left: Box<Expr>,
        operator: Token,
        right: Box<Expr>,
    },
    Call {
        uid: Id,
        callee: Box<Expr>,
        paren: Token,
        arguments: Vec<Expr>,
    },
    Get {
        uid: Id,
        object: Box<Expr>,
        name: Token,
    },
    Set {
        uid: Id,
        object: Box<Expr>,
        name: Token,
        value: Box<Expr>,
    },
    This {
        uid: Id,
        keyword: Token,
    },
    Super {
        uid: Id,
        keyword: Token,
        method: Token,
    },
}

impl Expr {
    pub fn binary(left: Expr, operator: Token, right: Expr) -> Expr {
        Expr::Binary {
            uid: new_uid(),
            left: Box::new(left),
            operator,
            right: Box::new(right),
        }
    }

    pub fn grouping(expression: Expr) -> Expr {
        Expr::Grouping {
            uid: new_uid(),
            expression: Box::new(expression),
        }
    }

    pub fn literal(value: Literal) -> Expr {
        Expr::Literal {
            uid: new_uid(),
            value,
        }
    }

    pub fn unary(operator: Token, right: Expr) -> Expr {
        Expr::Unary {
            uid: new_uid(),
            operator,
            right: Box::new(right),
        }
    }

    pub fn variable(name: Token) -> Expr {
        Expr::Variable(Variable::new(name))
    }

    pub fn assign(name: Token, value: Expr) -> Expr {
        Expr::Assign {
            uid: new_uid(),
            name,
            value: Box::new(value),
        }
    }

    pub fn logical(left: Expr, operator: Token, right: Expr) -> Expr {
        Expr::Logical {
            uid: new_uid(),
            left: Box::new(left),
            operator,
            right: Box::new(right),
        }
    }

    pub fn call(callee: Expr, paren: Token, arguments: Vec<Expr>) -> Expr {
        Expr::Call {
            uid: new_uid(),
            callee: Box::new(callee),
            paren,
            arguments,
        }
    }

    pub fn get(object: Expr, name: Token) -> Expr {
        Expr::Get {
            uid: new_uid(),
            object: Box::new(object),
            name,
        }
    }

    pub fn set(object: Expr, name: Token, value: Expr) -> Expr {
        Expr::Set {
            uid: new_uid(),
            object: Box::new(object),
            name,
            value: Box::new(value),
        }
    }

    pub fn this(keyword: Token) -> Expr {
        Expr::This {
            uid: new_uid(),
            keyword,
        }
    }

    pub fn super_method(keyword: Token, method: Token) -> Expr {
        Expr::Super {
            uid: new_uid(),
            keyword,
            method,
        }
    }

    pub fn uid(&self) -> Id {
        match self {
            Expr::Binary { uid, .. } => *uid,
            Expr::Grouping { uid, .. } => *uid,
            Expr::Literal { uid, .. } => *uid,
            Expr::Unary { uid, .. } => *uid,
            Expr::Variable(variable) => variable.uid,
            Expr::Assign { uid, .. } => *uid,
            Expr::Logical { uid, .. } => *uid,
            Expr::Call { uid, .. } => *uid,
            Expr::Get { uid, .. } => *uid,
            Expr::Set { uid, .. } => *uid,
            Expr::This { uid, .. } => *uid,
            Expr::Super { uid, .. } => *uid,
        }
    }

    pub fn accept<T, V: Visitor<T> + ?Sized>(&self, visitor: &mut V) -> T {
        visitor.visit_expr(self)
    }
}

impl From<Variable> for Expr {
    fn from(variable: Variable) -> Self {
        Expr::Variable(variable)
    }
}

impl PartialEq for Expr {
    fn eq(&self, other: &Self) -> bool {
        self.uid() == other.uid()
    }
}

impl Eq for Expr {}

impl Hash for Expr {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.uid().hash(state);
    }
}
