use crate::syntax::{
    expr::{self, Expr},
    stmt::{self, Stmt},
    token::Token,
};

/// Renders trees as S-expressions. Absent optional parts are shown, never
/// dropped: a missing `for` clause prints as `_`, a missing `else` switches
/// `if-else` to `if`.
pub struct AstPrinter;

impl AstPrinter {
    pub fn print_expr(&mut self, expr: &Expr) -> String {
        expr.accept(self)
    }

    pub fn print_stmt(&mut self, stmt: &Stmt) -> String {
        stmt.accept(self)
    }

    pub fn print_program(&mut self, statements: &[Stmt]) -> String {
        statements
            .iter()
            .map(|stmt| self.print_stmt(stmt))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn parenthesize(&mut self, name: &str, exprs: Vec<&Expr>) -> String {
        let mut str = format!("({}", name);

        for expr in exprs {
            str.push(' ');
            str.push_str(&self.print_expr(expr));
        }
        str.push(')');

        str
    }

    fn parenthesize_parts(name: &str, parts: Vec<String>) -> String {
        let mut str = format!("({}", name);

        for part in parts {
            str.push(' ');
            str.push_str(&part);
        }
        str.push(')');

        str
    }

    fn print_all(&mut self, statements: &[Stmt]) -> Vec<String> {
        statements.iter().map(|stmt| self.print_stmt(stmt)).collect()
    }

    fn names(tokens: &[Token]) -> String {
        let names: Vec<&str> = tokens.iter().map(|token| token.lexeme.as_str()).collect();
        format!("({})", names.join(" "))
    }
}

impl expr::Visitor<String> for AstPrinter {
    fn visit_expr(&mut self, expr: &Expr) -> String {
        match expr {
            Expr::Binary {
                left,
                operator,
                right,
                ..
            } => self.parenthesize(&operator.lexeme, vec![left.as_ref(), right.as_ref()]),
            Expr::Grouping { expression, .. } => {
                self.parenthesize("group", vec![expression.as_ref()])
            }
            Expr::Literal { value, .. } => value.to_string(),
            Expr::Unary {
                operator, right, ..
            } => self.parenthesize(&operator.lexeme, vec![right.as_ref()]),
            Expr::Variable(variable) => variable.name.lexeme.clone(),
            Expr::Assign { name, value, .. } => {
                self.parenthesize(&format!("= {}", name.lexeme), vec![value.as_ref()])
            }
            Expr::Logical {
                left,
                operator,
                right,
                ..
            } => self.parenthesize(&operator.lexeme, vec![left.as_ref(), right.as_ref()]),
            Expr::Call {
                callee, arguments, ..
            } => {
                let mut exprs = vec![callee.as_ref()];
                exprs.extend(arguments.iter());
                self.parenthesize("call", exprs)
            }
            Expr::Get { object, name, .. } => {
                format!("(. {} {})", self.print_expr(object), name.lexeme)
            }
            Expr::Set {
                object,
                name,
                value,
                ..
            } => format!(
                "(= (. {} {}) {})",
                self.print_expr(object),
                name.lexeme,
                self.print_expr(value)
            ),
            Expr::This { .. } => "this".into(),
            Expr::Super { method, .. } => format!("(super {})", method.lexeme),
        }
    }
}

impl stmt::Visitor<String> for AstPrinter {
    fn visit_block_stmt(&mut self, stmt: &stmt::Block) -> String {
        let parts = self.print_all(stmt.statements());
        AstPrinter::parenthesize_parts("block", parts)
    }

    fn visit_expression_stmt(&mut self, stmt: &stmt::Expression) -> String {
        self.parenthesize(";", vec![stmt.expression()])
    }

    fn visit_var_stmt(&mut self, stmt: &stmt::Var) -> String {
        let mut parts = vec![];
        for (name, initializer) in stmt.bindings() {
            match initializer {
                Some(initializer) => {
                    parts.push(self.parenthesize(&format!("= {}", name.lexeme), vec![initializer]))
                }
                None => parts.push(name.lexeme.clone()),
            }
        }
        AstPrinter::parenthesize_parts("var", parts)
    }

    fn visit_function_stmt(&mut self, stmt: &stmt::Function) -> String {
        let mut parts = vec![
            stmt.name().lexeme.clone(),
            AstPrinter::names(stmt.parameters()),
        ];
        parts.extend(self.print_all(stmt.body()));
        AstPrinter::parenthesize_parts("fun", parts)
    }

    fn visit_method_stmt(&mut self, stmt: &stmt::Method) -> String {
        let function = stmt.function().accept(self);
        if stmt.is_static() {
            AstPrinter::parenthesize_parts("static method", vec![function])
        } else {
            AstPrinter::parenthesize_parts("method", vec![function])
        }
    }

    fn visit_class_stmt(&mut self, stmt: &stmt::Class) -> String {
        let mut parts = vec![stmt.name().lexeme.clone()];
        if let Some(superclass) = stmt.superclass() {
            parts.push(format!("< {}", superclass.name.lexeme));
        }
        for method in stmt.methods() {
            parts.push(method.accept(self));
        }
        AstPrinter::parenthesize_parts("class", parts)
    }

    fn visit_break_stmt(&mut self, _stmt: &stmt::Break) -> String {
        "(break)".into()
    }

    fn visit_continue_stmt(&mut self, _stmt: &stmt::Continue) -> String {
        "(continue)".into()
    }

    fn visit_return_stmt(&mut self, stmt: &stmt::Return) -> String {
        match stmt.value() {
            Some(value) => self.parenthesize("return", vec![value]),
            None => "(return)".into(),
        }
    }

    fn visit_if_stmt(&mut self, stmt: &stmt::If) -> String {
        let condition = self.print_expr(stmt.condition());
        let then_branch = self.print_stmt(stmt.then_branch());

        match stmt.else_branch() {
            Some(else_branch) => {
                let else_branch = self.print_stmt(else_branch);
                AstPrinter::parenthesize_parts("if-else", vec![condition, then_branch, else_branch])
            }
            None => AstPrinter::parenthesize_parts("if", vec![condition, then_branch]),
        }
    }

    fn visit_while_stmt(&mut self, stmt: &stmt::While) -> String {
        let parts = vec![
            self.print_expr(stmt.condition()),
            self.print_stmt(stmt.body()),
        ];
        AstPrinter::parenthesize_parts("while", parts)
    }

    fn visit_for_stmt(&mut self, stmt: &stmt::For) -> String {
        let parts = vec![
            stmt.initializer()
                .map_or("_".into(), |initializer| self.print_stmt(initializer)),
            stmt.condition()
                .map_or("_".into(), |condition| self.print_expr(condition)),
            stmt.increment()
                .map_or("_".into(), |increment| self.print_expr(increment)),
            self.print_stmt(stmt.body()),
        ];
        AstPrinter::parenthesize_parts("for", parts)
    }
}
