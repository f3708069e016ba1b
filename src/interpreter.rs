use std::cell::RefCell;
use std::io::Write;
use std::mem;
use std::rc::Rc;

use crate::environment::Environment;
use crate::error::{RuntimeError, Unwind};
use crate::expr::{self, Expr};
use crate::function::{Function, NativeFunction};
use crate::literal::Literal;
use crate::object::Object;
use crate::stmt::{self, Stmt};
use crate::token::{Token, Type};

type EvalResult<T> = Result<T, Unwind>;

/// Walks the statement list and evaluates it against the environment chain.
/// Evaluation is strictly sequential and left-to-right: the left operand of
/// a binary expression is fully evaluated (side effects included) before the
/// right one, a callee before its arguments, and arguments in source order.
///
/// `print` output goes to the injected sink so that callers can capture it;
/// diagnostics go to the caller through the returned `RuntimeError`.
pub struct Interpreter<'a> {
    pub globals: Rc<RefCell<Environment>>,
    environment: Rc<RefCell<Environment>>,
    output: &'a mut dyn Write,
}

impl<'a> Interpreter<'a> {
    pub fn new(output: &'a mut dyn Write) -> Self {
        let globals = Rc::new(RefCell::new(Environment::default()));

        for native in NativeFunction::get_globals() {
            let name = native.name.lexeme.clone();
            globals.borrow_mut().define(&name, Object::from(native));
        }

        Interpreter {
            environment: Rc::clone(&globals),
            globals,
            output,
        }
    }

    /// Runs the statements in order. The first runtime error halts the
    /// program; side effects that already happened stand. A `return` signal
    /// must be consumed at a call frame, so one that reaches this loop is
    /// reported as a runtime error instead of escaping.
    pub fn interpret(&mut self, statements: &[Stmt]) -> Result<(), RuntimeError> {
        for statement in statements {
            match self.execute(statement) {
                Ok(()) => {},
                Err(Unwind::Error(error)) => return Err(error),
                Err(Unwind::Return { keyword, .. }) => {
                    return Err(RuntimeError {
                        token: keyword,
                        message: "Cannot return from top-level code".to_string(),
                    });
                },
            }
        }

        Ok(())
    }

    /// Executes a single statement.
    fn execute(&mut self, stmt: &Stmt) -> EvalResult<()> {
        match stmt {
            Stmt::Expression(data) => {
                self.evaluate(&data.expr)?;
                Ok(())
            },
            Stmt::Print(data) => self.print_stmt(data),
            Stmt::Var(data) => self.var_stmt(data),
            Stmt::Block(data) => {
                let environment = Environment::new(Some(Rc::clone(&self.environment)));
                self.execute_block(&data.statements, Rc::new(RefCell::new(environment)))
            },
            Stmt::If(data) => self.if_stmt(data),
            Stmt::While(data) => self.while_stmt(data),
            Stmt::Function(data) => self.function_stmt(data),
            Stmt::Return(data) => self.return_stmt(data),
        }
    }

    /// Executes statements inside the given environment, restoring the
    /// previous one on every exit path, including errors and `return`
    /// unwinds.
    pub fn execute_block(&mut self, statements: &[Stmt], environment: Rc<RefCell<Environment>>) -> EvalResult<()> {
        let previous = mem::replace(&mut self.environment, environment);
        let result = statements.iter().try_for_each(|statement| self.execute(statement));
        self.environment = previous;

        result
    }

    fn print_stmt(&mut self, print: &stmt::PrintData) -> EvalResult<()> {
        let value = self.evaluate(&print.expr)?;
        writeln!(self.output, "{value}").expect("output sink to be writable");

        Ok(())
    }

    fn var_stmt(&mut self, var: &stmt::VarData) -> EvalResult<()> {
        let value = match &var.initializer {
            Some(initializer) => self.evaluate(initializer)?,
            None => Object::from(Literal::Nil),
        };

        self.environment.borrow_mut().define(&var.name.lexeme, value);

        Ok(())
    }

    fn if_stmt(&mut self, data: &stmt::IfData) -> EvalResult<()> {
        if self.evaluate(&data.condition)?.is_truthy() {
            self.execute(&data.then_branch)
        } else if let Some(else_branch) = &data.else_branch {
            self.execute(else_branch)
        } else {
            Ok(())
        }
    }

    fn while_stmt(&mut self, data: &stmt::WhileData) -> EvalResult<()> {
        while self.evaluate(&data.condition)?.is_truthy() {
            self.execute(&data.body)?;
        }

        Ok(())
    }

    fn function_stmt(&mut self, data: &stmt::FunctionData) -> EvalResult<()> {
        // The closure is the environment active right here, at declaration.
        let function = Function::new(data, Rc::clone(&self.environment));
        self.environment.borrow_mut().define(&data.name.lexeme, Object::from(function));

        Ok(())
    }

    fn return_stmt(&mut self, data: &stmt::ReturnData) -> EvalResult<()> {
        let value = match &data.value {
            Some(value) => self.evaluate(value)?,
            None => Object::from(Literal::Nil),
        };

        Err(Unwind::Return { keyword: data.keyword.clone(), value })
    }

    /// Evaluates an expression to a value.
    fn evaluate(&mut self, expr: &Expr) -> EvalResult<Object> {
        match expr {
            Expr::Literal(literal) => Ok(Object::from(literal.clone())),
            Expr::Grouping(data) => self.evaluate(&data.expr),
            Expr::Unary(data) => self.unary_expr(data),
            Expr::Binary(data) => self.binary_expr(data),
            Expr::Logical(data) => self.logical_expr(data),
            Expr::Variable(data) => Ok(self.environment.borrow().get(&data.name)?),
            Expr::Assign(data) => self.assign_expr(data),
            Expr::Call(data) => self.call_expr(data),
        }
    }

    fn unary_expr(&mut self, unary: &expr::UnaryData) -> EvalResult<Object> {
        let right = self.evaluate(&unary.expr)?;

        match unary.operator.r#type {
            Type::Bang => Ok(Object::from(!right.is_truthy())),
            Type::Minus => (-right).ok_or_else(|| Unwind::from(RuntimeError {
                token: unary.operator.clone(),
                message: "Operand must be a number".to_string(),
            })),
            _ => unreachable!(),
        }
    }

    fn binary_expr(&mut self, binary: &expr::BinaryData) -> EvalResult<Object> {
        let left = self.evaluate(&binary.left)?;
        let right = self.evaluate(&binary.right)?;

        let operator = &binary.operator;
        match operator.r#type {
            Type::Minus => (left - right).ok_or_else(|| numbers_error(operator)),
            Type::Slash => (left / right).ok_or_else(|| numbers_error(operator)),
            Type::Star => (left * right).ok_or_else(|| numbers_error(operator)),
            Type::Plus => (left + right).ok_or_else(|| Unwind::from(RuntimeError {
                token: operator.clone(),
                message: "Operands must be two numbers or two strings".to_string(),
            })),
            Type::Greater | Type::GreaterEqual | Type::Less | Type::LessEqual => {
                let (Some(left), Some(right)) = (left.as_number(), right.as_number()) else {
                    return Err(numbers_error(operator));
                };

                Ok(Object::from(match operator.r#type {
                    Type::Greater => left > right,
                    Type::GreaterEqual => left >= right,
                    Type::Less => left < right,
                    Type::LessEqual => left <= right,
                    _ => unreachable!(),
                }))
            },
            Type::EqualEqual => Ok(Object::from(left == right)),
            Type::BangEqual => Ok(Object::from(left != right)),
            _ => unreachable!(),
        }
    }

    fn logical_expr(&mut self, logical: &expr::LogicalData) -> EvalResult<Object> {
        let left = self.evaluate(&logical.left)?;

        // Short-circuit by handing back the raw operand, not a coerced
        // boolean.
        match logical.operator.r#type {
            Type::Or if left.is_truthy() => Ok(left),
            Type::And if !left.is_truthy() => Ok(left),
            _ => self.evaluate(&logical.right),
        }
    }

    fn assign_expr(&mut self, assign: &expr::AssignData) -> EvalResult<Object> {
        let value = self.evaluate(&assign.value)?;
        self.environment.borrow_mut().assign(&assign.name, value.clone())?;

        Ok(value)
    }

    fn call_expr(&mut self, call: &expr::CallData) -> EvalResult<Object> {
        let callee = self.evaluate(&call.callee)?;

        let mut arguments = Vec::with_capacity(call.arguments.len());
        for argument in &call.arguments {
            arguments.push(self.evaluate(argument)?);
        }

        let Some(callable) = callee.callable() else {
            return Err(Unwind::from(RuntimeError {
                token: call.paren.clone(),
                message: "Can only call functions and classes".to_string(),
            }));
        };

        if arguments.len() != callable.arity() {
            return Err(Unwind::from(RuntimeError {
                token: call.paren.clone(),
                message: format!(
                    "Expected {} arguments but got {}",
                    callable.arity(),
                    arguments.len(),
                ),
            }));
        }

        Ok(callable.call(self, arguments)?)
    }
}

fn numbers_error(operator: &Token) -> Unwind {
    Unwind::from(RuntimeError {
        token: operator.clone(),
        message: "Operands must be numbers".to_string(),
    })
}
