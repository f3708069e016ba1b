use crate::expr::Expr;

/// Returns a string representation of the expression in parenthesize.
macro_rules! parenthesize {
    ( $self:ident, $name:expr, $( $x:expr ),+ ) => {
        {
            let mut string = String::new();
            string += "(";
            string += $name;
            $(
                string += " ";
                string += &$self.print($x);
            )*
            string += ")";

            string
        }
    };
}

/// Renders an expression tree as a fully parenthesized prefix string, which
/// makes precedence and associativity visible at a glance: `1 + 2 * 3`
/// prints as `(+ 1 (* 2 3))`.
pub struct AstPrinter;

impl AstPrinter {
    /// Prints the expression.
    pub fn print(&self, expr: &Expr) -> String {
        match expr {
            Expr::Literal(literal) => literal.to_string(),
            Expr::Unary(data) => parenthesize!(self, &data.operator.lexeme, &data.expr),
            Expr::Binary(data) => parenthesize!(self, &data.operator.lexeme, &data.left, &data.right),
            Expr::Logical(data) => parenthesize!(self, &data.operator.lexeme, &data.left, &data.right),
            Expr::Grouping(data) => parenthesize!(self, "group", &data.expr),
            Expr::Variable(data) => data.name.lexeme.clone(),
            Expr::Assign(data) => {
                parenthesize!(self, format!("= {}", data.name.lexeme).as_str(), &data.value)
            },
            Expr::Call(data) => {
                let mut string = String::new();
                string += &self.print(&data.callee);
                string += "(";
                string += &data.arguments.iter()
                    .map(|argument| self.print(argument))
                    .collect::<Vec<String>>()
                    .join(" ");
                string += ")";

                string
            },
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::expr::{BinaryData, GroupingData, UnaryData};
    use crate::literal::Literal;
    use crate::token::{Token, Type};

    #[test]
    fn print_nested_expression() {
        // -123 * (45.67)
        let expr = Expr::Binary(BinaryData {
            left: Box::new(Expr::Unary(UnaryData {
                operator: Token::new(Type::Minus, String::from("-"), None, 1),
                expr: Box::new(Expr::Literal(Literal::Number(123.0))),
            })),
            operator: Token::new(Type::Star, String::from("*"), None, 1),
            right: Box::new(Expr::Grouping(GroupingData {
                expr: Box::new(Expr::Literal(Literal::Number(45.67))),
            })),
        });

        assert_eq!(AstPrinter.print(&expr), "(* (- 123) (group 45.67))");
    }

    #[test]
    fn print_literals() {
        assert_eq!(AstPrinter.print(&Expr::Literal(Literal::Nil)), "nil");
        assert_eq!(AstPrinter.print(&Expr::Literal(Literal::Bool(true))), "true");
        assert_eq!(AstPrinter.print(&Expr::Literal(Literal::from("str"))), "str");
    }
}
