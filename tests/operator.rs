#[macro_use]
mod common;

#[cfg(test)]
mod operator {
    tests! {
        add in operator is OK
        "579"
        "string"
    }

    tests! {
        subtract in operator is OK
        "1"
        "0.5"
    }

    tests! {
        multiply in operator is OK
        "15"
        "10"
        "1.5"
    }

    tests! {
        divide in operator is OK
        "4"
        "1"
    }

    tests! {
        negate in operator is OK
        "-3"
        "3"
        "-3"
    }

    tests! {
        not in operator is OK
        "false"
        "true"
        "true"
        "false"
        "false"
        "true"
        "false"
    }

    tests! {
        comparison in operator is OK
        "true"
        "false"
        "false"
        "true"
        "true"
        "false"
        "false"
        "false"
        "true"
        "false"
        "true"
        "true"
        "true"
    }

    tests! {
        equals in operator is OK
        "true"
        "true"
        "false"
        "true"
        "false"
        "true"
        "false"
        "false"
        "false"
        "false"
    }

    tests! {
        evaluation_order in operator is OK
        "1"
        "2"
        "3"
    }

    tests! {
        add_mixed in operator is ERR
        "Operands must be two numbers or two strings"
        "[line 1]"
    }

    tests! {
        add_bool_nil in operator is ERR
        "Operands must be two numbers or two strings"
        "[line 1]"
    }

    tests! {
        subtract_nonnum in operator is ERR
        "Operands must be numbers"
        "[line 1]"
    }

    tests! {
        less_nonnum in operator is ERR
        "Operands must be numbers"
        "[line 1]"
    }

    tests! {
        negate_nonnum in operator is ERR
        "Operand must be a number"
        "[line 1]"
    }
}
