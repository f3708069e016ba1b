#[macro_use]
mod common;

#[cfg(test)]
mod number {
    tests! {
        literals in number is OK
        "123"
        "987654"
        "0"
        "123.456"
        "-0.001"
    }

    tests! {
        trailing_dot in number is ERR
        "[line 1] Error at '.': Expect ';' after value"
    }

    tests! {
        leading_dot in number is ERR
        "[line 1] Error at '.': Expect expression"
    }
}
