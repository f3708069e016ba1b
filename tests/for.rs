#[macro_use]
mod common;

#[cfg(test)]
mod _for {
    tests! {
        basic in for is OK
        "0"
        "1"
        "2"
    }

    tests! {
        syntax in for is OK
        "1"
        "2"
        "3"
        "0"
        "1"
        "2"
        "0"
        "1"
        "0"
        "1"
    }

    tests! {
        scope in for is OK
        "0"
        "-1"
        "after"
        "0"
    }

    tests! {
        fun_in_body in for is ERR
        "[line 1] Error at 'fun': Expect expression"
    }

    tests! {
        var_in_body in for is ERR
        "[line 1] Error at 'var': Expect expression"
    }
}
