#[macro_use]
mod common;

#[cfg(test)]
mod function {
    tests! {
        add in function is OK
        "5"
    }

    tests! {
        empty_body in function is OK
        "nil"
    }

    tests! {
        parameters in function is OK
        "0"
        "1"
        "3"
        "6"
    }

    tests! {
        print_function in function is OK
        "<fn foo>"
        "<native fn clock>"
    }

    tests! {
        recursion in function is OK
        "21"
    }

    tests! {
        nested_call_with_arguments in function is OK
        "hello world"
    }

    tests! {
        extra_arguments in function is ERR
        "Expected 2 arguments but got 4"
        "[line 6]"
    }

    tests! {
        missing_arguments in function is ERR
        "Expected 2 arguments but got 1"
        "[line 3]"
    }
}
