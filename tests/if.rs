#[macro_use]
mod common;

#[cfg(test)]
mod _if {
    tests! {
        basic in if is OK
        "good"
        "block"
        "true"
    }

    tests! {
        dangling_else in if is OK
        "good"
    }

    tests! {
        else_branch in if is OK
        "good"
        "good"
        "block"
    }

    tests! {
        truth in if is OK
        "false"
        "nil"
        "true"
        "0"
        "empty"
    }
}
