// src/macros.rs
#[macro_export]
macro_rules! s {
    // String shorthand!

    // Zero-arg → String::new()
    () => {
        ::std::string::String::new()
    };
    // Any single expression: literals, consts, vars
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

#[macro_export]
macro_rules! strings {
    // Vec<String> from a list of &str, mostly for headers
    ($($item:expr),* $(,)?) => {
        vec![$( ::std::string::String::from($item) ),*]
    };
}
