macro_rules! function_name {
    () => {{
        #[allow(dead_code)]
        fn f() {}
        #[allow(dead_code)]
        fn type_name_of<T>(_: T) -> &'static str {
            core::any::type_name::<T>()
        }
        let name = type_name_of(f);
        &name[..name.len() - 3]
    }};
}
pub(crate) use function_name;

macro_rules! invalid_arg {
    ($arg:ident) => {
        panic!(
            "Invalid argument value ('{}' at {})",
            stringify!($arg),
            $crate::common::macros::function_name!()
        )
    };
    ($arg:ident, $message:expr) => {
        panic!(
            "{} ('{}' at {})",
            $message,
            stringify!($arg),
            $crate::common::macros::function_name!()
        )
    };
}
pub(crate) use invalid_arg;

macro_rules! debug_asserts {
    ($block:block) => {
        cfg_if::cfg_if! {
            if #[cfg(debug_assertions)] {
                $block
            }
        }
    };
}
pub(crate) use debug_asserts;

macro_rules! assert_arg {
    ($arg:ident, $expr:expr) => {
        if !($expr) {
            $crate::common::macros::invalid_arg!($arg);
        }
    };
    ($arg:ident, $expr:expr, $message:expr) => {
        if !($expr) {
            $crate::common::macros::invalid_arg!($arg, $message);
        }
    };
}
pub(crate) use assert_arg;

macro_rules! debug_assert_arg {
    ($arg:ident, $expr:expr) => {
        $crate::common::macros::debug_asserts!({
            $crate::common::macros::assert_arg!($arg, $expr);
        })
    };
    ($arg:ident, $expr:expr, $message:expr) => {
        $crate::common::macros::debug_asserts!({
            $crate::common::macros::assert_arg!($arg, $expr, $message);
        })
    };
}
pub(crate) use debug_assert_arg;

// Compiles to nothing without the `log` feature
macro_rules! trace {
    ($($arg:tt)*) => {
        cfg_if::cfg_if! {
            if #[cfg(feature = "log")] {
                log::trace!($($arg)*);
            }
        }
    };
}
pub(crate) use trace;
