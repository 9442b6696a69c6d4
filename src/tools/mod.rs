use log::error;
use std::fmt::Debug;

pub mod env_args;

/// Build a closure suited for `map_err`: the original error is logged,
/// then replaced with `value_to_return`.
pub fn log_error_and_return<E: Debug, T>(value_to_return: T) -> impl FnOnce(E) -> T {
    |e| {
        error!("{e:#?}");
        value_to_return
    }
}

/// Same as [log_error_and_return], with a message giving some context.
pub fn log_message_and_return<E: Debug, T>(
    message: &str,
    value_to_return: T,
) -> impl FnOnce(E) -> T {
    move |e| {
        error!("{message}\n{e:#?}");
        value_to_return
    }
}
