//! Error macros for bookbits

/// Macro for creating usage errors
#[macro_export]
macro_rules! bail_usage {
    ($msg:expr) => {
        return Err($crate::error::BookbitsError::UsageError($msg.to_string()))
    };
}

/// Macro for mapping store errors
#[macro_export]
macro_rules! map_store_err {
    ($op:expr) => {
        |e| $crate::error::BookbitsError::store_operation($op, e)
    };
}
