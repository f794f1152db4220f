//! Error macros for graphalgo

/// Return `OutOfRange` unless `$vertex < $num_vertices`
#[macro_export]
macro_rules! ensure_vertex {
    ($vertex:expr, $num_vertices:expr) => {
        if $vertex >= $num_vertices {
            return Err($crate::error::GraphError::out_of_range(
                $vertex,
                $num_vertices,
            ));
        }
    };
}

/// Macro for creating usage errors
#[macro_export]
macro_rules! bail_usage {
    ($msg:expr) => {
        return Err($crate::error::GraphError::UsageError($msg.to_string()))
    };
}

/// Macro for creating invalid value errors
#[macro_export]
macro_rules! bail_invalid {
    ($context:expr, $value:expr) => {
        return Err($crate::error::GraphError::invalid_value($context, $value))
    };
}
