//! Conditional tracing macros (zero-cost when the feature is disabled).
//!
//! `trace_span!` and `trace_event!` forward to `tracing` when the `tracing`
//! feature is enabled and compile away when it is not, so call sites stay
//! free of conditional compilation.

#[cfg(feature = "tracing")]
macro_rules! trace_span {
    ($name:expr $(, $($field:tt)*)?) => {
        tracing::info_span!($name $(, $($field)*)?)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_span {
    ($name:expr $(, $($field:tt)*)?) => {
        $crate::trace::NoopSpan
    };
}

#[cfg(feature = "tracing")]
macro_rules! trace_event {
    ($name:expr, $($key:ident = $value:expr),+ $(,)?) => {
        tracing::info!(name: $name, $($key = $value),+)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_event {
    ($name:expr, $($key:ident = $value:expr),+ $(,)?) => {
        // Evaluate and discard so the disabled build raises no unused warnings.
        let _ = ($($value,)+);
    };
}

pub(crate) use trace_event;
pub(crate) use trace_span;

/// Span-guard stand-in when tracing is disabled; lets call sites keep the
/// `let _guard = trace_span!(...).entered();` shape.
#[cfg(not(feature = "tracing"))]
pub struct NoopSpan;

#[cfg(not(feature = "tracing"))]
impl NoopSpan {
    #[inline]
    pub fn entered(self) -> Self {
        self
    }
}
