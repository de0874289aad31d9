//! Process-wide shared context
//!
//! Instrumented code deep inside a call graph often has no handle to pass a
//! context through. These helpers expose one [`CoverageContext`] per process,
//! guarded by a mutex so concurrent test threads serialize their access.
//!
//! Prefer an explicit [`CoverageContext`] wherever a handle can be threaded
//! through; tests that share the global context must call [`reset_global`]
//! to stay isolated.

use crate::report::McdcReport;
use crate::{CoverageContext, McdcConfig};
use std::sync::{Mutex, MutexGuard, PoisonError};

static GLOBAL_CONTEXT: Mutex<CoverageContext> = Mutex::new(CoverageContext::new());

fn lock() -> MutexGuard<'static, CoverageContext> {
    // A panic while holding the lock (e.g. a protocol violation in a test)
    // leaves the tables themselves consistent.
    GLOBAL_CONTEXT
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
}

/// Run `f` with exclusive access to the global context
pub fn with_global<F, R>(f: F) -> R
where
    F: FnOnce(&mut CoverageContext) -> R,
{
    let mut ctx = lock();
    f(&mut ctx)
}

/// Evaluate the global context
#[must_use]
pub fn evaluate_global() -> McdcReport {
    lock().evaluate()
}

/// Drop every table from the global context
pub fn reset_global() {
    lock().reset();
}

/// Replace the global context with an empty one using `config`
pub fn configure_global(config: McdcConfig) {
    *lock() = CoverageContext::with_config(config);
}

/// Register the next expected row of the most recently allocated table.
///
/// With a context: `mcdc_register!(ctx; true, false)` returns the
/// [`McdcResult`](crate::McdcResult) of
/// [`register_row`](crate::CoverageContext::register_row).
///
/// Without one the global context is used, and a protocol violation panics.
#[macro_export]
macro_rules! mcdc_register {
    ($ctx:expr; $($cond:expr),+ $(,)?) => {{
        let row: &[bool] = &[$($cond),+];
        $ctx.register_row(row)
    }};
    ($($cond:expr),+ $(,)?) => {{
        let row: &[bool] = &[$($cond),+];
        match $crate::global::with_global(|ctx| ctx.register_row(row)) {
            Ok(index) => index,
            Err(e) => panic!("MC/DC row registration failed: {e}"),
        }
    }};
}

/// Offer the live condition values of a decision to its table.
///
/// With a context: `mcdc_check!(ctx, table_id; i < n, done)` returns the
/// [`McdcResult`](crate::McdcResult) of
/// [`check_row`](crate::CoverageContext::check_row).
///
/// Without one the table is addressed by its `u32` allocation index in the
/// global context, and a protocol violation panics.
#[macro_export]
macro_rules! mcdc_check {
    ($ctx:expr, $table:expr; $($cond:expr),+ $(,)?) => {{
        let row: &[bool] = &[$($cond),+];
        $ctx.check_row($table, row)
    }};
    ($table:expr; $($cond:expr),+ $(,)?) => {{
        let row: &[bool] = &[$($cond),+];
        let table = $crate::TableId::new($table);
        match $crate::global::with_global(|ctx| ctx.check_row(table, row)) {
            Ok(outcome) => outcome,
            Err(e) => panic!("MC/DC check failed: {e}"),
        }
    }};
}
