//! Arithmetic over confusion tallies, and wrappers that transform the true
//! graph before a statistic sees it.

use std::sync::Arc;

use causalcmp_core::errors::StatError;
use causalcmp_graph::transform::{cpdag_for_dag, dag_to_pag_with, PagOptions};

use super::{StatContext, StatFn};
use crate::confusion::Confusion;

fn ratio(numerator: f64, denominator: f64) -> f64 {
    // 0/0 is NaN on purpose: the statistic is undefined, not zero.
    numerator / denominator
}

/// tp / (tp + fp)
pub fn precision<C: Confusion + ?Sized>(c: &C) -> f64 {
    ratio(c.tp() as f64, (c.tp() + c.fp()) as f64)
}

/// tp / (tp + fn)
pub fn recall<C: Confusion + ?Sized>(c: &C) -> f64 {
    ratio(c.tp() as f64, (c.tp() + c.fn_()) as f64)
}

/// 2tp / (2tp + fp + fn)
pub fn f1<C: Confusion + ?Sized>(c: &C) -> f64 {
    let tp2 = 2.0 * c.tp() as f64;
    ratio(tp2, tp2 + c.fp() as f64 + c.fn_() as f64)
}

/// Matthews correlation coefficient, in [-1, 1].
pub fn matthews_correlation<C: Confusion + ?Sized>(c: &C) -> f64 {
    let (tp, fp, fn_, tn) = (c.tp() as f64, c.fp() as f64, c.fn_() as f64, c.tn() as f64);
    let denominator = ((tp + fp) * (tp + fn_) * (tn + fp) * (tn + fn_)).sqrt();
    ratio(tp * tn - fp * fn_, denominator)
}

/// `1 - tanh(value / scale)`: 1 at zero, falling towards 0 as the count grows.
pub fn tanh_complement(value: f64, scale: f64) -> f64 {
    1.0 - (value / scale).tanh()
}

/// Run `inner` against the PAG of the true DAG. PAG options come from the
/// context's parameters.
pub fn against_true_pag(inner: StatFn) -> StatFn {
    Arc::new(move |ctx: &StatContext<'_>| -> Result<f64, StatError> {
        let options = PagOptions::from_params(ctx.params);
        let pag = dag_to_pag_with(ctx.truth, &options)?;
        inner(&ctx.with_truth(&pag))
    })
}

/// Run `inner` against the CPDAG of the true DAG.
pub fn against_true_cpdag(inner: StatFn) -> StatFn {
    Arc::new(move |ctx: &StatContext<'_>| -> Result<f64, StatError> {
        let cpdag = cpdag_for_dag(ctx.truth)?;
        inner(&ctx.with_truth(&cpdag))
    })
}
