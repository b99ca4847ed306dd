//! Play-queue reconciliation

mod reconciler;

pub use reconciler::QueueReconciler;
