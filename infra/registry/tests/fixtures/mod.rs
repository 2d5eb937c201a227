#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

pub trait Sink: std::fmt::Debug + Send + Sync {
    fn name(&self) -> &'static str;
}

#[derive(Debug)]
pub struct ConsoleSink;

impl Sink for ConsoleSink {
    fn name(&self) -> &'static str {
        "console"
    }
}

#[derive(Debug)]
pub struct FileSink;

impl Sink for FileSink {
    fn name(&self) -> &'static str {
        "file"
    }
}

/// Service built from a parameter.
#[derive(Debug, PartialEq, Eq)]
pub struct Greeting(pub String);

/// Counts factory invocations.
#[derive(Debug, Clone, Default)]
pub struct Counter(Arc<AtomicUsize>);

impl Counter {
    pub fn hit(&self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }

    pub fn count(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}
