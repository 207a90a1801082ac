use core::fmt;
use std::sync::Arc;

use serval_error::Result;

use crate::Value;

/// A zero-argument callable stored inside a [`Value`].
///
/// Objects hand these out for bound methods, so a field configured to call
/// the retrieved value can invoke it.
#[derive(Clone)]
pub struct Function(Arc<dyn Fn() -> Result<Value> + Send + Sync>);

impl Function {
    pub fn new<F>(func: F) -> Function
    where
        F: Fn() -> Result<Value> + Send + Sync + 'static,
    {
        Function(Arc::new(func))
    }

    pub fn call(&self) -> Result<Value> {
        (self.0)()
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Function")
    }
}

impl PartialEq for Function {
    fn eq(&self, other: &Self) -> bool {
        core::ptr::addr_eq(Arc::as_ptr(&self.0), Arc::as_ptr(&other.0))
    }
}

impl Eq for Function {}
