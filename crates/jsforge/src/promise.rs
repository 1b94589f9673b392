//! Promise-executor sequencer.

use serde::{Deserialize, Serialize};

use crate::fragment::{render_body, Fragment};
use crate::lit::Lit;
use crate::seq::Sequencer;
use crate::val::Val;

/// Accumulates an executor body and renders it as
/// `new Promise(function(resolve, reject){...})`.
///
/// `resolve` and `reject` are the executor's own parameters; the dedicated
/// methods call them by those names in the emitted code.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PromiseExecutor {
    body: Vec<Fragment>,
}

impl Sequencer for PromiseExecutor {
    fn push(&mut self, fragment: Fragment) {
        self.body.push(fragment);
    }
}

impl PromiseExecutor {
    /// Create an empty executor body.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// `resolve(value);`
    pub fn resolve(self, value: impl Into<Lit>) -> Self {
        let value = value.into().to_js();
        self.raw(format!("resolve({value})"))
    }

    /// `resolve();`
    #[must_use]
    pub fn resolve_empty(self) -> Self {
        self.raw("resolve()")
    }

    /// `reject(value);`
    pub fn reject(self, value: impl Into<Lit>) -> Self {
        let value = value.into().to_js();
        self.raw(format!("reject({value})"))
    }

    /// `setTimeout(callback, delay_ms);`
    pub fn set_timeout(self, callback: Val, delay_ms: u32) -> Self {
        self.raw(format!("setTimeout({}, {delay_ms})", callback.as_str()))
    }

    /// Render the `new Promise(...)` expression. Idempotent.
    #[must_use]
    pub fn build(&self) -> String {
        format!(
            "new Promise(function(resolve, reject){{{}}})",
            render_body(&self.body)
        )
    }

    /// The promise expression as a [`Val`].
    #[must_use]
    pub fn to_val(&self) -> Val {
        Val::raw(self.build())
    }
}
