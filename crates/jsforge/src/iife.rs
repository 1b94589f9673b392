//! Immediately-invoked function expression sequencer.

use serde::{Deserialize, Serialize};

use crate::fragment::{render_body, Fragment};
use crate::seq::Sequencer;
use crate::val::Val;

/// Accumulates a body and renders it as `(function(){...})()`.
///
/// The outer parentheses keep the function in expression position; without
/// them the leading `function` keyword would open a declaration and the
/// trailing call would not parse.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Iife {
    body: Vec<Fragment>,
}

impl Sequencer for Iife {
    fn push(&mut self, fragment: Fragment) {
        self.body.push(fragment);
    }
}

impl Iife {
    /// Create an empty IIFE body.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Render the invoked expression. Idempotent.
    #[must_use]
    pub fn build(&self) -> String {
        format!("(function(){{{}}})()", render_body(&self.body))
    }

    /// The invoked expression as a [`Val`].
    #[must_use]
    pub fn to_val(&self) -> Val {
        Val::raw(self.build())
    }
}
