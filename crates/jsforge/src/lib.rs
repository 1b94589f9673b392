//! jsforge: a fluent Rust DSL for assembling JavaScript source text.
//!
//! Callers compose expressions bottom-up with [`Val`] and [`Lit`], build
//! function bodies and statement sequences top-down with [`Func`] and the
//! top-level sequencers ([`Iife`], [`Guard`], [`PromiseExecutor`]), and
//! nest control flow through owner-returning sub-builders. One terminal
//! render walks the accumulated structure and returns deterministic
//! JavaScript text; the crate never parses or executes what it emits.
//!
//! # Example
//!
//! ```rust
//! use jsforge::prelude::*;
//!
//! let ticker = Func::anonymous_generator()
//!     .while_(Val::raw("true"))
//!     .yield_(Val::raw("Date.now()"))
//!     .end_while();
//! assert_eq!(ticker.to_expr(), "function*(){while(true){yield Date.now();}}");
//! ```
//!
//! Text embedded into string literals always goes through [`escape`];
//! `Val::raw` and `Sequencer::raw` are the only unescaped entry points and
//! the caller asserts their contents are already valid JavaScript.
//!
//! [`escape`]: escape::escape

pub mod emit;
pub mod error;
pub mod escape;
pub mod flow;
pub mod fragment;
pub mod func;
pub mod guard;
pub mod ident;
pub mod iife;
pub mod lit;
pub mod promise;
pub mod seq;
pub mod val;
pub mod validator;

pub use error::{Error, Result};
pub use fragment::{render_body, Fragment};
pub use func::{Func, FuncKind};
pub use guard::Guard;
pub use ident::Identifier;
pub use iife::Iife;
pub use lit::Lit;
pub use promise::PromiseExecutor;
pub use seq::Sequencer;
pub use val::Val;

/// Convenience re-exports for callers.
pub mod prelude {
    pub use crate::emit::{
        hash_script, verify, write_with_manifest, GenerationMetadata, ScriptManifest,
    };
    pub use crate::error::{Error, Result};
    pub use crate::escape::{escape, quote};
    pub use crate::flow::{ElseBlock, ForAwait, ForOf, IfBlock, WhileLoop};
    pub use crate::fragment::{render_body, Fragment};
    pub use crate::func::{Func, FuncKind};
    pub use crate::guard::Guard;
    pub use crate::ident::Identifier;
    pub use crate::iife::Iife;
    pub use crate::lit::Lit;
    pub use crate::promise::PromiseExecutor;
    pub use crate::seq::Sequencer;
    pub use crate::val::Val;
    pub use crate::validator;
}
