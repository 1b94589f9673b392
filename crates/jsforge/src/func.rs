//! Function builders: plain, generator, and async-generator closures.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::fragment::{render_body, Fragment};
use crate::ident::Identifier;
use crate::seq::Sequencer;
use crate::val::Val;

/// The closure kind a [`Func`] renders as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FuncKind {
    /// `function`
    Plain,
    /// `function*`
    Generator,
    /// `async function*`
    AsyncGenerator,
}

impl FuncKind {
    pub(crate) const fn keyword(self) -> &'static str {
        match self {
            Self::Plain => "function",
            Self::Generator => "function*",
            Self::AsyncGenerator => "async function*",
        }
    }
}

/// A JavaScript function under construction: optional name, ordered
/// parameters, ordered statement body, and a closure kind.
///
/// Mutated only through its own fluent methods (single owner, never
/// shared). The terminal renderers take `&self` and are idempotent:
/// [`Func::to_decl`] and [`Func::to_expr`] serialize the same body and
/// differ only in the header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Func {
    name: Option<Identifier>,
    params: Vec<Identifier>,
    body: Vec<Fragment>,
    kind: FuncKind,
}

impl Sequencer for Func {
    fn push(&mut self, fragment: Fragment) {
        self.body.push(fragment);
    }
}

impl Func {
    fn with(name: Option<Identifier>, kind: FuncKind) -> Self {
        Self {
            name,
            params: Vec::new(),
            body: Vec::new(),
            kind,
        }
    }

    /// A named plain function.
    pub fn named(name: impl Into<String>) -> Result<Self> {
        Ok(Self::with(Some(Identifier::new(name)?), FuncKind::Plain))
    }

    /// An anonymous plain function (callback form).
    #[must_use]
    pub fn anonymous() -> Self {
        Self::with(None, FuncKind::Plain)
    }

    /// A named generator: `function* name(...)`.
    pub fn generator(name: impl Into<String>) -> Result<Self> {
        Ok(Self::with(Some(Identifier::new(name)?), FuncKind::Generator))
    }

    /// An anonymous generator: `function*(...)`.
    #[must_use]
    pub fn anonymous_generator() -> Self {
        Self::with(None, FuncKind::Generator)
    }

    /// A named async generator: `async function* name(...)`.
    pub fn async_generator(name: impl Into<String>) -> Result<Self> {
        Ok(Self::with(
            Some(Identifier::new(name)?),
            FuncKind::AsyncGenerator,
        ))
    }

    /// An anonymous async generator: `async function*(...)`.
    #[must_use]
    pub fn anonymous_async_generator() -> Self {
        Self::with(None, FuncKind::AsyncGenerator)
    }

    /// Append one parameter.
    pub fn param(mut self, name: impl Into<String>) -> Result<Self> {
        self.params.push(Identifier::new(name)?);
        Ok(self)
    }

    /// Append several parameters.
    pub fn params(mut self, names: &[&str]) -> Result<Self> {
        for name in names {
            self.params.push(Identifier::new(*name)?);
        }
        Ok(self)
    }

    /// The closure kind.
    #[must_use]
    pub const fn kind(&self) -> FuncKind {
        self.kind
    }

    /// The declared name, if any.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_ref().map(Identifier::as_str)
    }

    fn param_list(&self) -> String {
        let parts: Vec<&str> = self.params.iter().map(Identifier::as_str).collect();
        parts.join(", ")
    }

    fn header(&self, with_name: bool) -> String {
        let keyword = self.kind.keyword();
        match (with_name, &self.name) {
            (true, Some(name)) => format!("{keyword} {name}({})", self.param_list()),
            _ => format!("{keyword}({})", self.param_list()),
        }
    }

    /// Render as a function declaration: `function name(a, b){...}`.
    /// Anonymous functions render without the name.
    #[must_use]
    pub fn to_decl(&self) -> String {
        format!("{}{{{}}}", self.header(true), render_body(&self.body))
    }

    /// Render as an unnamed function expression with an identical body,
    /// usable inline as a callback argument.
    #[must_use]
    pub fn to_expr(&self) -> String {
        format!("{}{{{}}}", self.header(false), render_body(&self.body))
    }

    /// The expression form wrapped as a [`Val`], parenthesized so it can
    /// be called or embedded without changing the statement/expression
    /// boundary.
    #[must_use]
    pub fn to_val(&self) -> Val {
        Val::raw(format!("({})", self.to_expr()))
    }
}
