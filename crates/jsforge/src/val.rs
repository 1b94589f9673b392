//! The immutable expression wrapper.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::ident::Identifier;
use crate::lit::{join_args, Lit};

/// One syntactically complete JavaScript expression, held as finished
/// source text.
///
/// Every combinator is pure and produces a new `Val`; nothing mutates in
/// place. Producers parenthesize wherever embedding would otherwise change
/// operator precedence (binary operators, ternaries, awaits, function
/// expressions), so a `Val` can always be spliced into a larger expression
/// as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Val(String);

impl Val {
    /// Wrap raw JavaScript the caller asserts is already a valid
    /// expression. The unsafe escape hatch used by wrapper layers; no
    /// escaping or validation is applied.
    pub fn raw(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Convert a literal through the fixed dispatch.
    pub fn lit(value: impl Into<Lit>) -> Self {
        Self(value.into().to_js())
    }

    /// Reference a variable by name.
    pub fn ident(name: impl Into<String>) -> Result<Self> {
        Ok(Self(Identifier::new(name)?.as_str().to_string()))
    }

    /// The `this` reference.
    #[must_use]
    pub fn this() -> Self {
        Self("this".to_string())
    }

    /// Array literal: `[a, b, c]`.
    #[must_use]
    pub fn array(items: Vec<Lit>) -> Self {
        Self(format!("[{}]", join_args(&items)))
    }

    /// Object literal with identifier keys: `{a: 1, b: 2}`.
    ///
    /// Keys are validated identifiers and rendered unquoted. Use
    /// [`Lit::Map`] for arbitrary string keys.
    pub fn object(pairs: Vec<(&str, Lit)>) -> Result<Self> {
        let mut parts = Vec::with_capacity(pairs.len());
        for (key, value) in pairs {
            parts.push(format!("{}: {}", Identifier::new(key)?, value.to_js()));
        }
        Ok(Self(format!("{{{}}}", parts.join(", "))))
    }

    /// Constructor call: `new Name(args)`.
    pub fn construct(name: impl Into<String>, args: Vec<Lit>) -> Result<Self> {
        Ok(Self(format!(
            "new {}({})",
            Identifier::new(name)?,
            join_args(&args)
        )))
    }

    /// The expression text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the wrapper and return the text.
    #[must_use]
    pub fn into_text(self) -> String {
        self.0
    }

    /// Property access: `expr.name`.
    pub fn prop(&self, name: &str) -> Result<Self> {
        Ok(Self(format!("{}.{}", self.0, Identifier::new(name)?)))
    }

    /// Computed member access: `expr[index]`.
    pub fn index(&self, index: impl Into<Lit>) -> Self {
        Self(format!("{}[{}]", self.0, index.into().to_js()))
    }

    /// Method call: `expr.name(args)`.
    pub fn method(&self, name: &str, args: Vec<Lit>) -> Result<Self> {
        Ok(Self(format!(
            "{}.{}({})",
            self.0,
            Identifier::new(name)?,
            join_args(&args)
        )))
    }

    /// Call the expression itself: `expr(args)`.
    pub fn call(&self, args: Vec<Lit>) -> Self {
        Self(format!("{}({})", self.0, join_args(&args)))
    }

    /// Await: `(await expr)`.
    #[must_use]
    pub fn await_expr(&self) -> Self {
        Self(format!("(await {})", self.0))
    }

    fn binary(&self, op: &str, rhs: &Self) -> Self {
        Self(format!("({} {} {})", self.0, op, rhs.0))
    }

    /// Addition: `(a + b)`.
    #[must_use]
    pub fn add(&self, rhs: &Self) -> Self {
        self.binary("+", rhs)
    }

    /// Subtraction: `(a - b)`.
    #[must_use]
    pub fn sub(&self, rhs: &Self) -> Self {
        self.binary("-", rhs)
    }

    /// Multiplication: `(a * b)`.
    #[must_use]
    pub fn mul(&self, rhs: &Self) -> Self {
        self.binary("*", rhs)
    }

    /// Division: `(a / b)`.
    #[must_use]
    pub fn div(&self, rhs: &Self) -> Self {
        self.binary("/", rhs)
    }

    /// Remainder: `(a % b)`.
    #[must_use]
    pub fn rem(&self, rhs: &Self) -> Self {
        self.binary("%", rhs)
    }

    /// Strict equality: `(a === b)`.
    #[must_use]
    pub fn eq(&self, rhs: &Self) -> Self {
        self.binary("===", rhs)
    }

    /// Strict inequality: `(a !== b)`.
    #[must_use]
    pub fn ne(&self, rhs: &Self) -> Self {
        self.binary("!==", rhs)
    }

    /// Less than: `(a < b)`.
    #[must_use]
    pub fn lt(&self, rhs: &Self) -> Self {
        self.binary("<", rhs)
    }

    /// Less than or equal: `(a <= b)`.
    #[must_use]
    pub fn le(&self, rhs: &Self) -> Self {
        self.binary("<=", rhs)
    }

    /// Greater than: `(a > b)`.
    #[must_use]
    pub fn gt(&self, rhs: &Self) -> Self {
        self.binary(">", rhs)
    }

    /// Greater than or equal: `(a >= b)`.
    #[must_use]
    pub fn ge(&self, rhs: &Self) -> Self {
        self.binary(">=", rhs)
    }

    /// Logical and: `(a && b)`.
    #[must_use]
    pub fn and(&self, rhs: &Self) -> Self {
        self.binary("&&", rhs)
    }

    /// Logical or: `(a || b)`.
    #[must_use]
    pub fn or(&self, rhs: &Self) -> Self {
        self.binary("||", rhs)
    }

    /// Logical not: `!expr`.
    #[must_use]
    pub fn not(&self) -> Self {
        Self(format!("!{}", self.0))
    }

    /// Numeric negation: `-expr`.
    #[must_use]
    pub fn neg(&self) -> Self {
        Self(format!("-{}", self.0))
    }

    /// Type query: `typeof expr`.
    #[must_use]
    pub fn type_of(&self) -> Self {
        Self(format!("typeof {}", self.0))
    }

    /// Ternary: `(cond ? a : b)`.
    #[must_use]
    pub fn ternary(&self, then_val: &Self, else_val: &Self) -> Self {
        Self(format!("({} ? {} : {})", self.0, then_val.0, else_val.0))
    }
}

impl std::fmt::Display for Val {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
