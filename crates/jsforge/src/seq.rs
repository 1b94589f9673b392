//! The shared fluent statement vocabulary.
//!
//! Every body-accumulating builder in the crate (a [`Func`], a top-level
//! sequencer, a nested control-flow builder) implements [`Sequencer`] and
//! gets the same statement vocabulary, so callers compose the same way at
//! any nesting depth.
//!
//! [`Func`]: crate::func::Func

use crate::error::Result;
use crate::flow::{ForAwait, ForOf, IfBlock, WhileLoop};
use crate::fragment::Fragment;
use crate::ident::Identifier;
use crate::lit::{join_args, Lit};
use crate::val::Val;

fn decl(keyword: &str, name: impl Into<String>, value: Lit) -> Result<Fragment> {
    let name = Identifier::new(name)?;
    Ok(Fragment::Raw(format!(
        "{keyword} {name} = {}",
        value.to_js()
    )))
}

/// A builder that accumulates an ordered list of statement fragments.
///
/// Fluent methods consume and return `self`; methods that take a name
/// validate it and return `Result`. Builders are single-owner values; the
/// fluent chain is the only path to them.
pub trait Sequencer: Sized {
    /// Append one finished fragment to this builder's body.
    fn push(&mut self, fragment: Fragment);

    /// Splice a raw statement verbatim. The caller asserts it is valid
    /// JavaScript; the termination rule still applies on render.
    fn raw(mut self, code: impl Into<String>) -> Self {
        self.push(Fragment::Raw(code.into()));
        self
    }

    /// Use an expression in statement position.
    fn stmt(mut self, value: Val) -> Self {
        self.push(Fragment::Expr(value));
        self
    }

    /// `var name = value;`
    fn var_(mut self, name: impl Into<String>, value: impl Into<Lit>) -> Result<Self> {
        self.push(decl("var", name, value.into())?);
        Ok(self)
    }

    /// `let name = value;`
    fn let_(mut self, name: impl Into<String>, value: impl Into<Lit>) -> Result<Self> {
        self.push(decl("let", name, value.into())?);
        Ok(self)
    }

    /// `const name = value;`
    fn const_(mut self, name: impl Into<String>, value: impl Into<Lit>) -> Result<Self> {
        self.push(decl("const", name, value.into())?);
        Ok(self)
    }

    /// Assignment: `name = value;`
    fn set(mut self, name: impl Into<String>, value: impl Into<Lit>) -> Result<Self> {
        let name = Identifier::new(name)?;
        self.push(Fragment::Raw(format!("{name} = {}", value.into().to_js())));
        Ok(self)
    }

    /// Member assignment: `target.prop = value;`
    fn set_prop(mut self, target: &Val, prop: &str, value: impl Into<Lit>) -> Result<Self> {
        let prop = Identifier::new(prop)?;
        self.push(Fragment::Raw(format!(
            "{}.{prop} = {}",
            target.as_str(),
            value.into().to_js()
        )));
        Ok(self)
    }

    /// Post-increment: `name++;`
    fn incr(mut self, name: impl Into<String>) -> Result<Self> {
        let name = Identifier::new(name)?;
        self.push(Fragment::Raw(format!("{name}++")));
        Ok(self)
    }

    /// Post-decrement: `name--;`
    fn decr(mut self, name: impl Into<String>) -> Result<Self> {
        let name = Identifier::new(name)?;
        self.push(Fragment::Raw(format!("{name}--")));
        Ok(self)
    }

    /// Free-function call statement: `name(args);`
    fn call(mut self, name: impl Into<String>, args: Vec<Lit>) -> Result<Self> {
        let name = Identifier::new(name)?;
        self.push(Fragment::Raw(format!("{name}({})", join_args(&args))));
        Ok(self)
    }

    /// `console.log(message);`
    fn log(mut self, message: impl Into<Lit>) -> Self {
        self.push(Fragment::Raw(format!(
            "console.log({})",
            message.into().to_js()
        )));
        self
    }

    /// Bare return: `return;`
    fn ret(mut self) -> Self {
        self.push(Fragment::Raw("return".to_string()));
        self
    }

    /// Return with value: `return value;`
    fn ret_val(mut self, value: impl Into<Lit>) -> Self {
        self.push(Fragment::Raw(format!("return {}", value.into().to_js())));
        self
    }

    /// `throw value;`
    fn throw_(mut self, value: impl Into<Lit>) -> Self {
        self.push(Fragment::Raw(format!("throw {}", value.into().to_js())));
        self
    }

    /// `yield value;` Meaningful inside a generator body; the builder
    /// does not police the enclosing closure kind.
    fn yield_(mut self, value: impl Into<Lit>) -> Self {
        self.push(Fragment::Raw(format!("yield {}", value.into().to_js())));
        self
    }

    /// Delegating yield: `yield* value;`
    fn yield_star(mut self, value: impl Into<Lit>) -> Self {
        self.push(Fragment::Raw(format!("yield* {}", value.into().to_js())));
        self
    }

    /// `await value;` Meaningful inside an async body.
    fn await_(mut self, value: impl Into<Lit>) -> Self {
        self.push(Fragment::Raw(format!("await {}", value.into().to_js())));
        self
    }

    /// Yield an awaited value: `yield await value;` The async-generator
    /// pump step.
    fn await_yield(mut self, value: impl Into<Lit>) -> Self {
        self.push(Fragment::Raw(format!(
            "yield await {}",
            value.into().to_js()
        )));
        self
    }

    /// Open a nested `if(condition){...}` block. Close with
    /// [`IfBlock::end_if`] (or branch with [`IfBlock::else_`]) to return to
    /// this builder.
    fn if_(self, condition: Val) -> IfBlock<Self> {
        IfBlock::new(self, condition)
    }

    /// Open a nested `while(condition){...}` block.
    fn while_(self, condition: Val) -> WhileLoop<Self> {
        WhileLoop::new(self, condition)
    }

    /// Open a nested `for(const var of iterable){...}` block.
    fn for_of(self, var: impl Into<String>, iterable: Val) -> Result<ForOf<Self>> {
        Ok(ForOf::new(self, Identifier::new(var)?, iterable))
    }

    /// Open a nested `for await(const var of iterable){...}` block.
    fn for_await(self, var: impl Into<String>, iterable: Val) -> Result<ForAwait<Self>> {
        Ok(ForAwait::new(self, Identifier::new(var)?, iterable))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::fragment::render_body;

    // A minimal sequencer to exercise the provided vocabulary in isolation.
    #[derive(Default)]
    struct Body(Vec<Fragment>);

    impl Sequencer for Body {
        fn push(&mut self, fragment: Fragment) {
            self.0.push(fragment);
        }
    }

    fn render(body: &Body) -> String {
        render_body(&body.0)
    }

    #[test]
    fn declarations() {
        let body = Body::default()
            .var_("a", 1)
            .unwrap()
            .let_("b", "two")
            .unwrap()
            .const_("C", true)
            .unwrap();
        assert_eq!(render(&body), "var a = 1;let b = 'two';const C = true;");
    }

    #[test]
    fn declaration_rejects_bad_name() {
        assert!(Body::default().let_("let", 1).is_err());
        assert!(Body::default().const_("1st", 1).is_err());
    }

    #[test]
    fn assignment_and_increment() {
        let body = Body::default()
            .set("count", 0)
            .unwrap()
            .incr("count")
            .unwrap()
            .decr("count")
            .unwrap();
        assert_eq!(render(&body), "count = 0;count++;count--;");
    }

    #[test]
    fn member_assignment() {
        let target = Val::this();
        let body = Body::default().set_prop(&target, "ready", true).unwrap();
        assert_eq!(render(&body), "this.ready = true;");
        assert!(Body::default().set_prop(&target, "for", 1).is_err());
    }

    #[test]
    fn call_and_log() {
        let body = Body::default()
            .call("setup", vec![Lit::from(9)])
            .unwrap()
            .log("ready");
        assert_eq!(render(&body), "setup(9);console.log('ready');");
    }

    #[test]
    fn returns_and_throw() {
        let body = Body::default().ret_val(5).ret().throw_(Val::raw("err"));
        assert_eq!(render(&body), "return 5;return;throw err;");
    }

    #[test]
    fn yields_and_awaits() {
        let body = Body::default()
            .yield_(Val::ident("x").unwrap())
            .yield_star(Val::ident("xs").unwrap())
            .await_(Val::raw("tick()"))
            .await_yield(Val::raw("next()"));
        assert_eq!(
            render(&body),
            "yield x;yield* xs;await tick();yield await next();"
        );
    }

    #[test]
    fn raw_and_stmt() {
        let body = Body::default()
            .raw("debugger")
            .stmt(Val::raw("flush()"));
        assert_eq!(render(&body), "debugger;flush();");
    }
}
