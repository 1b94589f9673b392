//! Nested control-flow builders.
//!
//! Each builder is owned by exactly one parent sequencer, accumulates its
//! own body, and on `end_*()` serializes itself into one block fragment,
//! pushes it onto the parent, and returns the parent so the fluent chain
//! continues at the outer level. `end_*()` takes the builder by value:
//! once closed, the builder no longer exists, so reuse is a compile error
//! rather than silent output corruption.

use crate::fragment::{render_body, Fragment};
use crate::ident::Identifier;
use crate::seq::Sequencer;
use crate::val::Val;

/// `if(condition){...}` under construction.
#[derive(Debug)]
pub struct IfBlock<P: Sequencer> {
    parent: P,
    condition: Val,
    body: Vec<Fragment>,
}

impl<P: Sequencer> Sequencer for IfBlock<P> {
    fn push(&mut self, fragment: Fragment) {
        self.body.push(fragment);
    }
}

impl<P: Sequencer> IfBlock<P> {
    pub(crate) fn new(parent: P, condition: Val) -> Self {
        Self {
            parent,
            condition,
            body: Vec::new(),
        }
    }

    /// Close the block and return the parent.
    pub fn end_if(self) -> P {
        let Self {
            mut parent,
            condition,
            body,
        } = self;
        parent.push(Fragment::Block(format!(
            "if({}){{{}}}",
            condition.as_str(),
            render_body(&body)
        )));
        parent
    }

    /// Start the else branch; the then branch is frozen as accumulated.
    pub fn else_(self) -> ElseBlock<P> {
        let Self {
            parent,
            condition,
            body,
        } = self;
        ElseBlock {
            parent,
            head: format!("if({}){{{}}}else", condition.as_str(), render_body(&body)),
            body: Vec::new(),
        }
    }
}

/// The else branch of an [`IfBlock`].
#[derive(Debug)]
pub struct ElseBlock<P: Sequencer> {
    parent: P,
    head: String,
    body: Vec<Fragment>,
}

impl<P: Sequencer> Sequencer for ElseBlock<P> {
    fn push(&mut self, fragment: Fragment) {
        self.body.push(fragment);
    }
}

impl<P: Sequencer> ElseBlock<P> {
    /// Close both branches and return the parent.
    pub fn end_if(self) -> P {
        let Self {
            mut parent,
            head,
            body,
        } = self;
        parent.push(Fragment::Block(format!("{head}{{{}}}", render_body(&body))));
        parent
    }
}

/// `while(condition){...}` under construction.
#[derive(Debug)]
pub struct WhileLoop<P: Sequencer> {
    parent: P,
    condition: Val,
    body: Vec<Fragment>,
}

impl<P: Sequencer> Sequencer for WhileLoop<P> {
    fn push(&mut self, fragment: Fragment) {
        self.body.push(fragment);
    }
}

impl<P: Sequencer> WhileLoop<P> {
    pub(crate) fn new(parent: P, condition: Val) -> Self {
        Self {
            parent,
            condition,
            body: Vec::new(),
        }
    }

    /// Close the loop and return the parent.
    pub fn end_while(self) -> P {
        let Self {
            mut parent,
            condition,
            body,
        } = self;
        parent.push(Fragment::Block(format!(
            "while({}){{{}}}",
            condition.as_str(),
            render_body(&body)
        )));
        parent
    }
}

/// `for(const var of iterable){...}` under construction.
#[derive(Debug)]
pub struct ForOf<P: Sequencer> {
    parent: P,
    var: Identifier,
    iterable: Val,
    body: Vec<Fragment>,
}

impl<P: Sequencer> Sequencer for ForOf<P> {
    fn push(&mut self, fragment: Fragment) {
        self.body.push(fragment);
    }
}

impl<P: Sequencer> ForOf<P> {
    pub(crate) fn new(parent: P, var: Identifier, iterable: Val) -> Self {
        Self {
            parent,
            var,
            iterable,
            body: Vec::new(),
        }
    }

    /// Close the loop and return the parent.
    pub fn end_for_of(self) -> P {
        let Self {
            mut parent,
            var,
            iterable,
            body,
        } = self;
        parent.push(Fragment::Block(format!(
            "for(const {var} of {}){{{}}}",
            iterable.as_str(),
            render_body(&body)
        )));
        parent
    }
}

/// `for await(const var of iterable){...}` under construction.
#[derive(Debug)]
pub struct ForAwait<P: Sequencer> {
    parent: P,
    var: Identifier,
    iterable: Val,
    body: Vec<Fragment>,
}

impl<P: Sequencer> Sequencer for ForAwait<P> {
    fn push(&mut self, fragment: Fragment) {
        self.body.push(fragment);
    }
}

impl<P: Sequencer> ForAwait<P> {
    pub(crate) fn new(parent: P, var: Identifier, iterable: Val) -> Self {
        Self {
            parent,
            var,
            iterable,
            body: Vec::new(),
        }
    }

    /// Close the loop and return the parent.
    pub fn end_for_await(self) -> P {
        let Self {
            mut parent,
            var,
            iterable,
            body,
        } = self;
        parent.push(Fragment::Block(format!(
            "for await(const {var} of {}){{{}}}",
            iterable.as_str(),
            render_body(&body)
        )));
        parent
    }
}
