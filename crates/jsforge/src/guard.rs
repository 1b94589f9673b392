//! One-shot guard sequencer.
//!
//! The emitted program, not the builder, carries the run-once state: the
//! generated function consults a named flag in one process-wide table and
//! returns early once it has run. The builder itself is stateless with
//! respect to that flag.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::escape::quote;
use crate::fragment::{render_body, Fragment};
use crate::ident::Identifier;
use crate::seq::Sequencer;

/// Global slot the emitted guard code keys its flags under.
pub const FLAG_TABLE: &str = "globalThis.__onceFlags";

/// A named sequencer whose emitted function body runs at most once per
/// runtime.
///
/// The name doubles as the emitted function name and, escaped, as the flag
/// key. The prologue ordering is load-bearing: the flag is checked before
/// it is set, and set unconditionally once past the check, so a re-entrant
/// call observes the flag already raised and cannot run the body twice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Guard {
    name: Identifier,
    body: Vec<Fragment>,
}

impl Sequencer for Guard {
    fn push(&mut self, fragment: Fragment) {
        self.body.push(fragment);
    }
}

impl Guard {
    /// Create a guard keyed and named `name`.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        Ok(Self {
            name: Identifier::new(name)?,
            body: Vec::new(),
        })
    }

    /// The guard's name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Render the guarded function declaration. Idempotent.
    #[must_use]
    pub fn to_decl(&self) -> String {
        let key = quote(self.name.as_str());
        format!(
            "function {name}(){{\
             if({table}===undefined){{{table}={{}};}}\
             if({table}[{key}]){{return;}}\
             {table}[{key}]=true;\
             {body}}}",
            name = self.name,
            table = FLAG_TABLE,
            key = key,
            body = render_body(&self.body)
        )
    }
}
