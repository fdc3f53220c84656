//! Bestiary - demonstration driver for the creature domain
//!
//! This crate is the *composition root*: it wires up logging, builds a
//! small roster, and walks the domain API through a combat exchange. All
//! interesting logic lives in `bestiary-domain`; this binary only calls the
//! public operations and reports what they return.

mod run;

fn main() -> anyhow::Result<()> {
    run::run()
}
