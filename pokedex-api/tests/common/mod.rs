// Not every utils is used in every test, so we allow dead code
#![allow(unused_imports, dead_code)]

mod fixtures;
pub use fixtures::*;
mod test_setup;
pub use test_setup::*;
