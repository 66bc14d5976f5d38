pub mod assemble;
pub mod cli;
pub mod definition;
pub mod error;
pub mod label;
pub mod reference;
pub mod renumber;
pub mod scanner;

pub use definition::{FootnoteDefinition, OutputDefinitionEntry};
pub use error::{Error, Result};
pub use label::{LabelEntry, LabelMapping};
pub use renumber::*;
pub use scanner::Location;
