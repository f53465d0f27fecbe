pub mod class;
pub mod generator;
pub mod spec;

pub use class::CharacterClass;
pub use generator::{generate, generate_string, GeneratedString};
pub use spec::{ClassRule, GenerationSpec, StringOptions};
