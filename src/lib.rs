pub mod charset;
pub mod entropy;
pub mod error;
pub mod shuffle;
pub mod utils;
pub mod values;

pub use charset::{
	generate,
	generate_string,
	CharacterClass,
	ClassRule,
	GeneratedString,
	GenerationSpec,
	StringOptions,
};
pub use entropy::{seed_from_str, Draw, LaggedFibonacci, SecureSource};
pub use error::{Error, Result, SpecificationError};
pub use shuffle::{shuffle, shuffle_with, Permutation, PermutationSpec};
pub use utils::config::{Config, ConfigError};
pub use values::{
	random_id,
	random_integer,
	random_password,
	random_uuid,
	IdOptions,
	IntegerOptions,
	Password,
	RandomId,
};
