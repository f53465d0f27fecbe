pub mod engine;
pub mod permutation;

pub use engine::{shuffle, shuffle_with, PermutationSpec};
pub use permutation::Permutation;
