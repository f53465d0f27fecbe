use crate::entropy::Draw;
use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Permutation(pub Vec<usize>);

impl Permutation {
    /// Inside-out Fisher-Yates: one draw over `0..=i` per position, in
    /// ascending order. Seeded streams depend on this exact draw sequence.
    pub fn generate<D: Draw + ?Sized>(n: usize, draw: &mut D) -> Result<Self> {
        let mut values = vec![0usize; n];
        for i in 0..n {
            let j = draw.index(i + 1)?;
            values[i] = values[j];
            values[j] = i;
        }
        Ok(Permutation(values))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.iter().copied()
    }
}
