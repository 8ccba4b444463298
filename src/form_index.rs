mod simple;
mod yada;

pub use crate::form_index::{simple::SimpleFormIndex, yada::DoubleArrayFormIndex};
use crate::error::Result;

/// Trait for a data structure mapping surface forms to dense identifiers.
pub trait FormIndex {
    /// Builds an index where the `i`-th form gets identifier `i`.
    ///
    /// Forms must be unique.
    fn build<'a, T>(forms: T) -> Result<Self>
    where
        T: IntoIterator<Item = &'a str>,
        Self: Sized;

    /// Gets the number of indexed forms.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Looks up a form.
    fn get(&self, form: &str) -> Option<usize>;
}
