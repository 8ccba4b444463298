use serde::{Deserialize, Serialize};
use yada::{builder::DoubleArrayBuilder, DoubleArray};

use crate::error::{MorphError, Result};
use crate::form_index::FormIndex;

/// Compact double-array implementation of [`FormIndex`].
#[derive(Default, Debug, Deserialize, Serialize)]
pub struct DoubleArrayFormIndex {
    data: Vec<u8>,
    len: usize,
}

impl FormIndex for DoubleArrayFormIndex {
    fn build<'a, T>(forms: T) -> Result<Self>
    where
        T: IntoIterator<Item = &'a str>,
    {
        let mut keyset = vec![];
        for (id, form) in forms.into_iter().enumerate() {
            if form.as_bytes().contains(&0) {
                return Err(MorphError::invalid_argument(
                    "forms",
                    format!("NUL byte in form {:?}", form),
                ));
            }
            keyset.push((form.as_bytes(), u32::try_from(id).unwrap_or(u32::MAX)));
        }

        // yada stores values in 31 bits.
        if (keyset.len() >> 31) != 0 {
            return Err(MorphError::invalid_argument(
                "forms",
                "The number of forms must be represented in 31 bits.",
            ));
        }
        keyset.sort_by(|(f1, _), (f2, _)| f1.cmp(f2));

        for i in 1..keyset.len() {
            if keyset[i - 1].0 == keyset[i].0 {
                let (k, v) = &keyset[i - 1];
                return Err(MorphError::invalid_argument(
                    "forms",
                    format!("Duplicated key: {:?} => {}", String::from_utf8_lossy(k), v),
                ));
            }
        }

        let len = keyset.len();
        let data = if keyset.is_empty() {
            Vec::new()
        } else {
            DoubleArrayBuilder::build(&keyset[..]).ok_or_else(|| {
                MorphError::invalid_argument("forms", "Failed to build the double array.")
            })?
        };
        Ok(Self { data, len })
    }

    fn len(&self) -> usize {
        self.len
    }

    #[inline(always)]
    fn get(&self, form: &str) -> Option<usize> {
        // NUL is the double array's terminal label.
        if self.data.is_empty() || form.as_bytes().contains(&0) {
            return None;
        }
        let da = DoubleArray::new(&self.data[..]);
        da.exact_match_search(form.as_bytes()).map(|x| x as usize)
    }
}
