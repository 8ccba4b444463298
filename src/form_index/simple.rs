use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{MorphError, Result};
use crate::form_index::FormIndex;

/// Simple implementation of [`FormIndex`] with `HashMap`.
#[derive(Default, Debug, Deserialize, Serialize)]
pub struct SimpleFormIndex {
    map: HashMap<String, usize>,
}

impl FormIndex for SimpleFormIndex {
    fn build<'a, T>(forms: T) -> Result<Self>
    where
        T: IntoIterator<Item = &'a str>,
    {
        let mut map = HashMap::new();
        for (id, form) in forms.into_iter().enumerate() {
            if let Some(v) = map.insert(form.to_string(), id) {
                return Err(MorphError::invalid_argument(
                    "forms",
                    format!("Duplicated key: {:?} => {}", form, v),
                ));
            }
        }
        Ok(Self { map })
    }

    fn len(&self) -> usize {
        self.map.len()
    }

    fn get(&self, form: &str) -> Option<usize> {
        self.map.get(form).copied()
    }
}
