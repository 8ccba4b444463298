use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::loader::LexiconSource;
use crate::parser::LexiconParser;

pub struct LexiconFileLoader {
    filepath: PathBuf,
}

impl LexiconFileLoader {
    pub fn new<P>(filepath: P) -> Self
    where
        P: AsRef<Path>,
    {
        Self {
            filepath: PathBuf::from(filepath.as_ref()),
        }
    }
}

impl LexiconSource for LexiconFileLoader {
    type Iter = LexiconParser<File>;

    fn iter(&self) -> Result<LexiconParser<File>> {
        let reader = BufReader::new(File::open(&self.filepath)?);
        LexiconParser::new(reader)
    }
}

pub struct LexiconTextLoader<'a> {
    text: &'a [u8],
}

impl<'a> LexiconTextLoader<'a> {
    pub const fn new(text: &'a [u8]) -> Self {
        Self { text }
    }
}

impl<'a> LexiconSource for LexiconTextLoader<'a> {
    type Iter = LexiconParser<&'a [u8]>;

    fn iter(&self) -> Result<LexiconParser<&'a [u8]>> {
        let reader = BufReader::new(self.text);
        LexiconParser::new(reader)
    }
}
