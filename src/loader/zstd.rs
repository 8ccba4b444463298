use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use zstd::stream::read::Decoder;

use crate::error::Result;
use crate::loader::LexiconSource;
use crate::parser::LexiconParser;

pub struct LexiconZstFileLoader {
    filepath: PathBuf,
}

impl LexiconZstFileLoader {
    pub fn new<P>(filepath: P) -> Self
    where
        P: AsRef<Path>,
    {
        Self {
            filepath: PathBuf::from(filepath.as_ref()),
        }
    }
}

impl LexiconSource for LexiconZstFileLoader {
    type Iter = LexiconParser<Decoder<'static, BufReader<File>>>;

    fn iter(&self) -> Result<Self::Iter> {
        let reader = Decoder::new(File::open(&self.filepath)?)?;
        LexiconParser::new(BufReader::new(reader))
    }
}
