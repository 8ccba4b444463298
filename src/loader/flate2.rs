use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use flate2::read::GzDecoder;

use crate::error::Result;
use crate::loader::LexiconSource;
use crate::parser::LexiconParser;

pub struct LexiconGzFileLoader {
    filepath: PathBuf,
}

impl LexiconGzFileLoader {
    pub fn new<P>(filepath: P) -> Self
    where
        P: AsRef<Path>,
    {
        Self {
            filepath: PathBuf::from(filepath.as_ref()),
        }
    }
}

impl LexiconSource for LexiconGzFileLoader {
    type Iter = LexiconParser<GzDecoder<File>>;

    fn iter(&self) -> Result<LexiconParser<GzDecoder<File>>> {
        let reader = GzDecoder::new(File::open(&self.filepath)?);
        LexiconParser::new(BufReader::new(reader))
    }
}
