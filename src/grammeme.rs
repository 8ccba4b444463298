use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

/// Grammatical category a [`Grammeme`] belongs to. At most one grammeme per
/// category appears in a well-formed tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    Pos,
    Animacy,
    Gender,
    Number,
    Case,
    Aspect,
    Transitivity,
    Person,
    Tense,
    Mood,
    Involvement,
    Voice,
}

macro_rules! grammemes {
    ($($variant:ident => $code:literal, $category:ident;)*) => {
        /// Closed vocabulary of grammatical tags, using OpenCorpora codes.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[repr(u8)]
        pub enum Grammeme {
            $($variant,)*
        }

        impl Grammeme {
            /// Every grammeme, in discriminant order.
            pub const ALL: &'static [Grammeme] = &[$(Grammeme::$variant,)*];

            /// Gets the OpenCorpora code, e.g. `"gent"`.
            pub const fn code(self) -> &'static str {
                match self {
                    $(Grammeme::$variant => $code,)*
                }
            }

            pub const fn category(self) -> Category {
                match self {
                    $(Grammeme::$variant => Category::$category,)*
                }
            }
        }

        impl FromStr for Grammeme {
            type Err = &'static str;

            fn from_str(code: &str) -> Result<Self, Self::Err> {
                match code {
                    $($code => Ok(Grammeme::$variant),)*
                    _ => Err("Unknown grammeme"),
                }
            }
        }
    };
}

grammemes! {
    Noun => "NOUN", Pos;
    Adjf => "ADJF", Pos;
    Adjs => "ADJS", Pos;
    Comp => "COMP", Pos;
    Verb => "VERB", Pos;
    Infn => "INFN", Pos;
    Prtf => "PRTF", Pos;
    Prts => "PRTS", Pos;
    Grnd => "GRND", Pos;
    Numr => "NUMR", Pos;
    Advb => "ADVB", Pos;
    Npro => "NPRO", Pos;
    Pred => "PRED", Pos;
    Prep => "PREP", Pos;
    Conj => "CONJ", Pos;
    Prcl => "PRCL", Pos;
    Intj => "INTJ", Pos;
    Anim => "anim", Animacy;
    Inan => "inan", Animacy;
    Masc => "masc", Gender;
    Femn => "femn", Gender;
    Neut => "neut", Gender;
    Sing => "sing", Number;
    Plur => "plur", Number;
    Nomn => "nomn", Case;
    Gent => "gent", Case;
    Datv => "datv", Case;
    Accs => "accs", Case;
    Ablt => "ablt", Case;
    Loct => "loct", Case;
    Voct => "voct", Case;
    Gen2 => "gen2", Case;
    Acc2 => "acc2", Case;
    Loc2 => "loc2", Case;
    Perf => "perf", Aspect;
    Impf => "impf", Aspect;
    Tran => "tran", Transitivity;
    Intr => "intr", Transitivity;
    Per1 => "1per", Person;
    Per2 => "2per", Person;
    Per3 => "3per", Person;
    Pres => "pres", Tense;
    Past => "past", Tense;
    Futr => "futr", Tense;
    Indc => "indc", Mood;
    Impr => "impr", Mood;
    Incl => "incl", Involvement;
    Excl => "excl", Involvement;
    Actv => "actv", Voice;
    Pssv => "pssv", Voice;
}

impl Grammeme {
    /// Position of this grammeme's bit inside a [`FeatureSet`](crate::FeatureSet).
    #[inline]
    pub(crate) const fn bit(self) -> u32 {
        self as u32
    }
}

impl fmt::Display for Grammeme {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl Serialize for Grammeme {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.code())
    }
}
