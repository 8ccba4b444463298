extern crate quickcheck;

use std::collections::HashSet;
use std::fs::File;
use std::io::Write;

use quickcheck::{QuickCheck, TestResult, Testable};

use morphdict::form_index::SimpleFormIndex;
use morphdict::links::{read_links, read_links_file};
use morphdict::loader::LexiconTextLoader;
use morphdict::vocabulary::DEFAULT_VOCABULARY;
use morphdict::writer::to_json_string;
use morphdict::{
    build_dictionary, build_dictionary_par, Analyzer, FeatureSet, Grammeme, LexemeId,
    LexiconAnalyzer, LexiconFileFormats, MorphError, ParsedWord, Result, Tag, WordRecord,
};

const MINI_LEXICON: &str = include_str!("data/mini_lexicon.txt");
const SPLIT_LEXICON: &str = include_str!("data/split_lexicon.txt");
const SPLIT_LINKS: &str = include_str!("data/split_links.txt");

fn analyzer() -> LexiconAnalyzer {
    LexiconAnalyzer::from_text(MINI_LEXICON).unwrap()
}

fn qc<T: Testable>(f: T) {
    QuickCheck::new().tests(200).max_tests(2000).quickcheck(f);
}

/// Tags every word with a fixed part of speech and realizes only singular
/// forms.
struct SingularOnly(Grammeme);

impl Analyzer for SingularOnly {
    fn parse(&self, word: &str) -> Result<ParsedWord> {
        if word.trim().is_empty() {
            return Err(MorphError::AnalysisUnavailable {
                word: word.to_string(),
            });
        }
        Ok(ParsedWord {
            word: word.to_lowercase(),
            normal_form: word.to_lowercase(),
            tag: Tag::new(FeatureSet::from([self.0])),
            lexeme: LexemeId(0),
        })
    }

    fn inflect(&self, parsed: &ParsedWord, features: FeatureSet) -> Option<String> {
        if features.contains(Grammeme::Sing) {
            Some(format!("{}:{}", parsed.word, features))
        } else {
            None
        }
    }
}

#[test]
fn noun_example() {
    let batch = build_dictionary(&analyzer(), &["книга"]);
    let record = batch.dictionary.get("книга").unwrap();
    assert_eq!(record.pos, Some(Grammeme::Noun));
    let cases = record.cases.as_ref().unwrap();
    assert_eq!(cases.genitive.singular.as_deref(), Some("книги"));
    assert_eq!(cases.genitive.plural.as_deref(), Some("книг"));

    let value = serde_json::to_value(record).unwrap();
    assert!(value.get("conjugations").is_none());
    assert!(value.get("comparison").is_none());
}

#[test]
fn verb_example() {
    let batch = build_dictionary(&analyzer(), &["говорить"]);
    let value = serde_json::to_value(batch.dictionary.get("говорить").unwrap()).unwrap();
    let conjugations = &value["conjugations"];
    let present = conjugations["present"].as_object().unwrap();
    let keys: HashSet<_> = present.keys().map(String::as_str).collect();
    assert_eq!(keys, HashSet::from(["я", "ты", "он_она", "мы", "вы", "они"]));
    let past = conjugations["past"].as_object().unwrap();
    let keys: HashSet<_> = past.keys().map(String::as_str).collect();
    assert_eq!(keys, HashSet::from(["он", "она", "оно", "они"]));
    assert_eq!(present["я"], "говорю");
    assert_eq!(value["aspect"], "impf");
}

#[test]
fn garbage_example() {
    let batch = build_dictionary(&analyzer(), &["книга", "zzqx123", "я"]);
    assert_eq!(batch.errors.len(), 1);
    assert_eq!(batch.errors[0].word, "zzqx123");
    assert!(batch.dictionary.get("zzqx123").is_none());
    assert_eq!(batch.dictionary.len(), 2);
}

#[test]
fn pronoun_has_empty_plural_slots() {
    let batch = build_dictionary(&analyzer(), &["я"]);
    let value = serde_json::to_value(&batch.dictionary).unwrap();
    let cases = value["я"]["cases"].as_object().unwrap();
    assert_eq!(cases.len(), 6);
    for forms in cases.values() {
        assert!(forms["plural"].is_null());
        assert!(forms["singular"].is_string());
    }
}

#[test]
fn default_vocabulary_runs() {
    let vocabulary = DEFAULT_VOCABULARY;
    let batch = build_dictionary(&analyzer(), vocabulary);
    assert_eq!(batch.processed, vocabulary.len());
    assert!(batch.dictionary.contains("Анна"));
    assert!(batch.dictionary.contains("хороший"));
    assert!(batch.dictionary.contains("мочь"));
    let failed: HashSet<_> = batch.errors.iter().map(|f| f.word.as_str()).collect();
    assert!(failed.contains("библиотека"));
    assert!(!failed.contains("книга"));
}

#[test]
fn simple_index_gives_same_dictionary() {
    let simple: LexiconAnalyzer<SimpleFormIndex> =
        LexiconAnalyzer::from_text(MINI_LEXICON).unwrap();
    let a = build_dictionary(&simple, DEFAULT_VOCABULARY);
    let b = build_dictionary(&analyzer(), DEFAULT_VOCABULARY);
    assert_eq!(a, b);
}

#[test]
fn gzip_lexicon() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("lexicon.txt.gz");
    let mut encoder =
        flate2::write::GzEncoder::new(File::create(&path).unwrap(), flate2::Compression::default());
    encoder.write_all(MINI_LEXICON.as_bytes()).unwrap();
    encoder.finish().unwrap();

    let a: LexiconAnalyzer =
        LexiconAnalyzer::from_file(&path, LexiconFileFormats::from_path(&path)).unwrap();
    assert_eq!(a.num_lexemes(), analyzer().num_lexemes());
    assert_eq!(a.parse("книг").unwrap().normal_form, "книга");
}

#[test]
fn zstd_lexicon() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("lexicon.txt.zst");
    let compressed = zstd::encode_all(MINI_LEXICON.as_bytes(), 0).unwrap();
    std::fs::write(&path, compressed).unwrap();

    let a: LexiconAnalyzer = LexiconAnalyzer::from_file(&path, LexiconFileFormats::Zstd).unwrap();
    assert_eq!(a.parse("могут").unwrap().normal_form, "мочь");
}

#[test]
fn compiled_lexicon() {
    let dir = tempfile::tempdir().unwrap();
    let plain = dir.path().join("lexicon.txt");
    std::fs::write(&plain, MINI_LEXICON).unwrap();
    let compiled = dir.path().join("lexicon.bin");

    let a: LexiconAnalyzer = LexiconAnalyzer::from_file(&plain, LexiconFileFormats::Plain).unwrap();
    a.write_to(File::create(&compiled).unwrap()).unwrap();
    let b: LexiconAnalyzer =
        LexiconAnalyzer::from_file(&compiled, LexiconFileFormats::from_path(&compiled)).unwrap();

    let json_a = to_json_string(&build_dictionary(&a, DEFAULT_VOCABULARY).dictionary).unwrap();
    let json_b = to_json_string(&build_dictionary(&b, DEFAULT_VOCABULARY).dictionary).unwrap();
    assert_eq!(json_a, json_b);
}

#[test]
fn missing_lexicon_file() {
    let err = LexiconAnalyzer::<SimpleFormIndex>::from_file(
        "/nonexistent/lexicon.txt",
        LexiconFileFormats::Plain,
    )
    .unwrap_err();
    assert!(matches!(err, MorphError::Io(_)));
}

#[test]
fn linked_lemmas_share_paradigm() {
    let links = read_links(SPLIT_LINKS.as_bytes()).unwrap();
    let a: LexiconAnalyzer =
        LexiconAnalyzer::from_linked_source(&LexiconTextLoader::new(SPLIT_LEXICON.as_bytes()), &links)
            .unwrap();
    // NOUN-ADJF is not merged.
    assert_eq!(a.num_lexemes(), 3);

    let batch = build_dictionary(&a, &["говорить", "хороший", "говорю"]);
    assert!(batch.errors.is_empty());
    let value = serde_json::to_value(&batch.dictionary).unwrap();

    let conjugations = &value["говорить"]["conjugations"];
    assert_eq!(conjugations["present"].as_object().unwrap().len(), 6);
    assert_eq!(conjugations["past"].as_object().unwrap().len(), 4);
    assert_eq!(conjugations["imperative"]["вы"], "говорите");
    assert_eq!(conjugations["present"]["он_она"], "говорит");

    assert_eq!(value["хороший"]["comparison"]["comparative"], "лучше");
    assert_eq!(value["говорю"]["normal_form"], "говорить");
    assert!(value["ёлка"].is_null());
}

#[test]
fn unlinked_infinitive_has_no_finite_forms() {
    let a: LexiconAnalyzer = LexiconAnalyzer::from_text(SPLIT_LEXICON).unwrap();
    assert_eq!(a.num_lexemes(), 5);
    let record = WordRecord::analyze(&a, "говорить").unwrap();
    let table = record.conjugations.unwrap();
    assert!(table.present.is_empty() && table.past.is_empty());
}

#[test]
fn linked_lexicon_file() {
    let dir = tempfile::tempdir().unwrap();
    let lexicon = dir.path().join("dict.opcorpora.txt.gz");
    let mut encoder = flate2::write::GzEncoder::new(
        File::create(&lexicon).unwrap(),
        flate2::Compression::default(),
    );
    encoder.write_all(SPLIT_LEXICON.as_bytes()).unwrap();
    encoder.finish().unwrap();
    let links_path = dir.path().join("links.txt");
    std::fs::write(&links_path, SPLIT_LINKS).unwrap();

    let links = read_links_file(&links_path).unwrap();
    let a: LexiconAnalyzer =
        LexiconAnalyzer::from_linked_file(&lexicon, LexiconFileFormats::Gzip, &links).unwrap();
    let compiled = dir.path().join("lexicon.bin");
    a.write_to(File::create(&compiled).unwrap()).unwrap();
    let b: LexiconAnalyzer =
        LexiconAnalyzer::from_file(&compiled, LexiconFileFormats::Bincode).unwrap();

    let parsed = b.parse("говорили").unwrap();
    assert_eq!(parsed.normal_form, "говорить");
    let form = b.inflect(&parsed, FeatureSet::from([Grammeme::Per1, Grammeme::Sing, Grammeme::Pres]));
    assert_eq!(form.as_deref(), Some("говорю"));
}

#[test]
fn vocabulary_without_yo() {
    let a: LexiconAnalyzer = LexiconAnalyzer::from_text(SPLIT_LEXICON).unwrap();
    let batch = build_dictionary(&a, &["елка"]);
    let record = batch.dictionary.get("елка").unwrap();
    assert_eq!(record.normal_form, "ёлка");
    let cases = record.cases.as_ref().unwrap();
    assert_eq!(cases.genitive.plural.as_deref(), Some("ёлок"));
}

#[test]
fn json_keeps_native_script() {
    let batch = build_dictionary(&analyzer(), &["книга"]);
    let json = to_json_string(&batch.dictionary).unwrap();
    assert!(json.contains("\"genitive\": {\n        \"singular\": \"книги\""));
    assert!(!json.contains("\\u"));
}

// Properties.

#[test]
fn prop_case_table_shape() {
    fn prop(word: String) -> TestResult {
        if word.trim().is_empty() {
            return TestResult::discard();
        }
        let a = SingularOnly(Grammeme::Noun);
        let record = WordRecord::analyze(&a, &word).unwrap();
        let value = serde_json::to_value(&record).unwrap();
        let cases = value["cases"].as_object().unwrap();
        let shape_ok = cases.len() == 6
            && cases.values().all(|forms| {
                let forms = forms.as_object().unwrap();
                forms.len() == 2 && forms["singular"].is_string() && forms["plural"].is_null()
            });
        TestResult::from_bool(shape_ok)
    }
    qc(prop as fn(String) -> TestResult);
}

#[test]
fn prop_conjugation_has_no_empty_slots() {
    fn prop(word: String) -> TestResult {
        if word.trim().is_empty() {
            return TestResult::discard();
        }
        let a = SingularOnly(Grammeme::Verb);
        let record = WordRecord::analyze(&a, &word).unwrap();
        let table = record.conjugations.unwrap();
        // Plural persons and the plural past are unrealizable here.
        TestResult::from_bool(
            table.present.len() == 3
                && table.past.len() == 3
                && table.imperative.len() == 1
                && table.present.values().all(|f| !f.is_empty()),
        )
    }
    qc(prop as fn(String) -> TestResult);
}

#[test]
fn prop_superlative_is_marker_plus_word() {
    fn prop(word: String) -> TestResult {
        if word.trim().is_empty() {
            return TestResult::discard();
        }
        let a = SingularOnly(Grammeme::Adjf);
        let record = WordRecord::analyze(&a, &word).unwrap();
        let comparison = record.comparison.unwrap();
        TestResult::from_bool(
            comparison.superlative == format!("самый {}", word.to_lowercase())
                && comparison.comparative.is_none(),
        )
    }
    qc(prop as fn(String) -> TestResult);
}

#[test]
fn prop_batch_is_total() {
    fn prop(words: Vec<String>) -> bool {
        let mut vocabulary = words;
        vocabulary.extend(["книга", "хороший"].map(String::from));
        let mut seen = HashSet::new();
        vocabulary.retain(|w| seen.insert(w.clone()));

        let batch = build_dictionary(&analyzer(), &vocabulary);
        batch.processed == vocabulary.len()
            && batch.dictionary.len() + batch.errors.len() == vocabulary.len()
            && batch.errors.iter().all(|f| !batch.dictionary.contains(&f.word))
    }
    qc(prop as fn(Vec<String>) -> bool);
}

#[test]
fn prop_idempotent() {
    fn prop(words: Vec<String>) -> bool {
        let mut vocabulary = words;
        vocabulary.extend(["говорить", "я", "ъ"].map(String::from));
        let a = analyzer();

        let first = build_dictionary(&a, &vocabulary);
        let second = build_dictionary(&a, &vocabulary);
        let parallel = build_dictionary_par(&a, &vocabulary);
        to_json_string(&first.dictionary).unwrap() == to_json_string(&second.dictionary).unwrap()
            && first.errors == second.errors
            && first == parallel
    }
    qc(prop as fn(Vec<String>) -> bool);
}
