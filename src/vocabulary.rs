use std::io::{BufRead, BufReader, Read};

use crate::error::Result;

/// Words used by the lessons, grouped by module. Duplicates are intentional:
/// a word listed again in a later module overwrites its earlier entry.
pub const DEFAULT_VOCABULARY: &[&str] = &[
    // Module 0: alphabet examples
    "Анна", "библиотека", "вторник", "говорить", "дом", "день",
    "ёлка", "жить", "зима", "имя", "мой", "кот", "лампа", "мама",
    "нет", "окно", "папа", "рука", "сын", "там", "утро", "фильм",
    "хорошо", "цирк", "час", "школа", "борщ", "объект", "мы",
    "это", "юг", "я",
    // Module 1: greetings
    "Здравствуйте", "студент", "студентка", "американец",
    "американка", "жить", "университет",
    // Module 2: family
    "папа", "мама", "брат", "сестра", "работать",
    "врач", "учительница", "дом",
    // Module 3: hobbies
    "читать", "книга", "смотреть", "фильм", "слушать",
    "музыка", "любить", "ходить", "кино", "футбол",
    // Food pack
    "кафе", "ресторан", "столовая", "меню", "счёт", "официант",
    // Sentence building
    "я", "ты", "он", "она", "мы", "вы", "они",
    "в", "на", "с", "к", "у", "о",
    "и", "а", "но",
    "хотеть", "мочь", "знать", "думать", "говорить",
    "большой", "маленький", "хороший", "плохой", "новый", "старый",
];

/// Reads a vocabulary with one word per line. Blank lines and lines starting
/// with `#` are skipped.
pub fn read_vocabulary<R>(reader: R) -> Result<Vec<String>>
where
    R: Read,
{
    let mut words = Vec::new();
    for line in BufReader::new(reader).lines() {
        let line = line?;
        let word = line.trim();
        if word.is_empty() || word.starts_with('#') {
            continue;
        }
        words.push(word.to_string());
    }
    Ok(words)
}
