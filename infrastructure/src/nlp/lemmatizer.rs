//! Rule-based English lemmatizer.
//!
//! Irregular forms come from a lookup table; regular inflections are undone
//! by suffix rules, preferring a candidate that is a known base verb.

use super::lexicon;
use neuroform_domain::PartOfSpeech;

/// Base form of `word` (already lowercased) for the given part of speech.
pub fn lemmatize(word: &str, pos: PartOfSpeech) -> String {
    match pos {
        PartOfSpeech::Verb | PartOfSpeech::Auxiliary => verb_lemma(word),
        PartOfSpeech::Noun => noun_lemma(word),
        PartOfSpeech::Adjective => adjective_lemma(word).to_string(),
        _ => word.to_string(),
    }
}

/// Whether `word` is a known verb or an inflection of one.
pub fn is_verb_form(word: &str) -> bool {
    irregular_verb(word).is_some() || lexicon::is_known_verb(&verb_lemma(word))
}

fn irregular_verb(word: &str) -> Option<&'static str> {
    let base = match word {
        "am" | "is" | "are" | "was" | "were" | "been" | "being" | "'re" | "'m" | "'s" => "be",
        "has" | "had" | "having" | "'ve" => "have",
        "does" | "did" | "done" | "doing" => "do",
        "goes" | "went" | "gone" => "go",
        "ca" => "can",
        "wo" | "'ll" => "will",
        "'d" => "would",
        "n't" => "not",
        "made" => "make",
        "said" => "say",
        "got" | "gotten" => "get",
        "took" | "taken" => "take",
        "came" => "come",
        "saw" | "seen" => "see",
        "knew" | "known" => "know",
        "thought" => "think",
        "gave" | "given" => "give",
        "found" => "find",
        "told" => "tell",
        "felt" => "feel",
        "left" => "leave",
        "kept" => "keep",
        "began" | "begun" => "begin",
        "brought" => "bring",
        "bought" => "buy",
        "ran" => "run",
        "wrote" | "written" => "write",
        "chose" | "chosen" => "choose",
        "ate" | "eaten" => "eat",
        "paid" => "pay",
        "met" => "meet",
        "sent" => "send",
        "built" => "build",
        "spent" => "spend",
        "understood" => "understand",
        "heard" => "hear",
        "held" => "hold",
        "lost" => "lose",
        "meant" => "mean",
        "sat" => "sit",
        "stood" => "stand",
        "won" => "win",
        "spoke" | "spoken" => "speak",
        "drove" | "driven" => "drive",
        "became" => "become",
        _ => return None,
    };
    Some(base)
}

fn irregular_noun(word: &str) -> Option<&'static str> {
    let base = match word {
        "children" => "child",
        "people" => "person",
        "men" => "man",
        "women" => "woman",
        "mice" => "mouse",
        "feet" => "foot",
        "teeth" => "tooth",
        "geese" => "goose",
        "lives" => "life",
        "wives" => "wife",
        "knives" => "knife",
        "series" => "series",
        "species" => "species",
        "news" => "news",
        _ => return None,
    };
    Some(base)
}

fn adjective_lemma(word: &str) -> &str {
    match word {
        "better" | "best" => "good",
        "worse" | "worst" => "bad",
        _ => word,
    }
}

fn noun_lemma(word: &str) -> String {
    if let Some(base) = irregular_noun(word) {
        return base.to_string();
    }
    if word.chars().count() <= 3 {
        return word.to_string();
    }
    if let Some(stem) = word.strip_suffix("ies") {
        return format!("{}y", stem);
    }
    if ["ss", "us", "is"].iter().any(|s| word.ends_with(s)) {
        return word.to_string();
    }
    for suffix in ["sses", "ches", "shes", "xes"] {
        if word.ends_with(suffix) {
            return word[..word.len() - 2].to_string();
        }
    }
    match word.strip_suffix('s') {
        Some(stem) => stem.to_string(),
        None => word.to_string(),
    }
}

fn verb_lemma(word: &str) -> String {
    if let Some(base) = irregular_verb(word) {
        return base.to_string();
    }
    if lexicon::is_known_verb(word) {
        return word.to_string();
    }

    let candidates = verb_candidates(word);
    if let Some(known) = candidates.iter().find(|c| lexicon::is_known_verb(c)) {
        return known.clone();
    }
    candidates
        .into_iter()
        .next()
        .unwrap_or_else(|| word.to_string())
}

/// Possible base forms of an inflected verb, most likely first.
fn verb_candidates(word: &str) -> Vec<String> {
    let mut out = Vec::new();

    if let Some(stem) = word.strip_suffix("ied").filter(|s| s.len() > 1) {
        out.push(format!("{}y", stem));
    } else if let Some(stem) = word.strip_suffix("ies").filter(|s| s.len() > 1) {
        out.push(format!("{}y", stem));
    } else if let Some(stem) = word.strip_suffix("ing").filter(|s| s.len() > 1) {
        push_stem_variants(&mut out, stem);
    } else if let Some(stem) = word.strip_suffix("ed").filter(|s| s.len() > 1) {
        push_stem_variants(&mut out, stem);
        // agreed -> agree, used -> use
        out.push(word[..word.len() - 1].to_string());
    } else if let Some(stem) = word.strip_suffix("es").filter(|s| s.len() > 1) {
        if ["ss", "ch", "sh", "x", "z"].iter().any(|s| stem.ends_with(s)) {
            out.push(stem.to_string());
        }
        out.push(word[..word.len() - 1].to_string());
        out.push(stem.to_string());
    } else if let Some(stem) = word.strip_suffix('s').filter(|s| s.len() > 1 && !s.ends_with('s'))
    {
        out.push(stem.to_string());
    }

    out
}

/// Stem variants for "-ing" / "-ed": doubled consonant, silent "e", bare stem.
fn push_stem_variants(out: &mut Vec<String>, stem: &str) {
    let bytes = stem.as_bytes();
    let n = bytes.len();
    let doubled = n >= 2
        && bytes[n - 1] == bytes[n - 2]
        && bytes[n - 1].is_ascii_alphabetic()
        && !matches!(bytes[n - 1], b'a' | b'e' | b'i' | b'o' | b'u' | b'l' | b's' | b'z');

    if doubled {
        out.push(stem[..n - 1].to_string());
    }
    if ends_consonant_vowel_consonant(stem) || stem.ends_with('v') || stem.ends_with('u') {
        out.push(format!("{}e", stem));
        out.push(stem.to_string());
    } else {
        out.push(stem.to_string());
        out.push(format!("{}e", stem));
    }
}

fn ends_consonant_vowel_consonant(stem: &str) -> bool {
    let is_vowel = |b: u8| matches!(b, b'a' | b'e' | b'i' | b'o' | b'u');
    let bytes = stem.as_bytes();
    let n = bytes.len();
    n >= 3
        && !is_vowel(bytes[n - 1])
        && !matches!(bytes[n - 1], b'w' | b'x' | b'y')
        && is_vowel(bytes[n - 2])
        && !is_vowel(bytes[n - 3])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn verb(word: &str) -> String {
        lemmatize(word, PartOfSpeech::Verb)
    }

    fn noun(word: &str) -> String {
        lemmatize(word, PartOfSpeech::Noun)
    }

    // ==================== Verbs ====================

    #[test]
    fn test_regular_verbs() {
        assert_eq!(verb("agreed"), "agree");
        assert_eq!(verb("agrees"), "agree");
        assert_eq!(verb("liked"), "like");
        assert_eq!(verb("liking"), "like");
        assert_eq!(verb("working"), "work");
        assert_eq!(verb("preferred"), "prefer");
        assert_eq!(verb("running"), "run");
        assert_eq!(verb("applies"), "apply");
        assert_eq!(verb("studied"), "study");
        assert_eq!(verb("watches"), "watch");
        assert_eq!(verb("uses"), "use");
    }

    #[test]
    fn test_irregular_verbs() {
        assert_eq!(verb("went"), "go");
        assert_eq!(verb("bought"), "buy");
        assert_eq!(lemmatize("is", PartOfSpeech::Auxiliary), "be");
        assert_eq!(lemmatize("ca", PartOfSpeech::Auxiliary), "can");
        assert_eq!(lemmatize("'s", PartOfSpeech::Auxiliary), "be");
        assert_eq!(lemmatize("'s", PartOfSpeech::Particle), "'s");
    }

    #[test]
    fn test_unknown_verb_falls_back_to_suffix_rules() {
        assert_eq!(verb("jumped"), "jump");
        assert_eq!(verb("hiking"), "hike");
    }

    // ==================== Nouns ====================

    #[test]
    fn test_nouns() {
        assert_eq!(noun("policies"), "policy");
        assert_eq!(noun("plans"), "plan");
        assert_eq!(noun("prices"), "price");
        assert_eq!(noun("boxes"), "box");
        assert_eq!(noun("classes"), "class");
        assert_eq!(noun("status"), "status");
        assert_eq!(noun("analysis"), "analysis");
        assert_eq!(noun("children"), "child");
        assert_eq!(noun("bus"), "bus");
    }

    #[test]
    fn test_adjectives_and_others() {
        assert_eq!(lemmatize("best", PartOfSpeech::Adjective), "good");
        assert_eq!(lemmatize("quickly", PartOfSpeech::Adverb), "quickly");
    }
}
