//! English word tables for the lexicon tagger.
//!
//! Closed-class words (determiners, pronouns, prepositions, auxiliaries, ...)
//! are listed exhaustively enough for form questions. Open-class tables only
//! need to cover words whose part of speech can't be guessed from suffixes.

use neuroform_domain::PartOfSpeech;

/// Part of speech for function words, `None` for open-class words.
pub fn closed_class(word: &str) -> Option<PartOfSpeech> {
    let pos = match word {
        "the" | "a" | "an" | "this" | "that" | "these" | "those" | "some" | "any" | "each"
        | "every" | "all" | "both" | "either" | "neither" | "another" | "such" => {
            PartOfSpeech::Determiner
        }

        "i" | "me" | "my" | "mine" | "myself" | "you" | "your" | "yours" | "yourself"
        | "yourselves" | "he" | "him" | "his" | "himself" | "she" | "her" | "hers" | "herself"
        | "it" | "its" | "itself" | "we" | "us" | "our" | "ours" | "ourselves" | "they"
        | "them" | "their" | "theirs" | "themselves" | "who" | "whom" | "whose" | "what"
        | "which" | "something" | "anything" | "nothing" | "everything" | "someone"
        | "anyone" | "everyone" | "nobody" | "somebody" | "anybody" | "everybody" => {
            PartOfSpeech::Pronoun
        }

        "when" | "where" | "why" | "how" | "very" | "too" | "just" | "so" | "then" | "there"
        | "here" | "now" | "really" | "always" | "never" | "often" | "sometimes" | "already"
        | "still" | "yet" | "again" | "ever" | "quite" | "rather" | "maybe" | "perhaps"
        | "also" | "usually" | "only" | "even" | "soon" | "once" | "twice" | "almost"
        | "enough" | "instead" | "otherwise" | "however" | "therefore" | "well" => {
            PartOfSpeech::Adverb
        }

        "in" | "on" | "at" | "by" | "for" | "with" | "about" | "against" | "between" | "into"
        | "through" | "during" | "before" | "after" | "above" | "below" | "from" | "up"
        | "down" | "of" | "off" | "over" | "under" | "within" | "without" | "via" | "per"
        | "across" | "around" | "behind" | "beside" | "besides" | "beyond" | "near"
        | "toward" | "towards" | "upon" | "among" | "along" | "despite" | "except" | "since"
        | "until" | "out" => PartOfSpeech::Adposition,

        "am" | "is" | "are" | "was" | "were" | "be" | "been" | "being" | "have" | "has"
        | "had" | "having" | "do" | "does" | "did" | "can" | "could" | "will" | "would"
        | "shall" | "should" | "may" | "might" | "must" | "ca" | "wo" | "'re" | "'m" | "'ve"
        | "'ll" | "'d" => PartOfSpeech::Auxiliary,

        "and" | "or" | "but" | "nor" | "if" | "because" | "although" | "though" | "while"
        | "whereas" | "unless" | "than" | "whether" | "as" => PartOfSpeech::Conjunction,

        "not" | "n't" | "to" | "'s" => PartOfSpeech::Particle,

        "yes" | "no" | "ok" | "okay" | "please" | "hello" | "hi" | "thanks" => {
            PartOfSpeech::Other
        }

        "one" | "two" | "three" | "four" | "five" | "six" | "seven" | "eight" | "nine"
        | "ten" | "hundred" | "thousand" | "million" => PartOfSpeech::Numeral,

        _ => return None,
    };
    Some(pos)
}

/// Words that make the following open-class word a noun ("the meeting",
/// "your plan").
pub fn introduces_noun(word: &str) -> bool {
    matches!(
        word,
        "the"
            | "a"
            | "an"
            | "this"
            | "that"
            | "these"
            | "those"
            | "my"
            | "your"
            | "his"
            | "her"
            | "its"
            | "our"
            | "their"
            | "some"
            | "any"
            | "each"
            | "every"
            | "which"
            | "what"
            | "whose"
    )
}

/// Words after which a clitic "'s" stands for "is".
pub fn contracts_is(word: &str) -> bool {
    matches!(
        word,
        "what"
            | "who"
            | "where"
            | "when"
            | "why"
            | "how"
            | "which"
            | "it"
            | "he"
            | "she"
            | "that"
            | "this"
            | "there"
            | "here"
    )
}

/// Common adjectives not recognisable by suffix.
pub fn is_known_adjective(word: &str) -> bool {
    matches!(
        word,
        "good"
            | "better"
            | "best"
            | "great"
            | "excellent"
            | "bad"
            | "worse"
            | "worst"
            | "poor"
            | "positive"
            | "negative"
            | "terrible"
            | "happy"
            | "sad"
            | "new"
            | "old"
            | "big"
            | "small"
            | "large"
            | "high"
            | "low"
            | "long"
            | "short"
            | "fast"
            | "slow"
            | "quick"
            | "easy"
            | "hard"
            | "difficult"
            | "simple"
            | "clear"
            | "fair"
            | "free"
            | "full"
            | "important"
            | "different"
            | "same"
            | "fine"
            | "nice"
            | "true"
            | "false"
            | "correct"
            | "wrong"
            | "right"
            | "safe"
            | "ready"
            | "sure"
            | "likely"
            | "unlikely"
            | "friendly"
            | "lovely"
            | "early"
            | "late"
            | "daily"
            | "weekly"
            | "monthly"
            | "yearly"
            | "basic"
            | "premium"
            | "public"
            | "private"
            | "open"
            | "strong"
            | "weak"
            | "main"
            | "current"
            | "recent"
            | "real"
            | "general"
            | "specific"
            | "neutral"
            | "satisfied"
            | "dissatisfied"
            | "interested"
    )
}

/// Common verbs in base form, used to recognise inflected forms.
pub fn is_known_verb(word: &str) -> bool {
    matches!(
        word,
        "agree"
            | "disagree"
            | "like"
            | "dislike"
            | "love"
            | "hate"
            | "prefer"
            | "avoid"
            | "want"
            | "need"
            | "think"
            | "believe"
            | "feel"
            | "know"
            | "use"
            | "work"
            | "live"
            | "apply"
            | "start"
            | "stop"
            | "hear"
            | "choose"
            | "select"
            | "pick"
            | "recommend"
            | "support"
            | "include"
            | "contact"
            | "describe"
            | "explain"
            | "rate"
            | "enjoy"
            | "expect"
            | "improve"
            | "help"
            | "find"
            | "buy"
            | "pay"
            | "visit"
            | "join"
            | "learn"
            | "study"
            | "try"
            | "plan"
            | "attend"
            | "receive"
            | "refer"
            | "travel"
            | "own"
            | "drive"
            | "run"
            | "read"
            | "write"
            | "speak"
            | "understand"
            | "accept"
            | "consent"
            | "allow"
            | "share"
            | "sign"
            | "subscribe"
            | "purchase"
            | "order"
            | "tell"
            | "ask"
            | "answer"
            | "provide"
            | "consider"
            | "happen"
            | "continue"
            | "change"
            | "move"
            | "leave"
            | "meet"
            | "spend"
            | "save"
            | "come"
            | "become"
            | "begin"
            | "bring"
            | "build"
            | "send"
            | "lose"
            | "win"
            | "mean"
            | "hold"
            | "sit"
            | "stand"
            | "eat"
            | "wish"
            | "watch"
            | "play"
            | "stay"
            | "wait"
            | "open"
            | "close"
            | "seem"
            | "look"
            | "see"
            | "say"
            | "get"
            | "go"
            | "make"
            | "take"
            | "give"
            | "keep"
    )
}

/// "-ly" words that are nouns, not adverbs.
pub fn is_ly_noun(word: &str) -> bool {
    matches!(
        word,
        "family" | "supply" | "reply" | "ally" | "belly" | "bully" | "jelly" | "rally" | "assembly"
    )
}

/// Stop words: high-frequency words excluded from keyword extraction.
///
/// Covers every closed-class word above plus frequent open-class words that
/// carry little meaning on their own.
pub fn is_stop_word(word: &str) -> bool {
    closed_class(word).is_some()
        || matches!(
            word,
            "make"
                | "made"
                | "get"
                | "got"
                | "go"
                | "goes"
                | "went"
                | "gone"
                | "say"
                | "said"
                | "see"
                | "take"
                | "give"
                | "put"
                | "show"
                | "call"
                | "keep"
                | "become"
                | "seem"
                | "back"
                | "much"
                | "many"
                | "more"
                | "most"
                | "other"
                | "others"
                | "same"
                | "own"
                | "first"
                | "last"
                | "least"
                | "less"
                | "few"
                | "several"
                | "whatever"
                | "whenever"
                | "wherever"
                | "whoever"
                | "thing"
                | "things"
                | "whole"
                | "else"
                | "next"
                | "mostly"
                | "thus"
                | "hence"
                | "indeed"
                | "nevertheless"
                | "meanwhile"
                | "latter"
                | "former"
                | "none"
        )
}
