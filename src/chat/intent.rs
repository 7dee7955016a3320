/// Coarse intent classes the router dispatches on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    SmallTalk,
    Math,
    Tech,
    Personal,
    Fact,
}

const SMALL_TALK_WORDS: [&str; 3] = ["hi", "hello", "hey"];

const MATH_MARKERS: [&str; 9] = ["sin", "cos", "area", "derivative", "+", "-", "*", "/", "^"];

const TECH_MARKERS: [&str; 4] = ["python", "java", "c++", "programming"];

const PERSONAL_MARKERS: [&str; 3] = ["my name", "my age", "my birth"];

/// Classify a lowercased message. `Fact` is the catch-all.
pub fn detect_intent(msg: &str) -> Intent {
    let has_greeting = msg
        .split(|c: char| !c.is_alphanumeric())
        .any(|word| SMALL_TALK_WORDS.contains(&word));
    if has_greeting {
        return Intent::SmallTalk;
    }

    if MATH_MARKERS.iter().any(|marker| msg.contains(marker)) {
        return Intent::Math;
    }

    if TECH_MARKERS.iter().any(|marker| msg.contains(marker)) {
        return Intent::Tech;
    }

    if PERSONAL_MARKERS.iter().any(|marker| msg.contains(marker)) {
        return Intent::Personal;
    }

    Intent::Fact
}

const LEAD_IN_PHRASES: [&str; 8] = [
    "who is",
    "what is",
    "tell me about",
    "explain",
    "details of",
    "information about",
    "when was",
    "when is",
];

/// Strip interrogative lead-ins and question marks, leaving the entity to
/// look up.
pub fn clean_entity(msg: &str) -> String {
    let mut cleaned = msg.to_lowercase();
    for phrase in LEAD_IN_PHRASES {
        cleaned = cleaned.replace(phrase, "");
    }
    cleaned.replace('?', "").trim().to_string()
}
