//! Text heuristics applied to individual export columns.

use once_cell::sync::Lazy;
use regex::Regex;

static TRAILING_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"\([a-z]+\.?\) *$").unwrap());
static PARENTHETICAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"\([^)]+\)").unwrap());
static SLASH_ANNOTATION: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(.*?) /").unwrap());

/// Grammatical tags the export appends to English glosses, mapped to the stored word type
const WORDTYPE_TAGS: [(&str, &str); 4] = [
    ("(subst.)", "subst."),
    ("(verbo)", "verbo"),
    ("(mallon.)", "mallon."),
    ("(adj.)", "adj."),
];

/// Trailing whitelisted tag of `gloss`, e.g. `"kuri (verbo)"` → `("verbo", "kuri")`.
/// The returned gloss has the tag and surrounding whitespace removed.
pub fn trailing_wordtype(gloss: &str) -> Option<(&'static str, String)> {
    let found = TRAILING_TAG.find(gloss)?;
    let tag = found.as_str().trim();
    let (_, wordtype) = WORDTYPE_TAGS.iter().find(|(literal, _)| *literal == tag)?;
    let stripped = gloss[..found.start()].trim().to_string();
    Some((*wordtype, stripped))
}

/// Text before the first parenthesis, trimmed
pub fn leading_gloss(gloss: &str) -> &str {
    // Cut at `(`, not at the first space, so multi-word glosses like "hard disk" stay whole
    gloss.split('(').next().unwrap_or_default().trim()
}

/// Comma-separated alternates inside the first parenthetical group
pub fn parenthetical_alternates(gloss: &str) -> Vec<String> {
    match PARENTHETICAL.find(gloss) {
        Some(group) => group
            .as_str()
            .split(',')
            .map(|part| part.trim_matches(|c| c == '(' || c == ')' || c == ' '))
            .map(str::to_string)
            .collect(),
        None => vec![],
    }
}

/// Drop a trailing `" /..."` annotation: `"tablo /tabloj"` → `"tablo"`
pub fn strip_slash_annotation(headword: &str) -> &str {
    SLASH_ANNOTATION
        .captures(headword)
        .and_then(|caps| caps.get(1))
        .map_or(headword, |m| m.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_wordtype_whitelist() {
        assert_eq!(
            trailing_wordtype("run (verbo)"),
            Some(("verbo", "run".to_string()))
        );
        assert_eq!(
            trailing_wordtype("file (subst.)  "),
            Some(("subst.", "file".to_string()))
        );
        assert_eq!(
            trailing_wordtype("small (adj.)"),
            Some(("adj.", "small".to_string()))
        );
        assert_eq!(
            trailing_wordtype("booklet (mallon.)"),
            Some(("mallon.", "booklet".to_string()))
        );
    }

    #[test]
    fn test_trailing_wordtype_rejects_other_tags() {
        assert_eq!(trailing_wordtype("run (adv.)"), None);
        assert_eq!(trailing_wordtype("run (verbo) fast"), None);
        assert_eq!(trailing_wordtype("(Verbo)"), None);
        assert_eq!(trailing_wordtype(""), None);
    }

    #[test]
    fn test_leading_gloss() {
        assert_eq!(leading_gloss("hard disk (HD, disk)"), "hard disk");
        assert_eq!(leading_gloss("  mouse "), "mouse");
        assert_eq!(leading_gloss("(only)"), "");
    }

    #[test]
    fn test_parenthetical_alternates() {
        assert_eq!(
            parenthetical_alternates("hard disk (HD, disk)"),
            vec!["HD", "disk"]
        );
        assert_eq!(parenthetical_alternates("mouse (rodent) (x)"), vec!["rodent"]);
        assert!(parenthetical_alternates("mouse").is_empty());
    }

    #[test]
    fn test_strip_slash_annotation() {
        assert_eq!(strip_slash_annotation("tablo /tabloj"), "tablo");
        assert_eq!(strip_slash_annotation("a b /c /d"), "a b");
        assert_eq!(strip_slash_annotation("and/or"), "and/or");
        assert_eq!(strip_slash_annotation("tablo"), "tablo");
    }
}
