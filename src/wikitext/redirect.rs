use regex::Regex;
use std::sync::LazyLock;

// #REDIRECT [[Turbopolsa]]
static REDIRECT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)#REDIRECT[^\[]*\[\[([^\]]*)\]\]").unwrap());

/// Target page of a `#REDIRECT [[...]]` directive, if the wikitext has one
pub fn redirect_target(wikitext: &str) -> Option<String> {
    let target = REDIRECT.captures(wikitext)?.get(1)?.as_str().trim();
    Some(target.to_string())
}
