// Shared prompt fragments. Each generator keeps its own prompts.rs alongside it;
// this file holds only what more than one of them needs.

/// Appended to prompts whose response is parsed as JSON.
pub const JSON_ONLY_INSTRUCTION: &str = "Return your response ONLY as a single, valid JSON object. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences.";

/// Joins the system and user instructions into the single prompt string the
/// provider receives.
pub fn combine(system: &str, user: &str) -> String {
    format!("{system}\n\n{user}")
}

/// Replaces each `{name}` in `template` whose name appears in `values`, in a
/// single left-to-right pass. Substituted text is never rescanned, so braces in
/// user input come through verbatim. Unknown `{...}` runs (JSON examples in the
/// template) are left as they are.
pub fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let value = after.find('}').and_then(|close| {
            let name = &after[..close];
            values
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| (*value, close))
        });
        match value {
            Some((value, close)) => {
                out.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}
