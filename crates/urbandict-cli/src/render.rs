use std::fmt::Write;

use urbandict_core::{Definition, Response};

pub fn render_text(response: &Response) -> String {
    if response.is_empty() {
        return "No definitions found.\n".to_string();
    }

    let mut out = String::new();
    for (i, def) in response.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        render_definition(&mut out, def);
    }
    out
}

fn render_definition(out: &mut String, def: &Definition) {
    // Writing into a String can't fail
    let _ = writeln!(out, "{} (#{})", def.word, def.definition_id);
    let _ = writeln!(out, "{}", def.definition.trim());
    if !def.example.trim().is_empty() {
        let _ = writeln!(out, "  e.g. {}", def.example.trim());
    }
    let _ = writeln!(
        out,
        "  by {} on {} | +{} / -{}",
        def.author, def.written_on, def.thumbs_up, def.thumbs_down
    );
    if !def.permalink.is_empty() {
        let _ = writeln!(out, "  {}", def.permalink);
    }
}

pub fn render_json(response: &Response) -> serde_json::Result<String> {
    serde_json::to_string_pretty(response)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_response_notice() {
        assert_eq!(render_text(&Response::default()), "No definitions found.\n");
    }

    #[test]
    fn test_text_contains_votes_and_author() {
        let response: Response = serde_json::from_str(
            r#"{ "list": [{ "word": "yeet", "definition": "throw", "author": "kid",
                 "thumbs_up": 7, "thumbs_down": 2, "defid": 11 }] }"#,
        )
        .unwrap();

        let text = render_text(&response);
        assert!(text.starts_with("yeet (#11)\nthrow\n"));
        assert!(text.contains("by kid"));
        assert!(text.contains("+7 / -2"));
        assert!(!text.contains("e.g."));
    }

    #[test]
    fn test_json_keeps_wire_names() {
        let response: Response =
            serde_json::from_str(r#"{ "list": [{ "defid": 5, "current_vote": "?" }] }"#).unwrap();
        let json = render_json(&response).unwrap();
        assert!(json.contains("\"defid\": 5"));
        assert!(json.contains("\"current_vote\": \"?\""));
    }
}
