use std::borrow::Cow;


/// Escapes a serialized URL for embedding in markup.
///
/// Replaces `&`, `<`, `>`, `'` and `"` with `&amp;`, `&lt;`, `&gt;`,
/// `&#039;` and `&#034;`. Input containing none of them is returned
/// borrowed and unchanged.
pub fn escape_xml(input: &str) -> Cow<'_, str> {
	if !input.contains(['&', '<', '>', '\'', '"']) {
		return Cow::Borrowed(input);
	}
	let mut out = String::with_capacity(input.len() + 16);
	for ch in input.chars() {
		match ch {
			'&' => out.push_str("&amp;"),
			'<' => out.push_str("&lt;"),
			'>' => out.push_str("&gt;"),
			'\'' => out.push_str("&#039;"),
			'"' => out.push_str("&#034;"),
			_ => out.push(ch),
		}
	}
	Cow::Owned(out)
}
