/// Escapes text for safe interpolation into HTML markup and attributes.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Renders roast text as HTML: the text is escaped first, then `**bold**`,
/// `- ` bullet lists and paragraphs are applied.
pub fn render_roast_html(text: &str) -> String {
    let mut html = String::new();
    let mut in_list = false;

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            close_list(&mut html, &mut in_list);
            continue;
        }

        let escaped = escape_html(line);
        match escaped
            .strip_prefix("- ")
            .or_else(|| escaped.strip_prefix("* "))
        {
            Some(item) => {
                if !in_list {
                    html.push_str("<ul>");
                    in_list = true;
                }
                html.push_str(&format!("<li>{}</li>", strong(item.trim_start())));
            }
            None => {
                close_list(&mut html, &mut in_list);
                html.push_str(&format!("<p>{}</p>", strong(&escaped)));
            }
        }
    }
    close_list(&mut html, &mut in_list);

    html
}

fn close_list(html: &mut String, in_list: &mut bool) {
    if *in_list {
        html.push_str("</ul>");
        *in_list = false;
    }
}

// Pairs up `**` markers; an unmatched trailing marker is kept as text.
fn strong(text: &str) -> String {
    let parts: Vec<&str> = text.split("**").collect();
    let markers = parts.len() - 1;
    let paired = markers / 2 * 2;

    let mut out = String::with_capacity(text.len());
    for (i, part) in parts.iter().enumerate() {
        if i > 0 {
            if i > paired {
                out.push_str("**");
            } else if i % 2 == 1 {
                out.push_str("<strong>");
            } else {
                out.push_str("</strong>");
            }
        }
        out.push_str(part);
    }
    out
}
