//! Usage instructions page.

use axum::response::Html;
use std::fmt::Write;

use crate::markup::Tag;

/// Handle GET / and GET /xml - describe how to use the service.
pub async fn index() -> Html<String> {
    Html(usage_page())
}

/// Build the usage page, with one table row per recognized tag.
pub fn usage_page() -> String {
    let mut rows = String::new();
    for tag in Tag::ALL {
        let attribute = tag
            .attribute()
            .map(|a| format!("<code>{}</code>", a))
            .unwrap_or_default();
        let _ = writeln!(
            rows,
            "<tr><td><code>&lt;{}&gt;</code></td><td>{}</td><td>{}</td></tr>",
            tag.name(),
            attribute,
            tag.summary()
        );
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<title>XML Printer</title>
</head>
<body>
<p>This interface is accessible via HTTP POST to /xml, and expects formatted XML.</p>
<pre>&lt;printout&gt;&lt;center&gt;&lt;bold&gt;HELLO&lt;/bold&gt;&lt;/center&gt;&lt;/printout&gt;</pre>
<table>
<tr><th>Tag</th><th>Attribute</th><th>Effect</th></tr>
{}</table>
<p>Unknown tags are ignored; their contents still print.</p>
</body>
</html>
"#,
        rows
    )
}
