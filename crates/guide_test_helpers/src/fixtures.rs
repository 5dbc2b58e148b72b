//! Sample pages shaped like the published guidelines

/// A page with `<main>` content, entities and nav/footer noise outside it
pub const GUIDELINES_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <title>Swift.org - API Design Guidelines</title>
</head>
<body class="page">
  <nav><a href="/">Swift.org</a> &gt; Documentation</nav>
  <main role="main">
    <h1>API Design Guidelines</h1>
    <h2 id="fundamentals">Fundamentals</h2>
    <p><strong>Clarity at the point of use</strong> is your most important goal.</p>
    <h2 id="naming">Naming</h2>
    <h3>Promote Clear Usage</h3>
    <p>Include all the words needed to avoid ambiguity.</p>
    <pre><code>employees.remove(at: x)</code></pre>
    <p>Use descriptive names &amp; avoid &quot;needless&quot; words.</p>
    <h2 id="conventions">Conventions</h2>
    <p>Prefer methods and properties to free functions &lt;when possible&gt;.</p>
  </main>
  <footer>Copyright &#39;Apple&#39;</footer>
</body>
</html>
"#;

/// A page with no `<main>`, only a body
pub const BODY_ONLY_HTML: &str = "<html><head><title>T</title></head>\
<body><h1>Body Title</h1>\n<p>Body   paragraph</p></body></html>";

/// A plain-text document of `count` numbered lines following a heading
pub fn numbered_lines(heading: &str, count: usize) -> String {
    let mut text = String::from(heading);
    for i in 1..=count {
        text.push('\n');
        text.push_str(&format!("line {}", i));
    }
    text
}
