//! Landing page module
//!
//! Fixed HTML page listing the install commands. Only the base URL and the
//! script route prefix are filled in, once, at startup.

/// Tools with a `setup-{slug}.sh` script: (display name, slug, description)
pub const TOOLS: &[(&str, &str, &str)] = &[
    (
        "GitHub Copilot",
        "github-copilot",
        "VS Code with GitHub Copilot integration",
    ),
    ("KiloCode", "kilocode", "Advanced AI coding assistant"),
    ("Cursor", "cursor", "The AI-first code editor"),
    ("Claude Code", "claude-code", "Claude for code generation"),
];

/// Feature grid entries: (title, blurb)
const FEATURES: &[(&str, &str)] = &[
    ("Multi-Language Support", "Python, TypeScript, Ruby, and more"),
    ("AI Tool Integration", "Works with leading AI assistants"),
    ("Best Practices", "Built-in coding standards and patterns"),
    ("Plugin System", "Extensible architecture"),
];

/// Documentation links: (label, href)
const DOC_LINKS: &[(&str, &str)] = &[
    ("Getting Started", "https://buildermethods.com/#start"),
    ("GitHub", "https://github.com/buildermethods/agent-os"),
];

const PAGE_HEAD: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>Agent OS - Test Environment</title>
    <style>
        body {
            font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, "Helvetica Neue", Arial, sans-serif;
            line-height: 1.6;
            background: #f9fafb;
            color: #111827;
            margin: 0;
        }
        .container { max-width: 960px; margin: 0 auto; padding: 32px; }
        h1 { font-size: 3em; margin-bottom: 0; }
        .subtitle { font-size: 1.5em; color: #4b5563; margin-top: 0; }
        .card {
            background: white;
            border-radius: 8px;
            box-shadow: 0 1px 3px rgba(0, 0, 0, 0.1);
            padding: 24px;
            margin-bottom: 24px;
        }
        .tools { display: grid; grid-template-columns: repeat(auto-fit, minmax(380px, 1fr)); gap: 16px; }
        .tool { background: #f9fafb; border-radius: 8px; padding: 16px; }
        .tool p { color: #4b5563; }
        .features { display: grid; grid-template-columns: repeat(auto-fit, minmax(200px, 1fr)); gap: 16px; margin-bottom: 24px; }
        .feature { text-align: center; }
        .docs a { color: #2563eb; margin-right: 16px; }
        pre { background: #f3f4f6; border-radius: 4px; padding: 12px; overflow-x: auto; margin: 0; }
        footer { color: #6b7280; text-align: center; border-top: 1px solid #e5e7eb; padding-top: 16px; }
    </style>
</head>
<body>
<div class="container">
    <h1>Agent OS</h1>
    <p class="subtitle">AI-Powered Development Environment</p>
    <div class="card">
        <h3>Transform your development workflow with AI assistance</h3>
        <p>Agent OS provides a comprehensive framework for AI-assisted software development,
        with support for multiple AI tools and development environments.
        This copy is served locally for testing the installation scripts.</p>
    </div>
"#;

const PAGE_FOOT: &str = r"    <footer>Served locally. Scripts come from the working tree, not the live site.</footer>
</div>
</body>
</html>
";

/// Render the landing page for scripts served at `{base_url}{api_prefix}`
pub fn render(base_url: &str, api_prefix: &str) -> String {
    let api = format!("{}{api_prefix}", base_url.trim_end_matches('/'));
    let mut html = String::from(PAGE_HEAD);

    html.push_str(&format!(
        r#"    <h2>Installation</h2>
    <div class="card">
        <h3>Step 1: Install Agent OS Base</h3>
        <p>Install the core Agent OS files to your home directory (~/.agent-os).</p>
        <pre><code>curl -sSL {api}/setup.sh | bash</code></pre>
    </div>
    <div class="card">
        <h3>Step 2: Install Your Preferred AI Tool</h3>
        <p>Each tool has its own script, served as <code>{api}/setup-{{tool}}.sh</code>.</p>
        <div class="tools">
"#
    ));

    for (name, slug, description) in TOOLS {
        html.push_str(&format!(
            r#"            <div class="tool">
                <h4>{name}</h4>
                <p>{description}</p>
                <pre><code>curl -sSL {api}/setup-{slug}.sh | bash</code></pre>
            </div>
"#
        ));
    }

    html.push_str(&format!(
        r#"        </div>
    </div>
    <div class="card">
        <h3>Repository Files</h3>
        <p>Any other file of the local repository is served as plain text from <code>{api}/{{path}}</code>.</p>
        <pre><code>curl -sSL {api}/README.md</code></pre>
    </div>
"#
    ));

    html.push_str("    <h2>Features</h2>\n    <div class=\"features\">\n");
    for (title, blurb) in FEATURES {
        html.push_str(&format!(
            r#"        <div class="card feature">
            <h4>{title}</h4>
            <p>{blurb}</p>
        </div>
"#
        ));
    }
    html.push_str("    </div>\n    <h2>Documentation</h2>\n    <p class=\"docs\">\n");
    for (label, href) in DOC_LINKS {
        html.push_str(&format!("        <a href=\"{href}\">{label}</a>\n"));
    }
    html.push_str("    </p>\n");

    html.push_str(PAGE_FOOT);
    html
}
