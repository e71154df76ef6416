use crate::translate::TargetLanguage;

/// What the page shows below the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageState {
    Idle,
    /// Input problem; nothing was sent to the model.
    Warning(String),
    Translated {
        target: TargetLanguage,
        text: String,
    },
    /// The model call failed; the user can submit again.
    Failed(String),
}

/// Values echoed back into the form after a submission.
#[derive(Debug, Clone, Default)]
pub struct FormValues {
    pub text: String,
    pub target_lang: TargetLanguage,
}

const STYLE: &str = r#"
body { background: #eef1f5; font-family: system-ui, sans-serif; margin: 0; }
.main { max-width: 720px; margin: 3rem auto; background: #f5f7fa; padding: 2rem 3rem;
        border-radius: 12px; box-shadow: 0 8px 16px rgba(0,0,0,0.1); }
.title { color: #2c3e50; font-weight: 700; margin-bottom: 1rem; }
label { display: block; font-weight: 600; margin: 1rem 0 0.4rem; }
select, textarea { width: 100%; box-sizing: border-box; font-size: 1rem; border-radius: 8px;
                   border: 1.5px solid #ddd; padding: 0.6rem; }
textarea { height: 180px; padding: 1rem; }
textarea:focus { border-color: #4caf50; outline: none; }
button { margin-top: 1rem; background: #4caf50; color: white; font-weight: 600; border: 0;
         padding: 0.5rem 1.5rem; border-radius: 8px; cursor: pointer; }
button:hover { background: #45a049; }
.banner { margin-top: 1.2rem; padding: 0.8rem 1rem; border-radius: 8px; }
.warning { background: #fff8e1; color: #8a6d00; }
.success { background: #e8f5e9; color: #2e7d32; }
.error { background: #fdecea; color: #b71c1c; }
.result { white-space: pre-wrap; }
"#;

pub fn render(state: &PageState, form: &FormValues) -> String {
    let mut options = String::new();
    for lang in TargetLanguage::ALL {
        let selected = if lang == form.target_lang { " selected" } else { "" };
        options.push_str(&format!(
            "<option value=\"{label}\"{selected}>{label}</option>",
            label = lang.label(),
            selected = selected
        ));
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>🌍 Gemini Translator</title>
<style>{style}</style>
</head>
<body>
<div class="main">
<h1 class="title">🌍 AI Translator Agent</h1>
<form method="post" action="/translate" onsubmit="var b = this.querySelector('button'); b.disabled = true; b.textContent = '⏳ Translating...';">
<label for="target_lang">Translate to:</label>
<select id="target_lang" name="target_lang" title="Select the language you want to translate to.">{options}</select>
<label for="text">Enter text to translate</label>
<textarea id="text" name="text" placeholder="Type or paste text here...">
{text}</textarea>
<button type="submit">Translate</button>
</form>
{outcome}
</div>
</body>
</html>
"#,
        style = STYLE,
        options = options,
        text = escape_html(&form.text),
        outcome = render_outcome(state),
    )
}

fn render_outcome(state: &PageState) -> String {
    match state {
        PageState::Idle => String::new(),
        PageState::Warning(message) => format!(
            "<div class=\"banner warning\">⚠️ {}</div>",
            escape_html(message)
        ),
        PageState::Translated { target, text } => format!(
            "<div class=\"banner success\">✅ Translation completed!</div>\n\
             <h3>Translated text in {}:</h3>\n<p class=\"result\">{}</p>",
            target,
            escape_html(text)
        ),
        PageState::Failed(message) => format!(
            "<div class=\"banner error\">❌ Translation failed: {}. Please try again.</div>",
            escape_html(message)
        ),
    }
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
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
