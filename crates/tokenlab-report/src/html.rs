use anyhow::Result;
use tokenlab_core::*;

/// Chunk background palette, mirrored from the terminal view.
const CHUNK_CSS_COLORS: [&str; 5] = [
    "#d3c6f3", "#c3f2ca", "#fbdeaf", "#f9b3b5", "#a9e1f7",
];

pub fn render_tokenization(report: &TokenizationReport) -> Result<String> {
    let chunks_html = render_chunks(&report.fragments);
    let ids_html = render_chunks(
        &report
            .token_ids
            .iter()
            .map(|t| t.to_string())
            .collect::<Vec<String>>(),
    );
    let costs_html = render_costs(report.encoding, report.token_count as u64);
    let models_priced = lookup(report.encoding).len();

    Ok(format!(r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>tokenlab — {encoding}</title>
<style>
  :root {{
    --bg: #0f1117; --surface: #1a1d27; --border: #2a2d3a;
    --text: #e2e8f0; --muted: #64748b; --accent: #7c6af7;
    --green: #4ade80; --yellow: #facc15; --cyan: #22d3ee;
    font-family: 'Berkeley Mono', 'JetBrains Mono', 'Fira Code', monospace;
  }}
  * {{ box-sizing: border-box; margin: 0; padding: 0; }}
  body {{ background: var(--bg); color: var(--text); min-height: 100vh; }}
  .header {{ background: var(--surface); border-bottom: 1px solid var(--border);
    padding: 1.5rem 2rem; display: flex; align-items: center; gap: 1rem; }}
  .header h1 {{ font-size: 1.25rem; font-weight: 700; color: var(--accent); }}
  .header .encoding-badge {{ background: var(--border); padding: 0.2rem 0.6rem;
    border-radius: 4px; font-size: 0.75rem; color: var(--cyan); }}
  .container {{ max-width: 1100px; margin: 0 auto; padding: 2rem; }}
  .kpi-grid {{ display: grid; grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
    gap: 1rem; margin-bottom: 2rem; }}
  .kpi {{ background: var(--surface); border: 1px solid var(--border);
    border-radius: 8px; padding: 1.25rem; }}
  .kpi .label {{ font-size: 0.7rem; text-transform: uppercase; letter-spacing: 0.1em;
    color: var(--muted); margin-bottom: 0.4rem; }}
  .kpi .value {{ font-size: 1.5rem; font-weight: 700; }}
  .kpi .value.green {{ color: var(--green); }}
  .kpi .value.cyan {{ color: var(--cyan); }}
  .section {{ background: var(--surface); border: 1px solid var(--border);
    border-radius: 8px; margin-bottom: 1.5rem; overflow: hidden; }}
  .section-header {{ padding: 0.875rem 1.25rem; border-bottom: 1px solid var(--border);
    font-size: 0.8rem; font-weight: 600; text-transform: uppercase;
    letter-spacing: 0.08em; color: var(--muted); }}
  .chunks {{ padding: 1.25rem; line-height: 1.7; word-break: break-all; }}
  .chunk {{ color: #111; border-radius: 3px; display: inline-block; height: 1.5em; }}
  table {{ width: 100%; border-collapse: collapse; }}
  th, td {{ padding: 0.6rem 1.25rem; text-align: left; border-bottom: 1px solid var(--border);
    font-size: 0.85rem; }}
  th {{ font-size: 0.7rem; text-transform: uppercase; letter-spacing: 0.08em;
    color: var(--muted); }}
  td.cost {{ color: var(--green); text-align: right; }}
  tr:last-child td {{ border-bottom: none; }}
  tr:hover td {{ background: rgba(124,106,247,0.06); }}
  .empty {{ padding: 1.25rem; color: var(--muted); font-size: 0.9rem; }}
  footer {{ text-align: center; padding: 2rem; color: var(--muted); font-size: 0.75rem; }}
</style>
</head>
<body>
<div class="header">
  <h1>tokenlab</h1>
  <span class="encoding-badge">{encoding}</span>
</div>
<div class="container">

  <!-- KPIs -->
  <div class="kpi-grid">
    <div class="kpi"><div class="label">Characters</div><div class="value">{characters}</div></div>
    <div class="kpi"><div class="label">Tokens</div><div class="value cyan">{token_count}</div></div>
    <div class="kpi"><div class="label">Priced Models</div><div class="value green">{models_priced}</div></div>
  </div>

  <!-- Tokenized text -->
  <div class="section">
    <div class="section-header">Tokenized Text</div>
    <div class="chunks">{chunks_html}</div>
  </div>

  <!-- Token ids -->
  <div class="section">
    <div class="section-header">Token IDs</div>
    <div class="chunks">{ids_html}</div>
  </div>

  <!-- Cost projection -->
  <div class="section">
    <div class="section-header">Projected Cost</div>
    {costs_html}
  </div>

</div>
<footer>Generated by tokenlab</footer>
</body>
</html>"#,
        encoding = report.encoding,
        characters = group_thousands(report.characters as i64),
        token_count = group_thousands(report.token_count as i64),
        models_priced = models_priced,
        chunks_html = chunks_html,
        ids_html = ids_html,
        costs_html = costs_html,
    ))
}

fn render_chunks(chunks: &[String]) -> String {
    if chunks.is_empty() {
        return r#"<span style="color:var(--muted)">(empty input)</span>"#.to_string();
    }

    chunks
        .iter()
        .enumerate()
        .map(|(i, chunk)| {
            let color = CHUNK_CSS_COLORS[i % CHUNK_CSS_COLORS.len()];
            format!(
                r#"<span class="chunk" style="background:{}">{}</span>"#,
                color,
                visible_html(chunk)
            )
        })
        .collect()
}

fn render_costs(encoding: Encoding, token_count: u64) -> String {
    let models = lookup(encoding);
    if models.is_empty() {
        return format!(
            r#"<div class="empty">No priced models use {}.</div>"#,
            encoding
        );
    }

    let rows = models
        .iter()
        .flat_map(|entry| project(token_count, entry))
        .map(|line| {
            format!(
                r#"<tr><td>{}</td><td class="cost">{}</td></tr>"#,
                html_escape(&line.label),
                html_escape(&line.value),
            )
        })
        .collect::<String>();

    format!(
        r#"<table>
          <thead><tr><th>Price Point</th><th style="text-align:right">Cost</th></tr></thead>
          <tbody>{}</tbody>
        </table>"#,
        rows
    )
}

/// Escape, then make whitespace visible the same way the terminal view does.
fn visible_html(fragment: &str) -> String {
    html_escape(fragment)
        .replace(' ', "&nbsp;")
        .replace('\n', "&lt;newline&gt;")
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markup_in_fragments_is_escaped() {
        let rendered = visible_html("<script>  ");
        assert_eq!(rendered, "&lt;script&gt;&nbsp;&nbsp;");
    }

    #[test]
    fn page_renders_for_an_empty_family() {
        let report = TokenizationReport {
            encoding: Encoding::P50kEdit,
            characters: 2,
            token_count: 1,
            token_ids: vec![71],
            fragments: vec!["hi".to_string()],
        };
        let page = render_tokenization(&report).unwrap();
        assert!(page.contains("No priced models use p50k_edit."));
    }
}
