//! Standalone HTML pages that hand a figure to plotly.js.

use crate::error::ChartError;
use crate::figure::Figure;
use crate::locale::Locale;
use crate::options::ChartOptions;
use crate::scene::Scene;

const CHART_ID: &str = "hr-diagram";

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            c => escaped.push(c),
        }
    }
    escaped
}

/// JSON safe to inline inside a `<script>` element
fn script_json(figure: &Figure) -> Result<String, ChartError> {
    Ok(figure.to_json()?.replace("</", "<\\/"))
}

struct Page<'a> {
    title: &'a str,
    locale: Locale,
    header: String,
    footer: String,
}

fn page(
    page: Page<'_>,
    figure: &Figure,
    options: &ChartOptions,
) -> Result<String, ChartError> {
    let json = script_json(figure)?;
    Ok(format!(
        r#"<!DOCTYPE html>
<html lang="{lang}">
<head>
<meta charset="utf-8">
<title>{title}</title>
<script src="{plotly}"></script>
</head>
<body>
{header}<div id="{id}"></div>
{footer}<script>
const figure = {json};
Plotly.newPlot("{id}", figure.data, figure.layout).then(function () {{
  return Plotly.addFrames("{id}", figure.frames);
}});
</script>
</body>
</html>
"#,
        lang = page.locale,
        title = escape_html(page.title),
        plotly = escape_html(&options.plotly_src),
        header = page.header,
        footer = page.footer,
        id = CHART_ID,
        json = json,
    ))
}

/// Wrap a figure in a page that loads plotly.js and plays its frames.
pub fn render_html(figure: &Figure, options: &ChartOptions) -> Result<String, ChartError> {
    let parts = Page {
        title: options.locale.labels().chart_title,
        locale: options.locale,
        header: String::new(),
        footer: String::new(),
    };
    page(parts, figure, options)
}

/// Full page for a scene: heading, mass line, chart, then the explanation.
pub fn render_scene_html(scene: &Scene, options: &ChartOptions) -> Result<String, ChartError> {
    let labels = scene.locale.labels();

    let header = format!(
        "<h1>{}</h1>\n<p>{}</p>\n",
        escape_html(labels.app_title),
        escape_html(scene.mass_line())
    );

    let mut footer = format!("<h3>{}</h3>\n<ul>\n", escape_html(labels.explanation_heading));
    for line in labels.explanation {
        footer.push_str(&format!("<li>{}</li>\n", escape_html(line)));
    }
    footer.push_str("</ul>\n");

    let parts = Page {
        title: labels.app_title,
        locale: scene.locale,
        header,
        footer,
    };
    page(parts, &scene.figure, options)
}
