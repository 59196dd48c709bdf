use crate::models::{Annotation, PanelContent, ViewColumn};
use crate::tree::group_by_file;

pub const VIEW_TYPE: &str = "annotationsPanel";

pub fn render(annotations: &[Annotation]) -> PanelContent {
    let mut html = String::from("<h1>Annotations</h1>");
    for group in group_by_file(annotations) {
        html.push_str(&format!("<h2>{}</h2>", escape_html(&group.file_path)));
        for record in &group.annotations {
            html.push_str(&format!(
                "<p>Line {}: {}</p>",
                record.line_number,
                escape_html(&record.annotation)
            ));
        }
    }

    PanelContent {
        view_type: VIEW_TYPE.to_string(),
        title: "Annotations".to_string(),
        column: ViewColumn::Two,
        html,
    }
}

fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
