//! Blueprint SVG rendering.

use crate::models::BlueprintSummary;

/// Render the analysis summary as a standalone SVG document.
pub fn render_blueprint(summary: &BlueprintSummary) -> String {
    let title = match &summary.project_name {
        Some(name) => format!("{} Blueprint", xml_escape(name)),
        None => "Generated Blueprint".to_string(),
    };

    format!(
        r#"<svg width="800" height="600" xmlns="http://www.w3.org/2000/svg">
  <rect width="100%" height="100%" fill="lightgrey" />
  <text x="50" y="50" font-family="Arial" font-size="20" fill="black">{title}</text>
  <text x="50" y="80" font-family="Arial" font-size="16" fill="black">Gross Living Area: {gross:.2} sq ft</text>
  <text x="50" y="110" font-family="Arial" font-size="16" fill="black">Net Square Footage: {net:.2} sq ft</text>
  <text x="50" y="140" font-family="Arial" font-size="16" fill="black">Linear Railing Footage: {railing:.2} ft</text>
  <text x="50" y="170" font-family="Arial" font-size="16" fill="black">Stair Cutouts: {stairs}</text>
</svg>"#,
        title = title,
        gross = summary.gross_living_area,
        net = summary.net_square_footage,
        railing = summary.linear_railing_footage,
        stairs = summary.stair_cutouts,
    )
}

fn xml_escape(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
