use palette_layers::VectorDocument;

/// Serialize a vector layer as an SVG 1.1 document.
///
/// The document is the size of the source image, and every mark becomes a
/// `<circle>` centered on its pixel coordinate. Marks keep the row-major
/// order of the layer.
pub fn render_svg(doc: &VectorDocument) -> String {
    let fill = doc.fill;
    let radius = doc.radius;

    // ~50 bytes per circle
    let mut svg = String::with_capacity(256 + doc.marks.len() * 50);
    svg.push_str("<?xml version=\"1.0\" encoding=\"utf-8\" ?>\n");
    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" baseProfile="full" version="1.1" width="{}" height="{}">"#,
        doc.width, doc.height
    ));
    svg.push('\n');
    for mark in &doc.marks {
        svg.push_str(&format!(
            r#"<circle cx="{}" cy="{}" r="{radius}" fill="{fill}"/>"#,
            mark.x, mark.y
        ));
        svg.push('\n');
    }
    svg.push_str("</svg>\n");
    svg
}
