/// Path-like reference to the locally served placeholder graphic for the
/// given dimensions. Always available; used when every provider fails.
pub fn placeholder_ref(width: u32, height: u32) -> String {
    format!("/static/images/placeholder-{width}x{height}.svg")
}

/// Render placeholder SVG markup: a bordered box with a centered label.
pub fn create_placeholder_svg(width: u32, height: u32, text: &str) -> String {
    format!(
        r##"<svg width="{width}" height="{height}" xmlns="http://www.w3.org/2000/svg">
  <rect width="100%" height="100%" fill="#f8f9fa"/>
  <rect x="2" y="2" width="{inner_width}" height="{inner_height}" fill="none" stroke="#dee2e6" stroke-width="2"/>
  <text x="50%" y="50%" font-family="Arial, sans-serif" font-size="16" fill="#6c757d" text-anchor="middle" dy=".3em">{text}</text>
</svg>"##,
        inner_width = width.saturating_sub(4),
        inner_height = height.saturating_sub(4),
    )
}
