use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::infrastructure::assets::placeholder::create_placeholder_svg;

const PLACEHOLDER_LABEL: &str = "Professional Image";

/// Upper bound on placeholder dimensions; rejects absurd render requests.
const MAX_DIMENSION: u32 = 4000;

/// Generate a static asset handler that serves an embedded file with cache
/// headers.
macro_rules! static_asset_str {
    ($name:ident, $path:literal, $content_type:literal) => {
        pub(crate) async fn $name() -> impl IntoResponse {
            (
                [
                    ("content-type", $content_type),
                    ("cache-control", "public, max-age=604800"),
                ],
                include_str!($path),
            )
        }
    };
}

static_asset_str!(
    styles,
    "../../../static/css/styles.css",
    "text/css; charset=utf-8"
);
static_asset_str!(favicon, "../../../static/favicon.svg", "image/svg+xml");

/// Serve `placeholder-{width}x{height}.svg` references rendered on demand.
pub(crate) async fn placeholder_image(
    Path(name): Path<String>,
) -> Result<impl IntoResponse, StatusCode> {
    let (width, height) = parse_placeholder_name(&name).ok_or(StatusCode::NOT_FOUND)?;

    Ok((
        [
            ("content-type", "image/svg+xml"),
            ("cache-control", "public, max-age=604800"),
        ],
        create_placeholder_svg(width, height, PLACEHOLDER_LABEL),
    ))
}

/// Parse the dimensions out of a `placeholder-{w}x{h}.svg` file name.
fn parse_placeholder_name(name: &str) -> Option<(u32, u32)> {
    let dims = name.strip_prefix("placeholder-")?.strip_suffix(".svg")?;
    let (width, height) = dims.split_once('x')?;
    let width: u32 = width.parse().ok()?;
    let height: u32 = height.parse().ok()?;

    if width == 0 || height == 0 || width > MAX_DIMENSION || height > MAX_DIMENSION {
        return None;
    }

    Some((width, height))
}
