//! Render a derived board as an SVG document.

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Args;
use tracing::debug;
use vastu::marma::resolve_line;
use vastu::{cast_rays, Catalogs, DerivedState, Line, MarmaPoint, Point, Polygon, RayConfig, Ray, TaggedPoint};

use super::board_file::BoardFile;
use super::common::{media_type, write_output, xml_escape, BoardArgs};
use super::style::{Layer, Layers, Style};

#[derive(Debug, Args)]
pub struct RenderArgs {
    #[command(flatten)]
    pub board: BoardArgs,

    /// Output SVG file (stdout when omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Layers to leave out of the drawing
    #[arg(long, value_enum, value_delimiter = ',')]
    pub hide: Vec<Layer>,

    /// Draw the long display rays instead of the clipped derivation rays
    #[arg(long)]
    pub long_rays: bool,
}

/// What to draw on top of a derived state.
pub struct RenderOptions<'a> {
    pub style: &'a Style,
    pub layers: Layers,
    pub canvas_size: f64,
    pub long_rays: bool,
    /// Raster image drawn beneath everything else.
    pub background: Option<PathBuf>,
}

impl<'a> RenderOptions<'a> {
    pub fn for_board(file: &'a BoardFile, board_path: Option<&Path>, hide: &[Layer], long_rays: bool) -> Self {
        let mut layers = file.style.layers.clone();
        layers.hide(hide);
        Self {
            style: &file.style,
            layers,
            canvas_size: file.rays.canvas_size,
            long_rays,
            background: file.background_path(board_path),
        }
    }
}

const POLYGON_STROKE: &str = "#333";
const DIRECTION_FILL: &str = "#d62728";
const INNER_FILL: &str = "#2ca02c";
const OUTER_INNER_FILL: &str = "#9467bd";
const MIDPOINT_FILL: &str = "#ff7f0e";
const ZONE_STROKE: &str = "#8c564b";

pub fn render_svg(polygon: &Polygon, state: &DerivedState, catalogs: &Catalogs, options: &RenderOptions) -> String {
    let size = options.canvas_size;
    let mut svg = String::new();
    svg.push_str(&format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink" width="{size}" height="{size}" viewBox="0 0 {size} {size}">
<rect width="{size}" height="{size}" fill="white"/>
"#
    ));

    if let Some(background) = &options.background {
        match media_type(background) {
            Some("image/png") | Some("image/jpeg") => {
                let href = xml_escape(&background.to_string_lossy());
                svg.push_str(&format!(
                    "<image xlink:href=\"{href}\" x=\"0\" y=\"0\" width=\"{size}\" height=\"{size}\" preserveAspectRatio=\"xMidYMid meet\" opacity=\"0.5\"/>\n"
                ));
            }
            other => debug!(?other, path = %background.display(), "background not drawable, skipped"),
        }
    }

    let layers = &options.layers;

    if layers.zones {
        svg.push_str("<g id=\"zones\" fill-opacity=\"0.08\" stroke=\"");
        svg.push_str(ZONE_STROKE);
        svg.push_str("\" stroke-width=\"0.5\">\n");
        for zone in &state.zones {
            let caption = xml_escape(&zone.caption());
            svg.push_str(&format!(
                "  <polygon points=\"{}\" fill=\"{}\"><title>{}</title></polygon>\n",
                points_attr(&zone.corners),
                zone_fill(zone.id),
                caption
            ));
        }
        svg.push_str("</g>\n<g id=\"zone-labels\" font-family=\"sans-serif\" font-size=\"7\" text-anchor=\"middle\" fill=\"#333\">\n");
        for zone in &state.zones {
            let anchor = zone.anchor();
            svg.push_str(&format!(
                "  <text x=\"{:.2}\" y=\"{:.2}\">{}</text>\n",
                anchor.x,
                anchor.y,
                xml_escape(&zone.caption())
            ));
        }
        svg.push_str("</g>\n");
    }

    if layers.rays {
        let rays: Vec<Ray> = if options.long_rays {
            cast_rays(state.centroid, state.rotation, &RayConfig::display())
        } else {
            state.rays.clone()
        };
        svg.push_str("<g id=\"rays\" fill=\"none\">\n");
        for ray in &rays {
            let set = options.style.line_set(ray.index);
            svg.push_str(&format!(
                "  <line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" {}/>\n",
                ray.origin.x,
                ray.origin.y,
                ray.end.x,
                ray.end.y,
                set.attributes()
            ));
        }
        svg.push_str("</g>\n");
    }

    if layers.polygon {
        svg.push_str(&format!(
            "<polygon id=\"outline\" points=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"1.5\"/>\n",
            points_attr(polygon.vertices()),
            POLYGON_STROKE
        ));
    }

    if layers.marma_lines {
        let lines: Vec<Line> = catalogs
            .primary_lines
            .iter()
            .chain(catalogs.mirrored_lines)
            .filter_map(|&pair| resolve_line(pair, &state.directions))
            .map(|(a, b)| Line::from_points(a, b))
            .collect();
        push_lines(&mut svg, "marma-lines", "stroke=\"#999\" stroke-width=\"0.4\"", &lines);
    }

    if layers.spokes {
        push_lines(&mut svg, "spokes", "stroke=\"#17becf\" stroke-width=\"0.5\"", &state.spokes);
        push_lines(
            &mut svg,
            "midpoint-links",
            "stroke=\"#17becf\" stroke-width=\"0.5\" stroke-dasharray=\"2,2\"",
            &state.midpoint_links,
        );
    }

    if layers.marma_points {
        push_marma(&mut svg, "marma-primary", "#e377c2", &state.marma.primary);
        push_marma(&mut svg, "marma-mirrored", "#1f77b4", &state.marma.mirrored);
        push_marma(&mut svg, "marma-core", "#2ca02c", &state.marma.core);
    }

    if layers.inner {
        push_tagged(&mut svg, "inner-points", INNER_FILL, &state.points.inner);
    }
    if layers.outer_inner {
        push_tagged(&mut svg, "outer-inner-points", OUTER_INNER_FILL, &state.points.outer_inner);
    }
    if layers.midpoints {
        push_tagged(&mut svg, "midpoints", MIDPOINT_FILL, &state.points.midpoints);
    }

    if layers.directions {
        svg.push_str(&format!(
            "<g id=\"directions\" fill=\"{DIRECTION_FILL}\" font-family=\"sans-serif\" font-size=\"9\">\n"
        ));
        for dp in state.directions.iter() {
            // Labels sit just outside the polygon, away from the centroid.
            let away = label_offset(state.centroid, dp.point, 10.0);
            svg.push_str(&format!(
                "  <circle cx=\"{:.2}\" cy=\"{:.2}\" r=\"3\"/><text x=\"{:.2}\" y=\"{:.2}\" text-anchor=\"middle\">{}</text>\n",
                dp.point.x, dp.point.y, away.x, away.y, dp.label
            ));
        }
        svg.push_str("</g>\n");
    }

    svg.push_str(&format!(
        "<circle id=\"centroid\" cx=\"{:.2}\" cy=\"{:.2}\" r=\"4\" fill=\"black\"/>\n",
        state.centroid.x, state.centroid.y
    ));

    svg.push_str("</svg>\n");
    svg
}

fn points_attr(points: &[Point]) -> String {
    points
        .iter()
        .map(|p| format!("{:.2},{:.2}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ")
}

fn push_lines(svg: &mut String, id: &str, attrs: &str, lines: &[Line]) {
    svg.push_str(&format!("<g id=\"{id}\" fill=\"none\" {attrs}>\n"));
    for line in lines {
        svg.push_str(&format!(
            "  <line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\"/>\n",
            line.x1, line.y1, line.x2, line.y2
        ));
    }
    svg.push_str("</g>\n");
}

fn push_tagged(svg: &mut String, id: &str, fill: &str, points: &[TaggedPoint]) {
    svg.push_str(&format!(
        "<g id=\"{id}\" fill=\"{fill}\" font-family=\"sans-serif\" font-size=\"6\">\n"
    ));
    for tp in points {
        svg.push_str(&format!(
            "  <circle cx=\"{:.2}\" cy=\"{:.2}\" r=\"2\"/><text x=\"{:.2}\" y=\"{:.2}\">{}</text>\n",
            tp.point.x,
            tp.point.y,
            tp.point.x + 3.0,
            tp.point.y - 3.0,
            tp.tag
        ));
    }
    svg.push_str("</g>\n");
}

fn push_marma(svg: &mut String, id: &str, fill: &str, points: &[MarmaPoint]) {
    svg.push_str(&format!("<g id=\"{id}\" fill=\"{fill}\">\n"));
    for m in points {
        svg.push_str(&format!(
            "  <circle cx=\"{:.2}\" cy=\"{:.2}\" r=\"1.5\"><title>{}</title></circle>\n",
            m.point.x, m.point.y, m.number
        ));
    }
    svg.push_str("</g>\n");
}

fn label_offset(centroid: Point, p: Point, distance: f64) -> Point {
    let len = p.distance(centroid);
    if len == 0.0 {
        return p;
    }
    Point::new(
        p.x + (p.x - centroid.x) / len * distance,
        p.y + (p.y - centroid.y) / len * distance + 3.0,
    )
}

/// Cycle a small palette by zone id.
fn zone_fill(id: usize) -> &'static str {
    const PALETTE: [&str; 6] = ["#e6ab02", "#66a61e", "#7570b3", "#e7298a", "#1b9e77", "#d95f02"];
    PALETTE[id % PALETTE.len()]
}

pub fn cmd_render(args: &RenderArgs) -> Result<()> {
    let loaded = args.board.load()?;
    let state = loaded.derive();
    let options = RenderOptions::for_board(&loaded.file, loaded.path.as_deref(), &args.hide, args.long_rays);
    let svg = render_svg(loaded.board.polygon(), &state, &Catalogs::standard(), &options);
    debug!(zones = state.zones.len(), bytes = svg.len(), "rendered board");
    write_output(args.output.as_deref(), &svg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use vastu::Board;

    fn default_svg(hide: &[Layer]) -> String {
        let file = BoardFile::default();
        let board = Board::default();
        let state = board.derive(&file.rays, &Catalogs::standard());
        let options = RenderOptions::for_board(&file, None, hide, false);
        render_svg(board.polygon(), &state, &Catalogs::standard(), &options)
    }

    fn section<'a>(svg: &'a str, id: &str) -> &'a str {
        let open = format!("<g id=\"{id}\"");
        svg.split(open.as_str()).nth(1).unwrap().split("</g>").next().unwrap()
    }

    #[test]
    fn renders_every_layer_by_default() {
        let svg = default_svg(&[]);
        assert!(svg.starts_with("<?xml"));
        assert!(svg.trim_end().ends_with("</svg>"));
        for id in ["zones", "rays", "outline", "marma-lines", "spokes", "marma-core", "inner-points", "midpoints", "directions"] {
            assert!(svg.contains(&format!("id=\"{id}\"")), "missing layer {id}");
        }
        assert!(svg.contains("<title>1 Brahma</title>"));
        assert_eq!(section(&svg, "marma-core").matches("<circle").count(), 9);
        assert_eq!(section(&svg, "marma-primary").matches("<circle").count(), 41);
        assert_eq!(section(&svg, "midpoints").matches("<circle").count(), 20);
    }

    #[test]
    fn hidden_layers_are_skipped() {
        let svg = default_svg(&[Layer::Rays, Layer::Zones]);
        assert!(!svg.contains("id=\"rays\""));
        assert!(!svg.contains("Brahma"));
        assert!(svg.contains("id=\"outline\""));
    }

    #[test]
    fn rays_use_cycled_line_sets() {
        let svg = default_svg(&[]);
        let rays = section(&svg, "rays");
        assert_eq!(rays.matches("<line").count(), 32);
        assert_eq!(rays.matches("stroke-dasharray=\"5,5\"").count(), 16);
        assert_eq!(rays.matches("stroke=\"#0066cc\"").count(), 16);
    }

    #[test]
    fn quoted_stroke_still_rasterizes() {
        let mut file = BoardFile::default();
        file.style.line_sets[0].stroke = "a\"b".to_string();
        let board = Board::default();
        let state = board.derive(&file.rays, &Catalogs::standard());
        let options = RenderOptions::for_board(&file, None, &[], false);
        let svg = render_svg(board.polygon(), &state, &Catalogs::standard(), &options);
        assert!(crate::cli::export::rasterize(&svg, options.canvas_size, 0.25).is_ok());
    }

    #[test]
    fn pdf_background_is_not_embedded() {
        let file = BoardFile { background: Some(PathBuf::from("plan.pdf")), ..BoardFile::default() };
        let board = Board::default();
        let state = board.derive(&file.rays, &Catalogs::standard());
        let options = RenderOptions::for_board(&file, None, &[], false);
        let svg = render_svg(board.polygon(), &state, &Catalogs::standard(), &options);
        assert!(!svg.contains("<image"));
    }

    #[test]
    fn png_background_is_embedded() {
        let file = BoardFile { background: Some(PathBuf::from("plan.png")), ..BoardFile::default() };
        let board = Board::default();
        let state = board.derive(&file.rays, &Catalogs::standard());
        let options = RenderOptions::for_board(&file, None, &[], false);
        let svg = render_svg(board.polygon(), &state, &Catalogs::standard(), &options);
        assert!(svg.contains("<image xlink:href=\"plan.png\""));
    }
}
