//! Rasterize a rendered board to PNG or JPEG.

use std::path::{Path, PathBuf};

use anyhow::{anyhow, bail, Context, Result};
use clap::Args;
use image::{DynamicImage, ImageFormat, RgbaImage};
use resvg::usvg;
use tiny_skia::Pixmap;
use tracing::{debug, info};
use vastu::Catalogs;

use super::common::BoardArgs;
use super::render::{render_svg, RenderOptions};
use super::style::Layer;

#[derive(Debug, Args)]
pub struct ExportArgs {
    #[command(flatten)]
    pub board: BoardArgs,

    /// Output image; the extension picks PNG or JPEG
    #[arg(short, long)]
    pub output: PathBuf,

    /// Pixels per canvas unit
    #[arg(short, long, default_value_t = 2.0)]
    pub scale: f64,

    /// Layers to leave out of the image
    #[arg(long, value_enum, value_delimiter = ',')]
    pub hide: Vec<Layer>,

    /// Draw the long display rays instead of the clipped derivation rays
    #[arg(long)]
    pub long_rays: bool,
}

/// Rasterize a square SVG document at `scale` onto a white background.
pub fn rasterize(svg_content: &str, size: f64, scale: f64) -> Result<RgbaImage> {
    if !(scale.is_finite() && scale > 0.0) {
        bail!("scale must be a positive number, got {scale}");
    }

    let options = usvg::Options::default();
    let tree = usvg::Tree::from_str(svg_content, &options).context("failed to parse rendered SVG")?;

    let width = (size * scale).round() as u32;
    let height = width;
    let mut pixmap = Pixmap::new(width, height)
        .ok_or_else(|| anyhow!("could not create a {width}x{height} pixmap"))?;
    pixmap.fill(tiny_skia::Color::WHITE);

    let transform = tiny_skia::Transform::from_scale(scale as f32, scale as f32);
    resvg::render(&tree, transform, &mut pixmap.as_mut());
    debug!(width, height, "rasterized board");

    RgbaImage::from_raw(width, height, pixmap.take()).ok_or_else(|| anyhow!("pixmap size mismatch"))
}

/// Save `image` as PNG or JPEG, chosen by the path's extension.
pub fn save_image(image: RgbaImage, path: &Path) -> Result<()> {
    let format = ImageFormat::from_path(path)
        .with_context(|| format!("cannot tell the image format of {}", path.display()))?;
    let image = DynamicImage::ImageRgba8(image);
    let result = match format {
        ImageFormat::Png => image.save_with_format(path, ImageFormat::Png),
        // JPEG has no alpha channel.
        ImageFormat::Jpeg => DynamicImage::ImageRgb8(image.to_rgb8()).save_with_format(path, ImageFormat::Jpeg),
        other => bail!("unsupported export format {other:?}; use .png, .jpg or .jpeg"),
    };
    result.with_context(|| format!("failed to write {}", path.display()))
}

pub fn cmd_export(args: &ExportArgs) -> Result<()> {
    let loaded = args.board.load()?;
    let state = loaded.derive();
    let options = RenderOptions::for_board(&loaded.file, loaded.path.as_deref(), &args.hide, args.long_rays);
    let svg = render_svg(loaded.board.polygon(), &state, &Catalogs::standard(), &options);

    let image = rasterize(&svg, options.canvas_size, args.scale)?;
    let (width, height) = image.dimensions();
    save_image(image, &args.output)?;
    info!(path = %args.output.display(), width, height, "exported board");
    eprintln!("Wrote: {} ({}x{})", args.output.display(), width, height);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SQUARE: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="10" height="10" viewBox="0 0 10 10">
<rect x="0" y="0" width="5" height="10" fill="black"/>
</svg>"#;

    #[test]
    fn rasterize_scales_canvas() {
        let image = rasterize(SQUARE, 10.0, 3.0).unwrap();
        assert_eq!(image.dimensions(), (30, 30));
        assert_eq!(image.get_pixel(2, 15).0, [0, 0, 0, 255]);
        assert_eq!(image.get_pixel(27, 15).0, [255, 255, 255, 255]);
    }

    #[test]
    fn rasterize_rejects_bad_scale() {
        assert!(rasterize(SQUARE, 10.0, 0.0).is_err());
        assert!(rasterize(SQUARE, 10.0, f64::NAN).is_err());
    }

    #[test]
    fn save_rejects_unknown_extension() {
        let image = rasterize(SQUARE, 10.0, 1.0).unwrap();
        let dir = std::env::temp_dir();
        assert!(save_image(image, &dir.join("vastu-export-test.tiff-nope")).is_err());
    }
}
