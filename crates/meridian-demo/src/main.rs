//! Demo binary: renders the height and biome overlays of a procedural body
//! to PNG files.
//!
//! Settings are loaded from `overlays.ron` and can be overridden via CLI
//! flags. Run with `cargo run -p meridian-demo` to render into `./renders`,
//! or `-- --width 1280 --height 640 --body Selene` to change the view.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use clap::Parser;
use tracing::info;

use meridian_body::{BodyDef, BodyRegistry};
use meridian_color::MapImage;
use meridian_config::{CliArgs, OverlaySettings};
use meridian_overlay::{
    MapRegion, OverlayEvents, OverlayKind, OverlayProvider, SampleOptions, render_overlay,
};
use meridian_scan::{ProceduralScanData, ScanDataset, default_biome_table};

fn main() {
    let args = CliArgs::parse();

    // Resolve the settings directory.
    let settings_dir = args.settings.clone().unwrap_or_else(|| {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("meridian")
    });

    // Load settings (tolerant), then apply CLI overrides.
    let mut settings = OverlaySettings::load_or_default(&settings_dir);
    settings.apply_cli_overrides(&args);

    meridian_log::init_logging(args.log_level.as_deref());

    if let Err(e) = run(&args, &mut settings) {
        eprintln!("render failed: {e}");
        std::process::exit(1);
    }

    if let Err(e) = settings.save(&settings_dir) {
        eprintln!("could not save settings: {e}");
        std::process::exit(1);
    }
    info!(dir = %settings_dir.display(), "settings saved");
}

fn run(args: &CliArgs, settings: &mut OverlaySettings) -> Result<(), Box<dyn std::error::Error>> {
    let registry = known_bodies();
    let body_name = args.body.as_deref().unwrap_or("Gaia");
    let body = registry
        .get_by_name(body_name)
        .ok_or_else(|| format!("unknown body: {body_name}"))?;

    // Procedural scan source: full altimetry, partial biome survey.
    let mut scan = ProceduralScanData::for_body(body, default_biome_table());
    scan.mark_all_scanned(ScanDataset::AltimetryHiRes);
    scan.mark_scanned(ScanDataset::Biome, -60.0, 60.0, -180.0, 180.0);
    info!(
        body = %body.name,
        altimetry = scan.coverage(ScanDataset::AltimetryHiRes).coverage_fraction(),
        biome = scan.coverage(ScanDataset::Biome).coverage_fraction(),
        "scan coverage"
    );

    let out_dir = args.out.clone().unwrap_or_else(|| PathBuf::from("renders"));
    std::fs::create_dir_all(&out_dir)?;

    let mut events = OverlayEvents::new();
    let (width, height) = (settings.view.width, settings.view.height);

    for kind in OverlayKind::ALL {
        let mut provider = OverlayProvider::new(kind);
        provider.load_settings(settings);
        provider.activate(body, &mut events);

        // The biome overlay demonstrates the coverage filter against the
        // partially scanned survey; altimetry is fully covered.
        let opts = SampleOptions {
            use_coverage_filter: kind == OverlayKind::Biome,
            ..Default::default()
        };

        let image = render_overlay(
            &provider,
            &scan,
            body,
            width,
            height,
            MapRegion::full_globe(),
            &opts,
        );

        let file_name = match kind {
            OverlayKind::Heightmap => "heightmap.png",
            OverlayKind::Biome => "biome.png",
        };
        let path = out_dir.join(file_name);
        write_png(&path, &image)?;

        if let Some(tip) = provider.tooltip_content(&scan, body, 0.0, 0.0) {
            info!(layer = provider.gui_name(), tooltip = %tip.content, "sample at (0, 0)");
        }
        info!(
            layer = provider.gui_name(),
            path = %path.display(),
            colors = image.unique_color_count(),
            "overlay rendered"
        );

        provider.save_settings(settings);
        provider.deactivate();
    }

    let redraws = events.drain();
    info!(count = redraws.len(), "redraw requests drained");

    Ok(())
}

/// The bodies this demo knows how to render.
fn known_bodies() -> BodyRegistry {
    let mut registry = BodyRegistry::new();
    // Registration only fails on duplicate names; these are distinct.
    let _ = registry.register(BodyDef::earth_like("Gaia", 42));
    let _ = registry.register(BodyDef::moon_like("Selene", 7));
    registry
}

/// Write a map image as an RGBA8 PNG.
fn write_png(path: &Path, image: &MapImage) -> Result<(), png::EncodingError> {
    let file = File::create(path).map_err(png::EncodingError::from)?;
    let writer = BufWriter::new(file);

    let mut encoder = png::Encoder::new(writer, image.width, image.height);
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);

    let mut png_writer = encoder.write_header()?;
    png_writer.write_image_data(&image.as_bytes())?;
    Ok(())
}
