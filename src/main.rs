// SPDX-License-Identifier: MPL-2.0
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

use sprite360::catalog::{self, ProductDisplay, SpriteCatalog};
use sprite360::config::{self, paths, Config};
use sprite360::domain::ui::{DragAxis, Point};
use sprite360::media;
use sprite360::ui::state::DragHint;
use sprite360::ui::viewer::{attach, MemorySurface, PointerEvent};
use sprite360::{Error, Result, SpriteConfig};

const USAGE: &str = "\
Usage: sprite360 [--config-dir DIR] <command> [options]

Commands:
  inspect       --catalog FILE --product ID
  simulate      --catalog FILE --product ID [--axis x|y] [--sensitivity PX] [--start FRAME] DRAG...
  autofill      --catalog FILE --product ID --sheet IMAGE
  export-frame  --sheet IMAGE --frame-width W --frame-height H --frame N [OUT]

The catalog defaults to [catalog] path in settings.toml.
Set RUST_LOG=debug for diagnostics.";

fn main() -> ExitCode {
    env_logger::init();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        println!("{}", USAGE);
        return ExitCode::SUCCESS;
    }

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", err);
            if matches!(err, Error::Cli(_)) {
                eprintln!("\n{}", USAGE);
            }
            ExitCode::FAILURE
        }
    }
}

fn run(mut args: pico_args::Arguments) -> Result<()> {
    paths::init_cli_override(args.opt_value_from_str("--config-dir")?);
    let (config, warning) = config::load();
    if let Some(warning) = warning {
        eprintln!("warning: {}", warning);
    }

    let command = args
        .subcommand()?
        .ok_or_else(|| Error::Cli("missing command".to_string()))?;

    match command.as_str() {
        "inspect" => inspect(&config, args),
        "simulate" => simulate(&config, args),
        "autofill" => autofill(&config, args),
        "export-frame" => export_frame(args),
        other => Err(Error::Cli(format!("unknown command: {}", other))),
    }
}

fn catalog_path(config: &Config, args: &mut pico_args::Arguments) -> Result<PathBuf> {
    let explicit: Option<PathBuf> = args.opt_value_from_str("--catalog")?;
    explicit
        .or_else(|| config.catalog.path.clone())
        .ok_or_else(|| Error::Cli("no catalog given and none configured".to_string()))
}

fn free_args(args: pico_args::Arguments) -> Vec<String> {
    args.finish()
        .into_iter()
        .map(OsString::into_string)
        .filter_map(std::result::Result::ok)
        .filter(|arg| arg != "--")
        .collect()
}

fn viewer_config(catalog: &SpriteCatalog, product: u64) -> Result<SpriteConfig> {
    let record = catalog
        .get(product)
        .ok_or_else(|| Error::Cli(format!("product {} not in catalog", product)))?;
    Ok(record.to_sprite_config()?)
}

fn inspect(config: &Config, mut args: pico_args::Arguments) -> Result<()> {
    let path = catalog_path(config, &mut args)?;
    let product: u64 = args.value_from_str("--product")?;
    let catalog = catalog::load_from_path(&path)?;

    match catalog.display(product) {
        ProductDisplay::Viewer(sprite) => {
            let geometry = sprite360::SpriteGeometry::new(&sprite)?;
            println!("product {}: 360 viewer", product);
            println!("  sprite   {}", sprite.sprite_url);
            println!("  frame    {}x{}", sprite.frame_width, sprite.frame_height);
            println!("  sheet    {}x{}", sprite.sheet_width, sprite.sheet_height);
            println!(
                "  grid     {} columns x {} rows = {} frames",
                geometry.columns(),
                geometry.rows(),
                geometry.frame_count()
            );
        }
        ProductDisplay::Gallery => {
            let reason = catalog
                .get(product)
                .map(|record| match record.to_sprite_config() {
                    Ok(sprite) => sprite360::SpriteGeometry::new(&sprite)
                        .err()
                        .map_or_else(String::new, |err| err.to_string()),
                    Err(err) => err.to_string(),
                })
                .unwrap_or_else(|| "no sprite record".to_string());
            println!("product {}: gallery fallback ({})", product, reason);
        }
    }
    Ok(())
}

fn simulate(config: &Config, mut args: pico_args::Arguments) -> Result<()> {
    let path = catalog_path(config, &mut args)?;
    let product: u64 = args.value_from_str("--product")?;
    let axis: Option<String> = args.opt_value_from_str("--axis")?;
    let sensitivity: Option<f32> = args.opt_value_from_str("--sensitivity")?;
    let start: Option<i64> = args.opt_value_from_str("--start")?;
    let drags = free_args(args)
        .iter()
        .map(|raw| {
            raw.parse::<f32>()
                .map_err(|_| Error::Cli(format!("invalid drag distance: {}", raw)))
        })
        .collect::<Result<Vec<_>>>()?;

    let mut options = config.attach_options();
    if let Some(raw) = axis {
        options.drag_axis =
            DragAxis::parse(&raw).ok_or_else(|| Error::Cli(format!("invalid axis: {}", raw)))?;
    }
    if let Some(sensitivity) = sensitivity {
        options.sensitivity = sensitivity;
    }

    let catalog = catalog::load_from_path(&path)?;
    let sprite = viewer_config(&catalog, product)?;
    let mut viewer = attach(Some(MemorySurface::new()), sprite, options)?;
    let mut hint = config
        .hint_enabled()
        .then(|| DragHint::new(config.hint_timeout(), Instant::now()));

    println!(
        "{} frames, axis {}, {}px per frame",
        viewer.frame_count(),
        options.drag_axis.as_str(),
        options.sensitivity
    );
    if let Some(frame) = start {
        let change = viewer.show_frame(frame);
        println!("start at frame {} ({})", change.frame, change.offset.to_css());
    }

    for distance in drags {
        if hint.as_mut().is_some_and(DragHint::on_pointer_down) {
            println!("hint hidden");
        }
        let end = match options.drag_axis {
            DragAxis::X => Point::new(distance, 0.0),
            DragAxis::Y => Point::new(0.0, distance),
        };
        viewer.handle_event(PointerEvent::Pressed(Point::default()));
        let changes = viewer.handle_event(PointerEvent::Moved(end));
        let leftover = viewer.accumulated_delta().unwrap_or_default();
        viewer.handle_event(PointerEvent::Released);

        println!("drag {:+}px: {} step(s), {:+}px discarded", distance, changes.len(), leftover);
        for change in changes {
            println!("  frame {:>3}  {}", change.frame, change.offset.to_css());
        }
    }

    let surface = viewer.into_surface();
    println!("style: {}", surface.inline_style());
    Ok(())
}

fn autofill(config: &Config, mut args: pico_args::Arguments) -> Result<()> {
    let path = catalog_path(config, &mut args)?;
    let product: u64 = args.value_from_str("--product")?;
    let sheet: PathBuf = args.value_from_str("--sheet")?;

    let mut catalog = if path.exists() {
        catalog::load_from_path(&path)?
    } else {
        SpriteCatalog::new()
    };
    let (width, height) = media::probe_sheet_dimensions(&sheet)?;

    let mut record = catalog.get(product).cloned().unwrap_or_default();
    record.autofill_sheet_dimensions(width, height);
    catalog.upsert(product, record);
    catalog::save_to_path(&catalog, &path)?;

    println!("product {}: sheet {}x{}", product, width, height);
    Ok(())
}

fn export_frame(mut args: pico_args::Arguments) -> Result<()> {
    let sheet: PathBuf = args.value_from_str("--sheet")?;
    let frame_width: u32 = args.value_from_str("--frame-width")?;
    let frame_height: u32 = args.value_from_str("--frame-height")?;
    let frame: usize = args.value_from_str("--frame")?;
    let out = free_args(args).into_iter().next().map(PathBuf::from);

    let (sheet_width, sheet_height) = media::probe_sheet_dimensions(&sheet)?;
    let sprite = SpriteConfig::new(
        sheet.display().to_string(),
        frame_width,
        frame_height,
        sheet_width,
        sheet_height,
    );
    let out = out.unwrap_or_else(|| default_out(&sheet, frame));

    media::export_frame(&sheet, &sprite, frame, &out)?;
    println!("wrote {}", out.display());
    Ok(())
}

fn default_out(sheet: &Path, frame: usize) -> PathBuf {
    let name = media::default_frame_filename(sheet, frame, media::ExportFormat::Png);
    sheet.with_file_name(name)
}
