//! The binary entry point: load config and datasets, build the sky map, and
//! report what would be drawn.

use clap::Parser;
use skymap_app::{AppError, PlatformDirs, SkyMapSession};
use skymap_catalog::ConstellationId;
use skymap_config::{CliArgs, Config};
use skymap_scene::SceneEvent;

fn main() {
    let args = CliArgs::parse();
    if let Err(e) = run(&args) {
        eprintln!("skymap: {e}");
        std::process::exit(1);
    }
}

fn run(args: &CliArgs) -> Result<(), AppError> {
    let dirs = match &args.config {
        Some(root) => PlatformDirs::resolve_with_root(root),
        None => PlatformDirs::resolve()?,
    };
    dirs.create_dirs()?;

    let mut config = Config::load_or_create(&dirs.config_dir)?;
    config.apply_cli_overrides(args);
    skymap_log::init_logging(
        Some(&dirs.log_dir),
        config.debug.log_to_file,
        Some(&config),
    );

    let mut session = SkyMapSession::load(&config)?;
    let stats = session.catalog().stats();
    println!("Constellations: {} ({} renderable)", stats.constellations, stats.renderable);
    println!("Stars:          {}", stats.stars);
    println!("Line segments:  {}", stats.segments);
    println!("Background:     {} stars", session.starfield().len());
    if stats.rejected_vertices + stats.rejected_segments > 0 {
        println!(
            "Skipped:        {} coordinate pairs, {} segments",
            stats.rejected_vertices, stats.rejected_segments
        );
    }

    if let Some(id) = &args.select {
        session.handle(SceneEvent::Click(ConstellationId::new(id.as_str())));
        match session.open_details() {
            Some(details) => {
                println!();
                println!("{}", details.title);
                if let Some(en) = &details.english_name {
                    println!("  {en}");
                }
                println!("  {}", details.description);
                println!("  Rank: {}", details.rank);
                println!("  {}", details.coordinates_line());
            }
            None => tracing::warn!(%id, "Selected constellation is not in the catalog"),
        }
    }

    Ok(())
}
