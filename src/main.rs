//! Hyperview - 4D polytope viewer
//!
//! Headless front end: renders the configured shape to a sequence of SVG
//! frames, advancing auto-rotation between frames when it is enabled.

use std::path::Path;

use hyperview::{AppConfig, Viewer};
use hyperview_render::SvgCanvas;

fn main() {
    let config = AppConfig::load();

    // Initialize logging; RUST_LOG still wins over the configured level
    let level = config
        .as_ref()
        .map(|c| c.debug.log_level.clone())
        .unwrap_or_else(|_| "info".to_string());
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
    log::info!("Starting hyperview");

    let config = config.unwrap_or_else(|e| {
        log::warn!("Failed to load config: {}. Using defaults.", e);
        AppConfig::default()
    });

    if let Err(e) = run(&config) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(config: &AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let mut viewer = Viewer::from_config(config);
    let info = viewer.shape_info();
    log::info!(
        "{}: {} ({} vertices, {} edges generated)",
        info.name,
        info.description,
        info.generated.vertex_count,
        info.generated.edge_count
    );
    if info.approximate {
        log::info!(
            "{} is approximated; the ideal shape has {} vertices",
            info.name,
            info.nominal.vertices
        );
    }

    let out_dir = Path::new(&config.output.directory);
    std::fs::create_dir_all(out_dir)?;

    let mut canvas = SvgCanvas::with_background(
        config.canvas.width as f32,
        config.canvas.height as f32,
        config.canvas.background.clone(),
    );

    let frame_time = if config.animation.frame_rate > 0.0 {
        1.0 / config.animation.frame_rate
    } else {
        0.0
    };

    let mut written = 0;
    for frame in 0..config.output.frames {
        if frame > 0 {
            viewer.tick(frame_time);
        }
        match viewer.render_frame(&mut canvas) {
            Some(stats) => {
                let path = out_dir.join(format!("frame_{:04}.svg", frame));
                canvas.save(&path)?;
                written += 1;
                log::debug!(
                    "Wrote {} ({} edges, {} vertices)",
                    path.display(),
                    stats.edges_drawn,
                    stats.vertices_drawn
                );
            }
            None => log::warn!("Frame {} skipped", frame),
        }
    }

    log::info!("Wrote {} frame(s) to {}", written, out_dir.display());
    log::debug!("Final state:\n{}", viewer.snapshot().to_ron()?);
    Ok(())
}
