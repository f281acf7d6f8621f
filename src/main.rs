use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{info, warn};

use photogrid::config::GalleryConfig;
use photogrid::models::ViewportSize;
use photogrid::scanner::{scan_photos, ScanConfig, ScanResult};
use photogrid::selection::CardOverlay;
use photogrid::thumbnails::{plan_for_file, ThumbnailPlan};
use photogrid::ui::parse_line;
use photogrid::GallerySession;

/// Portrait phone surface used until a `resize` command arrives.
const INITIAL_VIEWPORT: ViewportSize = ViewportSize::new(1080.0, 1920.0);

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("photogrid=info".parse()?),
        )
        .init();

    let mut args = std::env::args_os().skip(1);
    let dir = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));
    let script = args.next().map(PathBuf::from);

    let config = GalleryConfig::from_env();
    let scan = scan_photos(
        &dir,
        &ScanConfig {
            recursive: config.recursive,
            ..Default::default()
        },
    )?;

    let mut session = GallerySession::new(scan.library.clone(), INITIAL_VIEWPORT);
    print_grid(&scan, &config, &session);

    let input: Box<dyn BufRead> = match &script {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("Failed to open script: {:?}", path))?,
        )),
        None => Box::new(BufReader::new(io::stdin())),
    };

    for (line_no, line) in input.lines().enumerate() {
        let line = line.context("Failed to read input")?;
        let event = match parse_line(&line) {
            Ok(Some(event)) => event,
            Ok(None) => continue,
            Err(e) => {
                warn!(line = line_no + 1, "{}", e);
                continue;
            }
        };
        if let Err(e) = session.handle(event) {
            warn!(line = line_no + 1, "{}", e);
            continue;
        }
        print_state(&session);
    }

    if session.selection().is_selection_mode_active() {
        print_grid(&scan, &config, &session);
    }
    info!("Input closed");
    Ok(())
}

fn print_grid(scan: &ScanResult, config: &GalleryConfig, session: &GallerySession) {
    let max_px = config.thumb_max_px();
    let columns = config.columns_for(INITIAL_VIEWPORT.width);
    println!(
        "{} photos, {} columns, thumbnails capped at {}px",
        scan.library.len(),
        columns,
        max_px
    );

    for (index, source) in scan.sources.iter().enumerate() {
        let title = &source.identity.title;
        let plan = plan_for_file(&source.path, max_px, title);
        let cell = match plan {
            ThumbnailPlan::Scaled(decision) => {
                format!(
                    "#{} {} (1/{})",
                    source.identity.id, title, decision.sample_factor
                )
            }
            ThumbnailPlan::Placeholder(text) => format!("#{} [{}]", source.identity.id, text),
        };
        let overlay = overlay_marker(session.selection().overlay_for(source.identity.id));
        print!("{overlay}{cell:<28}");
        if (index + 1) % columns == 0 {
            println!();
        }
    }
    if scan.sources.len() % columns != 0 {
        println!();
    }
}

fn print_state(session: &GallerySession) {
    match (session.viewer(), session.active_photo()) {
        (Some(viewer), Some(photo)) => {
            let transform = viewer.transform.layer_transform();
            println!(
                "viewer #{} \"{}\" zoom={:.2} offset=({:.1}, {:.1}) translate=({:.1}, {:.1})",
                photo.id,
                photo.title,
                viewer.transform.zoom,
                viewer.transform.offset.x,
                viewer.transform.offset.y,
                transform.translation.x,
                transform.translation.y
            );
        }
        _ => {
            let selection = session.selection();
            if selection.is_selection_mode_active() {
                println!("grid selecting {:?}", selection.selected_ids());
            } else {
                println!("grid");
            }
        }
    }
}

fn overlay_marker(overlay: CardOverlay) -> &'static str {
    match overlay {
        CardOverlay::Hidden => "",
        CardOverlay::Unselected => "( ) ",
        CardOverlay::Selected => "(x) ",
    }
}
