//! Cardscape - entry point
//!
//! Interactive digital business card with a generative blob-field backdrop.
//!
//! CLI Usage:
//!   cargo run                    # Open the card window
//!   cargo run -- --diagnose      # Run field diagnostics (no GUI)
//!   cargo run -- --diagnose -n 600  # Custom step count
//!   cargo run -- --vcard         # Export the contact card and exit

use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use cardscape::{
    config::{Parameters, ProfileRecord},
    export,
    render::{ExportAction, HudOverlay, RenderState},
    sim::BlobField,
    state::FrameMetrics,
};
use glam::Vec2;
use winit::{
    event::{ElementState, Event, KeyEvent, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::WindowBuilder,
};

/// Run field diagnostics without GUI
fn run_diagnostics(steps: u64) -> Result<()> {
    println!("=== Cardscape - Field Diagnostics ===\n");

    let params = Parameters::load_or_default();
    let viewport = Vec2::new(1280.0, 720.0);
    let mut field = BlobField::seeded(viewport, params.field, 1);

    println!("Blobs: {}", field.blobs.len());
    println!("Viewport: {}x{}", viewport.x, viewport.y);

    let initial_mean_speed = field.mean_speed();

    println!("\n--- Running {} steps ---\n", steps);

    let start_time = Instant::now();
    let mut out_of_bounds = 0u64;
    for step in 0..steps {
        // Synthetic pointer orbiting the card
        let angle = step as f32 * 0.01;
        let pointer = viewport * 0.5 + Vec2::new(angle.cos(), angle.sin()) * 300.0;
        field.step(pointer);

        for blob in &field.blobs {
            let p = blob.position;
            if p.x < 0.0 || p.x >= viewport.x || p.y < 0.0 || p.y >= viewport.y {
                out_of_bounds += 1;
            }
        }

        if steps >= 10 && step % (steps / 10) == 0 {
            let progress = (step as f32 / steps as f32) * 100.0;
            println!(
                "  {:3.0}%: frame={}, mean_speed={:.3} px/f, max_speed={:.3} px/f",
                progress,
                field.frame,
                field.mean_speed(),
                field.max_speed()
            );
        }
    }
    let elapsed = start_time.elapsed();

    println!("\n=== Results ===");
    println!("Elapsed time: {:.2?}", elapsed);
    println!(
        "Steps per second: {:.0}",
        steps as f32 / elapsed.as_secs_f32()
    );
    println!("Mean speed: {:.3} px/f (initial {:.3})", field.mean_speed(), initial_mean_speed);
    println!("Max speed: {:.3} px/f", field.max_speed());

    println!("\n=== Diagnostic Checks ===");
    if out_of_bounds > 0 {
        println!("⚠️  WARNING: {} out-of-bounds positions detected!", out_of_bounds);
    } else {
        println!("✓ All positions stayed within the viewport");
    }

    if field.blobs.len() == field.params.blob_count {
        println!("✓ Blob census constant");
    } else {
        println!(
            "⚠️  WARNING: census changed: {} != {}",
            field.blobs.len(),
            field.params.blob_count
        );
    }

    if field.max_speed() > 50.0 {
        println!("⚠️  WARNING: very high velocity - pointer drift accumulating fast");
    } else {
        println!("✓ Velocities look reasonable (attraction is unclamped by design)");
    }

    Ok(())
}

/// Export the contact card without opening a window
fn run_vcard_export() -> Result<()> {
    let profile = ProfileRecord::load_or_default("data/profile.json");
    let path = export::save_vcard(&profile)?;
    println!("Contact card written to {}", path.display());
    Ok(())
}

/// Parse CLI arguments
fn parse_args() -> (bool, u64, bool) {
    let args: Vec<String> = std::env::args().collect();
    let mut diagnose = false;
    let mut steps = 600;
    let mut vcard = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--diagnose" | "-d" => diagnose = true,
            "-n" | "--steps" => {
                i += 1;
                if i < args.len() {
                    steps = args[i].parse().unwrap_or(600);
                }
            }
            "--vcard" => vcard = true,
            "--help" | "-h" => {
                println!("Cardscape");
                println!();
                println!("Usage: cardscape [OPTIONS]");
                println!();
                println!("Options:");
                println!("  --diagnose, -d     Run field diagnostics (no GUI)");
                println!("  -n, --steps N      Number of diagnostic steps (default: 600)");
                println!("  --vcard            Export the contact card and exit");
                println!("  --help, -h         Show this help");
                std::process::exit(0);
            }
            _ => {}
        }
        i += 1;
    }

    (diagnose, steps, vcard)
}

fn main() -> Result<()> {
    env_logger::init();

    let (diagnose, steps, vcard) = parse_args();

    if diagnose {
        return run_diagnostics(steps);
    }
    if vcard {
        return run_vcard_export();
    }

    log::info!("Cardscape starting...");

    let params = Parameters::load_or_default();
    let profile = ProfileRecord::load_or_default("data/profile.json");
    log::info!("Card loaded for {}", profile.person_name);

    let event_loop = EventLoop::new()?;
    let window = Arc::new(
        WindowBuilder::new()
            .with_title(format!("{} | {}", profile.company_name, profile.person_name))
            .with_inner_size(winit::dpi::LogicalSize::new(1280, 720))
            .build(&event_loop)?,
    );

    let mut render_state = pollster::block_on(RenderState::new(window.clone(), &params.field))?;
    let mut hud = HudOverlay::new(&window, render_state.device(), render_state.surface_format());

    let size = window.inner_size();
    let mut field = BlobField::new(
        Vec2::new(size.width as f32, size.height as f32),
        params.field.clone(),
    );
    log::info!("Blob field created: {} blobs", field.blobs.len());

    // Input state
    let mut pointer = Vec2::new(size.width as f32 * 0.5, size.height as f32 * 0.5);
    let mut field_running = true;
    let mut last_frame_time = Instant::now();
    let mut fps = 0.0f32;

    log::info!("Controls:");
    log::info!("  C: Save contact (.vcf)");
    log::info!("  E: Export menu");
    log::info!("  P: Pause/resume backdrop");
    log::info!("  S: Status panel");
    log::info!("  H: Help overlay");
    log::info!("  Tab: Toggle overlay");
    log::info!("  F12: Backdrop screenshot");
    log::info!("  Escape: Exit");

    event_loop.run(move |event, elwt| {
        elwt.set_control_flow(ControlFlow::Poll);

        match event {
            Event::WindowEvent { event, .. } => {
                let consumed = hud.handle_event(&window, &event);

                match event {
                    WindowEvent::CloseRequested => {
                        elwt.exit();
                    }
                    WindowEvent::CursorMoved { position, .. } => {
                        // The backdrop follows the pointer even above panels
                        pointer = Vec2::new(position.x as f32, position.y as f32);
                    }
                    WindowEvent::Resized(new_size) => {
                        render_state.resize(new_size);
                        field.resize(Vec2::new(new_size.width as f32, new_size.height as f32));
                    }
                    WindowEvent::KeyboardInput {
                        event:
                            KeyEvent {
                                physical_key: PhysicalKey::Code(key_code),
                                state: ElementState::Pressed,
                                ..
                            },
                        ..
                    } if !consumed && !hud.wants_keyboard_input() => match key_code {
                        KeyCode::Escape => elwt.exit(),
                        KeyCode::KeyC => {
                            hud.request_export(ExportAction::ContactCard);
                        }
                        KeyCode::KeyE => {
                            hud.state.toggle_export_menu();
                        }
                        KeyCode::KeyP => {
                            field_running = !field_running;
                            log::info!(
                                "Blob field: {}",
                                if field_running { "RUNNING" } else { "PAUSED" }
                            );
                        }
                        KeyCode::KeyS => {
                            hud.state.toggle_status();
                        }
                        KeyCode::KeyH => {
                            hud.state.toggle_help();
                        }
                        KeyCode::Tab => {
                            hud.state.toggle_hud();
                        }
                        KeyCode::F12 => {
                            hud.request_export(ExportAction::Screenshot);
                        }
                        _ => {}
                    },
                    WindowEvent::RedrawRequested => {
                        let now = Instant::now();
                        let frame_time = (now - last_frame_time).as_secs_f32();
                        last_frame_time = now;
                        if frame_time > 0.0 {
                            // Smoothed fps for the status panel
                            fps = fps * 0.9 + (1.0 / frame_time) * 0.1;
                        }

                        if field_running {
                            field.step(pointer);
                        }
                        render_state.update_field(&field);

                        let metrics = FrameMetrics::sample(&field, fps, pointer, !field_running);

                        match render_state.render(&window, &mut hud, &metrics, &profile) {
                            Ok(_) => {}
                            Err(wgpu::SurfaceError::Lost) => render_state.resize(render_state.size),
                            Err(wgpu::SurfaceError::OutOfMemory) => elwt.exit(),
                            Err(e) => log::error!("Render error: {:?}", e),
                        }

                        // Exports run synchronously inside the frame callback
                        if let Some(action) = hud.take_export_action() {
                            dispatch_export(action, &profile, &render_state);
                        }
                    }
                    _ => {}
                }
            }
            Event::AboutToWait => {
                window.request_redraw();
            }
            _ => {}
        }
    })?;

    Ok(())
}

/// Execute an export action raised by the overlay or a shortcut
fn dispatch_export(action: ExportAction, profile: &ProfileRecord, render_state: &RenderState) {
    match action {
        ExportAction::ContactCard => match export::save_vcard(profile) {
            Ok(path) => log::info!("Contact card saved: {}", path.display()),
            Err(e) => log::error!("Contact export failed: {}", e),
        },
        ExportAction::Screenshot => {
            let captured = render_state
                .capture_backdrop()
                .and_then(|(pixels, w, h)| export::save_screenshot(&pixels, w, h));
            match captured {
                Ok(path) => log::info!("Backdrop saved: {}", path.display()),
                Err(e) => log::error!("Screenshot failed: {}", e),
            }
        }
    }
}
