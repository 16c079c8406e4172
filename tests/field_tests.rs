//! Behavior tests for the blob field simulator.
//!
//! Properties under test:
//! - toroidal wraparound keeps every position in [0, w) x [0, h) after
//!   every step, including exact-boundary starts
//! - the blob census and per-blob hue/size never change after creation
//! - pointer attraction is directionally monotonic
//! - velocity is never clamped
//! - resize preserves blob state; teardown-then-reinit starts fresh

use cardscape::config::FieldParameters;
use cardscape::sim::BlobField;
use glam::Vec2;

const WIDTH: f32 = 1280.0;
const HEIGHT: f32 = 720.0;

fn test_field(seed: u64) -> BlobField {
    BlobField::seeded(Vec2::new(WIDTH, HEIGHT), FieldParameters::default(), seed)
}

fn assert_in_bounds(field: &BlobField, context: &str) {
    for (i, blob) in field.blobs.iter().enumerate() {
        let p = blob.position;
        assert!(
            p.x >= 0.0 && p.x < WIDTH && p.y >= 0.0 && p.y < HEIGHT,
            "{}: blob {} escaped at frame {}: ({}, {})",
            context,
            i,
            field.frame,
            p.x,
            p.y
        );
    }
}

// ============================================================================
// Wraparound invariant
// ============================================================================

#[test]
fn test_positions_stay_in_bounds_over_many_steps() {
    let mut field = test_field(11);

    for step in 0..500 {
        // Pointer sweeping around, including positions outside the viewport
        let angle = step as f32 * 0.05;
        let pointer = Vec2::new(
            WIDTH * 0.5 + angle.cos() * WIDTH,
            HEIGHT * 0.5 + angle.sin() * HEIGHT,
        );
        field.step(pointer);
        assert_in_bounds(&field, "sweep");
    }
}

#[test]
fn test_exact_boundary_start_wraps_to_zero() {
    let mut field = test_field(12);
    field.blobs[0].position = Vec2::new(WIDTH, HEIGHT);
    field.blobs[0].velocity = Vec2::ZERO;
    field.blobs[1].position = Vec2::ZERO;
    field.blobs[1].velocity = Vec2::new(-0.25, -0.25);

    field.step(Vec2::new(WIDTH * 0.5, HEIGHT * 0.5));

    assert_in_bounds(&field, "boundary start");
}

#[test]
fn test_fast_blob_wraps_multiple_widths() {
    let mut field = test_field(13);
    field.blobs[0].velocity = Vec2::new(WIDTH * 2.5, -HEIGHT * 3.5);

    field.step(Vec2::new(WIDTH * 0.5, HEIGHT * 0.5));

    assert_in_bounds(&field, "multi-width overshoot");
}

// ============================================================================
// Census and fixed attributes
// ============================================================================

#[test]
fn test_census_and_appearance_constant() {
    let mut field = test_field(21);
    let initial: Vec<(f32, f32)> = field.blobs.iter().map(|b| (b.hue, b.size)).collect();
    assert_eq!(field.blobs.len(), 5);

    for _ in 0..300 {
        field.step(Vec2::new(100.0, 600.0));
    }

    assert_eq!(field.blobs.len(), 5, "census changed during stepping");
    for (blob, (hue, size)) in field.blobs.iter().zip(initial.iter()) {
        assert_eq!(blob.hue, *hue, "hue changed after initialization");
        assert_eq!(blob.size, *size, "size changed after initialization");
    }
}

#[test]
fn test_configured_census_is_respected() {
    let params = FieldParameters {
        blob_count: 9,
        ..FieldParameters::default()
    };
    let field = BlobField::seeded(Vec2::new(WIDTH, HEIGHT), params, 22);
    assert_eq!(field.blobs.len(), 9);
}

// ============================================================================
// Pointer attraction
// ============================================================================

#[test]
fn test_attraction_pulls_horizontal_velocity_toward_pointer() {
    let mut field = test_field(31);

    // Pointer strictly to the right of every possible blob position
    let pointer = Vec2::new(WIDTH + 5000.0, HEIGHT * 0.5);
    let initial_mean_vx: f32 =
        field.blobs.iter().map(|b| b.velocity.x).sum::<f32>() / field.blobs.len() as f32;

    for _ in 0..200 {
        field.step(pointer);
    }

    let mean_vx: f32 =
        field.blobs.iter().map(|b| b.velocity.x).sum::<f32>() / field.blobs.len() as f32;
    assert!(
        mean_vx > initial_mean_vx,
        "mean horizontal velocity should rise toward a pointer on the right: {} -> {}",
        initial_mean_vx,
        mean_vx
    );
    assert!(
        mean_vx > 0.0,
        "mean horizontal velocity should end positive, got {}",
        mean_vx
    );
}

#[test]
fn test_velocity_is_never_clamped() {
    let mut field = test_field(32);
    let limit = field.params.speed_limit;

    // A distant stationary pointer accumulates velocity without bound
    let pointer = Vec2::new(WIDTH + 5000.0, HEIGHT * 0.5);
    for _ in 0..500 {
        field.step(pointer);
    }

    assert!(
        field.max_speed() > limit * 10.0,
        "speed should grow far past the initial range ({} px/f), got {}",
        limit,
        field.max_speed()
    );
}

// ============================================================================
// Resize and lifecycle
// ============================================================================

#[test]
fn test_resize_preserves_blob_state() {
    let mut field = test_field(41);
    for _ in 0..50 {
        field.step(Vec2::new(300.0, 300.0));
    }

    let before: Vec<Vec2> = field.blobs.iter().map(|b| b.position).collect();
    field.resize(Vec2::new(WIDTH * 2.0, HEIGHT * 2.0));

    for (blob, pos) in field.blobs.iter().zip(before.iter()) {
        assert_eq!(blob.position, *pos, "resize must not move blobs");
    }
    assert_eq!(field.blobs.len(), 5);
}

#[test]
fn test_shrinking_resize_rewraps_on_next_step() {
    let mut field = test_field(42);
    field.blobs[0].position = Vec2::new(WIDTH - 1.0, HEIGHT - 1.0);
    field.blobs[0].velocity = Vec2::ZERO;

    let small = Vec2::new(400.0, 300.0);
    field.resize(small);
    field.step(Vec2::new(200.0, 150.0));

    for blob in &field.blobs {
        assert!(blob.position.x >= 0.0 && blob.position.x < small.x);
        assert!(blob.position.y >= 0.0 && blob.position.y < small.y);
    }
}

#[test]
fn test_teardown_then_reinit_starts_fresh() {
    let mut field = test_field(43);
    for _ in 0..100 {
        field.step(Vec2::new(640.0, 360.0));
    }
    assert_eq!(field.frame, 100);

    // Dropping the field is the teardown; the host owns at most one field,
    // so a second concurrent subscription cannot exist.
    drop(field);

    let mut fresh = test_field(43);
    assert_eq!(fresh.frame, 0);
    assert_eq!(fresh.blobs.len(), 5);
    fresh.step(Vec2::new(640.0, 360.0));
    assert_eq!(fresh.frame, 1);
}

// ============================================================================
// Jitter
// ============================================================================

#[test]
fn test_jitter_moves_stationary_blobs() {
    let mut field = test_field(51);
    for blob in &mut field.blobs {
        blob.velocity = Vec2::ZERO;
    }
    let before: Vec<Vec2> = field.blobs.iter().map(|b| b.position).collect();

    // Pointer on top of each blob would still attract; park it far away and
    // give it no time to accumulate meaningful pull in a single step
    field.step(Vec2::new(WIDTH * 0.5, HEIGHT * 0.5));

    let moved = field
        .blobs
        .iter()
        .zip(before.iter())
        .filter(|(b, p)| b.position != **p)
        .count();
    assert!(moved > 0, "noise jitter should displace stationary blobs");
}

#[test]
fn test_jitter_stays_within_amplitude() {
    let params = FieldParameters {
        pointer_attraction: 0.0,
        ..FieldParameters::default()
    };
    let mut field = BlobField::seeded(Vec2::new(WIDTH, HEIGHT), params, 52);
    for blob in &mut field.blobs {
        blob.velocity = Vec2::ZERO;
        blob.position = Vec2::new(WIDTH * 0.5, HEIGHT * 0.5);
    }

    let amplitude = field.params.jitter_amplitude;
    let before: Vec<Vec2> = field.blobs.iter().map(|b| b.position).collect();
    field.step(Vec2::ZERO);

    for (blob, p) in field.blobs.iter().zip(before.iter()) {
        let delta = blob.position - *p;
        assert!(
            delta.x.abs() <= amplitude + 1e-4 && delta.y.abs() <= amplitude + 1e-4,
            "jitter exceeded amplitude: {:?}",
            delta
        );
    }
}
