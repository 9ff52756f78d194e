use std::hint::black_box;
use std::time::Instant;

use glam::{Quat, Vec3};
use trinket_common::TweenSettings;
use trinket_orientation::OrientationTween;

fn steps_to_converge(blend: f32, settle_threshold: f32) -> u32 {
    let mut tween = OrientationTween::new(TweenSettings {
        blend,
        settle_threshold,
    });
    tween.retarget(Quat::from_axis_angle(Vec3::Y, std::f32::consts::PI * 0.9));
    let mut current = Quat::IDENTITY;
    let mut steps = 0u32;
    while tween.is_active() {
        current = tween.step(black_box(current));
        steps += 1;
    }
    steps
}

fn bench_convergence(blend: f32, settle_threshold: f32, iterations: usize) {
    let start = Instant::now();
    let mut total_steps = 0u64;
    for _ in 0..iterations {
        total_steps += steps_to_converge(black_box(blend), settle_threshold) as u64;
    }
    let elapsed = start.elapsed();
    let per_iter = elapsed / iterations as u32;
    println!(
        "  converge (blend={blend}, threshold={settle_threshold}): {} steps, {per_iter:?}/run, total {elapsed:?}",
        total_steps / iterations as u64
    );
}

fn main() {
    println!("tween convergence:");
    bench_convergence(0.02, 0.22, 1_000);
    bench_convergence(0.02, 0.01, 1_000);
    bench_convergence(0.55, 0.22, 1_000);
}
