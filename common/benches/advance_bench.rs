use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use common::games::SessionRng;
use common::games::snake::{
    Direction, SnakeGameState, SnakeSessionSettings, TickOutcome, WallCollisionMode,
};

const TURNS: [Direction; 4] = [Direction::Down, Direction::Left, Direction::Up, Direction::Right];

fn play_until_death(settings: &SnakeSessionSettings, seed: u64) -> u32 {
    let mut rng = SessionRng::new(seed);
    let mut state = SnakeGameState::new(settings, &mut rng);

    for tick in 0..10_000usize {
        if tick % 7 == 0 {
            state.set_direction(TURNS[(tick / 7) % TURNS.len()]);
        }
        if let TickOutcome::Died { score, .. } = state.advance(&mut rng) {
            return score;
        }
    }
    state.score()
}

fn advance_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("advance");

    let wrap = SnakeSessionSettings {
        wall_collision_mode: WallCollisionMode::WrapAround,
        apple_count: 20,
        ..SnakeSessionSettings::default()
    };
    group.bench_function("wrap_20_apples", |b| {
        b.iter(|| play_until_death(black_box(&wrap), 42))
    });

    let crowded = SnakeSessionSettings {
        field_width: 8,
        field_height: 8,
        wall_collision_mode: WallCollisionMode::WrapAround,
        apple_count: 40,
        ..SnakeSessionSettings::default()
    };
    group.bench_function("crowded_board_spawns", |b| {
        b.iter(|| play_until_death(black_box(&crowded), 7))
    });

    group.finish();
}

criterion_group!(benches, advance_bench);
criterion_main!(benches);
