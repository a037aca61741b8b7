use criterion::{Criterion, criterion_group, criterion_main};
use snake_engine::{BodyChain, Game, GameSettings, InputEvent, Position, SessionRng};

fn long_chain(length: usize) -> BodyChain {
    let mut chain = BodyChain::new(Position::new(length as i32, 0));
    for _ in 2..length {
        chain.grow();
        chain.advance();
    }
    chain
}

fn bench_chain_advance(c: &mut Criterion) {
    c.bench_function("chain_advance_500_segments", |b| {
        let chain = long_chain(500);
        b.iter(|| {
            let mut chain = chain.clone();
            for _ in 0..100 {
                chain.advance();
            }
            chain.head()
        });
    });
}

fn bench_game_ticks(c: &mut Criterion) {
    c.bench_function("game_1000_frames_40x20", |b| {
        b.iter(|| {
            let settings = GameSettings {
                board_width: 40,
                board_height: 20,
                frames_per_tick: 1,
            };
            let mut game = Game::new(settings, SessionRng::new(42));
            game.handle_input(InputEvent::Confirm);
            for i in 0..1000 {
                if i % 7 == 0 {
                    game.handle_input(InputEvent::TurnClockwise);
                }
                game.on_frame();
            }
            game.score()
        });
    });
}

fn bench_snapshot(c: &mut Criterion) {
    c.bench_function("snapshot_40x20", |b| {
        let settings = GameSettings::default();
        let game = Game::new(settings, SessionRng::new(42));
        b.iter(|| game.snapshot());
    });
}

criterion_group!(benches, bench_chain_advance, bench_game_ticks, bench_snapshot);
criterion_main!(benches);
