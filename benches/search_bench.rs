use criterion::{criterion_group, criterion_main, Criterion};
use grid_astar::{run_search, Coord, Grid, GridConfig};
use rand::prelude::*;
use std::hint::black_box;

fn random_board(n: usize, rng: &mut StdRng) -> Grid {
    let mut grid = Grid::new(n, n);
    for coord in grid.coords().collect::<Vec<_>>() {
        grid.set_obstacle(coord, rng.gen_bool(0.25)).unwrap();
    }
    let (start, end) = (Coord::new(0, 0), Coord::new(n - 1, n - 1));
    grid.set_obstacle(start, false).unwrap();
    grid.set_obstacle(end, false).unwrap();
    grid.set_start(start).unwrap();
    grid.set_end(end).unwrap();
    grid
}

fn default_board_bench(c: &mut Criterion) {
    let mut grid = GridConfig::default().build().unwrap();
    grid.set_start(Coord::new(0, 0)).unwrap();
    grid.set_end(Coord::new(19, 19)).unwrap();
    c.bench_function("default 20x20 board", |b| {
        b.iter(|| black_box(run_search(&mut grid)))
    });
}

fn random_board_bench(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0);
    for n in [32, 64] {
        let mut boards: Vec<Grid> = (0..20).map(|_| random_board(n, &mut rng)).collect();
        c.bench_function(format!("random {n}x{n} boards").as_str(), |b| {
            b.iter(|| {
                for grid in boards.iter_mut() {
                    black_box(run_search(grid));
                }
            })
        });
    }
}

criterion_group!(benches, default_board_bench, random_board_bench);
criterion_main!(benches);
