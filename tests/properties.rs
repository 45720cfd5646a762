use grid_astar::{run_search, Config, Coord, EditMode, Grid, SearchError, Visualizer};

fn grid_with_endpoints(rows: usize, cols: usize, start: Coord, end: Coord) -> Grid {
    let mut grid = Grid::new(rows, cols);
    grid.set_start(start).unwrap();
    grid.set_end(end).unwrap();
    grid
}

/// On an empty grid every pair of cells is joined by a path as long as their Manhattan distance.
#[test]
fn open_grid_paths_are_manhattan() {
    let mut grid = Grid::new(4, 5);
    let coords: Vec<Coord> = grid.coords().collect();
    for &start in &coords {
        for &end in &coords {
            grid.set_start(start).unwrap();
            grid.set_end(end).unwrap();
            let outcome = run_search(&mut grid).unwrap();
            assert_eq!(outcome.hops(), start.manhattan_distance(end) as usize);
            assert_eq!(outcome.path.len(), outcome.hops() + 1);
        }
    }
}

#[test]
fn five_by_five_top_row() {
    let mut grid = grid_with_endpoints(5, 5, Coord::new(0, 0), Coord::new(0, 4));
    let outcome = run_search(&mut grid).unwrap();
    let expected: Vec<Coord> = (0..5).map(|col| Coord::new(0, col)).collect();
    assert_eq!(outcome.path, expected);
}

#[test]
fn full_middle_row_blocks() {
    let mut grid = grid_with_endpoints(3, 3, Coord::new(0, 0), Coord::new(2, 0));
    for col in 0..3 {
        grid.set_obstacle(Coord::new(1, col), true).unwrap();
    }
    assert_eq!(run_search(&mut grid), Err(SearchError::NoPathFound));
}

/// Running twice on an unchanged board gives the same path and exploration.
#[test]
fn runs_are_reproducible() {
    let mut vis = Visualizer::new(Config::default()).unwrap();
    vis.click(Coord::new(2, 7)).unwrap();
    vis.set_mode(EditMode::End);
    vis.click(Coord::new(17, 6)).unwrap();
    let first = vis.run().unwrap();
    let second = vis.run().unwrap();
    assert_eq!(first.path, second.path);
    assert_eq!(first.visited_order, second.visited_order);
    assert!(!first.visited_order.is_empty());
}

#[test]
fn start_equals_end() {
    let c = Coord::new(3, 3);
    let mut grid = grid_with_endpoints(5, 5, c, c);
    let outcome = run_search(&mut grid).unwrap();
    assert_eq!(outcome.path, vec![c]);
    assert!(outcome.visited_order.is_empty());
}

#[test]
fn missing_endpoints_are_distinct_from_no_path() {
    let mut grid = Grid::new(3, 3);
    let missing = run_search(&mut grid).unwrap_err();
    assert_eq!(missing, SearchError::MissingEndpoints);
    assert_ne!(missing, SearchError::NoPathFound);
}
