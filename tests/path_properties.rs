use panelgrid_engine::pathfinding::search;
use panelgrid_engine::{
    shortest_path, total_distance, ActiveCellSet, Coord, GridConfig, GridModel, LayoutMask,
};

fn full(sections: u32, rows: u32, cols: u32) -> GridModel {
    GridModel::new(GridConfig::new(sections, rows, cols).unwrap())
}

fn every_pair(active: &ActiveCellSet) -> Vec<(Coord, Coord)> {
    let cells: Vec<Coord> = active.iter().collect();
    cells
        .iter()
        .flat_map(|&a| cells.iter().map(move |&b| (a, b)))
        .collect()
}

#[test]
fn full_grid_paths_are_manhattan_length() {
    let grid = full(2, 3, 3);
    for (a, b) in every_pair(grid.active()) {
        let path = shortest_path(a, b, grid.active()).unwrap();
        assert_eq!(path.len() as u32, a.manhattan(b) + 1, "{a} -> {b}");
        assert_eq!(path.start(), a);
        assert_eq!(path.end(), b);
        assert!(path.is_valid_in(grid.active()));
    }
}

#[test]
fn paths_are_symmetric_in_length() {
    let mut grid = full(1, 4, 4);
    let mut mask = grid.editable_mask();
    for coord in [(1, 1), (1, 2), (2, 1)] {
        mask.set(Coord::from(coord), false);
    }
    grid.apply_mask(mask).unwrap();

    for (a, b) in every_pair(grid.active()) {
        let there = shortest_path(a, b, grid.active()).unwrap();
        let back = shortest_path(b, a, grid.active()).unwrap();
        assert_eq!(total_distance(&there), total_distance(&back));
    }
}

#[test]
fn distance_never_below_lead_in_and_out() {
    let grid = full(1, 2, 2);
    for (a, b) in every_pair(grid.active()) {
        let path = shortest_path(a, b, grid.active()).unwrap();
        assert!(total_distance(&path) >= 400);
    }
}

#[test]
fn masked_cells_never_appear_on_a_path() {
    let mut grid = full(1, 5, 5);
    let rows = vec![
        vec![true, true, true, true, true],
        vec![true, false, false, false, true],
        vec![true, true, true, false, true],
        vec![false, false, true, false, true],
        vec![true, true, true, true, true],
    ];
    grid.apply_mask(LayoutMask::from_rows(rows).unwrap()).unwrap();

    let path = shortest_path(Coord::new(2, 0), Coord::new(4, 0), grid.active()).unwrap();
    assert!(path.cells().iter().all(|&c| grid.is_active(c)));
    // (2,0) -> (2,2) -> (4,2) -> (4,0)
    assert_eq!(path.len(), 7);
    assert_eq!(total_distance(&path), 900);
}

#[test]
fn search_cost_matches_closed_form_on_masked_grid() {
    let mut grid = full(2, 4, 3);
    let mut mask = grid.editable_mask();
    for coord in [(0, 1), (1, 1), (2, 4), (3, 3), (1, 3)] {
        mask.set(Coord::from(coord), false);
    }
    grid.apply_mask(mask).unwrap();

    let mut found = 0;
    for (a, b) in every_pair(grid.active()) {
        if let Ok(hit) = search(a, b, grid.active()) {
            assert_eq!(hit.distance_mm, total_distance(&hit.path), "{a} -> {b}");
            assert_eq!(hit.distance_mm, hit.path.distance_mm());
            found += 1;
        }
    }
    assert!(found > grid.active().len());
}
