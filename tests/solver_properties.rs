use std::collections::{HashMap, VecDeque};

use rand::{rngs::StdRng, SeedableRng};
use sliding_puzzle::{Board, Error, Solver, SolverConfig};

fn board(rows: &[&[u32]]) -> Board {
    Board::new(rows.iter().map(|row| row.to_vec()).collect()).unwrap()
}

fn assert_valid_solution(initial: &Board, solver: &Solver) {
    let moves = solver.moves().expect("solvable");
    let solution = solver.solution();

    assert_eq!(solution.first(), Some(initial));
    assert!(solution.last().is_some_and(Board::is_goal));
    assert_eq!(solution.len() - 1, moves);
    for pair in solution.windows(2) {
        assert!(
            pair[0].neighbors().any(|next| next == pair[1]),
            "illegal slide from\n{}\nto\n{}",
            pair[0],
            pair[1]
        );
    }
    assert_eq!(solver.steps().len(), moves);
}

/// Exact distance to the goal for every board reachable from it.
fn breadth_first_distances(size: usize) -> HashMap<Board, usize> {
    let goal = Board::goal(size);
    let mut distances = HashMap::from([(goal.clone(), 0)]);
    let mut queue = VecDeque::from([goal]);
    while let Some(board) = queue.pop_front() {
        let next_distance = distances[&board] + 1;
        for neighbor in board.neighbors() {
            if !distances.contains_key(&neighbor) {
                distances.insert(neighbor.clone(), next_distance);
                queue.push_back(neighbor);
            }
        }
    }
    distances
}

#[test]
fn solved_board_yields_itself() {
    let goal = board(&[&[1, 2, 3], &[4, 5, 6], &[7, 8, 0]]);
    let solver = Solver::new(goal.clone()).unwrap();
    assert_eq!(solver.moves(), Some(0));
    assert_eq!(solver.solution(), &[goal]);
}

#[test]
fn board_and_twin_have_opposite_outcomes() {
    let initial = board(&[&[1, 2, 3], &[4, 6, 5], &[7, 0, 8]]);
    let twin = initial.twin().unwrap();

    let direct = Solver::new(initial.clone()).unwrap();
    let mirrored = Solver::new(twin.clone()).unwrap();

    assert_ne!(direct.is_solvable(), mirrored.is_solvable());
    assert!(!direct.is_solvable());
    assert!(direct.solution().is_empty());
    assert_valid_solution(&twin, &mirrored);
}

#[test]
fn every_two_by_two_board_matches_breadth_first_search() {
    let distances = breadth_first_distances(2);
    assert_eq!(distances.len(), 12);

    let mut tiles = [0u32, 1, 2, 3];
    let mut boards = Vec::new();
    permutations(&mut tiles, 0, &mut boards);
    assert_eq!(boards.len(), 24);

    for initial in boards {
        let solver = Solver::new(initial.clone()).unwrap();
        match distances.get(&initial) {
            Some(&expected) => {
                assert_eq!(solver.moves(), Some(expected), "{initial}");
                assert_valid_solution(&initial, &solver);
            }
            None => assert!(!solver.is_solvable(), "{initial}"),
        }
        assert_eq!(solver.is_solvable(), initial.is_solvable());
    }
}

fn permutations(tiles: &mut [u32; 4], start: usize, out: &mut Vec<Board>) {
    if start == tiles.len() {
        out.push(Board::from_tiles(2, tiles.to_vec()).unwrap());
        return;
    }
    for i in start..tiles.len() {
        tiles.swap(start, i);
        permutations(tiles, start + 1, out);
        tiles.swap(start, i);
    }
}

#[test]
fn scrambled_boards_are_solved_optimally_enough() {
    let mut rng = StdRng::seed_from_u64(2024);
    for size in [3, 4] {
        for steps in [0, 1, 5, 12, 18] {
            let initial = Board::scrambled(size, steps, &mut rng);
            let solver = Solver::new(initial.clone()).unwrap();
            assert_valid_solution(&initial, &solver);

            let moves = solver.moves().unwrap();
            assert!(moves <= steps, "{moves} > {steps} for\n{initial}");
            assert!(moves >= initial.manhattan());
            assert_eq!(moves % 2, steps % 2);
        }
    }
}

#[test]
fn twins_of_scrambled_boards_are_unsolvable() {
    let mut rng = StdRng::seed_from_u64(7);
    for size in [2, 3, 4] {
        for _ in 0..5 {
            let solvable = Board::scrambled(size, 14, &mut rng);
            let twin = solvable.twin().unwrap();
            let solver = Solver::new(twin).unwrap();
            assert!(!solver.is_solvable());
            assert_eq!(solver.moves(), None);
            assert!(solver.solution().is_empty());
        }
    }
}

#[test]
fn decision_agrees_with_parity_on_shuffled_boards() {
    let mut rng = StdRng::seed_from_u64(99);
    for _ in 0..4 {
        let initial = Board::shuffled(3, &mut rng);
        let solver = Solver::new(initial.clone()).unwrap();
        assert_eq!(solver.is_solvable(), initial.is_solvable(), "{initial}");
        if solver.is_solvable() {
            assert_valid_solution(&initial, &solver);
        }
    }
}

#[test]
fn repeated_solves_are_identical() {
    let initial = board(&[&[8, 1, 3], &[4, 0, 2], &[7, 6, 5]]);
    let first = Solver::new(initial.clone()).unwrap();
    let second = Solver::new(initial).unwrap();
    assert_eq!(first.moves(), second.moves());
    assert_eq!(first.solution(), second.solution());
    assert_eq!(first.expanded(), second.expanded());
}

#[test]
fn expansion_limit_stops_the_search() {
    let initial = board(&[&[8, 1, 3], &[4, 0, 2], &[7, 6, 5]]);
    let config = SolverConfig::new().with_max_expansions(10);
    let err = Solver::with_config(initial.clone(), config).unwrap_err();
    assert!(matches!(err, Error::SearchLimit { expansions } if expansions > 10));

    let generous = SolverConfig::new().with_max_expansions(1_000_000);
    let solver = Solver::with_config(initial.clone(), generous).unwrap();
    assert_valid_solution(&initial, &solver);
    assert!(solver.expanded() <= 1_000_000);
}

#[test]
fn loads_and_solves_text_input() {
    let text = "3\n 0  1  3\n 4  2  5\n 7  8  6\n";
    let initial = Board::load(text.as_bytes()).unwrap();
    let solver = Solver::new(initial.clone()).unwrap();
    assert_eq!(solver.moves(), Some(4));
    assert_valid_solution(&initial, &solver);
    assert_eq!(
        solver.solution().last().map(ToString::to_string).as_deref(),
        Some("3\n 1  2  3\n 4  5  6\n 7  8  0")
    );
}
