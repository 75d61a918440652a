use log::trace;

use crate::{
    circuits::{Element, ElementKind},
    direction::Direction4,
};

use super::Grid;

/// Connected groups of wire cells, indexed by net id.
struct WireNets {
    /// Net id per cell, `None` for non-wire cells.
    net_of: Vec<Option<usize>>,
    /// Signal driven into each net by its neighbors in the pre-tick state.
    drive: Vec<bool>,
}

impl WireNets {
    fn build(grid: &Grid) -> Self {
        let mut net_of = vec![None; grid.cells.len()];
        let mut drive = vec![];
        let mut stack = vec![];

        for start in 0..grid.cells.len() {
            if net_of[start].is_some() || !grid.is_wire(start) {
                continue;
            }

            let net = drive.len();
            let mut driven = false;
            net_of[start] = Some(net);
            stack.push(start);

            while let Some(index) = stack.pop() {
                for (dir, neighbor) in grid.neighbors(index) {
                    if grid.is_wire(neighbor) {
                        if net_of[neighbor].is_none() {
                            net_of[neighbor] = Some(net);
                            stack.push(neighbor);
                        }
                    } else if let Some(element) = &grid.cells[neighbor] {
                        driven |= element.kind().outputs()[dir.inverse()] && element.signal();
                    }
                }
            }

            drive.push(driven);
        }

        Self { net_of, drive }
    }

    fn signal(&self, index: usize) -> Option<bool> {
        self.net_of[index].map(|net| self.drive[net])
    }
}

impl Grid {
    fn is_wire(&self, index: usize) -> bool {
        matches!(&self.cells[index], Some(e) if e.kind() == ElementKind::Wire)
    }

    fn neighbors(&self, index: usize) -> impl Iterator<Item = (Direction4, usize)> + '_ {
        let (x, y) = self.pos(index);
        Direction4::ALL.into_iter().filter_map(move |dir| {
            dir.move_pos(x, y, self.width, self.height)
                .map(|(nx, ny)| (dir, ny * self.width + nx))
        })
    }

    /// Signal arriving at side `dir` of the cell, `None` if nothing is connected there.
    fn input_signal(&self, nets: &WireNets, index: usize, dir: Direction4) -> Option<bool> {
        let (x, y) = self.pos(index);
        let (nx, ny) = dir.move_pos(x, y, self.width, self.height)?;
        let neighbor = ny * self.width + nx;

        if let Some(signal) = nets.signal(neighbor) {
            return Some(signal);
        }

        let element = self.cells[neighbor].as_ref()?;
        element.kind().outputs()[dir.inverse()].then(|| element.signal())
    }

    fn compute_next(&self, nets: &WireNets, index: usize) -> Option<bool> {
        let element: &Element = self.cells[index].as_ref()?;
        if let Some(signal) = nets.signal(index) {
            return Some(signal);
        }

        let sides = element.kind().inputs();
        let inputs = sides.sides().map(|dir| self.input_signal(nets, index, dir));

        Some(element.compute_next(inputs))
    }

    /// Next signal of every cell, visiting cells in `order`. Reads pre-tick state only.
    fn next_signals(&self, order: impl IntoIterator<Item = usize>) -> Vec<Option<bool>> {
        let nets = WireNets::build(self);
        let mut next = vec![None; self.cells.len()];
        for index in order {
            next[index] = self.compute_next(&nets, index);
        }
        next
    }

    fn commit(&mut self, next: Vec<Option<bool>>) {
        for (cell, signal) in self.cells.iter_mut().zip(next) {
            if let (Some(element), Some(signal)) = (cell, signal) {
                element.commit(signal);
            }
        }
    }

    /// Advances every element by one synchronous step.
    ///
    /// All next signals are computed from the current state before any of them is
    /// written back, so feedback loops see the same prior instant everywhere.
    pub fn update(&mut self) {
        let next = self.next_signals(0..self.cells.len());
        self.commit(next);
        trace!("grid updated");
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::circuits::GateKind;

    fn place(grid: &mut Grid, x: usize, y: usize, element: Element) {
        grid.set_element(Some(element), x, y).unwrap();
    }

    #[test]
    fn source_drives_output_through_wire() {
        let mut grid = Grid::new(3, 1).unwrap();
        place(&mut grid, 0, 0, Element::source(true));
        place(&mut grid, 1, 0, Element::wire());
        place(&mut grid, 2, 0, Element::output());

        grid.update();
        assert!(grid.signal_at(1, 0).unwrap());
        assert!(grid.signal_at(2, 0).unwrap());

        grid.activate(0, 0).unwrap();
        grid.update();
        assert!(!grid.signal_at(1, 0).unwrap());
        assert!(!grid.signal_at(2, 0).unwrap());
    }

    #[test]
    fn whole_net_switches_in_one_tick() {
        let mut grid = Grid::new(6, 2).unwrap();
        place(&mut grid, 0, 0, Element::source(true));
        for x in 1..5 {
            place(&mut grid, x, 0, Element::wire());
        }
        place(&mut grid, 4, 1, Element::wire());
        place(&mut grid, 5, 1, Element::output());

        grid.update();
        assert!(grid.signal_at(5, 1).unwrap());
    }

    #[test]
    fn gate_output_lags_one_tick() {
        // S N W O
        let mut grid = Grid::new(5, 2).unwrap();
        place(&mut grid, 0, 1, Element::source(false));
        place(&mut grid, 1, 1, Element::gate(GateKind::Not));
        place(&mut grid, 2, 1, Element::wire());
        place(&mut grid, 3, 1, Element::output());

        grid.update();
        assert!(grid.signal_at(1, 1).unwrap());
        assert!(!grid.signal_at(3, 1).unwrap());

        grid.update();
        assert!(grid.signal_at(3, 1).unwrap());
    }

    #[test]
    fn gates_do_not_drive_their_inputs() {
        // The wire above the gate stays low while the gate output is high.
        let mut grid = Grid::new(2, 3).unwrap();
        place(&mut grid, 0, 0, Element::wire());
        place(&mut grid, 0, 1, Element::gate(GateKind::Nand));
        place(&mut grid, 1, 1, Element::wire());

        grid.update();
        assert!(grid.signal_at(0, 1).unwrap());
        grid.update();
        assert!(!grid.signal_at(0, 0).unwrap());
        assert!(grid.signal_at(1, 1).unwrap());
    }

    #[test]
    fn and_gate_reads_up_and_down() {
        let mut grid = Grid::new(2, 3).unwrap();
        place(&mut grid, 0, 0, Element::source(true));
        place(&mut grid, 0, 1, Element::gate(GateKind::And));
        place(&mut grid, 0, 2, Element::source(true));
        place(&mut grid, 1, 1, Element::output());

        grid.update();
        grid.update();
        assert!(grid.signal_at(1, 1).unwrap());

        grid.activate(0, 2).unwrap();
        grid.update();
        grid.update();
        assert!(!grid.signal_at(1, 1).unwrap());
    }

    #[test]
    fn not_ring_oscillates() {
        // W W W
        // W N W
        let mut grid = Grid::new(3, 2).unwrap();
        for (x, y) in [(0, 0), (1, 0), (2, 0), (0, 1), (2, 1)] {
            place(&mut grid, x, y, Element::wire());
        }
        place(&mut grid, 1, 1, Element::gate(GateKind::Not));

        let mut seen = vec![];
        for _ in 0..4 {
            grid.update();
            seen.push(grid.signal_at(1, 1).unwrap());
        }
        assert_eq!(seen, vec![true, false, true, false]);
    }

    /// Cross-coupled NOR gates. `a` at (2, 2) reads `b`'s net from above and S
    /// from below, `b` at (7, 5) reads R from above and `a`'s net from below.
    fn sr_latch() -> Grid {
        let mut grid = Grid::new(10, 8).unwrap();
        place(&mut grid, 2, 3, Element::source(false));
        place(&mut grid, 2, 2, Element::gate(GateKind::Nor));
        place(&mut grid, 7, 6, Element::source(false));
        place(&mut grid, 7, 5, Element::gate(GateKind::Nor));

        let a_net = [(3, 2), (4, 2), (5, 2), (5, 3), (5, 4), (6, 4), (7, 4)];
        let b_net = (0..=5)
            .rev()
            .map(|y| (9, y))
            .chain((2..=8).rev().map(|x| (x, 0)))
            .chain([(8, 5), (2, 1)]);
        for (x, y) in a_net.into_iter().chain(b_net) {
            place(&mut grid, x, y, Element::wire());
        }
        grid
    }

    fn run(grid: &mut Grid, ticks: usize) -> (bool, bool) {
        for _ in 0..ticks {
            grid.update();
        }
        (grid.signal_at(2, 2).unwrap(), grid.signal_at(7, 5).unwrap())
    }

    #[test]
    fn sr_latch_holds_state() {
        let mut grid = sr_latch();

        grid.activate(2, 3).unwrap();
        assert_eq!(run(&mut grid, 3), (false, true));
        grid.activate(2, 3).unwrap();
        assert_eq!(run(&mut grid, 3), (false, true));

        grid.activate(7, 6).unwrap();
        assert_eq!(run(&mut grid, 3), (true, false));
        grid.activate(7, 6).unwrap();
        assert_eq!(run(&mut grid, 3), (true, false));
    }

    #[test]
    fn empty_grid_update_is_noop() {
        let mut grid = Grid::new(4, 4).unwrap();
        grid.update();
        assert!(grid.is_empty());
    }

    fn circuit() -> Grid {
        let mut grid = Grid::new(6, 4).unwrap();
        place(&mut grid, 0, 0, Element::source(true));
        place(&mut grid, 1, 0, Element::wire());
        place(&mut grid, 2, 0, Element::wire());
        place(&mut grid, 2, 1, Element::gate(GateKind::Xor));
        place(&mut grid, 2, 2, Element::source(false));
        place(&mut grid, 3, 1, Element::wire());
        place(&mut grid, 4, 1, Element::gate(GateKind::Not));
        place(&mut grid, 5, 1, Element::output());
        place(&mut grid, 3, 2, Element::wire());
        place(&mut grid, 3, 3, Element::gate(GateKind::Nor));
        place(&mut grid, 4, 3, Element::wire());
        place(&mut grid, 5, 3, Element::output());
        grid
    }

    proptest! {
        #[test]
        fn update_is_order_independent(
            order in Just((0..24).collect::<Vec<usize>>()).prop_shuffle(),
            ticks in 0usize..4,
        ) {
            let mut grid = circuit();
            for _ in 0..ticks {
                grid.update();
            }

            let mut shuffled = grid.clone();
            let next = shuffled.next_signals(order);
            shuffled.commit(next);

            grid.update();
            prop_assert_eq!(grid, shuffled);
        }
    }
}
