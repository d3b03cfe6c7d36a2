use super::*;

/// Uniform random placement that keeps the first-clicked cell and its
/// Chebyshev neighbors mine-free, so the first reveal always opens a
/// zero-adjacency cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RandomMineGenerator {
    seed: u64,
    safe_center: Coord2,
}

impl RandomMineGenerator {
    pub fn new(seed: u64, safe_center: Coord2) -> Self {
        Self { seed, safe_center }
    }

    /// Size of the safe zone around `center`, clamped to the board edges.
    fn safe_zone_cells(center: Coord2, size: Coord2) -> CellCount {
        let span = |c: Coord, end: Coord| {
            let lo = c.saturating_sub(1);
            let hi = c.saturating_add(1).min(end.saturating_sub(1));
            hi.saturating_sub(lo) + 1
        };
        mult(span(center.0, size.0), span(center.1, size.1))
    }
}

impl MineGenerator for RandomMineGenerator {
    fn generate(self, config: GameConfig) -> Result<Array2<bool>> {
        use rand::prelude::*;

        let size = config.size();
        let eligible = config
            .total_cells()
            .saturating_sub(Self::safe_zone_cells(self.safe_center, size));

        // Rejection sampling below would spin forever on an overfull
        // board, so refuse the configuration up front.
        if config.mines > eligible {
            log::warn!(
                "cannot place {} mines outside the safe zone, only {} cells eligible",
                config.mines,
                eligible
            );
            return Err(GameError::TooManyMines);
        }

        let mut mask: Array2<bool> = Array2::default(size.to_nd_index());
        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut placed: CellCount = 0;

        while placed < config.mines {
            let coords: Coord2 = (
                rng.random_range(0..size.0),
                rng.random_range(0..size.1),
            );
            if chebyshev_adjacent(coords, self.safe_center) || mask[coords.to_nd_index()] {
                continue;
            }
            mask[coords.to_nd_index()] = true;
            placed += 1;
        }

        log::debug!(
            "placed {} mines on a {}x{} board, first click at {:?}",
            placed,
            size.0,
            size.1,
            self.safe_center
        );
        Ok(mask)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mine_count(mask: &Array2<bool>) -> usize {
        mask.iter().filter(|&&is_mine| is_mine).count()
    }

    #[test]
    fn places_exactly_the_requested_mines() {
        for seed in 0..16 {
            let mask = RandomMineGenerator::new(seed, (4, 4))
                .generate(GameConfig::new(9, 9, 10))
                .unwrap();
            assert_eq!(mine_count(&mask), 10);
        }
    }

    #[test]
    fn safe_zone_around_first_click_stays_clear() {
        for seed in 0..16 {
            let mask = RandomMineGenerator::new(seed, (4, 4))
                .generate(GameConfig::new(9, 9, 10))
                .unwrap();
            for row in 3..=5 {
                for col in 3..=5 {
                    assert!(!mask[[row, col]], "mine inside safe zone at ({row}, {col})");
                }
            }
        }
    }

    #[test]
    fn safe_zone_is_clamped_at_the_corner() {
        // 2x2 board, corner click: the whole board is the safe zone.
        let result = RandomMineGenerator::new(0, (0, 0)).generate(GameConfig::new(2, 2, 1));
        assert_eq!(result, Err(GameError::TooManyMines));
    }

    #[test]
    fn overfull_board_is_rejected_instead_of_looping() {
        let result = RandomMineGenerator::new(0, (1, 1)).generate(GameConfig::new(3, 3, 8));
        assert_eq!(result, Err(GameError::TooManyMines));
    }

    #[test]
    fn zero_dimension_config_is_rejected() {
        let result = RandomMineGenerator::new(0, (0, 0)).generate(GameConfig::new(0, 5, 1));
        assert_eq!(result, Err(GameError::TooManyMines));

        let result = RandomMineGenerator::new(0, (0, 0)).generate(GameConfig::new(5, 0, 1));
        assert_eq!(result, Err(GameError::TooManyMines));
    }

    #[test]
    fn tightest_feasible_budget_fills_every_eligible_cell() {
        // Corner click on 3x3 leaves 5 eligible cells.
        let mask = RandomMineGenerator::new(7, (0, 0))
            .generate(GameConfig::new(3, 3, 5))
            .unwrap();
        assert_eq!(mine_count(&mask), 5);
        assert!(!mask[[0, 0]]);
        assert!(!mask[[0, 1]]);
        assert!(!mask[[1, 0]]);
        assert!(!mask[[1, 1]]);
    }
}
