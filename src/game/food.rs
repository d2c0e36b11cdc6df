use super::difficulty::Difficulty;
use super::grid::Bounds;
use crate::consts;
use rand::{
    distr::{Bernoulli, Distribution},
    seq::IteratorRandom,
    Rng,
};
use ratatui::layout::Position;
use std::collections::HashSet;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) enum FoodKind {
    Regular,
    Special,
}

impl FoodKind {
    /// The nominal point value of the food
    pub(crate) fn value(self) -> u32 {
        match self {
            FoodKind::Regular => consts::REGULAR_FOOD_VALUE,
            FoodKind::Special => consts::SPECIAL_FOOD_VALUE,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) struct Food {
    pub(crate) position: Position,
    pub(crate) kind: FoodKind,
}

impl Food {
    pub(crate) fn new(position: Position, kind: FoodKind) -> Food {
        Food { position, kind }
    }

    pub(crate) fn value(self) -> u32 {
        self.kind.value()
    }

    /// The number of points awarded for eating this food.  Regular food is
    /// worth double on [`Difficulty::Hard`]; special food is always worth its
    /// nominal value.
    pub(crate) fn points(self, difficulty: Difficulty) -> u32 {
        match (self.kind, difficulty) {
            (FoodKind::Regular, Difficulty::Hard) => consts::HARD_REGULAR_FOOD_POINTS,
            _ => self.value(),
        }
    }

    /// Place a new food on a cell of `bounds` chosen uniformly at random from
    /// among those not in `occupied`.  Returns `None` if every cell is
    /// occupied.
    pub(crate) fn spawn<R: Rng>(
        bounds: Bounds,
        occupied: &HashSet<Position>,
        rng: &mut R,
    ) -> Option<Food> {
        let position = bounds
            .positions()
            .filter(|p| !occupied.contains(p))
            .choose(rng)?;
        debug_assert!(
            bounds.contains(position),
            "food placed outside the grid at {position:?}"
        );
        let special = Bernoulli::new(consts::SPECIAL_FOOD_PROBABILITY)
            .expect("SPECIAL_FOOD_PROBABILITY should be between 0 and 1")
            .sample(rng);
        let kind = if special {
            FoodKind::Special
        } else {
            FoodKind::Regular
        };
        Some(Food { position, kind })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;
    use rstest::rstest;

    const RNG_SEED: u64 = 0x0123456789ABCDEF;

    #[rstest]
    #[case(FoodKind::Regular, Difficulty::Easy, 1)]
    #[case(FoodKind::Regular, Difficulty::Medium, 1)]
    #[case(FoodKind::Regular, Difficulty::Hard, 2)]
    #[case(FoodKind::Special, Difficulty::Easy, 3)]
    #[case(FoodKind::Special, Difficulty::Medium, 3)]
    #[case(FoodKind::Special, Difficulty::Hard, 3)]
    fn test_points(#[case] kind: FoodKind, #[case] difficulty: Difficulty, #[case] points: u32) {
        let food = Food::new(Position::new(3, 4), kind);
        assert_eq!(food.points(difficulty), points);
    }

    #[test]
    fn spawn_avoids_occupied() {
        let bounds = Bounds::square(20);
        let occupied = bounds
            .positions()
            .filter(|p| p.y < 19 || p.x < 17)
            .collect::<HashSet<_>>();
        let mut rng = ChaCha12Rng::seed_from_u64(RNG_SEED);
        for _ in 0..50 {
            let food = Food::spawn(bounds, &occupied, &mut rng).unwrap();
            assert!(!occupied.contains(&food.position));
            assert!(bounds.contains(food.position));
        }
    }

    #[test]
    fn spawn_last_free_cell() {
        let bounds = Bounds::square(20);
        let mut occupied = bounds.positions().collect::<HashSet<_>>();
        occupied.remove(&Position::new(7, 13));
        let mut rng = ChaCha12Rng::seed_from_u64(RNG_SEED);
        let food = Food::spawn(bounds, &occupied, &mut rng).unwrap();
        assert_eq!(food.position, Position::new(7, 13));
    }

    #[test]
    fn spawn_on_full_grid() {
        let bounds = Bounds::square(20);
        let occupied = bounds.positions().collect::<HashSet<_>>();
        let mut rng = ChaCha12Rng::seed_from_u64(RNG_SEED);
        assert_eq!(Food::spawn(bounds, &occupied, &mut rng), None);
    }

    #[test]
    fn spawn_mixes_kinds() {
        let bounds = Bounds::square(20);
        let occupied = HashSet::new();
        let mut rng = ChaCha12Rng::seed_from_u64(RNG_SEED);
        let specials = (0..1000)
            .filter_map(|_| Food::spawn(bounds, &occupied, &mut rng))
            .filter(|f| f.kind == FoodKind::Special)
            .count();
        assert!((120..=280).contains(&specials), "{specials} special foods");
    }
}
